//! Loading `valuekit.toml` and applying it to storage conversion

use std::fs;
use tempfile::TempDir;
use valuekit::{
    ConfigError, StoreConverter, StoreValue, Trilean, TrileanStorage, ValuesConfig,
    CONFIG_FILE_NAME,
};

#[test]
fn test_default_file_is_written_once_and_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);

    ValuesConfig::write_default_if_missing(&path).unwrap();
    fs::write(&path, "trilean_storage = \"signed\"\n").unwrap();
    ValuesConfig::write_default_if_missing(&path).unwrap();

    let config = ValuesConfig::from_file(&path).unwrap();
    assert_eq!(config.trilean_storage().unwrap(), TrileanStorage::Signed);
}

#[test]
fn test_configured_converter_uses_encoding() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    ValuesConfig {
        trilean_storage: "unsigned".to_string(),
    }
    .write_to_file(&path)
    .unwrap();

    let converter = ValuesConfig::from_file(&path).unwrap().trilean_converter().unwrap();
    assert_eq!(converter.to_store(&Trilean::FALSE).unwrap(), StoreValue::Integer(2));
    assert_eq!(converter.from_store(StoreValue::Integer(0)).unwrap(), Trilean::NA);
}

#[test]
fn test_invalid_encoding_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "trilean_storage = \"boolean\"\n").unwrap();

    let err = ValuesConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { setting: "trilean_storage", .. }));
    assert!(err.to_string().contains("boolean"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = ValuesConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_empty_file_uses_defaults() {
    let config = ValuesConfig::from_toml_str("").unwrap();
    assert_eq!(config, ValuesConfig::default());
    assert_eq!(config.trilean_storage().unwrap(), TrileanStorage::Text);
}
