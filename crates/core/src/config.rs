//! Configuration via `valuekit.toml`
//!
//! Settings that affect how values cross the storage boundary. A default
//! file can be written with [`ValuesConfig::write_default_if_missing`]; edit
//! it and reload to change behaviour.

use crate::convert::{TrileanConverter, TrileanStorage};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "valuekit.toml";

/// Errors raised while reading or writing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("config file '{path}': {source}")]
    Io {
        /// Path of the config file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this configuration
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A setting has an unsupported value
    #[error("invalid {setting} '{value}' in valuekit.toml, expected one of: {expected}")]
    Invalid {
        /// Setting name
        setting: &'static str,
        /// Rejected value
        value: String,
        /// Accepted values
        expected: &'static str,
    },
}

/// Value-type configuration loaded from `valuekit.toml`.
///
/// # Example
///
/// ```toml
/// # Storage encoding for Trilean values: "text" (default), "signed" or "unsigned"
/// trilean_storage = "text"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuesConfig {
    /// Trilean storage encoding: `"text"`, `"signed"` or `"unsigned"`.
    #[serde(default = "default_trilean_storage")]
    pub trilean_storage: String,
}

fn default_trilean_storage() -> String {
    TrileanStorage::Text.as_str().to_string()
}

impl Default for ValuesConfig {
    fn default() -> Self {
        Self {
            trilean_storage: default_trilean_storage(),
        }
    }
}

impl ValuesConfig {
    /// Parse the Trilean storage setting.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for an unknown encoding.
    pub fn trilean_storage(&self) -> Result<TrileanStorage, ConfigError> {
        self.trilean_storage
            .parse()
            .map_err(|_| ConfigError::Invalid {
                setting: "trilean_storage",
                value: self.trilean_storage.clone(),
                expected: "\"text\", \"signed\", \"unsigned\"",
            })
    }

    /// A converter for the configured Trilean encoding.
    pub fn trilean_converter(&self) -> Result<TrileanConverter, ConfigError> {
        self.trilean_storage().map(TrileanConverter::new)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# valuekit configuration
#
# Storage encoding for Trilean values: "text" (default), "signed" or "unsigned"
#   "text"     = "True" / "False" / "Unknown"
#   "signed"   = 1 / 0 / -1
#   "unsigned" = 1 / 2 / 0
trilean_storage = "text"
"#
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ValuesConfig = toml::from_str(content)?;
        config.trilean_storage()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), trilean_storage = %config.trilean_storage, "Loaded config");
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}
