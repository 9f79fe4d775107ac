//! Storage converters: value types to stored primitives and back

use crate::common::*;
use valuekit::{
    Count, CountConverter, LanguageCode, OptionConverter, StoreConverter, StoreValue, Tag,
    TextConverter, TrileanConverter, TrileanStorage, ValueError,
};

#[test]
fn test_trilean_encodings() {
    let expected = [
        (TrileanStorage::Text, [StoreValue::Text("True".into()), StoreValue::Text("False".into()), StoreValue::Text("Unknown".into())]),
        (TrileanStorage::Signed, [StoreValue::Integer(1), StoreValue::Integer(0), StoreValue::Integer(-1)]),
        (TrileanStorage::Unsigned, [StoreValue::Integer(1), StoreValue::Integer(2), StoreValue::Integer(0)]),
    ];
    for (storage, stored) in expected {
        let converter = TrileanConverter::new(storage);
        for (value, raw) in trileans().into_iter().zip(stored) {
            assert_eq!(converter.to_store(&value).unwrap(), raw);
            assert_eq!(converter.from_store(raw).unwrap(), value);
        }
    }
}

#[test]
fn test_trilean_rejects_foreign_column_type() {
    init_tracing();
    let err = TrileanConverter::new(TrileanStorage::Signed)
        .from_store(StoreValue::Text("True".into()))
        .unwrap_err();
    assert_eq!(err.type_name, "Trilean");
    assert!(matches!(err.source, ValueError::Format { .. }));
}

#[test]
fn test_trilean_rejects_out_of_range_numbers() {
    let unsigned = TrileanConverter::new(TrileanStorage::Unsigned);
    let err = unsigned.from_store(StoreValue::Integer(-1)).unwrap_err();
    assert!(matches!(err.source, ValueError::InvalidTrileanNumber { .. }));
    assert_eq!(err.raw, "-1");

    let signed = TrileanConverter::new(TrileanStorage::Signed);
    assert!(signed.from_store(StoreValue::Integer(2)).is_err());
}

#[test]
fn test_text_converter_validates_on_read() {
    let converter = TextConverter::<Tag>::new();
    let tag = Tag::new("reviewed").unwrap();
    let stored = converter.to_store(&tag).unwrap();
    assert_eq!(stored, "reviewed");
    assert_eq!(converter.from_store(stored).unwrap(), tag);

    let err = converter.from_store("not a tag".to_string()).unwrap_err();
    assert_eq!(err.raw, "not a tag");
    assert!(err.to_string().contains("Tag"));
}

#[test]
fn test_text_converter_rejects_uninitialized() {
    let converter = TextConverter::<LanguageCode>::new();
    let err = converter.to_store(&LanguageCode::default()).unwrap_err();
    assert!(err.source.is_uninitialized());
}

#[test]
fn test_option_converter_passes_none_through() {
    let converter = OptionConverter::new(TextConverter::<LanguageCode>::new());
    assert_eq!(converter.to_store(&None).unwrap(), None);
    assert_eq!(converter.from_store(None).unwrap(), None);
    assert_eq!(
        converter.from_store(Some("FR".to_string())).unwrap(),
        Some(LanguageCode::FR)
    );
    assert!(converter.from_store(Some("zz".to_string())).is_err());
}

#[test]
fn test_count_converter() {
    let count = Count::new(1_000).unwrap();
    assert_eq!(CountConverter.to_store(&count).unwrap(), 1_000);
    assert_eq!(CountConverter.from_store(1_000).unwrap(), count);
    assert!(CountConverter.from_store(-1).is_err());
    assert!(CountConverter.from_store(i64::MAX).is_err());
}
