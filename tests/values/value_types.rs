//! Validation, text round trips and length bounds of the value types

use crate::common::*;
use proptest::prelude::*;
use std::fmt::{self, Write};
use valuekit::identifier::{MAX_ID_LENGTH, MIN_ID_LENGTH};
use valuekit::{
    AgeInMonths, Code, ComparableValue, Count, EquatableValue, Identifier, LanguageCode, PosTag,
    Sign, SignModality, Tag, TreebankPosTag, UniversalPosTag, ValueError, WordText, DEFAULT_ID_LENGTH, MAX_IDENTIFIER_LENGTH,
    MAX_JSON_SAFE_INTEGER, MAX_TAG_LENGTH,
};

fn assert_comparable<T: ComparableValue>() {}

#[test]
fn test_value_types_are_comparable() {
    assert_comparable::<Tag>();
    assert_comparable::<Code>();
    assert_comparable::<Identifier>();
    assert_comparable::<Count>();
    assert_comparable::<AgeInMonths>();
    assert_comparable::<WordText>();
    assert_comparable::<PosTag>();
}

proptest! {
    #[test]
    fn test_tag_roundtrip(text in "[a-zA-Z0-9][a-zA-Z0-9:/()-]{0,118}[a-zA-Z0-9]") {
        let tag = Tag::new(&text).unwrap();
        assert_text_roundtrip(&tag);
        assert_short_buffer_untouched(&tag);
    }

    #[test]
    fn test_tag_validation_matches_constructor(text in "\\PC{0,130}") {
        prop_assert_eq!(Tag::is_valid_tag(&text), Tag::new(&text).is_ok());
        prop_assert_eq!(Tag::try_parse(&text).is_some(), Tag::is_valid_tag(&text));
    }

    #[test]
    fn test_code_trims_and_roundtrips(text in "[ ]{0,3}[a-z0-9.]{0,32}[ ]{0,3}") {
        let code = Code::new(&text).unwrap();
        prop_assert_eq!(code.as_str(), text.trim());
        assert_text_roundtrip(&code);
    }

    #[test]
    fn test_count_roundtrip(value in 0..=MAX_JSON_SAFE_INTEGER) {
        let count = Count::new(value).unwrap();
        assert_text_roundtrip(&count);
        prop_assert_eq!(u64::from(count), value);
    }

    #[test]
    fn test_count_rejects_above_json_safe(value in (MAX_JSON_SAFE_INTEGER + 1)..=u64::MAX) {
        prop_assert!(Count::new(value).is_err());
    }

    #[test]
    fn test_age_roundtrip(months in any::<i32>()) {
        let age = AgeInMonths::new(months);
        assert_text_roundtrip(&age);
        prop_assert_eq!(age.years() * 12 + age.months(), months);
    }

    #[test]
    fn test_random_identifier_is_valid(length in MIN_ID_LENGTH..=MAX_ID_LENGTH, prefix in "[a-z][a-z0-9]{1,12}") {
        let id = Identifier::new_random_with(length, Some(&prefix)).unwrap();
        prop_assert_eq!(id.prefix(), Some(prefix.as_str()));
        prop_assert_eq!(id.id().map(str::len), Some(length));
        prop_assert!(Identifier::is_valid_identifier(id.as_str().unwrap()));
        assert_text_roundtrip(&id);
    }
}

#[test]
fn test_tag_bounds() {
    assert!(Tag::new("ab").is_ok());
    assert!(Tag::new("a").is_err());
    assert!(Tag::new(&"t".repeat(MAX_TAG_LENGTH)).is_ok());
    assert!(Tag::new(&"t".repeat(MAX_TAG_LENGTH + 1)).is_err());
    assert!(Tag::new("-ab").is_err());
    assert!(Tag::new("ab-").is_err());
    assert!(Tag::new("a b").is_err());
}

#[test]
fn test_uninitialized_values_fail_to_format() {
    assert!(Tag::default().format_to_string().unwrap_err().is_uninitialized());
    assert!(Identifier::default().format_to_string().unwrap_err().is_uninitialized());
    assert!(WordText::default().format_to_string().unwrap_err().is_uninitialized());
    assert!(!Tag::default().is_initialized());

    let mut text = String::new();
    assert!(write!(text, "{}", Tag::default()).is_err());
    assert!(text.parse::<Tag>().is_err());
}

/// A default either has no text form or its text parses back to the default
fn assert_default_text_is_faithful<T>()
where
    T: SpanSerializable + Default + PartialEq + fmt::Debug + fmt::Display,
{
    let default = T::default();
    let mut displayed = String::new();
    let shown = write!(displayed, "{}", default);
    match default.format_to_string() {
        Ok(text) => {
            assert_eq!(T::parse(&text).unwrap(), default, "{:?}", text);
            assert_eq!(displayed, text);
        }
        Err(err) => {
            assert!(err.is_uninitialized(), "{}", err);
            assert!(shown.is_err(), "displayed {:?}", displayed);
        }
    }
}

#[test]
fn test_every_default_text_is_faithful() {
    assert_default_text_is_faithful::<Tag>();
    assert_default_text_is_faithful::<Identifier>();
    assert_default_text_is_faithful::<Code>();
    assert_default_text_is_faithful::<Count>();
    assert_default_text_is_faithful::<AgeInMonths>();
    assert_default_text_is_faithful::<LanguageCode>();
    assert_default_text_is_faithful::<WordText>();
    assert_default_text_is_faithful::<Sign>();
    assert_default_text_is_faithful::<SignModality>();
    assert_default_text_is_faithful::<PosTag>();
    assert_default_text_is_faithful::<TreebankPosTag>();
    assert_default_text_is_faithful::<UniversalPosTag>();
    assert_default_text_is_faithful::<Trilean>();
}

#[test]
fn test_explicit_defaults_format() {
    assert_eq!(Code::default().format_to_string().unwrap(), "");
    assert_eq!(PosTag::default().format_to_string().unwrap(), "");
    assert_eq!(Count::default().format_to_string().unwrap(), "0");
    assert_eq!(AgeInMonths::default().format_to_string().unwrap(), "0:0");
}

#[test]
fn test_default_identifier() {
    let id = Identifier::new_random();
    assert_eq!(id.len(), DEFAULT_ID_LENGTH);
    assert_eq!(id.prefix(), None);
    assert_ne!(id, Identifier::new_random());
}

#[test]
fn test_identifier_total_length_bound() {
    let prefix = "p".repeat(23);
    let id = format!("{}_{}", prefix, "x".repeat(MAX_ID_LENGTH));
    assert!(id.len() > MAX_IDENTIFIER_LENGTH);
    assert!(Identifier::new(&id).is_err());
    assert!(Identifier::new_random_with(MAX_ID_LENGTH, Some(&prefix)).is_err());
}

#[test]
fn test_parse_errors_are_format_errors() {
    assert!(matches!(Tag::parse("!"), Err(ValueError::Format { type_name: "Tag", .. })));
    assert!(matches!(Count::parse("-1"), Err(ValueError::Format { .. })));
    assert!(matches!(AgeInMonths::parse("3"), Err(ValueError::Format { .. })));
    assert!(matches!(
        Identifier::parse("short"),
        Err(ValueError::Format { type_name: "Identifier", .. })
    ));
}

#[test]
fn test_from_value_rejects_invalid_underlying() {
    assert!(matches!(
        Count::from_value(MAX_JSON_SAFE_INTEGER + 1),
        Err(ValueError::OutOfRange { .. })
    ));
    assert!(Count::try_from_value(5).is_some());
    assert!(Code::try_from_value(" padded".to_string()).is_none());
}

#[test]
fn test_sign_composes_parts() {
    let sign = Sign::new(SignModality::WRITTEN, WordText::new("well-known").unwrap()).unwrap();
    assert_text_roundtrip(&sign);
    assert_short_buffer_untouched(&sign);
    assert_eq!(sign.to_string(), "written:well-known");
    let templated = Sign::parse("spoken:{{ child_name }}").unwrap();
    assert!(templated.word().is_template());
}

#[test]
fn test_parse_utf8_rejects_invalid_bytes() {
    assert!(WordText::parse_utf8(&[0xff, 0xfe]).is_err());
    assert_eq!(WordText::parse_utf8("caf\u{e9}".as_bytes()).unwrap().len(), 4);
}
