//! Membership, case handling and ordering of the closed value sets

use crate::common::*;
use std::collections::HashSet;
use valuekit::language_code::LANGUAGE_CODE_COUNT;
use valuekit::{EquatableValue, LanguageCode, SignModality, TreebankPosTag, UniversalPosTag};

#[test]
fn test_member_counts() {
    assert_eq!(LanguageCode::ALL.len(), LANGUAGE_CODE_COUNT);
    assert_eq!(TreebankPosTag::ALL.len(), 55);
    assert_eq!(UniversalPosTag::ALL.len(), 17);
    assert_eq!(SignModality::ALL.len(), 5);
}

#[test]
fn test_members_are_distinct_and_roundtrip() {
    init_tracing();
    let all_codes = LanguageCode::ALL;
    let codes: HashSet<_> = all_codes.iter().collect();
    assert_eq!(codes.len(), LANGUAGE_CODE_COUNT);
    for code in LanguageCode::ALL.iter() {
        assert_text_roundtrip(code);
        assert!(code.is_initialized());
    }
    for tag in TreebankPosTag::ALL.iter() {
        assert_text_roundtrip(tag);
    }
    for tag in UniversalPosTag::ALL.iter() {
        assert_text_roundtrip(tag);
    }
    for modality in SignModality::ALL.iter() {
        assert_text_roundtrip(modality);
    }
}

#[test]
fn test_language_codes_fold_case() {
    assert_eq!(LanguageCode::parse("De").unwrap(), LanguageCode::DE);
    assert_eq!(LanguageCode::DE.as_str().unwrap(), "de");
    assert!(LanguageCode::contains("de"));
    assert!(!LanguageCode::contains("DE"));
    assert!(LanguageCode::try_parse("xx").is_none());
    assert!(LanguageCode::try_parse("eng").is_none());
}

#[test]
fn test_tag_sets_are_case_sensitive() {
    assert!(UniversalPosTag::try_parse("noun").is_none());
    assert!(TreebankPosTag::try_parse("nn").is_none());
    assert!(SignModality::try_parse("Spoken").is_none());
    assert_eq!(
        TreebankPosTag::parse("NN").unwrap(),
        TreebankPosTag::NOUN_SINGULAR_OR_MASS
    );
}

#[test]
fn test_punctuation_tags() {
    assert_eq!(
        TreebankPosTag::parse("``").unwrap(),
        TreebankPosTag::OPENING_QUOTATION_MARK
    );
    assert_eq!(
        TreebankPosTag::parse("''").unwrap(),
        TreebankPosTag::CLOSING_QUOTATION_MARK_2
    );
    assert_ne!(
        TreebankPosTag::CLOSING_QUOTATION_MARK,
        TreebankPosTag::CLOSING_QUOTATION_MARK_2
    );
}

#[test]
fn test_treebank_categories() {
    assert!(TreebankPosTag::NOUN_SINGULAR_OR_MASS.is_noun());
    assert!(!TreebankPosTag::NOUN_SINGULAR_OR_MASS.is_verb());
    assert!(TreebankPosTag::parse("VBD").unwrap().is_verb());
    assert!(!TreebankPosTag::default().is_noun());
}

#[test]
fn test_uninitialized_members() {
    assert!(!LanguageCode::default().is_initialized());
    assert!(LanguageCode::default().as_str().unwrap_err().is_uninitialized());
    assert_eq!(format!("{:?}", UniversalPosTag::default()), "UniversalPosTag(<uninitialized>)");
    assert_eq!(format!("{:?}", UniversalPosTag::VERB), "UniversalPosTag(\"VERB\")");
}
