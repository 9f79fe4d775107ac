//! JSON serialization at the crate boundary

use serde::{Deserialize, Serialize};
use valuekit::{
    AgeInMonths, Count, Identifier, LanguageCode, Na, NaInt, Sign, SignModality, Tag, Trilean, WordText,
};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Entry {
    id: Identifier,
    language: LanguageCode,
    tags: Vec<Tag>,
    sign: Sign,
    uses: Count,
    age: AgeInMonths,
    verified: Trilean,
    rank: NaInt<u32>,
    note: Na<String>,
}

fn entry() -> Entry {
    Entry {
        id: Identifier::new_random_with(16, Some("entry")).unwrap(),
        language: LanguageCode::EN,
        tags: vec![Tag::new("animals").unwrap(), Tag::new("a1/core").unwrap()],
        sign: Sign::new(SignModality::SPOKEN, WordText::new("dog").unwrap()).unwrap(),
        uses: Count::new(42).unwrap(),
        age: AgeInMonths::new(30),
        verified: Trilean::NA,
        rank: NaInt::NA,
        note: Na::new("first pass".to_string()),
    }
}

#[test]
fn test_record_roundtrip() {
    let original = entry();
    let json = serde_json::to_string(&original).unwrap();
    let restored: Entry = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn test_wire_shapes() {
    let value = serde_json::to_value(entry()).unwrap();
    assert_eq!(value["language"], "en");
    assert_eq!(value["sign"], "spoken:dog");
    assert_eq!(value["uses"], 42);
    assert_eq!(value["age"], "2:6");
    assert_eq!(value["verified"], "Unknown");
    assert!(value["rank"].is_null());
    assert_eq!(value["note"], "first pass");
}

#[test]
fn test_trilean_accepts_loose_json() {
    let parsed: Vec<Trilean> = serde_json::from_str(r#"[true, false, null, "true", "NULL", ""]"#).unwrap();
    assert_eq!(
        parsed,
        vec![
            Trilean::TRUE,
            Trilean::FALSE,
            Trilean::NA,
            Trilean::TRUE,
            Trilean::NA,
            Trilean::NA
        ]
    );
    assert!(serde_json::from_str::<Trilean>("\"maybe\"").is_err());
}

#[test]
fn test_invalid_values_are_rejected_on_read() {
    assert!(serde_json::from_str::<Tag>("\"-bad\"").is_err());
    assert!(serde_json::from_str::<LanguageCode>("\"xx\"").is_err());
    assert!(serde_json::from_str::<Count>("9007199254740992").is_err());
    assert!(serde_json::from_str::<NaInt<u8>>("255").is_err());
    assert!(serde_json::from_str::<Sign>("\"spoken\"").is_err());
}

#[test]
fn test_uninitialized_values_do_not_serialize() {
    assert!(serde_json::to_string(&Tag::default()).is_err());
    assert!(serde_json::to_string(&Sign::default()).is_err());
}
