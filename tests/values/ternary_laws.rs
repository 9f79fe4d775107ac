//! NA-aware equality across Option, Na, NaInt and Trilean

use proptest::prelude::*;
use valuekit::{
    ensure_known, equal_and_neither_na, equal_or_both_na, equal_or_either_na, equals, Na, NaInt,
    NaValue, TernaryEq, Trilean,
};

proptest! {
    #[test]
    fn test_option_family_is_consistent(a in proptest::option::of(0u8..4), b in proptest::option::of(0u8..4)) {
        let eq = equals(&a, &b);
        prop_assert_eq!(equal_and_neither_na(&a, &b), eq.is_true());
        prop_assert_eq!(equal_or_either_na(&a, &b), !eq.is_false());
        prop_assert_eq!(equal_or_both_na(&a, &b), a == b);
        prop_assert!(!equal_and_neither_na(&a, &b) || equal_or_both_na(&a, &b));
        prop_assert!(!equal_or_both_na(&a, &b) || equal_or_either_na(&a, &b));
    }

    #[test]
    fn test_na_wrapper_agrees_with_option(a in proptest::option::of(any::<i16>()), b in proptest::option::of(any::<i16>())) {
        let (na_a, na_b) = (Na::from(a), Na::from(b));
        prop_assert_eq!(na_a.ternary_eq(&na_b), equals(&a, &b));
        prop_assert_eq!(na_a == na_b, equal_or_both_na(&a, &b));
        prop_assert_eq!(na_a.into_option(), a);
    }

    #[test]
    fn test_na_int_agrees_with_option(a in proptest::option::of(0i32..100), b in proptest::option::of(0i32..100)) {
        let x = NaInt::from_option(a).unwrap();
        let y = NaInt::from_option(b).unwrap();
        prop_assert_eq!(x.ternary_eq(&y), equals(&a, &b));
        prop_assert_eq!(x == y, a == b);
        prop_assert_eq!(x.to_option(), a);
    }

    #[test]
    fn test_na_int_text_roundtrip(v in proptest::option::of(any::<i64>().prop_filter("sentinel", |v| *v != i64::MAX))) {
        let value = NaInt::from_option(v).unwrap();
        let parsed: NaInt<i64> = value.to_string().parse().unwrap();
        prop_assert_eq!(parsed, value);
    }
}

#[test]
fn test_trilean_is_an_na_value() {
    assert!(Trilean::NA.ternary_eq(&Trilean::NA).is_na());
    assert!(Trilean::NA.equal_or_both_na(&Trilean::NA));
    assert!(Trilean::TRUE.equal_or_either_na(&Trilean::NA));
    assert!(!Trilean::TRUE.equal_or_both_na(&Trilean::FALSE));
    assert_eq!(NaValue::value(&Trilean::TRUE).unwrap(), &true);
    assert!(NaValue::value(&Trilean::NA).is_err());
}

#[test]
fn test_ensure_known_names_the_value() {
    let missing: Option<u32> = None;
    let err = ensure_known(&missing, "retry count").unwrap_err();
    assert!(err.to_string().contains("retry count"));
    assert_eq!(ensure_known(&Some(3u32), "retry count").unwrap(), &3);
}

#[test]
fn test_na_int_ordering() {
    let one = NaInt::new(1u16).unwrap();
    let two = NaInt::new(2u16).unwrap();
    assert!(one < two);
    assert_eq!(NaInt::<u16>::NA.partial_cmp(&NaInt::NA), Some(std::cmp::Ordering::Equal));
    assert_eq!(one.partial_cmp(&NaInt::NA), None);
    assert!(NaInt::new(u16::MAX).is_err());
}

#[test]
fn test_na_text_forms() {
    assert_eq!(Na::<u8>::NA.to_string(), "NA");
    assert_eq!(Na::new(7u8).to_string(), "7");
    assert_eq!("NA".parse::<Na<u8>>().unwrap(), Na::NA);
    assert!("na".parse::<Na<u8>>().is_err());
    assert_eq!(NaInt::<i8>::NA.to_string(), "NA");
    assert!("127".parse::<NaInt<i8>>().is_err());
}
