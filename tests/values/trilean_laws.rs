//! Kleene logic laws, checked exhaustively and with proptest

use crate::common::*;
use proptest::prelude::*;

fn any_trilean() -> impl Strategy<Value = Trilean> {
    prop::sample::select(Trilean::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_and_or_are_commutative(a in any_trilean(), b in any_trilean()) {
        prop_assert_eq!(a & b, b & a);
        prop_assert_eq!(a | b, b | a);
        prop_assert_eq!(a ^ b, b ^ a);
    }

    #[test]
    fn test_and_or_are_associative(a in any_trilean(), b in any_trilean(), c in any_trilean()) {
        prop_assert_eq!((a & b) & c, a & (b & c));
        prop_assert_eq!((a | b) | c, a | (b | c));
    }

    #[test]
    fn test_de_morgan_holds(a in any_trilean(), b in any_trilean()) {
        prop_assert_eq!(!(a & b), !a | !b);
        prop_assert_eq!(!(a | b), !a & !b);
    }

    #[test]
    fn test_xor_is_or_and_not_and(a in any_trilean(), b in any_trilean()) {
        prop_assert_eq!(a ^ b, (a | b) & !(a & b));
    }

    #[test]
    fn test_not_equals_is_negated_equals(a in any_trilean(), b in any_trilean()) {
        prop_assert_eq!(Trilean::not_equals(a, b), !Trilean::equals(a, b));
    }

    #[test]
    fn test_equals_is_na_iff_either_is_na(a in any_trilean(), b in any_trilean()) {
        prop_assert_eq!(Trilean::equals(a, b).is_na(), a.is_na() || b.is_na());
    }

    #[test]
    fn test_structural_equality_is_reflexive(a in any_trilean()) {
        prop_assert!(a == a);
    }
}

#[test]
fn test_exactly_one_state_holds() {
    for t in trileans() {
        let states = [t.is_true(), t.is_false(), t.is_na()];
        assert_eq!(states.iter().filter(|&&s| s).count(), 1, "{:?}", t);
    }
}

#[test]
fn test_operators_match_named_functions() {
    for a in trileans() {
        assert_eq!(!a, Trilean::logical_not(a));
        for b in trileans() {
            assert_eq!(a & b, Trilean::logical_and(a, b));
            assert_eq!(a | b, Trilean::logical_or(a, b));
            assert_eq!(a ^ b, Trilean::logical_xor(a, b));
        }
    }
}

#[test]
fn test_dominant_values_decide_result() {
    assert_eq!(Trilean::FALSE & Trilean::NA, Trilean::FALSE);
    assert_eq!(Trilean::TRUE | Trilean::NA, Trilean::TRUE);
    assert_eq!(Trilean::TRUE & Trilean::NA, Trilean::NA);
    assert_eq!(Trilean::FALSE | Trilean::NA, Trilean::NA);
    assert_eq!(Trilean::TRUE ^ Trilean::NA, Trilean::NA);
}

#[test]
fn test_numeric_encodings_roundtrip() {
    for t in trileans() {
        assert_eq!(Trilean::from_signed(t.to_signed::<i32>()).unwrap(), t);
        assert_eq!(Trilean::from_unsigned(t.to_unsigned::<u16>()).unwrap(), t);
        assert_eq!(Trilean::from_option(t.to_option()), t);
    }
    assert!(Trilean::from_signed(2i64).is_err());
    assert!(Trilean::from_unsigned(3u8).is_err());
}

#[test]
fn test_text_roundtrip() {
    for t in trileans() {
        assert_text_roundtrip(&t);
        assert_short_buffer_untouched(&t);
    }
}
