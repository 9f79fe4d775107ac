//! NA-aware equality under three-valued logic
//!
//! A value that may be NA (missing, unknown, not available) can be compared
//! in several ways. This module provides one capability trait, [`NaValue`],
//! and the comparison laws defined over it:
//!
//! | law | both known | one NA | both NA |
//! |-----|------------|--------|---------|
//! | [`equals`] | `True`/`False` | `Na` | `Na` |
//! | [`equal_and_neither_na`] | `a == b` | `false` | `false` |
//! | [`equal_or_both_na`] | `a == b` | `false` | `true` |
//! | [`equal_or_either_na`] | `a == b` | `true` | `true` |
//!
//! `equal_or_both_na` is the law conventional `PartialEq` implementations
//! on NA-aware types follow, so that two missing values hash and compare
//! equal in collections.
//!
//! `Option<T>` implements [`NaValue`], so the laws apply directly to
//! ordinary nullable values.

use crate::error::NaValueError;
use crate::trilean::Trilean;

/// A value that either holds a known value or is NA
pub trait NaValue {
    /// The type of the known value
    type Value: PartialEq + ?Sized;

    /// The known value, or `None` if NA
    fn known(&self) -> Option<&Self::Value>;

    /// Whether a known value is present
    fn has_value(&self) -> bool {
        self.known().is_some()
    }

    /// Whether the value is NA
    fn is_na(&self) -> bool {
        !self.has_value()
    }

    /// The known value
    ///
    /// # Errors
    ///
    /// Returns `NaValueError` if the value is NA.
    fn value(&self) -> Result<&Self::Value, NaValueError> {
        self.known().ok_or_else(NaValueError::new)
    }
}

impl<T: PartialEq> NaValue for Option<T> {
    type Value = T;

    fn known(&self) -> Option<&T> {
        self.as_ref()
    }
}

impl<N: NaValue + ?Sized> NaValue for &N {
    type Value = N::Value;

    fn known(&self) -> Option<&N::Value> {
        (**self).known()
    }
}

/// Compare two values, returning `Na` if either is NA
pub fn equals<N: NaValue>(left: &N, right: &N) -> Trilean {
    match (left.known(), right.known()) {
        (Some(l), Some(r)) => Trilean::from_bool(l == r),
        _ => Trilean::NA,
    }
}

/// `true` if both values are known and equal
pub fn equal_and_neither_na<N: NaValue>(left: &N, right: &N) -> bool {
    equals(left, right).is_true()
}

/// `true` if both values are NA, or both are known and equal
pub fn equal_or_both_na<N: NaValue>(left: &N, right: &N) -> bool {
    match (left.known(), right.known()) {
        (None, None) => true,
        (Some(l), Some(r)) => l == r,
        _ => false,
    }
}

/// `true` if either value is NA, or both are known and equal
pub fn equal_or_either_na<N: NaValue>(left: &N, right: &N) -> bool {
    match (left.known(), right.known()) {
        (Some(l), Some(r)) => l == r,
        _ => true,
    }
}

/// Guard a precondition that `value` is known
///
/// # Errors
///
/// Returns `NaValueError` naming `what` if the value is NA.
pub fn ensure_known<'a, N: NaValue>(value: &'a N, what: &str) -> Result<&'a N::Value, NaValueError> {
    value
        .known()
        .ok_or_else(|| NaValueError::with_message(format!("{} is not available (NA)", what)))
}

/// Three-valued equality as methods
///
/// Blanket-implemented for every [`NaValue`].
pub trait TernaryEq {
    /// See [`equals`]
    fn ternary_eq(&self, other: &Self) -> Trilean;

    /// See [`equal_and_neither_na`]
    fn equal_and_neither_na(&self, other: &Self) -> bool {
        self.ternary_eq(other).is_true()
    }

    /// See [`equal_or_both_na`]
    fn equal_or_both_na(&self, other: &Self) -> bool;

    /// See [`equal_or_either_na`]
    fn equal_or_either_na(&self, other: &Self) -> bool;
}

impl<N: NaValue> TernaryEq for N {
    fn ternary_eq(&self, other: &Self) -> Trilean {
        equals(self, other)
    }

    fn equal_or_both_na(&self, other: &Self) -> bool {
        equal_or_both_na(self, other)
    }

    fn equal_or_either_na(&self, other: &Self) -> bool {
        equal_or_either_na(self, other)
    }
}
