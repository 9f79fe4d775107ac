//! Three-valued logic
//!
//! A [`Trilean`] is known to be true, known to be false, or unknown (`Na`).
//! Logical operators follow Kleene's strong three-valued logic:
//!
//! | `a` | `b` | `a & b` | `a \| b` | `a ^ b` |
//! |-----|-----|---------|----------|---------|
//! | T | T | T | T | F |
//! | T | F | F | T | T |
//! | T | Na | Na | T | Na |
//! | F | F | F | F | F |
//! | F | Na | F | Na | Na |
//! | Na | Na | Na | Na | Na |
//!
//! ## Equality
//!
//! `Trilean` has two equalities and both are intentional:
//!
//! - `PartialEq`/`Eq`/`Hash` are identity: `NA == NA` is `true`, so values
//!   behave in sets and maps.
//! - [`Trilean::equals`] is logical: comparing with `NA` yields `NA`.
//!
//! ## Encoding
//!
//! The single byte tag is `0 = Na`, `1 = True`, `2 = False`. It is exposed
//! through [`Trilean::to_byte`] and the unsigned conversions for storage and
//! is not otherwise meaningful.

use crate::error::{NaValueError, Result, ValueError};
use crate::ternary::NaValue;
use crate::value::{write_str, SpanSerializable, ValueType};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::str::FromStr;

const NA_TAG: u8 = 0;
const TRUE_TAG: u8 = 1;
const FALSE_TAG: u8 = 2;

const TRUE_STR: &str = "True";
const FALSE_STR: &str = "False";
const NA_STR: &str = "Unknown";
const NULL_STR: &str = "Null";

/// A value that is known to be true, known to be false, or unknown
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Trilean(u8);

impl Trilean {
    /// Known to be true
    pub const TRUE: Trilean = Trilean(TRUE_TAG);

    /// Known to be false
    pub const FALSE: Trilean = Trilean(FALSE_TAG);

    /// Unknown
    pub const NA: Trilean = Trilean(NA_TAG);

    /// All three values
    pub const ALL: [Trilean; 3] = [Trilean::TRUE, Trilean::FALSE, Trilean::NA];

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a known value from a boolean
    pub const fn from_bool(value: bool) -> Self {
        if value {
            Trilean::TRUE
        } else {
            Trilean::FALSE
        }
    }

    /// Create a value from an optional boolean; `None` is `NA`
    pub const fn from_option(value: Option<bool>) -> Self {
        match value {
            Some(b) => Trilean::from_bool(b),
            None => Trilean::NA,
        }
    }

    /// Create a value from a signed number: `1` is true, `0` is false, `-1` is NA
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidTrileanNumber` for any other number.
    pub fn from_signed<T: SignedNumber>(value: T) -> Result<Self> {
        if value == T::ONE {
            Ok(Trilean::TRUE)
        } else if value == T::ZERO {
            Ok(Trilean::FALSE)
        } else if value == T::NEGATIVE_ONE {
            Ok(Trilean::NA)
        } else {
            Err(ValueError::InvalidTrileanNumber {
                value: value.to_string(),
            })
        }
    }

    /// Create a value from an unsigned number: `1` is true, `2` is false, `0` is NA
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidTrileanNumber` for any other number.
    pub fn from_unsigned<T: UnsignedNumber>(value: T) -> Result<Self> {
        if value == T::ZERO {
            Ok(Trilean::NA)
        } else if value == T::ONE {
            Ok(Trilean::TRUE)
        } else if value == T::TWO {
            Ok(Trilean::FALSE)
        } else {
            Err(ValueError::InvalidTrileanNumber {
                value: value.to_string(),
            })
        }
    }

    /// Like [`Trilean::from_signed`], with `None` mapping to NA
    pub fn from_signed_option<T: SignedNumber>(value: Option<T>) -> Result<Self> {
        value.map_or(Ok(Trilean::NA), Trilean::from_signed)
    }

    /// Like [`Trilean::from_unsigned`], with `None` mapping to NA
    pub fn from_unsigned_option<T: UnsignedNumber>(value: Option<T>) -> Result<Self> {
        value.map_or(Ok(Trilean::NA), Trilean::from_unsigned)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Whether the value is known to be true
    #[inline]
    pub const fn is_true(self) -> bool {
        self.0 == TRUE_TAG
    }

    /// Whether the value is known to be false
    #[inline]
    pub const fn is_false(self) -> bool {
        self.0 == FALSE_TAG
    }

    /// Whether the value is unknown
    #[inline]
    pub const fn is_na(self) -> bool {
        self.0 == NA_TAG
    }

    /// The known boolean
    ///
    /// # Errors
    ///
    /// Returns `NaValueError` if the value is NA.
    pub fn to_bool(self) -> std::result::Result<bool, NaValueError> {
        self.to_option().ok_or_else(|| {
            NaValueError::with_message("cannot convert an Unknown Trilean to a boolean")
        })
    }

    /// The known boolean, or `None` if NA
    pub const fn to_option(self) -> Option<bool> {
        match self.0 {
            TRUE_TAG => Some(true),
            FALSE_TAG => Some(false),
            _ => None,
        }
    }

    /// `1` if true, `0` if false, `-1` if NA
    pub fn to_signed<T: SignedNumber>(self) -> T {
        match self.0 {
            TRUE_TAG => T::ONE,
            FALSE_TAG => T::ZERO,
            _ => T::NEGATIVE_ONE,
        }
    }

    /// `1` if true, `2` if false, `0` if NA
    pub fn to_unsigned<T: UnsignedNumber>(self) -> T {
        match self.0 {
            TRUE_TAG => T::ONE,
            FALSE_TAG => T::TWO,
            _ => T::ZERO,
        }
    }

    /// The raw tag byte
    #[inline]
    pub const fn to_byte(self) -> u8 {
        self.0
    }

    /// Canonical text: `"True"`, `"False"` or `"Unknown"`
    pub const fn as_str(self) -> &'static str {
        match self.0 {
            TRUE_TAG => TRUE_STR,
            FALSE_TAG => FALSE_STR,
            _ => NA_STR,
        }
    }

    // =========================================================================
    // Logic
    // =========================================================================

    /// Negation; NA stays NA
    pub const fn logical_not(value: Trilean) -> Trilean {
        match value.0 {
            TRUE_TAG => Trilean::FALSE,
            FALSE_TAG => Trilean::TRUE,
            _ => Trilean::NA,
        }
    }

    /// Conjunction: false if either is false, true if both are true, else NA
    pub const fn logical_and(left: Trilean, right: Trilean) -> Trilean {
        if left.is_false() || right.is_false() {
            Trilean::FALSE
        } else if left.is_true() && right.is_true() {
            Trilean::TRUE
        } else {
            Trilean::NA
        }
    }

    /// Disjunction: true if either is true, false if both are false, else NA
    pub const fn logical_or(left: Trilean, right: Trilean) -> Trilean {
        if left.is_true() || right.is_true() {
            Trilean::TRUE
        } else if left.is_false() && right.is_false() {
            Trilean::FALSE
        } else {
            Trilean::NA
        }
    }

    /// Exclusive or: NA if either is NA
    pub const fn logical_xor(left: Trilean, right: Trilean) -> Trilean {
        if left.is_na() || right.is_na() {
            Trilean::NA
        } else {
            Trilean::from_bool(left.is_true() != right.is_true())
        }
    }

    // =========================================================================
    // Equality
    // =========================================================================

    /// Logical equality: NA if either side is NA
    ///
    /// Unlike `==`, `Trilean::equals(NA, NA)` is `NA`.
    pub const fn equals(left: Trilean, right: Trilean) -> Trilean {
        if left.is_na() || right.is_na() {
            Trilean::NA
        } else {
            Trilean::from_bool(left.0 == right.0)
        }
    }

    /// Logical inequality: NA if either side is NA
    pub const fn not_equals(left: Trilean, right: Trilean) -> Trilean {
        Trilean::logical_not(Trilean::equals(left, right))
    }

    /// Whether this value is known and equal to `value`
    pub const fn eq_bool(self, value: bool) -> bool {
        self.0 == Trilean::from_bool(value).0
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    /// Parse a Trilean, returning `None` on failure
    ///
    /// Accepts (case-insensitive) `True`, `False`, `Unknown`, `Null`, the
    /// empty string (NA), and the digits `1` (true), `2` (false), `0` (NA).
    pub fn try_parse_str(s: &str) -> Option<Trilean> {
        if s.eq_ignore_ascii_case(TRUE_STR) {
            return Some(Trilean::TRUE);
        }
        if s.eq_ignore_ascii_case(FALSE_STR) {
            return Some(Trilean::FALSE);
        }
        if s.is_empty() || s.eq_ignore_ascii_case(NA_STR) || s.eq_ignore_ascii_case(NULL_STR) {
            return Some(Trilean::NA);
        }
        match s {
            "1" => Some(Trilean::TRUE),
            "2" => Some(Trilean::FALSE),
            "0" => Some(Trilean::NA),
            _ => None,
        }
    }
}

// =============================================================================
// Numbers
// =============================================================================

/// A signed integer type usable in Trilean conversions
pub trait SignedNumber: Copy + PartialEq + fmt::Display {
    /// Zero
    const ZERO: Self;
    /// One
    const ONE: Self;
    /// Minus one
    const NEGATIVE_ONE: Self;
}

/// An unsigned integer type usable in Trilean conversions
pub trait UnsignedNumber: Copy + PartialEq + fmt::Display {
    /// Zero
    const ZERO: Self;
    /// One
    const ONE: Self;
    /// Two
    const TWO: Self;
}

macro_rules! impl_signed_number {
    ($($t:ty),*) => {
        $(impl SignedNumber for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const NEGATIVE_ONE: Self = -1;
        })*
    };
}

macro_rules! impl_unsigned_number {
    ($($t:ty),*) => {
        $(impl UnsignedNumber for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TWO: Self = 2;
        })*
    };
}

impl_signed_number!(i8, i16, i32, i64, i128, isize);
impl_unsigned_number!(u8, u16, u32, u64, u128, usize);

// =============================================================================
// Trait implementations
// =============================================================================

impl NaValue for Trilean {
    type Value = bool;

    fn known(&self) -> Option<&bool> {
        match self.0 {
            TRUE_TAG => Some(&true),
            FALSE_TAG => Some(&false),
            _ => None,
        }
    }
}

impl ValueType for Trilean {
    const TYPE_NAME: &'static str = "Trilean";
}

impl SpanSerializable for Trilean {
    const MAX_SERIALIZED_CHAR_LENGTH: usize = 7;
    const MAX_SERIALIZED_BYTE_LENGTH: usize = 7;

    fn try_format(&self, destination: &mut [u8]) -> Result<usize> {
        write_str(self.as_str(), destination)
    }

    fn parse(s: &str) -> Result<Self> {
        Trilean::try_parse_str(s).ok_or_else(|| ValueError::format(Self::TYPE_NAME, s))
    }
}

impl Not for Trilean {
    type Output = Trilean;

    fn not(self) -> Trilean {
        Trilean::logical_not(self)
    }
}

impl BitAnd for Trilean {
    type Output = Trilean;

    fn bitand(self, rhs: Trilean) -> Trilean {
        Trilean::logical_and(self, rhs)
    }
}

impl BitOr for Trilean {
    type Output = Trilean;

    fn bitor(self, rhs: Trilean) -> Trilean {
        Trilean::logical_or(self, rhs)
    }
}

impl BitXor for Trilean {
    type Output = Trilean;

    fn bitxor(self, rhs: Trilean) -> Trilean {
        Trilean::logical_xor(self, rhs)
    }
}

impl From<bool> for Trilean {
    fn from(value: bool) -> Self {
        Trilean::from_bool(value)
    }
}

impl From<Option<bool>> for Trilean {
    fn from(value: Option<bool>) -> Self {
        Trilean::from_option(value)
    }
}

impl From<Trilean> for Option<bool> {
    fn from(value: Trilean) -> Self {
        value.to_option()
    }
}

impl TryFrom<Trilean> for bool {
    type Error = NaValueError;

    fn try_from(value: Trilean) -> std::result::Result<Self, Self::Error> {
        value.to_bool()
    }
}

impl PartialEq<bool> for Trilean {
    fn eq(&self, other: &bool) -> bool {
        self.eq_bool(*other)
    }
}

impl PartialEq<Trilean> for bool {
    fn eq(&self, other: &Trilean) -> bool {
        other.eq_bool(*self)
    }
}

impl fmt::Display for Trilean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Trilean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trilean({})", self.as_str())
    }
}

impl FromStr for Trilean {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self> {
        Trilean::parse(s)
    }
}

impl Serialize for Trilean {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Trilean {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(TrileanVisitor)
    }
}

struct TrileanVisitor;

impl<'de> Visitor<'de> for TrileanVisitor {
    type Value = Trilean;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a Trilean string, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Trilean, E> {
        Trilean::parse(v).map_err(E::custom)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Trilean, E> {
        Ok(Trilean::from_bool(v))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Trilean, E> {
        Ok(Trilean::NA)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Trilean, E> {
        Ok(Trilean::NA)
    }
}

// ============================================================================
// Tests
// ============================================================================
