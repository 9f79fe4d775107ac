//! NA-aware wrappers
//!
//! - [`Na<T>`]: any value or NA, with the text form `"NA"` for the missing state
//! - [`NaInt<T>`]: a primitive integer whose maximum value is reserved for NA
//!
//! Both follow the equal-or-both-NA law for `==`, so two missing values are
//! equal and hash alike. Use [`crate::ternary::TernaryEq`] for logical
//! comparisons.

use crate::error::{Result, ValueError};
use crate::ternary::NaValue;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Text form of the missing state
pub const NA_TEXT: &str = "NA";

// =============================================================================
// Na<T>
// =============================================================================

/// A value that may be NA
///
/// Ordering places NA before every known value. A known value whose text is
/// `"NA"` has no text form: `Display` fails on it and [`Na::to_text`] returns
/// an error, so text never parses back as the wrong state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Na<T>(Option<T>);

impl<T> Na<T> {
    /// The missing value
    pub const NA: Na<T> = Na(None);

    /// A known value
    pub const fn new(value: T) -> Self {
        Na(Some(value))
    }

    /// The known value, if any
    pub fn as_option(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Unwrap into an `Option`
    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Na<T> {
    fn default() -> Self {
        Na(None)
    }
}

impl<T> From<Option<T>> for Na<T> {
    fn from(value: Option<T>) -> Self {
        Na(value)
    }
}

impl<T> From<Na<T>> for Option<T> {
    fn from(value: Na<T>) -> Self {
        value.0
    }
}

impl<T: PartialEq> NaValue for Na<T> {
    type Value = T;

    fn known(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

impl<T: fmt::Display> Na<T> {
    /// The text form
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the known value's text is the NA label.
    pub fn to_text(&self) -> Result<String> {
        match &self.0 {
            Some(value) if shows_as_na(value) => Err(ValueError::out_of_range("Na", NA_TEXT)),
            Some(value) => Ok(value.to_string()),
            None => Ok(NA_TEXT.to_string()),
        }
    }
}

/// Whether `value` formats exactly as the NA label, checked without allocating
fn shows_as_na<T: fmt::Display>(value: &T) -> bool {
    struct LabelMatch {
        matched: usize,
        equal: bool,
    }

    impl fmt::Write for LabelMatch {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            let rest = &NA_TEXT.as_bytes()[self.matched..];
            if !self.equal || !rest.starts_with(s.as_bytes()) {
                self.equal = false;
                return Err(fmt::Error);
            }
            self.matched += s.len();
            Ok(())
        }
    }

    let mut check = LabelMatch { matched: 0, equal: true };
    let complete = fmt::write(&mut check, format_args!("{}", value)).is_ok();
    complete && check.equal && check.matched == NA_TEXT.len()
}

impl<T: fmt::Display> fmt::Display for Na<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) if shows_as_na(value) => Err(fmt::Error),
            Some(value) => value.fmt(f),
            None => f.write_str(NA_TEXT),
        }
    }
}

impl<T: FromStr> FromStr for Na<T> {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self> {
        if s == NA_TEXT {
            return Ok(Na(None));
        }
        s.parse::<T>()
            .map(Na::new)
            .map_err(|_| ValueError::format("Na", s))
    }
}

// =============================================================================
// NaInt<T>
// =============================================================================

/// A primitive integer with a reserved NA sentinel
pub trait NaSentinel: Copy + Eq + Ord + Hash + fmt::Display + FromStr {
    /// The reserved value meaning NA
    const NA: Self;
    /// Smallest storable value
    const MIN: Self;
    /// Largest known value, one below the sentinel
    const MAX_KNOWN: Self;

    /// `None` on overflow
    fn checked_add(self, rhs: Self) -> Option<Self>;
    /// `None` on overflow
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    /// `None` on overflow
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    /// `None` on division by zero or overflow
    fn checked_div(self, rhs: Self) -> Option<Self>;
    /// `None` when the negation is not representable
    fn checked_neg(self) -> Option<Self>;
    /// Identity for unsigned types
    fn checked_abs(self) -> Option<Self>;
}

macro_rules! impl_na_sentinel {
    (@ops $t:ty) => {
        const NA: Self = <$t>::MAX;
        const MIN: Self = <$t>::MIN;
        const MAX_KNOWN: Self = <$t>::MAX - 1;

        fn checked_add(self, rhs: Self) -> Option<Self> {
            <$t>::checked_add(self, rhs)
        }
        fn checked_sub(self, rhs: Self) -> Option<Self> {
            <$t>::checked_sub(self, rhs)
        }
        fn checked_mul(self, rhs: Self) -> Option<Self> {
            <$t>::checked_mul(self, rhs)
        }
        fn checked_div(self, rhs: Self) -> Option<Self> {
            <$t>::checked_div(self, rhs)
        }
        fn checked_neg(self) -> Option<Self> {
            <$t>::checked_neg(self)
        }
    };
    (signed: $($t:ty),*) => {
        $(impl NaSentinel for $t {
            impl_na_sentinel!(@ops $t);

            fn checked_abs(self) -> Option<Self> {
                <$t>::checked_abs(self)
            }
        })*
    };
    (unsigned: $($t:ty),*) => {
        $(impl NaSentinel for $t {
            impl_na_sentinel!(@ops $t);

            fn checked_abs(self) -> Option<Self> {
                Some(self)
            }
        })*
    };
}

impl_na_sentinel!(signed: i8, i16, i32, i64);
impl_na_sentinel!(unsigned: u8, u16, u32, u64);

/// An integer that may be NA, stored in the width of the integer itself
///
/// `T::MAX` is reserved as the NA sentinel and cannot be stored as a known
/// value. Comparisons involving exactly one NA are unordered.
///
/// Arithmetic propagates NA: a result is NA when either operand is NA, on
/// division by zero, and when the exact result falls outside
/// [`NaInt::MIN`]..=[`NaInt::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaInt<T: NaSentinel>(T);

impl<T: NaSentinel> NaInt<T> {
    /// The missing value
    pub const NA: NaInt<T> = NaInt(T::NA);
    /// Largest known value
    pub const MAX: NaInt<T> = NaInt(T::MAX_KNOWN);
    /// Smallest known value
    pub const MIN: NaInt<T> = NaInt(T::MIN);

    /// A known value
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `value` is the NA sentinel.
    pub fn new(value: T) -> Result<Self> {
        if value == T::NA {
            Err(ValueError::out_of_range("NaInt", value))
        } else {
            Ok(NaInt(value))
        }
    }

    /// Create from an `Option`; `None` is NA
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is the NA sentinel.
    pub fn from_option(value: Option<T>) -> Result<Self> {
        value.map_or(Ok(Self::NA), Self::new)
    }

    /// The known value, if any
    pub fn to_option(self) -> Option<T> {
        if self.0 == T::NA {
            None
        } else {
            Some(self.0)
        }
    }

    /// The stored integer, sentinel included
    pub fn raw(self) -> T {
        self.0
    }

    /// Absolute value; NA stays NA, as does a result with no known form
    pub fn abs(self) -> Self {
        self.map(T::checked_abs)
    }

    // A result equal to the sentinel overflowed the known range and reads as NA
    fn map(self, op: impl FnOnce(T) -> Option<T>) -> Self {
        self.to_option().and_then(op).map_or(Self::NA, NaInt)
    }

    fn zip(self, rhs: Self, op: impl FnOnce(T, T) -> Option<T>) -> Self {
        match (self.to_option(), rhs.to_option()) {
            (Some(l), Some(r)) => op(l, r).map_or(Self::NA, NaInt),
            _ => Self::NA,
        }
    }
}

macro_rules! impl_na_int_op {
    ($($trait:ident :: $method:ident => $checked:ident),*) => {
        $(
            impl<T: NaSentinel> $trait for NaInt<T> {
                type Output = NaInt<T>;

                fn $method(self, rhs: NaInt<T>) -> NaInt<T> {
                    self.zip(rhs, T::$checked)
                }
            }

            impl<T: NaSentinel> $trait<T> for NaInt<T> {
                type Output = NaInt<T>;

                fn $method(self, rhs: T) -> NaInt<T> {
                    // A sentinel operand is NA
                    self.zip(NaInt(rhs), T::$checked)
                }
            }
        )*
    };
}

impl_na_int_op!(Add::add => checked_add, Sub::sub => checked_sub, Mul::mul => checked_mul, Div::div => checked_div);

impl<T: NaSentinel> Neg for NaInt<T> {
    type Output = NaInt<T>;

    fn neg(self) -> NaInt<T> {
        self.map(T::checked_neg)
    }
}

impl<T: NaSentinel> Default for NaInt<T> {
    fn default() -> Self {
        Self::NA
    }
}

impl<T: NaSentinel> NaValue for NaInt<T> {
    type Value = T;

    fn known(&self) -> Option<&T> {
        if self.0 == T::NA {
            None
        } else {
            Some(&self.0)
        }
    }
}

impl<T: NaSentinel> PartialOrd for NaInt<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.known(), other.known()) {
            (Some(l), Some(r)) => Some(l.cmp(r)),
            (None, None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl<T: NaSentinel> fmt::Display for NaInt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known() {
            Some(value) => value.fmt(f),
            None => f.write_str(NA_TEXT),
        }
    }
}

impl<T: NaSentinel> FromStr for NaInt<T> {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self> {
        if s == NA_TEXT {
            return Ok(Self::NA);
        }
        let value = s
            .parse::<T>()
            .map_err(|_| ValueError::format("NaInt", s))?;
        Self::new(value).map_err(|_| ValueError::format("NaInt", s))
    }
}

impl<T: NaSentinel + Serialize> Serialize for NaInt<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_option().serialize(serializer)
    }
}

impl<'de, T: NaSentinel + Deserialize<'de>> Deserialize<'de> for NaInt<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Option::<T>::deserialize(deserializer)?;
        Self::from_option(value).map_err(serde::de::Error::custom)
    }
}
