//! Count type
//!
//! A non-negative whole number of observed items. The range is limited to
//! the integers a JSON number (IEEE 754 double) represents exactly, so a
//! count always survives a round trip through JavaScript.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use valuekit_core::convert::{conversion_failed, ConversionResult};
use valuekit_core::value::write_fmt;
use valuekit_core::{
    impl_text_boundary, ComparableValue, EquatableValue, Result, SpanSerializable,
    StoreConverter, ValueError, ValueType,
};

/// Largest integer exactly representable in a JSON number (2^53 - 1)
pub const MAX_JSON_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// A count of items in `0 ..= 2^53 - 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Count(u64);

impl Count {
    /// Zero
    pub const ZERO: Count = Count(0);

    /// The largest count
    pub const MAX: Count = Count(MAX_JSON_SAFE_INTEGER);

    /// Create a count, validating the range
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` above 2^53 - 1.
    pub fn new(value: u64) -> Result<Self> {
        Self::from_value(value)
    }

    /// The count as an integer
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Add two counts
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the sum exceeds the range.
    pub fn checked_add(self, other: Count) -> Result<Count> {
        self.0
            .checked_add(other.0)
            .ok_or_else(|| ValueError::out_of_range(Self::TYPE_NAME, format!("{} + {}", self, other)))
            .and_then(Count::new)
    }

    /// Subtract a count
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the result would be negative.
    pub fn checked_sub(self, other: Count) -> Result<Count> {
        self.0
            .checked_sub(other.0)
            .map(Count)
            .ok_or_else(|| ValueError::out_of_range(Self::TYPE_NAME, format!("{} - {}", self, other)))
    }

    /// Multiply by a count
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the product exceeds the range.
    pub fn checked_mul(self, other: Count) -> Result<Count> {
        self.0
            .checked_mul(other.0)
            .ok_or_else(|| ValueError::out_of_range(Self::TYPE_NAME, format!("{} * {}", self, other)))
            .and_then(Count::new)
    }

    /// Integer division by a count
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` when dividing by zero.
    pub fn checked_div(self, other: Count) -> Result<Count> {
        self.0
            .checked_div(other.0)
            .map(Count)
            .ok_or_else(|| ValueError::out_of_range(Self::TYPE_NAME, format!("{} / {}", self, other)))
    }
}

impl ValueType for Count {
    const TYPE_NAME: &'static str = "Count";
}

impl EquatableValue for Count {
    type Underlying = u64;

    fn is_valid_value(value: &u64) -> bool {
        *value <= MAX_JSON_SAFE_INTEGER
    }

    fn from_value(value: u64) -> Result<Self> {
        if Self::is_valid_value(&value) {
            Ok(Count(value))
        } else {
            Err(ValueError::out_of_range(Self::TYPE_NAME, value))
        }
    }

    fn value(&self) -> Result<&u64> {
        Ok(&self.0)
    }
}

impl ComparableValue for Count {}

impl SpanSerializable for Count {
    const MAX_SERIALIZED_CHAR_LENGTH: usize = 16;
    const MAX_SERIALIZED_BYTE_LENGTH: usize = 16;

    fn try_format(&self, destination: &mut [u8]) -> Result<usize> {
        write_fmt(format_args!("{}", self.0), destination)
    }

    fn parse(s: &str) -> Result<Self> {
        s.parse::<u64>()
            .ok()
            .and_then(Self::try_from_value)
            .ok_or_else(|| ValueError::format(Self::TYPE_NAME, s))
    }
}

impl_text_boundary!(Count);

impl From<u32> for Count {
    fn from(value: u32) -> Self {
        Count(u64::from(value))
    }
}

impl From<u16> for Count {
    fn from(value: u16) -> Self {
        Count(u64::from(value))
    }
}

impl TryFrom<u64> for Count {
    type Error = ValueError;

    fn try_from(value: u64) -> Result<Self> {
        Count::new(value)
    }
}

impl TryFrom<i64> for Count {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self> {
        u64::try_from(value)
            .map_err(|_| ValueError::out_of_range(Self::TYPE_NAME, value))
            .and_then(Count::new)
    }
}

impl From<Count> for u64 {
    fn from(value: Count) -> Self {
        value.0
    }
}

impl Serialize for Count {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for Count {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = u64::deserialize(deserializer)?;
        Count::new(value).map_err(D::Error::custom)
    }
}

/// Stores a [`Count`] in a signed 64-bit integer column
#[derive(Debug, Clone, Copy, Default)]
pub struct CountConverter;

impl StoreConverter<Count> for CountConverter {
    type Store = i64;

    fn to_store(&self, value: &Count) -> ConversionResult<i64> {
        // Always fits: MAX_JSON_SAFE_INTEGER < i64::MAX
        i64::try_from(value.0).map_err(|_| {
            conversion_failed(Count::TYPE_NAME, value.0, ValueError::out_of_range(Count::TYPE_NAME, value.0))
        })
    }

    fn from_store(&self, stored: i64) -> ConversionResult<Count> {
        Count::try_from(stored).map_err(|e| conversion_failed(Count::TYPE_NAME, stored, e))
    }
}
