//! Conversion between value types and stored representations
//!
//! A [`StoreConverter`] maps a value type to the primitive a storage layer
//! persists and back. Reads validate: a stored value that no longer satisfies
//! the type's rules fails with a [`ConversionError`] carrying the raw value,
//! and the failure is logged at `warn` level.

use crate::error::{ConversionError, ValueError};
use crate::trilean::Trilean;
use crate::value::{SpanSerializable, ValueType};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use tracing::warn;

/// Result type for storage conversions
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;

/// Converts a value type to and from its stored representation
pub trait StoreConverter<T> {
    /// The persisted representation
    type Store;

    /// Convert a value for storage
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be represented, e.g. it is uninitialized.
    fn to_store(&self, value: &T) -> ConversionResult<Self::Store>;

    /// Convert a stored value back, validating it
    ///
    /// # Errors
    ///
    /// Fails if the stored value is not a valid `T`.
    fn from_store(&self, stored: Self::Store) -> ConversionResult<T>;
}

/// Log and wrap a conversion failure
pub fn conversion_failed(type_name: &'static str, raw: impl ToString, source: ValueError) -> ConversionError {
    let raw = raw.to_string();
    warn!(type_name, raw = %raw, error = %source, "Stored value conversion failed");
    ConversionError::new(type_name, raw, source)
}

// =============================================================================
// Text
// =============================================================================

/// Stores any [`SpanSerializable`] value as its canonical text
pub struct TextConverter<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> TextConverter<T> {
    /// Create a converter
    pub const fn new() -> Self {
        TextConverter {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for TextConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TextConverter<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for TextConverter<T> {}

impl<T> fmt::Debug for TextConverter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TextConverter")
    }
}

impl<T: SpanSerializable> StoreConverter<T> for TextConverter<T> {
    type Store = String;

    fn to_store(&self, value: &T) -> ConversionResult<String> {
        value
            .format_to_string()
            .map_err(|e| conversion_failed(T::TYPE_NAME, "", e))
    }

    fn from_store(&self, stored: String) -> ConversionResult<T> {
        T::parse(&stored).map_err(|e| conversion_failed(T::TYPE_NAME, &stored, e))
    }
}

// =============================================================================
// Optional values
// =============================================================================

/// Lifts a converter over `Option`: `None` is stored as `None`
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionConverter<C> {
    inner: C,
}

impl<C> OptionConverter<C> {
    /// Wrap a converter
    pub const fn new(inner: C) -> Self {
        OptionConverter { inner }
    }
}

impl<T, C: StoreConverter<T>> StoreConverter<Option<T>> for OptionConverter<C> {
    type Store = Option<C::Store>;

    fn to_store(&self, value: &Option<T>) -> ConversionResult<Option<C::Store>> {
        value.as_ref().map(|v| self.inner.to_store(v)).transpose()
    }

    fn from_store(&self, stored: Option<C::Store>) -> ConversionResult<Option<T>> {
        stored.map(|s| self.inner.from_store(s)).transpose()
    }
}

// =============================================================================
// Trilean
// =============================================================================

/// How `Trilean` values are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrileanStorage {
    /// `"True"`, `"False"`, `"Unknown"`
    #[default]
    Text,
    /// `1`, `0`, `-1`
    Signed,
    /// `1`, `2`, `0`
    Unsigned,
}

impl TrileanStorage {
    /// Configuration name of the encoding
    pub const fn as_str(self) -> &'static str {
        match self {
            TrileanStorage::Text => "text",
            TrileanStorage::Signed => "signed",
            TrileanStorage::Unsigned => "unsigned",
        }
    }
}

impl fmt::Display for TrileanStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrileanStorage {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, ValueError> {
        match s {
            "text" => Ok(TrileanStorage::Text),
            "signed" => Ok(TrileanStorage::Signed),
            "unsigned" => Ok(TrileanStorage::Unsigned),
            other => Err(ValueError::format("TrileanStorage", other)),
        }
    }
}

/// A stored primitive: text or integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreValue {
    /// A text column
    Text(String),
    /// An integer column
    Integer(i64),
}

impl fmt::Display for StoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreValue::Text(s) => f.write_str(s),
            StoreValue::Integer(n) => write!(f, "{}", n),
        }
    }
}

/// Stores `Trilean` using a configured [`TrileanStorage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrileanConverter {
    storage: TrileanStorage,
}

impl TrileanConverter {
    /// Create a converter for the given encoding
    pub const fn new(storage: TrileanStorage) -> Self {
        TrileanConverter { storage }
    }

    /// The configured encoding
    pub const fn storage(&self) -> TrileanStorage {
        self.storage
    }
}

impl StoreConverter<Trilean> for TrileanConverter {
    type Store = StoreValue;

    fn to_store(&self, value: &Trilean) -> ConversionResult<StoreValue> {
        Ok(match self.storage {
            TrileanStorage::Text => StoreValue::Text(value.as_str().to_string()),
            TrileanStorage::Signed => StoreValue::Integer(value.to_signed()),
            TrileanStorage::Unsigned => StoreValue::Integer(value.to_unsigned::<u8>().into()),
        })
    }

    fn from_store(&self, stored: StoreValue) -> ConversionResult<Trilean> {
        let result = match (self.storage, &stored) {
            (TrileanStorage::Text, StoreValue::Text(s)) => Trilean::parse(s),
            (TrileanStorage::Signed, StoreValue::Integer(n)) => Trilean::from_signed(*n),
            (TrileanStorage::Unsigned, StoreValue::Integer(n)) => match u64::try_from(*n) {
                Ok(n) => Trilean::from_unsigned(n),
                Err(_) => Err(ValueError::InvalidTrileanNumber {
                    value: n.to_string(),
                }),
            },
            (storage, other) => Err(ValueError::format(
                Trilean::TYPE_NAME,
                format!("{} value '{}' for {} storage", kind(other), other, storage),
            )),
        };
        result.map_err(|e| conversion_failed(Trilean::TYPE_NAME, &stored, e))
    }
}

fn kind(value: &StoreValue) -> &'static str {
    match value {
        StoreValue::Text(_) => "text",
        StoreValue::Integer(_) => "integer",
    }
}
