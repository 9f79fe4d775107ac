//! Validated value-type contracts
//!
//! Every domain value type wraps exactly one underlying value and guarantees
//! that the underlying value satisfies the type's validity predicate.
//!
//! ## Traits
//!
//! - [`ValueType`]: the type's name, used in error messages
//! - [`EquatableValue`]: validated construction and access to the underlying value
//! - [`ComparableValue`]: an `EquatableValue` with a total order
//! - [`SpanSerializable`]: bounded-length text formatting and parsing
//!
//! ## Invariants
//!
//! - Every live instance holds a valid underlying value, except a default
//!   instance of a type that has no meaningful default. Such an instance is
//!   *uninitialized*: [`EquatableValue::value`] and
//!   [`SpanSerializable::try_format`] fail with [`ValueError::Uninitialized`].
//! - `try_format` never writes more than `MAX_SERIALIZED_BYTE_LENGTH` bytes and
//!   never writes partially: on failure the destination is left untouched.
//! - For every valid `v`: `T::parse(&v.format_to_string()?) == v`.

use crate::error::{Result, ValueError};
use std::fmt;
use std::hash::Hash;

/// A named value type
pub trait ValueType {
    /// Human-readable type name, used in error messages
    const TYPE_NAME: &'static str;
}

/// A value type wrapping a validated underlying value
pub trait EquatableValue: ValueType + Sized + Clone + Eq + Hash {
    /// The wrapped representation
    type Underlying;

    /// Check whether `value` is a valid underlying value for this type
    fn is_valid_value(value: &Self::Underlying) -> bool;

    /// Create a value, validating the underlying representation
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `value` is not valid.
    fn from_value(value: Self::Underlying) -> Result<Self>;

    /// Create a value, returning `None` if the underlying value is not valid
    fn try_from_value(value: Self::Underlying) -> Option<Self> {
        Self::from_value(value).ok()
    }

    /// Get the underlying value
    ///
    /// # Errors
    ///
    /// Returns `ValueError::Uninitialized` for a default instance that was
    /// never assigned a value.
    fn value(&self) -> Result<&Self::Underlying>;

    /// Whether this instance holds a validated value
    fn is_initialized(&self) -> bool {
        self.value().is_ok()
    }
}

/// An [`EquatableValue`] with a total order over its underlying values
pub trait ComparableValue: EquatableValue + Ord {}

/// A value with a bounded-length canonical text form
pub trait SpanSerializable: ValueType + Sized {
    /// Maximum number of characters written by `try_format`
    const MAX_SERIALIZED_CHAR_LENGTH: usize;

    /// Maximum number of UTF-8 bytes written by `try_format`
    const MAX_SERIALIZED_BYTE_LENGTH: usize;

    /// Write the canonical text form into `destination`
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// - `ValueError::DestinationTooSmall` if the text does not fit (nothing is written)
    /// - `ValueError::Uninitialized` for an uninitialized value
    fn try_format(&self, destination: &mut [u8]) -> Result<usize>;

    /// Parse the canonical text form
    ///
    /// # Errors
    ///
    /// Returns `ValueError::Format` if `s` is not a valid text form.
    fn parse(s: &str) -> Result<Self>;

    /// Parse the canonical text form, returning `None` on failure
    fn try_parse(s: &str) -> Option<Self> {
        Self::parse(s).ok()
    }

    /// Parse the canonical text form from UTF-8 bytes
    fn parse_utf8(bytes: &[u8]) -> Result<Self> {
        match std::str::from_utf8(bytes) {
            Ok(s) => Self::parse(s),
            Err(_) => Err(ValueError::format(
                Self::TYPE_NAME,
                String::from_utf8_lossy(bytes).into_owned(),
            )),
        }
    }

    /// Format the canonical text form into a new string
    fn format_to_string(&self) -> Result<String> {
        let mut buffer = vec![0u8; Self::MAX_SERIALIZED_BYTE_LENGTH];
        let written = self.try_format(&mut buffer)?;
        buffer.truncate(written);
        String::from_utf8(buffer).map_err(|e| {
            ValueError::format(
                Self::TYPE_NAME,
                String::from_utf8_lossy(e.as_bytes()).into_owned(),
            )
        })
    }
}

/// Copy `text` into `destination`, writing nothing if it does not fit
///
/// Returns the number of bytes written.
pub fn write_str(text: &str, destination: &mut [u8]) -> Result<usize> {
    let bytes = text.as_bytes();
    if bytes.len() > destination.len() {
        return Err(ValueError::DestinationTooSmall {
            required: bytes.len(),
            available: destination.len(),
        });
    }
    destination[..bytes.len()].copy_from_slice(bytes);
    Ok(bytes.len())
}

/// Copy a sequence of text fragments into `destination`, all or nothing
pub fn write_parts(parts: &[&str], destination: &mut [u8]) -> Result<usize> {
    let required: usize = parts.iter().map(|p| p.len()).sum();
    if required > destination.len() {
        return Err(ValueError::DestinationTooSmall {
            required,
            available: destination.len(),
        });
    }
    let mut offset = 0;
    for part in parts {
        offset += write_str(part, &mut destination[offset..])?;
    }
    Ok(offset)
}

/// Scratch space for [`write_fmt`]; large enough for any primitive number
const SCRATCH_LENGTH: usize = 64;

struct Scratch {
    buffer: [u8; SCRATCH_LENGTH],
    len: usize,
}

impl fmt::Write for Scratch {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > SCRATCH_LENGTH {
            return Err(fmt::Error);
        }
        self.buffer[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Format `args` into `destination` without allocating, all or nothing
///
/// For short numeric text such as `format_args!("{}:{}", years, months)`.
/// Output longer than 64 bytes fails with `DestinationTooSmall`.
pub fn write_fmt(args: fmt::Arguments<'_>, destination: &mut [u8]) -> Result<usize> {
    let mut scratch = Scratch {
        buffer: [0u8; SCRATCH_LENGTH],
        len: 0,
    };
    if fmt::Write::write_fmt(&mut scratch, args).is_err() {
        return Err(ValueError::DestinationTooSmall {
            required: SCRATCH_LENGTH + 1,
            available: destination.len(),
        });
    }
    let bytes = &scratch.buffer[..scratch.len];
    if bytes.len() > destination.len() {
        return Err(ValueError::DestinationTooSmall {
            required: bytes.len(),
            available: destination.len(),
        });
    }
    destination[..bytes.len()].copy_from_slice(bytes);
    Ok(bytes.len())
}
