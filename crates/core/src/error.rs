//! Error types for value construction, parsing and conversion
//!
//! This module defines all error types used throughout the workspace.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! ## Taxonomy
//!
//! - **Validation**: `OutOfRange` (constructor path) and `Format` (parse path)
//! - **Missing value**: `NaValueError`, reading the value of something that is NA
//! - **Uninitialized**: a default-constructed value that was never validated
//! - **Conversion**: `ConversionError`, invalid data at the storage boundary

use thiserror::Error;

/// Result type alias for value operations
pub type Result<T> = std::result::Result<T, ValueError>;

/// Errors raised by value construction, parsing and formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The underlying value does not satisfy the type's validity predicate
    #[error("'{value}' is not a valid {type_name} value")]
    OutOfRange {
        /// Name of the value type
        type_name: &'static str,
        /// Rendering of the rejected value
        value: String,
    },

    /// Text could not be parsed as the value type
    #[error("could not parse {type_name} from '{input}'")]
    Format {
        /// Name of the value type
        type_name: &'static str,
        /// The rejected input
        input: String,
    },

    /// The value was default-constructed and never assigned a valid value
    #[error("{type_name} value has not been initialized")]
    Uninitialized {
        /// Name of the value type
        type_name: &'static str,
    },

    /// The destination buffer cannot hold the formatted value
    #[error("destination too small: {required} bytes required, {available} available")]
    DestinationTooSmall {
        /// Bytes needed for the formatted value
        required: usize,
        /// Bytes available in the destination
        available: usize,
    },

    /// A number outside the Trilean encoding was converted to a Trilean
    #[error("cannot convert {value} to Trilean")]
    InvalidTrileanNumber {
        /// Rendering of the rejected number
        value: String,
    },

    /// A value that is NA was read as if it were known
    #[error(transparent)]
    Na(#[from] NaValueError),
}

impl ValueError {
    /// Create an `OutOfRange` error for `type_name`
    pub fn out_of_range(type_name: &'static str, value: impl ToString) -> Self {
        ValueError::OutOfRange {
            type_name,
            value: value.to_string(),
        }
    }

    /// Create a `Format` error for `type_name`
    pub fn format(type_name: &'static str, input: impl Into<String>) -> Self {
        ValueError::Format {
            type_name,
            input: input.into(),
        }
    }

    /// Create an `Uninitialized` error for `type_name`
    pub fn uninitialized(type_name: &'static str) -> Self {
        ValueError::Uninitialized { type_name }
    }

    /// Whether this error reports a default value that was never initialized
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, ValueError::Uninitialized { .. })
    }

    /// Whether this error reports invalid input (as opposed to a missing or
    /// uninitialized value)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ValueError::OutOfRange { .. } | ValueError::Format { .. }
        )
    }
}

/// A value that is NA (missing, unknown, not available) was accessed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NaValueError {
    message: String,
}

impl NaValueError {
    /// Create an error with the default message
    pub fn new() -> Self {
        Self::with_message("value is not available (NA)")
    }

    /// Create an error with a custom message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for NaValueError {
    fn default() -> Self {
        Self::new()
    }
}

/// A stored value could not be converted to or from its value type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert stored value '{raw}' to {type_name}: {source}")]
pub struct ConversionError {
    /// Name of the value type
    pub type_name: &'static str,
    /// Rendering of the raw stored value
    pub raw: String,
    /// Why the conversion failed
    #[source]
    pub source: ValueError,
}

impl ConversionError {
    /// Create a conversion error carrying the raw stored value
    pub fn new(type_name: &'static str, raw: impl ToString, source: ValueError) -> Self {
        Self {
            type_name,
            raw: raw.to_string(),
            source,
        }
    }
}
