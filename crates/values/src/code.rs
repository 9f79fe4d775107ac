//! Code type
//!
//! A short free-text code, such as a product or school code. Surrounding
//! whitespace is not significant and is removed on construction.

use valuekit_core::value::write_str;
use valuekit_core::{
    impl_serde_as_text, impl_text_boundary, ComparableValue, EquatableValue, Result,
    SpanSerializable, ValueError, ValueType,
};

/// Maximum length of a code in characters
pub const MAX_CODE_LENGTH: usize = 32;

/// A trimmed code of at most 32 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Code(String);

impl Code {
    /// The empty code
    pub const EMPTY: Code = Code(String::new());

    /// Create a code, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the trimmed code is longer than
    /// 32 characters.
    pub fn new(code: &str) -> Result<Self> {
        Self::from_value(code.trim().to_string())
    }

    /// The code text
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty code
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueType for Code {
    const TYPE_NAME: &'static str = "Code";
}

impl EquatableValue for Code {
    type Underlying = String;

    fn is_valid_value(value: &String) -> bool {
        value.chars().count() <= MAX_CODE_LENGTH && value.trim().len() == value.len()
    }

    fn from_value(value: String) -> Result<Self> {
        if Self::is_valid_value(&value) {
            Ok(Code(value))
        } else {
            Err(ValueError::out_of_range(Self::TYPE_NAME, value))
        }
    }

    fn value(&self) -> Result<&String> {
        Ok(&self.0)
    }
}

impl ComparableValue for Code {}

impl SpanSerializable for Code {
    const MAX_SERIALIZED_CHAR_LENGTH: usize = MAX_CODE_LENGTH;
    const MAX_SERIALIZED_BYTE_LENGTH: usize = MAX_CODE_LENGTH * 4;

    fn try_format(&self, destination: &mut [u8]) -> Result<usize> {
        write_str(&self.0, destination)
    }

    fn parse(s: &str) -> Result<Self> {
        Code::new(s).map_err(|_| ValueError::format(Self::TYPE_NAME, s))
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl_text_boundary!(Code);
impl_serde_as_text!(Code);
