//! Tag type
//!
//! A short ASCII label used for categorising data, e.g. `"reading"`,
//! `"age-3:6"`, `"group(a)"`.
//!
//! ## Validation
//!
//! Tags must:
//! - Be 2-120 characters
//! - Start and end with an ASCII letter or digit
//! - Contain only ASCII letters, digits and `- : / ( )`

use valuekit_core::value::write_str;
use valuekit_core::{
    impl_serde_as_text, impl_text_boundary, AsciiString, ComparableValue, EquatableValue, Result,
    SpanSerializable, ValueError, ValueType,
};

/// Minimum length of a tag
pub const MIN_TAG_LENGTH: usize = 2;

/// Maximum length of a tag
pub const MAX_TAG_LENGTH: usize = 120;

/// A validated ASCII label
///
/// The default value is uninitialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Tag(Option<AsciiString>);

impl Tag {
    /// Create a tag, validating the input
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the text is not a valid tag.
    pub fn new(tag: &str) -> Result<Self> {
        if Self::is_valid_tag(tag) {
            Ok(Tag(Some(AsciiString::new(tag)?)))
        } else {
            Err(ValueError::out_of_range(Self::TYPE_NAME, tag))
        }
    }

    /// Check whether `tag` is a valid tag
    pub fn is_valid_tag(tag: &str) -> bool {
        let bytes = tag.as_bytes();
        if bytes.len() < MIN_TAG_LENGTH || bytes.len() > MAX_TAG_LENGTH {
            return false;
        }
        let last = bytes.len() - 1;
        bytes[0].is_ascii_alphanumeric()
            && bytes[last].is_ascii_alphanumeric()
            && bytes[1..last].iter().all(|&b| Self::is_valid_inner(b))
    }

    #[inline]
    fn is_valid_inner(b: u8) -> bool {
        b.is_ascii_alphanumeric() || matches!(b, b'-' | b':' | b'/' | b'(' | b')')
    }

    /// The tag text
    ///
    /// # Errors
    ///
    /// Returns `ValueError::Uninitialized` for a default instance.
    pub fn as_str(&self) -> Result<&str> {
        self.value().map(AsciiString::as_str)
    }

    /// Check if this tag starts with `prefix`
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.as_str().map_or(false, |s| s.starts_with(prefix))
    }

    /// Check if this tag ends with `suffix`
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.as_str().map_or(false, |s| s.ends_with(suffix))
    }

    /// Check if this tag contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.as_str().map_or(false, |s| s.contains(needle))
    }
}

impl ValueType for Tag {
    const TYPE_NAME: &'static str = "Tag";
}

impl EquatableValue for Tag {
    type Underlying = AsciiString;

    fn is_valid_value(value: &AsciiString) -> bool {
        Self::is_valid_tag(value.as_str())
    }

    fn from_value(value: AsciiString) -> Result<Self> {
        if Self::is_valid_value(&value) {
            Ok(Tag(Some(value)))
        } else {
            Err(ValueError::out_of_range(Self::TYPE_NAME, value))
        }
    }

    fn value(&self) -> Result<&AsciiString> {
        self.0
            .as_ref()
            .ok_or_else(|| ValueError::uninitialized(Self::TYPE_NAME))
    }
}

impl ComparableValue for Tag {}

impl SpanSerializable for Tag {
    const MAX_SERIALIZED_CHAR_LENGTH: usize = MAX_TAG_LENGTH;
    const MAX_SERIALIZED_BYTE_LENGTH: usize = MAX_TAG_LENGTH;

    fn try_format(&self, destination: &mut [u8]) -> Result<usize> {
        write_str(self.as_str()?, destination)
    }

    fn parse(s: &str) -> Result<Self> {
        Tag::new(s).map_err(|_| ValueError::format(Self::TYPE_NAME, s))
    }
}

impl_text_boundary!(Tag);
impl_serde_as_text!(Tag);
