//! Part-of-speech tag from an arbitrary tag set
//!
//! Unlike [`crate::TreebankPosTag`] and [`crate::UniversalPosTag`], a
//! `PosTag` accepts any text up to 32 characters, so it can carry tags from
//! tag sets this crate does not know about.

use valuekit_core::value::write_str;
use valuekit_core::{
    impl_serde_as_text, impl_text_boundary, ComparableValue, EquatableValue, Result,
    SpanSerializable, ValueError, ValueType,
};

/// Maximum length of a tag in characters
pub const MAX_POS_TAG_LENGTH: usize = 32;

/// A free-form part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PosTag(String);

impl PosTag {
    /// The empty tag
    pub const EMPTY: PosTag = PosTag(String::new());

    /// Create a tag
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the tag is longer than 32 characters.
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        Self::from_value(tag.into())
    }

    /// The tag text
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty tag
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// ASCII case-insensitive comparison
    pub fn eq_ignore_ascii_case(&self, other: &PosTag) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl ValueType for PosTag {
    const TYPE_NAME: &'static str = "PosTag";
}

impl EquatableValue for PosTag {
    type Underlying = String;

    fn is_valid_value(value: &String) -> bool {
        value.chars().count() <= MAX_POS_TAG_LENGTH
    }

    fn from_value(value: String) -> Result<Self> {
        if Self::is_valid_value(&value) {
            Ok(PosTag(value))
        } else {
            Err(ValueError::out_of_range(Self::TYPE_NAME, value))
        }
    }

    fn value(&self) -> Result<&String> {
        Ok(&self.0)
    }
}

impl ComparableValue for PosTag {}

impl SpanSerializable for PosTag {
    const MAX_SERIALIZED_CHAR_LENGTH: usize = MAX_POS_TAG_LENGTH;
    const MAX_SERIALIZED_BYTE_LENGTH: usize = MAX_POS_TAG_LENGTH * 4;

    fn try_format(&self, destination: &mut [u8]) -> Result<usize> {
        write_str(&self.0, destination)
    }

    fn parse(s: &str) -> Result<Self> {
        PosTag::new(s).map_err(|_| ValueError::format(Self::TYPE_NAME, s))
    }
}

impl PartialEq<str> for PosTag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PosTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl_text_boundary!(PosTag);
impl_serde_as_text!(PosTag);
