//! Sign type
//!
//! A word together with the modality it is expressed in, written as
//! `modality:word` (`"spoken:dog"`, `"signed:thank you"`).

use crate::sign_modality::SignModality;
use crate::word_text::WordText;
use valuekit_core::value::write_parts;
use valuekit_core::{
    impl_serde_as_text, impl_text_boundary, EquatableValue, Result, SpanSerializable, ValueError,
    ValueType,
};

/// A word in a modality
///
/// The default value has both parts uninitialized and cannot be formatted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Sign {
    modality: SignModality,
    word: WordText,
}

impl Sign {
    /// Create a sign
    ///
    /// # Errors
    ///
    /// Returns `ValueError::Uninitialized` if either part is uninitialized.
    pub fn new(modality: SignModality, word: WordText) -> Result<Self> {
        modality.value()?;
        word.value()?;
        Ok(Sign { modality, word })
    }

    /// The modality
    pub fn modality(&self) -> &SignModality {
        &self.modality
    }

    /// The word
    pub fn word(&self) -> &WordText {
        &self.word
    }
}

impl ValueType for Sign {
    const TYPE_NAME: &'static str = "Sign";
}

impl SpanSerializable for Sign {
    const MAX_SERIALIZED_CHAR_LENGTH: usize =
        SignModality::MAX_SERIALIZED_CHAR_LENGTH + 1 + WordText::MAX_SERIALIZED_CHAR_LENGTH;
    const MAX_SERIALIZED_BYTE_LENGTH: usize =
        SignModality::MAX_SERIALIZED_BYTE_LENGTH + 1 + WordText::MAX_SERIALIZED_BYTE_LENGTH;

    fn try_format(&self, destination: &mut [u8]) -> Result<usize> {
        write_parts(&[self.modality.as_str()?, ":", self.word.as_str()?], destination)
    }

    fn parse(s: &str) -> Result<Self> {
        let invalid = || ValueError::format(Self::TYPE_NAME, s);
        let index = s.find(':').filter(|&i| i > 0).ok_or_else(invalid)?;
        let modality = SignModality::parse(&s[..index]).map_err(|_| invalid())?;
        let word = WordText::parse(&s[index + 1..]).map_err(|_| invalid())?;
        Ok(Sign { modality, word })
    }
}

impl_text_boundary!(Sign);
impl_serde_as_text!(Sign);
