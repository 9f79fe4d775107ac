//! Word text
//!
//! The written form of a single word (or short multi-word expression), or a
//! template placeholder to be substituted later.
//!
//! ## Validation
//!
//! 1-32 characters, and either:
//! - letters, with inner whitespace, and after the first character `'`,
//!   `’` or an inner `-` (`"ice cream"`, `"o'clock"`, `"well-known"`); or
//! - a template: `{{id}}` where `id` is lowercase ASCII letters and `_`,
//!   optionally with a single whitespace just inside each pair of braces,
//!   at least 8 characters overall (`"{{ child_name }}"`)

use valuekit_core::value::write_str;
use valuekit_core::{
    impl_serde_as_text, impl_text_boundary, ComparableValue, EquatableValue, Result,
    SpanSerializable, ValueError, ValueType,
};

/// Maximum length of a word in characters
pub const MAX_WORD_LENGTH: usize = 32;

const MIN_TEMPLATE_LENGTH: usize = 8;

/// The validated text of a word
///
/// The default value is uninitialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct WordText(Option<String>);

impl WordText {
    /// Create word text, validating it
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the text is not a valid word.
    pub fn new(word: impl Into<String>) -> Result<Self> {
        Self::from_value(word.into())
    }

    /// Check whether `word` is valid word text
    pub fn is_valid_word(word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() || chars.len() > MAX_WORD_LENGTH {
            return false;
        }
        if chars[0] == '{' {
            is_valid_template(&chars)
        } else {
            is_valid_plain(&chars)
        }
    }

    /// The word text
    ///
    /// # Errors
    ///
    /// Returns `ValueError::Uninitialized` for a default instance.
    pub fn as_str(&self) -> Result<&str> {
        self.value().map(String::as_str)
    }

    /// Length in characters, zero if uninitialized
    pub fn len(&self) -> usize {
        self.0.as_deref().map_or(0, |s| s.chars().count())
    }

    /// Whether the word is uninitialized
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Whether this is a template placeholder
    pub fn is_template(&self) -> bool {
        self.0.as_deref().map_or(false, |s| s.starts_with('{'))
    }

    /// Case-insensitive comparison
    pub fn eq_ignore_case(&self, other: &WordText) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.to_lowercase() == b.to_lowercase(),
            (None, None) => true,
            _ => false,
        }
    }
}

fn is_valid_template(chars: &[char]) -> bool {
    let n = chars.len();
    if n < MIN_TEMPLATE_LENGTH {
        return false;
    }
    if chars[1] != '{' || chars[n - 1] != '}' || chars[n - 2] != '}' {
        return false;
    }
    chars[2..n - 2].iter().enumerate().all(|(offset, &c)| {
        let i = offset + 2;
        if c.is_whitespace() {
            i == 2 || i == n - 3
        } else {
            c.is_ascii_lowercase() || c == '_'
        }
    })
}

fn is_valid_plain(chars: &[char]) -> bool {
    let last = chars.len() - 1;
    chars.iter().enumerate().all(|(i, &c)| {
        if c.is_alphabetic() {
            return true;
        }
        if c.is_whitespace() {
            return i > 0 && i < last;
        }
        match c {
            '\'' | '\u{2019}' => i > 0,
            '-' => i > 0 && i < last,
            _ => false,
        }
    })
}

impl ValueType for WordText {
    const TYPE_NAME: &'static str = "WordText";
}

impl EquatableValue for WordText {
    type Underlying = String;

    fn is_valid_value(value: &String) -> bool {
        Self::is_valid_word(value)
    }

    fn from_value(value: String) -> Result<Self> {
        if Self::is_valid_value(&value) {
            Ok(WordText(Some(value)))
        } else {
            Err(ValueError::out_of_range(Self::TYPE_NAME, value))
        }
    }

    fn value(&self) -> Result<&String> {
        self.0
            .as_ref()
            .ok_or_else(|| ValueError::uninitialized(Self::TYPE_NAME))
    }
}

impl ComparableValue for WordText {}

impl SpanSerializable for WordText {
    const MAX_SERIALIZED_CHAR_LENGTH: usize = MAX_WORD_LENGTH;
    const MAX_SERIALIZED_BYTE_LENGTH: usize = MAX_WORD_LENGTH * 4;

    fn try_format(&self, destination: &mut [u8]) -> Result<usize> {
        write_str(self.as_str()?, destination)
    }

    fn parse(s: &str) -> Result<Self> {
        if Self::is_valid_word(s) {
            Ok(WordText(Some(s.to_string())))
        } else {
            Err(ValueError::format(Self::TYPE_NAME, s))
        }
    }
}

impl_text_boundary!(WordText);
impl_serde_as_text!(WordText);
