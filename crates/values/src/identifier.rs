//! Identifier type
//!
//! An opaque random identifier with an optional readable prefix, in the
//! style of `cus_MBvF2uhJkOAcKF`.
//!
//! ## Validation
//!
//! - The id part is 12-256 ASCII letters or digits
//! - An optional prefix is separated from the id by the last `_`
//! - The prefix is 2-23 ASCII letters, digits or `_` and does not start with `_`
//! - The whole identifier is at most 279 characters

use rand::distributions::Alphanumeric;
use rand::Rng;
use valuekit_core::value::write_str;
use valuekit_core::{
    impl_serde_as_text, impl_text_boundary, AsciiString, ComparableValue, EquatableValue, Result,
    SpanSerializable, ValueError, ValueType,
};

/// Minimum length of the id part
pub const MIN_ID_LENGTH: usize = 12;

/// Maximum length of the id part
pub const MAX_ID_LENGTH: usize = 256;

/// Minimum length of a prefix given to [`Identifier::new_random_with`]
///
/// Validation also accepts single-character prefixes.
pub const MIN_PREFIX_LENGTH: usize = 2;

/// Maximum length of a prefix
pub const MAX_PREFIX_LENGTH: usize = 23;

/// Maximum length of a whole identifier
pub const MAX_IDENTIFIER_LENGTH: usize = MAX_PREFIX_LENGTH + MAX_ID_LENGTH;

/// Length of the id part of a generated identifier
pub const DEFAULT_ID_LENGTH: usize = 48;

/// Separates the prefix from the id
pub const PREFIX_DELIMITER: char = '_';

/// A validated identifier
///
/// The default value is uninitialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Identifier(Option<AsciiString>);

impl Identifier {
    /// Create an identifier from text, validating it
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the text is not a valid identifier.
    pub fn new(id: &str) -> Result<Self> {
        if Self::is_valid_identifier(id) {
            Ok(Identifier(Some(AsciiString::new(id)?)))
        } else {
            Err(ValueError::out_of_range(Self::TYPE_NAME, id))
        }
    }

    /// Generate a random identifier with the default length and no prefix
    pub fn new_random() -> Self {
        Identifier(Some(Self::generate(DEFAULT_ID_LENGTH, "")))
    }

    /// Generate a random identifier with an id part of `length` characters
    /// and an optional prefix
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `length` is outside 12-256 or the
    /// prefix is not valid.
    pub fn new_random_with(length: usize, prefix: Option<&str>) -> Result<Self> {
        if !(MIN_ID_LENGTH..=MAX_ID_LENGTH).contains(&length) {
            return Err(ValueError::out_of_range(Self::TYPE_NAME, format!("id length {}", length)));
        }
        let prefix = prefix.unwrap_or("");
        let usable = prefix.len() >= MIN_PREFIX_LENGTH && Self::is_valid_prefix(prefix);
        if !prefix.is_empty() && !usable {
            return Err(ValueError::out_of_range(Self::TYPE_NAME, format!("prefix '{}'", prefix)));
        }
        let generated = Self::generate(length, prefix);
        if generated.len() > MAX_IDENTIFIER_LENGTH {
            return Err(ValueError::out_of_range(Self::TYPE_NAME, generated));
        }
        Ok(Identifier(Some(generated)))
    }

    fn generate(length: usize, prefix: &str) -> AsciiString {
        let mut text = String::with_capacity(prefix.len() + 1 + length);
        if !prefix.is_empty() {
            text.push_str(prefix);
            text.push(PREFIX_DELIMITER);
        }
        let mut rng = rand::thread_rng();
        text.extend((0..length).map(|_| char::from(rng.sample(Alphanumeric))));
        // Alphanumeric output and a validated prefix are ASCII
        AsciiString::from_ascii_unchecked(text)
    }

    /// Check whether `id` is a valid identifier
    pub fn is_valid_identifier(id: &str) -> bool {
        if id.len() < MIN_ID_LENGTH || id.len() > MAX_IDENTIFIER_LENGTH || !id.is_ascii() {
            return false;
        }
        match id.rfind(PREFIX_DELIMITER) {
            None => is_alphanumeric(id),
            Some(index) => {
                let (prefix, rest) = (&id[..index], &id[index + 1..]);
                Self::is_valid_prefix(prefix)
                    && (MIN_ID_LENGTH..=MAX_ID_LENGTH).contains(&rest.len())
                    && is_alphanumeric(rest)
            }
        }
    }

    fn is_valid_prefix(prefix: &str) -> bool {
        (1..=MAX_PREFIX_LENGTH).contains(&prefix.len())
            && !prefix.starts_with(PREFIX_DELIMITER)
            && prefix
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_')
    }

    /// The identifier text
    ///
    /// # Errors
    ///
    /// Returns `ValueError::Uninitialized` for a default instance.
    pub fn as_str(&self) -> Result<&str> {
        self.value().map(AsciiString::as_str)
    }

    /// The prefix, if any
    pub fn prefix(&self) -> Option<&str> {
        let text = self.as_str().ok()?;
        text.rfind(PREFIX_DELIMITER).map(|i| &text[..i])
    }

    /// The id part, without prefix
    pub fn id(&self) -> Option<&str> {
        let text = self.as_str().ok()?;
        Some(match text.rfind(PREFIX_DELIMITER) {
            Some(i) => &text[i + 1..],
            None => text,
        })
    }

    /// Length of the whole identifier, zero if uninitialized
    pub fn len(&self) -> usize {
        self.0.as_ref().map_or(0, AsciiString::len)
    }

    /// Whether the identifier is uninitialized
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn is_alphanumeric(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphanumeric())
}

impl ValueType for Identifier {
    const TYPE_NAME: &'static str = "Identifier";
}

impl EquatableValue for Identifier {
    type Underlying = AsciiString;

    fn is_valid_value(value: &AsciiString) -> bool {
        Self::is_valid_identifier(value.as_str())
    }

    fn from_value(value: AsciiString) -> Result<Self> {
        if Self::is_valid_value(&value) {
            Ok(Identifier(Some(value)))
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

impl ComparableValue for Identifier {}

impl SpanSerializable for Identifier {
    const MAX_SERIALIZED_CHAR_LENGTH: usize = MAX_IDENTIFIER_LENGTH;
    const MAX_SERIALIZED_BYTE_LENGTH: usize = MAX_IDENTIFIER_LENGTH;

    fn try_format(&self, destination: &mut [u8]) -> Result<usize> {
        write_str(self.as_str()?, destination)
    }

    fn parse(s: &str) -> Result<Self> {
        Identifier::new(s).map_err(|_| ValueError::format(Self::TYPE_NAME, s))
    }
}

impl_text_boundary!(Identifier);
impl_serde_as_text!(Identifier);
