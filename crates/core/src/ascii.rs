//! ASCII-only strings
//!
//! [`AsciiString`] backs the closed-set and tag value types. Instances built
//! from literals are borrowed for `'static` and can be created in `const`
//! context, which lets closed enumerations declare their members as
//! associated constants.

use crate::error::{Result, ValueError};
use std::borrow::{Borrow, Cow};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A string containing only ASCII characters
#[derive(Clone)]
pub struct AsciiString(Cow<'static, str>);

impl AsciiString {
    /// Wrap a static ASCII literal
    ///
    /// # Panics
    ///
    /// Panics if `s` contains a non-ASCII byte. In `const` context the panic
    /// is a compile error.
    pub const fn from_static(s: &'static str) -> Self {
        assert!(is_ascii(s), "AsciiString literal must be ASCII");
        AsciiString(Cow::Borrowed(s))
    }

    /// Wrap an owned string
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `s` contains a non-ASCII character.
    pub fn new(s: impl Into<String>) -> Result<Self> {
        let s = s.into();
        if s.is_ascii() {
            Ok(AsciiString(Cow::Owned(s)))
        } else {
            Err(ValueError::out_of_range("AsciiString", s))
        }
    }

    /// Wrap an owned string the caller has already restricted to ASCII
    ///
    /// Checked only in debug builds. Use [`AsciiString::new`] for text from
    /// outside the crate.
    pub fn from_ascii_unchecked(s: String) -> Self {
        debug_assert!(s.is_ascii(), "AsciiString text must be ASCII");
        AsciiString(Cow::Owned(s))
    }

    /// The string contents
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The string as bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in bytes (equal to length in characters)
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the string is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase copy
    pub fn to_ascii_lowercase(&self) -> AsciiString {
        AsciiString(Cow::Owned(self.0.to_ascii_lowercase()))
    }

    /// Uppercase copy
    pub fn to_ascii_uppercase(&self) -> AsciiString {
        AsciiString(Cow::Owned(self.0.to_ascii_uppercase()))
    }

    /// Unwrap into an owned `String`
    pub fn into_string(self) -> String {
        self.0.into_owned()
    }
}

const fn is_ascii(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] > 0x7F {
            return false;
        }
        i += 1;
    }
    true
}

impl TryFrom<&str> for AsciiString {
    type Error = ValueError;

    fn try_from(s: &str) -> Result<Self> {
        AsciiString::new(s)
    }
}

impl TryFrom<String> for AsciiString {
    type Error = ValueError;

    fn try_from(s: String) -> Result<Self> {
        AsciiString::new(s)
    }
}

impl AsRef<str> for AsciiString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for AsciiString {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for AsciiString {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for AsciiString {}

impl PartialEq<str> for AsciiString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for AsciiString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

// Must agree with `str`'s hash for `Borrow<str>` lookups.
impl Hash for AsciiString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialOrd for AsciiString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AsciiString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for AsciiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for AsciiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}
