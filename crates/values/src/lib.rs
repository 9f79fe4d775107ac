//! General-purpose validated value types
//!
//! - Tag: short ASCII label
//! - Code: trimmed free-text code
//! - Identifier: random identifier with optional prefix
//! - LanguageCode: ISO 639-1 alpha-2 code
//! - Count: JSON-safe non-negative integer
//! - AgeInMonths: age as `years:months`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod age_in_months;
pub mod code;
pub mod count;
pub mod identifier;
pub mod language_code;
pub mod tag;

pub use age_in_months::AgeInMonths;
pub use code::{Code, MAX_CODE_LENGTH};
pub use count::{Count, CountConverter, MAX_JSON_SAFE_INTEGER};
pub use identifier::{Identifier, DEFAULT_ID_LENGTH, MAX_IDENTIFIER_LENGTH};
pub use language_code::LanguageCode;
pub use tag::{Tag, MAX_TAG_LENGTH, MIN_TAG_LENGTH};
