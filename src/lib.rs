//! valuekit - Three-valued logic and validated value types
//!
//! valuekit provides a Kleene three-valued boolean ([`Trilean`]), NA-aware
//! equality over optional values, and a family of small value types that
//! validate on construction and parse/format a canonical text form.
//!
//! # Quick Start
//!
//! ```ignore
//! use valuekit::{LanguageCode, SpanSerializable, Tag, Trilean};
//!
//! // Kleene logic: NA propagates unless the other side decides the result
//! assert_eq!(Trilean::NA & Trilean::FALSE, Trilean::FALSE);
//! assert!(Trilean::equals(Trilean::NA, Trilean::NA).is_na());
//!
//! // Value types validate on the way in
//! let tag = Tag::new("release-notes")?;
//! let code = LanguageCode::parse("EN")?;
//! assert_eq!(code, LanguageCode::EN);
//! ```
//!
//! # Layout
//!
//! - [`valuekit_core`]: Trilean, ternary equality, NA wrappers, value
//!   contracts, storage converters and configuration
//! - [`valuekit_values`]: general-purpose value types
//! - [`valuekit_language`]: linguistic value types

pub use valuekit_core::*;
pub use valuekit_language::*;
pub use valuekit_values::*;

pub use valuekit_core;
pub use valuekit_language;
pub use valuekit_values;
