//! Core types and traits for valuekit
//!
//! This crate defines the foundations the value-type crates build on:
//! - Trilean: three-valued (Kleene) logic
//! - Ternary: NA-aware equality laws over any `NaValue`
//! - Na / NaInt: NA-or-value wrappers
//! - Value contracts: `EquatableValue`, `ComparableValue`, `SpanSerializable`
//! - AsciiString and FrozenSet: storage and membership for closed value sets
//! - Convert: storage conversion with validation on read
//! - Config: `valuekit.toml`
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ascii;
pub mod config;
pub mod convert;
pub mod error;
pub mod frozen;
pub mod macros;
pub mod na;
pub mod ternary;
pub mod trilean;
pub mod value;

pub use ascii::AsciiString;
pub use config::{ConfigError, ValuesConfig, CONFIG_FILE_NAME};
pub use convert::{
    ConversionResult, OptionConverter, StoreConverter, StoreValue, TextConverter,
    TrileanConverter, TrileanStorage,
};
pub use error::{ConversionError, NaValueError, Result, ValueError};
pub use frozen::FrozenSet;
pub use na::{Na, NaInt, NaSentinel};
pub use ternary::{
    ensure_known, equal_and_neither_na, equal_or_both_na, equal_or_either_na, equals, NaValue,
    TernaryEq,
};
pub use trilean::{SignedNumber, Trilean, UnsignedNumber};
pub use value::{
    write_fmt, write_parts, write_str, ComparableValue, EquatableValue, SpanSerializable, ValueType,
};

#[doc(hidden)]
pub use once_cell as __once_cell;
#[doc(hidden)]
pub use serde as __serde;
