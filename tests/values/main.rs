//! Value-type integration tests
//!
//! Exercises the public surface of the `valuekit` facade: Trilean logic,
//! NA-aware equality, the exemplar value types, the JSON boundary, storage
//! converters and configuration files.

#[path = "../common/mod.rs"]
mod common;

mod closed_sets;
mod config_files;
mod json_boundary;
mod storage_converters;
mod ternary_laws;
mod trilean_laws;
mod value_types;
