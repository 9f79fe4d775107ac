//! Shared test utilities for the integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use std::sync::Once;

pub use valuekit::{SpanSerializable, Trilean};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Install a test-writer tracing subscriber once per test binary.
///
/// Set `RUST_LOG=debug` to see validation-set construction and conversion
/// failures while debugging a test.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Assertions
// ============================================================================

/// Format `value`, parse the text back, and assert the result is equal.
pub fn assert_text_roundtrip<T>(value: &T)
where
    T: SpanSerializable + PartialEq + std::fmt::Debug,
{
    let text = value.format_to_string().expect("format");
    assert!(
        text.len() <= T::MAX_SERIALIZED_BYTE_LENGTH,
        "{} bytes exceeds bound {}",
        text.len(),
        T::MAX_SERIALIZED_BYTE_LENGTH
    );
    assert!(text.chars().count() <= T::MAX_SERIALIZED_CHAR_LENGTH);
    let parsed = T::parse(&text).expect("parse");
    assert_eq!(&parsed, value, "roundtrip through '{}'", text);
}

/// Format into a buffer exactly one byte too small and assert nothing is written.
pub fn assert_short_buffer_untouched<T: SpanSerializable>(value: &T) {
    let text = value.format_to_string().expect("format");
    if text.is_empty() {
        return;
    }
    let mut buffer = vec![b'#'; text.len() - 1];
    assert!(value.try_format(&mut buffer).is_err());
    assert!(buffer.iter().all(|&b| b == b'#'), "partial write for '{}'", text);
}

/// Every Trilean value, for exhaustive checks
pub fn trileans() -> [Trilean; 3] {
    Trilean::ALL
}
