//! Test utility functions for integration tests
//!
//! Provides common utilities for test setup, logging, and assertions.

use gsmdtap_codec::{DecodedMessage, FieldKind};
use tracing_subscriber::{fmt, EnvFilter};

/// Result type for integration tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Initialize logging for tests with optional filter
///
/// Uses RUST_LOG environment variable if set, otherwise defaults to "info"
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}

/// All field labels of a decoded message, in order.
pub fn labels(msg: &DecodedMessage) -> Vec<&str> {
    msg.fields.iter().map(|f| f.label.as_str()).collect()
}

/// Labels of the element headings only.
pub fn element_headings(msg: &DecodedMessage) -> Vec<&str> {
    msg.fields_of_kind(FieldKind::Element)
        .map(|f| f.label.as_str())
        .collect()
}

/// Asserts that every field range lies inside the frame and that the tree
/// depth never jumps by more than one level.
pub fn assert_well_formed(msg: &DecodedMessage, frame_len: usize) {
    let mut previous_depth = 0u8;
    for field in &msg.fields {
        assert!(
            field.range.start <= field.range.end && field.range.end <= frame_len.max(1),
            "field {:?} outside frame of {} octets",
            field,
            frame_len
        );
        assert!(
            field.depth <= previous_depth + 1,
            "field {:?} skips a level",
            field
        );
        previous_depth = field.depth;
    }
    assert!(msg.consumed <= frame_len);
}
