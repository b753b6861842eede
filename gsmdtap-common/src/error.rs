//! Error types for gsmdtap

use thiserror::Error;

/// Error types shared by the gsmdtap front ends.
///
/// Decoding faults are not reported through this type; the codec keeps its
/// own `CodecError` so that a malformed frame never becomes an I/O-style error.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File or stream I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Input that was expected to be hex encoded was not.
    #[error("Invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Result alias using the common [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
