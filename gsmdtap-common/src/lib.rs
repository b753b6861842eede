//! Common utilities for gsmdtap
//!
//! This crate holds the pieces every gsmdtap crate shares: logging setup,
//! hex dump helpers, the YAML decoder configuration and the common error type.

pub mod config;
pub mod error;
pub mod logging;

pub use config::DecoderConfig;
pub use error::{Error, Result};
pub use logging::{
    format_hex_dump, init_logging, init_logging_with_filter, log_frame, HexDump, LogLevel,
};
