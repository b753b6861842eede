//! Decoder configuration
//!
//! The decoder is configured from a small YAML document:
//!
//! ```yaml
//! log_level: debug
//! hex_dump: true
//! dissect_embedded: false
//! ```
//!
//! Every key is optional; missing keys take the [`Default`] value.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Runtime options for a DTAP decoder instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Log level used when the front end initializes logging
    pub log_level: LogLevel,
    /// Emit a trace-level hex dump of every decoded frame
    pub hex_dump: bool,
    /// Hand embedded payloads (facility components, RP-PDUs, LLC/HLC) to the
    /// configured sub-decoder. When false they are reported as opaque bytes.
    pub dissect_embedded: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            hex_dump: false,
            dissect_embedded: true,
        }
    }
}

impl DecoderConfig {
    /// Parses a decoder configuration from a YAML string.
    ///
    /// # Example
    ///
    /// ```
    /// use gsmdtap_common::config::DecoderConfig;
    /// use gsmdtap_common::logging::LogLevel;
    ///
    /// let config = DecoderConfig::from_yaml("log_level: trace\nhex_dump: true\n").unwrap();
    /// assert_eq!(config.log_level, LogLevel::Trace);
    /// assert!(config.hex_dump);
    /// assert!(config.dissect_embedded);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a decoder configuration from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&contents)
    }

    /// Serializes the configuration back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
