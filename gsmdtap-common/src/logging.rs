//! Logging infrastructure for gsmdtap
//!
//! Logging goes through the `tracing` crate. Front ends call [`init_logging`]
//! once; the decoder itself only emits events and never installs a subscriber.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level, includes frame hex dumps
    Trace,
    /// Debug level, one line per decoded frame
    Debug,
    /// Info level (default)
    #[default]
    Info,
    /// Warn level
    Warn,
    /// Error level
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("unknown log level: {s}")),
        }
    }
}

/// Initialize the tracing subscriber with the specified log level.
///
/// `RUST_LOG` overrides `level` when set. Calling this twice is harmless;
/// the second subscriber is ignored.
///
/// # Example
///
/// ```
/// use gsmdtap_common::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    init_logging_with_filter(&level.to_string());
}

/// Initialize logging with a custom filter string, e.g.
/// `"info,gsmdtap_codec=trace"`.
pub fn init_logging_with_filter(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log one decoded frame at debug level, with a hex dump at trace level.
///
/// * `protocol` - short family name, e.g. "MM" or "CC"
/// * `direction` - anything printable describing the link direction
/// * `summary` - the one-line message summary
/// * `data` - raw frame bytes
pub fn log_frame(protocol: &str, direction: impl fmt::Display, summary: &str, data: &[u8]) {
    tracing::debug!(
        protocol = protocol,
        direction = %direction,
        len = data.len(),
        "{}",
        summary
    );
    tracing::trace!(protocol = protocol, hex = %HexDump(data), "frame payload");
}

/// Wrapper for compact hex formatting
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Format bytes as a classic hex dump: offset, sixteen hex bytes split in two
/// groups of eight, then the printable ASCII column.
///
/// ```
/// use gsmdtap_common::logging::format_hex_dump;
///
/// let dump = format_hex_dump(&[0x05, 0x08, 0x41]);
/// assert!(dump.starts_with("0000  05 08 41"));
/// ```
pub fn format_hex_dump(data: &[u8]) -> String {
    if data.is_empty() {
        return String::from("(empty)");
    }

    let mut lines = Vec::with_capacity(data.len().div_ceil(16));
    for (row, chunk) in data.chunks(16).enumerate() {
        let mut line = String::with_capacity(72);
        let _ = write!(line, "{:04x} ", row * 16);
        for col in 0..16 {
            if col == 8 {
                line.push(' ');
            }
            match chunk.get(col) {
                Some(byte) => {
                    let _ = write!(line, " {byte:02x}");
                }
                None => line.push_str("   "),
            }
        }
        line.push_str("  ");
        line.extend(chunk.iter().map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        }));
        lines.push(line);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!("trace".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_display_matches_parse() {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_log_level_serde_lowercase() {
        let level: LogLevel = serde_yaml::from_str("debug").unwrap();
        assert_eq!(level, LogLevel::Debug);
        assert_eq!(serde_yaml::to_string(&LogLevel::Warn).unwrap().trim(), "warn");
    }

    #[test]
    fn test_hex_dump_empty() {
        assert_eq!(format_hex_dump(&[]), "(empty)");
    }

    #[test]
    fn test_hex_dump_rows() {
        let data: Vec<u8> = (0..20).collect();
        let dump = format_hex_dump(&data);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0000  00 01 02 03 04 05 06 07  08 09"));
        assert!(lines[1].starts_with("0010  10 11 12 13"));
    }

    #[test]
    fn test_hex_dump_ascii_column() {
        let dump = format_hex_dump(b"Hi\x01");
        assert!(dump.ends_with("Hi."));
    }

    #[test]
    fn test_hex_wrapper() {
        assert_eq!(HexDump(&[0xde, 0xad, 0xbe, 0xef]).to_string(), "deadbeef");
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(LogLevel::Error);
        init_logging_with_filter("error");
    }
}
