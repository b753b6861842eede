//! Frame input parsing
//!
//! One frame per line, hex encoded. Whitespace, a leading `0x` and
//! `:` separators (as copied out of trace viewers) are accepted. Blank lines
//! and lines starting with `#` are skipped.

use std::io::BufRead;

use gsmdtap_common::Result;

/// Parses one hex encoded frame.
pub fn parse_frame(line: &str) -> Result<Vec<u8>> {
    let trimmed = line.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let compact: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    Ok(hex::decode(compact)?)
}

/// True for lines that carry no frame.
pub fn is_skipped(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Reads every frame line from `reader`.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !is_skipped(&line) {
            lines.push(line);
        }
    }
    Ok(lines)
}
