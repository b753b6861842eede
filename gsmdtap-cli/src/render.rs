//! Text rendering of decoded frames

use std::fmt::Write as _;

use gsmdtap_codec::DecodedMessage;

/// One line per frame: index, summary and the fault if any.
pub fn render_summary(index: usize, msg: &DecodedMessage) -> String {
    let mut line = format!("{index:>4}  {}", msg.summary);
    if let Some(fault) = &msg.fault {
        let _ = write!(line, "  [{fault}]");
    }
    line
}

/// Indented field tree, each line prefixed by the field's byte range.
pub fn render_tree(index: usize, msg: &DecodedMessage) -> String {
    let mut out = format!(
        "Frame {index}: {} ({} octets, {})\n",
        msg.summary, msg.consumed, msg.direction
    );
    for field in &msg.fields {
        let range = format!("{}..{}", field.range.start, field.range.end);
        let _ = writeln!(out, "  {range:<9} {field}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsmdtap_codec::DtapDecoder;

    #[test]
    fn test_summary_line() {
        let msg = DtapDecoder::default().decode(&[0x05, 0x22, 0x11]);
        assert_eq!(render_summary(1, &msg), "   1  (DTAP) (MM) CM Service Reject");
    }

    #[test]
    fn test_summary_line_with_fault() {
        let msg = DtapDecoder::default().decode(&[0x0e, 0x01]);
        assert!(render_summary(2, &msg).ends_with("[Unsupported protocol discriminator (0xE)]"));
    }

    #[test]
    fn test_tree_ranges_and_indent() {
        let msg = DtapDecoder::default().decode(&[0x05, 0x22, 0x11]);
        let tree = render_tree(1, &msg);
        let lines: Vec<&str> = tree.lines().collect();
        assert_eq!(lines[0], "Frame 1: (DTAP) (MM) CM Service Reject (3 octets, downlink)");
        assert!(lines[1].starts_with("  0..1      Protocol Discriminator"));
        assert!(lines[2].starts_with("  0..1          0000 ...."));
        assert_eq!(lines.len(), msg.fields.len() + 1);
    }
}
