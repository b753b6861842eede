//! Bitfield annotation strings
//!
//! Renders which bits of an octet (or wider value) a field occupies:
//!
//! ```text
//! value 0x5a, mask 0x70, width 8  ->  ".101 ...."
//! ```
//!
//! Masked-in bits show their value, masked-out bits a `.`, grouped by nibble.

/// Render `value` under `mask` as a `width`-bit annotation string.
///
/// Widths above 32 are clamped to 32. A width of zero yields an empty string.
///
/// ```
/// use gsmdtap_codec::bitfield::format_bits;
///
/// assert_eq!(format_bits(0x5a, 0x70, 8), ".101 ....");
/// assert_eq!(format_bits(0x8000, 0x8000, 16), "1... .... .... ....");
/// ```
pub fn format_bits(value: u32, mask: u32, width: u32) -> String {
    let width = width.min(32);
    let mut out = String::with_capacity((width + width / 4) as usize);
    for pos in (0..width).rev() {
        let bit = 1u32 << pos;
        out.push(if mask & bit == 0 {
            '.'
        } else if value & bit == 0 {
            '0'
        } else {
            '1'
        });
        if pos != 0 && pos % 4 == 0 {
            out.push(' ');
        }
    }
    out
}

/// Convenience wrapper for the common single-octet case.
#[inline]
pub fn format_octet_bits(octet: u8, mask: u8) -> String {
    format_bits(u32::from(octet), u32::from(mask), 8)
}

/// Render a bitfield annotation followed by its description, the way every
/// element decoder labels a sub-field: `"..10 .... = Updating type: ..."`.
pub fn bit_label(octet: u8, mask: u8, text: &str) -> String {
    format!("{} = {}", format_octet_bits(octet, mask), text)
}
