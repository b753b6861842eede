//! Telephony BCD digit strings
//!
//! Digits are packed two per octet, low nibble first. Nibble value 0xF is a
//! filler and terminates the string.

/// Digit alphabet for called/calling party numbers and identities.
pub const DTAP_DIGITS: [char; 15] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '*', '#', 'a', 'b', 'c',
];

/// Maps one nibble to its digit, `None` for the filler.
pub fn bcd_digit(nibble: u8) -> Option<char> {
    DTAP_DIGITS.get(usize::from(nibble)).copied()
}

/// Unpacks BCD octets into a digit string, stopping at the first filler.
///
/// ```
/// use gsmdtap_codec::bcd::unpack_bcd;
///
/// assert_eq!(unpack_bcd(&[0x21, 0x43, 0xf5]), "12345");
/// ```
pub fn unpack_bcd(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 2);
    push_digits(&mut out, data);
    out
}

/// Appends unpacked digits to `out`; returns false if a filler ended the string.
pub fn push_digits(out: &mut String, data: &[u8]) -> bool {
    for &octet in data {
        for nibble in [octet & 0x0f, octet >> 4] {
            match bcd_digit(nibble) {
                Some(c) => out.push(c),
                None => return false,
            }
        }
    }
    true
}

/// Decodes MCC and MNC from the three-octet PLMN identity used by the LAI,
/// PLMN list and TMGI. A filler MNC digit 3 yields a two-digit MNC.
pub fn plmn_digits(octets: [u8; 3]) -> (String, String) {
    let nib = |n: u8| bcd_digit(n).unwrap_or('?');
    let mcc: String = [octets[0] & 0x0f, octets[0] >> 4, octets[1] & 0x0f]
        .into_iter()
        .map(nib)
        .collect();
    let mut mnc: String = [octets[2] & 0x0f, octets[2] >> 4].into_iter().map(nib).collect();
    let mnc3 = octets[1] >> 4;
    if mnc3 != 0x0f {
        mnc.push(nib(mnc3));
    }
    (mcc, mnc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_with_filler() {
        assert_eq!(unpack_bcd(&[0x21, 0x43, 0xf5]), "12345");
    }

    #[test]
    fn test_unpack_special_digits() {
        assert_eq!(unpack_bcd(&[0xba, 0xdc]), "*#ab");
        assert_eq!(unpack_bcd(&[0xfe]), "c");
    }

    #[test]
    fn test_unpack_empty() {
        assert_eq!(unpack_bcd(&[]), "");
        assert_eq!(unpack_bcd(&[0xff]), "");
    }

    #[test]
    fn test_plmn_two_digit_mnc() {
        let (mcc, mnc) = plmn_digits([0x62, 0xf2, 0x10]);
        assert_eq!(mcc, "262");
        assert_eq!(mnc, "01");
    }

    #[test]
    fn test_plmn_three_digit_mnc() {
        let (mcc, mnc) = plmn_digits([0x13, 0x00, 0x14]);
        assert_eq!(mcc, "310");
        assert_eq!(mnc, "410");
    }
}
