//! Elements shared by every 24.008 protocol (clause 10.5.1)

use crate::bcd::{bcd_digit, plmn_digits, push_digits};
use crate::codec::CodecResult;
use crate::context::DecodeContext;
use crate::enums::ProtocolDiscriminator;
use crate::field::FieldValue;
use crate::octet_view::OctetView;

use super::{consumed, extraneous_data_check, flag, no_more_data, Half};

/// 10.5.1.2 Ciphering Key Sequence Number
pub fn ciphering_key_sequence_number(
    ctx: &mut DecodeContext<'_>,
    offset: usize,
    octet: u8,
    half: Half,
) {
    let value = half.value(octet);
    ctx.add_spare(offset, octet, half.mask(0x08));
    let text = match value & 0x07 {
        7 => "Ciphering Key Sequence Number: No key is available".to_owned(),
        key => format!("Ciphering Key Sequence Number: {key}"),
    };
    ctx.add_bits(offset, octet, half.mask(0x07), &text);
}

/// Spare half octet (10.5.1.8)
pub fn spare_half_octet(ctx: &mut DecodeContext<'_>, offset: usize, octet: u8, half: Half) {
    ctx.add_spare(offset, octet, half.mask(0x0f));
}

/// 10.5.1.11 Priority Level
pub fn priority_level(ctx: &mut DecodeContext<'_>, offset: usize, octet: u8, half: Half) {
    let value = half.value(octet) & 0x07;
    let name = match value {
        0 => "no priority applied",
        1 => "call priority level 4",
        2 => "call priority level 3",
        3 => "call priority level 2",
        4 => "call priority level 1",
        5 => "call priority level 0",
        6 => "call priority level B",
        _ => "call priority level A",
    };
    ctx.add_spare(offset, octet, half.mask(0x08));
    ctx.add_bits_enum(offset, octet, half.mask(0x07), "Call Priority", value.into(), name);
    ctx.set_summary(format!(" - ({name})"));
}

/// 10.5.1.3 Location Area Identification
pub fn location_area_id(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    _len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let plmn = view.read_slice(3)?;
    let (mcc, mnc) = plmn_digits([plmn[0], plmn[1], plmn[2]]);
    ctx.add_value(
        start..start + 2,
        format!("Mobile Country Code (MCC): {mcc}"),
        FieldValue::Text(mcc.clone()),
    );
    ctx.add_value(
        start + 1..start + 3,
        format!("Mobile Network Code (MNC): {mnc}"),
        FieldValue::Text(mnc.clone()),
    );

    let lac = view.read_u16()?;
    ctx.add_value(
        start + 3..start + 5,
        format!("Location Area Code (LAC): 0x{lac:04x} ({lac})"),
        FieldValue::Uint(lac.into()),
    );
    ctx.set_summary(format!(" - LAC (0x{lac:04x})"));

    Ok(consumed(view, start))
}

/// 10.5.1.4 Mobile Identity
pub fn mobile_identity(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;
    let odd = oct & 0x08 != 0;

    match oct & 0x07 {
        0 => {
            ctx.add_bits(start, oct, 0x07, "Type of identity: No Identity Code");
            ctx.set_summary(" - No Identity Code");
        }
        kind @ 1..=3 => {
            let name = match kind {
                1 => "IMSI",
                2 => "IMEI",
                _ => "IMEISV",
            };
            ctx.add_bits(start, oct, 0xf0, &format!("Identity Digit 1: {}", oct >> 4));
            ctx.add_bits(
                start,
                oct,
                0x08,
                if odd {
                    "Odd/even indication: Odd number of identity digits"
                } else {
                    "Odd/even indication: Even number of identity digits"
                },
            );
            ctx.add_bits(start, oct, 0x07, &format!("Type of identity: {name}"));

            let rest = view.read_slice(len.saturating_sub(1))?;
            let digits = digits_from_identity(oct, rest);
            ctx.add_value(
                start..start + len,
                format!("BCD Digits: {digits}"),
                FieldValue::Text(digits.clone()),
            );
            ctx.set_summary(format!(" - {name} ({digits})"));
        }
        4 => {
            ctx.add_bits(start, oct, 0xf0, "Unused");
            ctx.add_bits(start, oct, 0x08, "Odd/even indication: Even number of identity digits");
            ctx.add_bits(start, oct, 0x07, "Type of identity: TMSI/P-TMSI");
            let at = view.current_index();
            let tmsi = view.read_u32()?;
            ctx.add_value(
                at..at + 4,
                format!("TMSI/P-TMSI: 0x{tmsi:08x}"),
                FieldValue::Uint(tmsi.into()),
            );
            ctx.set_summary(format!(" - TMSI/P-TMSI (0x{tmsi:04x})"));
        }
        5 => {
            let mcc_mnc = oct & 0x10 != 0;
            let session = oct & 0x20 != 0;
            ctx.add_spare(start, oct, 0xc0);
            ctx.add_bits(
                start,
                oct,
                0x20,
                if session {
                    "MBMS Session Identity indication: MBMS Session Identity present"
                } else {
                    "MBMS Session Identity indication: MBMS Session Identity absent"
                },
            );
            ctx.add_bits(
                start,
                oct,
                0x10,
                if mcc_mnc {
                    "MCC/MNC indication: MCC/MNC present"
                } else {
                    "MCC/MNC indication: MCC/MNC absent"
                },
            );
            ctx.add_bits(start, oct, 0x07, "Type of identity: TMGI and optional MBMS Session Identity");

            let at = view.current_index();
            let service_id = view.read_u24()?;
            ctx.add_value(
                at..at + 3,
                format!("MBMS Service ID: 0x{service_id:06x}"),
                FieldValue::Uint(service_id.into()),
            );
            if mcc_mnc {
                let at = view.current_index();
                let plmn = view.read_slice(3)?;
                let (mcc, mnc) = plmn_digits([plmn[0], plmn[1], plmn[2]]);
                ctx.add(at..at + 3, format!("Mobile Country Code (MCC): {mcc}"));
                ctx.add(at..at + 3, format!("Mobile Network Code (MNC): {mnc}"));
            }
            if session {
                let at = view.current_index();
                let id = view.read()?;
                ctx.add_value(
                    at..at + 1,
                    format!("MBMS Session Identity: {id}"),
                    FieldValue::Uint(id.into()),
                );
            }
            ctx.set_summary(" - TMGI");
        }
        _ => {
            ctx.add_bits(start, oct, 0x07, "Type of identity: Unknown");
            ctx.set_summary(" - Format Unknown");
        }
    }

    Ok(extraneous_data_check(ctx, view, start, len))
}

/// Identity digits: digit 1 sits in the high nibble of the type octet, the
/// remaining digits follow in normal BCD order.
fn digits_from_identity(type_octet: u8, rest: &[u8]) -> String {
    let mut digits = String::with_capacity(rest.len() * 2 + 1);
    if let Some(first) = bcd_digit(type_octet >> 4) {
        digits.push(first);
        push_digits(&mut digits, rest);
    }
    digits
}

const REVISION_LEVELS: [&str; 4] = [
    "Reserved for GSM phase 1",
    "Used by GSM phase 2 mobile stations",
    "Used by mobile stations supporting R99 or later versions of the protocol",
    "Reserved for future use",
];

fn classmark_octet1(ctx: &mut DecodeContext<'_>, offset: usize, oct: u8) {
    ctx.add_spare(offset, oct, 0x80);
    let rev = (oct & 0x60) >> 5;
    ctx.add_bits_enum(
        offset,
        oct,
        0x60,
        "Revision Level",
        rev.into(),
        REVISION_LEVELS[usize::from(rev)],
    );
    ctx.add_bits(
        offset,
        oct,
        0x10,
        if oct & 0x10 != 0 {
            "ES IND: Controlled Early Classmark Sending option is implemented in the MS"
        } else {
            "ES IND: Controlled Early Classmark Sending option is not implemented in the MS"
        },
    );
    ctx.add_bits(
        offset,
        oct,
        0x08,
        if oct & 0x08 != 0 {
            "A5/1: encryption algorithm A5/1 not available"
        } else {
            "A5/1: encryption algorithm A5/1 available"
        },
    );
    let power = match oct & 0x07 {
        0 => "class 1",
        1 => "class 2",
        2 => "class 3",
        3 => "class 4",
        4 => "class 5",
        7 => "RF Power capability is irrelevant in this information element",
        _ => "Reserved",
    };
    ctx.add_bits(offset, oct, 0x07, &format!("RF power capability: {power}"));
}

/// 10.5.1.5 Mobile Station Classmark 1
pub fn ms_classmark1(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    _len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;
    classmark_octet1(ctx, start, oct);
    Ok(1)
}

/// 10.5.1.6 Mobile Station Classmark 2
pub fn ms_classmark2(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;
    classmark_octet1(ctx, start, oct);

    if no_more_data(view, start, len) {
        return Ok(consumed(view, start));
    }

    let at = view.current_index();
    let oct = view.read()?;
    ctx.add_spare(at, oct, 0x80);
    flag(ctx, at, oct, 0x40, "PS capability: present", "PS capability: not present");
    let screening = match (oct & 0x30) >> 4 {
        0 => "Default value of phase 1",
        1 => "Capability of handling of ellipsis notation and phase 2 error handling",
        _ => "For future use",
    };
    ctx.add_bits(at, oct, 0x30, &format!("SS Screening Indicator: {screening}"));
    flag(
        ctx,
        at,
        oct,
        0x08,
        "SM capability: Mobile station supports mobile terminated point to point SMS",
        "SM capability: Mobile station does not support mobile terminated point to point SMS",
    );
    flag(
        ctx,
        at,
        oct,
        0x04,
        "VBS notification reception: VBS capability and notifications wanted",
        "VBS notification reception: no VBS capability or no notifications wanted",
    );
    flag(
        ctx,
        at,
        oct,
        0x02,
        "VGCS notification reception: VGCS capability and notifications wanted",
        "VGCS notification reception: no VGCS capability or no notifications wanted",
    );
    flag(
        ctx,
        at,
        oct,
        0x01,
        "FC Frequency Capability: The MS does support the E-GSM or R-GSM",
        "FC Frequency Capability: The MS does not support the E-GSM or R-GSM band",
    );

    if no_more_data(view, start, len) {
        return Ok(consumed(view, start));
    }

    let at = view.current_index();
    let oct = view.read()?;
    flag(
        ctx,
        at,
        oct,
        0x80,
        "CM3: The MS supports options that are indicated in classmark 3 IE",
        "CM3: The MS does not support any options that are indicated in CM3",
    );
    ctx.add_spare(at, oct, 0x40);
    flag(
        ctx,
        at,
        oct,
        0x20,
        "LCS VA capability: LCS value added location request notification capability supported",
        "LCS VA capability: LCS value added location request notification capability not supported",
    );
    flag(
        ctx,
        at,
        oct,
        0x10,
        "UCS2 treatment: the ME has no preference between the use of the default alphabet and the use of UCS2",
        "UCS2 treatment: the ME has a preference for the default alphabet over UCS2",
    );
    flag(
        ctx,
        at,
        oct,
        0x08,
        "SoLSA: The ME supports SoLSA",
        "SoLSA: The ME does not support SoLSA",
    );
    flag(
        ctx,
        at,
        oct,
        0x04,
        "CMSP: Network initiated MO CM connection request supported for at least one CM protocol",
        "CMSP: Network initiated MO CM connection request not supported",
    );
    flag(
        ctx,
        at,
        oct,
        0x02,
        "A5/3: encryption algorithm A5/3 available",
        "A5/3: encryption algorithm A5/3 not available",
    );
    flag(
        ctx,
        at,
        oct,
        0x01,
        "A5/2: encryption algorithm A5/2 available",
        "A5/2: encryption algorithm A5/2 not available",
    );

    Ok(extraneous_data_check(ctx, view, start, len))
}

/// 10.5.1.10a PD and SAPI $(CCBS)$
pub fn pd_and_sapi(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    _len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;
    ctx.add_spare(start, oct, 0xc0);
    let sapi = match (oct & 0x30) >> 4 {
        0 => "SAPI 0",
        3 => "SAPI 3",
        _ => "Reserved",
    };
    ctx.add_bits(start, oct, 0x30, &format!("SAPI: {sapi}"));
    let pd = ProtocolDiscriminator::from_octet(oct);
    ctx.add_bits(start, oct, 0x0f, &format!("PD: {}", pd.name()));
    Ok(1)
}

/// 10.5.1.13 PLMN List
pub fn plmn_list(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let mut index = 0usize;
    while len.saturating_sub(consumed(view, start)) >= 3 {
        let at = view.current_index();
        let plmn = view.read_slice(3)?;
        let (mcc, mnc) = plmn_digits([plmn[0], plmn[1], plmn[2]]);
        ctx.add_value(
            at..at + 3,
            format!("PLMN[{}]  Mobile Country Code (MCC): {mcc}, Mobile Network Code (MNC): {mnc}", index + 1),
            FieldValue::Text(format!("{mcc}-{mnc}")),
        );
        index += 1;
    }
    ctx.set_summary(format!("  List of PLMNs: {index}"));
    Ok(extraneous_data_check(ctx, view, start, len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subdecoder::OpaqueSubDecoder;

    fn decode(
        decoder: fn(&mut DecodeContext<'_>, &OctetView<'_>, usize) -> CodecResult<usize>,
        data: &[u8],
    ) -> (usize, Vec<String>) {
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        let view = OctetView::new(data);
        let used = decoder(&mut ctx, &view, data.len()).unwrap();
        let labels = ctx.into_fields().into_iter().map(|f| f.label).collect();
        (used, labels)
    }

    #[test]
    fn test_lai() {
        let (used, labels) = decode(location_area_id, &[0x62, 0xf2, 0x10, 0x12, 0x34]);
        assert_eq!(used, 5);
        assert_eq!(labels[0], "Mobile Country Code (MCC): 262");
        assert_eq!(labels[1], "Mobile Network Code (MNC): 01");
        assert_eq!(labels[2], "Location Area Code (LAC): 0x1234 (4660)");
    }

    #[test]
    fn test_mobile_identity_imsi() {
        // IMSI 262011234567890, odd number of digits
        let data = [0x29, 0x26, 0x10, 0x21, 0x43, 0x65, 0x87, 0x09];
        let (used, labels) = decode(mobile_identity, &data);
        assert_eq!(used, 8);
        assert!(labels.iter().any(|l| l == "BCD Digits: 262011234567890"));
    }

    #[test]
    fn test_mobile_identity_even_digits_filler() {
        // IMEI-style even count ends in a filler nibble
        let data = [0x12, 0x43, 0xf5];
        let (_, labels) = decode(mobile_identity, &data);
        assert!(labels.iter().any(|l| l == "BCD Digits: 1345"));
    }

    #[test]
    fn test_mobile_identity_tmsi() {
        let data = [0xf4, 0xde, 0xad, 0xbe, 0xef];
        let (used, labels) = decode(mobile_identity, &data);
        assert_eq!(used, 5);
        assert!(labels.iter().any(|l| l == "TMSI/P-TMSI: 0xdeadbeef"));
    }

    #[test]
    fn test_mobile_identity_truncated_tmsi() {
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        let data = [0xf4, 0xde];
        let view = OctetView::new(&data);
        assert!(mobile_identity(&mut ctx, &view, 2).is_err());
    }

    #[test]
    fn test_classmark2_short() {
        let (used, labels) = decode(ms_classmark2, &[0x33]);
        assert_eq!(used, 1);
        assert!(labels.iter().any(|l| l.contains("Used by GSM phase 2 mobile stations")));
    }

    #[test]
    fn test_classmark2_full() {
        let (used, labels) = decode(ms_classmark2, &[0x53, 0x19, 0xa2]);
        assert_eq!(used, 3);
        assert!(labels.iter().any(|l| l.contains("A5/3: encryption algorithm A5/3 available")));
    }

    #[test]
    fn test_plmn_list_with_trailing_octet() {
        let (used, labels) = decode(plmn_list, &[0x62, 0xf2, 0x10, 0x13, 0x00, 0x14, 0xaa]);
        assert_eq!(used, 7);
        assert!(labels[0].contains("MCC): 262"));
        assert!(labels[1].contains("MNC): 410"));
        assert_eq!(labels[2], "Extraneous Data");
    }

    #[test]
    fn test_cksn_no_key() {
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        ciphering_key_sequence_number(&mut ctx, 2, 0x07, Half::Low);
        let fields = ctx.into_fields();
        assert_eq!(
            fields[1].label,
            ".... .111 = Ciphering Key Sequence Number: No key is available"
        );
    }

    #[test]
    fn test_cksn_high_half() {
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        ciphering_key_sequence_number(&mut ctx, 2, 0x31, Half::High);
        let fields = ctx.into_fields();
        assert_eq!(fields[1].label, ".011 .... = Ciphering Key Sequence Number: 3");
    }
}
