//! Mobility management elements (3GPP TS 24.008 clause 10.5.3)

use crate::bcd::unpack_bcd;
use crate::codec::CodecResult;
use crate::context::DecodeContext;
use crate::field::FieldValue;
use crate::octet_view::OctetView;

use super::{add_extension, consumed, extraneous_data_check, no_more_data, raw_value, Half};

/// 10.5.3.1 Authentication parameter RAND (16 octets)
pub fn auth_param_rand(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    _len: usize,
) -> CodecResult<usize> {
    raw_value(ctx, view, 16, "RAND value")?;
    Ok(16)
}

/// 10.5.3.1.1 Authentication parameter AUTN
pub fn auth_param_autn(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    raw_value(ctx, view, len, "AUTN value")?;
    Ok(extraneous_data_check(ctx, view, start, len))
}

/// 10.5.3.2 Authentication response parameter (SRES, 4 octets)
pub fn auth_resp_param(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    _len: usize,
) -> CodecResult<usize> {
    raw_value(ctx, view, 4, "SRES value")?;
    Ok(4)
}

/// 10.5.3.2.1 Authentication response parameter extension
pub fn auth_resp_param_ext(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    raw_value(ctx, view, len, "XRES value")?;
    Ok(extraneous_data_check(ctx, view, start, len))
}

/// 10.5.3.2.2 Authentication failure parameter
pub fn auth_fail_param(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    raw_value(ctx, view, len, "AUTS value")?;
    Ok(extraneous_data_check(ctx, view, start, len))
}

/// 10.5.3.3 CM service type
pub fn cm_service_type(ctx: &mut DecodeContext<'_>, offset: usize, octet: u8, half: Half) {
    let value = half.value(octet);
    let name = match value {
        0x01 => "Mobile originating call establishment or packet mode connection establishment",
        0x02 => "Emergency call establishment",
        0x04 => "Short message service",
        0x08 => "Supplementary service activation",
        0x09 => "Voice group call establishment",
        0x0a => "Voice broadcast call establishment",
        0x0b => "Location Services",
        _ => "Reserved",
    };
    ctx.add_bits_enum(offset, octet, half.mask(0x0f), "Service Type", value.into(), name);
    ctx.set_summary(format!(" - ({name})"));
}

/// 10.5.3.4 Identity type
pub fn identity_type(ctx: &mut DecodeContext<'_>, offset: usize, octet: u8, half: Half) {
    let value = half.value(octet) & 0x07;
    let name = match value {
        1 => "IMSI",
        2 => "IMEI",
        3 => "IMEISV",
        4 => "TMSI",
        _ => "Reserved",
    };
    ctx.add_spare(offset, octet, half.mask(0x08));
    ctx.add_bits_enum(offset, octet, half.mask(0x07), "Type of identity", value.into(), name);
    ctx.set_summary(format!(" - {name}"));
}

/// 10.5.3.5 Location updating type
pub fn location_updating_type(ctx: &mut DecodeContext<'_>, offset: usize, octet: u8, half: Half) {
    let value = half.value(octet);
    ctx.add_bits(
        offset,
        octet,
        half.mask(0x08),
        if value & 0x08 != 0 {
            "Follow-On Request (FOR): Follow-on request pending"
        } else {
            "Follow-On Request (FOR): No follow-on request pending"
        },
    );
    ctx.add_spare(offset, octet, half.mask(0x04));
    let kind = value & 0x03;
    let name = match kind {
        0 => "Normal",
        1 => "Periodic",
        2 => "IMSI attach",
        _ => "Reserved",
    };
    ctx.add_bits_enum(offset, octet, half.mask(0x03), "Updating Type", kind.into(), name);
    ctx.set_summary(format!(" - {name}"));
}

/// 10.5.3.5a Network name
pub fn network_name(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    add_extension(ctx, start, oct);
    let coding = match (oct & 0x70) >> 4 {
        0 => "Cell Broadcast data coding scheme, GSM default alphabet, language unspecified, defined in 3GPP TS 03.38",
        1 => "UCS2 (16 bit)",
        _ => "Reserved",
    };
    ctx.add_bits(start, oct, 0x70, &format!("Coding Scheme: {coding}"));
    ctx.add_bits(
        start,
        oct,
        0x08,
        if oct & 0x08 != 0 {
            "Add CI: The MS should add the letters for the Country's Initials and a separator (e.g. a space) to the text string"
        } else {
            "Add CI: The MS should not add the letters for the Country's Initials to the text string"
        },
    );
    let spare = match oct & 0x07 {
        1 => "bit 8 is spare and set to '0' in octet n",
        2 => "bits 7 and 8 are spare and set to '0' in octet n",
        3 => "bits 6 to 8(inclusive) are spare and set to '0' in octet n",
        4 => "bits 5 to 8(inclusive) are spare and set to '0' in octet n",
        5 => "bits 4 to 8(inclusive) are spare and set to '0' in octet n",
        6 => "bits 3 to 8(inclusive) are spare and set to '0' in octet n",
        7 => "bits 2 to 8(inclusive) are spare and set to '0' in octet n",
        _ => "this field carries no information about the number of spare bits in octet n",
    };
    ctx.add_bits(
        start,
        oct,
        0x07,
        &format!("Number of spare bits in last octet: {spare}"),
    );

    if no_more_data(view, start, len) {
        return Ok(consumed(view, start));
    }

    let at = view.current_index();
    let text = view.read_up_to(len - 1);
    let mut label = String::from("Text string encoded according to Coding Scheme");
    // UCS2 text is rendered; packed 7-bit default alphabet text stays as octets.
    if (oct & 0x70) >> 4 == 1 {
        let units: Vec<u16> = text
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        let decoded = String::from_utf16_lossy(&units);
        label = format!("{label}: {decoded}");
        ctx.add_value(at..at + text.len(), label, FieldValue::Text(decoded));
    } else {
        ctx.add_value(at..at + text.len(), label, FieldValue::Bytes(text.to_vec()));
    }

    Ok(extraneous_data_check(ctx, view, start, len))
}

/// 10.5.3.6 Reject cause
pub fn reject_cause(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    _len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;
    let name = match oct {
        0x02 => "IMSI unknown in HLR",
        0x03 => "Illegal MS",
        0x04 => "IMSI unknown in VLR",
        0x05 => "IMEI not accepted",
        0x06 => "Illegal ME",
        0x0b => "PLMN not allowed",
        0x0c => "Location Area not allowed",
        0x0d => "Roaming not allowed in this location area",
        0x0f => "No Suitable Cells In Location Area",
        0x11 => "Network failure",
        0x14 => "MAC failure",
        0x15 => "Synch failure",
        0x16 => "Congestion",
        0x17 => "GSM authentication unacceptable",
        0x20 => "Service option not supported",
        0x21 => "Requested service option not subscribed",
        0x22 => "Service option temporarily out of order",
        0x26 => "Call cannot be identified",
        0x5f => "Semantically incorrect message",
        0x60 => "Invalid mandatory information",
        0x61 => "Message type non-existent or not implemented",
        0x62 => "Message type not compatible with the protocol state",
        0x63 => "Information element non-existent or not implemented",
        0x64 => "Conditional IE error",
        0x65 => "Message not compatible with the protocol state",
        0x6f => "Protocol error, unspecified",
        // Unlisted values are read differently by each side.
        _ if ctx.direction().is_downlink() => "Service option temporarily out of order",
        _ => "Protocol error, unspecified",
    };
    ctx.add_value(
        start..start + 1,
        format!("Reject Cause value: 0x{oct:02x} ({oct}) {name}"),
        FieldValue::Enum {
            value: oct.into(),
            name,
        },
    );
    ctx.set_summary(format!(" - ({name})"));
    Ok(1)
}

/// Quarter-hour offset from GMT, swapped-nibble coded with a sign bit.
fn time_zone_text(oct: u8) -> String {
    let sign = if oct & 0x08 != 0 { '-' } else { '+' };
    let quarters = u32::from(oct >> 4) + u32::from(oct & 0x07) * 10;
    format!(
        "Timezone: GMT {sign} {} hours {} minutes",
        quarters / 4,
        quarters % 4 * 15
    )
}

/// 10.5.3.8 Time Zone
pub fn time_zone(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    _len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;
    ctx.add(start..start + 1, time_zone_text(oct));
    Ok(1)
}

/// 10.5.3.9 Time Zone and Time
pub fn time_zone_and_time(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    _len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let swapped = |o: u8| format!("{}{}", o & 0x0f, o >> 4);

    let date = view.read_slice(3)?;
    ctx.add(
        start..start + 3,
        format!(
            "Year {}, Month {}, Day {}",
            swapped(date[0]),
            swapped(date[1]),
            swapped(date[2])
        ),
    );
    let time = view.read_slice(3)?;
    ctx.add(
        start + 3..start + 6,
        format!(
            "Hour {}, Minutes {}, Seconds {}",
            swapped(time[0]),
            swapped(time[1]),
            swapped(time[2])
        ),
    );
    let tz = view.read()?;
    ctx.add(start + 6..start + 7, time_zone_text(tz));

    Ok(consumed(view, start))
}

/// 10.5.3.11 LSA Identifier
pub fn lsa_identifier(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let id = view.read_u24()?;
    ctx.add_value(
        start..start + 3,
        format!("LSA Identifier: 0x{id:06x}"),
        FieldValue::Uint(id.into()),
    );
    Ok(extraneous_data_check(ctx, view, start, len))
}

/// 10.5.3.12 Daylight Saving Time
pub fn daylight_saving_time(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;
    ctx.add_spare(start, oct, 0xfc);
    let text = match oct & 0x03 {
        0 => "No adjustment for Daylight Saving Time",
        1 => "+1 hour adjustment for Daylight Saving Time",
        2 => "+2 hours adjustment for Daylight Saving Time",
        _ => "Reserved",
    };
    ctx.add_bits(start, oct, 0x03, text);
    Ok(extraneous_data_check(ctx, view, start, len))
}

/// Names of the emergency services flagged in the low five bits of `cat`.
pub(crate) fn emergency_categories(cat: u8) -> String {
    [
        (0x01u8, "Police"),
        (0x02, "Ambulance"),
        (0x04, "Fire Brigade"),
        (0x08, "Marine Guard"),
        (0x10, "Mountain Rescue"),
    ]
    .iter()
    .filter(|(bit, _)| cat & bit != 0)
    .map(|&(_, name)| name)
    .collect::<Vec<_>>()
    .join(", ")
}

/// 10.5.3.13 Emergency Number List
pub fn emergency_number_list(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let mut count = 0usize;

    while !no_more_data(view, start, len) {
        let at = view.current_index();
        let entry_len = usize::from(view.read()?);
        count += 1;
        ctx.add(
            at..at + 1,
            format!("Length of {count}. Emergency Number Information: {entry_len}"),
        );
        if entry_len == 0 {
            continue;
        }
        if entry_len > len - consumed(view, start) {
            ctx.add(at..at + 1, "Emergency Number Information exceeds list length");
            break;
        }

        let cat_at = view.current_index();
        let cat = view.read()?;
        ctx.add_spare(cat_at, cat, 0xe0);
        ctx.add_bits(
            cat_at,
            cat,
            0x1f,
            &format!("Emergency Service Category Value: {}", emergency_categories(cat)),
        );

        let digits_at = view.current_index();
        let digits = view.read_slice(entry_len - 1)?;
        let number = unpack_bcd(digits);
        ctx.add_value(
            digits_at..digits_at + digits.len(),
            format!("Emergency Number: {number}"),
            FieldValue::Text(number),
        );
    }

    Ok(extraneous_data_check(ctx, view, start, len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Direction;
    use crate::subdecoder::OpaqueSubDecoder;

    type Decoder = fn(&mut DecodeContext<'_>, &OctetView<'_>, usize) -> CodecResult<usize>;

    fn decode_in(direction: Direction, decoder: Decoder, data: &[u8]) -> (usize, Vec<String>) {
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        ctx.set_direction(direction);
        let view = OctetView::new(data);
        let used = decoder(&mut ctx, &view, data.len()).unwrap();
        (used, ctx.into_fields().into_iter().map(|f| f.label).collect())
    }

    fn decode(decoder: Decoder, data: &[u8]) -> (usize, Vec<String>) {
        decode_in(Direction::Uplink, decoder, data)
    }

    #[test]
    fn test_rand() {
        let data: Vec<u8> = (0..16).collect();
        let (used, labels) = decode(auth_param_rand, &data);
        assert_eq!(used, 16);
        assert_eq!(labels[0], "RAND value: 000102030405060708090a0b0c0d0e0f");
    }

    #[test]
    fn test_rand_truncated() {
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        let view = OctetView::new(&[0u8; 10]);
        assert!(auth_param_rand(&mut ctx, &view, 16).is_err());
    }

    #[test]
    fn test_reject_cause_known() {
        let (_, labels) = decode(reject_cause, &[0x11]);
        assert_eq!(labels[0], "Reject Cause value: 0x11 (17) Network failure");
    }

    #[test]
    fn test_reject_cause_default_depends_on_direction() {
        let (_, up) = decode_in(Direction::Uplink, reject_cause, &[0x7e]);
        let (_, down) = decode_in(Direction::Downlink, reject_cause, &[0x7e]);
        assert!(up[0].ends_with("Protocol error, unspecified"));
        assert!(down[0].ends_with("Service option temporarily out of order"));
    }

    #[test]
    fn test_time_zone() {
        // 0x80 -> 8 quarters ahead
        let (_, labels) = decode(time_zone, &[0x80]);
        assert_eq!(labels[0], "Timezone: GMT + 2 hours 0 minutes");
        // 0x4a -> sign bit set, 4 + 2*10 = 24 quarters
        let (_, labels) = decode(time_zone, &[0x4a]);
        assert_eq!(labels[0], "Timezone: GMT - 6 hours 0 minutes");
    }

    #[test]
    fn test_time_zone_and_time() {
        let (used, labels) = decode(time_zone_and_time, &[0x80, 0x01, 0x31, 0x32, 0x54, 0x06, 0x40]);
        assert_eq!(used, 7);
        assert_eq!(labels[0], "Year 08, Month 10, Day 13");
        assert_eq!(labels[1], "Hour 23, Minutes 45, Seconds 60");
        assert_eq!(labels[2], "Timezone: GMT + 1 hours 0 minutes");
    }

    #[test]
    fn test_cm_service_type_ignores_direction() {
        let fields: Vec<_> = [Direction::Uplink, Direction::Downlink]
            .into_iter()
            .map(|direction| {
                let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
                ctx.set_direction(direction);
                cm_service_type(&mut ctx, 0, 0x24, Half::Low);
                ctx.into_fields()
            })
            .collect();
        assert_eq!(fields[0], fields[1]);
        assert_eq!(fields[0][0].label, ".... 0100 = Service Type: Short message service");
    }

    #[test]
    fn test_lsa_id_truncated() {
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        let view = OctetView::new(&[0x12, 0x34]);
        assert!(lsa_identifier(&mut ctx, &view, 2).is_err());
    }

    #[test]
    fn test_network_name_ucs2() {
        let (used, labels) = decode(network_name, &[0x90, 0x00, 0x4f, 0x00, 0x4b]);
        assert_eq!(used, 5);
        assert!(labels.last().unwrap().ends_with(": OK"));
    }

    #[test]
    fn test_network_name_header_only() {
        let (used, labels) = decode(network_name, &[0x80]);
        assert_eq!(used, 1);
        assert_eq!(labels.len(), 4);
    }

    #[test]
    fn test_daylight_saving_time_extraneous() {
        let (used, labels) = decode(daylight_saving_time, &[0x01, 0xff]);
        assert_eq!(used, 2);
        assert_eq!(labels[1], ".... ..01 = +1 hour adjustment for Daylight Saving Time");
        assert_eq!(labels[2], "Extraneous Data");
    }

    #[test]
    fn test_emergency_number_list() {
        // Two entries: police 112, ambulance 911
        let data = [0x03, 0x01, 0x11, 0xf2, 0x03, 0x02, 0x19, 0xf1];
        let (used, labels) = decode(emergency_number_list, &data);
        assert_eq!(used, 8);
        assert!(labels.iter().any(|l| l == "Emergency Number: 112"));
        assert!(labels.iter().any(|l| l == "Emergency Number: 911"));
        assert!(labels.iter().any(|l| l.ends_with("Category Value: Ambulance")));
    }

    #[test]
    fn test_emergency_number_list_overlong_entry() {
        let (used, labels) = decode(emergency_number_list, &[0x09, 0x01, 0x21]);
        assert_eq!(used, 3);
        assert!(labels.iter().any(|l| l.contains("exceeds list length")));
        assert_eq!(labels.last().unwrap(), "Extraneous Data");
    }

    #[test]
    fn test_location_updating_type() {
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        location_updating_type(&mut ctx, 0, 0x79, Half::Low);
        let labels: Vec<String> = ctx.into_fields().into_iter().map(|f| f.label).collect();
        assert_eq!(labels[0], ".... 1... = Follow-On Request (FOR): Follow-on request pending");
        assert_eq!(labels[2], ".... ..01 = Updating Type: Periodic");
    }
}
