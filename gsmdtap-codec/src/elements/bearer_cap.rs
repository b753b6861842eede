//! Bearer capability (3GPP TS 24.008 clause 10.5.4.5)
//!
//! Octet 3 is always present. Speech bearers continue with a run of
//! octets 3a listing speech versions; every other transfer capability
//! continues with the data octet groups:
//!
//! ```text
//! 3 ── 4 ── 5 ──┬── 5a ──┬── 5b ──┬── 6 ──┬── 6a .. 6g ──┬── 7
//!               └────────┴────────┘       └──────────────┘
//!            (not extended: skip to 6)  (not extended: skip to 7)
//! ```
//!
//! The value ends wherever the declared length runs out, even in the middle
//! of a group chain.

use crate::codec::CodecResult;
use crate::context::{DecodeContext, Direction};
use crate::octet_view::OctetView;

use super::{consumed, extraneous_data_check, no_more_data};

const ITC_SPEECH: u8 = 0x00;

/// Decodes the group octets from octet 4 onwards. One per group label.
type GroupDecoder = fn(&mut DecodeContext<'_>, usize, u8);

/// 10.5.4.5 Bearer capability
pub fn bearer_capability(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;
    let extended = oct & 0x80 == 0;
    let itc = oct & 0x07;

    bc_extension(ctx, start, oct);
    let radio = radio_channel_requirement(ctx.direction(), itc, extended, (oct & 0x60) >> 5);
    ctx.add_bits(start, oct, 0x60, &format!("Radio channel requirement: {radio}"));
    ctx.add_bits(
        start,
        oct,
        0x10,
        if oct & 0x10 != 0 {
            "Coding standard: reserved"
        } else {
            "Coding standard: GSM standardized coding"
        },
    );
    ctx.add_bits(
        start,
        oct,
        0x08,
        if oct & 0x08 != 0 {
            "Transfer mode: packet"
        } else {
            "Transfer mode: circuit"
        },
    );
    let itc_name = information_transfer_capability(itc);
    ctx.add_bits_enum(
        start,
        oct,
        0x07,
        "Information transfer capability",
        itc.into(),
        itc_name,
    );
    ctx.set_summary(format!(" - ({itc_name})"));

    if no_more_data(view, start, len) {
        return Ok(consumed(view, start));
    }

    if itc == ITC_SPEECH {
        speech_versions(ctx, view, start, len)?;
    } else {
        data_groups(ctx, view, start, len)?;
    }

    Ok(extraneous_data_check(ctx, view, start, len))
}

fn bc_extension(ctx: &mut DecodeContext<'_>, offset: usize, oct: u8) {
    let text = if oct & 0x80 != 0 {
        "Extension: not extended"
    } else {
        "Extension: extended"
    };
    ctx.add_bits(offset, oct, 0x80, text);
}

fn radio_channel_requirement(
    direction: Direction,
    itc: u8,
    extended: bool,
    value: u8,
) -> &'static str {
    match direction {
        Direction::Downlink => "Spare",
        Direction::Unknown => "(dissect problem)",
        Direction::Uplink if itc == ITC_SPEECH && extended => match value {
            1 => "MS supports at least full rate speech version 1 but does not support half rate speech version 1",
            2 => "MS supports at least full rate speech version 1 and half rate speech version 1. MS has a greater preference for half rate speech version 1 than for full rate speech version 1",
            3 => "MS supports at least full rate speech version 1 and half rate speech version 1. MS has a greater preference for full rate speech version 1 than for half rate speech version 1",
            _ => "Reserved",
        },
        Direction::Uplink if itc == ITC_SPEECH => match value {
            1 => "Full rate support only MS/fullrate speech version 1 supported",
            2 => "Dual rate support MS/half rate speech version 1 preferred, full rate speech version 1 also supported",
            3 => "Dual rate support MS/full rate speech version 1 preferred, half rate speech version 1 also supported",
            _ => "Reserved",
        },
        Direction::Uplink => match value {
            1 => "Full rate support only MS",
            2 => "Dual rate support MS/half rate preferred",
            3 => "Dual rate support MS/full rate preferred",
            _ => "Reserved",
        },
    }
}

fn information_transfer_capability(itc: u8) -> &'static str {
    match itc {
        0x00 => "Speech",
        0x01 => "Unrestricted digital information",
        0x02 => "3.1 kHz audio, ex PLMN",
        0x03 => "Facsimile group 3",
        0x05 => "Other ITC (See Octet 5a)",
        0x07 => "Reserved, to be used in the network",
        _ => "Reserved",
    }
}

// ============================================================================
// Octets 3a
// ============================================================================

fn speech_versions(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    start: usize,
    len: usize,
) -> CodecResult<()> {
    let group_start = view.current_index();
    let header = ctx.add(group_start..group_start + 1, "Octets 3a - Speech Versions");
    ctx.enter();

    loop {
        let offset = view.current_index();
        let oct = view.read()?;
        bc_extension(ctx, offset, oct);
        ctx.add_bits(
            offset,
            oct,
            0x40,
            if oct & 0x40 != 0 {
                "Coding: octet used for other extension of octet 3"
            } else {
                "Coding: octet used for extension of information transfer capability"
            },
        );
        ctx.add_spare(offset, oct, 0x30);
        let version = oct & 0x0f;
        let name = match version {
            0 => "GSM full rate speech version 1",
            2 => "GSM full rate speech version 2",
            4 => "GSM full rate speech version 3",
            1 => "GSM half rate speech version 1",
            5 => "GSM half rate speech version 3",
            _ => "Speech version TBD",
        };
        ctx.add_bits_enum(offset, oct, 0x0f, "Speech version indication", version.into(), name);

        if oct & 0x80 != 0 || no_more_data(view, start, len) {
            break;
        }
    }

    ctx.leave();
    let end = view.current_index();
    if let Some(field) = ctx.field_mut(header) {
        field.range = group_start..end;
    }
    Ok(())
}

// ============================================================================
// Octets 4 to 7
// ============================================================================

/// Reads one group octet under an `"Octet N"` header. Returns whether the
/// extension bit announces a following octet.
fn group(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    title: &str,
    decode: GroupDecoder,
) -> CodecResult<bool> {
    let offset = view.current_index();
    let oct = view.read()?;
    ctx.add(offset..offset + 1, title);
    ctx.enter();
    bc_extension(ctx, offset, oct);
    decode(ctx, offset, oct);
    ctx.leave();
    Ok(oct & 0x80 == 0)
}

fn data_groups(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    start: usize,
    len: usize,
) -> CodecResult<()> {
    group(ctx, view, "Octet 4", octet_4)?;
    if no_more_data(view, start, len) {
        return Ok(());
    }

    let extended = group(ctx, view, "Octet 5", octet_5)?;
    if no_more_data(view, start, len) {
        return Ok(());
    }
    if extended {
        let extended = group(ctx, view, "Octet 5a", octet_5a)?;
        if no_more_data(view, start, len) {
            return Ok(());
        }
        if extended {
            group(ctx, view, "Octet 5b", octet_5b)?;
            if no_more_data(view, start, len) {
                return Ok(());
            }
        }
    }

    let mut extended = group(ctx, view, "Octet 6", octet_6)?;
    if no_more_data(view, start, len) {
        return Ok(());
    }

    const OCTET_6_CHAIN: [(&str, GroupDecoder); 7] = [
        ("Octet 6a", octet_6a),
        ("Octet 6b", octet_6b),
        ("Octet 6c", octet_6c),
        ("Octet 6d", octet_6d),
        ("Octet 6e", octet_6e),
        ("Octet 6f", octet_6f),
        ("Octet 6g", octet_6g),
    ];
    for (title, decode) in OCTET_6_CHAIN {
        if !extended {
            break;
        }
        extended = group(ctx, view, title, decode)?;
        if no_more_data(view, start, len) {
            return Ok(());
        }
    }

    group(ctx, view, "Octet 7", octet_7)?;
    Ok(())
}

fn octet_4(ctx: &mut DecodeContext<'_>, offset: usize, oct: u8) {
    let not = if oct & 0x40 != 0 { "" } else { "not " };
    let verb = if ctx.direction().is_downlink() {
        "possible"
    } else {
        "allowed"
    };
    ctx.add_bits(offset, oct, 0x40, &format!("Compression: data compression {not}{verb}"));

    let structure = match (oct & 0x30) >> 4 {
        0 => "Service data unit integrity",
        3 => "Unstructured",
        _ => "Reserved",
    };
    ctx.add_bits(offset, oct, 0x30, &format!("Structure: {structure}"));
    ctx.add_bits(
        offset,
        oct,
        0x08,
        if oct & 0x08 != 0 {
            "Duplex mode: Full"
        } else {
            "Duplex mode: Half"
        },
    );
    ctx.add_bits(
        offset,
        oct,
        0x04,
        if oct & 0x04 != 0 {
            "Configuration: Reserved"
        } else {
            "Configuration: Point-to-point"
        },
    );
    ctx.add_bits(
        offset,
        oct,
        0x02,
        if oct & 0x02 != 0 {
            "NIRR: Data up to and including 4.8 kb/s, full rate, non-transparent, 6 kb/s radio interface rate is requested"
        } else {
            "NIRR: No meaning is associated with this value"
        },
    );
    ctx.add_bits(
        offset,
        oct,
        0x01,
        if oct & 0x01 != 0 {
            "Establishment: Reserved"
        } else {
            "Establishment: Demand"
        },
    );
}

fn octet_5(ctx: &mut DecodeContext<'_>, offset: usize, oct: u8) {
    ctx.add_bits(
        offset,
        oct,
        0x60,
        if oct & 0x60 != 0 {
            "Access Identity: Reserved"
        } else {
            "Access Identity: Octet identifier"
        },
    );
    let rate_adaption = match (oct & 0x18) >> 3 {
        0 => "No rate adaption",
        1 => "V.110, I.460/X.30 rate adaptation",
        2 => "ITU-T X.31 flag stuffing",
        _ => "Other rate adaption (see octet 5a)",
    };
    ctx.add_bits(offset, oct, 0x18, &format!("Rate Adaption: {rate_adaption}"));
    let sap = match oct & 0x07 {
        1 => "I.440/450",
        2..=6 => "Reserved: was allocated in earlier phases of the protocol",
        _ => "Reserved",
    };
    ctx.add_bits(offset, oct, 0x07, &format!("Signalling Access Protocol: {sap}"));
}

fn octet_5a(ctx: &mut DecodeContext<'_>, offset: usize, oct: u8) {
    ctx.add_bits(
        offset,
        oct,
        0x60,
        if oct & 0x60 != 0 {
            "Other ITC: Reserved"
        } else {
            "Other ITC: Restricted digital information"
        },
    );
    let other = match (oct & 0x18) >> 3 {
        0 => "V.120",
        1 => "H.223 & H.245",
        2 => "PIAFS",
        _ => "Reserved",
    };
    ctx.add_bits(offset, oct, 0x18, &format!("Other Rate Adaption: {other}"));
    ctx.add_spare(offset, oct, 0x07);
}

fn octet_5b(ctx: &mut DecodeContext<'_>, offset: usize, oct: u8) {
    let not = if oct & 0x40 != 0 { "" } else { "not " };
    ctx.add_bits(offset, oct, 0x40, &format!("Rate Adaption Header: {not}included"));
    ctx.add_bits(
        offset,
        oct,
        0x20,
        if oct & 0x20 != 0 {
            "Multiple frame establishment support in data link: Supported"
        } else {
            "Multiple frame establishment support in data link: Not supported, only UI frames allowed"
        },
    );
    ctx.add_bits(
        offset,
        oct,
        0x10,
        if oct & 0x10 != 0 {
            "Mode of operation: Protocol sensitive"
        } else {
            "Mode of operation: Bit transparent"
        },
    );
    ctx.add_bits(
        offset,
        oct,
        0x08,
        if oct & 0x08 != 0 {
            "Logical link identifier negotiation: Full protocol negotiation"
        } else {
            "Logical link identifier negotiation: Default, LLI=256 only"
        },
    );
    ctx.add_bits(
        offset,
        oct,
        0x04,
        if oct & 0x04 != 0 {
            "Assignor/Assignee: Message originator is 'assignor only'"
        } else {
            "Assignor/Assignee: Message originator is 'default assignee'"
        },
    );
    ctx.add_bits(
        offset,
        oct,
        0x02,
        if oct & 0x02 != 0 {
            "In band/Out of band negotiation: Negotiation is done with USER INFORMATION messages on a temporary signalling connection"
        } else {
            "In band/Out of band negotiation: Negotiation is done in-band using logical link zero"
        },
    );
    ctx.add_spare(offset, oct, 0x01);
}

fn octet_6(ctx: &mut DecodeContext<'_>, offset: usize, oct: u8) {
    ctx.add_bits(
        offset,
        oct,
        0x60,
        if oct & 0x60 == 0x20 {
            "Layer 1 Identity: Octet identifier"
        } else {
            "Layer 1 Identity: Reserved"
        },
    );
    ctx.add_bits(
        offset,
        oct,
        0x1e,
        if oct & 0x1e != 0 {
            "User information layer 1 protocol: Reserved"
        } else {
            "User information layer 1 protocol: Default layer 1 protocol"
        },
    );
    ctx.add_bits(
        offset,
        oct,
        0x01,
        if oct & 0x01 != 0 {
            "Synchronous/asynchronous: Asynchronous"
        } else {
            "Synchronous/asynchronous: Synchronous"
        },
    );
}

fn octet_6a(ctx: &mut DecodeContext<'_>, offset: usize, oct: u8) {
    ctx.add_bits(
        offset,
        oct,
        0x40,
        if oct & 0x40 != 0 {
            "Number of Stop Bits: 2"
        } else {
            "Number of Stop Bits: 1"
        },
    );
    ctx.add_bits(
        offset,
        oct,
        0x20,
        if oct & 0x20 != 0 {
            "Negotiation: Reserved"
        } else {
            "Negotiation: In-band negotiation not possible"
        },
    );
    ctx.add_bits(
        offset,
        oct,
        0x10,
        if oct & 0x10 != 0 {
            "Number of data bits excluding parity bit if present: 8"
        } else {
            "Number of data bits excluding parity bit if present: 7"
        },
    );
    let rate = match oct & 0x0f {
        0x01 => "0.3 kbit/s Recommendation X.1 and V.110",
        0x02 => "1.2 kbit/s Recommendation X.1 and V.110",
        0x03 => "2.4 kbit/s Recommendation X.1 and V.110",
        0x04 => "4.8 kbit/s Recommendation X.1 and V.110",
        0x05 => "9.6 kbit/s Recommendation X.1 and V.110",
        0x06 => "12.0 kbit/s transparent (non compliance with X.1 and V.110)",
        0x07 => "Reserved: was allocated in earlier phases of the protocol",
        _ => "Reserved",
    };
    ctx.add_bits_enum(offset, oct, 0x0f, "User rate", u32::from(oct & 0x0f), rate);
}

fn octet_6b(ctx: &mut DecodeContext<'_>, offset: usize, oct: u8) {
    let intermediate = match (oct & 0x60) >> 5 {
        2 => "8 kbit/s",
        3 => "16 kbit/s",
        _ => "Reserved",
    };
    ctx.add_bits(
        offset,
        oct,
        0x60,
        &format!("V.110/X.30 rate adaptation Intermediate rate: {intermediate}"),
    );
    let tx = if oct & 0x10 != 0 { "requires" } else { "does not require" };
    ctx.add_bits(
        offset,
        oct,
        0x10,
        &format!("Network independent clock (NIC) on transmission (Tx): {tx} to send data with network independent clock"),
    );
    let rx = if oct & 0x08 != 0 { "can" } else { "cannot" };
    ctx.add_bits(
        offset,
        oct,
        0x08,
        &format!("Network independent clock (NIC) on reception (Rx): {rx} accept data with network independent clock"),
    );
    let parity = match oct & 0x07 {
        0 => "Odd",
        2 => "Even",
        3 => "None",
        4 => "Forced to 0",
        5 => "Forced to 1",
        _ => "Reserved",
    };
    ctx.add_bits(offset, oct, 0x07, &format!("Parity information: {parity}"));
}

fn octet_6c(ctx: &mut DecodeContext<'_>, offset: usize, oct: u8) {
    let element = match (oct & 0x60) >> 5 {
        1 => "Non transparent (RLP)",
        2 => "Both, transparent preferred",
        3 => "Both, non transparent preferred",
        _ => "Transparent",
    };
    ctx.add_bits(offset, oct, 0x60, &format!("Connection element: {element}"));
    let modem = match oct & 0x1f {
        0x00 => "None",
        0x01 => "V.21",
        0x02 => "V.22",
        0x03 => "V.22 bis",
        0x04 => "Reserved: was allocated in earlier phases of the protocol",
        0x05 => "V.26 ter",
        0x06 => "V.32",
        0x07 => "Modem for undefined interface",
        0x08 => "Autobauding type 1",
        _ => "Reserved",
    };
    ctx.add_bits(offset, oct, 0x1f, &format!("Modem type: {modem}"));
}

fn octet_6d(ctx: &mut DecodeContext<'_>, offset: usize, oct: u8) {
    let other = match (oct & 0x60) >> 5 {
        0 => "No other modem type specified in this field",
        2 => "V.34",
        _ => "Reserved",
    };
    ctx.add_bits(offset, oct, 0x60, &format!("Other modem type: {other}"));
    let rate = match oct & 0x1f {
        0x00 => "Fixed network user rate not applicable/No meaning is associated with this value",
        0x01 => "9.6 kbit/s Recommendation X.1 and V.110",
        0x02 => "14.4 kbit/s Recommendation X.1 and V.110",
        0x03 => "19.2 kbit/s Recommendation X.1 and V.110",
        0x04 => "28.8 kbit/s Recommendation X.1 and V.110",
        0x05 => "38.4 kbit/s Recommendation X.1 and V.110",
        0x06 => "48.0 kbit/s Recommendation X.1 and V.110(synch)",
        0x07 => "56.0 kbit/s Recommendation X.1 and V.110(synch) /bit transparent",
        0x08 => "64.0 kbit/s bit transparent",
        0x09 => "33.6 kbit/s bit transparent",
        0x0a => "32.0 kbit/s Recommendation I.460",
        0x0b => "31.2 kbit/s Recommendation V.34",
        _ => "Reserved",
    };
    ctx.add_bits(offset, oct, 0x1f, &format!("Fixed network user rate: {rate}"));
}

fn acceptable(oct: u8, mask: u8) -> &'static str {
    if oct & mask != 0 {
        ""
    } else {
        "not "
    }
}

fn octet_6e(ctx: &mut DecodeContext<'_>, offset: usize, oct: u8) {
    if ctx.direction() != Direction::Uplink {
        ctx.add_bits(offset, oct, 0x78, "Acceptable channel codings: Spare");
        ctx.add_bits(offset, oct, 0x07, "Maximum number of traffic channels: Spare");
        return;
    }
    for (mask, coding) in [(0x40, "TCH/F14.4"), (0x10, "TCH/F9.6"), (0x08, "TCH/F4.8")] {
        if mask == 0x10 {
            ctx.add_bits(offset, oct, 0x20, "Acceptable channel codings: Spare");
        }
        ctx.add_bits(
            offset,
            oct,
            mask,
            &format!(
                "Acceptable channel codings: {coding} {}acceptable",
                acceptable(oct, mask)
            ),
        );
    }
    ctx.add_bits(
        offset,
        oct,
        0x07,
        &format!("Maximum number of traffic channels: {} TCH", (oct & 0x07) + 1),
    );
}

fn octet_6f(ctx: &mut DecodeContext<'_>, offset: usize, oct: u8) {
    let uimi = match (oct & 0x70) >> 4 {
        0 => "not allowed/required/applicable",
        1 => "up to 1 TCH/F allowed/may be requested",
        2 => "up to 2 TCH/F allowed/may be requested",
        3 => "up to 3 TCH/F allowed/may be requested",
        4 => "up to 4 TCH/F allowed/may be requested",
        _ => "up to 4 TCH/F may be requested",
    };
    ctx.add_bits(
        offset,
        oct,
        0x70,
        &format!("UIMI, User initiated modification indication: {uimi}"),
    );

    if ctx.direction() != Direction::Uplink {
        ctx.add_bits(offset, oct, 0x0f, "Wanted air interface user rate: Spare");
        return;
    }
    let rate = match oct & 0x0f {
        0x00 => "Air interface user rate not applicable/No meaning associated with this value",
        0x01 => "9.6 kbit/s",
        0x02 => "14.4 kbit/s",
        0x03 => "19.2 kbit/s",
        0x05 => "28.8 kbit/s",
        0x06 => "38.4 kbit/s",
        0x07 => "43.2 kbit/s",
        0x08 => "57.6 kbit/s",
        0x09..=0x0c => "interpreted by the network as 38.4 kbit/s in this version of the protocol",
        _ => "Reserved",
    };
    ctx.add_bits(offset, oct, 0x0f, &format!("Wanted air interface user rate: {rate}"));
}

fn octet_6g(ctx: &mut DecodeContext<'_>, offset: usize, oct: u8) {
    if ctx.direction() == Direction::Uplink {
        for (mask, coding) in [(0x40, "TCH/F28.8"), (0x20, "TCH/F32.0"), (0x10, "TCH/F43.2")] {
            ctx.add_bits(
                offset,
                oct,
                mask,
                &format!(
                    "Acceptable channel codings extended: {coding} {}acceptable",
                    acceptable(oct, mask)
                ),
            );
        }
        let asymmetry = match (oct & 0x0c) >> 2 {
            0 => "Channel coding symmetry preferred",
            1 => "Uplink biased channel coding asymmetry is preferred",
            2 => "Downlink biased channel coding asymmetry is preferred",
            _ => "Unused, treat as Channel coding symmetry preferred",
        };
        ctx.add_bits(
            offset,
            oct,
            0x0c,
            &format!("Channel Coding Asymmetry Indication: {asymmetry}"),
        );
    } else {
        ctx.add_bits(offset, oct, 0x7c, "EDGE Channel Codings: Spare");
    }
    ctx.add_spare(offset, oct, 0x03);
}

fn octet_7(ctx: &mut DecodeContext<'_>, offset: usize, oct: u8) {
    ctx.add_bits(
        offset,
        oct,
        0x60,
        if oct & 0x60 == 0x40 {
            "Layer 2 Identity: Octet identifier"
        } else {
            "Layer 2 Identity: Reserved"
        },
    );
    let protocol = match oct & 0x1f {
        0x06 | 0x0d => "Reserved: was allocated in earlier phases of the protocol",
        0x08 => "ISO 6429, codeset 0 (DC1/DC3)",
        0x09 => "Reserved: was allocated but never used in earlier phases of the protocol",
        0x0a => "Videotex profile 1",
        0x0c => "COPnoFlCt (Character oriented Protocol with no Flow Control mechanism)",
        _ => "Reserved",
    };
    ctx.add_bits(
        offset,
        oct,
        0x1f,
        &format!("User information layer 2 protocol: {protocol}"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::subdecoder::OpaqueSubDecoder;

    fn decode_in(direction: Direction, data: &[u8]) -> (usize, Vec<Field>, Option<String>) {
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        ctx.set_direction(direction);
        let view = OctetView::new(data);
        let used = bearer_capability(&mut ctx, &view, data.len()).unwrap();
        let summary = ctx.take_summary();
        (used, ctx.into_fields(), summary)
    }

    fn labels(fields: &[Field]) -> Vec<&str> {
        fields.iter().map(|f| f.label.as_str()).collect()
    }

    #[test]
    fn test_speech_uplink() {
        // Octet 3: extended, dual rate FR preferred, speech; 3a: FR v2, HR v1
        let (used, fields, summary) = decode_in(Direction::Uplink, &[0x60, 0x02, 0x81]);
        assert_eq!(used, 3);
        assert_eq!(summary.as_deref(), Some(" - (Speech)"));
        let labels = labels(&fields);
        assert!(labels[1].starts_with(".11. .... = Radio channel requirement: MS supports at least"));
        assert!(labels.contains(&"Octets 3a - Speech Versions"));
        assert!(labels.contains(&".... 0010 = Speech version indication: GSM full rate speech version 2"));
        assert!(labels.contains(&".... 0001 = Speech version indication: GSM half rate speech version 1"));

        let header = fields
            .iter()
            .find(|f| f.label == "Octets 3a - Speech Versions")
            .unwrap();
        assert_eq!(header.range, 1..3);
    }

    #[test]
    fn test_direction_changes_text_not_length() {
        let data = [0x60, 0x02, 0x81];
        let (up_used, up, _) = decode_in(Direction::Uplink, &data);
        let (down_used, down, _) = decode_in(Direction::Downlink, &data);
        let (unknown_used, unknown, _) = decode_in(Direction::Unknown, &data);
        assert_eq!(up_used, down_used);
        assert_eq!(up_used, unknown_used);
        assert_ne!(up[1].label, down[1].label);
        assert!(down[1].label.ends_with("Radio channel requirement: Spare"));
        assert!(unknown[1].label.ends_with("(dissect problem)"));
    }

    #[test]
    fn test_octet_3_only() {
        let (used, fields, summary) = decode_in(Direction::Downlink, &[0xa1]);
        assert_eq!(used, 1);
        assert_eq!(fields.len(), 5);
        assert_eq!(summary.as_deref(), Some(" - (Unrestricted digital information)"));
    }

    #[test]
    fn test_data_call_groups() {
        // UDI, octet 4 .. 7 with 5 and 6 not extended
        let data = [0xa1, 0x88, 0xa1, 0x81, 0xc8];
        let (used, fields, _) = decode_in(Direction::Uplink, &data);
        assert_eq!(used, 5);
        let labels = labels(&fields);
        assert!(labels.contains(&"Octet 4"));
        assert!(labels.contains(&"Octet 5"));
        assert!(!labels.contains(&"Octet 5a"));
        assert!(labels.contains(&"Octet 6"));
        assert!(!labels.contains(&"Octet 6a"));
        assert!(labels.contains(&"Octet 7"));
        assert!(labels.contains(&"...0 1000 = User information layer 2 protocol: ISO 6429, codeset 0 (DC1/DC3)"));
        assert!(labels.contains(&".0.. .... = Compression: data compression not allowed"));
    }

    #[test]
    fn test_octet_6_chain() {
        // 6 extended, 6a..6c extended, 6d not extended, then octet 7
        let data = [0xa1, 0x88, 0xa1, 0x21, 0x15, 0x63, 0x01, 0x80, 0xc0];
        let (used, fields, _) = decode_in(Direction::Uplink, &data);
        assert_eq!(used, 9);
        let labels = labels(&fields);
        assert!(labels.contains(&"Octet 6d"));
        assert!(!labels.contains(&"Octet 6e"));
        assert!(labels.contains(&"Octet 7"));
        assert!(labels.contains(&".... 0101 = User rate: 9.6 kbit/s Recommendation X.1 and V.110"));
    }

    #[test]
    fn test_octet_6e_depends_on_direction() {
        let data = [0xa1, 0x88, 0xa1, 0x21, 0x15, 0x63, 0x01, 0x00, 0x5b, 0xc0];
        let (_, up, _) = decode_in(Direction::Uplink, &data);
        let (_, down, _) = decode_in(Direction::Downlink, &data);
        let up = labels(&up);
        let down = labels(&down);
        assert!(up.contains(&".... .011 = Maximum number of traffic channels: 4 TCH"));
        assert!(down.contains(&".... .011 = Maximum number of traffic channels: Spare"));
    }

    #[test]
    fn test_stops_mid_chain() {
        // Length runs out after octet 5a even though it is extended
        let data = [0xa1, 0x88, 0x21, 0x00];
        let (used, fields, _) = decode_in(Direction::Uplink, &data);
        assert_eq!(used, 4);
        assert!(labels(&fields).contains(&"Octet 5a"));
        assert!(!labels(&fields).contains(&"Octet 5b"));
    }

    #[test]
    fn test_extraneous_after_speech() {
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        ctx.set_direction(Direction::Uplink);
        let data = [0x60, 0x82, 0xff];
        let view = OctetView::new(&data);
        assert_eq!(bearer_capability(&mut ctx, &view, 3).unwrap(), 3);
        let last = ctx.fields().last().unwrap();
        assert_eq!(last.label, "Extraneous Data");
        assert_eq!(last.range, 2..3);
    }
}
