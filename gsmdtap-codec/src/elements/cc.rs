//! Call control elements (3GPP TS 24.008 clause 10.5.4)
//!
//! Bearer capability lives in its own module; everything else a CC grammar
//! references is here.

use crate::association::PartyRole;
use crate::bcd::unpack_bcd;
use crate::bitfield::bit_label;
use crate::codec::CodecResult;
use crate::context::{DecodeContext, Direction};
use crate::field::FieldValue;
use crate::grammar;
use crate::messages;
use crate::octet_view::OctetView;
use crate::subdecoder::EmbeddedProtocol;

use super::mm::emergency_categories;
use super::{
    add_extension, consumed, extraneous_data_check, flag, no_more_data, raw_value, Half,
};

/// 10.5.4.4 Auxiliary states
pub fn auxiliary_states(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    add_extension(ctx, start, oct);
    ctx.add_spare(start, oct, 0x70);
    let hold = match (oct & 0x0c) >> 2 {
        0 => "Idle",
        1 => "Hold request",
        2 => "Call held",
        _ => "Retrieve request",
    };
    ctx.add_bits(start, oct, 0x0c, &format!("Hold auxiliary state: {hold}"));
    let mpty = match oct & 0x03 {
        0 => "Idle",
        1 => "MPTY request",
        2 => "Call in MPTY",
        _ => "Split request",
    };
    ctx.add_bits(start, oct, 0x03, &format!("Multi party auxiliary state: {mpty}"));

    Ok(extraneous_data_check(ctx, view, start, len))
}

/// 10.5.4.5a Call Control Capabilities
pub fn call_control_capabilities(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    let bearers = match oct >> 4 {
        0 => 1,
        n => n,
    };
    ctx.add_bits(start, oct, 0xf0, &format!("Maximum number of supported bearers: {bearers}"));
    ctx.add_spare(start, oct, 0x0c);
    let pcp = if oct & 0x02 != 0 { "supports" } else { "does not support" };
    ctx.add_bits(
        start,
        oct,
        0x02,
        &format!("PCP: the mobile station {pcp} the Prolonged Clearing Procedure"),
    );
    flag(
        ctx,
        start,
        oct,
        0x01,
        "DTMF: the mobile station supports DTMF as specified in subclause 5.5.7 of TS 24.008",
        "DTMF: reserved for earlier versions of the protocol",
    );

    if no_more_data(view, start, len) {
        return Ok(consumed(view, start));
    }

    let at = view.current_index();
    let oct = view.read()?;
    ctx.add_spare(at, oct, 0xf0);
    ctx.add_bits(
        at,
        oct,
        0x0f,
        &format!("Maximum number of speech bearers: {}", oct & 0x0f),
    );

    Ok(extraneous_data_check(ctx, view, start, len))
}

fn coding_standard(oct: u8, mask: u8, shift: u8) -> &'static str {
    match (oct & mask) >> shift {
        0 => "Coding as specified in ITU-T Rec. Q.931",
        1 => "Reserved for other international standards",
        2 => "National standard",
        _ => "Standard defined for the GSM PLMNS",
    }
}

/// 10.5.4.6 Call state
///
/// The state table carries both the mobile (U) and network (N) names; the
/// side that sent the message picks which one is shown.
pub fn call_state(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    _len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    ctx.add_bits(
        start,
        oct,
        0xc0,
        &format!("Coding standard: {}", coding_standard(oct, 0xc0, 6)),
    );

    let (user, network) = match oct & 0x3f {
        0x00 => ("U0 - null", "N0 - null"),
        0x02 => ("U0.1- MM connection pending", "N0.1- MM connection pending"),
        0x22 => ("U0.2- CC prompt present", "N0.2- CC connection pending"),
        0x23 => ("U0.3- Wait for network information", "N0.3- Network answer pending"),
        0x24 => ("U0.4- CC-Establishment present", "N0.4- CC-Establishment present"),
        0x25 => ("U0.5- CC-Establishment confirmed", "N0.5- CC-Establishment confirmed"),
        0x26 => ("U0.6- Recall present", "N0.6- Recall present"),
        0x01 => ("U1 - call initiated", "N1 - call initiated"),
        0x03 => (
            "U3 - mobile originating call proceeding",
            "N3 - mobile originating call proceeding",
        ),
        0x04 => ("U4 - call delivered", "N4 - call delivered"),
        0x06 => ("U6 - call present", "N6 - call present"),
        0x07 => ("U7 - call received", "N7 - call received"),
        0x08 => ("U8 - connect request", "N8 - connect request"),
        0x09 => (
            "U9 - mobile terminating call confirmed",
            "N9 - mobile terminating call confirmed",
        ),
        0x0a => ("U10- active", "N10- active"),
        0x0b => ("U11- disconnect request", "Unknown"),
        0x0c => ("U12- disconnect indication", "N12- disconnect indication"),
        0x13 => ("U19- release request", "N19- release request"),
        0x1a => ("U26- mobile originating modify", "N26- mobile originating modify"),
        0x1b => ("U27- mobile terminating modify", "N27- mobile terminating modify"),
        0x1c => ("Unknown", "N28- connect indication"),
        _ => ("Unknown", "Unknown"),
    };
    // A call state is reported by the side whose state it is.
    let name = match ctx.direction() {
        Direction::Downlink => network,
        _ => user,
    };
    ctx.add_bits_enum(start, oct, 0x3f, "Call state value", u32::from(oct & 0x3f), name);
    ctx.set_summary(format!(" - ({name})"));

    Ok(1)
}

fn type_of_number(oct: u8) -> &'static str {
    match (oct & 0x70) >> 4 {
        0 => "unknown",
        1 => "International Number",
        2 => "National number",
        3 => "Network Specific Number",
        4 => "Dedicated access, short code",
        5 | 6 => "Reserved",
        _ => "Reserved for extension",
    }
}

fn numbering_plan(oct: u8) -> &'static str {
    match oct & 0x0f {
        0x00 => "unknown",
        0x01 => "ISDN/Telephony Numbering (Rec ITU-T E.164)",
        0x02 => "spare",
        0x03 => "Data Numbering (ITU-T Rec. X.121)",
        0x04 => "Telex Numbering (ITU-T Rec. F.69)",
        0x08 => "National Numbering",
        0x09 => "Private Numbering",
        0x0d => "reserved for CTS (see 3GPP TS 44.056 [91])",
        0x0f => "Reserved for extension",
        _ => "Reserved",
    }
}

/// Octet 3 and, for calling-type numbers, the optional octet 3a.
fn number_header(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    with_presentation: bool,
) -> CodecResult<()> {
    let at = view.current_index();
    let oct = view.read()?;
    add_extension(ctx, at, oct);
    ctx.add_bits(at, oct, 0x70, &format!("Type of number: {}", type_of_number(oct)));
    ctx.add_bits(
        at,
        oct,
        0x0f,
        &format!("Numbering plan identification: {}", numbering_plan(oct)),
    );

    if !with_presentation || oct & 0x80 != 0 {
        return Ok(());
    }

    let at = view.current_index();
    let oct = view.read()?;
    add_extension(ctx, at, oct);
    let presentation = match (oct & 0x60) >> 5 {
        0 => "Presentation allowed",
        1 => "Presentation restricted",
        2 => "Number not available due to interworking",
        _ => "Reserved",
    };
    ctx.add_bits(at, oct, 0x60, &format!("Presentation indicator: {presentation}"));
    ctx.add_spare(at, oct, 0x1c);
    let screening = match oct & 0x03 {
        0 => "User-provided, not screened",
        1 => "User-provided, verified and passed",
        2 => "User-provided, verified and failed",
        _ => "Network provided",
    };
    ctx.add_bits(at, oct, 0x03, &format!("Screening indicator: {screening}"));
    Ok(())
}

/// Shared body of the BCD number elements. Returns the digits, if any.
fn bcd_number(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
    with_presentation: bool,
) -> CodecResult<(usize, Option<String>)> {
    let start = view.current_index();
    number_header(ctx, view, with_presentation)?;
    if no_more_data(view, start, len) {
        return Ok((consumed(view, start), None));
    }

    let at = view.current_index();
    let packed = view.read_slice(len - consumed(view, start))?;
    let digits = unpack_bcd(packed);
    ctx.add_value(
        at..at + packed.len(),
        format!("BCD Digits: {digits}"),
        FieldValue::Text(digits.clone()),
    );
    ctx.set_summary(format!(" - ({digits})"));

    Ok((extraneous_data_check(ctx, view, start, len), Some(digits)))
}

/// 10.5.4.7 Called party BCD number
///
/// The first number seen for a call is recorded on the association.
pub fn called_party_bcd_number(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let (used, digits) = bcd_number(ctx, view, len, false)?;
    if let Some(digits) = digits {
        ctx.record_party_if_absent(PartyRole::Called, &digits);
    }
    Ok(used)
}

/// 10.5.4.9 Calling party BCD number
pub fn calling_party_bcd_number(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let (used, digits) = bcd_number(ctx, view, len, true)?;
    if let Some(digits) = digits {
        ctx.record_party_if_absent(PartyRole::Calling, &digits);
    }
    Ok(used)
}

/// 10.5.4.13 Connected number
pub fn connected_number(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    Ok(bcd_number(ctx, view, len, true)?.0)
}

/// 10.5.4.21b Redirecting party BCD number
pub fn redirecting_party_bcd_number(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    Ok(bcd_number(ctx, view, len, true)?.0)
}

/// Called, calling, connected and redirecting party subaddress
/// (10.5.4.8, 10.5.4.10, 10.5.4.14, 10.5.4.21c share one layout).
pub fn subaddress(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    add_extension(ctx, start, oct);
    let kind = match (oct & 0x70) >> 4 {
        0 => "NSAP (X.213/ISO 8348 AD2)",
        2 => "User specified",
        _ => "Reserved",
    };
    ctx.add_bits(start, oct, 0x70, &format!("Type of subaddress: {kind}"));
    flag(
        ctx,
        start,
        oct,
        0x08,
        "Odd/Even indicator: odd number of address signals",
        "Odd/Even indicator: even number of address signals",
    );
    ctx.add_spare(start, oct, 0x07);

    if no_more_data(view, start, len) {
        return Ok(consumed(view, start));
    }
    raw_value(ctx, view, len - consumed(view, start), "Subaddress information")?;

    Ok(extraneous_data_check(ctx, view, start, len))
}

fn location(oct: u8) -> &'static str {
    match oct & 0x0f {
        0 => "User",
        1 => "Private network serving the local user",
        2 => "Public network serving the local user",
        3 => "Transit network",
        4 => "Public network serving the remote user",
        5 => "Private network serving the remote user",
        7 => "International network",
        10 => "Network beyond interworking point",
        _ => "Reserved",
    }
}

fn cause_name(cause: u8) -> &'static str {
    match cause {
        1 => "Unassigned (unallocated) number",
        3 => "No route to destination",
        6 => "Channel unacceptable",
        8 => "Operator determined barring",
        16 => "Normal call clearing",
        17 => "User busy",
        18 => "No user responding",
        19 => "User alerting, no answer",
        21 => "Call rejected",
        22 => "Number changed",
        25 => "Pre-emption",
        26 => "Non selected user clearing",
        27 => "Destination out of order",
        28 => "Invalid number format (incomplete number)",
        29 => "Facility rejected",
        30 => "Response to STATUS ENQUIRY",
        31 => "Normal, unspecified",
        34 => "No circuit/channel available",
        38 => "Network out of order",
        41 => "Temporary failure",
        42 => "Switching equipment congestion",
        43 => "Access information discarded",
        44 => "requested circuit/channel not available",
        47 => "Resources unavailable, unspecified",
        49 => "Quality of service unavailable",
        50 => "Requested facility not subscribed",
        55 => "Incoming calls barred within the CUG",
        57 => "Bearer capability not authorized",
        58 => "Bearer capability not presently available",
        63 => "Service or option not available, unspecified",
        65 => "Bearer service not implemented",
        68 => "ACM equal to or greater than ACMmax",
        69 => "Requested facility not implemented",
        70 => "Only restricted digital information bearer capability is available",
        79 => "Service or option not implemented, unspecified",
        81 => "Invalid transaction identifier value",
        87 => "User not member of CUG",
        88 => "Incompatible destination",
        91 => "Invalid transit network selection",
        95 => "Semantically incorrect message",
        96 => "Invalid mandatory information",
        97 => "Message type non-existent or not implemented",
        98 => "Message type not compatible with protocol state",
        99 => "Information element non-existent or not implemented",
        100 => "Conditional IE error",
        101 => "Message not compatible with protocol state",
        102 => "Recovery on timer expiry",
        111 => "Protocol error, unspecified",
        127 => "Interworking, unspecified",
        0..=31 => "Treat as Normal, unspecified",
        32..=47 => "Treat as Resources unavailable, unspecified",
        48..=63 => "Treat as Service or option not available, unspecified",
        64..=79 => "Treat as Service or option not implemented, unspecified",
        80..=95 => "Treat as Semantically incorrect message",
        96..=111 => "Treat as Protocol error, unspecified",
        _ => "Treat as Interworking, unspecified",
    }
}

/// 10.5.4.11 Cause
pub fn cause(ctx: &mut DecodeContext<'_>, view: &OctetView<'_>, len: usize) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    flag(ctx, start, oct, 0x80, "Extension: not extended", "Extension: extended");
    ctx.add_bits(
        start,
        oct,
        0x60,
        &format!("Coding standard: {}", coding_standard(oct, 0x60, 5)),
    );
    ctx.add_spare(start, oct, 0x10);
    ctx.add_bits(start, oct, 0x0f, &format!("Location: {}", location(oct)));

    if oct & 0x80 == 0 {
        let at = view.current_index();
        let oct = view.read()?;
        add_extension(ctx, at, oct);
        ctx.add_bits(at, oct, 0x7f, "Recommendation");
    }

    let at = view.current_index();
    let oct = view.read()?;
    add_extension(ctx, at, oct);
    let value = oct & 0x7f;
    let name = cause_name(value);
    ctx.add_value(
        at..at + 1,
        bit_label(oct, 0x7f, &format!("Cause: ({value}) {name}")),
        FieldValue::Enum {
            value: value.into(),
            name,
        },
    );
    ctx.set_summary(format!(" - ({value}) {name}"));

    if no_more_data(view, start, len) {
        return Ok(consumed(view, start));
    }
    raw_value(ctx, view, len - consumed(view, start), "Diagnostics")?;

    Ok(extraneous_data_check(ctx, view, start, len))
}

/// 10.5.4.11a Congestion level
pub fn congestion_level(ctx: &mut DecodeContext<'_>, offset: usize, octet: u8, half: Half) {
    let value = half.value(octet);
    let name = match value {
        0 => "Receiver ready",
        15 => "Receiver not ready",
        _ => "Reserved",
    };
    ctx.add_bits_enum(offset, octet, half.mask(0x0f), "Congestion level", value.into(), name);
    ctx.set_summary(format!(" - ({name})"));
}

/// 10.5.4.16 High layer compatibility, handed to the Q.931 decoder
pub fn high_layer_compatibility(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let at = view.current_index();
    let payload = view.read_slice(len)?;
    ctx.embed(EmbeddedProtocol::Q931HighLayerCompatibility, payload, at);
    Ok(len)
}

/// 10.5.4.17 Keypad facility
pub fn keypad_facility(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    _len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    ctx.add_spare(start, oct, 0x80);
    let key = char::from(oct & 0x7f);
    ctx.add_bits(start, oct, 0x7f, &format!("Keypad information: {key}"));
    ctx.set_summary(format!(" - {key}"));

    Ok(1)
}

/// 10.5.4.18 Low layer compatibility, handed to the Q.931 decoder
pub fn low_layer_compatibility(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let at = view.current_index();
    let payload = view.read_slice(len)?;
    ctx.embed(EmbeddedProtocol::Q931LowLayerCompatibility, payload, at);
    Ok(len)
}

/// 10.5.4.20 Notification indicator
pub fn notification_indicator(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    _len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    add_extension(ctx, start, oct);
    let value = oct & 0x7f;
    let name = match value {
        0 => "User suspended",
        1 => "User resumed",
        2 => "Bearer change",
        _ => "Reserved",
    };
    ctx.add_bits_enum(start, oct, 0x7f, "Notification description", value.into(), name);
    ctx.set_summary(format!(" - {name}"));

    Ok(1)
}

/// 10.5.4.21 Progress indicator
pub fn progress_indicator(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    add_extension(ctx, start, oct);
    ctx.add_bits(
        start,
        oct,
        0x60,
        &format!("Coding standard: {}", coding_standard(oct, 0x60, 5)),
    );
    ctx.add_spare(start, oct, 0x10);
    let place = match oct & 0x0f {
        3 | 7 => "Reserved",
        _ => location(oct),
    };
    ctx.add_bits(start, oct, 0x0f, &format!("Location: {place}"));

    let at = view.current_index();
    let oct = view.read()?;
    add_extension(ctx, at, oct);
    let value = oct & 0x7f;
    let name = match value {
        1 => "Call is not end-to-end PLMN/ISDN, further call progress information may be available in-band",
        2 => "Destination address in non-PLMN/ISDN",
        3 => "Origination address in non-PLMN/ISDN",
        4 => "Call has returned to the PLMN/ISDN",
        8 => "In-band information or appropriate pattern now available",
        32 => "Call is end-to-end PLMN/ISDN",
        64 => "Queueing",
        _ => "Unspecific",
    };
    ctx.add_bits(at, oct, 0x7f, &format!("Progress Description: {name} ({value})"));
    ctx.set_summary(format!(" - {value}"));

    Ok(extraneous_data_check(ctx, view, start, len))
}

/// 10.5.4.21a Recall type
pub fn recall_type(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    _len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    ctx.add_spare(start, oct, 0xf8);
    let value = oct & 0x07;
    let name = match value {
        0 => "CCBS",
        1..=6 => "shall be treated as CCBS (intended for other similar type of Recall)",
        _ => "reserved",
    };
    ctx.add_bits_enum(start, oct, 0x07, "Recall type", value.into(), name);

    Ok(1)
}

/// 10.5.4.22 Repeat indicator
pub fn repeat_indicator(ctx: &mut DecodeContext<'_>, offset: usize, octet: u8, half: Half) {
    let value = half.value(octet);
    let name = match value {
        1 => "Circular for successive selection 'mode 1 alternate mode 2'",
        2 => "Support of fallback mode 1 preferred, mode 2 selected if setup of mode 1 fails",
        3 => "Reserved: was allocated in earlier phases of the protocol",
        _ => "Reserved",
    };
    ctx.add_bits(offset, octet, half.mask(0x0f), name);
}

/// 10.5.4.22b SETUP container
///
/// Holds the elements of a mobile originated SETUP, without its header.
pub fn setup_container(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let outer = ctx.direction();
    let result = grammar::execute(ctx, view.data(), start, len, &messages::cc::SETUP);
    ctx.set_direction(outer);
    let used = result?;
    view.skip(used)?;
    Ok(used)
}

/// 10.5.4.23 Signal
pub fn signal(ctx: &mut DecodeContext<'_>, view: &OctetView<'_>, _len: usize) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    let name = match oct {
        0x00 => "dial tone on",
        0x01 => "ring back tone on",
        0x02 => "intercept tone on",
        0x03 => "network congestion tone on",
        0x04 => "busy tone on",
        0x05 => "confirm tone on",
        0x06 => "answer tone on",
        0x07 => "call waiting tone on",
        0x08 => "off-hook warning tone on",
        0x3f => "tones off",
        0x4f => "alerting off",
        _ => "Reserved",
    };
    ctx.add_value(
        start..start + 1,
        format!("Signal Value: {name} (0x{oct:02x})"),
        FieldValue::Enum {
            value: oct.into(),
            name,
        },
    );
    ctx.set_summary(format!(" - {name}"));

    Ok(1)
}

/// SS version indicator (TS 24.080 clause 3.7.2)
pub fn ss_version_indicator(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    let name = match oct {
        0 => "Phase 2 service, ellipsis notation, and phase 2 error handling is supported",
        1 => "SS-Protocol version 3 is supported, and phase 2 error handling is supported",
        _ => "Reserved",
    };
    ctx.add_value(
        start..start + 1,
        name,
        FieldValue::Enum {
            value: oct.into(),
            name,
        },
    );

    Ok(extraneous_data_check(ctx, view, start, len))
}

/// 10.5.4.25 User-user
pub fn user_user(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let pd = view.read()?;

    let name = match pd {
        0x00 => "User specific protocol",
        0x01 => "OSI high layer protocols",
        0x02 => "X.244",
        0x03 => "Reserved for system management convergence function",
        0x04 => "IA5 characters",
        0x07 => "Rec.V.120 rate adaption",
        0x08 => "Q.931 (I.451) user-network call control messages",
        0x10..=0x3f | 0x50..=0xfe => "Reserved for other network layer or layer 3 protocols",
        0x40..=0x4f => "National use",
        _ => "Reserved",
    };
    ctx.add_value(
        start..start + 1,
        format!("User-user protocol discriminator: {name}"),
        FieldValue::Enum {
            value: pd.into(),
            name,
        },
    );

    if no_more_data(view, start, len) {
        return Ok(consumed(view, start));
    }

    if pd == 0x04 {
        let at = view.current_index();
        let info = view.read_slice(len - consumed(view, start))?;
        let text: String = info.iter().map(|&b| char::from(b & 0x7f)).collect();
        ctx.add_value(
            at..at + info.len(),
            format!("User-user information: {text}"),
            FieldValue::Text(text),
        );
    } else {
        raw_value(ctx, view, len - consumed(view, start), "User-user information")?;
    }

    Ok(extraneous_data_check(ctx, view, start, len))
}

/// 10.5.4.26 Alerting Pattern
pub fn alerting_pattern(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    ctx.add_spare(start, oct, 0xf0);
    let value = oct & 0x0f;
    let name = match value {
        0 => "Alerting Pattern 1",
        1 => "Alerting Pattern 2",
        2 => "Alerting Pattern 3",
        4 => "Alerting Pattern 5",
        5 => "Alerting Pattern 6",
        6 => "Alerting Pattern 7",
        7 => "Alerting Pattern 8",
        8 => "Alerting Pattern 9",
        _ => "Reserved",
    };
    ctx.add_bits_enum(start, oct, 0x0f, "Alerting Pattern", value.into(), name);
    ctx.set_summary(format!(" - ({name})"));

    Ok(extraneous_data_check(ctx, view, start, len))
}

/// 10.5.4.27 Allowed actions
pub fn allowed_actions(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    flag(
        ctx,
        start,
        oct,
        0x80,
        "CCBS activation: Activation of CCBS possible",
        "CCBS activation: Activation of CCBS not possible",
    );
    ctx.add_spare(start, oct, 0x7f);

    Ok(extraneous_data_check(ctx, view, start, len))
}

/// 10.5.4.28 Stream Identifier
pub fn stream_identifier(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    let label = match oct {
        0 => "Stream Identifier: No Bearer".to_owned(),
        n => format!("Stream Identifier: {n}"),
    };
    ctx.add_value(start..start + 1, label, FieldValue::Uint(oct.into()));

    Ok(extraneous_data_check(ctx, view, start, len))
}

/// 10.5.4.29 Network Call Control Capabilities
pub fn network_cc_capabilities(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    ctx.add_spare(start, oct, 0xfe);
    flag(
        ctx,
        start,
        oct,
        0x01,
        "MCS: This value indicates that the network supports the multicall",
        "MCS: This value indicates that the network does not support the multicall",
    );

    Ok(extraneous_data_check(ctx, view, start, len))
}

/// 10.5.4.30 Cause of No CLI
pub fn cause_of_no_cli(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    let name = match oct {
        1 => "Reject by user",
        2 => "Interaction with other service",
        3 => "Coin line/payphone",
        _ => "Unavailable",
    };
    ctx.add_value(
        start..start + 1,
        format!("Cause of No CLI: {name}"),
        FieldValue::Enum {
            value: oct.into(),
            name,
        },
    );
    ctx.set_summary(format!(" - ({name})"));

    Ok(extraneous_data_check(ctx, view, start, len))
}

const CODECS: [&str; 14] = [
    "GSM FR",
    "GSM HR",
    "GSM EFR",
    "FR AMR",
    "HR AMR",
    "UMTS AMR",
    "UMTS AMR 2",
    "TDMA EFR",
    "PDC EFR",
    "FR AMR-WB",
    "UMTS AMR-WB",
    "OHR AMR",
    "OFR AMR-WB",
    "OHR AMR-WB",
];

/// 10.5.4.32 Supported codec list
///
/// A list of (SysID, bitmap length, bitmap) entries.
pub fn supported_codec_list(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();

    while len - consumed(view, start) >= 2 {
        let at = view.current_index();
        let sys_id = view.read()?;
        let bitmap_len = usize::from(view.read()?);
        let system = match sys_id {
            0x00 => "GSM",
            0x04 => "UMTS",
            _ => "unknown",
        };
        ctx.add(
            at..at + 2,
            format!("System Identification (SysID): {system} (0x{sys_id:02x}), Bitmap Length: {bitmap_len}"),
        );

        let available = len - consumed(view, start);
        let bitmap = view.read_up_to(bitmap_len.min(available));
        let mut names = Vec::new();
        for (byte_index, byte) in bitmap.iter().enumerate().take(2) {
            for bit in 0..8 {
                if byte & (1 << bit) != 0 {
                    if let Some(name) = CODECS.get(byte_index * 8 + bit) {
                        names.push(*name);
                    }
                }
            }
        }
        ctx.add(
            at + 2..at + 2 + bitmap.len(),
            format!("Codec Bitmap for SysID {system}: {}", names.join(", ")),
        );
        if bitmap.len() < bitmap_len {
            break;
        }
    }

    Ok(extraneous_data_check(ctx, view, start, len))
}

/// 10.5.4.33 Service category
pub fn service_category(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    ctx.add_spare(start, oct, 0xe0);
    let services = emergency_categories(oct);
    ctx.add_bits(
        start,
        oct,
        0x1f,
        &format!("Emergency Service Category Value: {services}"),
    );
    ctx.set_summary(format!(" - ({services})"));

    Ok(extraneous_data_check(ctx, view, start, len))
}
