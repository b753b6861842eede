//! Test procedure elements (3GPP TS 44.014 and TS 34.109)

use crate::codec::CodecResult;
use crate::context::DecodeContext;
use crate::field::FieldValue;
use crate::octet_view::OctetView;

use super::{consumed, extraneous_data_check, flag};

/// CLOSE_TCH_LOOP_CMD sub-channel octet
pub fn sub_channel(ctx: &mut DecodeContext<'_>, view: &OctetView<'_>, _len: usize) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    let loop_bits = oct & 0x3f;
    let letter = if loop_bits & 0x38 == 0x38 {
        "I"
    } else if loop_bits & 0x38 == 0x18 {
        "F"
    } else if loop_bits & 0x38 == 0x10 {
        "E"
    } else if loop_bits & 0x38 == 0x08 {
        "D"
    } else if loop_bits & 0x3c == 0x04 {
        "C"
    } else if loop_bits & 0x3e == 0x02 {
        "B"
    } else if loop_bits & 0x3e == 0x00 {
        "A"
    } else {
        "unknown"
    };
    ctx.add(start..start + 1, format!("Test Loop {letter}"));
    flag(
        ctx,
        start,
        oct,
        0x01,
        "Sub-channel 1 of two half rate channels is to be looped",
        "Only one TCH active or sub-channel 0 of two half rate channels is to be looped",
    );
    ctx.set_summary(format!(" - Test Loop {letter}"));

    Ok(1)
}

/// OPEN_LOOP_CMD acknowledgement octet
pub fn ack(ctx: &mut DecodeContext<'_>, view: &OctetView<'_>, _len: usize) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    if oct & 0xf0 == 0x80 {
        ctx.add_value(
            start..start + 1,
            format!("Acknowledgment element: {}", oct & 0x01),
            FieldValue::Uint((oct & 0x01).into()),
        );
    } else {
        ctx.add(start..start + 1, "No acknowledgment element present");
    }

    Ok(1)
}

fn coding_text(bits: u8) -> String {
    match bits {
        0 => "Channel coding not needed. The Burst-by-Burst loop is activated, type G".to_owned(),
        1 => "Channel coding needed. Frame erasure is to be signalled, type H".to_owned(),
        n => format!("Channel coding reserved ({n})"),
    }
}

fn mechanism_text(bits: u8) -> String {
    match bits {
        0 => "Multi-slot mechanism 1".to_owned(),
        1 => "Multi-slot mechanism 2".to_owned(),
        n => format!("Loop mechanism reserved ({n})"),
    }
}

/// CLOSE_Multi-slot_LOOP_CMD loop type
pub fn loop_type(ctx: &mut DecodeContext<'_>, view: &OctetView<'_>, _len: usize) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    ctx.add_bits(start, oct, 0x03, &coding_text(oct & 0x03));
    let mechanism = (oct & 0x1c) >> 2;
    ctx.add_bits(start, oct, 0x1c, &mechanism_text(mechanism));
    if mechanism == 0 {
        ctx.add_bits(start, oct, 0xe0, &format!("Timeslot number {}", (oct & 0xe0) >> 5));
    }

    Ok(1)
}

/// CLOSE_Multi-slot_LOOP_ACK result
pub fn loop_ack(ctx: &mut DecodeContext<'_>, view: &OctetView<'_>, _len: usize) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    ctx.add_bits(start, oct, 0x30, &coding_text((oct & 0x30) >> 4));
    ctx.add_bits(start, oct, 0x0e, &mechanism_text((oct & 0x0e) >> 1));
    flag(
        ctx,
        start,
        oct,
        0x01,
        "Multi-slot TCH loop was not closed due to error",
        "Multi-slot TCH loop was closed successfully",
    );

    Ok(1)
}

/// TEST_INTERFACE tested device
pub fn tested_device(ctx: &mut DecodeContext<'_>, view: &OctetView<'_>, _len: usize) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    let text = match oct {
        0 => "Normal operation (no tested device via DAI)".to_owned(),
        1 => "Test of speech decoder / DTX functions (downlink)".to_owned(),
        2 => "Test of speech encoder / DTX functions (uplink)".to_owned(),
        4 => "Test of acoustic devices and A/D & D/A".to_owned(),
        n => format!("Tested device reserved ({n})"),
    };
    ctx.add_value(start..start + 1, text, FieldValue::Uint(oct.into()));

    Ok(1)
}

/// GPRS_TEST_MODE_CMD PDU description
pub fn pdu_description(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    _len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let value = view.read_u16()?;

    let text = if value & 0x8000 == 0 {
        "PDU description reserved".to_owned()
    } else {
        match value & 0x0fff {
            0 => "Infinite number of PDUs to be transmitted in the TBF".to_owned(),
            n => format!("{n} PDUs to be transmitted in the TBF"),
        }
    };
    ctx.add_value(start..start + 2, text, FieldValue::Uint(value.into()));

    Ok(2)
}

fn timeslot_offset(ctx: &mut DecodeContext<'_>, offset: usize, oct: u8) {
    ctx.add_bits(
        offset,
        oct,
        0x0e,
        &format!("Downlink Timeslot Offset: timeslot number {}", (oct & 0x0e) >> 1),
    );
}

/// GPRS_TEST_MODE_CMD mode flag
pub fn mode_flag(ctx: &mut DecodeContext<'_>, view: &OctetView<'_>, _len: usize) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    flag(
        ctx,
        start,
        oct,
        0x01,
        "MS shall select the loop back option",
        "MS shall itself generate the pseudorandom data",
    );
    timeslot_offset(ctx, start, oct);

    Ok(1)
}

/// EGPRS_START_RADIO_BLOCK_LOOPBACK_CMD mode flag
pub fn egprs_mode_flag(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    _len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    flag(
        ctx,
        start,
        oct,
        0x01,
        "MS loops back blocks on the uplink using GMSK modulation only",
        "MS loops back blocks on the uplink using either GMSK or 8-PSK modulation following the detected received modulation",
    );
    timeslot_offset(ctx, start, oct);

    Ok(1)
}

/// Most radio bearers a loop back setup lists.
const MAX_LB_SETUP: usize = 4;

/// CLOSE_UE_TEST_LOOP test loop mode and its mode-specific trailer
pub fn ue_test_loop_mode(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let mode = view.read()?;

    match mode & 0x03 {
        0 => {
            ctx.add_bits(
                start,
                mode,
                0x03,
                "UE test loop mode 1 loop back (loopback of RLC SDUs or PDCP SDUs)",
            );
            if consumed(view, start) < len {
                let at = view.current_index();
                let setup_len = usize::from(view.read()?);
                ctx.add_value(
                    at..at + 1,
                    format!("LB setup length: {setup_len}"),
                    FieldValue::Uint(setup_len as u64),
                );

                let mut bearer = 0;
                while bearer * 3 + 3 <= setup_len
                    && bearer < MAX_LB_SETUP
                    && len - consumed(view, start) >= 3
                {
                    let at = view.current_index();
                    ctx.add(at..at + 3, format!("LB setup RB IE {bearer}"));
                    ctx.enter();
                    let sdu_size = view.read_u16()?;
                    ctx.add_value(
                        at..at + 2,
                        format!("Uplink RLC SDU size is {sdu_size} bits"),
                        FieldValue::Uint(sdu_size.into()),
                    );
                    let rb = view.read()?;
                    ctx.add_bits(at + 2, rb, 0x1f, &format!("Radio Bearer {}", rb & 0x1f));
                    ctx.leave();
                    bearer += 1;
                }
            }
        }
        1 => {
            ctx.add_bits(
                start,
                mode,
                0x03,
                "UE test loop mode 2 loop back (loopback of transport block data and CRC bits)",
            );
        }
        2 => {
            ctx.add_bits(
                start,
                mode,
                0x03,
                "UE test loop mode 3 RLC SDU counting (counting of received RLC SDUs)",
            );
            if consumed(view, start) < len {
                let at = view.current_index();
                let oct = view.read()?;
                ctx.add_bits(
                    at,
                    oct,
                    0x1f,
                    &format!("MBMS short transmission identity {}", (oct & 0x1f) + 1),
                );
            }
        }
        n => {
            ctx.add_bits(start, mode, 0x03, &format!("UE test loop mode reserved ({n})"));
        }
    }

    Ok(extraneous_data_check(ctx, view, start, len))
}

/// UE positioning technology
pub fn ue_positioning_technology(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    _len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    let text = match oct {
        0 => "AGPS".to_owned(),
        n => format!("UE positioning technology reserved ({n})"),
    };
    ctx.add_value(start..start + 1, text, FieldValue::Uint(oct.into()));

    Ok(1)
}

/// RLC SDU counter value
pub fn rlc_sdu_counter_value(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    _len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let value = view.read_u32()?;

    ctx.add_value(
        start..start + 4,
        format!("UE received RLC SDU counter value {value}"),
        FieldValue::Uint(value.into()),
    );

    Ok(4)
}
