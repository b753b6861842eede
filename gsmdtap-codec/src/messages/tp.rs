//! Test procedure messages (3GPP TS 44.014 clause 8 and TS 34.109 clause 6)
//!
//! Test procedures carry no direction; their grammars leave it unknown.

use crate::context::Direction;
use crate::elements::ElementId as E;
use crate::grammar::{Directive as D, MessageGrammar};

use super::MessageDescriptor;

const fn tp(directives: &'static [D]) -> MessageGrammar {
    MessageGrammar {
        direction: Direction::Unknown,
        directives,
    }
}

pub static CLOSE_TCH_LOOP_CMD: MessageGrammar = tp(&[D::MandV(E::TpSubChannel)]);

/// The acknowledgement octet is optional in earlier releases.
pub static OPEN_LOOP_CMD: MessageGrammar = tp(&[D::OptV(E::TpAck)]);

pub static CLOSE_MULTI_SLOT_LOOP_CMD: MessageGrammar = tp(&[D::MandV(E::TpLoopType)]);

pub static CLOSE_MULTI_SLOT_LOOP_ACK: MessageGrammar = tp(&[D::MandV(E::TpLoopAck)]);

pub static TEST_INTERFACE: MessageGrammar = tp(&[D::MandV(E::TpTestedDevice)]);

pub static GPRS_TEST_MODE_CMD: MessageGrammar =
    tp(&[D::MandV(E::TpPduDescription), D::MandV(E::TpModeFlag)]);

pub static EGPRS_START_RADIO_BLOCK_LOOPBACK_CMD: MessageGrammar =
    tp(&[D::MandV(E::TpEgprsModeFlag)]);

pub static CLOSE_UE_TEST_LOOP: MessageGrammar = tp(&[D::MandV(E::TpUeTestLoopMode)]);

pub static RESET_UE_POSITIONING_STORED_INFORMATION: MessageGrammar =
    tp(&[D::MandV(E::TpUePositioningTechnology)]);

pub static RLC_SDU_COUNTER_RESPONSE: MessageGrammar = tp(&[D::MandV(E::TpRlcSduCounterValue)]);

/// Test procedure message types
pub static MESSAGES: [MessageDescriptor; 24] = [
    MessageDescriptor::new(0x00, "Close TCH Loop Cmd", Some(&CLOSE_TCH_LOOP_CMD)),
    MessageDescriptor::new(0x01, "Close TCH Loop Ack", None),
    MessageDescriptor::new(0x06, "Open Loop Cmd", Some(&OPEN_LOOP_CMD)),
    MessageDescriptor::new(0x0c, "Act EMMI Cmd", None),
    MessageDescriptor::new(0x0d, "Act EMMI Ack", None),
    MessageDescriptor::new(0x10, "Deact EMMI", None),
    MessageDescriptor::new(0x14, "Test Interface", Some(&TEST_INTERFACE)),
    MessageDescriptor::new(0x20, "Close Multi-slot Loop Cmd", Some(&CLOSE_MULTI_SLOT_LOOP_CMD)),
    MessageDescriptor::new(0x21, "Close Multi-slot Loop Ack", Some(&CLOSE_MULTI_SLOT_LOOP_ACK)),
    MessageDescriptor::new(0x22, "Open Multi-slot Loop Cmd", None),
    MessageDescriptor::new(0x23, "Open Multi-slot Loop Ack", None),
    MessageDescriptor::new(0x24, "GPRS Test Mode Cmd", Some(&GPRS_TEST_MODE_CMD)),
    MessageDescriptor::new(
        0x25,
        "EGPRS Start Radio Block Loopback Cmd",
        Some(&EGPRS_START_RADIO_BLOCK_LOOPBACK_CMD),
    ),
    MessageDescriptor::new(0x40, "Close UE Test Loop", Some(&CLOSE_UE_TEST_LOOP)),
    MessageDescriptor::new(0x41, "Close UE Test Loop Complete", None),
    MessageDescriptor::new(0x42, "Open UE Test Loop", None),
    MessageDescriptor::new(0x43, "Open UE Test Loop Complete", None),
    MessageDescriptor::new(0x44, "Activate RB Test Mode", None),
    MessageDescriptor::new(0x45, "Activate RB Test Mode Complete", None),
    MessageDescriptor::new(0x46, "Deactivate RB Test Mode", None),
    MessageDescriptor::new(0x47, "Deactivate RB Test Mode Complete", None),
    MessageDescriptor::new(
        0x48,
        "Reset UE Positioning Stored Information",
        Some(&RESET_UE_POSITIONING_STORED_INFORMATION),
    ),
    MessageDescriptor::new(0x49, "UE Test Loop Mode 3 RLC SDU Counter Request", None),
    MessageDescriptor::new(
        0x4a,
        "UE Test Loop Mode 3 RLC SDU Counter Response",
        Some(&RLC_SDU_COUNTER_RESPONSE),
    ),
];
