//! Non call related supplementary service messages (3GPP TS 24.080 clause 2)
//!
//! Release Complete and Facility share their layout with call control.

use crate::context::Direction;
use crate::elements::ElementId as E;
use crate::grammar::{Directive as D, MessageGrammar};

use super::{cc, MessageDescriptor};

pub static REGISTER: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::MandTlv(0x1c, E::Facility, ""),
        D::OptTlv(0x7f, E::SsVersionIndicator, ""),
    ],
};

/// Supplementary service message types
pub static MESSAGES: [MessageDescriptor; 3] = [
    MessageDescriptor::new(0x2a, "Release Complete", Some(&cc::RELEASE_COMPLETE)),
    MessageDescriptor::new(0x3a, "Facility", Some(&cc::FACILITY)),
    MessageDescriptor::new(0x3b, "Register", Some(&REGISTER)),
];
