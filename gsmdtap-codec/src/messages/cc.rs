//! Call control messages (3GPP TS 24.008 clause 9.3)

use crate::context::Direction;
use crate::elements::ElementId as E;
use crate::grammar::{Directive as D, MessageGrammar};

use super::MessageDescriptor;

pub static ALERTING: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::OptTlv(0x1c, E::Facility, ""),
        D::OptTlv(0x1e, E::ProgressIndicator, ""),
        D::OptTlv(0x7e, E::UserUser, ""),
        D::OptTlv(0x7f, E::SsVersionIndicator, ""),
    ],
};

pub static CALL_CONFIRMED: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::OptTvShort(0xd0, E::RepeatIndicator, " BC repeat indicator"),
        D::OptTlv(0x04, E::BearerCapability, " 1"),
        D::OptTlv(0x04, E::BearerCapability, " 2"),
        D::OptTlv(0x08, E::Cause, ""),
        D::OptTlv(0x15, E::CallControlCapabilities, ""),
        D::OptTlv(0x2d, E::StreamIdentifier, ""),
        D::OptTlv(0x40, E::SupportedCodecList, ""),
    ],
};

pub static CALL_PROCEEDING: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[
        D::OptTvShort(0xd0, E::RepeatIndicator, " BC repeat indicator"),
        D::OptTlv(0x04, E::BearerCapability, " 1"),
        D::OptTlv(0x04, E::BearerCapability, " 2"),
        D::OptTlv(0x1c, E::Facility, ""),
        D::OptTlv(0x1e, E::ProgressIndicator, ""),
        D::OptTvShort(0x80, E::PriorityLevel, ""),
        D::OptTlv(0x2f, E::NetworkCcCapabilities, ""),
    ],
};

pub static CONGESTION_CONTROL: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[
        D::HalfOctets { high: E::SpareHalfOctet, low: E::CongestionLevel },
        D::OptTlv(0x08, E::Cause, ""),
    ],
};

pub static CONNECT: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::OptTlv(0x1c, E::Facility, ""),
        D::OptTlv(0x1e, E::ProgressIndicator, ""),
        D::OptTlv(0x4c, E::ConnectedNumber, ""),
        D::OptTlv(0x4d, E::ConnectedSubaddress, ""),
        D::OptTlv(0x7e, E::UserUser, ""),
        D::OptTlv(0x7f, E::SsVersionIndicator, ""),
        D::OptTlv(0x2d, E::StreamIdentifier, ""),
    ],
};

pub static DISCONNECT: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::MandLv(E::Cause, ""),
        D::OptTlv(0x1c, E::Facility, ""),
        D::OptTlv(0x1e, E::ProgressIndicator, ""),
        D::OptTlv(0x7e, E::UserUser, ""),
        D::OptTlv(0x7b, E::AllowedActions, ""),
        D::OptTlv(0x7f, E::SsVersionIndicator, ""),
    ],
};

pub static EMERGENCY_SETUP: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::OptTlv(0x04, E::BearerCapability, ""),
        D::OptTlv(0x2d, E::StreamIdentifier, ""),
        D::OptTlv(0x40, E::SupportedCodecList, ""),
        D::OptTlv(0x2e, E::ServiceCategory, " Emergency"),
    ],
};

pub static FACILITY: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::MandLv(E::Facility, ""),
        D::OptTlv(0x7f, E::SsVersionIndicator, ""),
    ],
};

pub static HOLD_REJECT: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[D::MandLv(E::Cause, "")],
};

pub static MODIFY: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::MandLv(E::BearerCapability, ""),
        D::OptTlv(0x7c, E::LowLayerCompatibility, ""),
        D::OptTlv(0x7d, E::HighLayerCompatibility, ""),
        D::OptT(0xa3, E::ReverseCallSetupDirection, ""),
        D::OptT(0xa4, E::ImmediateModificationIndicator, ""),
    ],
};

pub static MODIFY_COMPLETE: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::MandLv(E::BearerCapability, ""),
        D::OptTlv(0x7c, E::LowLayerCompatibility, ""),
        D::OptTlv(0x7d, E::HighLayerCompatibility, ""),
        D::OptT(0xa3, E::ReverseCallSetupDirection, ""),
    ],
};

pub static MODIFY_REJECT: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[
        D::MandLv(E::BearerCapability, ""),
        D::MandLv(E::Cause, ""),
        D::OptTlv(0x7c, E::LowLayerCompatibility, ""),
        D::OptTlv(0x7d, E::HighLayerCompatibility, ""),
    ],
};

pub static NOTIFY: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[D::MandV(E::NotificationIndicator)],
};

pub static PROGRESS: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[
        D::MandLv(E::ProgressIndicator, ""),
        D::OptTlv(0x7e, E::UserUser, ""),
    ],
};

pub static CC_ESTABLISHMENT: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[D::MandLv(E::SetupContainer, "")],
};

pub static CC_ESTABLISHMENT_CONFIRMED: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::OptTvShort(0xd0, E::RepeatIndicator, " Repeat indicator"),
        D::MandTlv(0x04, E::BearerCapability, " 1"),
        D::OptTlv(0x04, E::BearerCapability, " 2"),
        D::OptTlv(0x08, E::Cause, ""),
        D::OptTlv(0x40, E::SupportedCodecList, ""),
    ],
};

pub static RELEASE: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::OptTlv(0x08, E::Cause, ""),
        D::OptTlv(0x08, E::Cause, " 2"),
        D::OptTlv(0x1c, E::Facility, ""),
        D::OptTlv(0x7e, E::UserUser, ""),
        D::OptTlv(0x7f, E::SsVersionIndicator, ""),
    ],
};

pub static RECALL: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[D::MandV(E::RecallType), D::MandLv(E::Facility, "")],
};

pub static RELEASE_COMPLETE: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[
        D::OptTlv(0x08, E::Cause, ""),
        D::OptTlv(0x1c, E::Facility, ""),
        D::OptTlv(0x7e, E::UserUser, ""),
        D::OptTlv(0x7f, E::SsVersionIndicator, ""),
    ],
};

pub static RETRIEVE_REJECT: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[D::MandLv(E::Cause, "")],
};

/// Mobile originated SETUP. Also the layout of the SETUP container.
pub static SETUP: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::OptTvShort(0xd0, E::RepeatIndicator, " BC repeat indicator"),
        D::OptTlv(0x04, E::BearerCapability, " 1"),
        D::OptTlv(0x04, E::BearerCapability, " 2"),
        D::OptTlv(0x1c, E::Facility, ""),
        D::OptTlv(0x1e, E::ProgressIndicator, ""),
        D::OptTv(0x34, E::Signal, ""),
        D::OptTlv(0x5c, E::CallingPartyBcdNumber, ""),
        D::OptTlv(0x5d, E::CallingPartySubaddress, ""),
        D::OptTlv(0x5e, E::CalledPartyBcdNumber, ""),
        D::OptTlv(0x6d, E::CalledPartySubaddress, ""),
        D::OptTlv(0x74, E::RedirectingPartyBcdNumber, ""),
        D::OptTlv(0x75, E::RedirectingPartySubaddress, ""),
        D::OptTvShort(0xd0, E::RepeatIndicator, " LLC repeat indicator"),
        D::OptTlv(0x7c, E::LowLayerCompatibility, " 1"),
        D::OptTlv(0x7c, E::LowLayerCompatibility, " 2"),
        D::OptTvShort(0xd0, E::RepeatIndicator, " HLC repeat indicator"),
        D::OptTlv(0x7d, E::HighLayerCompatibility, " 1"),
        D::OptTlv(0x7d, E::HighLayerCompatibility, " 2"),
        D::OptTlv(0x7e, E::UserUser, ""),
        D::OptTvShort(0x80, E::PriorityLevel, ""),
        D::OptTlv(0x19, E::AlertingPattern, ""),
        D::OptTlv(0x2f, E::NetworkCcCapabilities, ""),
        D::OptTlv(0x3a, E::CauseOfNoCli, ""),
        // Backup bearer capability
        D::OptTlv(0x41, E::BearerCapability, ""),
        D::OptTlv(0x7f, E::SsVersionIndicator, ""),
        D::OptT(0xa1, E::ClirSuppression, ""),
        D::OptT(0xa2, E::ClirInvocation, ""),
        D::OptTlv(0x15, E::CallControlCapabilities, ""),
        D::OptTlv(0x1d, E::Facility, " $(CCBS)$ (advanced recall alignment)"),
        D::OptTlv(0x1b, E::Facility, " (recall alignment Not essential) $(CCBS)$"),
        D::OptTlv(0x2d, E::StreamIdentifier, ""),
        D::OptTlv(0x40, E::SupportedCodecList, ""),
    ],
};

pub static START_CC: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[D::OptTlv(0x15, E::CallControlCapabilities, "")],
};

pub static START_DTMF: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[D::MandTv(0x2c, E::KeypadFacility, "")],
};

pub static START_DTMF_ACKNOWLEDGE: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[D::MandTv(0x2c, E::KeypadFacility, "")],
};

pub static START_DTMF_REJECT: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[D::MandLv(E::Cause, "")],
};

pub static STATUS: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[
        D::MandLv(E::Cause, ""),
        D::MandV(E::CallState),
        D::OptTlv(0x24, E::AuxiliaryStates, ""),
    ],
};

pub static USER_INFORMATION: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[D::MandLv(E::UserUser, ""), D::OptT(0xa0, E::MoreData, "")],
};

/// Call control message types
pub static MESSAGES: [MessageDescriptor; 35] = [
    MessageDescriptor::new(0x01, "Alerting", Some(&ALERTING)),
    MessageDescriptor::new(0x08, "Call Confirmed", Some(&CALL_CONFIRMED)),
    MessageDescriptor::new(0x02, "Call Proceeding", Some(&CALL_PROCEEDING)),
    MessageDescriptor::new(0x07, "Connect", Some(&CONNECT)),
    MessageDescriptor::new(0x0f, "Connect Acknowledge", None),
    MessageDescriptor::new(0x0e, "Emergency Setup", Some(&EMERGENCY_SETUP)),
    MessageDescriptor::new(0x03, "Progress", Some(&PROGRESS)),
    MessageDescriptor::new(0x04, "CC-Establishment", Some(&CC_ESTABLISHMENT)),
    MessageDescriptor::new(0x06, "CC-Establishment Confirmed", Some(&CC_ESTABLISHMENT_CONFIRMED)),
    MessageDescriptor::new(0x0b, "Recall", Some(&RECALL)),
    MessageDescriptor::new(0x09, "Start CC", Some(&START_CC)),
    MessageDescriptor::new(0x05, "Setup", Some(&SETUP)),
    MessageDescriptor::new(0x17, "Modify", Some(&MODIFY)),
    MessageDescriptor::new(0x1f, "Modify Complete", Some(&MODIFY_COMPLETE)),
    MessageDescriptor::new(0x13, "Modify Reject", Some(&MODIFY_REJECT)),
    MessageDescriptor::new(0x10, "User Information", Some(&USER_INFORMATION)),
    MessageDescriptor::new(0x18, "Hold", None),
    MessageDescriptor::new(0x19, "Hold Acknowledge", None),
    MessageDescriptor::new(0x1a, "Hold Reject", Some(&HOLD_REJECT)),
    MessageDescriptor::new(0x1c, "Retrieve", None),
    MessageDescriptor::new(0x1d, "Retrieve Acknowledge", None),
    MessageDescriptor::new(0x1e, "Retrieve Reject", Some(&RETRIEVE_REJECT)),
    MessageDescriptor::new(0x25, "Disconnect", Some(&DISCONNECT)),
    MessageDescriptor::new(0x2d, "Release", Some(&RELEASE)),
    MessageDescriptor::new(0x2a, "Release Complete", Some(&RELEASE_COMPLETE)),
    MessageDescriptor::new(0x39, "Congestion Control", Some(&CONGESTION_CONTROL)),
    MessageDescriptor::new(0x3e, "Notify", Some(&NOTIFY)),
    MessageDescriptor::new(0x3d, "Status", Some(&STATUS)),
    MessageDescriptor::new(0x34, "Status Enquiry", None),
    MessageDescriptor::new(0x35, "Start DTMF", Some(&START_DTMF)),
    MessageDescriptor::new(0x31, "Stop DTMF", None),
    MessageDescriptor::new(0x32, "Stop DTMF Acknowledge", None),
    MessageDescriptor::new(0x36, "Start DTMF Acknowledge", Some(&START_DTMF_ACKNOWLEDGE)),
    MessageDescriptor::new(0x37, "Start DTMF Reject", Some(&START_DTMF_REJECT)),
    MessageDescriptor::new(0x3a, "Facility", Some(&FACILITY)),
];
