//! Mobility management messages (3GPP TS 24.008 clause 9.2)

use crate::context::Direction;
use crate::elements::ElementId as E;
use crate::grammar::{Directive as D, MessageGrammar};

use super::MessageDescriptor;

pub static AUTHENTICATION_REQUEST: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[
        D::HalfOctets { high: E::SpareHalfOctet, low: E::CipheringKeySequenceNumber },
        D::MandV(E::AuthParamRand),
        D::OptTlv(0x20, E::AuthParamAutn, ""),
    ],
};

pub static AUTHENTICATION_RESPONSE: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::MandV(E::AuthRespParam),
        D::OptTlv(0x21, E::AuthRespParamExt, ""),
    ],
};

pub static AUTHENTICATION_FAILURE: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::MandV(E::RejectCause),
        D::OptTlv(0x22, E::AuthFailParam, ""),
    ],
};

pub static CM_REESTABLISHMENT_REQUEST: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::HalfOctets { high: E::SpareHalfOctet, low: E::CipheringKeySequenceNumber },
        D::MandLv(E::MsClassmark2, ""),
        D::MandLv(E::MobileIdentity, ""),
        D::OptTv(0x13, E::LocationAreaId, ""),
    ],
};

pub static CM_SERVICE_PROMPT: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[D::MandV(E::PdAndSapi)],
};

pub static CM_SERVICE_REJECT: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[D::MandV(E::RejectCause)],
};

pub static ABORT: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[D::MandV(E::RejectCause)],
};

pub static CM_SERVICE_REQUEST: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::HalfOctets { high: E::CipheringKeySequenceNumber, low: E::CmServiceType },
        D::MandLv(E::MsClassmark2, ""),
        D::MandLv(E::MobileIdentity, ""),
        D::OptTvShort(0x80, E::PriorityLevel, ""),
    ],
};

pub static IDENTITY_REQUEST: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[D::HalfOctets { high: E::SpareHalfOctet, low: E::IdentityType }],
};

pub static IDENTITY_RESPONSE: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[D::MandLv(E::MobileIdentity, "")],
};

pub static IMSI_DETACH_INDICATION: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[D::MandV(E::MsClassmark1), D::MandLv(E::MobileIdentity, "")],
};

pub static LOCATION_UPDATING_ACCEPT: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[
        D::MandV(E::LocationAreaId),
        D::OptTlv(0x17, E::MobileIdentity, ""),
        D::OptT(0xa1, E::FollowOnProceed, ""),
        D::OptT(0xa2, E::CtsPermission, ""),
        D::OptTlv(0x4a, E::PlmnList, " Equivalent"),
        D::OptTlv(0x34, E::EmergencyNumberList, ""),
    ],
};

pub static LOCATION_UPDATING_REJECT: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[D::MandV(E::RejectCause)],
};

pub static LOCATION_UPDATING_REQUEST: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::HalfOctets { high: E::CipheringKeySequenceNumber, low: E::LocationUpdatingType },
        D::MandV(E::LocationAreaId),
        D::MandV(E::MsClassmark1),
        D::MandLv(E::MobileIdentity, ""),
        D::OptTlv(0x33, E::MsClassmark2, ""),
    ],
};

/// Sent by the network; decoded with the uplink tables all the same.
pub static MM_INFORMATION: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[
        D::OptTlv(0x43, E::NetworkName, " - Full Name"),
        D::OptTlv(0x45, E::NetworkName, " - Short Name"),
        D::OptTv(0x46, E::TimeZone, " - Local"),
        D::OptTv(0x47, E::TimeZoneAndTime, " - Universal Time and Local Time Zone"),
        D::OptTlv(0x48, E::LsaIdentifier, ""),
        D::OptTlv(0x49, E::DaylightSavingTime, ""),
    ],
};

pub static MM_STATUS: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[D::MandV(E::RejectCause)],
};

pub static TMSI_REALLOCATION_COMMAND: MessageGrammar = MessageGrammar {
    direction: Direction::Downlink,
    directives: &[D::MandV(E::LocationAreaId), D::MandLv(E::MobileIdentity, "")],
};

/// Mobility management message types
pub static MESSAGES: [MessageDescriptor; 23] = [
    MessageDescriptor::new(0x01, "IMSI Detach Indication", Some(&IMSI_DETACH_INDICATION)),
    MessageDescriptor::new(0x02, "Location Updating Accept", Some(&LOCATION_UPDATING_ACCEPT)),
    MessageDescriptor::new(0x04, "Location Updating Reject", Some(&LOCATION_UPDATING_REJECT)),
    MessageDescriptor::new(0x08, "Location Updating Request", Some(&LOCATION_UPDATING_REQUEST)),
    MessageDescriptor::new(0x11, "Authentication Reject", None),
    MessageDescriptor::new(0x12, "Authentication Request", Some(&AUTHENTICATION_REQUEST)),
    MessageDescriptor::new(0x14, "Authentication Response", Some(&AUTHENTICATION_RESPONSE)),
    MessageDescriptor::new(0x1c, "Authentication Failure", Some(&AUTHENTICATION_FAILURE)),
    MessageDescriptor::new(0x18, "Identity Request", Some(&IDENTITY_REQUEST)),
    MessageDescriptor::new(0x19, "Identity Response", Some(&IDENTITY_RESPONSE)),
    MessageDescriptor::new(0x1a, "TMSI Reallocation Command", Some(&TMSI_REALLOCATION_COMMAND)),
    MessageDescriptor::new(0x1b, "TMSI Reallocation Complete", None),
    MessageDescriptor::new(0x21, "CM Service Accept", None),
    MessageDescriptor::new(0x22, "CM Service Reject", Some(&CM_SERVICE_REJECT)),
    MessageDescriptor::new(0x23, "CM Service Abort", None),
    MessageDescriptor::new(0x24, "CM Service Request", Some(&CM_SERVICE_REQUEST)),
    MessageDescriptor::new(0x25, "CM Service Prompt", Some(&CM_SERVICE_PROMPT)),
    MessageDescriptor::new(0x26, "Reserved: was allocated in earlier phases of the protocol", None),
    MessageDescriptor::new(0x28, "CM Re-establishment Request", Some(&CM_REESTABLISHMENT_REQUEST)),
    MessageDescriptor::new(0x29, "Abort", Some(&ABORT)),
    MessageDescriptor::new(0x30, "MM Null", None),
    MessageDescriptor::new(0x31, "MM Status", Some(&MM_STATUS)),
    MessageDescriptor::new(0x32, "MM Information", Some(&MM_INFORMATION)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::DecodeContext;
    use crate::field::FieldKind;
    use crate::grammar::execute;
    use crate::subdecoder::OpaqueSubDecoder;

    #[test]
    fn test_location_updating_request_body() {
        // CKSN 7 / normal LU, LAI 262-01 LAC 0x0001, CM1, IMSI
        let body = [
            0x70, 0x62, 0xf2, 0x10, 0x00, 0x01, 0x33, 0x08, 0x29, 0x26, 0x01, 0x10, 0x32, 0x54,
            0x76, 0x98,
        ];
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        let used = execute(&mut ctx, &body, 0, body.len(), &LOCATION_UPDATING_REQUEST).unwrap();
        assert_eq!(used, body.len());
        let fields = ctx.fields();
        assert!(fields.iter().all(|f| f.kind != FieldKind::Extraneous));
        let headings: Vec<&str> = fields
            .iter()
            .filter(|f| f.kind == FieldKind::Element)
            .map(|f| f.label.as_str())
            .collect();
        assert_eq!(headings.len(), 5);
        assert!(headings[0].starts_with("Ciphering Key Sequence Number"));
        assert!(headings[1].starts_with("Location Updating Type"));
        assert!(headings[4].starts_with("Mobile Identity"));
    }

    #[test]
    fn test_cm_service_prompt_is_downlink() {
        assert_eq!(CM_SERVICE_PROMPT.direction, Direction::Downlink);
        assert_eq!(CM_SERVICE_REQUEST.direction, Direction::Uplink);
    }
}
