//! Information element decoders
//!
//! Every element the DTAP message grammars reference has one record in
//! [`ELEMENTS`], indexed by its dense [`ElementId`]:
//!
//! ```text
//! ElementId ──► ElementDescriptor { id, name, codec }
//!                                          │
//!                    ┌─────────────────────┼───────────────────┐
//!                    ▼                     ▼                   ▼
//!           Octets { decode,        HalfOctet(decode)        Absent
//!                    fixed_len }    (type 1, 4 bits)     (type 2, T only)
//! ```
//!
//! Octet decoders receive a view positioned at the first value octet and
//! the declared value length. For LV/TLV elements the view ends at the IE
//! boundary, so a decoder can never read into the next element.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::codec::CodecResult;
use crate::context::DecodeContext;
use crate::field::{FieldKind, FieldValue};
use crate::octet_view::OctetView;

pub mod bearer_cap;
pub mod cc;
pub mod common;
pub mod facility;
pub mod mm;
pub mod sms;
pub mod tp;

/// Decoder for an element whose value occupies whole octets.
///
/// Returns the number of octets consumed from the view's starting position.
pub type ElementDecoder =
    fn(&mut DecodeContext<'_>, &OctetView<'_>, usize) -> CodecResult<usize>;

/// Decoder for a type 1 element packed into one half of an octet.
pub type HalfOctetDecoder = fn(&mut DecodeContext<'_>, usize, u8, Half);

/// Which half of an octet a type 1 element occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    /// Bits 8-5
    High,
    /// Bits 4-1
    Low,
}

impl Half {
    /// Extracts this half of `octet` as a 4-bit value.
    #[inline]
    pub fn value(self, octet: u8) -> u8 {
        match self {
            Half::High => octet >> 4,
            Half::Low => octet & 0x0f,
        }
    }

    /// Moves a 4-bit mask into this half of the octet.
    #[inline]
    pub fn mask(self, nibble_mask: u8) -> u8 {
        match self {
            Half::High => (nibble_mask & 0x0f) << 4,
            Half::Low => nibble_mask & 0x0f,
        }
    }
}

/// How an element's value is decoded
#[derive(Clone, Copy)]
pub enum ElementCodec {
    /// Whole-octet value. `fixed_len` is set for elements whose value length
    /// is implied by the protocol (type 3 / V).
    Octets {
        /// Decoder function
        decode: ElementDecoder,
        /// Implied value length for V and TV forms
        fixed_len: Option<usize>,
    },
    /// Type 1 half-octet value
    HalfOctet(HalfOctetDecoder),
    /// No value: presence is the information (type 2)
    Absent,
}

/// One element table record
#[derive(Clone, Copy)]
pub struct ElementDescriptor {
    /// Element id
    pub id: ElementId,
    /// Display name
    pub name: &'static str,
    /// Value codec
    pub codec: ElementCodec,
}

impl ElementDescriptor {
    /// Value length implied by the protocol, if any.
    pub fn fixed_len(&self) -> Option<usize> {
        match self.codec {
            ElementCodec::Octets { fixed_len, .. } => fixed_len,
            _ => None,
        }
    }
}

impl std::fmt::Debug for ElementDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

/// Dense element enumeration (3GPP TS 24.008 clause 10.5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ElementId {
    // Mobility management, 10.5.3
    AuthParamRand = 0,
    AuthParamAutn,
    AuthRespParam,
    AuthRespParamExt,
    AuthFailParam,
    CmServiceType,
    IdentityType,
    LocationUpdatingType,
    NetworkName,
    RejectCause,
    FollowOnProceed,
    TimeZone,
    TimeZoneAndTime,
    CtsPermission,
    LsaIdentifier,
    DaylightSavingTime,
    EmergencyNumberList,
    // Call control, 10.5.4
    AuxiliaryStates,
    BearerCapability,
    CallControlCapabilities,
    CallState,
    CalledPartyBcdNumber,
    CalledPartySubaddress,
    CallingPartyBcdNumber,
    CallingPartySubaddress,
    Cause,
    ClirSuppression,
    ClirInvocation,
    CongestionLevel,
    ConnectedNumber,
    ConnectedSubaddress,
    Facility,
    HighLayerCompatibility,
    KeypadFacility,
    LowLayerCompatibility,
    MoreData,
    NotificationIndicator,
    ProgressIndicator,
    RecallType,
    RedirectingPartyBcdNumber,
    RedirectingPartySubaddress,
    RepeatIndicator,
    ReverseCallSetupDirection,
    SetupContainer,
    Signal,
    SsVersionIndicator,
    UserUser,
    AlertingPattern,
    AllowedActions,
    StreamIdentifier,
    NetworkCcCapabilities,
    CauseOfNoCli,
    ImmediateModificationIndicator,
    SupportedCodecList,
    ServiceCategory,
    // Short message control protocol, 24.011 clause 8.1.4
    CpUserData,
    CpCause,
    // Test procedures, 44.014 / 34.109
    TpSubChannel,
    TpAck,
    TpLoopType,
    TpLoopAck,
    TpTestedDevice,
    TpPduDescription,
    TpModeFlag,
    TpEgprsModeFlag,
    TpUeTestLoopMode,
    TpUePositioningTechnology,
    TpRlcSduCounterValue,
    // Common elements, 10.5.1
    CipheringKeySequenceNumber,
    LocationAreaId,
    MobileIdentity,
    MsClassmark1,
    MsClassmark2,
    PdAndSapi,
    PriorityLevel,
    PlmnList,
    SpareHalfOctet,
}

/// Number of element ids.
pub const ELEMENT_COUNT: usize = ElementId::SpareHalfOctet as usize + 1;

const fn var(decode: ElementDecoder) -> ElementCodec {
    ElementCodec::Octets {
        decode,
        fixed_len: None,
    }
}

const fn fixed(decode: ElementDecoder, len: usize) -> ElementCodec {
    ElementCodec::Octets {
        decode,
        fixed_len: Some(len),
    }
}

const fn half(decode: HalfOctetDecoder) -> ElementCodec {
    ElementCodec::HalfOctet(decode)
}

const fn entry(id: ElementId, name: &'static str, codec: ElementCodec) -> ElementDescriptor {
    ElementDescriptor { id, name, codec }
}

use ElementCodec::Absent;
use ElementId as E;

/// The element table, one record per [`ElementId`] in id order.
pub static ELEMENTS: [ElementDescriptor; ELEMENT_COUNT] = [
    entry(E::AuthParamRand, "Authentication Parameter RAND", fixed(mm::auth_param_rand, 16)),
    entry(
        E::AuthParamAutn,
        "Authentication Parameter AUTN (UMTS authentication challenge only)",
        var(mm::auth_param_autn),
    ),
    entry(E::AuthRespParam, "Authentication Response Parameter", fixed(mm::auth_resp_param, 4)),
    entry(
        E::AuthRespParamExt,
        "Authentication Response Parameter (extension) (UMTS authentication challenge only)",
        var(mm::auth_resp_param_ext),
    ),
    entry(
        E::AuthFailParam,
        "Authentication Failure Parameter (UMTS authentication challenge only)",
        var(mm::auth_fail_param),
    ),
    entry(E::CmServiceType, "CM Service Type", half(mm::cm_service_type)),
    entry(E::IdentityType, "Identity Type", half(mm::identity_type)),
    entry(E::LocationUpdatingType, "Location Updating Type", half(mm::location_updating_type)),
    entry(E::NetworkName, "Network Name", var(mm::network_name)),
    entry(E::RejectCause, "Reject Cause", fixed(mm::reject_cause, 1)),
    entry(E::FollowOnProceed, "Follow-on Proceed", Absent),
    entry(E::TimeZone, "Time Zone", fixed(mm::time_zone, 1)),
    entry(E::TimeZoneAndTime, "Time Zone and Time", fixed(mm::time_zone_and_time, 7)),
    entry(E::CtsPermission, "CTS Permission", Absent),
    entry(E::LsaIdentifier, "LSA Identifier", var(mm::lsa_identifier)),
    entry(E::DaylightSavingTime, "Daylight Saving Time", var(mm::daylight_saving_time)),
    entry(E::EmergencyNumberList, "Emergency Number List", var(mm::emergency_number_list)),
    entry(E::AuxiliaryStates, "Auxiliary States", var(cc::auxiliary_states)),
    entry(E::BearerCapability, "Bearer Capability", var(bearer_cap::bearer_capability)),
    entry(E::CallControlCapabilities, "Call Control Capabilities", var(cc::call_control_capabilities)),
    entry(E::CallState, "Call State", fixed(cc::call_state, 1)),
    entry(E::CalledPartyBcdNumber, "Called Party BCD Number", var(cc::called_party_bcd_number)),
    entry(E::CalledPartySubaddress, "Called Party Subaddress", var(cc::subaddress)),
    entry(E::CallingPartyBcdNumber, "Calling Party BCD Number", var(cc::calling_party_bcd_number)),
    entry(E::CallingPartySubaddress, "Calling Party Subaddress", var(cc::subaddress)),
    entry(E::Cause, "Cause", var(cc::cause)),
    entry(E::ClirSuppression, "CLIR Suppression", Absent),
    entry(E::ClirInvocation, "CLIR Invocation", Absent),
    entry(E::CongestionLevel, "Congestion Level", half(cc::congestion_level)),
    entry(E::ConnectedNumber, "Connected Number", var(cc::connected_number)),
    entry(E::ConnectedSubaddress, "Connected Subaddress", var(cc::subaddress)),
    entry(E::Facility, "Facility", var(facility::facility)),
    entry(E::HighLayerCompatibility, "High Layer Compatibility", var(cc::high_layer_compatibility)),
    entry(E::KeypadFacility, "Keypad Facility", fixed(cc::keypad_facility, 1)),
    entry(E::LowLayerCompatibility, "Low Layer Compatibility", var(cc::low_layer_compatibility)),
    entry(E::MoreData, "More Data", Absent),
    entry(E::NotificationIndicator, "Notification Indicator", fixed(cc::notification_indicator, 1)),
    entry(E::ProgressIndicator, "Progress Indicator", var(cc::progress_indicator)),
    entry(E::RecallType, "Recall type $(CCBS)$", fixed(cc::recall_type, 1)),
    entry(
        E::RedirectingPartyBcdNumber,
        "Redirecting Party BCD Number",
        var(cc::redirecting_party_bcd_number),
    ),
    entry(E::RedirectingPartySubaddress, "Redirecting Party Subaddress", var(cc::subaddress)),
    entry(E::RepeatIndicator, "Repeat Indicator", half(cc::repeat_indicator)),
    entry(E::ReverseCallSetupDirection, "Reverse Call Setup Direction", Absent),
    entry(E::SetupContainer, "SETUP Container $(CCBS)$", var(cc::setup_container)),
    entry(E::Signal, "Signal", fixed(cc::signal, 1)),
    entry(E::SsVersionIndicator, "SS Version Indicator", var(cc::ss_version_indicator)),
    entry(E::UserUser, "User-user", var(cc::user_user)),
    entry(E::AlertingPattern, "Alerting Pattern $(NIA)$", var(cc::alerting_pattern)),
    entry(E::AllowedActions, "Allowed Actions $(CCBS)$", var(cc::allowed_actions)),
    entry(E::StreamIdentifier, "Stream Identifier", var(cc::stream_identifier)),
    entry(
        E::NetworkCcCapabilities,
        "Network Call Control Capabilities",
        var(cc::network_cc_capabilities),
    ),
    entry(E::CauseOfNoCli, "Cause of No CLI", var(cc::cause_of_no_cli)),
    entry(E::ImmediateModificationIndicator, "Immediate Modification Indicator", Absent),
    entry(E::SupportedCodecList, "Supported Codec List", var(cc::supported_codec_list)),
    entry(E::ServiceCategory, "Service Category", var(cc::service_category)),
    entry(E::CpUserData, "CP-User Data", var(sms::cp_user_data)),
    entry(E::CpCause, "CP-Cause", fixed(sms::cp_cause, 1)),
    entry(E::TpSubChannel, "Close TCH Loop Cmd Sub-channel", fixed(tp::sub_channel, 1)),
    entry(E::TpAck, "Open Loop Cmd Ack", fixed(tp::ack, 1)),
    entry(E::TpLoopType, "Close Multi-slot Loop Cmd Loop type", fixed(tp::loop_type, 1)),
    entry(E::TpLoopAck, "Close Multi-slot Loop Ack Result", fixed(tp::loop_ack, 1)),
    entry(E::TpTestedDevice, "Test Interface Tested device", fixed(tp::tested_device, 1)),
    entry(E::TpPduDescription, "GPRS Test Mode Cmd PDU description", fixed(tp::pdu_description, 2)),
    entry(E::TpModeFlag, "GPRS Test Mode Cmd Mode flag", fixed(tp::mode_flag, 1)),
    entry(
        E::TpEgprsModeFlag,
        "EGPRS Start Radio Block Loopback Cmd Mode flag",
        fixed(tp::egprs_mode_flag, 1),
    ),
    entry(E::TpUeTestLoopMode, "Close UE Test Loop Mode", var(tp::ue_test_loop_mode)),
    entry(
        E::TpUePositioningTechnology,
        "UE Positioning Technology",
        fixed(tp::ue_positioning_technology, 1),
    ),
    entry(E::TpRlcSduCounterValue, "RLC SDU Counter Value", fixed(tp::rlc_sdu_counter_value, 4)),
    entry(
        E::CipheringKeySequenceNumber,
        "Ciphering Key Sequence Number",
        half(common::ciphering_key_sequence_number),
    ),
    entry(E::LocationAreaId, "Location Area Identification", fixed(common::location_area_id, 5)),
    entry(E::MobileIdentity, "Mobile Identity", var(common::mobile_identity)),
    entry(E::MsClassmark1, "Mobile Station Classmark 1", fixed(common::ms_classmark1, 1)),
    entry(E::MsClassmark2, "Mobile Station Classmark 2", var(common::ms_classmark2)),
    entry(E::PdAndSapi, "PD and SAPI $(CCBS)$", fixed(common::pd_and_sapi, 1)),
    entry(E::PriorityLevel, "Priority Level", half(common::priority_level)),
    entry(E::PlmnList, "PLMN List", var(common::plmn_list)),
    entry(E::SpareHalfOctet, "Spare Half Octet", half(common::spare_half_octet)),
];

/// Looks up the table record for `id`.
#[inline]
pub fn lookup(id: ElementId) -> &'static ElementDescriptor {
    &ELEMENTS[id as usize]
}

// ============================================================================
// Shared helpers for element decoders
// ============================================================================

/// Octets consumed since `start`.
#[inline]
pub(crate) fn consumed(view: &OctetView<'_>, start: usize) -> usize {
    view.current_index() - start
}

/// True once `len` octets from `start` have been consumed. Decoders check
/// this before every optional trailing octet.
#[inline]
pub(crate) fn no_more_data(view: &OctetView<'_>, start: usize, len: usize) -> bool {
    consumed(view, start) >= len
}

/// Reports any declared-but-unparsed octets as extraneous data and steps
/// over them. Returns the total consumed length.
pub(crate) fn extraneous_data_check(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    start: usize,
    len: usize,
) -> usize {
    let used = consumed(view, start);
    if used < len {
        let at = view.current_index();
        let rest = view.read_up_to(len - used);
        if !rest.is_empty() {
            ctx.add_kind(at..at + rest.len(), "Extraneous Data", FieldKind::Extraneous);
        }
    }
    consumed(view, start)
}

/// Emits `len` raw octets as one hex-valued field.
pub(crate) fn raw_value(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
    title: &str,
) -> CodecResult<()> {
    let at = view.current_index();
    let bytes = view.read_slice(len)?;
    ctx.add_value(
        at..at + len,
        format!("{title}: {}", hex::encode(bytes)),
        FieldValue::Bytes(bytes.to_vec()),
    );
    Ok(())
}

/// One-bit detail with a text per bit state.
pub(crate) fn flag(ctx: &mut DecodeContext<'_>, offset: usize, oct: u8, mask: u8, on: &str, off: &str) {
    ctx.add_bits(offset, oct, mask, if oct & mask != 0 { on } else { off });
}

/// Extension bit (bit 8) of an octet.
pub(crate) fn add_extension(ctx: &mut DecodeContext<'_>, offset: usize, octet: u8) {
    let text = if octet & 0x80 != 0 {
        "Extension: No Extension"
    } else {
        "Extension: Extended"
    };
    ctx.add_bits(offset, octet, 0x80, text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_id() {
        for (index, descriptor) in ELEMENTS.iter().enumerate() {
            assert_eq!(descriptor.id as usize, index, "{} is out of place", descriptor.name);
        }
    }

    #[test]
    fn test_every_id_has_a_record() {
        for raw in 0..=u8::MAX {
            match ElementId::try_from(raw) {
                Ok(id) => assert_eq!(lookup(id).id, id),
                Err(_) => assert!(raw as usize >= ELEMENT_COUNT),
            }
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = ELEMENTS.iter().map(|d| d.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ELEMENT_COUNT);
    }

    #[test]
    fn test_half_helpers() {
        assert_eq!(Half::High.value(0x7a), 0x7);
        assert_eq!(Half::Low.value(0x7a), 0xa);
        assert_eq!(Half::High.mask(0x07), 0x70);
        assert_eq!(Half::Low.mask(0x07), 0x07);
    }

    #[test]
    fn test_fixed_lengths() {
        let fixed_len = |id| lookup(id).fixed_len();
        assert_eq!(fixed_len(ElementId::AuthParamRand), Some(16));
        assert_eq!(fixed_len(ElementId::LocationAreaId), Some(5));
        assert_eq!(fixed_len(ElementId::TimeZoneAndTime), Some(7));
        assert_eq!(fixed_len(ElementId::Cause), None);
    }

    #[test]
    fn test_extraneous_data_check() {
        use crate::subdecoder::OpaqueSubDecoder;

        let data = [0x01, 0x02, 0x03, 0x04];
        let view = OctetView::at(&data, 1);
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        view.read().unwrap();
        assert_eq!(extraneous_data_check(&mut ctx, &view, 1, 3), 3);
        let fields = ctx.into_fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].kind, FieldKind::Extraneous);
        assert_eq!(fields[0].range, 2..4);
    }
}
