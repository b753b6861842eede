//! Protocol discriminator values (3GPP TS 24.007 clause 11.2.3.1.1)

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Layer 3 protocol discriminator, the low nibble of octet 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ProtocolDiscriminator {
    /// Group call control
    GroupCallControl = 0x0,
    /// Broadcast call control
    BroadcastCallControl = 0x1,
    /// Reserved, allocated in earlier phases
    ReservedEarlier = 0x2,
    /// Call control and call related SS
    CallControl = 0x3,
    /// GPRS Transparent Transport Protocol
    Gttp = 0x4,
    /// Mobility management
    MobilityManagement = 0x5,
    /// Radio resources management
    RadioResource = 0x6,
    /// Unassigned
    Unknown7 = 0x7,
    /// GPRS mobility management
    GprsMobilityManagement = 0x8,
    /// Short message service control protocol
    Sms = 0x9,
    /// GPRS session management
    GprsSessionManagement = 0xa,
    /// Non call related supplementary services
    NonCallSs = 0xb,
    /// Location services
    LocationServices = 0xc,
    /// Unassigned
    Unknown13 = 0xd,
    /// Reserved for extension of the PD to one octet
    ReservedExtension = 0xe,
    /// Special conformance testing functions
    TestProcedures = 0xf,
}

impl ProtocolDiscriminator {
    /// Extracts the discriminator from octet 1.
    pub fn from_octet(octet: u8) -> Self {
        match Self::try_from(octet & 0x0f) {
            Ok(pd) => pd,
            // All sixteen nibble values are variants.
            Err(_) => ProtocolDiscriminator::Unknown7,
        }
    }

    /// Long display name.
    pub fn name(self) -> &'static str {
        use ProtocolDiscriminator::*;
        match self {
            GroupCallControl => "Group call control",
            BroadcastCallControl => "Broadcast call control",
            ReservedEarlier => "Reserved: was allocated in earlier phases of the protocol",
            CallControl => "Call Control; call related SS messages",
            Gttp => "GPRS Transparent Transport Protocol (GTTP)",
            MobilityManagement => "Mobility Management messages",
            RadioResource => "Radio Resources Management messages",
            Unknown7 | Unknown13 => "Unknown",
            GprsMobilityManagement => "GPRS mobility management messages",
            Sms => "SMS messages",
            GprsSessionManagement => "GPRS session management messages",
            NonCallSs => "Non call related SS messages",
            LocationServices => "Location services specified in 3GPP TS 44.071",
            ReservedExtension => "Reserved for extension of the PD to one octet length",
            TestProcedures => "Special conformance testing functions",
        }
    }

    /// Abbreviation used in summaries, e.g. "MM".
    pub fn short_name(self) -> &'static str {
        use ProtocolDiscriminator::*;
        match self {
            GroupCallControl => "GCC",
            BroadcastCallControl => "BCC",
            ReservedEarlier | ReservedExtension => "Reserved",
            CallControl => "CC",
            Gttp => "GTTP",
            MobilityManagement => "MM",
            RadioResource => "RR",
            Unknown7 | Unknown13 => "Unknown",
            GprsMobilityManagement => "GMM",
            Sms => "SMS",
            GprsSessionManagement => "SM",
            NonCallSs => "SS",
            LocationServices => "LS",
            TestProcedures => "TP",
        }
    }

    /// True if bits 8-5 of octet 1 carry a transaction identifier rather
    /// than a skip indicator.
    pub fn has_transaction_id(self) -> bool {
        matches!(
            self,
            ProtocolDiscriminator::CallControl
                | ProtocolDiscriminator::Sms
                | ProtocolDiscriminator::GprsSessionManagement
                | ProtocolDiscriminator::NonCallSs
                | ProtocolDiscriminator::TestProcedures
        )
    }

    /// True if bits 8-7 of the message type octet carry N(SD).
    pub fn has_send_sequence_number(self) -> bool {
        matches!(
            self,
            ProtocolDiscriminator::MobilityManagement | ProtocolDiscriminator::CallControl
        )
    }

    /// Mask applied to the message type octet before table lookup.
    pub fn message_type_mask(self) -> u8 {
        if self.has_send_sequence_number() {
            0x3f
        } else {
            0xff
        }
    }
}

impl std::fmt::Display for ProtocolDiscriminator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}
