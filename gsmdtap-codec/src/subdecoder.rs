//! Hand-off point for embedded protocols
//!
//! Several DTAP elements carry payloads defined elsewhere: SS components in
//! the Facility IE, RP-PDUs in CP-User-Data, Q.931 low/high layer
//! compatibility, and whole RR/GMM/SM frames that share the DTAP header.
//! The decoder passes those ranges to a [`SubDecoder`] chosen by the host.

use std::fmt;

use crate::field::{FieldKind, FieldList, FieldValue};

/// Protocols the decoder can hand a byte range to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbeddedProtocol {
    /// Undissected data (frames too short to be DTAP)
    Data,
    /// Radio Resource management (PD 6)
    RadioResource,
    /// GPRS mobility management (PD 8)
    GprsMobility,
    /// GPRS session management (PD 10)
    SessionManagement,
    /// Supplementary service component (TCAP-style, from the Facility IE)
    SsComponent,
    /// Short message relay protocol (RP-PDU from CP-User-Data)
    RelayProtocol,
    /// Q.931 bearer capability coding used by Low Layer Compatibility
    Q931LowLayerCompatibility,
    /// Q.931 High Layer Compatibility
    Q931HighLayerCompatibility,
}

impl EmbeddedProtocol {
    /// Display name of the protocol.
    pub fn name(self) -> &'static str {
        match self {
            EmbeddedProtocol::Data => "Data",
            EmbeddedProtocol::RadioResource => "GSM A-I/F RR",
            EmbeddedProtocol::GprsMobility => "GSM A-I/F GPRS Mobility Management",
            EmbeddedProtocol::SessionManagement => "GSM A-I/F GPRS Session Management",
            EmbeddedProtocol::SsComponent => "GSM SS Component",
            EmbeddedProtocol::RelayProtocol => "GSM A-I/F RP",
            EmbeddedProtocol::Q931LowLayerCompatibility => "Q.931 Low Layer Compatibility",
            EmbeddedProtocol::Q931HighLayerCompatibility => "Q.931 High Layer Compatibility",
        }
    }
}

impl fmt::Display for EmbeddedProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoder for payloads embedded in DTAP frames.
///
/// `data` is exactly the embedded range and `offset` its position in the
/// enclosing frame. Fields are appended to `out` at its current depth.
/// Implementations must not panic on malformed input.
pub trait SubDecoder: Send + Sync {
    /// Decodes (or describes) one embedded payload.
    fn decode_embedded(
        &self,
        protocol: EmbeddedProtocol,
        data: &[u8],
        offset: usize,
        out: &mut FieldList,
    );
}

/// Sub-decoder that reports every payload as opaque octets.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpaqueSubDecoder;

impl SubDecoder for OpaqueSubDecoder {
    fn decode_embedded(
        &self,
        protocol: EmbeddedProtocol,
        data: &[u8],
        offset: usize,
        out: &mut FieldList,
    ) {
        out.push_value(
            offset..offset + data.len(),
            format!("{} ({} octets, not dissected)", protocol, data.len()),
            FieldKind::Embedded,
            FieldValue::Bytes(data.to_vec()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_sub_decoder() {
        let mut out = FieldList::new();
        OpaqueSubDecoder.decode_embedded(EmbeddedProtocol::RelayProtocol, &[1, 2, 3], 5, &mut out);
        let field = &out.as_slice()[0];
        assert_eq!(field.range, 5..8);
        assert_eq!(field.kind, FieldKind::Embedded);
        assert_eq!(field.label, "GSM A-I/F RP (3 octets, not dissected)");
        assert_eq!(field.value, Some(FieldValue::Bytes(vec![1, 2, 3])));
    }
}
