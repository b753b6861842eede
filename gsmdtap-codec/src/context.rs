//! Per-decode context
//!
//! Everything a decode call mutates lives here: the link direction chosen by
//! the message grammar, the output field list, the pending element summary,
//! and the host hooks. A context is created per frame and dropped when the
//! frame is done, so independent frames can be decoded on different threads.

use std::fmt;
use std::ops::Range;

use crate::association::{Association, PartyRole};
use crate::bitfield::bit_label;
use crate::field::{Field, FieldKind, FieldList, FieldValue};
use crate::subdecoder::{EmbeddedProtocol, OpaqueSubDecoder, SubDecoder};

/// Link direction of the message being decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Not set by the grammar (test procedures, header-only frames)
    #[default]
    Unknown,
    /// Mobile station to network
    Uplink,
    /// Network to mobile station
    Downlink,
}

impl Direction {
    /// True for [`Direction::Downlink`] only; unknown counts as uplink for
    /// text selection, matching how the network side reads its own traces.
    pub fn is_downlink(self) -> bool {
        self == Direction::Downlink
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Unknown => "unknown",
            Direction::Uplink => "uplink",
            Direction::Downlink => "downlink",
        })
    }
}

/// Mutable state threaded through one frame decode.
pub struct DecodeContext<'a> {
    direction: Direction,
    fields: FieldList,
    summary: Option<String>,
    sub_decoder: &'a dyn SubDecoder,
    dissect_embedded: bool,
    association: Option<&'a mut dyn Association>,
}

impl<'a> DecodeContext<'a> {
    /// Creates a context that hands embedded payloads to `sub_decoder`.
    pub fn new(sub_decoder: &'a dyn SubDecoder) -> Self {
        Self {
            direction: Direction::Unknown,
            fields: FieldList::new(),
            summary: None,
            sub_decoder,
            dissect_embedded: true,
            association: None,
        }
    }

    /// Attaches the host's call association.
    pub fn with_association(mut self, association: &'a mut dyn Association) -> Self {
        self.association = Some(association);
        self
    }

    /// Reports embedded payloads as opaque octets instead of calling the
    /// sub-decoder.
    pub fn with_embedded_dissection(mut self, enabled: bool) -> Self {
        self.dissect_embedded = enabled;
        self
    }

    /// Current link direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Set by each message grammar before its first element.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    // ========================================================================
    // Field output
    // ========================================================================

    /// Appends a detail field.
    pub fn add(&mut self, range: Range<usize>, label: impl Into<String>) -> usize {
        self.fields.push(range, label, FieldKind::Detail)
    }

    /// Appends a detail field carrying a typed value.
    pub fn add_value(
        &mut self,
        range: Range<usize>,
        label: impl Into<String>,
        value: FieldValue,
    ) -> usize {
        self.fields.push_value(range, label, FieldKind::Detail, value)
    }

    /// Appends a field of an explicit kind.
    pub fn add_kind(
        &mut self,
        range: Range<usize>,
        label: impl Into<String>,
        kind: FieldKind,
    ) -> usize {
        self.fields.push(range, label, kind)
    }

    /// Appends a one-octet bitfield detail: `"..10 .... = text"`.
    pub fn add_bits(&mut self, offset: usize, octet: u8, mask: u8, text: &str) -> usize {
        self.fields
            .push(offset..offset + 1, bit_label(octet, mask, text), FieldKind::Detail)
    }

    /// Bitfield detail resolved through a value table.
    pub fn add_bits_enum(
        &mut self,
        offset: usize,
        octet: u8,
        mask: u8,
        title: &str,
        value: u32,
        name: &'static str,
    ) -> usize {
        self.fields.push_value(
            offset..offset + 1,
            bit_label(octet, mask, &format!("{title}: {name}")),
            FieldKind::Detail,
            FieldValue::Enum { value, name },
        )
    }

    /// Reports the spare bits of an octet.
    pub fn add_spare(&mut self, offset: usize, octet: u8, mask: u8) -> usize {
        self.add_bits(offset, octet, mask, "Spare")
    }

    /// Opens a subtree.
    pub fn enter(&mut self) {
        self.fields.enter();
    }

    /// Closes a subtree.
    pub fn leave(&mut self) {
        self.fields.leave();
    }

    /// Current tree depth.
    pub fn depth(&self) -> u8 {
        self.fields.depth()
    }

    pub(crate) fn field_mut(&mut self, index: usize) -> Option<&mut Field> {
        self.fields.get_mut(index)
    }

    /// Fields produced so far.
    pub fn fields(&self) -> &[Field] {
        self.fields.as_slice()
    }

    /// Consumes the context, returning the produced fields.
    pub fn into_fields(self) -> Vec<Field> {
        self.fields.into_vec()
    }

    // ========================================================================
    // Element summary
    // ========================================================================

    /// Sets the text appended to the enclosing element's label once its
    /// decoder returns, e.g. `" - (Normal call clearing)"`.
    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = Some(summary.into());
    }

    pub(crate) fn take_summary(&mut self) -> Option<String> {
        self.summary.take()
    }

    // ========================================================================
    // Host hooks
    // ========================================================================

    /// Hands `data`, located at frame `offset`, to the sub-decoder.
    pub fn embed(&mut self, protocol: EmbeddedProtocol, data: &[u8], offset: usize) {
        tracing::trace!(%protocol, offset, len = data.len(), "embedded payload");
        if self.dissect_embedded {
            self.sub_decoder
                .decode_embedded(protocol, data, offset, &mut self.fields);
        } else {
            OpaqueSubDecoder.decode_embedded(protocol, data, offset, &mut self.fields);
        }
    }

    /// Number recorded on the association for `role`.
    pub fn party(&self, role: PartyRole) -> Option<String> {
        self.association
            .as_deref()
            .and_then(|assoc| assoc.party(role))
            .map(str::to_owned)
    }

    /// Records `digits` for `role` unless a number is already known.
    pub fn record_party_if_absent(&mut self, role: PartyRole, digits: &str) {
        if let Some(assoc) = self.association.as_deref_mut() {
            if assoc.party(role).is_none() {
                assoc.record_party(role, digits);
            }
        }
    }
}
