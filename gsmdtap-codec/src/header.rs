//! DTAP header (3GPP TS 24.007 clause 11.2.3)
//!
//! ```text
//!   8   7   6   5   4   3   2   1
//! +---+-----------+---------------+
//! |TI flag| TIO   |      PD       |  octet 1 (skip indicator for MM)
//! +---+-----------+---------------+
//! | 1 |          TIE              |  octet 2, only when TIO == 7
//! +---+---+-----------------------+
//! | N(SD) |    message type       |  N(SD) for MM and CC only
//! +-------+-----------------------+
//! ```

use crate::bitfield::bit_label;
use crate::codec::CodecResult;
use crate::context::DecodeContext;
use crate::enums::ProtocolDiscriminator;
use crate::field::{FieldKind, FieldValue};
use crate::octet_view::OctetView;

/// TIO value announcing an extended transaction identifier
const TIO_EXTENDED: u8 = 0x07;

/// Parsed DTAP header octets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DtapHeader {
    /// Protocol discriminator from octet 1
    pub pd: ProtocolDiscriminator,
    /// Octet 1 as received
    pub octet1: u8,
    /// Extended TI octet, when present
    pub extended_ti: Option<u8>,
    /// Frame offset of the message type octet
    pub type_offset: usize,
    /// Message type octet as received, N(SD) bits included
    pub type_octet: u8,
}

impl DtapHeader {
    /// Reads the header from the start of the view.
    ///
    /// The extended TI octet is taken whenever TIO is 7, even for families
    /// that carry a skip indicator; a skip indicator of 0 never triggers it.
    pub fn parse(view: &OctetView<'_>) -> CodecResult<Self> {
        let octet1 = view.read()?;
        let extended_ti = if (octet1 >> 4) & TIO_EXTENDED == TIO_EXTENDED {
            Some(view.read()?)
        } else {
            None
        };
        let type_offset = view.current_index();
        let type_octet = view.read()?;

        Ok(Self {
            pd: ProtocolDiscriminator::from_octet(octet1),
            octet1,
            extended_ti,
            type_offset,
            type_octet,
        })
    }

    /// Message type with the family's mask applied.
    pub fn message_type(&self) -> u8 {
        self.type_octet & self.pd.message_type_mask()
    }

    /// Send sequence number, for families that carry one.
    pub fn send_sequence_number(&self) -> Option<u8> {
        self.pd
            .has_send_sequence_number()
            .then_some(self.type_octet >> 6)
    }

    /// True if the TI was allocated by the receiver of this message.
    pub fn ti_allocated_by_receiver(&self) -> bool {
        self.octet1 & 0x80 != 0
    }

    /// Transaction identifier value, for families that carry one.
    pub fn transaction_id(&self) -> Option<u8> {
        if !self.pd.has_transaction_id() {
            return None;
        }
        match self.extended_ti {
            Some(tie) => Some(tie & 0x7f),
            None => Some((self.octet1 >> 4) & TIO_EXTENDED),
        }
    }

    /// Octets occupied by the header.
    pub fn len(&self) -> usize {
        self.type_offset + 1
    }

    /// Always false; a header has at least two octets.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Emits the header fields: octet 1 with its subfields, the extended TI
    /// and N(SD) when present. The message type itself is left to the caller.
    pub fn present(&self, ctx: &mut DecodeContext<'_>) {
        let oct = self.octet1;
        let pd_value = u8::from(self.pd);
        ctx.add_kind(
            0..1,
            format!("Protocol Discriminator: {}", self.pd.name()),
            FieldKind::Header,
        );
        ctx.enter();

        if self.pd.has_transaction_id() {
            let flag = if self.ti_allocated_by_receiver() {
                "allocated by receiver"
            } else {
                "allocated by sender"
            };
            header_bits(ctx, 0, oct, 0x80, &format!("TI flag: {flag}"));
            let tio = (oct >> 4) & TIO_EXTENDED;
            if tio == TIO_EXTENDED {
                header_bits(ctx, 0, oct, 0x70, "TIO: The TI value is given by the TIE in octet 2");
            } else {
                header_bits(ctx, 0, oct, 0x70, &format!("TIO: {tio}"));
            }
        } else {
            header_bits(ctx, 0, oct, 0xf0, &format!("Skip Indicator: {}", oct >> 4));
        }
        ctx.add_value(
            0..1,
            bit_label(oct, 0x0f, &format!("Protocol Discriminator: {}", self.pd.name())),
            FieldValue::Enum {
                value: pd_value.into(),
                name: self.pd.name(),
            },
        );

        if let (Some(tie), true) = (self.extended_ti, self.pd.has_transaction_id()) {
            let ext = if tie & 0x80 != 0 { "Extended" } else { "No Extension" };
            header_bits(ctx, 1, tie, 0x80, &format!("Extension: {ext}"));
            header_bits(ctx, 1, tie, 0x7f, &format!("TIE: {}", tie & 0x7f));
        }
        ctx.leave();

        if let Some(nsd) = self.send_sequence_number() {
            ctx.add_value(
                self.type_offset..self.type_offset + 1,
                bit_label(self.type_octet, 0xc0, &format!("Sequence Number: {nsd}")),
                FieldValue::Uint(nsd.into()),
            );
        }
    }
}

fn header_bits(ctx: &mut DecodeContext<'_>, offset: usize, octet: u8, mask: u8, text: &str) {
    ctx.add_kind(offset..offset + 1, bit_label(octet, mask, text), FieldKind::Header);
}
