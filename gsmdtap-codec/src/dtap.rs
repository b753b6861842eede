//! DTAP frame decoder
//!
//! Entry point of the crate. A [`DtapDecoder`] takes one complete Layer 3
//! frame, reads the header, picks the message table for the protocol
//! discriminator and runs the message grammar over the body.
//!
//! Decoding never fails as a whole: a fault stops the decode and is returned
//! in [`DecodedMessage::fault`] next to every field produced before it.

use std::sync::Arc;

use gsmdtap_common::config::DecoderConfig;
use gsmdtap_common::logging::{format_hex_dump, log_frame};

use crate::association::Association;
use crate::bitfield::bit_label;
use crate::codec::{CodecError, CodecResult};
use crate::context::{DecodeContext, Direction};
use crate::enums::ProtocolDiscriminator;
use crate::field::{Field, FieldKind, FieldValue};
use crate::grammar;
use crate::header::DtapHeader;
use crate::messages;
use crate::octet_view::OctetView;
use crate::subdecoder::{EmbeddedProtocol, OpaqueSubDecoder, SubDecoder};

/// Smallest frame that can carry a DTAP header
pub const MIN_FRAME_LEN: usize = 2;

/// Result of decoding one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    /// Protocol discriminator, once the header was read
    pub discriminator: Option<ProtocolDiscriminator>,
    /// Masked message type, once the header was read
    pub message_type: Option<u8>,
    /// Message name from the family table
    pub name: Option<&'static str>,
    /// One-line summary, e.g. `(DTAP) (MM) Location Updating Request`
    pub summary: String,
    /// Link direction set by the message grammar
    pub direction: Direction,
    /// Decoded fields in frame order
    pub fields: Vec<Field>,
    /// Octets accounted for by the decode
    pub consumed: usize,
    /// Fault that stopped the decode, if any
    pub fault: Option<CodecError>,
}

impl DecodedMessage {
    /// True if the frame decoded without a fault.
    pub fn is_ok(&self) -> bool {
        self.fault.is_none()
    }

    /// Number of octets reported as extraneous data.
    pub fn extraneous_len(&self) -> usize {
        self.fields_of_kind(FieldKind::Extraneous)
            .map(Field::len)
            .sum()
    }

    /// Iterates over the fields of one kind.
    pub fn fields_of_kind(&self, kind: FieldKind) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(move |f| f.kind == kind)
    }

    /// First field whose label starts with `prefix`.
    pub fn find_field(&self, prefix: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.label.starts_with(prefix))
    }
}

/// Frame metadata collected while decoding
#[derive(Default)]
struct FrameInfo {
    discriminator: Option<ProtocolDiscriminator>,
    message_type: Option<u8>,
    name: Option<&'static str>,
    summary: String,
}

/// DTAP decoder.
///
/// Stateless between frames; share one instance across threads with an
/// `Arc` or by reference.
pub struct DtapDecoder {
    config: DecoderConfig,
    sub_decoder: Arc<dyn SubDecoder>,
}

impl Default for DtapDecoder {
    fn default() -> Self {
        Self::new(Arc::new(OpaqueSubDecoder))
    }
}

impl std::fmt::Debug for DtapDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DtapDecoder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DtapDecoder {
    /// Creates a decoder with the default configuration.
    pub fn new(sub_decoder: Arc<dyn SubDecoder>) -> Self {
        Self::with_config(DecoderConfig::default(), sub_decoder)
    }

    /// Creates a decoder with an explicit configuration.
    pub fn with_config(config: DecoderConfig, sub_decoder: Arc<dyn SubDecoder>) -> Self {
        Self {
            config,
            sub_decoder,
        }
    }

    /// Returns the decoder configuration.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes one frame without a call association.
    pub fn decode(&self, frame: &[u8]) -> DecodedMessage {
        let ctx = DecodeContext::new(self.sub_decoder.as_ref())
            .with_embedded_dissection(self.config.dissect_embedded);
        self.run(ctx, frame)
    }

    /// Decodes one frame, reading and recording call parties on
    /// `association`.
    pub fn decode_with_association(
        &self,
        frame: &[u8],
        association: &mut dyn Association,
    ) -> DecodedMessage {
        let ctx = DecodeContext::new(self.sub_decoder.as_ref())
            .with_embedded_dissection(self.config.dissect_embedded)
            .with_association(association);
        self.run(ctx, frame)
    }

    fn run(&self, mut ctx: DecodeContext<'_>, frame: &[u8]) -> DecodedMessage {
        if self.config.hex_dump {
            tracing::trace!("frame:\n{}", format_hex_dump(frame));
        }

        let mut info = FrameInfo::default();
        let result = decode_frame(&mut ctx, frame, &mut info);
        let direction = ctx.direction();

        let fault = match result {
            Ok(_) => None,
            Err(err) => {
                tracing::debug!(error = %err, summary = %info.summary, "decode stopped");
                let at = ctx.fields().iter().map(|f| f.range.end).max().unwrap_or(0);
                ctx.add_kind(at..frame.len().max(at), err.to_string(), FieldKind::Fault);
                Some(err)
            }
        };

        let fields = ctx.into_fields();
        let consumed = if fault.is_none() {
            frame.len()
        } else {
            fields
                .iter()
                .filter(|f| f.kind != FieldKind::Fault)
                .map(|f| f.range.end)
                .max()
                .unwrap_or(0)
        };

        let protocol = info.discriminator.map_or("DTAP", ProtocolDiscriminator::short_name);
        log_frame(protocol, direction, &info.summary, frame);

        DecodedMessage {
            discriminator: info.discriminator,
            message_type: info.message_type,
            name: info.name,
            summary: info.summary,
            direction,
            fields,
            consumed,
            fault,
        }
    }
}

fn decode_frame(
    ctx: &mut DecodeContext<'_>,
    frame: &[u8],
    info: &mut FrameInfo,
) -> CodecResult<usize> {
    if frame.len() < MIN_FRAME_LEN {
        info.summary = EmbeddedProtocol::Data.name().to_owned();
        ctx.embed(EmbeddedProtocol::Data, frame, 0);
        return Ok(frame.len());
    }

    info.summary = String::from("(DTAP)");
    let view = OctetView::new(frame);
    let header = DtapHeader::parse(&view)?;
    let pd = header.pd;
    info.discriminator = Some(pd);
    info.summary = format!("(DTAP) ({})", pd.short_name());

    let sibling = match pd {
        ProtocolDiscriminator::RadioResource => Some(EmbeddedProtocol::RadioResource),
        ProtocolDiscriminator::GprsMobilityManagement => Some(EmbeddedProtocol::GprsMobility),
        ProtocolDiscriminator::GprsSessionManagement => Some(EmbeddedProtocol::SessionManagement),
        _ => None,
    };
    if let Some(protocol) = sibling {
        tracing::debug!(%pd, "handing frame to sibling decoder");
        header.present(ctx);
        let body = frame.get(header.type_offset..).unwrap_or_default();
        ctx.embed(protocol, body, header.type_offset);
        return Ok(frame.len());
    }

    let Some(table) = messages::table(pd) else {
        header.present(ctx);
        return Err(CodecError::UnsupportedProtocolDiscriminator(pd.into()));
    };

    let message_type = header.message_type();
    info.message_type = Some(message_type);
    let type_range = header.type_offset..header.type_offset + 1;

    let Some(descriptor) = messages::find(table, message_type) else {
        let label = format!("Unknown DTAP Message Type (0x{:02x})", header.type_octet);
        info.summary = format!("(DTAP) ({}) {label}", pd.short_name());
        header.present(ctx);
        ctx.add_kind(type_range, label, FieldKind::Header);
        return Err(CodecError::UnknownMessageType {
            discriminator: pd.short_name(),
            message_type,
        });
    };

    info.name = Some(descriptor.name);
    info.summary = format!("(DTAP) ({}) {}", pd.short_name(), descriptor.name);
    tracing::debug!(%pd, message = descriptor.name, len = frame.len(), "decoding DTAP message");

    header.present(ctx);
    ctx.add_value(
        type_range,
        bit_label(
            header.type_octet,
            pd.message_type_mask(),
            &format!("DTAP {} Message Type: {}", pd.short_name(), descriptor.name),
        ),
        FieldValue::Enum {
            value: message_type.into(),
            name: descriptor.name,
        },
    );

    let body_offset = header.len();
    let body_len = frame.len() - body_offset;
    match descriptor.grammar {
        Some(grammar) => {
            grammar::execute(ctx, frame, body_offset, body_len, grammar)?;
        }
        None if body_len > 0 => {
            ctx.add_value(
                body_offset..frame.len(),
                "Message Elements",
                FieldValue::Bytes(view.read_up_to(body_len).to_vec()),
            );
        }
        None => {}
    }

    Ok(frame.len())
}
