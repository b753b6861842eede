//! Message grammars and their executor
//!
//! A grammar is an ordered list of [`Directive`]s. The executor walks the
//! list once, trying each directive against the next unconsumed octet:
//!
//! - a mandatory directive that cannot be satisfied stops the message with a
//!   grammar or bounds fault;
//! - an optional directive whose IEI does not match is skipped without
//!   consuming anything, even if a later position would match;
//! - whatever is left after the last directive is reported as extraneous.
//!
//! Each present element produces one [`FieldKind::Element`] heading named
//! `"{element name}{suffix}"` followed by its details one level deeper.

use crate::codec::{CodecError, CodecResult};
use crate::context::{DecodeContext, Direction};
use crate::elements::{self, ElementCodec, ElementDescriptor, ElementId, Half};
use crate::field::{FieldKind, FieldValue};
use crate::octet_view::OctetView;

/// One element presence rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Mandatory value with no IEI and no length (type 3 V)
    MandV(ElementId),
    /// Mandatory length-prefixed value
    MandLv(ElementId, &'static str),
    /// Mandatory IEI plus fixed-length value
    MandTv(u8, ElementId, &'static str),
    /// Mandatory IEI, length and value
    MandTlv(u8, ElementId, &'static str),
    /// Optional single-octet presence flag (type 2)
    OptT(u8, ElementId, &'static str),
    /// Optional IEI plus fixed-length value
    OptTv(u8, ElementId, &'static str),
    /// Optional type 1 element: the high nibble is the IEI, the low nibble
    /// the value
    OptTvShort(u8, ElementId, &'static str),
    /// Optional IEI, length and value
    OptTlv(u8, ElementId, &'static str),
    /// Optional length-prefixed value, present when octets remain
    OptLv(ElementId, &'static str),
    /// Optional value, present when octets remain
    OptV(ElementId),
    /// Two mandatory type 1 elements sharing one octet
    HalfOctets {
        /// Element in bits 8-5
        high: ElementId,
        /// Element in bits 4-1
        low: ElementId,
    },
}

impl Directive {
    /// Element the directive refers to (the low half for [`Directive::HalfOctets`]).
    pub fn element(&self) -> ElementId {
        match *self {
            Directive::MandV(id)
            | Directive::MandLv(id, _)
            | Directive::MandTv(_, id, _)
            | Directive::MandTlv(_, id, _)
            | Directive::OptT(_, id, _)
            | Directive::OptTv(_, id, _)
            | Directive::OptTvShort(_, id, _)
            | Directive::OptTlv(_, id, _)
            | Directive::OptLv(id, _)
            | Directive::OptV(id) => id,
            Directive::HalfOctets { low, .. } => low,
        }
    }

    /// True for directives whose absence is a grammar fault.
    pub fn is_mandatory(&self) -> bool {
        matches!(
            self,
            Directive::MandV(_)
                | Directive::MandLv(..)
                | Directive::MandTv(..)
                | Directive::MandTlv(..)
                | Directive::HalfOctets { .. }
        )
    }
}

/// Element layout of one message
#[derive(Debug)]
pub struct MessageGrammar {
    /// Link direction the message travels in
    pub direction: Direction,
    /// Directives in parse order
    pub directives: &'static [Directive],
}

/// Runs `grammar` over `data[offset..offset + len]`.
///
/// Sets the context direction before the first element. Returns the number
/// of octets consumed, extraneous octets included. On a fault the fields
/// produced so far stay in the context.
pub fn execute(
    ctx: &mut DecodeContext<'_>,
    data: &[u8],
    offset: usize,
    len: usize,
    grammar: &MessageGrammar,
) -> CodecResult<usize> {
    let end = offset.saturating_add(len).min(data.len());
    let data = &data[..end];
    let view = OctetView::at(data, offset);
    ctx.set_direction(grammar.direction);

    for directive in grammar.directives {
        step(ctx, &view, directive)?;
    }

    let at = view.current_index();
    let rest = view.read_up_to(view.remaining());
    if !rest.is_empty() {
        tracing::debug!(offset = at, len = rest.len(), "extraneous data after last element");
        ctx.add_kind(at..at + rest.len(), "Extraneous Data", FieldKind::Extraneous);
    }

    Ok(view.current_index() - offset)
}

fn step(ctx: &mut DecodeContext<'_>, view: &OctetView<'_>, directive: &Directive) -> CodecResult<()> {
    let at = view.current_index();
    let descriptor = elements::lookup(directive.element());

    if !view.has_next() {
        if directive.is_mandatory() {
            return Err(CodecError::MissingMandatoryIe {
                element: descriptor.name,
                offset: at,
            });
        }
        return Ok(());
    }

    match *directive {
        Directive::MandV(_) | Directive::OptV(_) => value_only(ctx, view, descriptor, ""),
        Directive::MandLv(_, suffix) | Directive::OptLv(_, suffix) => {
            length_value(ctx, view, at, descriptor, suffix)
        }
        Directive::MandTv(tag, _, suffix) => {
            expect_iei(view, tag, descriptor)?;
            tag_value(ctx, view, descriptor, suffix)
        }
        Directive::MandTlv(tag, _, suffix) => {
            expect_iei(view, tag, descriptor)?;
            view.skip(1)?;
            length_value(ctx, view, at, descriptor, suffix)
        }
        Directive::OptT(tag, _, suffix) => {
            if view.peek()? == tag {
                view.skip(1)?;
                ctx.add_kind(at..at + 1, format!("{}{suffix}", descriptor.name), FieldKind::Element);
            }
            Ok(())
        }
        Directive::OptTv(tag, _, suffix) => {
            if view.peek()? == tag {
                tag_value(ctx, view, descriptor, suffix)?;
            }
            Ok(())
        }
        Directive::OptTvShort(tag, _, suffix) => {
            let oct = view.peek()?;
            if oct & 0xf0 == tag & 0xf0 {
                view.skip(1)?;
                half_octet(ctx, at, oct, Half::Low, descriptor, suffix);
            }
            Ok(())
        }
        Directive::OptTlv(tag, _, suffix) => {
            if view.peek()? == tag {
                view.skip(1)?;
                length_value(ctx, view, at, descriptor, suffix)?;
            }
            Ok(())
        }
        Directive::HalfOctets { high, low } => {
            let oct = view.read()?;
            half_octet(ctx, at, oct, Half::High, elements::lookup(high), "");
            half_octet(ctx, at, oct, Half::Low, elements::lookup(low), "");
            Ok(())
        }
    }
}

fn expect_iei(view: &OctetView<'_>, tag: u8, descriptor: &ElementDescriptor) -> CodecResult<()> {
    let actual = view.peek()?;
    if actual != tag {
        return Err(CodecError::IeiMismatch {
            element: descriptor.name,
            expected: tag,
            actual,
            offset: view.current_index(),
        });
    }
    Ok(())
}

/// Heading for an element whose octets start at `start`. Returns the heading
/// index so its range and label can be completed once the decoder returns.
fn open_element(
    ctx: &mut DecodeContext<'_>,
    start: usize,
    descriptor: &ElementDescriptor,
    suffix: &str,
) -> usize {
    let index = ctx.add_kind(
        start..start + 1,
        format!("{}{suffix}", descriptor.name),
        FieldKind::Element,
    );
    ctx.enter();
    index
}

fn close_element(ctx: &mut DecodeContext<'_>, index: usize, end: usize) {
    ctx.leave();
    let summary = ctx.take_summary();
    if let Some(field) = ctx.field_mut(index) {
        field.range.end = end.max(field.range.start + 1);
        if let Some(summary) = summary {
            field.label.push_str(&summary);
        }
    }
}

/// Decodes `len` value octets at the view position and steps past them.
fn decode_value(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    descriptor: &ElementDescriptor,
    len: usize,
) -> CodecResult<()> {
    let start = view.current_index();
    let bounded = view
        .data()
        .get(..start + len)
        .ok_or(CodecError::BufferTooShort {
            offset: start,
            expected: len,
            actual: view.remaining(),
        })?;
    let value = OctetView::at(bounded, start);

    let used = match descriptor.codec {
        ElementCodec::Octets { decode, .. } => decode(ctx, &value, len)?,
        ElementCodec::HalfOctet(_) | ElementCodec::Absent => {
            elements::raw_value(ctx, &value, len, "Element Value")?;
            len
        }
    };
    if used > len {
        return Err(CodecError::ElementOverrun {
            element: descriptor.name,
            declared: len,
            consumed: used,
        });
    }
    view.skip(used)
}

fn value_only(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    descriptor: &ElementDescriptor,
    suffix: &str,
) -> CodecResult<()> {
    let start = view.current_index();
    let len = descriptor.fixed_len().unwrap_or_else(|| view.remaining());
    if len > view.remaining() {
        return Err(CodecError::BufferTooShort {
            offset: start,
            expected: len,
            actual: view.remaining(),
        });
    }
    let heading = open_element(ctx, start, descriptor, suffix);
    let result = decode_value(ctx, view, descriptor, len);
    close_element(ctx, heading, view.current_index());
    result
}

fn tag_value(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    descriptor: &ElementDescriptor,
    suffix: &str,
) -> CodecResult<()> {
    let start = view.current_index();
    let len = descriptor.fixed_len().unwrap_or(1);
    if 1 + len > view.remaining() {
        return Err(CodecError::BufferTooShort {
            offset: start,
            expected: 1 + len,
            actual: view.remaining(),
        });
    }
    view.skip(1)?;
    let heading = open_element(ctx, start, descriptor, suffix);
    let result = decode_value(ctx, view, descriptor, len);
    close_element(ctx, heading, view.current_index());
    result
}

/// Length octet at the view position, then the value. `start` is where the
/// element began (the IEI for TLV forms).
fn length_value(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    start: usize,
    descriptor: &ElementDescriptor,
    suffix: &str,
) -> CodecResult<()> {
    let len_at = view.current_index();
    let len = usize::from(view.read()?);
    if len > view.remaining() {
        return Err(CodecError::LengthExceedsBuffer {
            offset: len_at,
            length: len,
            remaining: view.remaining(),
        });
    }

    let heading = open_element(ctx, start, descriptor, suffix);
    ctx.add_value(len_at..len_at + 1, format!("Length: {len}"), FieldValue::Uint(len as u64));
    let result = if len == 0 {
        ctx.add(len_at..len_at + 1, format!("{} element not included", descriptor.name));
        Ok(())
    } else {
        decode_value(ctx, view, descriptor, len)
    };
    close_element(ctx, heading, view.current_index());
    result
}

fn half_octet(
    ctx: &mut DecodeContext<'_>,
    offset: usize,
    oct: u8,
    half: Half,
    descriptor: &ElementDescriptor,
    suffix: &str,
) {
    let heading = open_element(ctx, offset, descriptor, suffix);
    match descriptor.codec {
        ElementCodec::HalfOctet(decode) => decode(ctx, offset, oct, half),
        _ => {
            ctx.add_bits(offset, oct, half.mask(0x0f), "Element Value");
        }
    }
    close_element(ctx, heading, offset + 1);
}
