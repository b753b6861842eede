//! 10.5.4.15 Facility
//!
//! The value is a sequence of BER-encoded SS components. Each component's
//! extent is worked out here; its content goes to the sub-decoder.

use crate::codec::CodecResult;
use crate::context::DecodeContext;
use crate::field::{FieldKind, FieldValue};
use crate::octet_view::OctetView;
use crate::subdecoder::EmbeddedProtocol;

use super::consumed;

/// Length octets of a BER header
enum BerLength {
    Definite(usize),
    Indefinite,
}

/// Reads a BER identifier, including the high-tag-number form.
fn read_identifier(view: &OctetView<'_>) -> CodecResult<()> {
    let first = view.read()?;
    if first & 0x1f == 0x1f {
        while view.read()? & 0x80 != 0 {}
    }
    Ok(())
}

/// Reads BER length octets in short, long or indefinite form. `None` for the
/// reserved 0xff first octet or a length that does not fit in `usize`.
fn read_length(view: &OctetView<'_>) -> CodecResult<Option<BerLength>> {
    let first = view.read()?;
    let length = match first {
        0x00..=0x7f => BerLength::Definite(usize::from(first)),
        0x80 => BerLength::Indefinite,
        0xff => return Ok(None),
        _ => {
            let mut length = 0usize;
            for _ in 0..first & 0x7f {
                let octet = usize::from(view.read()?);
                length = match length.checked_mul(0x100).and_then(|l| l.checked_add(octet)) {
                    Some(length) => length,
                    None => return Ok(None),
                };
            }
            BerLength::Definite(length)
        }
    };
    Ok(Some(length))
}

/// 10.5.4.15 Facility
pub fn facility(ctx: &mut DecodeContext<'_>, view: &OctetView<'_>, len: usize) -> CodecResult<usize> {
    let start = view.current_index();

    while consumed(view, start) < len {
        let component = view.current_index();
        let header = read_identifier(view).and_then(|()| read_length(view));

        let length = match header {
            Ok(Some(BerLength::Definite(length))) => length,
            Ok(Some(BerLength::Indefinite)) => {
                ctx.add_kind(
                    component..start + len,
                    "Indefinite length, ignoring component",
                    FieldKind::Unsupported,
                );
                break;
            }
            Ok(None) | Err(_) => {
                ctx.add_kind(
                    component..start + len,
                    "Component header could not be decoded",
                    FieldKind::Unsupported,
                );
                break;
            }
        };

        let header_len = view.current_index() - component;
        let remaining = len - consumed(view, start);
        if length > remaining {
            let rest = view.read_up_to(remaining);
            ctx.add_value(
                component..component + header_len + rest.len(),
                format!("Component length {length} exceeds remaining {remaining} octets, not decoded"),
                FieldValue::Bytes(rest.to_vec()),
            );
            break;
        }

        let content = view.read_slice(length)?;
        let data = &view.data()[component..component + header_len + content.len()];
        tracing::trace!(offset = component, len = data.len(), "ss component");
        ctx.embed(EmbeddedProtocol::SsComponent, data, component);
    }

    Ok(len)
}
