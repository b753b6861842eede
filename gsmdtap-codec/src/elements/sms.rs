//! Short message control protocol elements (3GPP TS 24.011 clause 8.1.4)

use crate::bitfield::bit_label;
use crate::codec::CodecResult;
use crate::context::DecodeContext;
use crate::field::FieldValue;
use crate::octet_view::OctetView;
use crate::subdecoder::EmbeddedProtocol;

/// 8.1.4.1 CP-User data. The RPDU itself belongs to the relay layer.
pub fn cp_user_data(
    ctx: &mut DecodeContext<'_>,
    view: &OctetView<'_>,
    len: usize,
) -> CodecResult<usize> {
    let start = view.current_index();
    let rpdu = view.read_slice(len)?;
    ctx.add(start..start + len, "RPDU (not displayed)");
    ctx.embed(EmbeddedProtocol::RelayProtocol, rpdu, start);
    Ok(len)
}

fn cp_cause_name(cause: u8) -> &'static str {
    match cause {
        17 => "Network failure",
        22 => "Congestion",
        81 => "Invalid Transaction Identifier value",
        95 => "Semantically incorrect message",
        96 => "Invalid mandatory information",
        97 => "Message type non-existent or not implemented",
        98 => "Message not compatible with the short message protocol state",
        99 => "Information element non-existent or not implemented",
        111 => "Protocol error, unspecified",
        _ => "Reserved, treat as Protocol error, unspecified",
    }
}

/// 8.1.4.2 CP-Cause
pub fn cp_cause(ctx: &mut DecodeContext<'_>, view: &OctetView<'_>, _len: usize) -> CodecResult<usize> {
    let start = view.current_index();
    let oct = view.read()?;

    let name = cp_cause_name(oct);
    ctx.add_value(
        start..start + 1,
        bit_label(oct, 0xff, &format!("Cause: ({oct}) {name}")),
        FieldValue::Enum {
            value: oct.into(),
            name,
        },
    );
    ctx.set_summary(format!(" - ({oct}) {name}"));

    Ok(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;
    use crate::subdecoder::OpaqueSubDecoder;

    #[test]
    fn test_cp_cause() {
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        let view = OctetView::new(&[0x11]);
        assert_eq!(cp_cause(&mut ctx, &view, 1).unwrap(), 1);
        assert_eq!(ctx.fields()[0].label, "0001 0001 = Cause: (17) Network failure");
        assert_eq!(ctx.take_summary().as_deref(), Some(" - (17) Network failure"));
    }

    #[test]
    fn test_cp_cause_reserved() {
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        let view = OctetView::new(&[0x01]);
        cp_cause(&mut ctx, &view, 1).unwrap();
        assert!(ctx.fields()[0].label.ends_with("Reserved, treat as Protocol error, unspecified"));
    }

    #[test]
    fn test_cp_user_data_embeds_rpdu() {
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        let data = [0x00, 0x01, 0x00, 0x07, 0x91];
        let view = OctetView::at(&data, 1);
        assert_eq!(cp_user_data(&mut ctx, &view, 4).unwrap(), 4);
        let fields = ctx.fields();
        assert_eq!(fields[0].label, "RPDU (not displayed)");
        assert_eq!(fields[0].range, 1..5);
        assert_eq!(fields[1].kind, FieldKind::Embedded);
        assert_eq!(fields[1].value, Some(FieldValue::Bytes(vec![0x01, 0x00, 0x07, 0x91])));
    }

    #[test]
    fn test_cp_user_data_short() {
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        let view = OctetView::new(&[0x01]);
        assert!(cp_user_data(&mut ctx, &view, 3).is_err());
    }
}
