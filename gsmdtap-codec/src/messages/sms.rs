//! Short message control protocol messages (3GPP TS 24.011 clause 7.2)

use crate::context::Direction;
use crate::elements::ElementId as E;
use crate::grammar::{Directive as D, MessageGrammar};

use super::MessageDescriptor;

pub static CP_DATA: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[D::MandLv(E::CpUserData, "")],
};

pub static CP_ERROR: MessageGrammar = MessageGrammar {
    direction: Direction::Uplink,
    directives: &[D::MandV(E::CpCause)],
};

/// Short message control message types
pub static MESSAGES: [MessageDescriptor; 3] = [
    MessageDescriptor::new(0x01, "CP-DATA", Some(&CP_DATA)),
    MessageDescriptor::new(0x04, "CP-ACK", None),
    MessageDescriptor::new(0x10, "CP-ERROR", Some(&CP_ERROR)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::DecodeContext;
    use crate::grammar::execute;
    use crate::subdecoder::OpaqueSubDecoder;

    #[test]
    fn test_cp_error() {
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        assert_eq!(execute(&mut ctx, &[0x16], 0, 1, &CP_ERROR).unwrap(), 1);
        assert_eq!(ctx.fields()[0].label, "CP-Cause - (22) Congestion");
    }

    #[test]
    fn test_cp_data_length_beyond_frame() {
        let mut ctx = DecodeContext::new(&OpaqueSubDecoder);
        assert!(execute(&mut ctx, &[0x05, 0x01, 0x02], 0, 3, &CP_DATA).is_err());
    }
}
