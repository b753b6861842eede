//! Message tables, one per protocol discriminator family
//!
//! Each table lists every message type the family defines, in the order of
//! its specification clause. A descriptor without a grammar is a message
//! that carries no elements after the header.

use crate::enums::ProtocolDiscriminator;
use crate::grammar::MessageGrammar;

pub mod cc;
pub mod mm;
pub mod sms;
pub mod ss;
pub mod tp;

/// One message type of a family
#[derive(Debug)]
pub struct MessageDescriptor {
    /// Message type after masking
    pub code: u8,
    /// Display name
    pub name: &'static str,
    /// Element layout, `None` for header-only messages
    pub grammar: Option<&'static MessageGrammar>,
}

impl MessageDescriptor {
    pub(crate) const fn new(
        code: u8,
        name: &'static str,
        grammar: Option<&'static MessageGrammar>,
    ) -> Self {
        Self { code, name, grammar }
    }
}

/// Message table for `pd`, or `None` if DTAP does not decode that family.
pub fn table(pd: ProtocolDiscriminator) -> Option<&'static [MessageDescriptor]> {
    match pd {
        ProtocolDiscriminator::MobilityManagement => Some(&mm::MESSAGES),
        ProtocolDiscriminator::CallControl => Some(&cc::MESSAGES),
        ProtocolDiscriminator::Sms => Some(&sms::MESSAGES),
        ProtocolDiscriminator::NonCallSs => Some(&ss::MESSAGES),
        ProtocolDiscriminator::TestProcedures => Some(&tp::MESSAGES),
        _ => None,
    }
}

/// Finds the descriptor for a masked message type.
pub fn find(table: &'static [MessageDescriptor], code: u8) -> Option<&'static MessageDescriptor> {
    table.iter().find(|descriptor| descriptor.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const FAMILIES: [ProtocolDiscriminator; 5] = [
        ProtocolDiscriminator::MobilityManagement,
        ProtocolDiscriminator::CallControl,
        ProtocolDiscriminator::Sms,
        ProtocolDiscriminator::NonCallSs,
        ProtocolDiscriminator::TestProcedures,
    ];

    #[test]
    fn test_table_sizes() {
        let sizes: Vec<usize> = FAMILIES
            .iter()
            .map(|&pd| table(pd).map_or(0, <[MessageDescriptor]>::len))
            .collect();
        assert_eq!(sizes, vec![23, 35, 3, 3, 24]);
    }

    #[test]
    fn test_codes_unique_and_within_mask() {
        for pd in FAMILIES {
            let entries = table(pd).unwrap();
            let codes: HashSet<u8> = entries.iter().map(|d| d.code).collect();
            assert_eq!(codes.len(), entries.len(), "{pd}");
            let mask = pd.message_type_mask();
            assert!(entries.iter().all(|d| d.code & mask == d.code), "{pd}");
        }
    }

    #[test]
    fn test_no_table_for_sibling_families() {
        assert!(table(ProtocolDiscriminator::RadioResource).is_none());
        assert!(table(ProtocolDiscriminator::GprsMobilityManagement).is_none());
        assert!(table(ProtocolDiscriminator::GroupCallControl).is_none());
    }

    #[test]
    fn test_find() {
        let entry = find(&mm::MESSAGES, 0x08).unwrap();
        assert_eq!(entry.name, "Location Updating Request");
        assert!(entry.grammar.is_some());
        assert!(find(&mm::MESSAGES, 0x3f).is_none());
    }

    #[test]
    fn test_header_only_messages() {
        assert!(find(&cc::MESSAGES, 0x0f).unwrap().grammar.is_none());
        assert!(find(&sms::MESSAGES, 0x04).unwrap().grammar.is_none());
    }
}
