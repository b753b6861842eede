//! Call association integration tests
//!
//! The party-number decoders read and write the host's per-connection state
//! through the `Association` trait.

use std::collections::HashMap;

use gsmdtap_codec::{Association, CallAssociation, DtapDecoder, PartyRole};
use integration_tests::{fixture, init_test_logging};

/// Host-side association keyed the way a connection table would be
#[derive(Default)]
struct ConnectionTable {
    parties: HashMap<PartyRole, String>,
    writes: usize,
}

impl Association for ConnectionTable {
    fn party(&self, role: PartyRole) -> Option<&str> {
        self.parties.get(&role).map(String::as_str)
    }

    fn record_party(&mut self, role: PartyRole, digits: &str) {
        self.writes += 1;
        self.parties.insert(role, digits.to_owned());
    }
}

#[test]
fn test_setup_records_both_parties() {
    init_test_logging();

    let mut assoc = CallAssociation::new();
    let msg = DtapDecoder::default().decode_with_association(&fixture("cc_setup").bytes(), &mut assoc);
    assert!(msg.is_ok());
    assert_eq!(assoc.party(PartyRole::Calling), Some("1234"));
    assert_eq!(assoc.party(PartyRole::Called), Some("567"));
}

/// The first number seen on a connection wins
#[test]
fn test_first_number_is_kept() {
    let decoder = DtapDecoder::default();
    let mut table = ConnectionTable::default();

    decoder.decode_with_association(&fixture("cc_setup").bytes(), &mut table);
    // Second Setup, called party 999
    decoder.decode_with_association(&[0x03, 0x05, 0x5e, 0x03, 0x81, 0x99, 0xf9], &mut table);

    assert_eq!(table.party(PartyRole::Called), Some("567"));
    assert_eq!(table.writes, 2);
}

#[test]
fn test_known_party_not_overwritten() {
    let mut assoc = CallAssociation::new();
    assoc.record_party(PartyRole::Called, "112");

    DtapDecoder::default().decode_with_association(&fixture("cc_setup").bytes(), &mut assoc);
    assert_eq!(assoc.party(PartyRole::Called), Some("112"));
    assert_eq!(assoc.party(PartyRole::Calling), Some("1234"));
}

#[test]
fn test_decode_without_association() {
    let msg = DtapDecoder::default().decode(&fixture("cc_setup").bytes());
    assert!(msg.is_ok());
    assert!(msg.find_field("Called Party BCD Number - (567)").is_some());
}

#[test]
fn test_non_call_frames_leave_association_untouched() {
    let decoder = DtapDecoder::default();
    let mut table = ConnectionTable::default();
    for name in ["lu_request_imsi", "cp_data", "ss_register", "cc_disconnect"] {
        decoder.decode_with_association(&fixture(name).bytes(), &mut table);
    }
    assert_eq!(table.writes, 0);
}
