//! Capture fixtures
//!
//! Frames shaped after A-interface traces. Every fixture decodes without a
//! fault and without extraneous data.

use gsmdtap_codec::Direction;

/// A named capture frame
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    /// Short name used in assertion messages
    pub name: &'static str,
    /// Hex encoded frame
    pub hex: &'static str,
    /// Expected one-line summary
    pub summary: &'static str,
    /// Expected direction
    pub direction: Direction,
}

impl Fixture {
    /// Frame octets.
    pub fn bytes(&self) -> Vec<u8> {
        hex::decode(self.hex).unwrap_or_else(|e| panic!("fixture {}: {e}", self.name))
    }
}

const fn fx(
    name: &'static str,
    hex: &'static str,
    summary: &'static str,
    direction: Direction,
) -> Fixture {
    Fixture {
        name,
        hex,
        summary,
        direction,
    }
}

/// Every fixture frame
pub static FIXTURES: &[Fixture] = &[
    fx(
        "lu_request_imsi",
        "05087062f210000133082926011032547698",
        "(DTAP) (MM) Location Updating Request",
        Direction::Uplink,
    ),
    fx(
        "lu_accept_tmsi",
        "050262f21000011705f401020304",
        "(DTAP) (MM) Location Updating Accept",
        Direction::Downlink,
    ),
    fx(
        "lu_reject",
        "05040d",
        "(DTAP) (MM) Location Updating Reject",
        Direction::Downlink,
    ),
    fx(
        "cm_service_request",
        "052401035319a205f411223344",
        "(DTAP) (MM) CM Service Request",
        Direction::Uplink,
    ),
    fx(
        "auth_request",
        "05120000112233445566778899aabbccddeeff",
        "(DTAP) (MM) Authentication Request",
        Direction::Downlink,
    ),
    fx(
        "auth_response",
        "0554a1b2c3d4",
        "(DTAP) (MM) Authentication Response",
        Direction::Uplink,
    ),
    fx(
        "identity_response",
        "0559082926102143658709",
        "(DTAP) (MM) Identity Response",
        Direction::Uplink,
    ),
    fx(
        "tmsi_realloc_complete",
        "055b",
        "(DTAP) (MM) TMSI Reallocation Complete",
        Direction::Unknown,
    ),
    fx(
        "cc_setup",
        "03050401a05c04018021435e038165f7",
        "(DTAP) (CC) Setup",
        Direction::Uplink,
    ),
    fx(
        "cc_disconnect",
        "032502e090",
        "(DTAP) (CC) Disconnect",
        Direction::Uplink,
    ),
    fx(
        "cc_release_complete",
        "832a0802e190",
        "(DTAP) (CC) Release Complete",
        Direction::Downlink,
    ),
    fx(
        "cc_connect_ack",
        "030f",
        "(DTAP) (CC) Connect Acknowledge",
        Direction::Unknown,
    ),
    fx(
        "cp_data",
        "090103000102",
        "(DTAP) (SMS) CP-DATA",
        Direction::Uplink,
    ),
    fx(
        "cp_error",
        "091016",
        "(DTAP) (SMS) CP-ERROR",
        Direction::Uplink,
    ),
    fx(
        "ss_register",
        "0b3b1c05a103020101",
        "(DTAP) (SS) Register",
        Direction::Uplink,
    ),
    fx(
        "tp_close_tch_loop",
        "0f0000",
        "(DTAP) (TP) Close TCH Loop Cmd",
        Direction::Unknown,
    ),
];

/// Looks up a fixture by name.
pub fn fixture(name: &str) -> &'static Fixture {
    FIXTURES
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("no fixture named {name}"))
}
