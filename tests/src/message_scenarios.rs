//! Message scenario integration tests
//!
//! Decodes complete frames of every family through the public API and checks
//! summaries, directions, element headings and sub-decoder hand-offs.

use std::sync::Arc;

use gsmdtap_codec::{
    CodecError, DtapDecoder, EmbeddedProtocol, FieldKind, OpaqueSubDecoder, ProtocolDiscriminator,
};
use gsmdtap_common::DecoderConfig;
use integration_tests::test_utils::assert_well_formed;
use integration_tests::{element_headings, fixture, init_test_logging, RecordingSubDecoder, FIXTURES};

/// Every fixture decodes cleanly with the expected summary and direction
#[test]
fn test_all_fixtures_decode_cleanly() {
    init_test_logging();

    let decoder = DtapDecoder::default();
    for fx in FIXTURES {
        let frame = fx.bytes();
        let msg = decoder.decode(&frame);
        assert!(msg.is_ok(), "{}: {:?}", fx.name, msg.fault);
        assert_eq!(msg.summary, fx.summary, "{}", fx.name);
        assert_eq!(msg.direction, fx.direction, "{}", fx.name);
        assert_eq!(msg.extraneous_len(), 0, "{}", fx.name);
        assert_eq!(msg.consumed, frame.len(), "{}", fx.name);
        assert_well_formed(&msg, frame.len());
    }
}

#[test]
fn test_cm_service_request_elements() {
    let msg = DtapDecoder::default().decode(&fixture("cm_service_request").bytes());
    let headings = element_headings(&msg);
    assert_eq!(headings.len(), 4);
    assert!(headings[0].starts_with("Ciphering Key Sequence Number"));
    assert!(headings[1].starts_with("CM Service Type"));
    assert!(headings[2].starts_with("Mobile Station Classmark 2"));
    assert_eq!(headings[3], "Mobile Identity - TMSI/P-TMSI (0x11223344)");
}

#[test]
fn test_authentication_request_rand() {
    let msg = DtapDecoder::default().decode(&fixture("auth_request").bytes());
    let rand = msg
        .find_field("Authentication Parameter RAND")
        .expect("RAND heading");
    assert_eq!(rand.range, 3..19);
}

#[test]
fn test_setup_party_numbers() {
    let msg = DtapDecoder::default().decode(&fixture("cc_setup").bytes());
    let headings = element_headings(&msg);
    assert!(headings[0].starts_with("Bearer Capability 1"));
    assert!(headings.contains(&"Calling Party BCD Number - (1234)"));
    assert!(headings.contains(&"Called Party BCD Number - (567)"));
}

#[test]
fn test_disconnect_cause() {
    let msg = DtapDecoder::default().decode(&fixture("cc_disconnect").bytes());
    assert_eq!(element_headings(&msg), vec!["Cause - (16) Normal call clearing"]);
}

#[test]
fn test_cp_error_cause() {
    let msg = DtapDecoder::default().decode(&fixture("cp_error").bytes());
    assert_eq!(element_headings(&msg), vec!["CP-Cause - (22) Congestion"]);
}

/// RR, GMM and SM frames are reported up to the header and handed off
#[test]
fn test_sibling_families_handed_off() {
    let recorder = Arc::new(RecordingSubDecoder::new());
    let decoder = DtapDecoder::new(recorder.clone());

    for frame in [&[0x06, 0x35, 0x01][..], &[0x08, 0x01, 0x02], &[0x0a, 0x41, 0x00]] {
        let msg = decoder.decode(frame);
        assert!(msg.is_ok());
        assert_eq!(msg.name, None);
        assert!(msg.find_field("Protocol Discriminator").is_some());
    }

    assert_eq!(
        recorder.protocols(),
        vec![
            EmbeddedProtocol::RadioResource,
            EmbeddedProtocol::GprsMobility,
            EmbeddedProtocol::SessionManagement,
        ]
    );
    let calls = recorder.calls();
    assert!(calls.iter().all(|c| c.offset == 1));
    assert_eq!(calls[1].data, vec![0x01, 0x02]);
}

#[test]
fn test_embedded_payloads_reach_sub_decoder() {
    let recorder = Arc::new(RecordingSubDecoder::new());
    let decoder = DtapDecoder::new(recorder.clone());

    let msg = decoder.decode(&fixture("cp_data").bytes());
    assert!(msg.find_field("GSM A-I/F RP decoded by recorder").is_some());
    decoder.decode(&fixture("ss_register").bytes());

    let calls = recorder.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].protocol, EmbeddedProtocol::RelayProtocol);
    assert_eq!(calls[0].data, vec![0x00, 0x01, 0x02]);
    assert_eq!(calls[0].offset, 3);
    assert_eq!(calls[1].protocol, EmbeddedProtocol::SsComponent);
    assert_eq!(calls[1].data, vec![0xa1, 0x03, 0x02, 0x01, 0x01]);
    assert_eq!(calls[1].offset, 4);
}

#[test]
fn test_embedded_dissection_disabled_by_config() {
    let config = DecoderConfig::from_yaml("dissect_embedded: false\nhex_dump: true\n").unwrap();
    let recorder = Arc::new(RecordingSubDecoder::new());
    let decoder = DtapDecoder::with_config(config, recorder.clone());

    let msg = decoder.decode(&fixture("cp_data").bytes());
    assert!(msg.is_ok());
    assert!(recorder.calls().is_empty());
    let embedded = msg.fields_of_kind(FieldKind::Embedded).next().unwrap();
    assert_eq!(embedded.label, "GSM A-I/F RP (3 octets, not dissected)");
}

#[test]
fn test_unknown_message_type_keeps_header() {
    let msg = DtapDecoder::new(Arc::new(OpaqueSubDecoder)).decode(&[0x03, 0x3f]);
    assert_eq!(msg.discriminator, Some(ProtocolDiscriminator::CallControl));
    assert!(matches!(
        msg.fault,
        Some(CodecError::UnknownMessageType {
            discriminator: "CC",
            message_type: 0x3f
        })
    ));
    assert!(msg.find_field("Protocol Discriminator").is_some());
    assert!(msg.find_field("Unknown DTAP Message Type (0x3f)").is_some());
}

#[test]
fn test_unsupported_discriminators() {
    let decoder = DtapDecoder::default();
    for pd in [0x00u8, 0x01, 0x02, 0x04, 0x07, 0x0c, 0x0d, 0x0e] {
        let msg = decoder.decode(&[pd, 0x01, 0x02]);
        assert_eq!(
            msg.fault,
            Some(CodecError::UnsupportedProtocolDiscriminator(pd)),
            "pd {pd}"
        );
        assert_eq!(msg.fields_of_kind(FieldKind::Fault).count(), 1);
        assert!(
            msg.find_field("0000 .... = Skip Indicator: 0").is_some(),
            "pd {pd}"
        );
        assert!(msg.fields[0].label.starts_with("Protocol Discriminator: "));
    }
}

#[test]
fn test_release_complete_cause_without_recommendation() {
    let msg = DtapDecoder::default().decode(&[0x03, 0x2a, 0x08, 0x02, 0x80, 0x90]);
    assert!(msg.is_ok());
    assert_eq!(element_headings(&msg), vec!["Cause - (16) Normal call clearing"]);
    assert_eq!(msg.extraneous_len(), 0);
}

/// An optional element with an unexpected tag is skipped and its octets
/// reported as extraneous
#[test]
fn test_altered_optional_tag_is_extraneous() {
    let msg = DtapDecoder::default().decode(&[0x83, 0x2a, 0x09, 0x02, 0xe1, 0x90]);
    assert!(msg.is_ok());
    assert!(element_headings(&msg).is_empty());
    let extraneous = msg.fields_of_kind(FieldKind::Extraneous).next().unwrap();
    assert_eq!(extraneous.range, 2..6);
}
