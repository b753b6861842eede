//! Robustness tests
//!
//! Truncated, mutated and random frames must never panic, and every field
//! must stay inside the frame.

use gsmdtap_codec::{DtapDecoder, FaultClass, FieldKind};
use integration_tests::test_utils::assert_well_formed;
use integration_tests::{init_test_logging, FIXTURES};
use proptest::prelude::*;

/// Every prefix of every fixture decodes without panicking
#[test]
fn test_truncation_sweep() {
    init_test_logging();

    let decoder = DtapDecoder::default();
    for fx in FIXTURES {
        let frame = fx.bytes();
        for cut in 0..frame.len() {
            let msg = decoder.decode(&frame[..cut]);
            assert_well_formed(&msg, cut);
            if let Some(fault) = &msg.fault {
                assert_eq!(
                    msg.fields_of_kind(FieldKind::Fault).count(),
                    1,
                    "{} cut at {cut}",
                    fx.name
                );
                assert_ne!(fault.class(), FaultClass::Unknown, "{} cut at {cut}", fx.name);
            }
        }
    }
}

/// Every octet after the header replaced by a few interesting values
#[test]
fn test_tag_mutation_sweep() {
    let decoder = DtapDecoder::default();
    for fx in FIXTURES {
        let frame = fx.bytes();
        for index in 2..frame.len() {
            for value in [0x00u8, 0x7f, 0x80, 0xff, frame[index] ^ 0x01] {
                let mut mutated = frame.clone();
                mutated[index] = value;
                let msg = decoder.decode(&mutated);
                assert_well_formed(&msg, mutated.len());
            }
        }
    }
}

/// A long frame with a length octet pointing far past the end
#[test]
fn test_overlong_length_reported() {
    let msg = DtapDecoder::default().decode(&[0x05, 0x19, 0xff, 0x29]);
    let fault = msg.fault.expect("length fault");
    assert_eq!(fault.class(), FaultClass::Bounds);
}

proptest! {
    #[test]
    fn prop_random_frames_never_panic(frame in proptest::collection::vec(any::<u8>(), 0..64)) {
        let msg = DtapDecoder::default().decode(&frame);
        assert_well_formed(&msg, frame.len());
    }

    #[test]
    fn prop_known_families_never_panic(
        pd in prop::sample::select(vec![0x03u8, 0x05, 0x09, 0x0b, 0x0f]),
        ti in 0u8..16,
        message_type in any::<u8>(),
        body in proptest::collection::vec(any::<u8>(), 0..48),
    ) {
        let mut frame = vec![(ti << 4) | pd, message_type];
        frame.extend(body);
        let msg = DtapDecoder::default().decode(&frame);
        assert_well_formed(&msg, frame.len());
        prop_assert!(msg.discriminator.is_some() || msg.fault.is_some());
    }

    #[test]
    fn prop_truncated_fixture(index in 0usize..16, cut in 0usize..40) {
        let fx = &FIXTURES[index % FIXTURES.len()];
        let frame = fx.bytes();
        let cut = cut.min(frame.len());
        let msg = DtapDecoder::default().decode(&frame[..cut]);
        prop_assert!(msg.consumed <= cut);
    }
}
