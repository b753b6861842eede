//! Concurrent decoding tests
//!
//! A decoder keeps no per-frame state, so one instance can be shared by
//! many threads and must give the same result as a sequential decode.

use std::sync::Arc;
use std::thread;

use gsmdtap_codec::{Association, CallAssociation, DtapDecoder, PartyRole};
use integration_tests::{fixture, init_test_logging, RecordingSubDecoder, FIXTURES};

#[test]
fn test_shared_decoder_matches_sequential() {
    init_test_logging();

    let decoder = DtapDecoder::default();
    let expected: Vec<_> = FIXTURES.iter().map(|f| decoder.decode(&f.bytes())).collect();

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..50 {
                    for (fx, want) in FIXTURES.iter().zip(&expected) {
                        let got = decoder.decode(&fx.bytes());
                        assert_eq!(&got, want, "{}", fx.name);
                    }
                }
            });
        }
    });
}

#[test]
fn test_sub_decoder_shared_across_threads() {
    let recorder = Arc::new(RecordingSubDecoder::new());
    let decoder = Arc::new(DtapDecoder::new(recorder.clone()));
    let frame = fixture("cp_data").bytes();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let decoder = Arc::clone(&decoder);
            let frame = frame.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    assert!(decoder.decode(&frame).is_ok());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(recorder.calls().len(), 100);
}

/// Each connection keeps its own association while sharing the decoder
#[test]
fn test_association_per_connection() {
    let decoder = DtapDecoder::default();

    let results: Vec<CallAssociation> = thread::scope(|scope| {
        let handles: Vec<_> = (0u8..4)
            .map(|digit| {
                let decoder = &decoder;
                scope.spawn(move || {
                    let mut assoc = CallAssociation::new();
                    // Setup with a one digit called party
                    let frame = [0x03, 0x05, 0x5e, 0x02, 0x81, 0xf0 | digit];
                    decoder.decode_with_association(&frame, &mut assoc);
                    assoc
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (digit, assoc) in results.iter().enumerate() {
        assert_eq!(assoc.party(PartyRole::Called), Some(digit.to_string().as_str()));
    }
}
