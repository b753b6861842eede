//! Sub-decoder that records every embedded payload it is handed
//!
//! Stands in for the RR, GMM, SM, SS component and RP dissectors a host
//! would plug into the decoder.

use std::sync::Mutex;

use gsmdtap_codec::{EmbeddedProtocol, FieldKind, FieldList, SubDecoder};

/// One recorded hand-off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandOff {
    /// Protocol the payload was handed over as
    pub protocol: EmbeddedProtocol,
    /// Payload octets
    pub data: Vec<u8>,
    /// Offset of the payload in the frame
    pub offset: usize,
}

/// Records hand-offs and emits one marker field per payload.
#[derive(Debug, Default)]
pub struct RecordingSubDecoder {
    calls: Mutex<Vec<HandOff>>,
}

impl RecordingSubDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the hand-offs so far.
    pub fn calls(&self) -> Vec<HandOff> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Protocols of the hand-offs so far, in order.
    pub fn protocols(&self) -> Vec<EmbeddedProtocol> {
        self.calls().into_iter().map(|c| c.protocol).collect()
    }
}

impl SubDecoder for RecordingSubDecoder {
    fn decode_embedded(
        &self,
        protocol: EmbeddedProtocol,
        data: &[u8],
        offset: usize,
        out: &mut FieldList,
    ) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(HandOff {
                protocol,
                data: data.to_vec(),
                offset,
            });
        }
        out.push(
            offset..offset + data.len(),
            format!("{protocol} decoded by recorder"),
            FieldKind::Embedded,
        );
    }
}
