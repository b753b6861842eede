//! Decode faults and the result type used throughout the decoder
//!
//! A fault always belongs to one [`FaultClass`]:
//!
//! - **Bounds**: a read would have gone past the end of the frame or of the
//!   information element being decoded.
//! - **Grammar**: a mandatory element is missing or carries the wrong IEI.
//! - **Unknown**: the protocol discriminator or message type is not one this
//!   decoder knows how to interpret.
//!
//! Extraneous trailing octets and unsupported nested encodings are not faults;
//! they are reported as fields (see [`crate::field::FieldKind`]).

use thiserror::Error;

/// Errors that stop the decoding of the current message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A read would run past the end of the available octets
    #[error("Buffer too short at offset {offset}: expected {expected} more bytes, got {actual}")]
    BufferTooShort {
        /// Frame offset of the failed read
        offset: usize,
        /// Bytes the read needed
        expected: usize,
        /// Bytes that were actually left
        actual: usize,
    },

    /// A length octet announces more payload than the frame holds
    #[error("Length exceeds buffer at offset {offset}: length field is {length}, but only {remaining} bytes remain")]
    LengthExceedsBuffer {
        /// Frame offset of the length octet
        offset: usize,
        /// Value of the length octet
        length: usize,
        /// Bytes left after the length octet
        remaining: usize,
    },

    /// An element decoder reported more octets than the IE declared
    #[error("{element} consumed {consumed} bytes but declared {declared}")]
    ElementOverrun {
        /// Element display name
        element: &'static str,
        /// Declared IE length
        declared: usize,
        /// Bytes the decoder reported
        consumed: usize,
    },

    /// The message ended before a mandatory element
    #[error("Missing mandatory IE {element} at offset {offset}")]
    MissingMandatoryIe {
        /// Element display name
        element: &'static str,
        /// Frame offset where the element was expected
        offset: usize,
    },

    /// A mandatory TV/TLV element carries an unexpected IEI
    #[error("Mandatory IE {element} expected IEI 0x{expected:02X}, got 0x{actual:02X} at offset {offset}")]
    IeiMismatch {
        /// Element display name
        element: &'static str,
        /// IEI required by the message grammar
        expected: u8,
        /// IEI found in the frame
        actual: u8,
        /// Frame offset of the IEI
        offset: usize,
    },

    /// Protocol discriminator without a DTAP message table
    #[error("Unsupported protocol discriminator (0x{0:X})")]
    UnsupportedProtocolDiscriminator(u8),

    /// Message type not present in the discriminator's table
    #[error("Unknown DTAP message type 0x{message_type:02X} for {discriminator}")]
    UnknownMessageType {
        /// Short name of the protocol discriminator
        discriminator: &'static str,
        /// Masked message type octet
        message_type: u8,
    },
}

/// Classification of a [`CodecError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultClass {
    /// Read past the end of the frame or IE
    Bounds,
    /// Mandatory directive not satisfied
    Grammar,
    /// Unrecognized discriminator or message type
    Unknown,
}

impl CodecError {
    /// Returns the fault class of this error.
    pub fn class(&self) -> FaultClass {
        match self {
            CodecError::BufferTooShort { .. }
            | CodecError::LengthExceedsBuffer { .. }
            | CodecError::ElementOverrun { .. } => FaultClass::Bounds,
            CodecError::MissingMandatoryIe { .. } | CodecError::IeiMismatch { .. } => {
                FaultClass::Grammar
            }
            CodecError::UnsupportedProtocolDiscriminator(_)
            | CodecError::UnknownMessageType { .. } => FaultClass::Unknown,
        }
    }
}

/// Result type for decode operations
pub type CodecResult<T> = Result<T, CodecError>;
