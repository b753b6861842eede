//! GSM A-interface DTAP decoder
//!
//! Decodes Direct Transfer Application Part Layer 3 messages as defined in
//! 3GPP TS 24.008 into a flat list of labelled fields with byte ranges:
//! - MM (Mobility Management)
//! - CC (Call Control and call related SS)
//! - SMS (short message control protocol, CP layer)
//! - SS (non-call related supplementary services)
//! - TP (test procedures, 3GPP TS 44.014 and 34.109)
//!
//! Radio Resource, GPRS Mobility Management and GPRS Session Management
//! frames share the DTAP header but are handed to a [`SubDecoder`] after the
//! header is reported.
//!
//! # Message Structure
//!
//! A frame is a [`DtapHeader`] (protocol discriminator, transaction
//! identifier or skip indicator, message type) followed by information
//! elements laid out by the message's [`grammar::MessageGrammar`]. Element
//! decoders live in [`elements`], message tables in [`messages`].
//!
//! # Example
//!
//! ```rust
//! use gsmdtap_codec::{Direction, DtapDecoder};
//!
//! let decoder = DtapDecoder::default();
//! // MM CM Service Reject, cause "Service option not supported" (0x20)
//! let msg = decoder.decode(&[0x05, 0x22, 0x20]);
//!
//! assert!(msg.is_ok());
//! assert_eq!(msg.summary, "(DTAP) (MM) CM Service Reject");
//! assert_eq!(msg.direction, Direction::Downlink);
//! for field in &msg.fields {
//!     println!("{field}");
//! }
//! ```

pub mod association;
pub mod bcd;
pub mod bitfield;
pub mod codec;
pub mod context;
pub mod dtap;
pub mod elements;
pub mod enums;
pub mod field;
pub mod grammar;
pub mod header;
pub mod messages;
pub mod octet_view;
pub mod subdecoder;


// Re-export commonly used types
pub use association::{Association, CallAssociation, PartyRole};
pub use codec::{CodecError, CodecResult, FaultClass};
pub use context::{DecodeContext, Direction};
pub use dtap::{DecodedMessage, DtapDecoder};
pub use elements::ElementId;
pub use enums::ProtocolDiscriminator;
pub use field::{Field, FieldKind, FieldList, FieldValue};
pub use header::DtapHeader;
pub use octet_view::OctetView;
pub use subdecoder::{EmbeddedProtocol, OpaqueSubDecoder, SubDecoder};
