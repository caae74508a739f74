//! Codec module - the record-level contract and its scalar adapters.
//!
//! - [`Message`] - encode/decode/JSON/partial operations per record type
//! - [`Name`] - type URL for records carried inside `Any`
//! - [`Enumeration`] and [`proto_enum!`](crate::proto_enum) - enum tables
//! - [`json`] - field readers ([`Fields`]) and the output builder ([`JsonObject`])
//! - [`timestamp`] and [`base64`] - scalar adapters used at the JSON boundary
//!
//! # Design
//!
//! Records are plain owned structs. Each implements the field-level pieces
//! of [`Message`] by hand against [`Reader`](crate::wire::Reader) and
//! [`Writer`](crate::wire::Writer); the trait supplies framing and the
//! decode loop.
//!
//! # Example
//!
//! ```
//! use sei_proto::codec::Message;
//! use sei_proto::types::cosmos::accesscontrol::{AccessOperation, AccessType};
//!
//! let op = AccessOperation {
//!     access_type: AccessType::Write,
//!     identifier_template: "abc".to_string(),
//!     ..Default::default()
//! };
//! let encoded = op.encode();
//! assert_eq!(&encoded[..], &[0x08, 0x02, 0x1A, 0x03, 0x61, 0x62, 0x63]);
//! assert_eq!(AccessOperation::decode(&encoded).unwrap(), op);
//! ```

pub mod base64;
mod enumeration;
pub mod json;
mod message;
pub mod timestamp;

pub use enumeration::{Enumeration, UNKNOWN_NAME, UNRECOGNIZED_ORDINAL};
pub use json::{Fields, JsonObject};
pub use message::{Message, Name};
