//! # sei-proto
//!
//! Protocol-buffer wire codec and typed client bindings for the Sei chain API.
//!
//! Every record type maps between three forms: the native Rust value, the
//! standard protobuf binary encoding, and a JSON object.
//!
//! ## Architecture
//!
//! - **Wire** ([`wire`]): varints, tags, and the byte-level reader/writer
//! - **Codec** ([`codec`]): the [`Message`](codec::Message) contract, enum
//!   tables, JSON field coercion, timestamp and base64 adapters
//! - **Types** ([`types`]): record shapes grouped by protobuf package
//! - **Registry** ([`registry`]): `Any` payload dispatch by type URL
//! - **Client** ([`client`]): unary RPC over an abstract [`Transport`](client::Transport)
//! - **Store** ([`store`]): memoized queries refreshed per block
//!
//! 64-bit integers are limited to 2^53 − 1 when they enter through binary
//! decode or JSON, so values stay exact for JSON consumers.
//!
//! ## Example
//!
//! ```
//! use sei_proto::codec::Message;
//! use sei_proto::types::sei::dex::ActiveOrders;
//!
//! let active = ActiveOrders { ids: vec![1, 2, 3] };
//! let bytes = active.encode();
//! assert_eq!(ActiveOrders::decode(&bytes).unwrap(), active);
//! assert_eq!(active.to_json()["ids"], serde_json::json!([1, 2, 3]));
//! ```

pub mod client;
pub mod codec;
pub mod error;
pub mod registry;
pub mod store;
pub mod types;
pub mod wire;

pub use error::{CodecError, Result};
