//! Wire layer - varints, tag framing, and the byte-level reader/writer.
//!
//! Everything here is schema-agnostic. Record types in [`crate::types`]
//! drive a [`Writer`] when encoding and a [`Reader`] when decoding:
//!
//! ```text
//! ┌─────┬─────────┬─────┬────────┬─────────┬─────┐
//! │ tag │ payload │ tag │ length │ payload │ ... │
//! └─────┴─────────┴─────┴────────┴─────────┴─────┘
//!   varint field     length-delimited field
//! ```

mod reader;
mod varint;
mod wire_format;
mod writer;

pub use reader::{Reader, RECURSION_LIMIT};
pub use varint::{
    decode_varint, encode_varint, encoded_len_varint, to_safe_number, to_safe_signed,
    MAX_SAFE_INTEGER, MAX_VARINT_LEN,
};
pub use wire_format::{
    check_wire_type, decompose_tag, parse_tag, tag, WireType, MAX_FIELD_NUMBER,
    MIN_FIELD_NUMBER, TAG_TYPE_BITS, WIRE_TYPE_MASK,
};
pub use writer::Writer;
