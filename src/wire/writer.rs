//! Append-only writer producing an encoded message.
//!
//! Uses `bytes::BytesMut` so the finished buffer freezes into `Bytes`
//! without copying. Field writers emit the tag followed by the payload and
//! never elide; default elision is the caller's decision, since nested
//! records must be written even when equal to their own default.
//!
//! # Example
//!
//! ```
//! use sei_proto::wire::Writer;
//!
//! let mut writer = Writer::new();
//! writer.int32(1, 2);
//! writer.string(3, "abc");
//! assert_eq!(&writer.finish()[..], &[0x08, 0x02, 0x1A, 0x03, b'a', b'b', b'c']);
//! ```

use bytes::{BufMut, Bytes, BytesMut};

use super::varint::encode_varint;
use super::wire_format::{tag, WireType};
use crate::codec::{Enumeration, Message};

/// Default initial capacity for a fresh writer.
const DEFAULT_CAPACITY: usize = 64;

/// Writer accumulating encoded fields.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: BytesMut,
}

impl Writer {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Finish writing and return the encoded bytes (zero-copy freeze).
    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }

    /// Borrow what has been written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    // Raw wire values

    /// Write a field tag.
    #[inline]
    pub fn tag(&mut self, field: u32, wire_type: WireType) {
        encode_varint(u64::from(tag(field, wire_type)), &mut self.buf);
    }

    /// Write a bare varint.
    #[inline]
    pub fn varint(&mut self, value: u64) {
        encode_varint(value, &mut self.buf);
    }

    /// Write a length prefix followed by `data`.
    pub fn length_delimited(&mut self, data: &[u8]) {
        self.varint(data.len() as u64);
        self.buf.put_slice(data);
    }

    // Field writers

    /// `int32` (sign-extended to 64 bits, no zig-zag).
    pub fn int32(&mut self, field: u32, value: i32) {
        self.tag(field, WireType::Varint);
        self.varint(value as i64 as u64);
    }

    /// `int64` (two's-complement bit pattern).
    pub fn int64(&mut self, field: u32, value: i64) {
        self.tag(field, WireType::Varint);
        self.varint(value as u64);
    }

    /// `uint32`.
    pub fn uint32(&mut self, field: u32, value: u32) {
        self.tag(field, WireType::Varint);
        self.varint(u64::from(value));
    }

    /// `uint64`.
    pub fn uint64(&mut self, field: u32, value: u64) {
        self.tag(field, WireType::Varint);
        self.varint(value);
    }

    /// `bool`.
    pub fn bool(&mut self, field: u32, value: bool) {
        self.tag(field, WireType::Varint);
        self.varint(u64::from(value));
    }

    /// Enum field, written as its `int32` ordinal.
    pub fn enumeration<E: Enumeration>(&mut self, field: u32, value: E) {
        self.int32(field, value.to_i32());
    }

    /// `fixed32`.
    pub fn fixed32(&mut self, field: u32, value: u32) {
        self.tag(field, WireType::Fixed32);
        self.buf.put_u32_le(value);
    }

    /// `fixed64`.
    pub fn fixed64(&mut self, field: u32, value: u64) {
        self.tag(field, WireType::Fixed64);
        self.buf.put_u64_le(value);
    }

    /// `float`.
    pub fn float(&mut self, field: u32, value: f32) {
        self.fixed32(field, value.to_bits());
    }

    /// `double`.
    pub fn double(&mut self, field: u32, value: f64) {
        self.fixed64(field, value.to_bits());
    }

    /// `string`.
    pub fn string(&mut self, field: u32, value: &str) {
        self.bytes(field, value.as_bytes());
    }

    /// `bytes`.
    pub fn bytes(&mut self, field: u32, value: &[u8]) {
        self.tag(field, WireType::LengthDelimited);
        self.length_delimited(value);
    }

    /// Nested record. The child is encoded into its own buffer first so its
    /// length is known before the prefix is written.
    pub fn message<M: Message>(&mut self, field: u32, value: &M) {
        let mut nested = Writer::new();
        value.encode_raw(&mut nested);
        self.tag(field, WireType::LengthDelimited);
        self.length_delimited(&nested.buf);
    }

    /// Packed repeated `uint64`. An empty slice writes nothing.
    pub fn packed_uint64(&mut self, field: u32, values: &[u64]) {
        if values.is_empty() {
            return;
        }
        let mut packed = BytesMut::with_capacity(values.len() * 2);
        for &value in values {
            encode_varint(value, &mut packed);
        }
        self.tag(field, WireType::LengthDelimited);
        self.length_delimited(&packed);
    }
}
