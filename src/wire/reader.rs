//! Cursor-based reader over an encoded message.
//!
//! Low-level reads (`read_*`) consume raw wire values. Field reads
//! (`int32`, `string`, `message`, ...) additionally check that the field
//! arrived with its declared wire type and apply the scalar conversion the
//! field kind requires, including the safe-integer check on 64-bit fields.
//!
//! # Example
//!
//! ```
//! use sei_proto::wire::{Reader, WireType};
//!
//! let bytes = [0x08, 0x96, 0x01];
//! let mut reader = Reader::new(&bytes);
//! let (field, wire_type) = reader.read_tag().unwrap();
//! assert_eq!((field, wire_type), (1, WireType::Varint));
//! assert_eq!(reader.uint32(field, wire_type).unwrap(), 150);
//! assert!(reader.is_empty());
//! ```

use super::varint::{decode_varint, to_safe_number, to_safe_signed};
use super::wire_format::{check_wire_type, parse_tag, WireType};
use crate::codec::{Enumeration, Message};
use crate::error::{CodecError, Result};

/// Maximum nesting of records and groups below a top-level decode.
pub const RECURSION_LIMIT: u32 = 100;

fn recursion_limit_exceeded() -> CodecError {
    CodecError::Framing(format!("recursion limit of {} exceeded", RECURSION_LIMIT))
}

/// Reader over a byte slice with an explicit cursor.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
    /// Nesting levels still allowed below this reader.
    depth: u32,
}

impl<'a> Reader<'a> {
    /// Create a reader positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            depth: RECURSION_LIMIT,
        }
    }

    /// Reader for a nested payload, one level deeper than `self`.
    fn nested(&self, buf: &'a [u8]) -> Result<Self> {
        let depth = self.depth.checked_sub(1).ok_or_else(recursion_limit_exceeded)?;
        Ok(Self { buf, pos: 0, depth })
    }

    /// Nesting levels still allowed below this reader.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Current cursor.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Total buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Bytes left after the cursor.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// True once every byte has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(CodecError::truncated(n, self.remaining()));
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    // Raw wire values

    /// Read one varint.
    pub fn read_varint(&mut self) -> Result<u64> {
        let (value, pos) = decode_varint(self.buf, self.pos)?;
        self.pos = pos;
        Ok(value)
    }

    /// Read and validate a field tag.
    pub fn read_tag(&mut self) -> Result<(u32, WireType)> {
        parse_tag(self.read_varint()?)
    }

    /// Read a little-endian 32-bit value.
    pub fn read_fixed32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a little-endian 64-bit value.
    pub fn read_fixed64(&mut self) -> Result<u64> {
        let b = self.take(8)?;
        Ok(u64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    /// Read a length prefix and return the payload it frames.
    pub fn read_length_delimited(&mut self) -> Result<&'a [u8]> {
        let len = self.read_varint()?;
        let len = usize::try_from(len)
            .map_err(|_| CodecError::Framing(format!("length {} overflows usize", len)))?;
        self.take(len)
    }

    /// Consume one field payload of the given wire type without decoding it.
    pub fn skip(&mut self, wire_type: WireType) -> Result<()> {
        match wire_type {
            WireType::Varint => {
                self.read_varint()?;
            }
            WireType::Fixed64 => {
                self.take(8)?;
            }
            WireType::LengthDelimited => {
                self.read_length_delimited()?;
            }
            WireType::Fixed32 => {
                self.take(4)?;
            }
            WireType::StartGroup => {
                if self.depth == 0 {
                    return Err(recursion_limit_exceeded());
                }
                let mut open: u32 = 1;
                while open > 0 {
                    match self.read_tag()?.1 {
                        WireType::StartGroup => {
                            if open >= self.depth {
                                return Err(recursion_limit_exceeded());
                            }
                            open += 1;
                        }
                        WireType::EndGroup => open -= 1,
                        inner => self.skip(inner)?,
                    }
                }
            }
            WireType::EndGroup => {
                return Err(CodecError::Framing(
                    "end-group tag without matching start".to_string(),
                ))
            }
        }
        Ok(())
    }

    /// Skip a field the record does not declare.
    pub fn skip_field(&mut self, field: u32, wire_type: WireType) -> Result<()> {
        tracing::trace!(field, ?wire_type, "skipping unknown field");
        self.skip(wire_type)
    }

    // Field reads

    /// `int32`: two's-complement varint truncated to 32 bits.
    pub fn int32(&mut self, field: u32, wire_type: WireType) -> Result<i32> {
        check_wire_type(field, WireType::Varint, wire_type)?;
        Ok(self.read_varint()? as i32)
    }

    /// `int64`: two's-complement varint, bounded to the safe range.
    pub fn int64(&mut self, field: u32, wire_type: WireType) -> Result<i64> {
        check_wire_type(field, WireType::Varint, wire_type)?;
        to_safe_signed(self.read_varint()? as i64)
    }

    /// `uint32`: varint truncated to 32 bits.
    pub fn uint32(&mut self, field: u32, wire_type: WireType) -> Result<u32> {
        check_wire_type(field, WireType::Varint, wire_type)?;
        Ok(self.read_varint()? as u32)
    }

    /// `uint64`: varint bounded to the safe range.
    pub fn uint64(&mut self, field: u32, wire_type: WireType) -> Result<u64> {
        check_wire_type(field, WireType::Varint, wire_type)?;
        to_safe_number(self.read_varint()?)
    }

    /// `bool`: any non-zero varint is true.
    pub fn bool(&mut self, field: u32, wire_type: WireType) -> Result<bool> {
        check_wire_type(field, WireType::Varint, wire_type)?;
        Ok(self.read_varint()? != 0)
    }

    /// Enum field; unknown ordinals map to the type's sentinel.
    pub fn enumeration<E: Enumeration>(&mut self, field: u32, wire_type: WireType) -> Result<E> {
        Ok(E::from_i32(self.int32(field, wire_type)?))
    }

    /// `fixed32`.
    pub fn fixed32(&mut self, field: u32, wire_type: WireType) -> Result<u32> {
        check_wire_type(field, WireType::Fixed32, wire_type)?;
        self.read_fixed32()
    }

    /// `fixed64`.
    pub fn fixed64(&mut self, field: u32, wire_type: WireType) -> Result<u64> {
        check_wire_type(field, WireType::Fixed64, wire_type)?;
        self.read_fixed64()
    }

    /// `float`.
    pub fn float(&mut self, field: u32, wire_type: WireType) -> Result<f32> {
        Ok(f32::from_bits(self.fixed32(field, wire_type)?))
    }

    /// `double`.
    pub fn double(&mut self, field: u32, wire_type: WireType) -> Result<f64> {
        Ok(f64::from_bits(self.fixed64(field, wire_type)?))
    }

    /// `string`.
    pub fn string(&mut self, field: u32, wire_type: WireType) -> Result<String> {
        check_wire_type(field, WireType::LengthDelimited, wire_type)?;
        Ok(std::str::from_utf8(self.read_length_delimited()?)?.to_owned())
    }

    /// `bytes`.
    pub fn bytes(&mut self, field: u32, wire_type: WireType) -> Result<Vec<u8>> {
        check_wire_type(field, WireType::LengthDelimited, wire_type)?;
        Ok(self.read_length_delimited()?.to_vec())
    }

    /// Nested record. The payload is decoded in isolation, so a malformed
    /// child can never read into its parent's bytes. Fails once nesting
    /// passes [`RECURSION_LIMIT`].
    pub fn message<M: Message>(&mut self, field: u32, wire_type: WireType) -> Result<M> {
        check_wire_type(field, WireType::LengthDelimited, wire_type)?;
        let payload = self.read_length_delimited()?;
        M::decode_from(&mut self.nested(payload)?)
    }

    /// Repeated `uint64`, accepting both packed and unpacked encodings.
    pub fn repeated_uint64(
        &mut self,
        field: u32,
        wire_type: WireType,
        dst: &mut Vec<u64>,
    ) -> Result<()> {
        match wire_type {
            WireType::LengthDelimited => {
                let mut packed = Reader::new(self.read_length_delimited()?);
                while !packed.is_empty() {
                    dst.push(to_safe_number(packed.read_varint()?)?);
                }
                Ok(())
            }
            _ => {
                dst.push(self.uint64(field, wire_type)?);
                Ok(())
            }
        }
    }
}
