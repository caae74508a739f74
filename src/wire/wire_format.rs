//! Tag framing: field number and wire type packed into one varint.
//!
//! ```text
//! ┌────────────────────────────┬───────────┐
//! │ field number               │ wire type │
//! │ bits 3..32                 │ bits 0..3 │
//! └────────────────────────────┴───────────┘
//! ```
//!
//! The tag itself travels as a varint, so field numbers above 15 take more
//! than one byte.

use crate::error::{CodecError, Result};

/// Smallest valid field number (0 is reserved).
pub const MIN_FIELD_NUMBER: u32 = 1;

/// Largest valid field number (2^29 - 1).
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// Mask selecting the wire type bits of a tag.
pub const WIRE_TYPE_MASK: u32 = 0b111;

/// Number of bits the field number is shifted by.
pub const TAG_TYPE_BITS: u32 = 3;

/// How a field's payload is framed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireType {
    /// int32, int64, uint32, uint64, bool, enum.
    Varint = 0,
    /// fixed64, double.
    Fixed64 = 1,
    /// string, bytes, nested records, packed repeated scalars.
    LengthDelimited = 2,
    /// Deprecated group start; only ever skipped.
    StartGroup = 3,
    /// Deprecated group end; only ever skipped.
    EndGroup = 4,
    /// fixed32, float.
    Fixed32 = 5,
}

impl TryFrom<u32> for WireType {
    type Error = CodecError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Self::Varint),
            1 => Ok(Self::Fixed64),
            2 => Ok(Self::LengthDelimited),
            3 => Ok(Self::StartGroup),
            4 => Ok(Self::EndGroup),
            5 => Ok(Self::Fixed32),
            other => Err(CodecError::Framing(format!("invalid wire type {}", other))),
        }
    }
}

/// Compose a tag from field number and wire type.
///
/// # Example
///
/// ```
/// use sei_proto::wire::{tag, WireType};
///
/// assert_eq!(tag(1, WireType::Varint), 0x08);
/// assert_eq!(tag(3, WireType::LengthDelimited), 0x1A);
/// ```
#[inline]
pub fn tag(field_number: u32, wire_type: WireType) -> u32 {
    debug_assert!((MIN_FIELD_NUMBER..=MAX_FIELD_NUMBER).contains(&field_number));
    (field_number << TAG_TYPE_BITS) | wire_type as u32
}

/// Split a tag into `(field_number, raw_wire_type)`.
#[inline]
pub fn decompose_tag(tag: u32) -> (u32, u32) {
    (tag >> TAG_TYPE_BITS, tag & WIRE_TYPE_MASK)
}

/// Split and validate a tag read from the wire.
///
/// Field number 0 and wire types 6/7 never appear in well-formed input.
pub fn parse_tag(raw: u64) -> Result<(u32, WireType)> {
    let raw = u32::try_from(raw)
        .map_err(|_| CodecError::Framing(format!("tag {} does not fit in 32 bits", raw)))?;
    let (field_number, wire_type) = decompose_tag(raw);
    if field_number < MIN_FIELD_NUMBER {
        return Err(CodecError::Framing("field number 0 is reserved".to_string()));
    }
    Ok((field_number, WireType::try_from(wire_type)?))
}

/// Fail unless a known field arrived with its declared wire type.
#[inline]
pub fn check_wire_type(field_number: u32, expected: WireType, actual: WireType) -> Result<()> {
    if expected != actual {
        return Err(CodecError::Framing(format!(
            "field {} expected wire type {:?}, got {:?}",
            field_number, expected, actual
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_composition() {
        assert_eq!(tag(1, WireType::Varint), 8);
        assert_eq!(tag(2, WireType::Varint), 16);
        assert_eq!(tag(3, WireType::LengthDelimited), 26);
        assert_eq!(tag(1, WireType::Fixed64), 9);
        assert_eq!(tag(1, WireType::Fixed32), 13);
        assert_eq!(tag(1023, WireType::LengthDelimited), 8186);
    }

    #[test]
    fn test_decompose_inverts_tag() {
        for field in [1, 2, 15, 16, 1023, 2047, MAX_FIELD_NUMBER] {
            for wire_type in [
                WireType::Varint,
                WireType::Fixed64,
                WireType::LengthDelimited,
                WireType::Fixed32,
            ] {
                let (f, w) = decompose_tag(tag(field, wire_type));
                assert_eq!(f, field);
                assert_eq!(w, wire_type as u32);
            }
        }
    }

    #[test]
    fn test_parse_tag_rejects_field_zero() {
        let err = parse_tag(0x02).unwrap_err();
        assert!(err.is_framing());
        assert!(err.to_string().contains("field number 0"));
    }

    #[test]
    fn test_parse_tag_rejects_invalid_wire_types() {
        assert!(parse_tag(0x0E).is_err()); // field 1, wire type 6
        assert!(parse_tag(0x0F).is_err()); // field 1, wire type 7
    }

    #[test]
    fn test_parse_tag_rejects_oversized_tag() {
        assert!(parse_tag(u64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_check_wire_type() {
        assert!(check_wire_type(1, WireType::Varint, WireType::Varint).is_ok());
        let err = check_wire_type(4, WireType::Varint, WireType::LengthDelimited).unwrap_err();
        assert!(err.to_string().contains("field 4"));
    }
}
