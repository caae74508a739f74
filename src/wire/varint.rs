//! Base-128 varint encoding and the safe-integer boundary.
//!
//! ```text
//! 300 = 0b1_0010_1100
//!       ┌──────────┬──────────┐
//!       │ 1010_1100│ 0000_0010│
//!       │ low 7 | →│ high bits│
//!       └──────────┴──────────┘
//! ```
//!
//! Every byte except the last has its top bit set. Signed integers are
//! written as their two's-complement bit pattern (no zig-zag), so a negative
//! `int32` always takes the full 10 bytes.

use bytes::BufMut;

use crate::error::{CodecError, Result};

/// Longest possible varint (64 bits in 7-bit groups).
pub const MAX_VARINT_LEN: usize = 10;

/// Largest integer a 64-bit float represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Append `value` as a varint.
#[inline]
pub fn encode_varint(mut value: u64, buf: &mut impl BufMut) {
    while value >= 0x80 {
        buf.put_u8((value as u8) | 0x80);
        value >>= 7;
    }
    buf.put_u8(value as u8);
}

/// Read a varint starting at `cursor`.
///
/// Returns the value and the cursor just past its last byte.
///
/// # Example
///
/// ```
/// use sei_proto::wire::{decode_varint, encode_varint};
///
/// let mut buf = Vec::new();
/// encode_varint(300, &mut buf);
/// assert_eq!(buf, [0xAC, 0x02]);
/// assert_eq!(decode_varint(&buf, 0).unwrap(), (300, 2));
/// ```
pub fn decode_varint(buf: &[u8], cursor: usize) -> Result<(u64, usize)> {
    let mut value = 0u64;
    let mut pos = cursor;

    for shift in (0..64).step_by(7) {
        let byte = match buf.get(pos) {
            Some(&b) => b,
            None => {
                return Err(CodecError::Framing(format!(
                    "buffer exhausted inside varint starting at offset {}",
                    cursor
                )))
            }
        };
        pos += 1;

        // Tenth byte may only contribute the single remaining bit.
        if shift == 63 && byte > 1 {
            break;
        }

        value |= u64::from(byte & 0x7F) << shift;
        if byte & 0x80 == 0 {
            return Ok((value, pos));
        }
    }

    Err(CodecError::Framing(format!(
        "varint at offset {} exceeds 64 bits",
        cursor
    )))
}

/// Number of bytes `value` occupies as a varint.
#[inline]
pub fn encoded_len_varint(value: u64) -> usize {
    // 1 byte per 7 significant bits, minimum 1.
    let bits = 64 - (value | 1).leading_zeros() as usize;
    bits.div_ceil(7)
}

/// Check that an unsigned 64-bit value survives conversion to a
/// double-backed number.
///
/// Fails with [`CodecError::Range`] above [`MAX_SAFE_INTEGER`].
pub fn to_safe_number(value: u64) -> Result<u64> {
    if value > MAX_SAFE_INTEGER {
        return Err(CodecError::Range {
            value: value.to_string(),
        });
    }
    Ok(value)
}

/// Signed counterpart of [`to_safe_number`]: the magnitude must not exceed
/// [`MAX_SAFE_INTEGER`].
pub fn to_safe_signed(value: i64) -> Result<i64> {
    if value.unsigned_abs() > MAX_SAFE_INTEGER {
        return Err(CodecError::Range {
            value: value.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: u64) -> Vec<u8> {
        let mut buf = Vec::new();
        encode_varint(value, &mut buf);
        buf
    }

    #[test]
    fn test_single_byte_values() {
        assert_eq!(encode(0), vec![0x00]);
        assert_eq!(encode(1), vec![0x01]);
        assert_eq!(encode(127), vec![0x7F]);
    }

    #[test]
    fn test_multi_byte_values() {
        assert_eq!(encode(128), vec![0x80, 0x01]);
        assert_eq!(encode(300), vec![0xAC, 0x02]);
        assert_eq!(encode(16_384), vec![0x80, 0x80, 0x01]);
    }

    #[test]
    fn test_u64_max_takes_ten_bytes() {
        let bytes = encode(u64::MAX);
        assert_eq!(bytes.len(), MAX_VARINT_LEN);
        assert_eq!(bytes[9], 0x01);
        assert_eq!(decode_varint(&bytes, 0).unwrap(), (u64::MAX, 10));
    }

    #[test]
    fn test_negative_int32_is_sign_extended() {
        let bytes = encode(-1i32 as i64 as u64);
        assert_eq!(
            bytes,
            vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]
        );

        let (raw, _) = decode_varint(&bytes, 0).unwrap();
        assert_eq!(raw as i32, -1);
        assert_eq!(raw as i64, -1);
    }

    #[test]
    fn test_decode_from_cursor() {
        let buf = [0xFF, 0xAC, 0x02, 0x05];
        assert_eq!(decode_varint(&buf, 1).unwrap(), (300, 3));
        assert_eq!(decode_varint(&buf, 3).unwrap(), (5, 4));
    }

    #[test]
    fn test_truncated_varint_is_framing_error() {
        let err = decode_varint(&[0x80, 0x80], 0).unwrap_err();
        assert!(err.is_framing());
        assert!(err.to_string().contains("exhausted"));

        assert!(decode_varint(&[], 0).unwrap_err().is_framing());
    }

    #[test]
    fn test_overlong_varint_rejected() {
        let buf = [0xFF; 11];
        let err = decode_varint(&buf, 0).unwrap_err();
        assert!(err.to_string().contains("exceeds 64 bits"));

        // Tenth byte carrying more than one bit also overflows.
        let mut buf = [0xFF; 10];
        buf[9] = 0x02;
        assert!(decode_varint(&buf, 0).is_err());
    }

    #[test]
    fn test_encoded_len_matches_encoding() {
        for value in [0, 1, 127, 128, 300, 16_383, 16_384, u32::MAX as u64, u64::MAX] {
            assert_eq!(encoded_len_varint(value), encode(value).len(), "{}", value);
        }
    }

    #[test]
    fn test_safe_number_boundary() {
        assert_eq!(to_safe_number(MAX_SAFE_INTEGER).unwrap(), MAX_SAFE_INTEGER);

        let err = to_safe_number(MAX_SAFE_INTEGER + 1).unwrap_err();
        assert!(err.is_range());
        assert!(err
            .to_string()
            .contains("exceeds safely representable integer range"));
    }

    #[test]
    fn test_safe_signed_boundary() {
        let max = MAX_SAFE_INTEGER as i64;
        assert_eq!(to_safe_signed(max).unwrap(), max);
        assert_eq!(to_safe_signed(-max).unwrap(), -max);
        assert!(to_safe_signed(max + 1).unwrap_err().is_range());
        assert!(to_safe_signed(-max - 1).unwrap_err().is_range());
        assert!(to_safe_signed(i64::MIN).unwrap_err().is_range());
    }
}
