//! `cosmos.crypto.multisig.v1beta1` bit array used by multisig signatures.

use serde_json::Value;

use crate::codec::{Fields, JsonObject, Message};
use crate::error::Result;
use crate::wire::{Reader, WireType, Writer};

/// Space-efficient bit array. `extra_bits_stored` counts the bits used in
/// the last byte of `elems` (0 means the byte is fully used).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompactBitArray {
    pub extra_bits_stored: u32,
    pub elems: Vec<u8>,
}

/// [`CompactBitArray`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompactBitArrayPartial {
    pub extra_bits_stored: Option<u32>,
    pub elems: Option<Vec<u8>>,
}

impl CompactBitArray {
    /// Number of addressable bits.
    pub fn len(&self) -> usize {
        match (self.elems.len(), self.extra_bits_stored) {
            (0, _) => 0,
            (n, 0) => n * 8,
            (n, extra) => (n - 1) * 8 + extra as usize,
        }
    }

    /// True when no bits are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bit `index`, most significant bit of each byte first.
    pub fn get(&self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.elems[index >> 3] & (1 << (7 - (index % 8))) != 0
    }
}

impl Message for CompactBitArray {
    type Partial = CompactBitArrayPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if self.extra_bits_stored != 0 {
            w.uint32(1, self.extra_bits_stored);
        }
        if !self.elems.is_empty() {
            w.bytes(2, &self.elems);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.extra_bits_stored = r.uint32(field, wt)?,
            2 => self.elems = r.bytes(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("CompactBitArray", value)?;
        Ok(Self {
            extra_bits_stored: f.uint32("extraBitsStored")?,
            elems: f.bytes("elems")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .uint32("extraBitsStored", self.extra_bits_stored)
            .bytes("elems", &self.elems)
            .build()
    }

    fn from_partial(p: CompactBitArrayPartial) -> Self {
        Self {
            extra_bits_stored: p.extra_bits_stored.unwrap_or_default(),
            elems: p.elems.unwrap_or_default(),
        }
    }
}
