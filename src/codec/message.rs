//! The per-record codec contract.

use std::fmt;

use bytes::Bytes;
use serde_json::Value;

use crate::error::{CodecError, Result};
use crate::wire::{Reader, WireType, Writer};

/// A record that maps between its native value, the binary wire format,
/// and JSON.
///
/// Implementors supply the field-level pieces ([`encode_raw`],
/// [`merge_field`], the JSON pair, and [`from_partial`]); framing and the
/// decode loop are provided.
///
/// [`encode_raw`]: Message::encode_raw
/// [`merge_field`]: Message::merge_field
/// [`from_partial`]: Message::from_partial
pub trait Message: Default + Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Companion struct where every field is optional.
    type Partial: Default;

    /// Append every non-default field, in declared order.
    fn encode_raw(&self, writer: &mut Writer);

    /// Apply one field read from the wire.
    ///
    /// Singular fields overwrite, repeated fields append. Undeclared field
    /// numbers must be skipped via [`Reader::skip_field`].
    fn merge_field(
        &mut self,
        field_number: u32,
        wire_type: WireType,
        reader: &mut Reader<'_>,
    ) -> Result<()>;

    /// Build a value from untyped JSON, defaulting absent or null keys.
    fn from_json(value: &Value) -> Result<Self>;

    /// Render as JSON, eliding default scalars.
    fn to_json(&self) -> Value;

    /// Build a value from a partial, defaulting missing fields.
    fn from_partial(partial: Self::Partial) -> Self;

    /// Encode into a fresh buffer.
    fn encode(&self) -> Bytes {
        let mut writer = Writer::new();
        self.encode_raw(&mut writer);
        writer.finish()
    }

    /// Encode into a `Vec<u8>`.
    fn encode_to_vec(&self) -> Vec<u8> {
        self.encode().to_vec()
    }

    /// Decode a whole buffer.
    fn decode(buf: &[u8]) -> Result<Self> {
        Self::decode_at(buf, 0, buf.len())
    }

    /// Decode the bytes in `buf[cursor..end]`.
    fn decode_at(buf: &[u8], cursor: usize, end: usize) -> Result<Self> {
        if cursor > end || end > buf.len() {
            return Err(CodecError::Framing(format!(
                "decode range {}..{} outside buffer of {} bytes",
                cursor,
                end,
                buf.len()
            )));
        }

        Self::decode_from(&mut Reader::new(&buf[cursor..end]))
    }

    /// Decode every field left in `reader`, starting from defaults.
    ///
    /// Nested records go through here with the parent's remaining depth
    /// budget; see [`Reader::message`].
    fn decode_from(reader: &mut Reader<'_>) -> Result<Self> {
        let mut msg = Self::default();
        while !reader.is_empty() {
            let (field_number, wire_type) = reader.read_tag()?;
            msg.merge_field(field_number, wire_type, reader)?;
        }
        Ok(msg)
    }

    /// Parse JSON text and build a value from it.
    fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }
}

/// A record that can travel inside `google.protobuf.Any`.
pub trait Name: Message {
    /// Fully-qualified type URL, e.g. `/cosmos.base.v1beta1.Coin`.
    const TYPE_URL: &'static str;
}
