//! `cosmos.tx.v1beta1` transaction envelopes.

use serde_json::Value;

use crate::codec::{Fields, JsonObject, Message};
use crate::error::Result;
use crate::types::google::{Any, AnyPartial};
use crate::wire::{Reader, WireType, Writer};

/// A signed transaction with its body and auth info kept as raw bytes, so
/// signatures verify over exactly what was signed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TxRaw {
    pub body_bytes: Vec<u8>,
    pub auth_info_bytes: Vec<u8>,
    pub signatures: Vec<Vec<u8>>,
}

/// [`TxRaw`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TxRawPartial {
    pub body_bytes: Option<Vec<u8>>,
    pub auth_info_bytes: Option<Vec<u8>>,
    pub signatures: Vec<Vec<u8>>,
}

impl TxRaw {
    /// Decode the embedded body.
    pub fn body(&self) -> Result<TxBody> {
        TxBody::decode(&self.body_bytes)
    }
}

impl Message for TxRaw {
    type Partial = TxRawPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.body_bytes.is_empty() {
            w.bytes(1, &self.body_bytes);
        }
        if !self.auth_info_bytes.is_empty() {
            w.bytes(2, &self.auth_info_bytes);
        }
        for signature in &self.signatures {
            w.bytes(3, signature);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.body_bytes = r.bytes(field, wt)?,
            2 => self.auth_info_bytes = r.bytes(field, wt)?,
            3 => self.signatures.push(r.bytes(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("TxRaw", value)?;
        Ok(Self {
            body_bytes: f.bytes("bodyBytes")?,
            auth_info_bytes: f.bytes("authInfoBytes")?,
            signatures: f.repeated_bytes("signatures")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .bytes("bodyBytes", &self.body_bytes)
            .bytes("authInfoBytes", &self.auth_info_bytes)
            .repeated_bytes("signatures", &self.signatures)
            .build()
    }

    fn from_partial(p: TxRawPartial) -> Self {
        Self {
            body_bytes: p.body_bytes.unwrap_or_default(),
            auth_info_bytes: p.auth_info_bytes.unwrap_or_default(),
            signatures: p.signatures,
        }
    }
}

/// Messages and options carried by a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TxBody {
    pub messages: Vec<Any>,
    pub memo: String,
    pub timeout_height: u64,
    pub extension_options: Vec<Any>,
    pub non_critical_extension_options: Vec<Any>,
}

/// [`TxBody`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TxBodyPartial {
    pub messages: Vec<AnyPartial>,
    pub memo: Option<String>,
    pub timeout_height: Option<u64>,
    pub extension_options: Vec<AnyPartial>,
    pub non_critical_extension_options: Vec<AnyPartial>,
}

impl Message for TxBody {
    type Partial = TxBodyPartial;

    fn encode_raw(&self, w: &mut Writer) {
        for msg in &self.messages {
            w.message(1, msg);
        }
        if !self.memo.is_empty() {
            w.string(2, &self.memo);
        }
        if self.timeout_height != 0 {
            w.uint64(3, self.timeout_height);
        }
        for option in &self.extension_options {
            w.message(1023, option);
        }
        for option in &self.non_critical_extension_options {
            w.message(2047, option);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.messages.push(r.message(field, wt)?),
            2 => self.memo = r.string(field, wt)?,
            3 => self.timeout_height = r.uint64(field, wt)?,
            1023 => self.extension_options.push(r.message(field, wt)?),
            2047 => self.non_critical_extension_options.push(r.message(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("TxBody", value)?;
        Ok(Self {
            messages: f.repeated_message("messages")?,
            memo: f.string("memo")?,
            timeout_height: f.uint64("timeoutHeight")?,
            extension_options: f.repeated_message("extensionOptions")?,
            non_critical_extension_options: f.repeated_message("nonCriticalExtensionOptions")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .repeated_message("messages", &self.messages)
            .string("memo", &self.memo)
            .uint64("timeoutHeight", self.timeout_height)
            .repeated_message("extensionOptions", &self.extension_options)
            .repeated_message(
                "nonCriticalExtensionOptions",
                &self.non_critical_extension_options,
            )
            .build()
    }

    fn from_partial(p: TxBodyPartial) -> Self {
        Self {
            messages: p.messages.into_iter().map(Any::from_partial).collect(),
            memo: p.memo.unwrap_or_default(),
            timeout_height: p.timeout_height.unwrap_or_default(),
            extension_options: p
                .extension_options
                .into_iter()
                .map(Any::from_partial)
                .collect(),
            non_critical_extension_options: p
                .non_critical_extension_options
                .into_iter()
                .map(Any::from_partial)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::MAX_SAFE_INTEGER;
    use serde_json::json;

    #[test]
    fn test_extension_options_use_two_byte_tags() {
        let body = TxBody {
            extension_options: vec![Any::default()],
            non_critical_extension_options: vec![Any::default()],
            ..Default::default()
        };
        // 1023 << 3 | 2 = 0x1FFA, 2047 << 3 | 2 = 0x3FFA
        assert_eq!(&body.encode()[..], &[0xFA, 0x3F, 0x00, 0xFA, 0x7F, 0x00]);
        assert_eq!(TxBody::decode(&body.encode()).unwrap(), body);
    }

    #[test]
    fn test_timeout_height_above_safe_range_fails_decode() {
        let body = TxBody {
            timeout_height: MAX_SAFE_INTEGER + 1,
            ..Default::default()
        };
        let err = TxBody::decode(&body.encode()).unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn test_tx_raw_repeated_bytes() {
        let body = TxBody {
            memo: "hello".to_string(),
            ..Default::default()
        };
        let raw = TxRaw {
            body_bytes: body.encode_to_vec(),
            auth_info_bytes: vec![],
            signatures: vec![vec![1, 2], vec![], vec![3]],
        };
        let decoded = TxRaw::decode(&raw.encode()).unwrap();
        assert_eq!(decoded, raw);
        assert_eq!(decoded.body().unwrap().memo, "hello");
    }

    #[test]
    fn test_tx_raw_json() {
        let raw = TxRaw {
            body_bytes: b"hi".to_vec(),
            ..Default::default()
        };
        assert_eq!(raw.to_json(), json!({"bodyBytes": "aGk=", "signatures": []}));
        assert_eq!(TxRaw::from_json(&raw.to_json()).unwrap(), raw);
    }
}
