//! `cosmwasm.wasm.v1` code and contract metadata. JSON keys keep the
//! declared snake_case names.

use serde_json::Value;

use crate::codec::{Enumeration, Fields, JsonObject, Message};
use crate::error::Result;
use crate::proto_enum;
use crate::wire::{Reader, WireType, Writer};

proto_enum! {
    /// Who may instantiate a stored code.
    pub enum AccessType {
        Unspecified = 0 => "ACCESS_TYPE_UNSPECIFIED",
        Nobody = 1 => "ACCESS_TYPE_NOBODY",
        OnlyAddress = 2 => "ACCESS_TYPE_ONLY_ADDRESS",
        Everybody = 3 => "ACCESS_TYPE_EVERYBODY",
    }
}

proto_enum! {
    /// How a contract reached a code id.
    pub enum ContractCodeHistoryOperationType {
        Unspecified = 0 => "CONTRACT_CODE_HISTORY_OPERATION_TYPE_UNSPECIFIED",
        Init = 1 => "CONTRACT_CODE_HISTORY_OPERATION_TYPE_INIT",
        Migrate = 2 => "CONTRACT_CODE_HISTORY_OPERATION_TYPE_MIGRATE",
        Genesis = 3 => "CONTRACT_CODE_HISTORY_OPERATION_TYPE_GENESIS",
    }
}

/// Who may instantiate a code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessConfig {
    pub permission: AccessType,
    /// Only meaningful with [`AccessType::OnlyAddress`].
    pub address: String,
}

/// [`AccessConfig`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessConfigPartial {
    pub permission: Option<AccessType>,
    pub address: Option<String>,
}

impl Message for AccessConfig {
    type Partial = AccessConfigPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.permission.is_default() {
            w.enumeration(1, self.permission);
        }
        if !self.address.is_empty() {
            w.string(2, &self.address);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.permission = r.enumeration(field, wt)?,
            2 => self.address = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("AccessConfig", value)?;
        Ok(Self {
            permission: f.enumeration("permission"),
            address: f.string("address")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .enumeration("permission", self.permission)
            .string("address", &self.address)
            .build()
    }

    fn from_partial(p: AccessConfigPartial) -> Self {
        Self {
            permission: p.permission.unwrap_or_default(),
            address: p.address.unwrap_or_default(),
        }
    }
}

/// Metadata of uploaded wasm code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeInfo {
    pub code_hash: Vec<u8>,
    pub creator: String,
    pub instantiate_config: Option<AccessConfig>,
}

/// [`CodeInfo`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeInfoPartial {
    pub code_hash: Option<Vec<u8>>,
    pub creator: Option<String>,
    pub instantiate_config: Option<AccessConfigPartial>,
}

impl Message for CodeInfo {
    type Partial = CodeInfoPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.code_hash.is_empty() {
            w.bytes(1, &self.code_hash);
        }
        if !self.creator.is_empty() {
            w.string(2, &self.creator);
        }
        // Fields 3 and 4 are retired.
        if let Some(config) = &self.instantiate_config {
            w.message(5, config);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.code_hash = r.bytes(field, wt)?,
            2 => self.creator = r.string(field, wt)?,
            5 => self.instantiate_config = Some(r.message(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("CodeInfo", value)?;
        Ok(Self {
            code_hash: f.bytes("code_hash")?,
            creator: f.string("creator")?,
            instantiate_config: f.message("instantiate_config")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .bytes("code_hash", &self.code_hash)
            .string("creator", &self.creator)
            .message("instantiate_config", self.instantiate_config.as_ref())
            .build()
    }

    fn from_partial(p: CodeInfoPartial) -> Self {
        Self {
            code_hash: p.code_hash.unwrap_or_default(),
            creator: p.creator.unwrap_or_default(),
            instantiate_config: p.instantiate_config.map(AccessConfig::from_partial),
        }
    }
}

/// Global position of a transaction: block height, then index in block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct AbsoluteTxPosition {
    pub block_height: u64,
    pub tx_index: u64,
}

/// [`AbsoluteTxPosition`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbsoluteTxPositionPartial {
    pub block_height: Option<u64>,
    pub tx_index: Option<u64>,
}

impl Message for AbsoluteTxPosition {
    type Partial = AbsoluteTxPositionPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if self.block_height != 0 {
            w.uint64(1, self.block_height);
        }
        if self.tx_index != 0 {
            w.uint64(2, self.tx_index);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.block_height = r.uint64(field, wt)?,
            2 => self.tx_index = r.uint64(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("AbsoluteTxPosition", value)?;
        Ok(Self {
            block_height: f.uint64("block_height")?,
            tx_index: f.uint64("tx_index")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .uint64("block_height", self.block_height)
            .uint64("tx_index", self.tx_index)
            .build()
    }

    fn from_partial(p: AbsoluteTxPositionPartial) -> Self {
        Self {
            block_height: p.block_height.unwrap_or_default(),
            tx_index: p.tx_index.unwrap_or_default(),
        }
    }
}

/// One code change in a contract's history.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContractCodeHistoryEntry {
    pub operation: ContractCodeHistoryOperationType,
    pub code_id: u64,
    pub updated: Option<AbsoluteTxPosition>,
    /// Raw JSON message passed to init or migrate.
    pub msg: Vec<u8>,
}

/// [`ContractCodeHistoryEntry`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractCodeHistoryEntryPartial {
    pub operation: Option<ContractCodeHistoryOperationType>,
    pub code_id: Option<u64>,
    pub updated: Option<AbsoluteTxPositionPartial>,
    pub msg: Option<Vec<u8>>,
}

impl Message for ContractCodeHistoryEntry {
    type Partial = ContractCodeHistoryEntryPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.operation.is_default() {
            w.enumeration(1, self.operation);
        }
        if self.code_id != 0 {
            w.uint64(2, self.code_id);
        }
        if let Some(updated) = &self.updated {
            w.message(3, updated);
        }
        if !self.msg.is_empty() {
            w.bytes(4, &self.msg);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.operation = r.enumeration(field, wt)?,
            2 => self.code_id = r.uint64(field, wt)?,
            3 => self.updated = Some(r.message(field, wt)?),
            4 => self.msg = r.bytes(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("ContractCodeHistoryEntry", value)?;
        Ok(Self {
            operation: f.enumeration("operation"),
            code_id: f.uint64("code_id")?,
            updated: f.message("updated")?,
            msg: f.bytes("msg")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .enumeration("operation", self.operation)
            .uint64("code_id", self.code_id)
            .message("updated", self.updated.as_ref())
            .bytes("msg", &self.msg)
            .build()
    }

    fn from_partial(p: ContractCodeHistoryEntryPartial) -> Self {
        Self {
            operation: p.operation.unwrap_or_default(),
            code_id: p.code_id.unwrap_or_default(),
            updated: p.updated.map(AbsoluteTxPosition::from_partial),
            msg: p.msg.unwrap_or_default(),
        }
    }
}

/// A raw key/value pair from contract state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Model {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

/// [`Model`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelPartial {
    pub key: Option<Vec<u8>>,
    pub value: Option<Vec<u8>>,
}

impl Message for Model {
    type Partial = ModelPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.key.is_empty() {
            w.bytes(1, &self.key);
        }
        if !self.value.is_empty() {
            w.bytes(2, &self.value);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.key = r.bytes(field, wt)?,
            2 => self.value = r.bytes(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("Model", value)?;
        Ok(Self {
            key: f.bytes("key")?,
            value: f.bytes("value")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .bytes("key", &self.key)
            .bytes("value", &self.value)
            .build()
    }

    fn from_partial(p: ModelPartial) -> Self {
        Self {
            key: p.key.unwrap_or_default(),
            value: p.value.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_code_info_skips_retired_fields() {
        let info = CodeInfo {
            code_hash: vec![0xAB],
            creator: "sei1".to_string(),
            instantiate_config: Some(AccessConfig {
                permission: AccessType::Everybody,
                address: String::new(),
            }),
        };
        let bytes = info.encode();
        assert_eq!(
            &bytes[..],
            &[0x0A, 0x01, 0xAB, 0x12, 0x04, b's', b'e', b'i', b'1', 0x2A, 0x02, 0x08, 0x03]
        );

        // same payload with a retired field 3 string spliced in
        let mut legacy = vec![0x1A, 0x01, b'x'];
        legacy.extend_from_slice(&bytes);
        assert_eq!(CodeInfo::decode(&legacy).unwrap(), info);
    }

    #[test]
    fn test_history_entry_snake_case_json() {
        let entry = ContractCodeHistoryEntry {
            operation: ContractCodeHistoryOperationType::Migrate,
            code_id: 7,
            updated: Some(AbsoluteTxPosition {
                block_height: 100,
                tx_index: 0,
            }),
            msg: b"{}".to_vec(),
        };
        let value = entry.to_json();
        assert_eq!(
            value,
            json!({
                "operation": "CONTRACT_CODE_HISTORY_OPERATION_TYPE_MIGRATE",
                "code_id": 7,
                "updated": {"block_height": 100},
                "msg": "e30="
            })
        );
        assert_eq!(ContractCodeHistoryEntry::from_json(&value).unwrap(), entry);
        assert_eq!(
            ContractCodeHistoryEntry::decode(&entry.encode()).unwrap(),
            entry
        );
    }

    #[test]
    fn test_tx_position_ordering() {
        let a = AbsoluteTxPosition {
            block_height: 1,
            tx_index: 9,
        };
        let b = AbsoluteTxPosition {
            block_height: 2,
            tx_index: 0,
        };
        assert!(a < b);
    }

    #[test]
    fn test_model_rejects_bad_base64() {
        let err = Model::from_json(&json!({"key": "%%%"})).unwrap_err();
        assert!(err.is_validation());
    }
}
