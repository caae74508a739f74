//! `cosmos.accesscontrol.v1beta1`: declared state access for parallel
//! transaction execution.

use serde_json::Value;

use crate::codec::{Enumeration, Fields, JsonObject, Message, Name};
use crate::error::Result;
use crate::proto_enum;
use crate::wire::{Reader, WireType, Writer};

proto_enum! {
    /// Kind of access an operation performs.
    pub enum AccessType {
        Unknown = 0 => "UNKNOWN",
        Read = 1 => "READ",
        Write = 2 => "WRITE",
        Commit = 3 => "COMMIT",
    }
}

proto_enum! {
    /// How a wasm access operation's identifier is derived from the message.
    pub enum AccessOperationSelectorType {
        None = 0 => "NONE",
        Jq = 1 => "JQ",
        JqBech32Address = 2 => "JQ_BECH32_ADDRESS",
        JqLengthPrefixedAddress = 3 => "JQ_LENGTH_PREFIXED_ADDRESS",
        SenderBech32Address = 4 => "SENDER_BECH32_ADDRESS",
        SenderLengthPrefixedAddress = 5 => "SENDER_LENGTH_PREFIXED_ADDRESS",
        ContractAddress = 6 => "CONTRACT_ADDRESS",
        JqMessageConditional = 7 => "JQ_MESSAGE_CONDITIONAL",
        ConstantStringToHex = 8 => "CONSTANT_STRING_TO_HEX",
        ContractReference = 9 => "CONTRACT_REFERENCE",
    }
}

proto_enum! {
    /// Whether a wasm message is a query or an execute.
    pub enum WasmMessageSubtype {
        Query = 0 => "QUERY",
        Execute = 1 => "EXECUTE",
    }
}

proto_enum! {
    /// Store or memory region an operation touches.
    pub enum ResourceType {
        Any = 0 => "ANY",
        Kv = 1 => "KV",
        Mem = 2 => "Mem",
        DexMem = 3 => "DexMem",
        KvBank = 4 => "KV_BANK",
        KvStaking = 5 => "KV_STAKING",
        KvWasm = 6 => "KV_WASM",
        KvOracle = 7 => "KV_ORACLE",
        KvDex = 8 => "KV_DEX",
        KvEpoch = 9 => "KV_EPOCH",
        KvTokenfactory = 10 => "KV_TOKENFACTORY",
        KvOracleVoteTargets = 11 => "KV_ORACLE_VOTE_TARGETS",
        KvOracleAggregateVotes = 12 => "KV_ORACLE_AGGREGATE_VOTES",
        KvOracleFeeders = 13 => "KV_ORACLE_FEEDERS",
        KvStakingDelegation = 14 => "KV_STAKING_DELEGATION",
        KvStakingValidator = 15 => "KV_STAKING_VALIDATOR",
        KvAuth = 16 => "KV_AUTH",
        KvAuthAddressStore = 17 => "KV_AUTH_ADDRESS_STORE",
        KvBankSupply = 18 => "KV_BANK_SUPPLY",
        KvBankDenom = 19 => "KV_BANK_DENOM",
        KvBankBalances = 20 => "KV_BANK_BALANCES",
        KvTokenfactoryDenom = 21 => "KV_TOKENFACTORY_DENOM",
        KvTokenfactoryMetadata = 22 => "KV_TOKENFACTORY_METADATA",
        KvTokenfactoryAdmin = 23 => "KV_TOKENFACTORY_ADMIN",
        KvTokenfactoryCreator = 24 => "KV_TOKENFACTORY_CREATOR",
        KvOracleExchangeRate = 25 => "KV_ORACLE_EXCHANGE_RATE",
        KvOracleVotePenaltyCounter = 26 => "KV_ORACLE_VOTE_PENALTY_COUNTER",
        KvOraclePriceSnapshot = 27 => "KV_ORACLE_PRICE_SNAPSHOT",
        KvStakingValidationPower = 28 => "KV_STAKING_VALIDATION_POWER",
        KvStakingTotalPower = 29 => "KV_STAKING_TOTAL_POWER",
        KvStakingValidatorsConAddr = 30 => "KV_STAKING_VALIDATORS_CON_ADDR",
        KvStakingUnbondingDelegation = 31 => "KV_STAKING_UNBONDING_DELEGATION",
        KvStakingUnbondingDelegationVal = 32 => "KV_STAKING_UNBONDING_DELEGATION_VAL",
        KvStakingRedelegation = 33 => "KV_STAKING_REDELEGATION",
        KvStakingRedelegationValSrc = 34 => "KV_STAKING_REDELEGATION_VAL_SRC",
        KvStakingRedelegationValDst = 35 => "KV_STAKING_REDELEGATION_VAL_DST",
        KvStakingRedelegationQueue = 36 => "KV_STAKING_REDELEGATION_QUEUE",
        KvStakingValidatorQueue = 37 => "KV_STAKING_VALIDATOR_QUEUE",
        KvStakingHistoricalInfo = 38 => "KV_STAKING_HISTORICAL_INFO",
        KvStakingUnbonding = 39 => "KV_STAKING_UNBONDING",
        KvStakingValidatorsByPower = 41 => "KV_STAKING_VALIDATORS_BY_POWER",
        KvDistribution = 40 => "KV_DISTRIBUTION",
        KvDistributionFeePool = 42 => "KV_DISTRIBUTION_FEE_POOL",
        KvDistributionProposerKey = 43 => "KV_DISTRIBUTION_PROPOSER_KEY",
        KvDistributionOutstandingRewards = 44 => "KV_DISTRIBUTION_OUTSTANDING_REWARDS",
        KvDistributionDelegatorWithdrawAddr = 45 => "KV_DISTRIBUTION_DELEGATOR_WITHDRAW_ADDR",
        KvDistributionDelegatorStartingInfo = 46 => "KV_DISTRIBUTION_DELEGATOR_STARTING_INFO",
        KvDistributionValHistoricalRewards = 47 => "KV_DISTRIBUTION_VAL_HISTORICAL_REWARDS",
        KvDistributionValCurrentRewards = 48 => "KV_DISTRIBUTION_VAL_CURRENT_REWARDS",
        KvDistributionValAccumCommission = 49 => "KV_DISTRIBUTION_VAL_ACCUM_COMMISSION",
        KvDistributionSlashEvent = 50 => "KV_DISTRIBUTION_SLASH_EVENT",
        KvDexContractLongbook = 51 => "KV_DEX_CONTRACT_LONGBOOK",
        KvDexContractShortbook = 52 => "KV_DEX_CONTRACT_SHORTBOOK",
        KvDexSettlement = 53 => "KV_DEX_SETTLEMENT",
        KvDexPairPrefix = 54 => "KV_DEX_PAIR_PREFIX",
        KvDexTwap = 55 => "KV_DEX_TWAP",
        KvDexPrice = 56 => "KV_DEX_PRICE",
        KvDexSettlementEntry = 57 => "KV_DEX_SETTLEMENT_ENTRY",
        KvDexRegisteredPair = 58 => "KV_DEX_REGISTERED_PAIR",
        KvDexOrder = 60 => "KV_DEX_ORDER",
        KvDexCancel = 61 => "KV_DEX_CANCEL",
        KvDexAccountActiveOrders = 62 => "KV_DEX_ACCOUNT_ACTIVE_ORDERS",
        KvDexAssetList = 64 => "KV_DEX_ASSET_LIST",
        KvDexNextOrderId = 65 => "KV_DEX_NEXT_ORDER_ID",
        KvDexNextSettlementId = 66 => "KV_DEX_NEXT_SETTLEMENT_ID",
        KvDexMatchResult = 67 => "KV_DEX_MATCH_RESULT",
        KvDexSettlementOrderId = 68 => "KV_DEX_SETTLEMENT_ORDER_ID",
        KvDexOrderBook = 69 => "KV_DEX_ORDER_BOOK",
        KvAccesscontrol = 71 => "KV_ACCESSCONTROL",
        KvAccesscontrolWasmDependencyMapping = 72 => "KV_ACCESSCONTROL_WASM_DEPENDENCY_MAPPING",
        KvWasmCode = 73 => "KV_WASM_CODE",
        KvWasmContractAddress = 74 => "KV_WASM_CONTRACT_ADDRESS",
        KvWasmContractStore = 75 => "KV_WASM_CONTRACT_STORE",
        KvWasmSequenceKey = 76 => "KV_WASM_SEQUENCE_KEY",
        KvWasmContractCodeHistory = 77 => "KV_WASM_CONTRACT_CODE_HISTORY",
        KvWasmContractByCodeId = 78 => "KV_WASM_CONTRACT_BY_CODE_ID",
        KvWasmPinnedCodeIndex = 79 => "KV_WASM_PINNED_CODE_INDEX",
        KvAuthGlobalAccountNumber = 80 => "KV_AUTH_GLOBAL_ACCOUNT_NUMBER",
        KvAuthz = 81 => "KV_AUTHZ",
        KvFeegrant = 82 => "KV_FEEGRANT",
        KvFeegrantAllowance = 83 => "KV_FEEGRANT_ALLOWANCE",
        KvSlashing = 84 => "KV_SLASHING",
        KvSlashingValSigningInfo = 85 => "KV_SLASHING_VAL_SIGNING_INFO",
        KvSlashingAddrPubkeyRelationKey = 86 => "KV_SLASHING_ADDR_PUBKEY_RELATION_KEY",
        KvDexMemOrder = 87 => "KV_DEX_MEM_ORDER",
        KvDexMemCancel = 88 => "KV_DEX_MEM_CANCEL",
        KvDexMemDeposit = 89 => "KV_DEX_MEM_DEPOSIT",
        KvDexContract = 90 => "KV_DEX_CONTRACT",
        KvDexLongOrderCount = 91 => "KV_DEX_LONG_ORDER_COUNT",
        KvDexShortOrderCount = 92 => "KV_DEX_SHORT_ORDER_COUNT",
        KvBankDeferred = 93 => "KV_BANK_DEFERRED",
        KvBankDeferredModuleTxIndex = 95 => "KV_BANK_DEFERRED_MODULE_TX_INDEX",
        KvEvm = 96 => "KV_EVM",
        KvEvmBalance = 97 => "KV_EVM_BALANCE",
        KvEvmTransient = 98 => "KV_EVM_TRANSIENT",
        KvEvmAccountTransient = 99 => "KV_EVM_ACCOUNT_TRANSIENT",
        KvEvmModuleTransient = 100 => "KV_EVM_MODULE_TRANSIENT",
        KvEvmNonce = 101 => "KV_EVM_NONCE",
        KvEvmReceipt = 102 => "KV_EVM_RECEIPT",
        KvEvmS2e = 103 => "KV_EVM_S2E",
        KvEvmE2s = 104 => "KV_EVM_E2S",
        KvEvmCodeHash = 105 => "KV_EVM_CODE_HASH",
        KvEvmCode = 106 => "KV_EVM_CODE",
        KvEvmCodeSize = 107 => "KV_EVM_CODE_SIZE",
        KvBankWeiBalance = 108 => "KV_BANK_WEI_BALANCE",
        KvDexMemContractsToProcess = 109 => "KV_DEX_MEM_CONTRACTS_TO_PROCESS",
        KvDexMemDownstreamContracts = 110 => "KV_DEX_MEM_DOWNSTREAM_CONTRACTS",
    }
}

/// One declared access.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessOperation {
    pub access_type: AccessType,
    pub resource_type: ResourceType,
    pub identifier_template: String,
}

/// [`AccessOperation`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessOperationPartial {
    pub access_type: Option<AccessType>,
    pub resource_type: Option<ResourceType>,
    pub identifier_template: Option<String>,
}

impl Message for AccessOperation {
    type Partial = AccessOperationPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.access_type.is_default() {
            w.enumeration(1, self.access_type);
        }
        if !self.resource_type.is_default() {
            w.enumeration(2, self.resource_type);
        }
        if !self.identifier_template.is_empty() {
            w.string(3, &self.identifier_template);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.access_type = r.enumeration(field, wt)?,
            2 => self.resource_type = r.enumeration(field, wt)?,
            3 => self.identifier_template = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("AccessOperation", value)?;
        Ok(Self {
            access_type: f.enumeration("accessType"),
            resource_type: f.enumeration("resourceType"),
            identifier_template: f.string("identifierTemplate")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .enumeration("accessType", self.access_type)
            .enumeration("resourceType", self.resource_type)
            .string("identifierTemplate", &self.identifier_template)
            .build()
    }

    fn from_partial(p: AccessOperationPartial) -> Self {
        Self {
            access_type: p.access_type.unwrap_or_default(),
            resource_type: p.resource_type.unwrap_or_default(),
            identifier_template: p.identifier_template.unwrap_or_default(),
        }
    }
}

/// An access operation whose identifier is selected from a wasm message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WasmAccessOperation {
    pub operation: Option<AccessOperation>,
    pub selector_type: AccessOperationSelectorType,
    pub selector: String,
}

/// [`WasmAccessOperation`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WasmAccessOperationPartial {
    pub operation: Option<AccessOperationPartial>,
    pub selector_type: Option<AccessOperationSelectorType>,
    pub selector: Option<String>,
}

impl Message for WasmAccessOperation {
    type Partial = WasmAccessOperationPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if let Some(operation) = &self.operation {
            w.message(1, operation);
        }
        if !self.selector_type.is_default() {
            w.enumeration(2, self.selector_type);
        }
        if !self.selector.is_empty() {
            w.string(3, &self.selector);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.operation = Some(r.message(field, wt)?),
            2 => self.selector_type = r.enumeration(field, wt)?,
            3 => self.selector = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("WasmAccessOperation", value)?;
        Ok(Self {
            operation: f.message("operation")?,
            selector_type: f.enumeration("selectorType"),
            selector: f.string("selector")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .message("operation", self.operation.as_ref())
            .enumeration("selectorType", self.selector_type)
            .string("selector", &self.selector)
            .build()
    }

    fn from_partial(p: WasmAccessOperationPartial) -> Self {
        Self {
            operation: p.operation.map(AccessOperation::from_partial),
            selector_type: p.selector_type.unwrap_or_default(),
            selector: p.selector.unwrap_or_default(),
        }
    }
}

/// Reference from one contract's message to another contract.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WasmContractReference {
    pub contract_address: String,
    pub message_type: WasmMessageSubtype,
    pub message_name: String,
    pub json_translation_template: String,
}

/// [`WasmContractReference`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WasmContractReferencePartial {
    pub contract_address: Option<String>,
    pub message_type: Option<WasmMessageSubtype>,
    pub message_name: Option<String>,
    pub json_translation_template: Option<String>,
}

impl Message for WasmContractReference {
    type Partial = WasmContractReferencePartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.contract_address.is_empty() {
            w.string(1, &self.contract_address);
        }
        if !self.message_type.is_default() {
            w.enumeration(2, self.message_type);
        }
        if !self.message_name.is_empty() {
            w.string(3, &self.message_name);
        }
        if !self.json_translation_template.is_empty() {
            w.string(4, &self.json_translation_template);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.contract_address = r.string(field, wt)?,
            2 => self.message_type = r.enumeration(field, wt)?,
            3 => self.message_name = r.string(field, wt)?,
            4 => self.json_translation_template = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("WasmContractReference", value)?;
        Ok(Self {
            contract_address: f.string("contractAddress")?,
            message_type: f.enumeration("messageType"),
            message_name: f.string("messageName")?,
            json_translation_template: f.string("jsonTranslationTemplate")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("contractAddress", &self.contract_address)
            .enumeration("messageType", self.message_type)
            .string("messageName", &self.message_name)
            .string("jsonTranslationTemplate", &self.json_translation_template)
            .build()
    }

    fn from_partial(p: WasmContractReferencePartial) -> Self {
        Self {
            contract_address: p.contract_address.unwrap_or_default(),
            message_type: p.message_type.unwrap_or_default(),
            message_name: p.message_name.unwrap_or_default(),
            json_translation_template: p.json_translation_template.unwrap_or_default(),
        }
    }
}

/// Contract references declared for one message name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WasmContractReferences {
    pub message_name: String,
    pub contract_references: Vec<WasmContractReference>,
}

/// [`WasmContractReferences`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WasmContractReferencesPartial {
    pub message_name: Option<String>,
    pub contract_references: Vec<WasmContractReferencePartial>,
}

impl Message for WasmContractReferences {
    type Partial = WasmContractReferencesPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.message_name.is_empty() {
            w.string(1, &self.message_name);
        }
        for reference in &self.contract_references {
            w.message(2, reference);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.message_name = r.string(field, wt)?,
            2 => self.contract_references.push(r.message(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("WasmContractReferences", value)?;
        Ok(Self {
            message_name: f.string("messageName")?,
            contract_references: f.repeated_message("contractReferences")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("messageName", &self.message_name)
            .repeated_message("contractReferences", &self.contract_references)
            .build()
    }

    fn from_partial(p: WasmContractReferencesPartial) -> Self {
        Self {
            message_name: p.message_name.unwrap_or_default(),
            contract_references: p
                .contract_references
                .into_iter()
                .map(WasmContractReference::from_partial)
                .collect(),
        }
    }
}

/// Wasm access operations declared for one message name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WasmAccessOperations {
    pub message_name: String,
    pub wasm_operations: Vec<WasmAccessOperation>,
}

/// [`WasmAccessOperations`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WasmAccessOperationsPartial {
    pub message_name: Option<String>,
    pub wasm_operations: Vec<WasmAccessOperationPartial>,
}

impl Message for WasmAccessOperations {
    type Partial = WasmAccessOperationsPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.message_name.is_empty() {
            w.string(1, &self.message_name);
        }
        for operation in &self.wasm_operations {
            w.message(2, operation);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.message_name = r.string(field, wt)?,
            2 => self.wasm_operations.push(r.message(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("WasmAccessOperations", value)?;
        Ok(Self {
            message_name: f.string("messageName")?,
            wasm_operations: f.repeated_message("wasmOperations")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("messageName", &self.message_name)
            .repeated_message("wasmOperations", &self.wasm_operations)
            .build()
    }

    fn from_partial(p: WasmAccessOperationsPartial) -> Self {
        Self {
            message_name: p.message_name.unwrap_or_default(),
            wasm_operations: p
                .wasm_operations
                .into_iter()
                .map(WasmAccessOperation::from_partial)
                .collect(),
        }
    }
}

/// Access operations a message type is declared to perform.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageDependencyMapping {
    pub message_key: String,
    pub access_ops: Vec<AccessOperation>,
    pub dynamic_enabled: bool,
}

/// [`MessageDependencyMapping`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageDependencyMappingPartial {
    pub message_key: Option<String>,
    pub access_ops: Vec<AccessOperationPartial>,
    pub dynamic_enabled: Option<bool>,
}

impl Message for MessageDependencyMapping {
    type Partial = MessageDependencyMappingPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.message_key.is_empty() {
            w.string(1, &self.message_key);
        }
        for op in &self.access_ops {
            w.message(2, op);
        }
        if self.dynamic_enabled {
            w.bool(3, self.dynamic_enabled);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.message_key = r.string(field, wt)?,
            2 => self.access_ops.push(r.message(field, wt)?),
            3 => self.dynamic_enabled = r.bool(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("MessageDependencyMapping", value)?;
        Ok(Self {
            message_key: f.string("messageKey")?,
            access_ops: f.repeated_message("accessOps")?,
            dynamic_enabled: f.bool("dynamicEnabled")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("messageKey", &self.message_key)
            .repeated_message("accessOps", &self.access_ops)
            .bool("dynamicEnabled", self.dynamic_enabled)
            .build()
    }

    fn from_partial(p: MessageDependencyMappingPartial) -> Self {
        Self {
            message_key: p.message_key.unwrap_or_default(),
            access_ops: p
                .access_ops
                .into_iter()
                .map(AccessOperation::from_partial)
                .collect(),
            dynamic_enabled: p.dynamic_enabled.unwrap_or_default(),
        }
    }
}

impl Name for MessageDependencyMapping {
    const TYPE_URL: &'static str = "/cosmos.accesscontrol.v1beta1.MessageDependencyMapping";
}

/// Full dependency declaration for a wasm contract.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WasmDependencyMapping {
    pub base_access_ops: Vec<WasmAccessOperation>,
    pub query_access_ops: Vec<WasmAccessOperations>,
    pub execute_access_ops: Vec<WasmAccessOperations>,
    pub base_contract_references: Vec<WasmContractReference>,
    pub query_contract_references: Vec<WasmContractReferences>,
    pub execute_contract_references: Vec<WasmContractReferences>,
    pub reset_reason: String,
    pub contract_address: String,
}

/// [`WasmDependencyMapping`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WasmDependencyMappingPartial {
    pub base_access_ops: Vec<WasmAccessOperationPartial>,
    pub query_access_ops: Vec<WasmAccessOperationsPartial>,
    pub execute_access_ops: Vec<WasmAccessOperationsPartial>,
    pub base_contract_references: Vec<WasmContractReferencePartial>,
    pub query_contract_references: Vec<WasmContractReferencesPartial>,
    pub execute_contract_references: Vec<WasmContractReferencesPartial>,
    pub reset_reason: Option<String>,
    pub contract_address: Option<String>,
}

impl Message for WasmDependencyMapping {
    type Partial = WasmDependencyMappingPartial;

    fn encode_raw(&self, w: &mut Writer) {
        for op in &self.base_access_ops {
            w.message(1, op);
        }
        for ops in &self.query_access_ops {
            w.message(2, ops);
        }
        for ops in &self.execute_access_ops {
            w.message(3, ops);
        }
        for reference in &self.base_contract_references {
            w.message(4, reference);
        }
        for references in &self.query_contract_references {
            w.message(5, references);
        }
        for references in &self.execute_contract_references {
            w.message(6, references);
        }
        if !self.reset_reason.is_empty() {
            w.string(7, &self.reset_reason);
        }
        if !self.contract_address.is_empty() {
            w.string(8, &self.contract_address);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.base_access_ops.push(r.message(field, wt)?),
            2 => self.query_access_ops.push(r.message(field, wt)?),
            3 => self.execute_access_ops.push(r.message(field, wt)?),
            4 => self.base_contract_references.push(r.message(field, wt)?),
            5 => self.query_contract_references.push(r.message(field, wt)?),
            6 => self.execute_contract_references.push(r.message(field, wt)?),
            7 => self.reset_reason = r.string(field, wt)?,
            8 => self.contract_address = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("WasmDependencyMapping", value)?;
        Ok(Self {
            base_access_ops: f.repeated_message("baseAccessOps")?,
            query_access_ops: f.repeated_message("queryAccessOps")?,
            execute_access_ops: f.repeated_message("executeAccessOps")?,
            base_contract_references: f.repeated_message("baseContractReferences")?,
            query_contract_references: f.repeated_message("queryContractReferences")?,
            execute_contract_references: f.repeated_message("executeContractReferences")?,
            reset_reason: f.string("resetReason")?,
            contract_address: f.string("contractAddress")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .repeated_message("baseAccessOps", &self.base_access_ops)
            .repeated_message("queryAccessOps", &self.query_access_ops)
            .repeated_message("executeAccessOps", &self.execute_access_ops)
            .repeated_message("baseContractReferences", &self.base_contract_references)
            .repeated_message("queryContractReferences", &self.query_contract_references)
            .repeated_message("executeContractReferences", &self.execute_contract_references)
            .string("resetReason", &self.reset_reason)
            .string("contractAddress", &self.contract_address)
            .build()
    }

    fn from_partial(p: WasmDependencyMappingPartial) -> Self {
        Self {
            base_access_ops: p
                .base_access_ops
                .into_iter()
                .map(WasmAccessOperation::from_partial)
                .collect(),
            query_access_ops: p
                .query_access_ops
                .into_iter()
                .map(WasmAccessOperations::from_partial)
                .collect(),
            execute_access_ops: p
                .execute_access_ops
                .into_iter()
                .map(WasmAccessOperations::from_partial)
                .collect(),
            base_contract_references: p
                .base_contract_references
                .into_iter()
                .map(WasmContractReference::from_partial)
                .collect(),
            query_contract_references: p
                .query_contract_references
                .into_iter()
                .map(WasmContractReferences::from_partial)
                .collect(),
            execute_contract_references: p
                .execute_contract_references
                .into_iter()
                .map(WasmContractReferences::from_partial)
                .collect(),
            reset_reason: p.reset_reason.unwrap_or_default(),
            contract_address: p.contract_address.unwrap_or_default(),
        }
    }
}

impl Name for WasmDependencyMapping {
    const TYPE_URL: &'static str = "/cosmos.accesscontrol.v1beta1.WasmDependencyMapping";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_abc() -> AccessOperation {
        AccessOperation {
            access_type: AccessType::Write,
            resource_type: ResourceType::Any,
            identifier_template: "abc".to_string(),
        }
    }

    #[test]
    fn test_access_operation_exact_bytes() {
        let bytes = write_abc().encode();
        assert_eq!(&bytes[..], &[0x08, 0x02, 0x1A, 0x03, 0x61, 0x62, 0x63]);

        let decoded = AccessOperation::decode(&bytes).unwrap();
        assert_eq!(decoded.resource_type, ResourceType::Any);
        assert_eq!(decoded, write_abc());
    }

    #[test]
    fn test_default_record_encodes_to_nothing() {
        assert!(AccessOperation::default().encode().is_empty());
        assert!(MessageDependencyMapping::default().encode().is_empty());
    }

    #[test]
    fn test_unknown_field_is_skipped() {
        let mut bytes = write_abc().encode_to_vec();
        // field 9, length-delimited, 2 bytes
        bytes.extend_from_slice(&[0x4A, 0x02, 0xFF, 0xFF]);
        assert_eq!(AccessOperation::decode(&bytes).unwrap(), write_abc());
    }

    #[test]
    fn test_last_occurrence_wins() {
        let bytes = [0x08, 0x01, 0x08, 0x03];
        let op = AccessOperation::decode(&bytes).unwrap();
        assert_eq!(op.access_type, AccessType::Commit);
    }

    #[test]
    fn test_unrecognized_enum_ordinal() {
        let op = AccessOperation::from_json(&json!({"accessType": 42})).unwrap();
        assert_eq!(op.access_type, AccessType::Unrecognized);
        assert_eq!(op.to_json(), json!({"accessType": "UNKNOWN"}));

        // An unknown ordinal off the wire re-encodes as -1.
        let op = AccessOperation::decode(&[0x08, 0x2A]).unwrap();
        assert_eq!(op.access_type, AccessType::Unrecognized);
        assert_eq!(op.access_type.to_i32(), -1);
    }

    /// Every declared value survives ordinal, name and wire round trips.
    fn assert_table_round_trips<E: Enumeration>() {
        for &value in E::VALUES {
            assert_eq!(E::from_i32(value.to_i32()), value);
            assert_eq!(E::from_str_name(value.as_str_name()), value);
            assert_eq!(E::from_json(&value.to_json()), value);
        }
    }

    #[test]
    fn test_enum_tables_round_trip() {
        assert_table_round_trips::<AccessType>();
        assert_table_round_trips::<AccessOperationSelectorType>();
        assert_table_round_trips::<WasmMessageSubtype>();
        assert_table_round_trips::<ResourceType>();
    }

    #[test]
    fn test_selector_type_table_is_complete() {
        let table: Vec<(i32, &str)> = AccessOperationSelectorType::VALUES
            .iter()
            .map(|v| (v.to_i32(), v.as_str_name()))
            .collect();
        assert_eq!(
            table,
            vec![
                (0, "NONE"),
                (1, "JQ"),
                (2, "JQ_BECH32_ADDRESS"),
                (3, "JQ_LENGTH_PREFIXED_ADDRESS"),
                (4, "SENDER_BECH32_ADDRESS"),
                (5, "SENDER_LENGTH_PREFIXED_ADDRESS"),
                (6, "CONTRACT_ADDRESS"),
                (7, "JQ_MESSAGE_CONDITIONAL"),
                (8, "CONSTANT_STRING_TO_HEX"),
                (9, "CONTRACT_REFERENCE"),
            ]
        );
    }

    #[test]
    fn test_resource_type_table_is_complete() {
        assert_eq!(ResourceType::VALUES.len(), 107);
        assert_eq!(ResourceType::from_i32(103), ResourceType::KvEvmS2e);
        assert_eq!(ResourceType::from_str_name("KV_EVM_E2S").to_i32(), 104);
        // 40 and 41 are declared out of order; 59, 63, 70 and 94 are unused
        let mut ordinals: Vec<i32> = ResourceType::VALUES.iter().map(|v| v.to_i32()).collect();
        ordinals.sort_unstable();
        let expected: Vec<i32> = (0..=110).filter(|n| ![59, 63, 70, 94].contains(n)).collect();
        assert_eq!(ordinals, expected);
    }

    #[test]
    fn test_bech32_selector_and_evm_resource_from_wire() {
        let op = WasmAccessOperation::decode(&[0x10, 0x02]).unwrap();
        assert_eq!(op.selector_type, AccessOperationSelectorType::JqBech32Address);
        assert_eq!(&op.encode()[..], &[0x10, 0x02]);

        let op = AccessOperation::decode(&[0x10, 0x67]).unwrap();
        assert_eq!(op.resource_type, ResourceType::KvEvmS2e);
        assert_eq!(op.to_json(), json!({"resourceType": "KV_EVM_S2E"}));
        assert_eq!(&op.encode()[..], &[0x10, 0x67]);
    }

    #[test]
    fn test_group_bomb_on_unknown_field_is_framing_error() {
        let err = AccessOperation::decode(&vec![0x4B; 2_000_000]).unwrap_err();
        assert!(err.is_framing());
    }

    #[test]
    fn test_resource_type_mixed_case_names() {
        assert_eq!(ResourceType::from_str_name("DexMem"), ResourceType::DexMem);
        assert_eq!(ResourceType::from_i32(60), ResourceType::KvDexOrder);
        assert_eq!(ResourceType::from_i32(59), ResourceType::Unrecognized);
        assert_eq!(ResourceType::KvDexMemDownstreamContracts.to_i32(), 110);
    }

    #[test]
    fn test_json_round_trip() {
        let op = write_abc();
        let json = op.to_json();
        assert_eq!(
            json,
            json!({"accessType": "WRITE", "identifierTemplate": "abc"})
        );
        assert_eq!(AccessOperation::from_json(&json).unwrap(), op);
    }

    #[test]
    fn test_empty_nested_record_is_present() {
        let op = WasmAccessOperation {
            operation: Some(AccessOperation::default()),
            ..Default::default()
        };
        let bytes = op.encode();
        assert_eq!(&bytes[..], &[0x0A, 0x00]);
        assert_eq!(WasmAccessOperation::decode(&bytes).unwrap(), op);

        let absent = WasmAccessOperation::default();
        assert!(absent.encode().is_empty());
        assert_eq!(WasmAccessOperation::decode(&[]).unwrap().operation, None);
    }

    #[test]
    fn test_empty_repeated_in_json() {
        let mapping = MessageDependencyMapping {
            message_key: "k".to_string(),
            ..Default::default()
        };
        assert_eq!(mapping.to_json(), json!({"messageKey": "k", "accessOps": []}));
    }

    #[test]
    fn test_repeated_nested_round_trip() {
        let mapping = MessageDependencyMapping {
            message_key: "bank/send".to_string(),
            access_ops: vec![
                write_abc(),
                AccessOperation {
                    access_type: AccessType::Commit,
                    resource_type: ResourceType::KvBankBalances,
                    identifier_template: "*".to_string(),
                },
            ],
            dynamic_enabled: true,
        };
        assert_eq!(
            MessageDependencyMapping::decode(&mapping.encode()).unwrap(),
            mapping
        );
        assert_eq!(
            MessageDependencyMapping::from_json(&mapping.to_json()).unwrap(),
            mapping
        );
    }

    #[test]
    fn test_from_partial_recurses() {
        let mapping = WasmAccessOperations::from_partial(WasmAccessOperationsPartial {
            message_name: None,
            wasm_operations: vec![WasmAccessOperationPartial {
                operation: Some(AccessOperationPartial {
                    access_type: Some(AccessType::Read),
                    ..Default::default()
                }),
                ..Default::default()
            }],
        });
        assert_eq!(mapping.message_name, "");
        let op = mapping.wasm_operations[0].operation.as_ref().unwrap();
        assert_eq!(op.access_type, AccessType::Read);
        assert_eq!(op.resource_type, ResourceType::Any);
    }

    #[test]
    fn test_nested_truncation_is_framing_error() {
        // Nested length claims 5 bytes, only 2 follow.
        let err = WasmAccessOperation::decode(&[0x0A, 0x05, 0x08, 0x01]).unwrap_err();
        assert!(err.is_framing());
    }

    #[test]
    fn test_wasm_dependency_mapping_round_trip() {
        let mapping = WasmDependencyMapping {
            base_access_ops: vec![WasmAccessOperation {
                operation: Some(write_abc()),
                selector_type: AccessOperationSelectorType::Jq,
                selector: ".send.to".to_string(),
            }],
            query_contract_references: vec![WasmContractReferences {
                message_name: "balance".to_string(),
                contract_references: vec![WasmContractReference {
                    contract_address: "sei1contract".to_string(),
                    message_type: WasmMessageSubtype::Query,
                    message_name: "info".to_string(),
                    json_translation_template: "{}".to_string(),
                }],
            }],
            contract_address: "sei1self".to_string(),
            ..Default::default()
        };
        assert_eq!(
            WasmDependencyMapping::decode(&mapping.encode()).unwrap(),
            mapping
        );
        assert_eq!(
            WasmDependencyMapping::from_json(&mapping.to_json()).unwrap(),
            mapping
        );
    }
}
