//! Request and response records of the `sei.oracle.v1.Query` service.

use serde_json::Value;

use super::oracle::{
    OracleExchangeRate, OracleExchangeRatePartial, OracleTwap, OracleTwapPartial, Params,
    ParamsPartial, PriceSnapshot, PriceSnapshotPartial, VotePenaltyCounter,
    VotePenaltyCounterPartial,
};
use crate::codec::{Fields, JsonObject, Message};
use crate::error::Result;
use crate::wire::{Reader, WireType, Writer};

/// Requests with no fields. Every field on the wire is unknown and skipped.
macro_rules! empty_request {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
            pub struct $name;

            impl Message for $name {
                type Partial = $name;

                fn encode_raw(&self, _w: &mut Writer) {}

                fn merge_field(
                    &mut self,
                    field: u32,
                    wt: WireType,
                    r: &mut Reader<'_>,
                ) -> Result<()> {
                    r.skip_field(field, wt)
                }

                fn from_json(value: &Value) -> Result<Self> {
                    Fields::new(stringify!($name), value)?;
                    Ok(Self)
                }

                fn to_json(&self) -> Value {
                    JsonObject::new().build()
                }

                fn from_partial(p: $name) -> Self {
                    p
                }
            }
        )+
    };
}

empty_request! {
    QueryExchangeRatesRequest;
    QueryActivesRequest;
    QueryVoteTargetsRequest;
    QueryPriceSnapshotHistoryRequest;
    QuerySlashWindowRequest;
    QueryParamsRequest;
}

/// Request for `Query/ExchangeRate`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryExchangeRateRequest {
    pub denom: String,
}

/// [`QueryExchangeRateRequest`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryExchangeRateRequestPartial {
    pub denom: Option<String>,
}

impl Message for QueryExchangeRateRequest {
    type Partial = QueryExchangeRateRequestPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.denom.is_empty() {
            w.string(1, &self.denom);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.denom = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("QueryExchangeRateRequest", value)?;
        Ok(Self {
            denom: f.string("denom")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new().string("denom", &self.denom).build()
    }

    fn from_partial(p: QueryExchangeRateRequestPartial) -> Self {
        Self {
            denom: p.denom.unwrap_or_default(),
        }
    }
}

/// Response to `Query/ExchangeRate`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryExchangeRateResponse {
    pub oracle_exchange_rate: Option<OracleExchangeRate>,
}

/// [`QueryExchangeRateResponse`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryExchangeRateResponsePartial {
    pub oracle_exchange_rate: Option<OracleExchangeRatePartial>,
}

impl Message for QueryExchangeRateResponse {
    type Partial = QueryExchangeRateResponsePartial;

    fn encode_raw(&self, w: &mut Writer) {
        if let Some(rate) = &self.oracle_exchange_rate {
            w.message(1, rate);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.oracle_exchange_rate = Some(r.message(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("QueryExchangeRateResponse", value)?;
        Ok(Self {
            oracle_exchange_rate: f.message("oracleExchangeRate")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .message("oracleExchangeRate", self.oracle_exchange_rate.as_ref())
            .build()
    }

    fn from_partial(p: QueryExchangeRateResponsePartial) -> Self {
        Self {
            oracle_exchange_rate: p.oracle_exchange_rate.map(OracleExchangeRate::from_partial),
        }
    }
}

/// A denom with its latest rate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DenomOracleExchangeRatePair {
    pub denom: String,
    pub oracle_exchange_rate: Option<OracleExchangeRate>,
}

/// [`DenomOracleExchangeRatePair`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DenomOracleExchangeRatePairPartial {
    pub denom: Option<String>,
    pub oracle_exchange_rate: Option<OracleExchangeRatePartial>,
}

impl Message for DenomOracleExchangeRatePair {
    type Partial = DenomOracleExchangeRatePairPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.denom.is_empty() {
            w.string(1, &self.denom);
        }
        if let Some(rate) = &self.oracle_exchange_rate {
            w.message(2, rate);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.denom = r.string(field, wt)?,
            2 => self.oracle_exchange_rate = Some(r.message(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("DenomOracleExchangeRatePair", value)?;
        Ok(Self {
            denom: f.string("denom")?,
            oracle_exchange_rate: f.message("oracleExchangeRate")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("denom", &self.denom)
            .message("oracleExchangeRate", self.oracle_exchange_rate.as_ref())
            .build()
    }

    fn from_partial(p: DenomOracleExchangeRatePairPartial) -> Self {
        Self {
            denom: p.denom.unwrap_or_default(),
            oracle_exchange_rate: p.oracle_exchange_rate.map(OracleExchangeRate::from_partial),
        }
    }
}

/// Response to `Query/ExchangeRates`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryExchangeRatesResponse {
    pub denom_oracle_exchange_rate_pairs: Vec<DenomOracleExchangeRatePair>,
}

/// [`QueryExchangeRatesResponse`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryExchangeRatesResponsePartial {
    pub denom_oracle_exchange_rate_pairs: Vec<DenomOracleExchangeRatePairPartial>,
}

impl Message for QueryExchangeRatesResponse {
    type Partial = QueryExchangeRatesResponsePartial;

    fn encode_raw(&self, w: &mut Writer) {
        for pair in &self.denom_oracle_exchange_rate_pairs {
            w.message(1, pair);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self
                .denom_oracle_exchange_rate_pairs
                .push(r.message(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("QueryExchangeRatesResponse", value)?;
        Ok(Self {
            denom_oracle_exchange_rate_pairs: f
                .repeated_message("denomOracleExchangeRatePairs")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .repeated_message(
                "denomOracleExchangeRatePairs",
                &self.denom_oracle_exchange_rate_pairs,
            )
            .build()
    }

    fn from_partial(p: QueryExchangeRatesResponsePartial) -> Self {
        Self {
            denom_oracle_exchange_rate_pairs: p
                .denom_oracle_exchange_rate_pairs
                .into_iter()
                .map(DenomOracleExchangeRatePair::from_partial)
                .collect(),
        }
    }
}

/// Response to `Query/Actives`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryActivesResponse {
    pub actives: Vec<String>,
}

/// [`QueryActivesResponse`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryActivesResponsePartial {
    pub actives: Vec<String>,
}

impl Message for QueryActivesResponse {
    type Partial = QueryActivesResponsePartial;

    fn encode_raw(&self, w: &mut Writer) {
        for denom in &self.actives {
            w.string(1, denom);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.actives.push(r.string(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("QueryActivesResponse", value)?;
        Ok(Self {
            actives: f.repeated_string("actives")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .repeated_string("actives", &self.actives)
            .build()
    }

    fn from_partial(p: QueryActivesResponsePartial) -> Self {
        Self { actives: p.actives }
    }
}

/// Response to `Query/VoteTargets`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryVoteTargetsResponse {
    pub vote_targets: Vec<String>,
}

/// [`QueryVoteTargetsResponse`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryVoteTargetsResponsePartial {
    pub vote_targets: Vec<String>,
}

impl Message for QueryVoteTargetsResponse {
    type Partial = QueryVoteTargetsResponsePartial;

    fn encode_raw(&self, w: &mut Writer) {
        for denom in &self.vote_targets {
            w.string(1, denom);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.vote_targets.push(r.string(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("QueryVoteTargetsResponse", value)?;
        Ok(Self {
            vote_targets: f.repeated_string("voteTargets")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .repeated_string("voteTargets", &self.vote_targets)
            .build()
    }

    fn from_partial(p: QueryVoteTargetsResponsePartial) -> Self {
        Self {
            vote_targets: p.vote_targets,
        }
    }
}

/// Response to `Query/PriceSnapshotHistory`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryPriceSnapshotHistoryResponse {
    pub price_snapshots: Vec<PriceSnapshot>,
}

/// [`QueryPriceSnapshotHistoryResponse`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPriceSnapshotHistoryResponsePartial {
    pub price_snapshots: Vec<PriceSnapshotPartial>,
}

impl Message for QueryPriceSnapshotHistoryResponse {
    type Partial = QueryPriceSnapshotHistoryResponsePartial;

    fn encode_raw(&self, w: &mut Writer) {
        for snapshot in &self.price_snapshots {
            w.message(1, snapshot);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.price_snapshots.push(r.message(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("QueryPriceSnapshotHistoryResponse", value)?;
        Ok(Self {
            price_snapshots: f.repeated_message("priceSnapshots")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .repeated_message("priceSnapshots", &self.price_snapshots)
            .build()
    }

    fn from_partial(p: QueryPriceSnapshotHistoryResponsePartial) -> Self {
        Self {
            price_snapshots: p
                .price_snapshots
                .into_iter()
                .map(PriceSnapshot::from_partial)
                .collect(),
        }
    }
}

/// Request for `Query/Twaps`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryTwapsRequest {
    pub lookback_seconds: u64,
}

/// [`QueryTwapsRequest`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryTwapsRequestPartial {
    pub lookback_seconds: Option<u64>,
}

impl Message for QueryTwapsRequest {
    type Partial = QueryTwapsRequestPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if self.lookback_seconds != 0 {
            w.uint64(1, self.lookback_seconds);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.lookback_seconds = r.uint64(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("QueryTwapsRequest", value)?;
        Ok(Self {
            lookback_seconds: f.uint64("lookbackSeconds")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .uint64("lookbackSeconds", self.lookback_seconds)
            .build()
    }

    fn from_partial(p: QueryTwapsRequestPartial) -> Self {
        Self {
            lookback_seconds: p.lookback_seconds.unwrap_or_default(),
        }
    }
}

/// Response to `Query/Twaps`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryTwapsResponse {
    pub oracle_twaps: Vec<OracleTwap>,
}

/// [`QueryTwapsResponse`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryTwapsResponsePartial {
    pub oracle_twaps: Vec<OracleTwapPartial>,
}

impl Message for QueryTwapsResponse {
    type Partial = QueryTwapsResponsePartial;

    fn encode_raw(&self, w: &mut Writer) {
        for twap in &self.oracle_twaps {
            w.message(1, twap);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.oracle_twaps.push(r.message(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("QueryTwapsResponse", value)?;
        Ok(Self {
            oracle_twaps: f.repeated_message("oracleTwaps")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .repeated_message("oracleTwaps", &self.oracle_twaps)
            .build()
    }

    fn from_partial(p: QueryTwapsResponsePartial) -> Self {
        Self {
            oracle_twaps: p
                .oracle_twaps
                .into_iter()
                .map(OracleTwap::from_partial)
                .collect(),
        }
    }
}

/// Request for `Query/FeederDelegation`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryFeederDelegationRequest {
    pub validator_addr: String,
}

/// [`QueryFeederDelegationRequest`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFeederDelegationRequestPartial {
    pub validator_addr: Option<String>,
}

impl Message for QueryFeederDelegationRequest {
    type Partial = QueryFeederDelegationRequestPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.validator_addr.is_empty() {
            w.string(1, &self.validator_addr);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.validator_addr = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("QueryFeederDelegationRequest", value)?;
        Ok(Self {
            validator_addr: f.string("validatorAddr")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("validatorAddr", &self.validator_addr)
            .build()
    }

    fn from_partial(p: QueryFeederDelegationRequestPartial) -> Self {
        Self {
            validator_addr: p.validator_addr.unwrap_or_default(),
        }
    }
}

/// Response to `Query/FeederDelegation`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryFeederDelegationResponse {
    pub feeder_addr: String,
}

/// [`QueryFeederDelegationResponse`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFeederDelegationResponsePartial {
    pub feeder_addr: Option<String>,
}

impl Message for QueryFeederDelegationResponse {
    type Partial = QueryFeederDelegationResponsePartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.feeder_addr.is_empty() {
            w.string(1, &self.feeder_addr);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.feeder_addr = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("QueryFeederDelegationResponse", value)?;
        Ok(Self {
            feeder_addr: f.string("feederAddr")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("feederAddr", &self.feeder_addr)
            .build()
    }

    fn from_partial(p: QueryFeederDelegationResponsePartial) -> Self {
        Self {
            feeder_addr: p.feeder_addr.unwrap_or_default(),
        }
    }
}

/// Request for `Query/VotePenaltyCounter`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryVotePenaltyCounterRequest {
    pub validator_addr: String,
}

/// [`QueryVotePenaltyCounterRequest`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryVotePenaltyCounterRequestPartial {
    pub validator_addr: Option<String>,
}

impl Message for QueryVotePenaltyCounterRequest {
    type Partial = QueryVotePenaltyCounterRequestPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.validator_addr.is_empty() {
            w.string(1, &self.validator_addr);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.validator_addr = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("QueryVotePenaltyCounterRequest", value)?;
        Ok(Self {
            validator_addr: f.string("validatorAddr")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("validatorAddr", &self.validator_addr)
            .build()
    }

    fn from_partial(p: QueryVotePenaltyCounterRequestPartial) -> Self {
        Self {
            validator_addr: p.validator_addr.unwrap_or_default(),
        }
    }
}

/// Response to `Query/VotePenaltyCounter`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryVotePenaltyCounterResponse {
    pub vote_penalty_counter: Option<VotePenaltyCounter>,
}

/// [`QueryVotePenaltyCounterResponse`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryVotePenaltyCounterResponsePartial {
    pub vote_penalty_counter: Option<VotePenaltyCounterPartial>,
}

impl Message for QueryVotePenaltyCounterResponse {
    type Partial = QueryVotePenaltyCounterResponsePartial;

    fn encode_raw(&self, w: &mut Writer) {
        if let Some(counter) = &self.vote_penalty_counter {
            w.message(1, counter);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.vote_penalty_counter = Some(r.message(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("QueryVotePenaltyCounterResponse", value)?;
        Ok(Self {
            vote_penalty_counter: f.message("votePenaltyCounter")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .message("votePenaltyCounter", self.vote_penalty_counter.as_ref())
            .build()
    }

    fn from_partial(p: QueryVotePenaltyCounterResponsePartial) -> Self {
        Self {
            vote_penalty_counter: p.vote_penalty_counter.map(VotePenaltyCounter::from_partial),
        }
    }
}

/// Response to `Query/SlashWindow`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuerySlashWindowResponse {
    /// Blocks elapsed in the current slash window.
    pub window_progress: u64,
}

/// [`QuerySlashWindowResponse`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySlashWindowResponsePartial {
    pub window_progress: Option<u64>,
}

impl Message for QuerySlashWindowResponse {
    type Partial = QuerySlashWindowResponsePartial;

    fn encode_raw(&self, w: &mut Writer) {
        if self.window_progress != 0 {
            w.uint64(1, self.window_progress);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.window_progress = r.uint64(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("QuerySlashWindowResponse", value)?;
        Ok(Self {
            window_progress: f.uint64("windowProgress")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .uint64("windowProgress", self.window_progress)
            .build()
    }

    fn from_partial(p: QuerySlashWindowResponsePartial) -> Self {
        Self {
            window_progress: p.window_progress.unwrap_or_default(),
        }
    }
}

/// Response to `Query/Params`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParamsResponse {
    pub params: Option<Params>,
}

/// [`QueryParamsResponse`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParamsResponsePartial {
    pub params: Option<ParamsPartial>,
}

impl Message for QueryParamsResponse {
    type Partial = QueryParamsResponsePartial;

    fn encode_raw(&self, w: &mut Writer) {
        if let Some(params) = &self.params {
            w.message(1, params);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.params = Some(r.message(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("QueryParamsResponse", value)?;
        Ok(Self {
            params: f.message("params")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .message("params", self.params.as_ref())
            .build()
    }

    fn from_partial(p: QueryParamsResponsePartial) -> Self {
        Self {
            params: p.params.map(Params::from_partial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_request_encodes_to_nothing_and_skips_input() {
        assert!(QueryParamsRequest.encode().is_empty());
        // field 1 varint 5
        assert_eq!(
            QueryActivesRequest::decode(&[0x08, 0x05]).unwrap(),
            QueryActivesRequest
        );
        assert_eq!(QueryActivesRequest.to_json(), json!({}));
    }

    #[test]
    fn test_empty_request_rejects_non_object_json() {
        let err = QueryExchangeRatesRequest::from_json(&json!([1])).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_actives_response() {
        let resp = QueryActivesResponse {
            actives: vec!["uatom".to_string(), "usei".to_string()],
        };
        let bytes = resp.encode();
        assert_eq!(&bytes[..7], &[0x0A, 0x05, b'u', b'a', b't', b'o', b'm']);
        assert_eq!(QueryActivesResponse::decode(&bytes).unwrap(), resp);
        assert_eq!(resp.to_json(), json!({"actives": ["uatom", "usei"]}));
    }

    #[test]
    fn test_exchange_rate_response_absent_vs_empty() {
        let absent = QueryExchangeRateResponse::default();
        assert!(absent.encode().is_empty());
        assert_eq!(absent.to_json(), json!({}));

        let empty = QueryExchangeRateResponse {
            oracle_exchange_rate: Some(OracleExchangeRate::default()),
        };
        assert_eq!(&empty.encode()[..], &[0x0A, 0x00]);
        assert_eq!(empty.to_json(), json!({"oracleExchangeRate": {}}));
        assert_eq!(
            QueryExchangeRateResponse::decode(&empty.encode()).unwrap(),
            empty
        );
    }

    #[test]
    fn test_twaps_request_from_numeric_string() {
        let req = QueryTwapsRequest::from_json(&json!({"lookbackSeconds": "3600"})).unwrap();
        assert_eq!(req.lookback_seconds, 3600);
    }

    #[test]
    fn test_params_response_from_partial() {
        let resp = QueryParamsResponse::from_partial(QueryParamsResponsePartial {
            params: Some(ParamsPartial {
                vote_period: Some(5),
                ..Default::default()
            }),
        });
        let params = resp.params.unwrap();
        assert_eq!(params.vote_period, 5);
        assert!(params.whitelist.is_empty());
    }
}
