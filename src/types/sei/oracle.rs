//! `sei.oracle.v1` on-chain oracle state.

use serde_json::Value;

use crate::codec::{Fields, JsonObject, Message, Name};
use crate::error::Result;
use crate::wire::{Reader, WireType, Writer};

/// Module parameters. Decimal quantities travel as text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params {
    pub vote_period: u64,
    pub vote_threshold: String,
    pub reward_band: String,
    pub whitelist: Vec<Denom>,
    pub slash_fraction: String,
    pub slash_window: u64,
    pub min_valid_per_window: String,
    pub lookback_duration: u64,
}

/// [`Params`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamsPartial {
    pub vote_period: Option<u64>,
    pub vote_threshold: Option<String>,
    pub reward_band: Option<String>,
    pub whitelist: Vec<DenomPartial>,
    pub slash_fraction: Option<String>,
    pub slash_window: Option<u64>,
    pub min_valid_per_window: Option<String>,
    pub lookback_duration: Option<u64>,
}

impl Message for Params {
    type Partial = ParamsPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if self.vote_period != 0 {
            w.uint64(1, self.vote_period);
        }
        if !self.vote_threshold.is_empty() {
            w.string(2, &self.vote_threshold);
        }
        if !self.reward_band.is_empty() {
            w.string(3, &self.reward_band);
        }
        for denom in &self.whitelist {
            w.message(4, denom);
        }
        if !self.slash_fraction.is_empty() {
            w.string(5, &self.slash_fraction);
        }
        if self.slash_window != 0 {
            w.uint64(6, self.slash_window);
        }
        if !self.min_valid_per_window.is_empty() {
            w.string(7, &self.min_valid_per_window);
        }
        // Field 8 is reserved.
        if self.lookback_duration != 0 {
            w.uint64(9, self.lookback_duration);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.vote_period = r.uint64(field, wt)?,
            2 => self.vote_threshold = r.string(field, wt)?,
            3 => self.reward_band = r.string(field, wt)?,
            4 => self.whitelist.push(r.message(field, wt)?),
            5 => self.slash_fraction = r.string(field, wt)?,
            6 => self.slash_window = r.uint64(field, wt)?,
            7 => self.min_valid_per_window = r.string(field, wt)?,
            9 => self.lookback_duration = r.uint64(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("Params", value)?;
        Ok(Self {
            vote_period: f.uint64("votePeriod")?,
            vote_threshold: f.string("voteThreshold")?,
            reward_band: f.string("rewardBand")?,
            whitelist: f.repeated_message("whitelist")?,
            slash_fraction: f.string("slashFraction")?,
            slash_window: f.uint64("slashWindow")?,
            min_valid_per_window: f.string("minValidPerWindow")?,
            lookback_duration: f.uint64("lookbackDuration")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .uint64("votePeriod", self.vote_period)
            .string("voteThreshold", &self.vote_threshold)
            .string("rewardBand", &self.reward_band)
            .repeated_message("whitelist", &self.whitelist)
            .string("slashFraction", &self.slash_fraction)
            .uint64("slashWindow", self.slash_window)
            .string("minValidPerWindow", &self.min_valid_per_window)
            .uint64("lookbackDuration", self.lookback_duration)
            .build()
    }

    fn from_partial(p: ParamsPartial) -> Self {
        Self {
            vote_period: p.vote_period.unwrap_or_default(),
            vote_threshold: p.vote_threshold.unwrap_or_default(),
            reward_band: p.reward_band.unwrap_or_default(),
            whitelist: p.whitelist.into_iter().map(Denom::from_partial).collect(),
            slash_fraction: p.slash_fraction.unwrap_or_default(),
            slash_window: p.slash_window.unwrap_or_default(),
            min_valid_per_window: p.min_valid_per_window.unwrap_or_default(),
            lookback_duration: p.lookback_duration.unwrap_or_default(),
        }
    }
}

impl Name for Params {
    const TYPE_URL: &'static str = "/sei.oracle.v1.Params";
}

/// A denom eligible for voting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Denom {
    pub name: String,
}

/// [`Denom`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DenomPartial {
    pub name: Option<String>,
}

impl Message for Denom {
    type Partial = DenomPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.name.is_empty() {
            w.string(1, &self.name);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.name = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("Denom", value)?;
        Ok(Self {
            name: f.string("name")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new().string("name", &self.name).build()
    }

    fn from_partial(p: DenomPartial) -> Self {
        Self {
            name: p.name.unwrap_or_default(),
        }
    }
}

/// A validator's vote on a set of exchange rates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregateExchangeRateVote {
    pub exchange_rate_tuples: Vec<ExchangeRateTuple>,
    pub voter: String,
}

/// [`AggregateExchangeRateVote`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateExchangeRateVotePartial {
    pub exchange_rate_tuples: Vec<ExchangeRateTuplePartial>,
    pub voter: Option<String>,
}

impl Message for AggregateExchangeRateVote {
    type Partial = AggregateExchangeRateVotePartial;

    fn encode_raw(&self, w: &mut Writer) {
        for tuple in &self.exchange_rate_tuples {
            w.message(1, tuple);
        }
        if !self.voter.is_empty() {
            w.string(2, &self.voter);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.exchange_rate_tuples.push(r.message(field, wt)?),
            2 => self.voter = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("AggregateExchangeRateVote", value)?;
        Ok(Self {
            exchange_rate_tuples: f.repeated_message("exchangeRateTuples")?,
            voter: f.string("voter")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .repeated_message("exchangeRateTuples", &self.exchange_rate_tuples)
            .string("voter", &self.voter)
            .build()
    }

    fn from_partial(p: AggregateExchangeRateVotePartial) -> Self {
        Self {
            exchange_rate_tuples: p
                .exchange_rate_tuples
                .into_iter()
                .map(ExchangeRateTuple::from_partial)
                .collect(),
            voter: p.voter.unwrap_or_default(),
        }
    }
}

/// One denom's rate inside a vote.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExchangeRateTuple {
    pub denom: String,
    pub exchange_rate: String,
}

/// [`ExchangeRateTuple`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeRateTuplePartial {
    pub denom: Option<String>,
    pub exchange_rate: Option<String>,
}

impl Message for ExchangeRateTuple {
    type Partial = ExchangeRateTuplePartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.denom.is_empty() {
            w.string(1, &self.denom);
        }
        if !self.exchange_rate.is_empty() {
            w.string(2, &self.exchange_rate);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.denom = r.string(field, wt)?,
            2 => self.exchange_rate = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("ExchangeRateTuple", value)?;
        Ok(Self {
            denom: f.string("denom")?,
            exchange_rate: f.string("exchangeRate")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("denom", &self.denom)
            .string("exchangeRate", &self.exchange_rate)
            .build()
    }

    fn from_partial(p: ExchangeRateTuplePartial) -> Self {
        Self {
            denom: p.denom.unwrap_or_default(),
            exchange_rate: p.exchange_rate.unwrap_or_default(),
        }
    }
}

/// Latest rate for a denom and when it was set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OracleExchangeRate {
    pub exchange_rate: String,
    /// Block height of the last update, as decimal text.
    pub last_update: String,
    /// Unix milliseconds of the last update.
    pub last_update_timestamp: i64,
}

/// [`OracleExchangeRate`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OracleExchangeRatePartial {
    pub exchange_rate: Option<String>,
    pub last_update: Option<String>,
    pub last_update_timestamp: Option<i64>,
}

impl Message for OracleExchangeRate {
    type Partial = OracleExchangeRatePartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.exchange_rate.is_empty() {
            w.string(1, &self.exchange_rate);
        }
        if !self.last_update.is_empty() {
            w.string(2, &self.last_update);
        }
        if self.last_update_timestamp != 0 {
            w.int64(3, self.last_update_timestamp);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.exchange_rate = r.string(field, wt)?,
            2 => self.last_update = r.string(field, wt)?,
            3 => self.last_update_timestamp = r.int64(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("OracleExchangeRate", value)?;
        Ok(Self {
            exchange_rate: f.string("exchangeRate")?,
            last_update: f.string("lastUpdate")?,
            last_update_timestamp: f.int64("lastUpdateTimestamp")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("exchangeRate", &self.exchange_rate)
            .string("lastUpdate", &self.last_update)
            .int64("lastUpdateTimestamp", self.last_update_timestamp)
            .build()
    }

    fn from_partial(p: OracleExchangeRatePartial) -> Self {
        Self {
            exchange_rate: p.exchange_rate.unwrap_or_default(),
            last_update: p.last_update.unwrap_or_default(),
            last_update_timestamp: p.last_update_timestamp.unwrap_or_default(),
        }
    }
}

/// A denom's rate as captured in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceSnapshotItem {
    pub denom: String,
    pub oracle_exchange_rate: Option<OracleExchangeRate>,
}

/// [`PriceSnapshotItem`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSnapshotItemPartial {
    pub denom: Option<String>,
    pub oracle_exchange_rate: Option<OracleExchangeRatePartial>,
}

impl Message for PriceSnapshotItem {
    type Partial = PriceSnapshotItemPartial;

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
        let f = Fields::new("PriceSnapshotItem", value)?;
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

    fn from_partial(p: PriceSnapshotItemPartial) -> Self {
        Self {
            denom: p.denom.unwrap_or_default(),
            oracle_exchange_rate: p.oracle_exchange_rate.map(OracleExchangeRate::from_partial),
        }
    }
}

/// Rates for every denom at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceSnapshot {
    pub snapshot_timestamp: i64,
    pub price_snapshot_items: Vec<PriceSnapshotItem>,
}

/// [`PriceSnapshot`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSnapshotPartial {
    pub snapshot_timestamp: Option<i64>,
    pub price_snapshot_items: Vec<PriceSnapshotItemPartial>,
}

impl Message for PriceSnapshot {
    type Partial = PriceSnapshotPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if self.snapshot_timestamp != 0 {
            w.int64(1, self.snapshot_timestamp);
        }
        for item in &self.price_snapshot_items {
            w.message(2, item);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.snapshot_timestamp = r.int64(field, wt)?,
            2 => self.price_snapshot_items.push(r.message(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("PriceSnapshot", value)?;
        Ok(Self {
            snapshot_timestamp: f.int64("snapshotTimestamp")?,
            price_snapshot_items: f.repeated_message("priceSnapshotItems")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .int64("snapshotTimestamp", self.snapshot_timestamp)
            .repeated_message("priceSnapshotItems", &self.price_snapshot_items)
            .build()
    }

    fn from_partial(p: PriceSnapshotPartial) -> Self {
        Self {
            snapshot_timestamp: p.snapshot_timestamp.unwrap_or_default(),
            price_snapshot_items: p
                .price_snapshot_items
                .into_iter()
                .map(PriceSnapshotItem::from_partial)
                .collect(),
        }
    }
}

/// Time-weighted average price over a lookback window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OracleTwap {
    pub denom: String,
    pub twap: String,
    pub lookback_seconds: i64,
}

/// [`OracleTwap`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OracleTwapPartial {
    pub denom: Option<String>,
    pub twap: Option<String>,
    pub lookback_seconds: Option<i64>,
}

impl Message for OracleTwap {
    type Partial = OracleTwapPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.denom.is_empty() {
            w.string(1, &self.denom);
        }
        if !self.twap.is_empty() {
            w.string(2, &self.twap);
        }
        if self.lookback_seconds != 0 {
            w.int64(3, self.lookback_seconds);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.denom = r.string(field, wt)?,
            2 => self.twap = r.string(field, wt)?,
            3 => self.lookback_seconds = r.int64(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("OracleTwap", value)?;
        Ok(Self {
            denom: f.string("denom")?,
            twap: f.string("twap")?,
            lookback_seconds: f.int64("lookbackSeconds")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("denom", &self.denom)
            .string("twap", &self.twap)
            .int64("lookbackSeconds", self.lookback_seconds)
            .build()
    }

    fn from_partial(p: OracleTwapPartial) -> Self {
        Self {
            denom: p.denom.unwrap_or_default(),
            twap: p.twap.unwrap_or_default(),
            lookback_seconds: p.lookback_seconds.unwrap_or_default(),
        }
    }
}

/// Missed, abstained and successful votes in the current slash window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VotePenaltyCounter {
    pub miss_count: u64,
    pub abstain_count: u64,
    pub success_count: u64,
}

/// [`VotePenaltyCounter`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VotePenaltyCounterPartial {
    pub miss_count: Option<u64>,
    pub abstain_count: Option<u64>,
    pub success_count: Option<u64>,
}

impl Message for VotePenaltyCounter {
    type Partial = VotePenaltyCounterPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if self.miss_count != 0 {
            w.uint64(1, self.miss_count);
        }
        if self.abstain_count != 0 {
            w.uint64(2, self.abstain_count);
        }
        if self.success_count != 0 {
            w.uint64(3, self.success_count);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.miss_count = r.uint64(field, wt)?,
            2 => self.abstain_count = r.uint64(field, wt)?,
            3 => self.success_count = r.uint64(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("VotePenaltyCounter", value)?;
        Ok(Self {
            miss_count: f.uint64("missCount")?,
            abstain_count: f.uint64("abstainCount")?,
            success_count: f.uint64("successCount")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .uint64("missCount", self.miss_count)
            .uint64("abstainCount", self.abstain_count)
            .uint64("successCount", self.success_count)
            .build()
    }

    fn from_partial(p: VotePenaltyCounterPartial) -> Self {
        Self {
            miss_count: p.miss_count.unwrap_or_default(),
            abstain_count: p.abstain_count.unwrap_or_default(),
            success_count: p.success_count.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_skips_reserved_field() {
        let params = Params {
            vote_period: 2,
            lookback_duration: 3600,
            ..Default::default()
        };
        let bytes = params.encode();
        // field 1 varint, then field 9 varint (tag 0x48)
        assert_eq!(&bytes[..3], &[0x08, 0x02, 0x48]);
        assert_eq!(Params::decode(&bytes).unwrap(), params);
    }

    #[test]
    fn test_params_json_uses_camel_case() {
        let params = Params {
            vote_threshold: "0.5".to_string(),
            whitelist: vec![Denom {
                name: "uatom".to_string(),
            }],
            slash_window: 10,
            ..Default::default()
        };
        assert_eq!(
            params.to_json(),
            json!({
                "voteThreshold": "0.5",
                "whitelist": [{"name": "uatom"}],
                "slashWindow": 10
            })
        );
    }

    #[test]
    fn test_numeric_strings_accepted_for_counters() {
        let counter =
            VotePenaltyCounter::from_json(&json!({"missCount": "3", "successCount": 10})).unwrap();
        assert_eq!(counter.miss_count, 3);
        assert_eq!(counter.abstain_count, 0);
        assert_eq!(counter.success_count, 10);
    }

    #[test]
    fn test_non_numeric_counter_is_validation_error() {
        let err = VotePenaltyCounter::from_json(&json!({"missCount": "many"})).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("missCount"));
    }

    #[test]
    fn test_price_snapshot_round_trip() {
        let snapshot = PriceSnapshot {
            snapshot_timestamp: 1_700_000_000,
            price_snapshot_items: vec![PriceSnapshotItem {
                denom: "usei".to_string(),
                oracle_exchange_rate: Some(OracleExchangeRate {
                    exchange_rate: "0.25".to_string(),
                    last_update: "100".to_string(),
                    last_update_timestamp: 1_700_000_000_000,
                }),
            }],
        };
        assert_eq!(PriceSnapshot::decode(&snapshot.encode()).unwrap(), snapshot);
        assert_eq!(
            PriceSnapshot::from_json(&snapshot.to_json()).unwrap(),
            snapshot
        );
    }

    #[test]
    fn test_negative_lookback_round_trip() {
        let twap = OracleTwap {
            denom: "usei".to_string(),
            twap: "1.0".to_string(),
            lookback_seconds: -60,
        };
        assert_eq!(OracleTwap::decode(&twap.encode()).unwrap(), twap);
    }
}
