//! `cosmos.feegrant.v1beta1` fee allowances.
//!
//! Allowances nest inside each other through `Any`, so the concrete type of
//! [`AllowedMsgAllowance::allowance`] and [`Grant::allowance`] is resolved at
//! runtime via [`Any::unpack`] or the type registry.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::base::{Coin, CoinPartial};
use crate::codec::timestamp::{from_timestamp, to_timestamp};
use crate::codec::{Fields, JsonObject, Message, Name};
use crate::error::Result;
use crate::types::google::{Any, AnyPartial, Duration, DurationPartial, Timestamp};
use crate::wire::{Reader, WireType, Writer};

fn read_timestamp(field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<DateTime<Utc>> {
    from_timestamp(&r.message::<Timestamp>(field, wt)?)
}

/// Spend limit with an optional expiry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BasicAllowance {
    pub spend_limit: Vec<Coin>,
    pub expiration: Option<DateTime<Utc>>,
}

/// [`BasicAllowance`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicAllowancePartial {
    pub spend_limit: Vec<CoinPartial>,
    pub expiration: Option<DateTime<Utc>>,
}

impl Message for BasicAllowance {
    type Partial = BasicAllowancePartial;

    fn encode_raw(&self, w: &mut Writer) {
        for coin in &self.spend_limit {
            w.message(1, coin);
        }
        if let Some(expiration) = &self.expiration {
            w.message(2, &to_timestamp(expiration));
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.spend_limit.push(r.message(field, wt)?),
            2 => self.expiration = Some(read_timestamp(field, wt, r)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("BasicAllowance", value)?;
        Ok(Self {
            spend_limit: f.repeated_message("spendLimit")?,
            expiration: f.timestamp("expiration")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .repeated_message("spendLimit", &self.spend_limit)
            .timestamp("expiration", self.expiration.as_ref())
            .build()
    }

    fn from_partial(p: BasicAllowancePartial) -> Self {
        Self {
            spend_limit: p.spend_limit.into_iter().map(Coin::from_partial).collect(),
            expiration: p.expiration,
        }
    }
}

impl Name for BasicAllowance {
    const TYPE_URL: &'static str = "/cosmos.feegrant.v1beta1.BasicAllowance";
}

/// Basic allowance plus a limit that resets every period.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PeriodicAllowance {
    pub basic: Option<BasicAllowance>,
    pub period: Option<Duration>,
    pub period_spend_limit: Vec<Coin>,
    pub period_can_spend: Vec<Coin>,
    pub period_reset: Option<DateTime<Utc>>,
}

/// [`PeriodicAllowance`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodicAllowancePartial {
    pub basic: Option<BasicAllowancePartial>,
    pub period: Option<DurationPartial>,
    pub period_spend_limit: Vec<CoinPartial>,
    pub period_can_spend: Vec<CoinPartial>,
    pub period_reset: Option<DateTime<Utc>>,
}

impl Message for PeriodicAllowance {
    type Partial = PeriodicAllowancePartial;

    fn encode_raw(&self, w: &mut Writer) {
        if let Some(basic) = &self.basic {
            w.message(1, basic);
        }
        if let Some(period) = &self.period {
            w.message(2, period);
        }
        for coin in &self.period_spend_limit {
            w.message(3, coin);
        }
        for coin in &self.period_can_spend {
            w.message(4, coin);
        }
        if let Some(reset) = &self.period_reset {
            w.message(5, &to_timestamp(reset));
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.basic = Some(r.message(field, wt)?),
            2 => self.period = Some(r.message(field, wt)?),
            3 => self.period_spend_limit.push(r.message(field, wt)?),
            4 => self.period_can_spend.push(r.message(field, wt)?),
            5 => self.period_reset = Some(read_timestamp(field, wt, r)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("PeriodicAllowance", value)?;
        Ok(Self {
            basic: f.message("basic")?,
            period: f.message("period")?,
            period_spend_limit: f.repeated_message("periodSpendLimit")?,
            period_can_spend: f.repeated_message("periodCanSpend")?,
            period_reset: f.timestamp("periodReset")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .message("basic", self.basic.as_ref())
            .message("period", self.period.as_ref())
            .repeated_message("periodSpendLimit", &self.period_spend_limit)
            .repeated_message("periodCanSpend", &self.period_can_spend)
            .timestamp("periodReset", self.period_reset.as_ref())
            .build()
    }

    fn from_partial(p: PeriodicAllowancePartial) -> Self {
        Self {
            basic: p.basic.map(BasicAllowance::from_partial),
            period: p.period.map(Duration::from_partial),
            period_spend_limit: p
                .period_spend_limit
                .into_iter()
                .map(Coin::from_partial)
                .collect(),
            period_can_spend: p
                .period_can_spend
                .into_iter()
                .map(Coin::from_partial)
                .collect(),
            period_reset: p.period_reset,
        }
    }
}

impl Name for PeriodicAllowance {
    const TYPE_URL: &'static str = "/cosmos.feegrant.v1beta1.PeriodicAllowance";
}

/// Wraps another allowance, restricting it to the listed message types.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllowedMsgAllowance {
    pub allowance: Option<Any>,
    pub allowed_messages: Vec<String>,
}

/// [`AllowedMsgAllowance`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllowedMsgAllowancePartial {
    pub allowance: Option<AnyPartial>,
    pub allowed_messages: Vec<String>,
}

impl Message for AllowedMsgAllowance {
    type Partial = AllowedMsgAllowancePartial;

    fn encode_raw(&self, w: &mut Writer) {
        if let Some(allowance) = &self.allowance {
            w.message(1, allowance);
        }
        for msg in &self.allowed_messages {
            w.string(2, msg);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.allowance = Some(r.message(field, wt)?),
            2 => self.allowed_messages.push(r.string(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("AllowedMsgAllowance", value)?;
        Ok(Self {
            allowance: f.message("allowance")?,
            allowed_messages: f.repeated_string("allowedMessages")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .message("allowance", self.allowance.as_ref())
            .repeated_string("allowedMessages", &self.allowed_messages)
            .build()
    }

    fn from_partial(p: AllowedMsgAllowancePartial) -> Self {
        Self {
            allowance: p.allowance.map(Any::from_partial),
            allowed_messages: p.allowed_messages,
        }
    }
}

impl Name for AllowedMsgAllowance {
    const TYPE_URL: &'static str = "/cosmos.feegrant.v1beta1.AllowedMsgAllowance";
}

/// An allowance granted from `granter` to `grantee`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grant {
    pub granter: String,
    pub grantee: String,
    pub allowance: Option<Any>,
}

/// [`Grant`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrantPartial {
    pub granter: Option<String>,
    pub grantee: Option<String>,
    pub allowance: Option<AnyPartial>,
}

impl Message for Grant {
    type Partial = GrantPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.granter.is_empty() {
            w.string(1, &self.granter);
        }
        if !self.grantee.is_empty() {
            w.string(2, &self.grantee);
        }
        if let Some(allowance) = &self.allowance {
            w.message(3, allowance);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.granter = r.string(field, wt)?,
            2 => self.grantee = r.string(field, wt)?,
            3 => self.allowance = Some(r.message(field, wt)?),
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("Grant", value)?;
        Ok(Self {
            granter: f.string("granter")?,
            grantee: f.string("grantee")?,
            allowance: f.message("allowance")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("granter", &self.granter)
            .string("grantee", &self.grantee)
            .message("allowance", self.allowance.as_ref())
            .build()
    }

    fn from_partial(p: GrantPartial) -> Self {
        Self {
            granter: p.granter.unwrap_or_default(),
            grantee: p.grantee.unwrap_or_default(),
            allowance: p.allowance.map(Any::from_partial),
        }
    }
}

impl Name for Grant {
    const TYPE_URL: &'static str = "/cosmos.feegrant.v1beta1.Grant";
}
