//! `seiprotocol.seichain.oracle` transaction messages. This family keeps
//! the declared snake_case names in JSON.

use serde_json::Value;

use crate::codec::{Fields, JsonObject, Message, Name};
use crate::error::Result;
use crate::wire::{Reader, WireType, Writer};

/// Commitment to a later vote: hash of `salt:exchange_rates:validator`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MsgAggregateExchangeRatePrevote {
    pub hash: String,
    pub feeder: String,
    pub validator: String,
}

/// [`MsgAggregateExchangeRatePrevote`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MsgAggregateExchangeRatePrevotePartial {
    pub hash: Option<String>,
    pub feeder: Option<String>,
    pub validator: Option<String>,
}

impl Message for MsgAggregateExchangeRatePrevote {
    type Partial = MsgAggregateExchangeRatePrevotePartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.hash.is_empty() {
            w.string(1, &self.hash);
        }
        if !self.feeder.is_empty() {
            w.string(2, &self.feeder);
        }
        if !self.validator.is_empty() {
            w.string(3, &self.validator);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.hash = r.string(field, wt)?,
            2 => self.feeder = r.string(field, wt)?,
            3 => self.validator = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("MsgAggregateExchangeRatePrevote", value)?;
        Ok(Self {
            hash: f.string("hash")?,
            feeder: f.string("feeder")?,
            validator: f.string("validator")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("hash", &self.hash)
            .string("feeder", &self.feeder)
            .string("validator", &self.validator)
            .build()
    }

    fn from_partial(p: MsgAggregateExchangeRatePrevotePartial) -> Self {
        Self {
            hash: p.hash.unwrap_or_default(),
            feeder: p.feeder.unwrap_or_default(),
            validator: p.validator.unwrap_or_default(),
        }
    }
}

impl Name for MsgAggregateExchangeRatePrevote {
    const TYPE_URL: &'static str = "/seiprotocol.seichain.oracle.MsgAggregateExchangeRatePrevote";
}

/// Vote revealing the rates committed to by a prevote.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MsgAggregateExchangeRateVote {
    pub salt: String,
    /// Comma-separated `<rate><denom>` list.
    pub exchange_rates: String,
    pub feeder: String,
    pub validator: String,
}

/// [`MsgAggregateExchangeRateVote`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MsgAggregateExchangeRateVotePartial {
    pub salt: Option<String>,
    pub exchange_rates: Option<String>,
    pub feeder: Option<String>,
    pub validator: Option<String>,
}

impl Message for MsgAggregateExchangeRateVote {
    type Partial = MsgAggregateExchangeRateVotePartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.salt.is_empty() {
            w.string(1, &self.salt);
        }
        if !self.exchange_rates.is_empty() {
            w.string(2, &self.exchange_rates);
        }
        if !self.feeder.is_empty() {
            w.string(3, &self.feeder);
        }
        if !self.validator.is_empty() {
            w.string(4, &self.validator);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.salt = r.string(field, wt)?,
            2 => self.exchange_rates = r.string(field, wt)?,
            3 => self.feeder = r.string(field, wt)?,
            4 => self.validator = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("MsgAggregateExchangeRateVote", value)?;
        Ok(Self {
            salt: f.string("salt")?,
            exchange_rates: f.string("exchange_rates")?,
            feeder: f.string("feeder")?,
            validator: f.string("validator")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("salt", &self.salt)
            .string("exchange_rates", &self.exchange_rates)
            .string("feeder", &self.feeder)
            .string("validator", &self.validator)
            .build()
    }

    fn from_partial(p: MsgAggregateExchangeRateVotePartial) -> Self {
        Self {
            salt: p.salt.unwrap_or_default(),
            exchange_rates: p.exchange_rates.unwrap_or_default(),
            feeder: p.feeder.unwrap_or_default(),
            validator: p.validator.unwrap_or_default(),
        }
    }
}

impl Name for MsgAggregateExchangeRateVote {
    const TYPE_URL: &'static str = "/seiprotocol.seichain.oracle.MsgAggregateExchangeRateVote";
}

/// Delegates a validator's oracle voting rights to a feeder account.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MsgDelegateFeedConsent {
    pub operator: String,
    pub delegate: String,
}

/// [`MsgDelegateFeedConsent`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MsgDelegateFeedConsentPartial {
    pub operator: Option<String>,
    pub delegate: Option<String>,
}

impl Message for MsgDelegateFeedConsent {
    type Partial = MsgDelegateFeedConsentPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.operator.is_empty() {
            w.string(1, &self.operator);
        }
        if !self.delegate.is_empty() {
            w.string(2, &self.delegate);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.operator = r.string(field, wt)?,
            2 => self.delegate = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("MsgDelegateFeedConsent", value)?;
        Ok(Self {
            operator: f.string("operator")?,
            delegate: f.string("delegate")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("operator", &self.operator)
            .string("delegate", &self.delegate)
            .build()
    }

    fn from_partial(p: MsgDelegateFeedConsentPartial) -> Self {
        Self {
            operator: p.operator.unwrap_or_default(),
            delegate: p.delegate.unwrap_or_default(),
        }
    }
}

impl Name for MsgDelegateFeedConsent {
    const TYPE_URL: &'static str = "/seiprotocol.seichain.oracle.MsgDelegateFeedConsent";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vote_json_keeps_snake_case() {
        let vote = MsgAggregateExchangeRateVote {
            salt: "abcd".to_string(),
            exchange_rates: "0.1uatom,2.5usei".to_string(),
            ..Default::default()
        };
        assert_eq!(
            vote.to_json(),
            json!({"salt": "abcd", "exchange_rates": "0.1uatom,2.5usei"})
        );
        // camelCase keys are not recognized here
        let parsed =
            MsgAggregateExchangeRateVote::from_json(&json!({"exchangeRates": "1usei"})).unwrap();
        assert!(parsed.exchange_rates.is_empty());
    }

    #[test]
    fn test_feed_consent_bytes() {
        let consent = MsgDelegateFeedConsent {
            operator: "op".to_string(),
            delegate: "de".to_string(),
        };
        assert_eq!(
            &consent.encode()[..],
            &[0x0A, 0x02, b'o', b'p', 0x12, 0x02, b'd', b'e']
        );
        assert_eq!(
            MsgDelegateFeedConsent::decode(&consent.encode()).unwrap(),
            consent
        );
    }

    #[test]
    fn test_prevote_from_partial() {
        let prevote = MsgAggregateExchangeRatePrevote::from_partial(
            MsgAggregateExchangeRatePrevotePartial {
                hash: Some("ff".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(prevote.hash, "ff");
        assert!(prevote.feeder.is_empty());
    }
}
