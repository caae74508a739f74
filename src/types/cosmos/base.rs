//! `cosmos.base.v1beta1` coin amounts.

use serde_json::Value;

use crate::codec::{Fields, JsonObject, Message, Name};
use crate::error::Result;
use crate::wire::{Reader, WireType, Writer};

/// A token amount. `amount` is an integer in decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

/// [`Coin`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinPartial {
    pub denom: Option<String>,
    pub amount: Option<String>,
}

impl Message for Coin {
    type Partial = CoinPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.denom.is_empty() {
            w.string(1, &self.denom);
        }
        if !self.amount.is_empty() {
            w.string(2, &self.amount);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.denom = r.string(field, wt)?,
            2 => self.amount = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("Coin", value)?;
        Ok(Self {
            denom: f.string("denom")?,
            amount: f.string("amount")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("denom", &self.denom)
            .string("amount", &self.amount)
            .build()
    }

    fn from_partial(p: CoinPartial) -> Self {
        Self {
            denom: p.denom.unwrap_or_default(),
            amount: p.amount.unwrap_or_default(),
        }
    }
}

impl Name for Coin {
    const TYPE_URL: &'static str = "/cosmos.base.v1beta1.Coin";
}

/// A token amount with a decimal `amount`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecCoin {
    pub denom: String,
    pub amount: String,
}

/// [`DecCoin`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecCoinPartial {
    pub denom: Option<String>,
    pub amount: Option<String>,
}

impl Message for DecCoin {
    type Partial = DecCoinPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.denom.is_empty() {
            w.string(1, &self.denom);
        }
        if !self.amount.is_empty() {
            w.string(2, &self.amount);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.denom = r.string(field, wt)?,
            2 => self.amount = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("DecCoin", value)?;
        Ok(Self {
            denom: f.string("denom")?,
            amount: f.string("amount")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("denom", &self.denom)
            .string("amount", &self.amount)
            .build()
    }

    fn from_partial(p: DecCoinPartial) -> Self {
        Self {
            denom: p.denom.unwrap_or_default(),
            amount: p.amount.unwrap_or_default(),
        }
    }
}

impl Name for DecCoin {
    const TYPE_URL: &'static str = "/cosmos.base.v1beta1.DecCoin";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coin_wire_bytes() {
        let coin = Coin {
            denom: "usei".to_string(),
            amount: "5".to_string(),
        };
        assert_eq!(
            &coin.encode()[..],
            &[0x0A, 0x04, b'u', b's', b'e', b'i', 0x12, 0x01, b'5']
        );
    }

    #[test]
    fn test_numeric_amount_in_json_is_coerced_to_text() {
        let coin = DecCoin::from_json(&json!({"denom": "usei", "amount": 12})).unwrap();
        assert_eq!(coin.amount, "12");
    }

    #[test]
    fn test_partial_fills_defaults() {
        let coin = Coin::from_partial(CoinPartial {
            denom: Some("usei".to_string()),
            ..Default::default()
        });
        assert_eq!(coin.amount, "");
        assert_eq!(coin.to_json(), json!({"denom": "usei"}));
    }
}
