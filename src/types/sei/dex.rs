//! `seiprotocol.seichain.dex` order book records.

use serde_json::Value;

use crate::codec::{Enumeration, Fields, JsonObject, Message, Name};
use crate::error::Result;
use crate::proto_enum;
use crate::wire::{Reader, WireType, Writer};

proto_enum! {
    /// Lifecycle of a placed order.
    pub enum OrderStatus {
        Placed = 0 => "PLACED",
        FailedToPlace = 1 => "FAILED_TO_PLACE",
        Cancelled = 2 => "CANCELLED",
        Fulfilled = 3 => "FULFILLED",
    }
}

proto_enum! {
    /// Ordinal 2 is retired.
    pub enum OrderType {
        Limit = 0 => "LIMIT",
        Market = 1 => "MARKET",
        FokMarket = 3 => "FOKMARKET",
        FokMarketByValue = 4 => "FOKMARKETBYVALUE",
        StopLoss = 5 => "STOPLOSS",
        StopLimit = 6 => "STOPLIMIT",
    }
}

proto_enum! {
    /// Side of the book.
    pub enum PositionDirection {
        Long = 0 => "LONG",
        Short = 1 => "SHORT",
    }
}

proto_enum! {
    /// Who cancelled an order.
    pub enum CancellationInitiator {
        User = 0 => "USER",
        Liquidated = 1 => "LIQUIDATED",
    }
}

/// An order resting on a contract's book. Prices and quantities are
/// decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Order {
    pub id: u64,
    pub status: OrderStatus,
    pub account: String,
    pub contract_addr: String,
    pub price: String,
    pub quantity: String,
    pub price_denom: String,
    pub asset_denom: String,
    pub order_type: OrderType,
    pub position_direction: PositionDirection,
    pub data: String,
    pub status_description: String,
    pub nominal: String,
    pub trigger_price: String,
    pub trigger_status: bool,
}

/// [`Order`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderPartial {
    pub id: Option<u64>,
    pub status: Option<OrderStatus>,
    pub account: Option<String>,
    pub contract_addr: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<String>,
    pub price_denom: Option<String>,
    pub asset_denom: Option<String>,
    pub order_type: Option<OrderType>,
    pub position_direction: Option<PositionDirection>,
    pub data: Option<String>,
    pub status_description: Option<String>,
    pub nominal: Option<String>,
    pub trigger_price: Option<String>,
    pub trigger_status: Option<bool>,
}

impl Message for Order {
    type Partial = OrderPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if self.id != 0 {
            w.uint64(1, self.id);
        }
        if !self.status.is_default() {
            w.enumeration(2, self.status);
        }
        if !self.account.is_empty() {
            w.string(3, &self.account);
        }
        if !self.contract_addr.is_empty() {
            w.string(4, &self.contract_addr);
        }
        if !self.price.is_empty() {
            w.string(5, &self.price);
        }
        if !self.quantity.is_empty() {
            w.string(6, &self.quantity);
        }
        if !self.price_denom.is_empty() {
            w.string(7, &self.price_denom);
        }
        if !self.asset_denom.is_empty() {
            w.string(8, &self.asset_denom);
        }
        if !self.order_type.is_default() {
            w.enumeration(9, self.order_type);
        }
        if !self.position_direction.is_default() {
            w.enumeration(10, self.position_direction);
        }
        if !self.data.is_empty() {
            w.string(11, &self.data);
        }
        if !self.status_description.is_empty() {
            w.string(12, &self.status_description);
        }
        if !self.nominal.is_empty() {
            w.string(13, &self.nominal);
        }
        if !self.trigger_price.is_empty() {
            w.string(14, &self.trigger_price);
        }
        if self.trigger_status {
            w.bool(15, self.trigger_status);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.id = r.uint64(field, wt)?,
            2 => self.status = r.enumeration(field, wt)?,
            3 => self.account = r.string(field, wt)?,
            4 => self.contract_addr = r.string(field, wt)?,
            5 => self.price = r.string(field, wt)?,
            6 => self.quantity = r.string(field, wt)?,
            7 => self.price_denom = r.string(field, wt)?,
            8 => self.asset_denom = r.string(field, wt)?,
            9 => self.order_type = r.enumeration(field, wt)?,
            10 => self.position_direction = r.enumeration(field, wt)?,
            11 => self.data = r.string(field, wt)?,
            12 => self.status_description = r.string(field, wt)?,
            13 => self.nominal = r.string(field, wt)?,
            14 => self.trigger_price = r.string(field, wt)?,
            15 => self.trigger_status = r.bool(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("Order", value)?;
        Ok(Self {
            id: f.uint64("id")?,
            status: f.enumeration("status"),
            account: f.string("account")?,
            contract_addr: f.string("contractAddr")?,
            price: f.string("price")?,
            quantity: f.string("quantity")?,
            price_denom: f.string("priceDenom")?,
            asset_denom: f.string("assetDenom")?,
            order_type: f.enumeration("orderType"),
            position_direction: f.enumeration("positionDirection"),
            data: f.string("data")?,
            status_description: f.string("statusDescription")?,
            nominal: f.string("nominal")?,
            trigger_price: f.string("triggerPrice")?,
            trigger_status: f.bool("triggerStatus")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .uint64("id", self.id)
            .enumeration("status", self.status)
            .string("account", &self.account)
            .string("contractAddr", &self.contract_addr)
            .string("price", &self.price)
            .string("quantity", &self.quantity)
            .string("priceDenom", &self.price_denom)
            .string("assetDenom", &self.asset_denom)
            .enumeration("orderType", self.order_type)
            .enumeration("positionDirection", self.position_direction)
            .string("data", &self.data)
            .string("statusDescription", &self.status_description)
            .string("nominal", &self.nominal)
            .string("triggerPrice", &self.trigger_price)
            .bool("triggerStatus", self.trigger_status)
            .build()
    }

    fn from_partial(p: OrderPartial) -> Self {
        Self {
            id: p.id.unwrap_or_default(),
            status: p.status.unwrap_or_default(),
            account: p.account.unwrap_or_default(),
            contract_addr: p.contract_addr.unwrap_or_default(),
            price: p.price.unwrap_or_default(),
            quantity: p.quantity.unwrap_or_default(),
            price_denom: p.price_denom.unwrap_or_default(),
            asset_denom: p.asset_denom.unwrap_or_default(),
            order_type: p.order_type.unwrap_or_default(),
            position_direction: p.position_direction.unwrap_or_default(),
            data: p.data.unwrap_or_default(),
            status_description: p.status_description.unwrap_or_default(),
            nominal: p.nominal.unwrap_or_default(),
            trigger_price: p.trigger_price.unwrap_or_default(),
            trigger_status: p.trigger_status.unwrap_or_default(),
        }
    }
}

impl Name for Order {
    const TYPE_URL: &'static str = "/seiprotocol.seichain.dex.Order";
}

/// A cancelled order and why it was cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cancellation {
    pub id: u64,
    pub initiator: CancellationInitiator,
    pub creator: String,
    pub contract_addr: String,
    pub price_denom: String,
    pub asset_denom: String,
    pub position_direction: PositionDirection,
    pub price: String,
}

/// [`Cancellation`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CancellationPartial {
    pub id: Option<u64>,
    pub initiator: Option<CancellationInitiator>,
    pub creator: Option<String>,
    pub contract_addr: Option<String>,
    pub price_denom: Option<String>,
    pub asset_denom: Option<String>,
    pub position_direction: Option<PositionDirection>,
    pub price: Option<String>,
}

impl Message for Cancellation {
    type Partial = CancellationPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if self.id != 0 {
            w.uint64(1, self.id);
        }
        if !self.initiator.is_default() {
            w.enumeration(2, self.initiator);
        }
        if !self.creator.is_empty() {
            w.string(3, &self.creator);
        }
        if !self.contract_addr.is_empty() {
            w.string(4, &self.contract_addr);
        }
        if !self.price_denom.is_empty() {
            w.string(5, &self.price_denom);
        }
        if !self.asset_denom.is_empty() {
            w.string(6, &self.asset_denom);
        }
        if !self.position_direction.is_default() {
            w.enumeration(7, self.position_direction);
        }
        if !self.price.is_empty() {
            w.string(8, &self.price);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.id = r.uint64(field, wt)?,
            2 => self.initiator = r.enumeration(field, wt)?,
            3 => self.creator = r.string(field, wt)?,
            4 => self.contract_addr = r.string(field, wt)?,
            5 => self.price_denom = r.string(field, wt)?,
            6 => self.asset_denom = r.string(field, wt)?,
            7 => self.position_direction = r.enumeration(field, wt)?,
            8 => self.price = r.string(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("Cancellation", value)?;
        Ok(Self {
            id: f.uint64("id")?,
            initiator: f.enumeration("initiator"),
            creator: f.string("creator")?,
            contract_addr: f.string("contractAddr")?,
            price_denom: f.string("priceDenom")?,
            asset_denom: f.string("assetDenom")?,
            position_direction: f.enumeration("positionDirection"),
            price: f.string("price")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .uint64("id", self.id)
            .enumeration("initiator", self.initiator)
            .string("creator", &self.creator)
            .string("contractAddr", &self.contract_addr)
            .string("priceDenom", &self.price_denom)
            .string("assetDenom", &self.asset_denom)
            .enumeration("positionDirection", self.position_direction)
            .string("price", &self.price)
            .build()
    }

    fn from_partial(p: CancellationPartial) -> Self {
        Self {
            id: p.id.unwrap_or_default(),
            initiator: p.initiator.unwrap_or_default(),
            creator: p.creator.unwrap_or_default(),
            contract_addr: p.contract_addr.unwrap_or_default(),
            price_denom: p.price_denom.unwrap_or_default(),
            asset_denom: p.asset_denom.unwrap_or_default(),
            position_direction: p.position_direction.unwrap_or_default(),
            price: p.price.unwrap_or_default(),
        }
    }
}

impl Name for Cancellation {
    const TYPE_URL: &'static str = "/seiprotocol.seichain.dex.Cancellation";
}

/// Ids of the orders still open on a price level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveOrders {
    pub ids: Vec<u64>,
}

/// [`ActiveOrders`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveOrdersPartial {
    pub ids: Vec<u64>,
}

impl Message for ActiveOrders {
    type Partial = ActiveOrdersPartial;

    fn encode_raw(&self, w: &mut Writer) {
        w.packed_uint64(1, &self.ids);
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => r.repeated_uint64(field, wt, &mut self.ids)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("ActiveOrders", value)?;
        Ok(Self {
            ids: f.repeated_uint64("ids")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new().repeated_uint64("ids", &self.ids).build()
    }

    fn from_partial(p: ActiveOrdersPartial) -> Self {
        Self { ids: p.ids }
    }
}
