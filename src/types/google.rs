//! Well-known types from `google.protobuf`.

use serde_json::Value;

use crate::codec::{Fields, JsonObject, Message, Name};
use crate::error::{CodecError, Result};
use crate::wire::{Reader, WireType, Writer};

/// A point in time as seconds and nanos since the Unix epoch.
///
/// Record fields of this type are exposed natively as
/// `chrono::DateTime<Utc>`; see [`crate::codec::timestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

/// [`Timestamp`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimestampPartial {
    pub seconds: Option<i64>,
    pub nanos: Option<i32>,
}

impl Message for Timestamp {
    type Partial = TimestampPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if self.seconds != 0 {
            w.int64(1, self.seconds);
        }
        if self.nanos != 0 {
            w.int32(2, self.nanos);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.seconds = r.int64(field, wt)?,
            2 => self.nanos = r.int32(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("Timestamp", value)?;
        Ok(Self {
            seconds: f.int64("seconds")?,
            nanos: f.int32("nanos")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .int64("seconds", self.seconds)
            .int32("nanos", self.nanos)
            .build()
    }

    fn from_partial(p: TimestampPartial) -> Self {
        Self {
            seconds: p.seconds.unwrap_or_default(),
            nanos: p.nanos.unwrap_or_default(),
        }
    }
}

impl Name for Timestamp {
    const TYPE_URL: &'static str = "/google.protobuf.Timestamp";
}

/// A signed span of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Duration {
    pub seconds: i64,
    pub nanos: i32,
}

/// [`Duration`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DurationPartial {
    pub seconds: Option<i64>,
    pub nanos: Option<i32>,
}

impl Message for Duration {
    type Partial = DurationPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if self.seconds != 0 {
            w.int64(1, self.seconds);
        }
        if self.nanos != 0 {
            w.int32(2, self.nanos);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.seconds = r.int64(field, wt)?,
            2 => self.nanos = r.int32(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("Duration", value)?;
        Ok(Self {
            seconds: f.int64("seconds")?,
            nanos: f.int32("nanos")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .int64("seconds", self.seconds)
            .int32("nanos", self.nanos)
            .build()
    }

    fn from_partial(p: DurationPartial) -> Self {
        Self {
            seconds: p.seconds.unwrap_or_default(),
            nanos: p.nanos.unwrap_or_default(),
        }
    }
}

impl Name for Duration {
    const TYPE_URL: &'static str = "/google.protobuf.Duration";
}

/// An encoded record tagged with its type URL.
///
/// # Example
///
/// ```
/// use sei_proto::types::cosmos::base::Coin;
/// use sei_proto::types::google::Any;
///
/// let coin = Coin { denom: "usei".into(), amount: "10".into() };
/// let any = Any::pack(&coin);
/// assert_eq!(any.type_url, "/cosmos.base.v1beta1.Coin");
/// assert_eq!(any.unpack::<Coin>().unwrap(), coin);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Any {
    pub type_url: String,
    pub value: Vec<u8>,
}

/// [`Any`] with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnyPartial {
    pub type_url: Option<String>,
    pub value: Option<Vec<u8>>,
}

impl Any {
    /// Encode `msg` and tag it with its type URL.
    pub fn pack<M: Name>(msg: &M) -> Self {
        Self {
            type_url: M::TYPE_URL.to_owned(),
            value: msg.encode_to_vec(),
        }
    }

    /// True if the payload is tagged as `M`.
    pub fn is<M: Name>(&self) -> bool {
        self.type_url == M::TYPE_URL
    }

    /// Decode the payload as `M`.
    ///
    /// Fails with [`CodecError::TypeMismatch`] if the tag names another type.
    pub fn unpack<M: Name>(&self) -> Result<M> {
        if !self.is::<M>() {
            return Err(CodecError::TypeMismatch {
                expected: M::TYPE_URL.to_owned(),
                actual: self.type_url.clone(),
            });
        }
        M::decode(&self.value)
    }
}

impl Message for Any {
    type Partial = AnyPartial;

    fn encode_raw(&self, w: &mut Writer) {
        if !self.type_url.is_empty() {
            w.string(1, &self.type_url);
        }
        if !self.value.is_empty() {
            w.bytes(2, &self.value);
        }
    }

    fn merge_field(&mut self, field: u32, wt: WireType, r: &mut Reader<'_>) -> Result<()> {
        match field {
            1 => self.type_url = r.string(field, wt)?,
            2 => self.value = r.bytes(field, wt)?,
            _ => r.skip_field(field, wt)?,
        }
        Ok(())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let f = Fields::new("Any", value)?;
        Ok(Self {
            type_url: f.string("typeUrl")?,
            value: f.bytes("value")?,
        })
    }

    fn to_json(&self) -> Value {
        JsonObject::new()
            .string("typeUrl", &self.type_url)
            .bytes("value", &self.value)
            .build()
    }

    fn from_partial(p: AnyPartial) -> Self {
        Self {
            type_url: p.type_url.unwrap_or_default(),
            value: p.value.unwrap_or_default(),
        }
    }
}
