//! Type registry for dispatching `Any` payloads by type URL.
//!
//! A registry maps type URLs to codecs that move a record between its wire
//! bytes and JSON without the caller naming the Rust type. It is built once
//! and never mutated, so lookups need no locking.
//!
//! # Example
//!
//! ```
//! use sei_proto::registry::TypeRegistry;
//! use sei_proto::types::cosmos::base::Coin;
//! use sei_proto::types::google::Any;
//!
//! let registry = TypeRegistry::builder().register::<Coin>().build();
//!
//! let any = Any::pack(&Coin { denom: "usei".into(), amount: "5".into() });
//! let json = registry.decode_any(&any).unwrap();
//! assert_eq!(json["@type"], "/cosmos.base.v1beta1.Coin");
//! assert_eq!(json["denom"], "usei");
//! ```

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::codec::{Message, Name};
use crate::error::{CodecError, Result};
use crate::types::cosmos::accesscontrol::{MessageDependencyMapping, WasmDependencyMapping};
use crate::types::cosmos::base::{Coin, DecCoin};
use crate::types::cosmos::feegrant::{
    AllowedMsgAllowance, BasicAllowance, Grant, PeriodicAllowance,
};
use crate::types::cosmos::tx::TxBody;
use crate::types::google::{Any, Duration, Timestamp};
use crate::types::sei::dex::{Cancellation, Order};
use crate::types::sei::oracle::Params as OracleParams;
use crate::types::sei::oracle_legacy::{
    MsgAggregateExchangeRatePrevote, MsgAggregateExchangeRateVote, MsgDelegateFeedConsent,
};

/// JSON key carrying the type URL of a decoded `Any`.
pub const TYPE_KEY: &str = "@type";

/// Type-erased codec for one record type.
pub trait TypeCodec: Send + Sync + 'static {
    /// Type URL this codec handles.
    fn type_url(&self) -> &'static str;

    /// Decode wire bytes and render them as JSON.
    fn decode_to_json(&self, bytes: &[u8]) -> Result<Value>;

    /// Build a record from JSON and encode it to wire bytes.
    fn encode_from_json(&self, value: &Value) -> Result<Vec<u8>>;
}

/// [`TypeCodec`] backed by a concrete [`Message`] type.
pub struct MessageCodec<M> {
    _phantom: PhantomData<fn() -> M>,
}

impl<M: Name> MessageCodec<M> {
    /// Codec for `M`.
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<M: Name> Default for MessageCodec<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Name> TypeCodec for MessageCodec<M> {
    fn type_url(&self) -> &'static str {
        M::TYPE_URL
    }

    fn decode_to_json(&self, bytes: &[u8]) -> Result<Value> {
        Ok(M::decode(bytes)?.to_json())
    }

    fn encode_from_json(&self, value: &Value) -> Result<Vec<u8>> {
        Ok(M::from_json(value)?.encode_to_vec())
    }
}

/// Collects codecs before the registry is frozen.
#[derive(Default)]
pub struct TypeRegistryBuilder {
    codecs: HashMap<&'static str, Box<dyn TypeCodec>>,
}

impl TypeRegistryBuilder {
    /// Register `M` under its type URL.
    pub fn register<M: Name>(self) -> Self {
        self.register_codec(Box::new(MessageCodec::<M>::new()))
    }

    /// Register an arbitrary codec. A second codec for the same URL
    /// replaces the first.
    pub fn register_codec(mut self, codec: Box<dyn TypeCodec>) -> Self {
        let url = codec.type_url();
        if self.codecs.insert(url, codec).is_some() {
            tracing::warn!(type_url = url, "codec registered twice, keeping the last one");
        }
        self
    }

    /// Freeze the collected codecs.
    pub fn build(self) -> TypeRegistry {
        TypeRegistry {
            codecs: self.codecs,
        }
    }
}

/// Immutable map from type URL to codec.
pub struct TypeRegistry {
    codecs: HashMap<&'static str, Box<dyn TypeCodec>>,
}

impl TypeRegistry {
    /// Start an empty registry.
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::default()
    }

    /// Get the codec for a type URL.
    pub fn get(&self, type_url: &str) -> Option<&dyn TypeCodec> {
        self.codecs.get(type_url).map(|c| c.as_ref())
    }

    /// True if a codec is registered for `type_url`.
    pub fn contains(&self, type_url: &str) -> bool {
        self.codecs.contains_key(type_url)
    }

    /// Registered type URLs, sorted.
    pub fn type_urls(&self) -> Vec<&'static str> {
        let mut urls: Vec<_> = self.codecs.keys().copied().collect();
        urls.sort_unstable();
        urls
    }

    /// Number of registered codecs.
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    fn codec(&self, type_url: &str) -> Result<&dyn TypeCodec> {
        self.get(type_url)
            .ok_or_else(|| CodecError::UnknownType(type_url.to_owned()))
    }

    /// Render an `Any` as JSON: the payload's fields plus `"@type"`.
    pub fn decode_any(&self, any: &Any) -> Result<Value> {
        let codec = self.codec(&any.type_url)?;
        tracing::trace!(type_url = %any.type_url, len = any.value.len(), "decoding Any");

        let mut object = Map::new();
        object.insert(TYPE_KEY.to_owned(), Value::String(any.type_url.clone()));
        if let Value::Object(fields) = codec.decode_to_json(&any.value)? {
            object.extend(fields);
        }
        Ok(Value::Object(object))
    }

    /// Build an `Any` from JSON carrying `"@type"`. Other keys are the
    /// payload's fields.
    pub fn encode_any(&self, value: &Value) -> Result<Any> {
        let type_url = value
            .get(TYPE_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| CodecError::validation(TYPE_KEY, "missing or not a string"))?;
        let codec = self.codec(type_url)?;
        Ok(Any {
            type_url: codec.type_url().to_owned(),
            value: codec.encode_from_json(value)?,
        })
    }

    /// Render every message of a transaction body as JSON.
    pub fn decode_messages(&self, body: &TxBody) -> Result<Vec<Value>> {
        body.messages.iter().map(|any| self.decode_any(any)).collect()
    }
}

static DEFAULT_REGISTRY: LazyLock<TypeRegistry> = LazyLock::new(|| {
    TypeRegistry::builder()
        .register::<Timestamp>()
        .register::<Duration>()
        .register::<Coin>()
        .register::<DecCoin>()
        .register::<MessageDependencyMapping>()
        .register::<WasmDependencyMapping>()
        .register::<BasicAllowance>()
        .register::<PeriodicAllowance>()
        .register::<AllowedMsgAllowance>()
        .register::<Grant>()
        .register::<Order>()
        .register::<Cancellation>()
        .register::<OracleParams>()
        .register::<MsgAggregateExchangeRatePrevote>()
        .register::<MsgAggregateExchangeRateVote>()
        .register::<MsgDelegateFeedConsent>()
        .build()
});

/// Process-wide registry of every record shipped with the crate that can
/// travel inside `Any`.
pub fn default_registry() -> &'static TypeRegistry {
    &DEFAULT_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_and_lookup() {
        let registry = TypeRegistry::builder()
            .register::<Coin>()
            .register::<DecCoin>()
            .build();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("/cosmos.base.v1beta1.Coin"));
        assert!(!registry.contains("/cosmos.base.v1beta1.Unknown"));
        assert_eq!(
            registry.get("/cosmos.base.v1beta1.DecCoin").unwrap().type_url(),
            DecCoin::TYPE_URL
        );
        assert_eq!(
            registry.type_urls(),
            vec!["/cosmos.base.v1beta1.Coin", "/cosmos.base.v1beta1.DecCoin"]
        );
    }

    #[test]
    fn test_duplicate_registration_keeps_one() {
        let registry = TypeRegistry::builder()
            .register::<Coin>()
            .register::<Coin>()
            .build();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_type_url() {
        let registry = TypeRegistry::builder().build();
        assert!(registry.is_empty());

        let any = Any {
            type_url: "/nope.Thing".to_string(),
            value: vec![],
        };
        match registry.decode_any(&any).unwrap_err() {
            CodecError::UnknownType(url) => assert_eq!(url, "/nope.Thing"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_any_json_round_trip() {
        let registry = default_registry();
        let coin = Coin {
            denom: "usei".to_string(),
            amount: "42".to_string(),
        };
        let any = Any::pack(&coin);

        let value = registry.decode_any(&any).unwrap();
        assert_eq!(
            value,
            json!({"@type": "/cosmos.base.v1beta1.Coin", "denom": "usei", "amount": "42"})
        );
        assert_eq!(registry.encode_any(&value).unwrap(), any);
    }

    #[test]
    fn test_encode_any_requires_type_key() {
        let err = default_registry()
            .encode_any(&json!({"denom": "usei"}))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_default_registry_covers_shipped_types() {
        let registry = default_registry();
        for url in [
            "/google.protobuf.Timestamp",
            "/cosmos.feegrant.v1beta1.BasicAllowance",
            "/cosmos.accesscontrol.v1beta1.MessageDependencyMapping",
            "/seiprotocol.seichain.dex.Order",
            "/seiprotocol.seichain.oracle.MsgAggregateExchangeRateVote",
            "/sei.oracle.v1.Params",
        ] {
            assert!(registry.contains(url), "missing {url}");
        }
    }

    #[test]
    fn test_decode_tx_messages() {
        let body = TxBody {
            messages: vec![
                Any::pack(&MsgDelegateFeedConsent {
                    operator: "val".to_string(),
                    delegate: "feeder".to_string(),
                }),
                Any::pack(&Coin::default()),
            ],
            ..Default::default()
        };
        let messages = default_registry().decode_messages(&body).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["delegate"], "feeder");
        assert_eq!(messages[1], json!({"@type": "/cosmos.base.v1beta1.Coin"}));
    }
}
