//! RPC stubs over an opaque request/response transport.
//!
//! The [`Transport`] trait moves encoded bytes for a `(service, method)`
//! pair; how it gets them there (gRPC, an HTTP gateway, an in-process mock)
//! is up to the implementor. [`RpcClient`] layers the codec and a request
//! timeout on top.
//!
//! # Example
//!
//! ```ignore
//! use sei_proto::client::{OracleQueryClient, RpcClient};
//! use sei_proto::types::sei::oracle_query::QueryExchangeRateRequest;
//!
//! let client = OracleQueryClient::new(RpcClient::new(my_transport));
//! let resp = client
//!     .exchange_rate(&QueryExchangeRateRequest { denom: "uatom".into() })
//!     .await?;
//! ```

mod oracle;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use serde::{Deserialize, Deserializer};

use crate::codec::Message;
use crate::error::{CodecError, Result};

pub use oracle::OracleQueryClient;

/// Default time to wait for a response.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Boxed future returned by transports.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Byte channel to a remote service.
pub trait Transport: Send + Sync + 'static {
    /// Send an encoded request and resolve to the encoded response.
    ///
    /// `service` is the fully qualified service name, e.g.
    /// `sei.oracle.v1.Query`; `method` is the bare method name.
    fn request(&self, service: &str, method: &str, payload: Bytes) -> BoxFuture<'static, Result<Bytes>>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn request(&self, service: &str, method: &str, payload: Bytes) -> BoxFuture<'static, Result<Bytes>> {
        (**self).request(service, method, payload)
    }
}

/// Client configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// How long a single request may take, in milliseconds when loaded.
    #[serde(rename = "request_timeout_ms", deserialize_with = "duration_from_millis")]
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

fn duration_from_millis<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}

/// Typed unary calls over a [`Transport`].
pub struct RpcClient<T> {
    transport: Arc<T>,
    config: ClientConfig,
}

impl<T> Clone for RpcClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config: self.config.clone(),
        }
    }
}

impl<T: Transport> RpcClient<T> {
    /// Create a client with the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    /// Create a client with an explicit configuration.
    pub fn with_config(transport: T, config: ClientConfig) -> Self {
        Self {
            transport: Arc::new(transport),
            config,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Encode `request`, send it, and decode the response as `Resp`.
    pub async fn unary<Req, Resp>(&self, service: &str, method: &str, request: &Req) -> Result<Resp>
    where
        Req: Message,
        Resp: Message,
    {
        let response = self.unary_raw(service, method, request.encode()).await?;
        Resp::decode(&response)
    }

    /// Send pre-encoded request bytes under the configured timeout.
    pub async fn unary_raw(&self, service: &str, method: &str, payload: Bytes) -> Result<Bytes> {
        tracing::debug!(service, method, request_len = payload.len(), "sending request");

        let limit = self.config.request_timeout;
        let response = match tokio::time::timeout(limit, self.transport.request(service, method, payload)).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(service, method, ?limit, "request timed out");
                return Err(CodecError::Timeout(limit));
            }
        };

        tracing::trace!(service, method, response_len = response.len(), "received response");
        Ok(response)
    }
}
