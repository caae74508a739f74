//! Memoized queries refreshed on every new block.
//!
//! A query made with `subscribe = true` keeps its response bytes in the
//! store. Later identical queries (same service, method and encoded request)
//! are answered from the memo. [`QueryStore::on_new_block`] re-fetches every
//! memoized entry and broadcasts a [`StoreEvent`] so readers know to query
//! again.
//!
//! # Example
//!
//! ```ignore
//! let store = QueryStore::new(RpcClient::new(transport));
//! let mut events = store.subscribe();
//!
//! let rates: QueryExchangeRatesResponse = store
//!     .query(OracleQueryClient::<T>::SERVICE, "ExchangeRates", &QueryExchangeRatesRequest, true)
//!     .await?;
//!
//! store.on_new_block(height).await;
//! let StoreEvent::Refreshed { height, .. } = events.recv().await?;
//! ```

use std::collections::HashMap;

use bytes::Bytes;
use tokio::sync::{broadcast, RwLock};

use crate::client::{RpcClient, Transport};
use crate::codec::Message;
use crate::error::Result;

/// Default capacity of the event channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Identity of a memoized query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub service: String,
    pub method: String,
    /// Encoded request.
    pub request: Bytes,
}

impl QueryKey {
    /// Key for `request` sent to `service/method`.
    pub fn new(service: &str, method: &str, request: Bytes) -> Self {
        Self {
            service: service.to_owned(),
            method: method.to_owned(),
            request,
        }
    }
}

/// Notification sent to store subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// Memoized entries were re-fetched for a new block.
    Refreshed {
        height: u64,
        /// Entries fetched successfully.
        entries: usize,
        /// Entries that kept their stale bytes after a failed fetch.
        failed: usize,
    },
}

/// Query cache in front of an [`RpcClient`].
pub struct QueryStore<T> {
    client: RpcClient<T>,
    memo: RwLock<HashMap<QueryKey, Bytes>>,
    events: broadcast::Sender<StoreEvent>,
}

impl<T: Transport> QueryStore<T> {
    /// Create a store with the default event capacity.
    pub fn new(client: RpcClient<T>) -> Self {
        Self::with_event_capacity(client, DEFAULT_EVENT_CAPACITY)
    }

    /// Create a store whose event channel buffers `capacity` events per
    /// lagging receiver.
    pub fn with_event_capacity(client: RpcClient<T>, capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity.max(1));
        Self {
            client,
            memo: RwLock::new(HashMap::new()),
            events,
        }
    }

    /// Client used for fetches.
    pub fn client(&self) -> &RpcClient<T> {
        &self.client
    }

    /// Run a query, answering from the memo when possible.
    ///
    /// On a miss the response is fetched and, if `subscribe` is set, kept
    /// for later calls and refreshed on every block.
    pub async fn query<Req, Resp>(
        &self,
        service: &str,
        method: &str,
        request: &Req,
        subscribe: bool,
    ) -> Result<Resp>
    where
        Req: Message,
        Resp: Message,
    {
        let key = QueryKey::new(service, method, request.encode());

        let cached = self.memo.read().await.get(&key).cloned();
        if let Some(bytes) = cached {
            tracing::trace!(service, method, "memo hit");
            return Resp::decode(&bytes);
        }

        let bytes = self
            .client
            .unary_raw(service, method, key.request.clone())
            .await?;
        let response = Resp::decode(&bytes)?;

        if subscribe {
            tracing::debug!(service, method, "memoizing query");
            self.memo.write().await.insert(key, bytes);
        }
        Ok(response)
    }

    /// Drop a memoized query. Returns whether it was present.
    pub async fn unsubscribe<Req: Message>(&self, service: &str, method: &str, request: &Req) -> bool {
        let key = QueryKey::new(service, method, request.encode());
        self.memo.write().await.remove(&key).is_some()
    }

    /// Re-fetch every memoized query and notify subscribers.
    ///
    /// A failed fetch keeps the previous bytes and is counted in `failed`.
    pub async fn on_new_block(&self, height: u64) -> StoreEvent {
        let keys: Vec<QueryKey> = self.memo.read().await.keys().cloned().collect();
        tracing::debug!(height, entries = keys.len(), "refreshing memoized queries");

        let mut fresh = Vec::with_capacity(keys.len());
        let mut failed = 0;
        for key in keys {
            match self
                .client
                .unary_raw(&key.service, &key.method, key.request.clone())
                .await
            {
                Ok(bytes) => fresh.push((key, bytes)),
                Err(e) => {
                    tracing::warn!(
                        height,
                        service = %key.service,
                        method = %key.method,
                        "refresh failed, keeping stale entry: {}",
                        e
                    );
                    failed += 1;
                }
            }
        }

        let entries = fresh.len();
        {
            let mut memo = self.memo.write().await;
            for (key, bytes) in fresh {
                // An entry unsubscribed while the refresh ran stays gone.
                if let Some(slot) = memo.get_mut(&key) {
                    *slot = bytes;
                }
            }
        }

        let event = StoreEvent::Refreshed {
            height,
            entries,
            failed,
        };
        // No receivers is not an error.
        let _ = self.events.send(event.clone());
        event
    }

    /// Receive refresh notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Drop every memoized query.
    pub async fn clear(&self) {
        self.memo.write().await.clear();
    }

    /// Number of memoized queries.
    pub async fn len(&self) -> usize {
        self.memo.read().await.len()
    }

    /// True when nothing is memoized.
    pub async fn is_empty(&self) -> bool {
        self.memo.read().await.is_empty()
    }
}
