//! Stubs for the `sei.oracle.v1.Query` service.

use super::{RpcClient, Transport};
use crate::error::Result;
use crate::types::sei::oracle_query::*;

/// Typed calls for every method of `sei.oracle.v1.Query`.
pub struct OracleQueryClient<T> {
    rpc: RpcClient<T>,
}

impl<T> Clone for OracleQueryClient<T> {
    fn clone(&self) -> Self {
        Self {
            rpc: self.rpc.clone(),
        }
    }
}

impl<T: Transport> OracleQueryClient<T> {
    /// Fully qualified service name.
    pub const SERVICE: &'static str = "sei.oracle.v1.Query";

    /// Wrap an untyped client.
    pub fn new(rpc: RpcClient<T>) -> Self {
        Self { rpc }
    }

    /// Underlying untyped client.
    pub fn rpc(&self) -> &RpcClient<T> {
        &self.rpc
    }

    /// Latest rate for one denom.
    pub async fn exchange_rate(
        &self,
        request: &QueryExchangeRateRequest,
    ) -> Result<QueryExchangeRateResponse> {
        self.rpc.unary(Self::SERVICE, "ExchangeRate", request).await
    }

    /// Latest rates for every denom.
    pub async fn exchange_rates(
        &self,
        request: &QueryExchangeRatesRequest,
    ) -> Result<QueryExchangeRatesResponse> {
        self.rpc.unary(Self::SERVICE, "ExchangeRates", request).await
    }

    /// Denoms with an active rate.
    pub async fn actives(&self, request: &QueryActivesRequest) -> Result<QueryActivesResponse> {
        self.rpc.unary(Self::SERVICE, "Actives", request).await
    }

    /// Denoms validators are expected to vote on.
    pub async fn vote_targets(
        &self,
        request: &QueryVoteTargetsRequest,
    ) -> Result<QueryVoteTargetsResponse> {
        self.rpc.unary(Self::SERVICE, "VoteTargets", request).await
    }

    /// Recent price snapshots.
    pub async fn price_snapshot_history(
        &self,
        request: &QueryPriceSnapshotHistoryRequest,
    ) -> Result<QueryPriceSnapshotHistoryResponse> {
        self.rpc
            .unary(Self::SERVICE, "PriceSnapshotHistory", request)
            .await
    }

    /// Time-weighted averages over `lookback_seconds`.
    pub async fn twaps(&self, request: &QueryTwapsRequest) -> Result<QueryTwapsResponse> {
        self.rpc.unary(Self::SERVICE, "Twaps", request).await
    }

    /// Feeder address a validator delegated voting to.
    pub async fn feeder_delegation(
        &self,
        request: &QueryFeederDelegationRequest,
    ) -> Result<QueryFeederDelegationResponse> {
        self.rpc.unary(Self::SERVICE, "FeederDelegation", request).await
    }

    /// Miss and abstain counts for a validator.
    pub async fn vote_penalty_counter(
        &self,
        request: &QueryVotePenaltyCounterRequest,
    ) -> Result<QueryVotePenaltyCounterResponse> {
        self.rpc
            .unary(Self::SERVICE, "VotePenaltyCounter", request)
            .await
    }

    /// Progress through the current slash window.
    pub async fn slash_window(
        &self,
        request: &QuerySlashWindowRequest,
    ) -> Result<QuerySlashWindowResponse> {
        self.rpc.unary(Self::SERVICE, "SlashWindow", request).await
    }

    /// Module parameters.
    pub async fn params(&self, request: &QueryParamsRequest) -> Result<QueryParamsResponse> {
        self.rpc.unary(Self::SERVICE, "Params", request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use bytes::Bytes;

    use super::*;
    use crate::client::BoxFuture;
    use crate::codec::Message;
    use crate::types::sei::oracle::OracleExchangeRate;

    /// Records the call and answers with a canned response.
    struct Recording {
        calls: Mutex<Vec<(String, String, Bytes)>>,
        response: Bytes,
    }

    impl Transport for Recording {
        fn request(&self, service: &str, method: &str, payload: Bytes) -> BoxFuture<'static, Result<Bytes>> {
            self.calls
                .lock()
                .unwrap()
                .push((service.to_string(), method.to_string(), payload));
            let response = self.response.clone();
            Box::pin(async move { Ok(response) })
        }
    }

    fn client_answering(response: impl Message) -> (OracleQueryClient<Arc<Recording>>, Arc<Recording>) {
        let transport = Arc::new(Recording {
            calls: Mutex::new(Vec::new()),
            response: response.encode(),
        });
        let client = OracleQueryClient::new(RpcClient::new(Arc::clone(&transport)));
        (client, transport)
    }

    #[tokio::test]
    async fn test_exchange_rate_routes_to_service_method() {
        let answer = QueryExchangeRateResponse {
            oracle_exchange_rate: Some(OracleExchangeRate {
                exchange_rate: "12.5".to_string(),
                ..Default::default()
            }),
        };
        let (client, transport) = client_answering(answer.clone());

        let request = QueryExchangeRateRequest {
            denom: "uatom".to_string(),
        };
        let resp = client.exchange_rate(&request).await.unwrap();
        assert_eq!(resp, answer);

        let calls = transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "sei.oracle.v1.Query");
        assert_eq!(calls[0].1, "ExchangeRate");
        assert_eq!(calls[0].2, request.encode());
    }

    #[tokio::test]
    async fn test_empty_request_sends_no_bytes() {
        let (client, transport) = client_answering(QueryActivesResponse {
            actives: vec!["usei".to_string()],
        });
        let resp = client.actives(&QueryActivesRequest).await.unwrap();
        assert_eq!(resp.actives, vec!["usei"]);

        let calls = transport.calls.lock().unwrap();
        assert_eq!(calls[0].1, "Actives");
        assert!(calls[0].2.is_empty());
    }
}
