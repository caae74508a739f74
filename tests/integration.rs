//! Integration tests for sei-proto.
//!
//! These tests verify the integration between the codec, the record
//! families, the registry, and the client/store stack.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use chrono::{TimeZone, Utc};
use serde_json::json;

use sei_proto::client::{BoxFuture, OracleQueryClient, RpcClient, Transport};
use sei_proto::codec::{Enumeration, Message};
use sei_proto::registry::default_registry;
use sei_proto::store::{QueryStore, StoreEvent};
use sei_proto::types::cosmos::accesscontrol::{
    AccessOperation, AccessType, MessageDependencyMapping, ResourceType,
};
use sei_proto::types::cosmos::base::Coin;
use sei_proto::types::cosmos::crypto::CompactBitArray;
use sei_proto::types::cosmos::feegrant::{BasicAllowance, Grant};
use sei_proto::types::cosmos::signing::signature_descriptor::data::{Multi, Single, Sum};
use sei_proto::types::cosmos::signing::signature_descriptor::Data;
use sei_proto::types::cosmos::signing::{SignMode, SignatureDescriptor};
use sei_proto::types::cosmos::tx::{TxBody, TxRaw};
use sei_proto::types::google::Any;
use sei_proto::types::sei::oracle::OracleExchangeRate;
use sei_proto::types::sei::oracle_legacy::MsgAggregateExchangeRateVote;
use sei_proto::types::sei::oracle_query::{
    QueryExchangeRateRequest, QueryExchangeRateResponse, QueryParamsRequest,
};
use sei_proto::wire::{to_safe_number, MAX_SAFE_INTEGER};
use sei_proto::CodecError;

/// Access operation from the wire-format walkthrough.
#[test]
fn test_access_operation_exact_bytes() {
    let op = AccessOperation {
        access_type: AccessType::Write,
        resource_type: ResourceType::Any,
        identifier_template: "abc".to_string(),
    };
    let bytes = op.encode();
    assert_eq!(&bytes[..], &[0x08, 0x02, 0x1A, 0x03, 0x61, 0x62, 0x63]);

    let decoded = AccessOperation::decode(&bytes).unwrap();
    assert_eq!(decoded, op);
    assert!(decoded.resource_type.is_default());
}

/// A newer producer adds fields this build does not know.
#[test]
fn test_forward_compatible_decode() {
    let mapping = MessageDependencyMapping {
        message_key: "bank/send".to_string(),
        access_ops: vec![AccessOperation {
            access_type: AccessType::Read,
            resource_type: ResourceType::KvBank,
            identifier_template: "*".to_string(),
        }],
        dynamic_enabled: true,
    };
    let mut bytes = mapping.encode_to_vec();
    // field 15 fixed64, field 16 length-delimited, field 17 fixed32
    bytes.extend_from_slice(&[0x79, 1, 2, 3, 4, 5, 6, 7, 8]);
    bytes.extend_from_slice(&[0x82, 0x01, 0x02, 0xFF, 0xFF]);
    bytes.extend_from_slice(&[0x8D, 0x01, 9, 9, 9, 9]);

    assert_eq!(MessageDependencyMapping::decode(&bytes).unwrap(), mapping);
}

#[test]
fn test_truncated_input_is_framing_error() {
    let bytes = Coin {
        denom: "usei".to_string(),
        amount: "100".to_string(),
    }
    .encode();
    // 0A 04 "usei" 12 03 "100"; cuts at 6 and 11 land on field boundaries
    for cut in [1, 2, 5, 7, 8, 10] {
        let err = Coin::decode(&bytes[..cut]).unwrap_err();
        assert!(err.is_framing(), "cut at {cut}: {err}");
    }
}

#[test]
fn test_safe_integer_boundary() {
    assert_eq!(to_safe_number(MAX_SAFE_INTEGER).unwrap(), MAX_SAFE_INTEGER);
    assert!(to_safe_number(MAX_SAFE_INTEGER + 1).unwrap_err().is_range());

    let err = TxBody::from_json(&json!({"timeoutHeight": 9007199254740992u64})).unwrap_err();
    assert!(err.is_range());
    let ok = TxBody::from_json(&json!({"timeoutHeight": "9007199254740991"})).unwrap();
    assert_eq!(ok.timeout_height, MAX_SAFE_INTEGER);
}

/// Fee grant with its allowance carried in `Any`, through JSON and back.
#[test]
fn test_fee_grant_through_registry() {
    let expiration = Utc.timestamp_millis_opt(1_700_000_000_120).unwrap();
    let allowance = BasicAllowance {
        spend_limit: vec![Coin {
            denom: "usei".to_string(),
            amount: "1000".to_string(),
        }],
        expiration: Some(expiration),
    };
    let grant = Grant {
        granter: "sei1granter".to_string(),
        grantee: "sei1grantee".to_string(),
        allowance: Some(Any::pack(&allowance)),
    };

    let registry = default_registry();
    let value = registry.decode_any(&Any::pack(&grant)).unwrap();
    assert_eq!(value["@type"], "/cosmos.feegrant.v1beta1.Grant");
    assert_eq!(
        value["allowance"]["typeUrl"],
        "/cosmos.feegrant.v1beta1.BasicAllowance"
    );

    let any = registry.encode_any(&value).unwrap();
    let back: Grant = any.unpack().unwrap();
    assert_eq!(back, grant);

    let inner = back.allowance.unwrap();
    let inner_json = registry.decode_any(&inner).unwrap();
    assert_eq!(inner_json["expiration"], "2023-11-14T22:13:20.120Z");
    assert_eq!(inner.unpack::<BasicAllowance>().unwrap(), allowance);

    match inner.unpack::<Grant>().unwrap_err() {
        CodecError::TypeMismatch { expected, actual } => {
            assert_eq!(expected, "/cosmos.feegrant.v1beta1.Grant");
            assert_eq!(actual, "/cosmos.feegrant.v1beta1.BasicAllowance");
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Signed transaction carrying a legacy oracle vote.
#[test]
fn test_signed_transaction_envelope() {
    let vote = MsgAggregateExchangeRateVote {
        salt: "1f2e".to_string(),
        exchange_rates: "8.8uatom".to_string(),
        feeder: "sei1feeder".to_string(),
        validator: "seivaloper1val".to_string(),
    };
    let body = TxBody {
        messages: vec![Any::pack(&vote)],
        memo: "oracle".to_string(),
        ..Default::default()
    };
    let raw = TxRaw {
        body_bytes: body.encode_to_vec(),
        auth_info_bytes: vec![],
        signatures: vec![vec![0xAA; 64]],
    };

    let decoded = TxRaw::decode(&raw.encode()).unwrap();
    let messages = default_registry()
        .decode_messages(&decoded.body().unwrap())
        .unwrap();
    assert_eq!(
        messages,
        vec![json!({
            "@type": "/seiprotocol.seichain.oracle.MsgAggregateExchangeRateVote",
            "salt": "1f2e",
            "exchange_rates": "8.8uatom",
            "feeder": "sei1feeder",
            "validator": "seivaloper1val"
        })]
    );
}

#[test]
fn test_multisig_descriptor_json_round_trip() {
    let single = |byte: u8| Data {
        sum: Some(Sum::Single(Single {
            mode: SignMode::Direct,
            signature: vec![byte; 4],
        })),
    };
    let descriptor = SignatureDescriptor {
        public_key: None,
        data: Some(Data {
            sum: Some(Sum::Multi(Multi {
                bitarray: Some(CompactBitArray {
                    extra_bits_stored: 2,
                    elems: vec![0b1100_0000],
                }),
                signatures: vec![single(1), single(2)],
            })),
        }),
        sequence: 4,
    };

    let value = descriptor.to_json();
    assert_eq!(
        value["data"]["multi"]["signatures"][0]["single"]["mode"],
        "SIGN_MODE_DIRECT"
    );
    assert_eq!(SignatureDescriptor::from_json(&value).unwrap(), descriptor);
    assert_eq!(
        SignatureDescriptor::decode(&descriptor.encode()).unwrap(),
        descriptor
    );
}

#[test]
fn test_json_text_boundary() {
    let op = AccessOperation::from_json_str(
        r#"{"accessType": "COMMIT", "resourceType": 99999, "identifierTemplate": 7}"#,
    )
    .unwrap();
    assert_eq!(op.access_type, AccessType::Commit);
    assert_eq!(op.resource_type, ResourceType::Unrecognized);
    assert_eq!(op.identifier_template, "7");

    assert!(matches!(
        AccessOperation::from_json_str("{not json").unwrap_err(),
        CodecError::Json(_)
    ));
}

/// Minimal node answering oracle exchange-rate queries. The rate moves
/// with every call.
#[derive(Default)]
struct MockNode {
    calls: AtomicU64,
}

impl Transport for MockNode {
    fn request(&self, service: &str, method: &str, payload: Bytes) -> BoxFuture<'static, sei_proto::Result<Bytes>> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let route = format!("{}/{}", service, method);
        Box::pin(async move {
            if route != "sei.oracle.v1.Query/ExchangeRate" {
                return Err(CodecError::Transport(format!("unimplemented: {}", route)));
            }
            let req = QueryExchangeRateRequest::decode(&payload)?;
            if req.denom.is_empty() {
                return Err(CodecError::Transport("denom required".to_string()));
            }
            Ok(QueryExchangeRateResponse {
                oracle_exchange_rate: Some(OracleExchangeRate {
                    exchange_rate: format!("{}.0", n),
                    last_update: n.to_string(),
                    last_update_timestamp: 1_700_000_000_000 + n as i64,
                }),
            }
            .encode())
        })
    }
}

#[tokio::test]
async fn test_oracle_client_against_mock_node() {
    let client = OracleQueryClient::new(RpcClient::new(MockNode::default()));

    let resp = client
        .exchange_rate(&QueryExchangeRateRequest {
            denom: "uatom".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(resp.oracle_exchange_rate.unwrap().exchange_rate, "1.0");

    let err = client.params(&QueryParamsRequest).await.unwrap_err();
    assert!(matches!(err, CodecError::Transport(ref m) if m.contains("Params")));
}

#[tokio::test]
async fn test_store_refreshes_oracle_query_per_block() {
    let node = Arc::new(MockNode::default());
    let store = QueryStore::new(RpcClient::new(Arc::clone(&node)));
    let mut events = store.subscribe();

    let request = QueryExchangeRateRequest {
        denom: "uatom".to_string(),
    };
    let service = OracleQueryClient::<Arc<MockNode>>::SERVICE;

    let first: QueryExchangeRateResponse = store
        .query(service, "ExchangeRate", &request, true)
        .await
        .unwrap();
    let cached: QueryExchangeRateResponse = store
        .query(service, "ExchangeRate", &request, true)
        .await
        .unwrap();
    assert_eq!(cached, first);
    assert_eq!(node.calls.load(Ordering::SeqCst), 1);

    store.on_new_block(100).await;
    assert_eq!(
        events.recv().await.unwrap(),
        StoreEvent::Refreshed {
            height: 100,
            entries: 1,
            failed: 0
        }
    );

    let refreshed: QueryExchangeRateResponse = store
        .query(service, "ExchangeRate", &request, true)
        .await
        .unwrap();
    let rate = refreshed.oracle_exchange_rate.unwrap();
    assert_eq!(rate.exchange_rate, "2.0");
    assert_eq!(rate.last_update_timestamp, 1_700_000_000_002);
}
