use std::str::FromStr;
use std::sync::Arc;

use hmac::{Hmac, Mac};
use rust_decimal::Decimal;
use sha2::Sha256;
use time::{Duration, OffsetDateTime};
use wiremock::matchers::{body_json, body_string, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coinbase_api_client::auth::{Credentials, NonceProvider, OAuthTokens};
use coinbase_api_client::rest::default_user_agent;
use coinbase_api_client::rest::transactions::TransactionParams;
use coinbase_api_client::{CoinbaseClient, CoinbaseError};

const NONCE: u64 = 1_700_000_000_000_000_000;

struct FixedNonce(u64);

impl NonceProvider for FixedNonce {
    fn next_nonce(&self) -> u64 {
        self.0
    }
}

fn build_client(server: &MockServer) -> CoinbaseClient {
    CoinbaseClient::builder()
        .base_url(server.uri())
        .credentials(Credentials::new("K", "S"))
        .nonce_provider(Arc::new(FixedNonce(NONCE)))
        .build()
        .unwrap()
}

fn expected_signature(secret: &str, message: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[tokio::test]
async fn test_key_secret_request_is_signed() {
    let server = MockServer::start().await;
    let url = format!("{}/account/balance", server.uri());
    let signature = expected_signature("S", &format!("{NONCE}{url}{{}}"));

    Mock::given(method("GET"))
        .and(path("/account/balance"))
        .and(header("access_key", "K"))
        .and(header("access_nonce", NONCE.to_string().as_str()))
        .and(header("access_signature", signature.as_str()))
        .and(header("content-type", "application/json"))
        .and(header("user-agent", default_user_agent().as_str()))
        .and(body_string("{}"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "amount": "36.62800000",
            "currency": "BTC"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let balance = build_client(&server).get_balance().await.unwrap();
    assert_eq!(balance.amount.to_string(), "36.62800000");
}

#[tokio::test]
async fn test_signature_covers_body() {
    let server = MockServer::start().await;
    let url = format!("{}/transactions/send_money", server.uri());
    let body = r#"{"transaction":{"to":"user@example.com","amount":"1.5"}}"#;
    let signature = expected_signature("S", &format!("{NONCE}{url}{body}"));

    Mock::given(method("POST"))
        .and(path("/transactions/send_money"))
        .and(header("access_signature", signature.as_str()))
        .and(body_json(serde_json::json!({
            "transaction": {"to": "user@example.com", "amount": "1.5"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "transaction": {"id": "501a1791f8182b2071000087", "status": "pending"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = TransactionParams::send("user@example.com", Decimal::from_str("1.5").unwrap());
    let sent = build_client(&server).send_money(&params).await.unwrap();
    assert_eq!(sent.transaction.id, "501a1791f8182b2071000087");
}

#[tokio::test]
async fn test_default_nonce_differs_per_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/balance"))
        .and(header_exists("access_nonce"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "amount": "1.00000000",
            "currency": "BTC"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = CoinbaseClient::builder()
        .base_url(server.uri())
        .credentials(Credentials::new("K", "S"))
        .build()
        .unwrap();
    client.get_balance().await.unwrap();
    client.get_balance().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let nonces: Vec<u64> = requests
        .iter()
        .map(|r| r.headers["access_nonce"].to_str().unwrap().parse().unwrap())
        .collect();
    assert!(nonces[1] > nonces[0]);
}

#[tokio::test]
async fn test_bearer_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("authorization", "Bearer token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": [{"user": {"id": "512db383f8182bd24d000001", "email": "user1@example.com"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = CoinbaseClient::builder()
        .base_url(server.uri())
        .oauth_tokens(OAuthTokens::expiring_in("token-123", "refresh-456", 3600).unwrap())
        .build()
        .unwrap();

    let user = client.get_user().await.unwrap();
    assert_eq!(user.email.as_deref(), Some("user1@example.com"));

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("access_key").is_none());
}

#[tokio::test]
async fn test_expired_bearer_never_reaches_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let expired = OAuthTokens::new(
        "token-123",
        "refresh-456",
        OffsetDateTime::now_utc() - Duration::hours(1),
    );
    let client = CoinbaseClient::builder()
        .base_url(server.uri())
        .oauth_tokens(expired)
        .build()
        .unwrap();

    let error = client.get_balance().await.unwrap_err();
    assert!(matches!(error, CoinbaseError::ExpiredCredentials));
}

#[tokio::test]
async fn test_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/balance"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid signature"))
        .mount(&server)
        .await;

    let error = build_client(&server).get_balance().await.unwrap_err();
    match &error {
        CoinbaseError::Status { method, status, .. } => {
            assert_eq!(*method, reqwest::Method::GET);
            assert_eq!(status.as_u16(), 401);
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(
        error.to_string(),
        format!(
            "GET {}/account/balance failed. Response code was 401 Unauthorized",
            server.uri()
        )
    );
}

#[tokio::test]
async fn test_envelope_failure_over_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/buys"))
        .and(body_json(serde_json::json!({"qty": "2", "agree_btc_amount_varies": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "errors": ["A", "B"],
            "transfer": null
        })))
        .mount(&server)
        .await;

    let error = build_client(&server)
        .buy(Decimal::from(2), false)
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "A,B in buy()");
}

#[tokio::test]
async fn test_failure_without_messages_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/transactions/abc/cancel_request"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false
        })))
        .mount(&server)
        .await;

    let error = build_client(&server).cancel_request("abc").await.unwrap_err();
    match error {
        CoinbaseError::Api(api) => assert!(api.is_unspecified()),
        other => panic!("expected API error, got {other:?}"),
    }
}
