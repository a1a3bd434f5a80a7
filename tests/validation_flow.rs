mod common;

use actix_web::{http::StatusCode, test};
use chrono::Duration;
use common::{client::TestClient, TestContext};
use market_auth::utils::token::TokenService;
use uuid::Uuid;

#[tokio::test]
async fn test_token_validation_flow_success() {
    println!("\n\n[+] Running test: test_token_validation_flow_success");
    let ctx = TestContext::new();
    let client = TestClient::new(ctx.auth.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, token) = client.create_test_user("alice", "Secr3t!").await;

    println!("[>] Sending request with valid token.");
    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::OK);
    println!("[/] Test passed: valid token accepted.");
}

#[tokio::test]
async fn test_token_validation_flow_missing_auth() {
    println!("\n\n[+] Running test: test_token_validation_flow_missing_auth");
    let ctx = TestContext::new();
    let client = TestClient::new(ctx.auth.clone());
    let app = test::init_service(client.create_app()).await;

    println!("[>] Sending request with no Authorization header.");
    let req = test::TestRequest::get().uri("/api/auth/me").to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: missing header rejected.");
}

#[tokio::test]
async fn test_token_validation_flow_malformed() {
    println!("\n\n[+] Running test: test_token_validation_flow_malformed");
    let ctx = TestContext::new();
    let client = TestClient::new(ctx.auth.clone());
    let app = test::init_service(client.create_app()).await;

    println!("[>] Sending request with a garbage token.");
    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", "Bearer not_a_token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_MALFORMED");
    println!("[/] Test passed: garbage token is malformed.");
}

#[tokio::test]
async fn test_token_validation_flow_expired() {
    println!("\n\n[+] Running test: test_token_validation_flow_expired");
    let ctx = TestContext::new();
    let client = TestClient::new(ctx.auth.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, _token) = client.create_test_user("alice", "Secr3t!").await;

    println!("[>] Minting a token with zero ttl.");
    let dead_on_arrival = ctx
        .auth
        .tokens()
        .issue_with_ttl(user_id, Duration::zero())
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", dead_on_arrival)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_EXPIRED");
    println!("[/] Test passed: zero-ttl token is expired on arrival.");
}

#[tokio::test]
async fn test_token_validation_flow_tampered_signature() {
    println!("\n\n[+] Running test: test_token_validation_flow_tampered_signature");
    let ctx = TestContext::new();
    let client = TestClient::new(ctx.auth.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, token) = client.create_test_user("alice", "Secr3t!").await;

    println!("[>] Flipping one character of the signature.");
    let dot = token.rfind('.').unwrap();
    let mut bytes = token.into_bytes();
    let idx = dot + 1 + (bytes.len() - dot - 1) / 2;
    bytes[idx] = if bytes[idx] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(bytes).unwrap();

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", tampered)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_SIGNATURE");
    println!("[/] Test passed: tampered signature rejected.");
}

#[tokio::test]
async fn test_token_validation_flow_foreign_signature() {
    println!("\n\n[+] Running test: test_token_validation_flow_foreign_signature");
    let ctx = TestContext::new();
    let client = TestClient::new(ctx.auth.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, _token) = client.create_test_user("alice", "Secr3t!").await;

    println!("[>] Minting a token under a different signing key.");
    let foreign = TokenService::new("some-other-secret", 3600)
        .issue(user_id)
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", foreign)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_SIGNATURE");
    println!("[/] Test passed: foreign key rejected.");
}

#[tokio::test]
async fn test_token_validation_flow_account_removed() {
    println!("\n\n[+] Running test: test_token_validation_flow_account_removed");
    let ctx = TestContext::new();
    let client = TestClient::new(ctx.auth.clone());
    let app = test::init_service(client.create_app()).await;

    println!("[>] Minting a well-signed token for an identity the store never held.");
    let ghost = ctx.auth.tokens().issue(Uuid::new_v4()).unwrap();

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", ghost)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ACCOUNT_REMOVED");
    println!("[/] Test passed: token without a backing account rejected.");
}
