//! Tests for failure scenarios: transport/auth errors and malformed model
//! output. Every failure must surface as a terminal error with no envelope.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use textpresso_reformat::config::Config;
use textpresso_reformat::error::{ClientError, ReformatError};
use textpresso_reformat::reformat::{QueryReformatter, ReformatOptions};

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

async fn mount_completion(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
        .mount(server)
        .await;
}

async fn mount_status(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn reformat_against(server: &MockServer) -> Result<(), ReformatError> {
    QueryReformatter::new(Config::for_testing(&server.uri()))
        .reformat("maize plant height", "T", "model-key", &ReformatOptions::default())
        .await
        .map(|_| ())
}

// =============================================================================
// Malformed Model Output Tests
// =============================================================================

#[tokio::test]
async fn test_non_json_response_fails() {
    let server = MockServer::start().await;
    mount_completion(&server, "Sure! Here is your query: maize AND height").await;

    let err = reformat_against(&server).await.unwrap_err();
    assert!(matches!(err, ReformatError::Parse(_)), "expected parse error, got {err:?}");
}

#[tokio::test]
async fn test_json_array_response_fails() {
    let server = MockServer::start().await;
    mount_completion(&server, r#"[{"keywords": "maize"}]"#).await;

    let err = reformat_against(&server).await.unwrap_err();
    assert!(matches!(err, ReformatError::NotAnObject { found: "array" }));
}

#[tokio::test]
async fn test_json_scalar_response_fails() {
    let server = MockServer::start().await;
    mount_completion(&server, r#""maize AND height""#).await;

    let err = reformat_against(&server).await.unwrap_err();
    assert!(matches!(err, ReformatError::NotAnObject { found: "string" }));
}

#[tokio::test]
async fn test_empty_choice_list_fails() {
    let server = MockServer::start().await;
    mount_status(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"id": "chatcmpl-test", "choices": []})),
    )
    .await;

    let err = reformat_against(&server).await.unwrap_err();
    assert!(matches!(err, ReformatError::Client(ClientError::EmptyCompletion)));
}

#[tokio::test]
async fn test_null_content_fails() {
    let server = MockServer::start().await;
    mount_status(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"index": 0, "message": {"role": "assistant", "content": null}}]
        })),
    )
    .await;

    let err = reformat_against(&server).await.unwrap_err();
    assert!(matches!(err, ReformatError::Client(ClientError::EmptyCompletion)));
}

// =============================================================================
// Transport / Auth Failure Tests
// =============================================================================

#[tokio::test]
async fn test_rejected_credential_401() {
    let server = MockServer::start().await;
    mount_status(&server, ResponseTemplate::new(401).set_body_string("Incorrect API key")).await;

    let err = reformat_against(&server).await.unwrap_err();
    match err {
        ReformatError::Client(ClientError::Auth { status, message }) => {
            assert_eq!(status, 401);
            assert!(message.contains("Incorrect API key"));
        }
        other => panic!("expected auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_forbidden_403_is_auth_error() {
    let server = MockServer::start().await;
    mount_status(&server, ResponseTemplate::new(403).set_body_string("forbidden")).await;

    let err = reformat_against(&server).await.unwrap_err();
    assert!(matches!(err, ReformatError::Client(ClientError::Auth { status: 403, .. })));
}

#[tokio::test]
async fn test_rate_limited_429_honors_retry_after() {
    let server = MockServer::start().await;
    mount_status(
        &server,
        ResponseTemplate::new(429)
            .insert_header("Retry-After", "30")
            .set_body_string("Rate limit exceeded"),
    )
    .await;

    let err = reformat_against(&server).await.unwrap_err();
    match err {
        ReformatError::Client(ClientError::RateLimited { retry_after }) => {
            assert_eq!(retry_after, Duration::from_secs(30));
        }
        other => panic!("expected rate limit error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_500() {
    let server = MockServer::start().await;
    mount_status(&server, ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .await;

    let err = reformat_against(&server).await.unwrap_err();
    assert!(matches!(err, ReformatError::Client(ClientError::Server { status: 500, .. })));
}

#[tokio::test]
async fn test_bad_request_400() {
    let server = MockServer::start().await;
    mount_status(&server, ResponseTemplate::new(400).set_body_string("invalid request")).await;

    let err = reformat_against(&server).await.unwrap_err();
    assert!(matches!(err, ReformatError::Client(ClientError::BadRequest { .. })));
}

#[tokio::test]
async fn test_unexpected_status_302() {
    let server = MockServer::start().await;
    mount_status(&server, ResponseTemplate::new(302)).await;

    let err = reformat_against(&server).await.unwrap_err();
    assert!(matches!(
        err,
        ReformatError::Client(ClientError::UnexpectedStatus { status: 302, .. })
    ));
}
