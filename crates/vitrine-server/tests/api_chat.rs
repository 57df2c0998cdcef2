//! Integration tests for the chat proxy endpoint: input validation, the
//! passthrough path against a mocked completion API, and the fallback path
//! when the upstream is unavailable.

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, StatusCode},
};
use httpmock::prelude::*;
use std::net::SocketAddr;
use tower::ServiceExt; // for oneshot
use vitrine_assist::{AssistConfig, AssistService};
use vitrine_db::{create_pool, DbPool, DbRuntimeSettings};
use vitrine_server::{app, config::LimitsConfig, middleware::RateLimiter, AppState};

fn make_pool(dir: &tempfile::TempDir) -> DbPool {
    let path = dir.path().join("vitrine-test.db");
    let pool = create_pool(path.to_str().unwrap(), DbRuntimeSettings::default()).unwrap();
    {
        let conn = pool.get().unwrap();
        vitrine_db::run_migrations(&conn).unwrap();
    }
    pool
}

fn make_state(pool: DbPool, assist: AssistService) -> AppState {
    AppState {
        pool,
        assist,
        notifier: vitrine_notify::Notifier::new(vitrine_notify::NotifyConfig::default()),
        rate_limiter: RateLimiter::new(),
        limits: LimitsConfig::default(),
    }
}

fn chat_request(body: serde_json::Value) -> Request<Body> {
    let mut request = Request::builder()
        .uri("/api/chat")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    request
        .extensions_mut()
        .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 12345))));
    request
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let assist = AssistService::new(AssistConfig::default());
    let application = app(make_state(make_pool(&dir), assist));

    let response = application
        .oneshot(chat_request(serde_json::json!({ "message": "   " })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "message is required");
}

#[tokio::test]
async fn oversized_message_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let assist = AssistService::new(AssistConfig::default());
    let application = app(make_state(make_pool(&dir), assist));

    let response = application
        .oneshot(chat_request(
            serde_json::json!({ "message": "x".repeat(vitrine_assist::MAX_MESSAGE_LEN + 1) }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unconfigured_assistant_serves_fallback() {
    let dir = tempfile::tempdir().unwrap();
    // Default config has no API key, so the upstream call is never attempted.
    let assist = AssistService::new(AssistConfig::default());
    let application = app(make_state(make_pool(&dir), assist));

    let response = application
        .oneshot(chat_request(serde_json::json!({ "message": "hello" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let reply = json["response"].as_str().unwrap();
    assert!(
        reply.ends_with("(AI temporarily unavailable)"),
        "fallback reply should be marked as canned, got: {reply}"
    );
}

#[tokio::test]
async fn completion_text_is_passed_through() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).json_body(serde_json::json!({
                "choices": [
                    { "message": { "role": "assistant", "content": "I build Discord bots." } }
                ]
            }));
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let assist = AssistService::new(AssistConfig {
        api_url: server.url("/v1/chat/completions"),
        api_key: "test-key".to_string(),
        model: "test-model".to_string(),
        timeout_secs: 5,
    });
    let application = app(make_state(make_pool(&dir), assist));

    let response = application
        .oneshot(chat_request(serde_json::json!({
            "message": "What do you build?",
            "history": ["User: hi", "Assistant: hello"]
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["response"], "I build Discord bots.");
}

#[tokio::test]
async fn upstream_failure_serves_fallback() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(500).body("upstream exploded");
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let assist = AssistService::new(AssistConfig {
        api_url: server.url("/v1/chat/completions"),
        api_key: "test-key".to_string(),
        model: "test-model".to_string(),
        timeout_secs: 5,
    });
    let application = app(make_state(make_pool(&dir), assist));

    let response = application
        .oneshot(chat_request(serde_json::json!({ "message": "hello" })))
        .await
        .unwrap();
    // Upstream failure is not the visitor's problem: still a 200.
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let reply = json["response"].as_str().unwrap();
    assert!(reply.ends_with("(AI temporarily unavailable)"));
}
