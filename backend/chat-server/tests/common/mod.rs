#![allow(dead_code)]

//! Test infrastructure for chat-server route tests

use chat_log::{LogCapacity, SharedLog};
use chat_ws::{
    AppState, ConnectionConfig, ConnectionLimits, ConnectionRegistry, Metrics, ShutdownCoordinator,
};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Create AppState for testing
pub fn create_test_app_state() -> AppState {
    let capacity = LogCapacity::new(1024, 10).expect("Invalid test capacity");
    let registry = ConnectionRegistry::new(ConnectionLimits { max_total: 10 });

    AppState::new(
        SharedLog::new(capacity),
        registry,
        Metrics::new(),
        ShutdownCoordinator::new(),
        ConnectionConfig::default(),
    )
}

/// Issue a GET and return the status with the raw body
pub async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, body.to_vec())
}
