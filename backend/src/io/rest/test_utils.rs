//! Router test harness: a temporary store, a recording model and helpers
//! that drive a router with `oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

use crate::domain::test_utils::RecordingModel;
use crate::domain::PromptBuilder;
use crate::storage::json::test_utils::TestEnvironment;
use crate::AppState;

pub struct TestApp {
    pub env: TestEnvironment,
    pub model: Arc<RecordingModel>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            env: TestEnvironment::new().expect("failed to create test environment"),
            model: Arc::new(RecordingModel::default()),
        }
    }

    pub fn state(&self) -> AppState {
        AppState::from_connection(&self.env.connection, self.model.clone(), PromptBuilder::default())
    }
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, value)
}

pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

pub async fn send_json(router: Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}
