/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::util::ServiceExt;
use userbase_core::UserStore;
use userbase_server::{create_router, state::AppState};

/// Router over a freshly seeded store, plus the store for direct inspection
pub fn create_test_app() -> (Router, Arc<UserStore>) {
    let store = Arc::new(UserStore::seeded());
    let app = create_router(AppState::new(Arc::clone(&store)));
    (app, store)
}

/// Request with a JSON body
pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    raw_request(method, uri, "application/json", body.to_string())
}

/// Request with an arbitrary content type and body
pub fn raw_request(method: &str, uri: &str, content_type: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap()
}

/// Request without a body
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send a request and decode the JSON response
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&body_bytes).unwrap();

    (status, body)
}

pub mod fixtures {
    pub const DANA_NAME: &str = "Dana";
    pub const DANA_EMAIL: &str = "dana@example.com";
}
