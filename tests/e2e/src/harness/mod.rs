//! Test API harness
//!
//! Builds the full axum router over a fresh `MemoryStore` and drives it with
//! oneshot requests. Each `TestApi` is fully isolated; no listener, no shared
//! state between tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use somnium_core::MemoryStore;
use somnium_server::{build_router, AppState};

/// Port baked into the router's CORS origins; irrelevant for oneshot tests
const TEST_PORT: u16 = 4280;

/// An isolated in-process API instance
pub struct TestApi {
    router: Router,
}

impl Default for TestApi {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApi {
    /// Router over an empty in-memory store
    pub fn new() -> Self {
        let state = AppState::new(Arc::new(MemoryStore::new()));
        Self {
            router: build_router(state, TEST_PORT),
        }
    }

    /// Send one request; returns the status and the parsed JSON body
    /// (`Value::Null` for empty bodies)
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request is well-formed");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    /// GET helper
    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.request("GET", path, None).await
    }

    /// POST helper
    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", path, Some(body)).await
    }

    /// PUT helper
    pub async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request("PUT", path, Some(body)).await
    }

    /// DELETE helper
    pub async fn delete(&self, path: &str) -> (StatusCode, Value) {
        self.request("DELETE", path, None).await
    }

    /// Create a dream and return its assigned id
    pub async fn create(&self, body: Value) -> i64 {
        let (status, created) = self.post("/api/dreams", body).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", created);
        created["id"].as_i64().expect("created record has an id")
    }
}

/// Names of the fields reported in a validation error body
pub fn error_fields(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["field"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
