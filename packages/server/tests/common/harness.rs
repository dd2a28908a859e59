//! Test harness driving the router in-process.
//!
//! Requests go through `tower::ServiceExt::oneshot`, so no socket is bound.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use responder_core::kernel::{MockGenerator, TestDependencies};
use responder_core::server::build_app;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestHarness {
    pub app: Router,
    pub generator: Arc<MockGenerator>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_dependencies(TestDependencies::new())
    }

    pub fn with_generator(generator: MockGenerator) -> Self {
        Self::with_dependencies(TestDependencies::new().mock_generator(generator))
    }

    pub fn with_dependencies(test_deps: TestDependencies) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let generator = test_deps.generator.clone();
        let deps = test_deps
            .into_server_deps()
            .expect("fixture datasets should build");

        Self {
            app: build_app(deps),
            generator,
        }
    }

    /// POST a raw JSON body to /chat
    pub async fn post_chat_raw(&self, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request");

        self.send(request).await
    }

    /// POST `{"message": ...}` to /chat
    pub async fn chat(&self, message: &str) -> (StatusCode, Value) {
        let body = serde_json::json!({ "message": message }).to_string();
        self.post_chat_raw(&body).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        (status, bytes.to_vec())
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }
}
