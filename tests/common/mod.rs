//! Test utilities for driving the flights router in-process.
//!
//! Provides:
//! - A router built the same way the server builds it
//! - Request helpers returning status, headers and decoded JSON

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use flights::{create_router, AppState, Config};
use serde_json::Value;
use tower::ServiceExt;

/// Response pieces the tests look at.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Decode the body as JSON, panicking with the raw body on failure.
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "body is not JSON ({e}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }
}

/// Router with default configuration and test logging.
pub fn test_app() -> Router {
    flights::observability::init_test_tracing();
    create_router(AppState::new(Config::default()))
}

/// Send one request through a fresh router.
pub async fn send(method: Method, uri: &str) -> TestResponse {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable")
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(uri: &str) -> TestResponse {
    send(Method::GET, uri).await
}

pub async fn post(uri: &str) -> TestResponse {
    send(Method::POST, uri).await
}

/// Extract the single flight number from a `{"<airline>": [n]}` body.
pub fn flight_number(body: &Value, airline: &str) -> u64 {
    let numbers = body[airline]
        .as_array()
        .unwrap_or_else(|| panic!("no flight list for {airline}: {body}"));
    assert_eq!(numbers.len(), 1, "expected one flight: {body}");
    numbers[0].as_u64().expect("flight number is an integer")
}
