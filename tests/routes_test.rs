//! Contract tests for the health checks, the airline listing, the API
//! description and the cross-cutting layers (CORS, request IDs).

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_reports_healthy() {
    let resp = common::get("/health").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_health_ignores_raise() {
    let resp = common::get("/health?raise=500").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_root_reports_ok() {
    let resp = common::get("/").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), json!({ "message": "ok" }));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let resp = common::get("/nope").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_airlines_lists_codes() {
    let resp = common::get("/airlines").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), json!({ "airlines": ["AA", "DL", "UA"] }));
}

#[tokio::test]
async fn test_airlines_raise_false_succeeds() {
    let resp = common::get("/airlines?raise=false").await;
    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn test_airlines_raise_true_returns_server_error() {
    let resp = common::get("/airlines?raise=true").await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_airlines_rejects_non_boolean_raise() {
    let resp = common::get("/airlines?raise=500").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_spec_describes_routes() {
    let resp = common::get("/apispec_1.json").await;
    assert_eq!(resp.status, StatusCode::OK);

    let spec = resp.json();
    assert!(spec["openapi"].as_str().unwrap().starts_with("3."));
    assert_eq!(spec["info"]["title"], json!("flights"));
    assert!(spec["paths"]["/flights/{airline}"]["get"].is_object());
    assert!(spec["paths"]["/flight"]["post"].is_object());
    assert!(spec["paths"]["/airlines"]["get"].is_object());
    assert!(spec["paths"]["/health"]["get"].is_object());
}

#[tokio::test]
async fn test_every_response_carries_request_id() {
    let ok = common::get("/health").await;
    let failed = common::get("/flights/AA?raise=500").await;

    for resp in [ok, failed] {
        let id = resp
            .headers
            .get("x-request-id")
            .expect("x-request-id header")
            .to_str()
            .expect("ascii header");
        assert!(uuid::Uuid::parse_str(id).is_ok(), "not a UUID: {id}");
    }
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = common::test_app()
        .oneshot(
            Request::builder()
                .uri("/flights/AA")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight_for_booking() {
    let response = common::test_app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/flight")
                .header(header::ORIGIN, "http://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}
