//! Test the liveness probe.

use axum::body::Body;
use axum::http::{Request, StatusCode};

use crate::e2e_tests::helpers::TestGateway;

#[test]
fn test_health_returns_ok() {
    let gateway = TestGateway::new();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("request");
    let response = gateway.send(request);

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body_json(), serde_json::json!({ "status": "OK" }));
}

#[test]
fn test_health_ignores_auth_headers() {
    let gateway = TestGateway::new();

    // Garbage auth headers must not affect the probe.
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header("X-Parse-REST-API-Key", "wrong")
        .header("X-JWT-KWY", "garbage")
        .body(Body::empty())
        .expect("request");
    let response = gateway.send(request);

    assert_eq!(response.status, StatusCode::OK);
}
