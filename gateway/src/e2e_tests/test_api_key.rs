//! Test the API-key gate on the protected endpoint.

use axum::body::Body;
use axum::http::{Request, StatusCode};

use crate::e2e_tests::helpers::{TestGateway, valid_payload};
use crate::routes::{API_KEY_HEADER, TOKEN_HEADER};

#[test]
fn test_wrong_api_key_is_forbidden() {
    let gateway = TestGateway::new();
    let token = gateway.issue_token();

    let request = Request::builder()
        .method("POST")
        .uri("/DevOps")
        .header("content-type", "application/json")
        .header(API_KEY_HEADER, "not-the-configured-key")
        .header(TOKEN_HEADER, token)
        .body(Body::from(valid_payload().to_string()))
        .expect("request");
    let response = gateway.send(request);

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body_string(), "ERROR");
}

#[test]
fn test_missing_api_key_is_forbidden() {
    let gateway = TestGateway::new();
    let token = gateway.issue_token();

    let request = Request::builder()
        .method("POST")
        .uri("/DevOps")
        .header("content-type", "application/json")
        .header(TOKEN_HEADER, token)
        .body(Body::from(valid_payload().to_string()))
        .expect("request");
    let response = gateway.send(request);

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body_string(), "ERROR");
}

#[test]
fn test_api_key_gate_runs_before_token_gate() {
    let gateway = TestGateway::new();

    // Wrong key and no token: the API key check must answer first with 403,
    // not 401.
    let request = Request::builder()
        .method("POST")
        .uri("/DevOps")
        .header("content-type", "application/json")
        .header(API_KEY_HEADER, "wrong")
        .body(Body::from(valid_payload().to_string()))
        .expect("request");
    let response = gateway.send(request);

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
