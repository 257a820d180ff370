//! Test verb rejection on the protected endpoint.

use axum::body::Body;
use axum::http::{Request, StatusCode};

use crate::e2e_tests::helpers::{TEST_API_KEY, TestGateway, valid_payload};
use crate::routes::{API_KEY_HEADER, TOKEN_HEADER};

#[test]
fn test_disallowed_verbs_yield_405() {
    let gateway = TestGateway::new();

    for method in ["GET", "PUT", "DELETE", "PATCH"] {
        let request = Request::builder()
            .method(method)
            .uri("/DevOps")
            .body(Body::empty())
            .expect("request");
        let response = gateway.send(request);

        assert_eq!(
            response.status,
            StatusCode::METHOD_NOT_ALLOWED,
            "method: {method}"
        );
        assert_eq!(response.body_string(), "ERROR");
    }
}

#[test]
fn test_method_dispatch_happens_before_any_gate() {
    let gateway = TestGateway::new();
    let token = gateway.issue_token();

    // Fully valid auth headers and payload must not turn a GET into anything
    // other than a 405.
    let request = Request::builder()
        .method("GET")
        .uri("/DevOps")
        .header("content-type", "application/json")
        .header(API_KEY_HEADER, TEST_API_KEY)
        .header(TOKEN_HEADER, token)
        .body(Body::from(valid_payload().to_string()))
        .expect("request");
    let response = gateway.send(request);

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body_string(), "ERROR");
}
