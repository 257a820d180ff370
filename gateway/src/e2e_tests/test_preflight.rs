//! Test the global OPTIONS preflight interceptor.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};

use crate::e2e_tests::helpers::TestGateway;

fn options(path: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri(path)
        .body(Body::empty())
        .expect("request")
}

#[test]
fn test_options_yields_204_with_allow_header() {
    let gateway = TestGateway::new();

    let response = gateway.send(options("/DevOps"));

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(
        response
            .headers
            .get(header::ALLOW)
            .and_then(|v| v.to_str().ok()),
        Some("POST, OPTIONS")
    );
    assert!(response.body.is_empty());
}

#[test]
fn test_options_applies_to_every_path() {
    let gateway = TestGateway::new();

    // The interceptor runs before route dispatch, so even unrouted paths
    // are answered.
    for path in ["/health", "/jwt", "/DevOps", "/no-such-route"] {
        let response = gateway.send(options(path));

        assert_eq!(response.status, StatusCode::NO_CONTENT, "path: {path}");
        assert!(response.body.is_empty());
    }
}
