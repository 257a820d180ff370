//! Common helpers for end-to-end tests.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use tower::ServiceExt;

use crate::config::GatewayConfig;
use crate::routes::{self, API_KEY_HEADER, TOKEN_HEADER};

pub const TEST_API_KEY: &str = "2f5ae96c-b558-4c7b-a590-a501ae1c3f6c";
pub const TEST_JWT_SECRET: &str = "e2e-test-signing-secret";
pub const TEST_USERNAME: &str = "neoris";
pub const TEST_PASSWORD: &str = "abc123";

/// Configuration used by every end-to-end test.
pub fn test_config() -> GatewayConfig {
    GatewayConfig {
        api_key: TEST_API_KEY.to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        username: TEST_USERNAME.to_string(),
        password: TEST_PASSWORD.to_string(),
        listen_port: GatewayConfig::DEFAULT_PORT,
    }
}

/// A gateway under test: the assembled router plus a runtime to drive it
/// from plain `#[test]` functions.
pub struct TestGateway {
    router: Router,
    runtime: tokio::runtime::Runtime,
}

/// Collected response: status, headers, and the fully read body.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn body_string(&self) -> String {
        String::from_utf8(self.body.to_vec()).expect("body should be UTF-8")
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("body should be JSON")
    }
}

impl TestGateway {
    /// Create a gateway with the standard test configuration.
    #[must_use]
    pub fn new() -> Self {
        let router = routes::router(Arc::new(test_config()));
        let runtime = tokio::runtime::Runtime::new().expect("failed to create runtime");
        Self { router, runtime }
    }

    /// Send a request through the router and collect the response.
    pub fn send(&self, request: Request<Body>) -> TestResponse {
        let router = self.router.clone();
        self.runtime.block_on(async {
            let response = router.oneshot(request).await.expect("router is infallible");
            let status = response.status();
            let headers = response.headers().clone();
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .expect("failed to read body");
            TestResponse {
                status,
                headers,
                body,
            }
        })
    }

    /// Issue a token through `POST /jwt` with the test credentials.
    pub fn issue_token(&self) -> String {
        let response = self.send(post_json(
            "/jwt",
            &serde_json::json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD }),
        ));
        assert_eq!(response.status, StatusCode::OK);
        response.body_json()["jwt"]
            .as_str()
            .expect("response should carry a jwt field")
            .to_string()
    }
}

/// Build a JSON POST request.
pub fn post_json(path: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

/// Build a fully authenticated JSON POST to `/DevOps`.
pub fn devops_request(token: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/DevOps")
        .header("content-type", "application/json")
        .header(API_KEY_HEADER, TEST_API_KEY)
        .header(TOKEN_HEADER, token)
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

/// A complete, valid notification payload.
pub fn valid_payload() -> serde_json::Value {
    serde_json::json!({
        "message": "This is a test",
        "to": "Juan Perez",
        "from": "Rita Asturia",
        "timeToLifeSec": 45,
    })
}
