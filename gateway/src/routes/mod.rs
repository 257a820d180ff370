//! HTTP surface of the gateway.
//!
//! Three routes over HTTP: a liveness probe, credential-based token
//! issuance, and the protected notification endpoint. An OPTIONS preflight
//! interceptor is layered around the whole router so it answers before any
//! route dispatch.
//!
//! # Invariants
//! - Method dispatch on `/DevOps` happens before any auth gate; a wrong verb
//!   is rejected with 405 regardless of headers.
//! - Handlers share nothing but the immutable configuration.

mod devops;
mod health;
mod jwt;
pub mod preflight;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::config::GatewayConfig;
use crate::error::GatewayError;

pub use devops::{API_KEY_HEADER, TOKEN_HEADER};

/// Assemble the gateway router with the given configuration.
#[must_use]
pub fn router(config: Arc<GatewayConfig>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/jwt", post(jwt::issue))
        .route(
            "/DevOps",
            post(devops::dispatch)
                .get(method_not_allowed)
                .put(method_not_allowed)
                .delete(method_not_allowed)
                .patch(method_not_allowed),
        )
        .layer(middleware::from_fn(preflight::options_preflight))
        .with_state(config)
}

/// Reject a disallowed verb with the fixed 405 body.
async fn method_not_allowed() -> GatewayError {
    GatewayError::MethodNotAllowed
}
