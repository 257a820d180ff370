//! Global OPTIONS preflight interceptor.
//!
//! Applied as middleware around the whole router, so any `OPTIONS` request
//! on any path is answered before route-specific logic runs.

use axum::extract::Request;
use axum::http::{Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Answer `OPTIONS` requests with 204, an empty body, and the allowed verbs.
///
/// All other requests pass through to route dispatch untouched.
pub async fn options_preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return (StatusCode::NO_CONTENT, [(header::ALLOW, "POST, OPTIONS")]).into_response();
    }
    next.run(request).await
}
