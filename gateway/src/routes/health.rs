//! Liveness probe.

use axum::Json;
use serde::Serialize;

/// Fixed success indicator returned by the health probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// `GET /health` — always succeeds, no auth, no side effects.
///
/// Used for liveness checks by external orchestration.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "OK" })
}
