//! Token issuance endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::auth::{credentials, issue_token};
use crate::config::GatewayConfig;
use crate::error::GatewayError;

/// Credential pair supplied by the caller.
///
/// Missing fields deserialize to `None` and are treated as non-matching,
/// not as a parse error.
#[derive(Debug, Deserialize)]
pub struct CredentialRequest {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

/// Successful issuance response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    jwt: String,
}

/// `POST /jwt` — exchange the configured credential pair for a signed token.
///
/// On a match, mints a fresh transaction id and returns a token expiring
/// after the fixed TTL. Any mismatch yields 403 with no distinction between
/// a wrong username and a wrong password.
pub async fn issue(
    State(config): State<Arc<GatewayConfig>>,
    Json(body): Json<CredentialRequest>,
) -> Result<Json<TokenResponse>, GatewayError> {
    let username = body.username.as_deref().unwrap_or_default();
    let password = body.password.as_deref().unwrap_or_default();

    if !credentials::verify_credentials(&config, username, password) {
        tracing::debug!("token issuance refused: credential mismatch");
        return Err(GatewayError::InvalidCredentials);
    }

    let jwt = issue_token(config.jwt_secret.as_bytes()).map_err(GatewayError::Signing)?;
    tracing::info!("issued token for configured user");
    Ok(Json(TokenResponse { jwt }))
}
