//! Request error taxonomy.
//!
//! Every way a request can fail maps to exactly one variant, one HTTP status
//! code, and one plain-text wire body. The wire bodies are part of the
//! external contract and must not change.
//!
//! # Invariants
//! - No error is fatal to the process; each request fails independently.
//! - Credential failures carry no detail about which field mismatched.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::auth::TokenError;

/// Error surfaced to the caller of a gateway endpoint.
#[derive(Debug)]
pub enum GatewayError {
    /// The supplied username/password pair does not match the configuration.
    InvalidCredentials,
    /// The `X-Parse-REST-API-Key` header is missing or does not match.
    InvalidApiKey,
    /// The bearer-token header is absent.
    MissingToken,
    /// The bearer token failed verification (bad signature, expired,
    /// malformed, or wrong algorithm).
    InvalidToken,
    /// The request body is not JSON or cannot be parsed.
    InvalidJson,
    /// A required payload field is missing or falsy.
    MissingFields,
    /// The HTTP method is not allowed on this route.
    MethodNotAllowed,
    /// Token signing failed at issuance.
    Signing(TokenError),
}

impl GatewayError {
    /// The HTTP status code this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::InvalidApiKey => StatusCode::FORBIDDEN,
            Self::MissingToken | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::InvalidJson | Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The exact plain-text body sent to the caller.
    #[must_use]
    pub const fn body(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "ERROR: Invalid credentials",
            Self::InvalidApiKey | Self::MethodNotAllowed | Self::Signing(_) => "ERROR",
            Self::MissingToken => "ERROR: JWT missing",
            Self::InvalidToken => "ERROR: Invalid JWT",
            Self::InvalidJson => "ERROR: Invalid JSON",
            Self::MissingFields => "ERROR: Missing fields in the JSON payload",
        }
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "invalid credentials"),
            Self::InvalidApiKey => write!(f, "invalid API key"),
            Self::MissingToken => write!(f, "bearer token header missing"),
            Self::InvalidToken => write!(f, "bearer token failed verification"),
            Self::InvalidJson => write!(f, "request body is not valid JSON"),
            Self::MissingFields => write!(f, "missing fields in the JSON payload"),
            Self::MethodNotAllowed => write!(f, "method not allowed"),
            Self::Signing(e) => write!(f, "token signing failed: {e}"),
        }
    }
}

impl std::error::Error for GatewayError {}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Signing(_)) {
            tracing::error!("token signing failed: {self}");
        }
        (self.status(), self.body()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            GatewayError::InvalidCredentials.status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(GatewayError::InvalidApiKey.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            GatewayError::MissingToken.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            GatewayError::InvalidToken.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(GatewayError::InvalidJson.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            GatewayError::MissingFields.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            GatewayError::Signing(TokenError::MalformedToken).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_wire_bodies_are_exact() {
        assert_eq!(
            GatewayError::InvalidCredentials.body(),
            "ERROR: Invalid credentials"
        );
        assert_eq!(GatewayError::InvalidApiKey.body(), "ERROR");
        assert_eq!(GatewayError::MissingToken.body(), "ERROR: JWT missing");
        assert_eq!(GatewayError::InvalidToken.body(), "ERROR: Invalid JWT");
        assert_eq!(GatewayError::InvalidJson.body(), "ERROR: Invalid JSON");
        assert_eq!(
            GatewayError::MissingFields.body(),
            "ERROR: Missing fields in the JSON payload"
        );
        assert_eq!(GatewayError::MethodNotAllowed.body(), "ERROR");
    }
}
