//! Protected notification endpoint.
//!
//! Gates a request through the API key check, the bearer token check, and
//! payload validation, each step short-circuiting on failure. No outbound
//! call is made; the success response is a stub acknowledgement.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use serde::Serialize;
use serde_json::Value;

use crate::auth::{credentials, verify_token};
use crate::config::GatewayConfig;
use crate::error::GatewayError;

/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "X-Parse-REST-API-Key";

/// Header carrying the bearer token. Non-standard name, preserved verbatim
/// for wire compatibility with existing clients.
pub const TOKEN_HEADER: &str = "X-JWT-KWY";

/// Payload fields that must be present and truthy.
const REQUIRED_FIELDS: [&str; 4] = ["message", "to", "from", "timeToLifeSec"];

/// Stub acknowledgement returned on success.
#[derive(Debug, Serialize)]
pub struct DispatchResponse {
    message: String,
}

/// `POST /DevOps` — validate the caller and acknowledge the notification.
///
/// Gate sequence, in order:
/// 1. `X-Parse-REST-API-Key` must match the configured key, else 403.
/// 2. `X-JWT-KWY` must be present, else 401.
/// 3. The token must verify (HS256 signature, unexpired), else 401.
/// 4. The body must be JSON with a JSON content type, else 400.
/// 5. All of `message`, `to`, `from`, `timeToLifeSec` must be truthy, else 400.
pub async fn dispatch(
    State(config): State<Arc<GatewayConfig>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<DispatchResponse>, GatewayError> {
    let api_key = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if !credentials::verify_api_key(&config, api_key) {
        tracing::debug!("dispatch refused: API key mismatch");
        return Err(GatewayError::InvalidApiKey);
    }

    let Some(token) = headers.get(TOKEN_HEADER).and_then(|v| v.to_str().ok()) else {
        return Err(GatewayError::MissingToken);
    };
    let claims = verify_token(token, config.jwt_secret.as_bytes()).map_err(|e| {
        tracing::debug!("dispatch refused: {e}");
        GatewayError::InvalidToken
    })?;
    // The transaction id is decoded for auditing only.
    tracing::debug!(transaction_id = %claims.transaction_id, "token verified");

    if !has_json_content_type(&headers) {
        return Err(GatewayError::InvalidJson);
    }
    let payload: Value = serde_json::from_slice(&body).map_err(|_| GatewayError::InvalidJson)?;

    for field in REQUIRED_FIELDS {
        if !payload.get(field).is_some_and(is_truthy) {
            return Err(GatewayError::MissingFields);
        }
    }
    let to = payload
        .get("to")
        .map(display_value)
        .ok_or(GatewayError::MissingFields)?;

    // Grammar of this literal is part of the external contract.
    Ok(Json(DispatchResponse {
        message: format!("Hello {to}, your message will be send"),
    }))
}

/// Whether the request declares a JSON content type
/// (`application/json` or `application/*+json`).
fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json"
                || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
}

/// Truthiness of a JSON value: null, false, zero, and empty strings,
/// arrays, and objects are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Render a JSON value for interpolation into the acknowledgement string.
///
/// Strings are used bare; other values use their JSON text form.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    #[test]
    fn test_truthiness_of_falsy_values() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
    }

    #[test]
    fn test_truthiness_of_truthy_values() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(45)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("hello")));
        assert!(is_truthy(&json!([1])));
        assert!(is_truthy(&json!({"a": 1})));
    }

    #[test]
    fn test_json_content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!has_json_content_type(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        assert!(has_json_content_type(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        assert!(has_json_content_type(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        assert!(has_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert!(!has_json_content_type(&headers));
    }

    #[test]
    fn test_display_value_strings_are_bare() {
        assert_eq!(display_value(&json!("Bob")), "Bob");
        assert_eq!(display_value(&json!(42)), "42");
    }
}
