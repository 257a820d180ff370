//! JWT issuance and verification module.
//!
//! Provides functions to issue and verify JSON Web Tokens using the HS256
//! algorithm with a process-wide shared secret.
//!
//! # Pre-conditions
//! - The secret must be non-empty (guaranteed by configuration loading).
//!
//! # Post-conditions
//! - Issued tokens carry a fresh UUIDv4 transaction id and expire exactly
//!   [`TOKEN_TTL_SECS`] seconds after issuance.
//! - Verification accepts HS256 only; tokens signed with any other algorithm
//!   are rejected.
//!
//! # Invariants
//! - Issuance and verification are stateless; no token is recorded anywhere.
//! - A token remains valid until natural expiry; there is no revocation.

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    get_current_timestamp,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed validity window of an issued token, in seconds.
pub const TOKEN_TTL_SECS: u64 = 3600;

/// Claims carried by an issued token.
///
/// Signed, not encrypted; the contents are not confidential.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Opaque unique identifier minted per issuance (UUIDv4 text form).
    /// Decoded on verification for future auditing; not otherwise used.
    pub transaction_id: String,
    /// Issuance time as unix seconds.
    pub iat: u64,
    /// Expiry time as unix seconds; always `iat + TOKEN_TTL_SECS`.
    pub exp: u64,
}

/// Error returned when token issuance or verification fails.
#[derive(Debug)]
pub enum TokenError {
    /// The token signature is invalid.
    InvalidSignature,
    /// The token has expired.
    TokenExpired,
    /// The token is malformed, uses a disallowed algorithm, or cannot be parsed.
    MalformedToken,
    /// Signing the claims failed.
    SigningFailed(String),
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSignature => write!(f, "invalid JWT signature"),
            Self::TokenExpired => write!(f, "JWT has expired"),
            Self::MalformedToken => write!(f, "malformed JWT"),
            Self::SigningFailed(reason) => write!(f, "failed to sign JWT: {reason}"),
        }
    }
}

impl std::error::Error for TokenError {}

/// Issues a fresh signed token.
///
/// # Arguments
/// * `secret` - The shared secret for HMAC-SHA256 signing.
///
/// # Returns
/// The compact, URL-safe token string on success.
///
/// # Errors
/// Returns `TokenError::SigningFailed` if the claims cannot be signed.
pub fn issue_token(secret: &[u8]) -> Result<String, TokenError> {
    let iat = get_current_timestamp();
    let claims = Claims {
        transaction_id: Uuid::new_v4().to_string(),
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };

    let header = Header::new(Algorithm::HS256);
    encode(&header, &claims, &EncodingKey::from_secret(secret))
        .map_err(|e| TokenError::SigningFailed(e.to_string()))
}

/// Verifies a token and returns its decoded claims.
///
/// Recomputes the HMAC-SHA256 signature with the shared secret and checks
/// expiry with zero leeway. Tokens signed with any algorithm other than
/// HS256 are rejected as malformed.
///
/// # Arguments
/// * `token` - The token string to verify.
/// * `secret` - The shared secret for HMAC-SHA256 verification.
///
/// # Returns
/// The decoded claims on success.
///
/// # Errors
/// Returns `TokenError` if verification fails for any reason.
pub fn verify_token(token: &str, secret: &[u8]) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(map_jwt_error)?;
    Ok(token_data.claims)
}

/// Maps jsonwebtoken errors to our TokenError type.
fn map_jwt_error(error: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match error.kind() {
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        _ => TokenError::MalformedToken,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-signing-secret-that-is-long-enough";

    fn encode_claims(claims: &Claims, secret: &[u8], algorithm: Algorithm) -> String {
        let header = Header::new(algorithm);
        encode(&header, claims, &EncodingKey::from_secret(secret))
            .expect("failed to encode test token")
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let token = issue_token(SECRET).expect("issuance should succeed");
        let claims = verify_token(&token, SECRET).expect("verification should succeed");

        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_transaction_id_is_a_uuid() {
        let token = issue_token(SECRET).expect("issuance should succeed");
        let claims = verify_token(&token, SECRET).expect("verification should succeed");

        assert!(Uuid::parse_str(&claims.transaction_id).is_ok());
    }

    #[test]
    fn test_each_issuance_mints_a_fresh_transaction_id() {
        let first = issue_token(SECRET).expect("first issuance");
        let second = issue_token(SECRET).expect("second issuance");

        let first_claims = verify_token(&first, SECRET).expect("first claims");
        let second_claims = verify_token(&second, SECRET).expect("second claims");

        assert_ne!(first_claims.transaction_id, second_claims.transaction_id);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = issue_token(SECRET).expect("issuance should succeed");
        let result = verify_token(&token, b"a-completely-different-secret");

        assert!(matches!(result, Err(TokenError::InvalidSignature)));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let now = get_current_timestamp();
        let claims = Claims {
            transaction_id: Uuid::new_v4().to_string(),
            iat: now - 2 * TOKEN_TTL_SECS,
            exp: now - TOKEN_TTL_SECS,
        };
        let token = encode_claims(&claims, SECRET, Algorithm::HS256);

        let result = verify_token(&token, SECRET);
        assert!(matches!(result, Err(TokenError::TokenExpired)));
    }

    #[test]
    fn test_verify_rejects_non_hs256_algorithm() {
        let now = get_current_timestamp();
        let claims = Claims {
            transaction_id: Uuid::new_v4().to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };
        let token = encode_claims(&claims, SECRET, Algorithm::HS384);

        let result = verify_token(&token, SECRET);
        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let result = verify_token("not-a-valid-jwt", SECRET);
        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }

    #[test]
    fn test_verify_rejects_empty_token() {
        let result = verify_token("", SECRET);
        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }

    #[test]
    fn test_token_error_display() {
        assert_eq!(
            TokenError::InvalidSignature.to_string(),
            "invalid JWT signature"
        );
        assert_eq!(TokenError::TokenExpired.to_string(), "JWT has expired");
        assert_eq!(TokenError::MalformedToken.to_string(), "malformed JWT");
        assert_eq!(
            TokenError::SigningFailed("bad key".to_string()).to_string(),
            "failed to sign JWT: bad key"
        );
    }
}
