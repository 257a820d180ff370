//! Test bearer-token rejection at the protected endpoint.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode, get_current_timestamp};
use uuid::Uuid;

use crate::auth::{Claims, TOKEN_TTL_SECS};
use crate::e2e_tests::helpers::{
    TEST_API_KEY, TEST_JWT_SECRET, TestGateway, devops_request, valid_payload,
};
use crate::routes::API_KEY_HEADER;

fn encode_claims(claims: &Claims, secret: &[u8], algorithm: Algorithm) -> String {
    encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .expect("failed to encode test token")
}

fn claims_with_expiry(exp: u64) -> Claims {
    Claims {
        transaction_id: Uuid::new_v4().to_string(),
        iat: exp.saturating_sub(TOKEN_TTL_SECS),
        exp,
    }
}

#[test]
fn test_missing_token_header_is_unauthorized() {
    let gateway = TestGateway::new();

    // Valid API key but no token header at all.
    let request = Request::builder()
        .method("POST")
        .uri("/DevOps")
        .header("content-type", "application/json")
        .header(API_KEY_HEADER, TEST_API_KEY)
        .body(Body::from(valid_payload().to_string()))
        .expect("request");
    let response = gateway.send(request);

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body_string(), "ERROR: JWT missing");
}

#[test]
fn test_garbage_token_is_unauthorized() {
    let gateway = TestGateway::new();

    let response = gateway.send(devops_request("not-a-jwt", &valid_payload()));

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body_string(), "ERROR: Invalid JWT");
}

#[test]
fn test_expired_token_is_unauthorized() {
    let gateway = TestGateway::new();

    let expired = claims_with_expiry(get_current_timestamp() - TOKEN_TTL_SECS);
    let token = encode_claims(&expired, TEST_JWT_SECRET.as_bytes(), Algorithm::HS256);

    let response = gateway.send(devops_request(&token, &valid_payload()));

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body_string(), "ERROR: Invalid JWT");
}

#[test]
fn test_token_signed_with_different_secret_is_unauthorized() {
    let gateway = TestGateway::new();

    let claims = claims_with_expiry(get_current_timestamp() + TOKEN_TTL_SECS);
    let token = encode_claims(&claims, b"some-other-secret", Algorithm::HS256);

    let response = gateway.send(devops_request(&token, &valid_payload()));

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body_string(), "ERROR: Invalid JWT");
}

#[test]
fn test_token_signed_with_other_algorithm_is_unauthorized() {
    let gateway = TestGateway::new();

    // Same secret, but HS384; verification accepts HS256 only.
    let claims = claims_with_expiry(get_current_timestamp() + TOKEN_TTL_SECS);
    let token = encode_claims(&claims, TEST_JWT_SECRET.as_bytes(), Algorithm::HS384);

    let response = gateway.send(devops_request(&token, &valid_payload()));

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body_string(), "ERROR: Invalid JWT");
}
