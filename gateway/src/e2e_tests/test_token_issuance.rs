//! Test credential-based token issuance.

use axum::http::StatusCode;
use serde_json::json;

use crate::auth::{TOKEN_TTL_SECS, verify_token};
use crate::e2e_tests::helpers::{
    TEST_JWT_SECRET, TEST_PASSWORD, TEST_USERNAME, TestGateway, post_json,
};

#[test]
fn test_valid_credentials_yield_a_token() {
    let gateway = TestGateway::new();

    let response = gateway.send(post_json(
        "/jwt",
        &json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD }),
    ));

    assert_eq!(response.status, StatusCode::OK);
    let body = response.body_json();
    assert!(body["jwt"].as_str().is_some_and(|t| !t.is_empty()));
}

#[test]
fn test_issued_claims_expire_after_exactly_the_ttl() {
    let gateway = TestGateway::new();
    let token = gateway.issue_token();

    let claims =
        verify_token(&token, TEST_JWT_SECRET.as_bytes()).expect("issued token should verify");

    assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    assert!(!claims.transaction_id.is_empty());
}

#[test]
fn test_consecutive_issuances_mint_distinct_transaction_ids() {
    let gateway = TestGateway::new();

    let first = verify_token(&gateway.issue_token(), TEST_JWT_SECRET.as_bytes())
        .expect("first token should verify");
    let second = verify_token(&gateway.issue_token(), TEST_JWT_SECRET.as_bytes())
        .expect("second token should verify");

    assert_ne!(first.transaction_id, second.transaction_id);
}

#[test]
fn test_wrong_password_is_rejected() {
    let gateway = TestGateway::new();

    let response = gateway.send(post_json(
        "/jwt",
        &json!({ "username": TEST_USERNAME, "password": "wrong" }),
    ));

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body_string(), "ERROR: Invalid credentials");
}

#[test]
fn test_wrong_username_is_rejected() {
    let gateway = TestGateway::new();

    let response = gateway.send(post_json(
        "/jwt",
        &json!({ "username": "intruder", "password": TEST_PASSWORD }),
    ));

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body_string(), "ERROR: Invalid credentials");
}

#[test]
fn test_rejection_does_not_reveal_which_field_mismatched() {
    let gateway = TestGateway::new();

    let wrong_user = gateway.send(post_json(
        "/jwt",
        &json!({ "username": "intruder", "password": TEST_PASSWORD }),
    ));
    let wrong_pass = gateway.send(post_json(
        "/jwt",
        &json!({ "username": TEST_USERNAME, "password": "wrong" }),
    ));

    assert_eq!(wrong_user.status, wrong_pass.status);
    assert_eq!(wrong_user.body_string(), wrong_pass.body_string());
}

#[test]
fn test_missing_fields_are_treated_as_non_matching() {
    let gateway = TestGateway::new();

    let response = gateway.send(post_json("/jwt", &json!({})));
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = gateway.send(post_json("/jwt", &json!({ "username": TEST_USERNAME })));
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = gateway.send(post_json("/jwt", &json!({ "password": TEST_PASSWORD })));
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[test]
fn test_empty_credentials_are_rejected() {
    let gateway = TestGateway::new();

    let response = gateway.send(post_json(
        "/jwt",
        &json!({ "username": "", "password": "" }),
    ));

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
