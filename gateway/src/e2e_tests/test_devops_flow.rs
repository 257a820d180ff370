//! Test the full issue-then-dispatch happy path.

use axum::http::StatusCode;
use serde_json::json;

use crate::e2e_tests::helpers::{TestGateway, devops_request, valid_payload};

#[test]
fn test_fresh_token_and_complete_payload_are_acknowledged() {
    let gateway = TestGateway::new();
    let token = gateway.issue_token();

    let response = gateway.send(devops_request(&token, &valid_payload()));

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body_json(),
        json!({ "message": "Hello Juan Perez, your message will be send" })
    );
}

#[test]
fn test_acknowledgement_interpolates_the_recipient() {
    let gateway = TestGateway::new();
    let token = gateway.issue_token();

    let payload = json!({
        "message": "deploy finished",
        "to": "Bob",
        "from": "ci",
        "timeToLifeSec": 60,
    });
    let response = gateway.send(devops_request(&token, &payload));

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body_json()["message"],
        "Hello Bob, your message will be send"
    );
}

#[test]
fn test_a_token_can_be_presented_repeatedly() {
    // Tokens are stateless; nothing is consumed by a dispatch.
    let gateway = TestGateway::new();
    let token = gateway.issue_token();

    for _ in 0..3 {
        let response = gateway.send(devops_request(&token, &valid_payload()));
        assert_eq!(response.status, StatusCode::OK);
    }
}
