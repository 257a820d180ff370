//! Test payload validation on the protected endpoint.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use crate::e2e_tests::helpers::{TEST_API_KEY, TestGateway, devops_request, valid_payload};
use crate::routes::{API_KEY_HEADER, TOKEN_HEADER};

const MISSING_FIELDS_BODY: &str = "ERROR: Missing fields in the JSON payload";

#[test]
fn test_each_omitted_field_is_rejected() {
    let gateway = TestGateway::new();
    let token = gateway.issue_token();

    for field in ["message", "to", "from", "timeToLifeSec"] {
        let mut payload = valid_payload();
        payload
            .as_object_mut()
            .expect("payload is an object")
            .remove(field);

        let response = gateway.send(devops_request(&token, &payload));

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "field: {field}");
        assert_eq!(response.body_string(), MISSING_FIELDS_BODY);
    }
}

#[test]
fn test_falsy_fields_are_rejected() {
    let gateway = TestGateway::new();
    let token = gateway.issue_token();

    for falsy in [json!(""), json!(0), json!(null), json!(false)] {
        let mut payload = valid_payload();
        payload["timeToLifeSec"] = falsy.clone();

        let response = gateway.send(devops_request(&token, &payload));

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "value: {falsy}");
        assert_eq!(response.body_string(), MISSING_FIELDS_BODY);
    }
}

#[test]
fn test_unparseable_body_is_invalid_json() {
    let gateway = TestGateway::new();
    let token = gateway.issue_token();

    let request = Request::builder()
        .method("POST")
        .uri("/DevOps")
        .header("content-type", "application/json")
        .header(API_KEY_HEADER, TEST_API_KEY)
        .header(TOKEN_HEADER, token)
        .body(Body::from("{not json"))
        .expect("request");
    let response = gateway.send(request);

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body_string(), "ERROR: Invalid JSON");
}

#[test]
fn test_non_json_content_type_is_invalid_json() {
    let gateway = TestGateway::new();
    let token = gateway.issue_token();

    // A parseable body with the wrong content type is still rejected.
    let request = Request::builder()
        .method("POST")
        .uri("/DevOps")
        .header("content-type", "text/plain")
        .header(API_KEY_HEADER, TEST_API_KEY)
        .header(TOKEN_HEADER, token)
        .body(Body::from(valid_payload().to_string()))
        .expect("request");
    let response = gateway.send(request);

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body_string(), "ERROR: Invalid JSON");
}

#[test]
fn test_extra_fields_are_ignored() {
    let gateway = TestGateway::new();
    let token = gateway.issue_token();

    let mut payload = valid_payload();
    payload["unexpected"] = json!("extra");

    let response = gateway.send(devops_request(&token, &payload));

    assert_eq!(response.status, StatusCode::OK);
}
