//! End-to-end tests at the HTTP request/response level.
//!
//! Each test file covers a specific scenario, driving the assembled router
//! to verify the complete request/response cycle.

#![cfg(test)]
#![allow(clippy::expect_used)]

mod helpers;

mod test_api_key;
mod test_devops_flow;
mod test_health;
mod test_method_rejection;
mod test_missing_fields;
mod test_preflight;
mod test_token_issuance;
mod test_token_rejection;
