//! Credential and API-key comparison.
//!
//! All comparisons are constant-time so that a mismatch reveals nothing
//! about how much of the value matched.
//!
//! # Invariants
//! - Username and password checks never short-circuit; a wrong username and
//!   a wrong password are indistinguishable to the caller.
//! - Comparison is stateless and does not modify any external state.

use subtle::ConstantTimeEq;

use crate::config::GatewayConfig;

/// Checks a request-supplied credential pair against the configured pair.
///
/// Both fields are compared in constant time and the results are combined
/// without short-circuiting.
#[must_use]
pub fn verify_credentials(config: &GatewayConfig, username: &str, password: &str) -> bool {
    let username_matches = eq_constant_time(username, &config.username);
    let password_matches = eq_constant_time(password, &config.password);
    username_matches & password_matches
}

/// Checks a request-supplied API key against the configured key.
#[must_use]
pub fn verify_api_key(config: &GatewayConfig, presented: &str) -> bool {
    eq_constant_time(presented, &config.api_key)
}

/// Constant-time string equality.
///
/// Inputs of differing lengths compare unequal immediately; length is not
/// considered secret here.
fn eq_constant_time(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GatewayConfig {
        GatewayConfig {
            api_key: "2f5ae96c-b558-4c7b-a590-a501ae1c3f6c".to_string(),
            jwt_secret: "test-secret".to_string(),
            username: "neoris".to_string(),
            password: "abc123".to_string(),
            listen_port: 3000,
        }
    }

    #[test]
    fn test_matching_credentials() {
        let config = test_config();
        assert!(verify_credentials(&config, "neoris", "abc123"));
    }

    #[test]
    fn test_wrong_username() {
        let config = test_config();
        assert!(!verify_credentials(&config, "intruder", "abc123"));
    }

    #[test]
    fn test_wrong_password() {
        let config = test_config();
        assert!(!verify_credentials(&config, "neoris", "wrong"));
    }

    #[test]
    fn test_empty_credentials() {
        let config = test_config();
        assert!(!verify_credentials(&config, "", ""));
    }

    #[test]
    fn test_matching_api_key() {
        let config = test_config();
        assert!(verify_api_key(
            &config,
            "2f5ae96c-b558-4c7b-a590-a501ae1c3f6c"
        ));
    }

    #[test]
    fn test_wrong_api_key() {
        let config = test_config();
        assert!(!verify_api_key(&config, "not-the-key"));
    }

    #[test]
    fn test_api_key_prefix_is_not_enough() {
        let config = test_config();
        assert!(!verify_api_key(&config, "2f5ae96c-b558"));
    }

    #[test]
    fn test_empty_api_key() {
        let config = test_config();
        assert!(!verify_api_key(&config, ""));
    }
}
