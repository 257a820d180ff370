//! Gateway configuration module.
//!
//! This module provides configuration loading for the auth gateway from
//! environment variables.
//!
//! # Environment Variables
//!
//! - `GATEWAY_API_KEY`: static API key expected in `X-Parse-REST-API-Key` (required)
//! - `GATEWAY_JWT_SECRET`: HMAC-SHA256 signing secret for issued tokens (required)
//! - `GATEWAY_USERNAME`: username accepted at the token issuance endpoint (required)
//! - `GATEWAY_PASSWORD`: password accepted at the token issuance endpoint (required)
//! - `GATEWAY_LISTEN_PORT`: Port to listen on (default: `3000`)
//!
//! # Invariants
//!
//! - All secret values are non-empty once loading succeeds
//! - `listen_port` is always a valid port number (1-65535)
//! - The configuration is immutable after construction and shared by reference

/// Gateway configuration.
///
/// Contains all configuration parameters needed to run the auth gateway.
/// Constructed once at startup and injected into the handler layer as
/// shared router state; never a mutable global.
///
/// # Post-conditions
///
/// - All secret fields are non-empty
/// - `listen_port` is always in the valid range (1-65535)
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Static API key matched against the `X-Parse-REST-API-Key` header.
    pub api_key: String,
    /// Shared secret used to sign and verify issued tokens (HS256).
    pub jwt_secret: String,
    /// Username of the single configured credential pair.
    pub username: String,
    /// Password of the single configured credential pair.
    pub password: String,
    /// Port to listen on for HTTP connections.
    pub listen_port: u16,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable is missing.
    MissingEnvVar(String),
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEnvVar(name) => {
                write!(f, "missing required environment variable: {name}")
            }
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl GatewayConfig {
    /// Default port for the gateway.
    pub const DEFAULT_PORT: u16 = 3000;

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any of `GATEWAY_API_KEY`, `GATEWAY_JWT_SECRET`, `GATEWAY_USERNAME`,
    ///   or `GATEWAY_PASSWORD` is not set or is empty
    /// - `GATEWAY_LISTEN_PORT` is set but not a valid port number
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = Self::load_required("GATEWAY_API_KEY")?;
        let jwt_secret = Self::load_required("GATEWAY_JWT_SECRET")?;
        let username = Self::load_required("GATEWAY_USERNAME")?;
        let password = Self::load_required("GATEWAY_PASSWORD")?;
        let listen_port = Self::load_listen_port()?;

        Ok(Self {
            api_key,
            jwt_secret,
            username,
            password,
            listen_port,
        })
    }

    /// Load a required, non-empty environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set or is empty.
    fn load_required(name: &str) -> Result<String, ConfigError> {
        let value =
            std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))?;

        if value.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: name.to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(value)
    }

    /// Load the listen port from environment.
    ///
    /// Returns the default if not set.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is set but not a valid port number.
    fn load_listen_port() -> Result<u16, ConfigError> {
        match std::env::var("GATEWAY_LISTEN_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "GATEWAY_LISTEN_PORT".to_string(),
                message: format!("'{value}' is not a valid port number (must be 1-65535)"),
            }),
            Err(_) => Ok(Self::DEFAULT_PORT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(GatewayConfig::DEFAULT_PORT, 3000);
    }

    #[test]
    fn test_config_error_display_missing() {
        let error = ConfigError::MissingEnvVar("TEST_VAR".to_string());
        assert_eq!(
            error.to_string(),
            "missing required environment variable: TEST_VAR"
        );
    }

    #[test]
    fn test_config_error_display_invalid() {
        let error = ConfigError::InvalidValue {
            name: "TEST_VAR".to_string(),
            message: "bad value".to_string(),
        };
        assert_eq!(error.to_string(), "invalid value for TEST_VAR: bad value");
    }

    #[test]
    fn test_config_is_cloneable() {
        let config = GatewayConfig {
            api_key: "key".to_string(),
            jwt_secret: "secret".to_string(),
            username: "user".to_string(),
            password: "pass".to_string(),
            listen_port: 3000,
        };
        let cloned = config.clone();

        assert_eq!(config.api_key, cloned.api_key);
        assert_eq!(config.jwt_secret, cloned.jwt_secret);
        assert_eq!(config.username, cloned.username);
        assert_eq!(config.password, cloned.password);
        assert_eq!(config.listen_port, cloned.listen_port);
    }
}
