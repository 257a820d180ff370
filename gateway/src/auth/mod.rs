//! Authentication module.
//!
//! This module provides the security-relevant core of the gateway: the
//! credential and API-key checks and the JWT issuance/verification pair.
//!
//! # Pre-conditions
//! - The gateway must be configured with non-empty secrets.
//!
//! # Post-conditions
//! - Authentication state is never stored; every check is stateless.
//!
//! # Invariants
//! - Tokens are signed and verified with HS256 only.

pub mod credentials;
pub mod token;

pub use token::{Claims, TOKEN_TTL_SECS, TokenError, issue_token, verify_token};
