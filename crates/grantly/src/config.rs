//! Engine configuration.
//!
//! Server-wide defaults with explicit per-call overrides, applied once at
//! the start of each token operation. There is no ambient mutable state.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::AuthResult;
use crate::error::AuthError;

/// Server-wide grant configuration.
///
/// Lifetimes follow the RFC 6749 recommendations: short authorization
/// codes, one-hour access tokens, two-week refresh tokens.
///
/// # Example (TOML)
///
/// ```toml
/// access_token_lifetime = "1h"
/// authorization_code_lifetime = "5m"
/// refresh_token_lifetime = "14d"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Access token lifetime.
    /// Shorter lifetimes are more secure but require more frequent refresh.
    #[serde(with = "humantime_serde")]
    pub access_token_lifetime: Duration,

    /// Authorization code lifetime.
    /// Codes should be short-lived; they are redeemed exactly once.
    #[serde(with = "humantime_serde")]
    pub authorization_code_lifetime: Duration,

    /// Refresh token lifetime.
    /// Can be longer since refresh tokens require client authentication
    /// and are rotated on every use.
    #[serde(with = "humantime_serde")]
    pub refresh_token_lifetime: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            access_token_lifetime: Duration::from_secs(3600), // 1 hour
            authorization_code_lifetime: Duration::from_secs(300), // 5 minutes
            refresh_token_lifetime: Duration::from_secs(14 * 24 * 3600), // 2 weeks
        }
    }
}

impl ServerConfig {
    /// Sets the access token lifetime.
    #[must_use]
    pub fn with_access_token_lifetime(mut self, lifetime: Duration) -> Self {
        self.access_token_lifetime = lifetime;
        self
    }

    /// Sets the authorization code lifetime.
    #[must_use]
    pub fn with_authorization_code_lifetime(mut self, lifetime: Duration) -> Self {
        self.authorization_code_lifetime = lifetime;
        self
    }

    /// Sets the refresh token lifetime.
    #[must_use]
    pub fn with_refresh_token_lifetime(mut self, lifetime: Duration) -> Self {
        self.refresh_token_lifetime = lifetime;
        self
    }

    /// Applies per-call overrides on top of this configuration.
    #[must_use]
    pub fn merge(&self, options: &TokenOptions) -> Self {
        Self {
            access_token_lifetime: options
                .access_token_lifetime
                .unwrap_or(self.access_token_lifetime),
            authorization_code_lifetime: self.authorization_code_lifetime,
            refresh_token_lifetime: options
                .refresh_token_lifetime
                .unwrap_or(self.refresh_token_lifetime),
        }
    }

    /// Rejects lifetimes that could never produce a future expiry.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error for any zero lifetime. This is an
    /// integration error, surfaced when the server is built rather than on
    /// the first request.
    pub fn validate(&self) -> AuthResult<()> {
        if self.access_token_lifetime.is_zero() {
            return Err(AuthError::invalid_argument(
                "`access_token_lifetime` must be positive",
            ));
        }

        if self.authorization_code_lifetime.is_zero() {
            return Err(AuthError::invalid_argument(
                "`authorization_code_lifetime` must be positive",
            ));
        }

        if self.refresh_token_lifetime.is_zero() {
            return Err(AuthError::invalid_argument(
                "`refresh_token_lifetime` must be positive",
            ));
        }

        Ok(())
    }
}

/// Per-call lifetime overrides, merged over [`ServerConfig`] defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TokenOptions {
    /// Overrides the access token lifetime for this call.
    #[serde(with = "humantime_serde")]
    pub access_token_lifetime: Option<Duration>,

    /// Overrides the refresh token lifetime for this call.
    #[serde(with = "humantime_serde")]
    pub refresh_token_lifetime: Option<Duration>,
}
