//! Refresh token storage trait.

use async_trait::async_trait;

use crate::AuthResult;
use crate::types::RefreshToken;

/// Storage backend for refresh tokens.
#[async_trait]
pub trait RefreshTokenStorage: Send + Sync {
    /// Looks up a refresh token by its value.
    ///
    /// Returns `Ok(None)` when no such token exists.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backend itself fails.
    async fn get_refresh_token(&self, refresh_token: &str) -> AuthResult<Option<RefreshToken>>;

    /// Revokes a refresh token, returning the revoked record.
    ///
    /// The returned record must carry an expiry at or before the current
    /// instant; the engine treats anything else as a backend defect.
    /// Returns `Ok(None)` when the token was not found, which the engine
    /// reports as an invalid grant.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backend itself fails.
    async fn revoke_token(&self, token: &RefreshToken) -> AuthResult<Option<RefreshToken>>;
}
