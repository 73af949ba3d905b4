//! Authorization code storage trait.

use async_trait::async_trait;

use crate::AuthResult;
use crate::types::AuthorizationCode;

/// Storage backend for authorization codes.
#[async_trait]
pub trait AuthorizationCodeStorage: Send + Sync {
    /// Looks up an authorization code by its value.
    ///
    /// Returns `Ok(None)` when no such code exists. Implementations must
    /// invalidate a code once a token has been issued against it, so a
    /// second lookup of a redeemed code returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backend itself fails.
    async fn get_authorization_code(&self, code: &str) -> AuthResult<Option<AuthorizationCode>>;
}
