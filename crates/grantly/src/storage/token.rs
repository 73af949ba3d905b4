//! Issued token storage trait.

use async_trait::async_trait;

use crate::AuthResult;
use crate::types::{Client, TokenRecord, User};

/// Storage backend for issued tokens.
///
/// This is the one trait every integration implements; all three grants
/// persist their result through it.
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// Persists a freshly issued token, associated with its client and user.
    ///
    /// Implementations may enrich the record (extra identifiers, audit
    /// fields); the returned record is what the caller ultimately receives.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend fails to persist the token.
    async fn save_token(
        &self,
        token: TokenRecord,
        client: &Client,
        user: &User,
    ) -> AuthResult<TokenRecord>;
}
