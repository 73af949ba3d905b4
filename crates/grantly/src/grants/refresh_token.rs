//! Refresh token grant with rotation (RFC 6749 Section 6).

use std::sync::Arc;

use crate::AuthResult;
use crate::error::AuthError;
use crate::grants::issuer::TokenIssuer;
use crate::storage::RefreshTokenStorage;
use crate::types::{Client, RefreshToken, TokenRecord, TokenRequest};
use crate::validator::is_vschar;

/// Exchanges a refresh token for a new token pair.
///
/// Tokens rotate on every use: the presented token is revoked before the
/// replacement pair is issued, so a replayed token always fails. The scope
/// of the new pair comes from the request, not from the old token.
pub struct RefreshTokenGrant {
    storage: Arc<dyn RefreshTokenStorage>,
    issuer: TokenIssuer,
}

impl RefreshTokenGrant {
    /// Creates a grant handler backed by the given token storage.
    pub fn new(storage: Arc<dyn RefreshTokenStorage>, issuer: TokenIssuer) -> Self {
        Self { storage, issuer }
    }

    /// Runs the full exchange: resolve, revoke, reissue.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for a missing or malformed parameter,
    /// `InvalidGrant` for an unknown, mismatched, expired or concurrently
    /// revoked token, and `Internal` when the backend's revocation result
    /// violates the storage contract.
    pub async fn handle(
        &self,
        request: &TokenRequest,
        client: &Client,
    ) -> AuthResult<TokenRecord> {
        let scope = self.issuer.resolve_scope(request.scope.clone());

        // 1. Resolve and validate the presented token
        let token = self.resolve_token(request, client).await?;

        // 2. Revoke it before anything new is issued
        self.revoke_token(&token).await?;

        // 3. Issue the replacement pair
        self.issuer.issue_and_persist(&token.user, client, scope).await
    }

    async fn resolve_token(
        &self,
        request: &TokenRequest,
        client: &Client,
    ) -> AuthResult<RefreshToken> {
        // An empty value counts as missing, not malformed
        let value = match request.refresh_token.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => {
                return Err(AuthError::invalid_request(
                    "Missing parameter: `refresh_token`",
                ));
            }
        };

        if !is_vschar(value) {
            return Err(AuthError::invalid_request(
                "Invalid parameter: `refresh_token`",
            ));
        }

        let token = self
            .storage
            .get_refresh_token(value)
            .await?
            .ok_or_else(|| AuthError::invalid_grant("refresh token is invalid"))?;

        // Same message as the unknown-token case
        if token.client.id != client.id {
            return Err(AuthError::invalid_grant("refresh token is invalid"));
        }

        if token.is_expired() {
            return Err(AuthError::invalid_grant("refresh token has expired"));
        }

        Ok(token)
    }

    /// Revokes the presented token and checks the backend honored it.
    ///
    /// A `None` result means another exchange won the race; the caller sees
    /// the same invalid-grant error as for an unknown token. A revoked
    /// record that still reports a future expiry, or no expiry at all, is a
    /// storage contract violation.
    async fn revoke_token(&self, token: &RefreshToken) -> AuthResult<()> {
        let revoked = self
            .storage
            .revoke_token(token)
            .await?
            .ok_or_else(|| AuthError::invalid_grant("refresh token is invalid"))?;

        match revoked.expires_at {
            Some(expires_at) if revoked.is_expired() => {
                tracing::debug!(
                    client_id = %token.client.id,
                    %expires_at,
                    "refresh token revoked"
                );
                Ok(())
            }
            Some(_) => {
                tracing::warn!(
                    client_id = %token.client.id,
                    "storage returned a revoked refresh token with a future expiry"
                );
                Err(AuthError::internal("revoked refresh token should be expired"))
            }
            None => {
                tracing::warn!(
                    client_id = %token.client.id,
                    "storage returned a revoked refresh token without an expiry"
                );
                Err(AuthError::internal(
                    "revoked refresh token should carry an expiry",
                ))
            }
        }
    }
}
