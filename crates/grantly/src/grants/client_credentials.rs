//! Client credentials grant (RFC 6749 Section 4.4).

use std::sync::Arc;

use crate::AuthResult;
use crate::error::AuthError;
use crate::grants::issuer::TokenIssuer;
use crate::storage::UserStorage;
use crate::types::{Client, TokenRecord, TokenRequest};

/// Issues a token pair directly to an authenticated machine client.
///
/// There is no credential to redeem; the integration maps the client to a
/// user record (typically a service account) and the token pair is issued
/// for that user.
pub struct ClientCredentialsGrant {
    users: Arc<dyn UserStorage>,
    issuer: TokenIssuer,
}

impl ClientCredentialsGrant {
    /// Creates a grant handler backed by the given user resolution storage.
    pub fn new(users: Arc<dyn UserStorage>, issuer: TokenIssuer) -> Self {
        Self { users, issuer }
    }

    /// Resolves the client's user and issues a token pair.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrant` when no user stands behind the client.
    pub async fn handle(
        &self,
        request: &TokenRequest,
        client: &Client,
    ) -> AuthResult<TokenRecord> {
        let scope = self.issuer.resolve_scope(request.scope.clone());

        let user = self
            .users
            .get_user_from_client(client)
            .await?
            .ok_or_else(|| AuthError::invalid_grant("client is invalid"))?;

        self.issuer.issue_and_persist(&user, client, scope).await
    }
}
