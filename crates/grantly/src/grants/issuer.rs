//! Shared token issuance.
//!
//! Every grant finishes the same way: generate token values, compute
//! expiries, assemble a record and persist it. [`TokenIssuer`] owns that
//! tail so the grant handlers only differ in how they validate the
//! presented credential.

use std::sync::Arc;

use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::AuthResult;
use crate::config::ServerConfig;
use crate::grants::generator::TokenGenerator;
use crate::storage::TokenStorage;
use crate::types::{Client, TokenRecord, User};

/// Issues and persists token records on behalf of the grant handlers.
pub struct TokenIssuer {
    token_storage: Arc<dyn TokenStorage>,
    generator: Arc<dyn TokenGenerator>,
    access_token_lifetime: Duration,
    refresh_token_lifetime: Duration,
}

impl TokenIssuer {
    /// Creates an issuer with explicit lifetimes.
    pub fn new(
        token_storage: Arc<dyn TokenStorage>,
        generator: Arc<dyn TokenGenerator>,
        access_token_lifetime: Duration,
        refresh_token_lifetime: Duration,
    ) -> Self {
        Self {
            token_storage,
            generator,
            access_token_lifetime,
            refresh_token_lifetime,
        }
    }

    /// Creates an issuer from an already merged and validated configuration.
    pub fn from_config(
        token_storage: Arc<dyn TokenStorage>,
        generator: Arc<dyn TokenGenerator>,
        config: &ServerConfig,
    ) -> Self {
        Self::new(
            token_storage,
            generator,
            Duration::seconds(config.access_token_lifetime.as_secs() as i64),
            Duration::seconds(config.refresh_token_lifetime.as_secs() as i64),
        )
    }

    /// Carries the credential's scope into the issued token unchanged.
    ///
    /// Scope semantics (narrowing, validation against the client) belong
    /// to the authorization layer; the engine treats scope as opaque.
    #[must_use]
    pub fn resolve_scope(&self, scope: Option<String>) -> Option<String> {
        scope
    }

    /// Expiry instant for an access token issued now.
    #[must_use]
    pub fn access_token_expires_at(&self, now: OffsetDateTime) -> OffsetDateTime {
        now + self.access_token_lifetime
    }

    /// Expiry instant for a refresh token issued now.
    #[must_use]
    pub fn refresh_token_expires_at(&self, now: OffsetDateTime) -> OffsetDateTime {
        now + self.refresh_token_lifetime
    }

    /// Issues a token pair for the given user and client, then persists it.
    pub async fn issue_and_persist(
        &self,
        user: &User,
        client: &Client,
        scope: Option<String>,
    ) -> AuthResult<TokenRecord> {
        let now = OffsetDateTime::now_utc();

        let (access_token, refresh_token) = tokio::try_join!(
            self.generator.generate_access_token(),
            self.generator.generate_refresh_token(),
        )?;

        let record = TokenRecord {
            id: Uuid::new_v4(),
            access_token,
            access_token_expires_at: self.access_token_expires_at(now),
            refresh_token: Some(refresh_token),
            refresh_token_expires_at: Some(self.refresh_token_expires_at(now)),
            scope: self.resolve_scope(scope),
        };

        tracing::debug!(
            client_id = %client.id,
            user_id = %user.id,
            token_id = %record.id,
            "issuing token"
        );

        self.token_storage.save_token(record, client, user).await
    }
}
