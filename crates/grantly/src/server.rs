//! Server facade: capability wiring and grant dispatch.

use std::sync::Arc;

use crate::AuthResult;
use crate::config::{ServerConfig, TokenOptions};
use crate::error::AuthError;
use crate::grants::{
    AuthorizationCodeGrant, ClientCredentialsGrant, RandomTokenGenerator, RefreshTokenGrant,
    TokenGenerator, TokenIssuer,
};
use crate::storage::{
    AuthorizationCodeStorage, RefreshTokenStorage, TokenStorage, UserStorage,
};
use crate::types::{Client, GrantType, TokenRecord, TokenRequest};

/// The grant-exchange engine.
///
/// Wired once at startup with the storage backends for the grants the
/// deployment serves. Token storage is always required; the per-grant
/// backends are optional, and a request for a grant whose backend was not
/// provided fails as an unsupported grant type.
///
/// Client authentication happens before this layer: [`token`] trusts the
/// [`Client`] it is handed.
///
/// [`token`]: OAuth2Server::token
pub struct OAuth2Server {
    config: ServerConfig,
    tokens: Arc<dyn TokenStorage>,
    codes: Option<Arc<dyn AuthorizationCodeStorage>>,
    refresh_tokens: Option<Arc<dyn RefreshTokenStorage>>,
    users: Option<Arc<dyn UserStorage>>,
    generator: Arc<dyn TokenGenerator>,
}

impl OAuth2Server {
    /// Starts building a server around the mandatory token storage.
    pub fn builder(tokens: Arc<dyn TokenStorage>) -> OAuth2ServerBuilder {
        OAuth2ServerBuilder {
            config: ServerConfig::default(),
            tokens,
            codes: None,
            refresh_tokens: None,
            users: None,
            generator: None,
        }
    }

    /// Exchanges a grant for tokens using the server-wide configuration.
    ///
    /// # Errors
    ///
    /// Returns the grant handler's error, or `UnsupportedGrantType` when
    /// the grant type is unknown or not wired, or `UnauthorizedClient`
    /// when the client's allow-list excludes it.
    pub async fn token(
        &self,
        request: &TokenRequest,
        client: &Client,
    ) -> AuthResult<TokenRecord> {
        self.token_with_options(request, client, &TokenOptions::default())
            .await
    }

    /// Exchanges a grant for tokens with per-call lifetime overrides.
    ///
    /// # Errors
    ///
    /// As [`token`](Self::token); additionally `InvalidArgument` when the
    /// merged configuration contains a zero lifetime.
    pub async fn token_with_options(
        &self,
        request: &TokenRequest,
        client: &Client,
        options: &TokenOptions,
    ) -> AuthResult<TokenRecord> {
        // 1. Merge per-call overrides and re-validate
        let config = self.config.merge(options);
        config.validate()?;

        // 2. Resolve the grant type
        if request.grant_type.is_empty() {
            return Err(AuthError::invalid_request("Missing parameter: `grant_type`"));
        }

        let grant_type = GrantType::parse(&request.grant_type)
            .ok_or_else(|| AuthError::unsupported_grant_type(request.grant_type.clone()))?;

        // 3. Check the client's allow-list
        if !client.is_grant_type_allowed(grant_type) {
            return Err(AuthError::unauthorized_client(format!(
                "`grant_type` {grant_type} is not allowed for this client"
            )));
        }

        tracing::debug!(client_id = %client.id, %grant_type, "dispatching grant");

        // 4. Dispatch to the wired handler
        let issuer =
            TokenIssuer::from_config(self.tokens.clone(), self.generator.clone(), &config);

        match grant_type {
            GrantType::AuthorizationCode => {
                let storage = self.codes.clone().ok_or_else(|| {
                    AuthError::unsupported_grant_type(request.grant_type.clone())
                })?;
                let code = AuthorizationCodeGrant::new(storage)
                    .handle(request, client)
                    .await?;
                issuer.issue_and_persist(&code.user, client, code.scope).await
            }
            GrantType::RefreshToken => {
                let storage = self.refresh_tokens.clone().ok_or_else(|| {
                    AuthError::unsupported_grant_type(request.grant_type.clone())
                })?;
                RefreshTokenGrant::new(storage, issuer)
                    .handle(request, client)
                    .await
            }
            GrantType::ClientCredentials => {
                let users = self.users.clone().ok_or_else(|| {
                    AuthError::unsupported_grant_type(request.grant_type.clone())
                })?;
                ClientCredentialsGrant::new(users, issuer)
                    .handle(request, client)
                    .await
            }
        }
    }
}

/// Builder for [`OAuth2Server`].
pub struct OAuth2ServerBuilder {
    config: ServerConfig,
    tokens: Arc<dyn TokenStorage>,
    codes: Option<Arc<dyn AuthorizationCodeStorage>>,
    refresh_tokens: Option<Arc<dyn RefreshTokenStorage>>,
    users: Option<Arc<dyn UserStorage>>,
    generator: Option<Arc<dyn TokenGenerator>>,
}

impl OAuth2ServerBuilder {
    /// Replaces the default configuration.
    #[must_use]
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Enables the authorization-code grant.
    #[must_use]
    pub fn with_authorization_codes(mut self, codes: Arc<dyn AuthorizationCodeStorage>) -> Self {
        self.codes = Some(codes);
        self
    }

    /// Enables the refresh-token grant.
    #[must_use]
    pub fn with_refresh_tokens(mut self, refresh_tokens: Arc<dyn RefreshTokenStorage>) -> Self {
        self.refresh_tokens = Some(refresh_tokens);
        self
    }

    /// Enables the client-credentials grant.
    #[must_use]
    pub fn with_users(mut self, users: Arc<dyn UserStorage>) -> Self {
        self.users = Some(users);
        self
    }

    /// Replaces the default random token generator.
    #[must_use]
    pub fn with_generator(mut self, generator: Arc<dyn TokenGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Validates the configuration and builds the server.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the configuration contains a zero
    /// lifetime.
    pub fn build(self) -> AuthResult<OAuth2Server> {
        self.config.validate()?;

        Ok(OAuth2Server {
            config: self.config,
            tokens: self.tokens,
            codes: self.codes,
            refresh_tokens: self.refresh_tokens,
            users: self.users,
            generator: self
                .generator
                .unwrap_or_else(|| Arc::new(RandomTokenGenerator)),
        })
    }
}
