//! OAuth 2.0 grant-exchange engine.
//!
//! This crate implements the token-endpoint half of an RFC 6749
//! authorization server: it validates a presented grant credential and
//! exchanges it for tokens. Three grant types are supported:
//!
//! - **Authorization code**: redeems a code produced by an authorization
//!   endpoint, binding it to the authenticated client.
//! - **Refresh token**: rotates a refresh token, revoking the presented
//!   one before the replacement pair is issued.
//! - **Client credentials**: issues a token pair directly to a machine
//!   client, with the user resolved from the client identity.
//!
//! Persistence is pluggable through per-capability async traits in
//! [`storage`]; a deployment only implements the traits for the grants it
//! serves. Transport, client authentication and scope semantics live
//! outside this crate.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use grantly::prelude::*;
//!
//! let server = OAuth2Server::builder(token_storage)
//!     .with_refresh_tokens(refresh_token_storage)
//!     .build()?;
//!
//! let record = server
//!     .token(&TokenRequest::refresh_token("..."), &client)
//!     .await?;
//! ```

pub mod config;
pub mod error;
pub mod grants;
pub mod server;
pub mod storage;
pub mod types;
pub mod validator;

pub use config::{ServerConfig, TokenOptions};
pub use error::AuthError;
pub use server::{OAuth2Server, OAuth2ServerBuilder};
pub use types::{
    AuthorizationCode, Client, GrantType, RefreshToken, TokenRecord, TokenRequest, User,
};

/// Result type for grant operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Commonly used types for integrating the engine.
pub mod prelude {
    pub use crate::config::{ServerConfig, TokenOptions};
    pub use crate::error::AuthError;
    pub use crate::grants::{RandomTokenGenerator, TokenGenerator};
    pub use crate::server::{OAuth2Server, OAuth2ServerBuilder};
    pub use crate::storage::{
        AuthorizationCodeStorage, RefreshTokenStorage, TokenStorage, UserStorage,
    };
    pub use crate::types::{
        AuthorizationCode, Client, GrantType, RefreshToken, TokenRecord, TokenRequest, User,
    };
    pub use crate::AuthResult;
}
