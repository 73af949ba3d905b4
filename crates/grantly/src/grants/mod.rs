//! Grant handlers and shared issuance machinery.
//!
//! Each handler validates one kind of credential; [`TokenIssuer`] carries
//! the shared generate-and-persist tail. Handlers are stateless apart from
//! their storage handles and can serve concurrent exchanges.

pub mod authorization_code;
pub mod client_credentials;
pub mod generator;
pub mod issuer;
pub mod refresh_token;

pub use authorization_code::AuthorizationCodeGrant;
pub use client_credentials::ClientCredentialsGrant;
pub use generator::{RandomTokenGenerator, TokenGenerator};
pub use issuer::TokenIssuer;
pub use refresh_token::RefreshTokenGrant;
