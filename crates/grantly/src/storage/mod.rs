//! Storage abstractions for grant credentials and issued tokens.
//!
//! Each grant capability has its own trait, so an integration only
//! implements what it actually serves. All traits follow the same
//! contract: `Ok(None)` means the record does not exist, `Err` means the
//! backend itself failed. Handlers map absence to grant errors and never
//! swallow backend failures.

pub mod authorization_code;
pub mod refresh_token;
pub mod token;
pub mod user;

pub use authorization_code::AuthorizationCodeStorage;
pub use refresh_token::RefreshTokenStorage;
pub use token::TokenStorage;
pub use user::UserStorage;
