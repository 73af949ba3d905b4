//! Domain types for the grant engine.

pub mod authorization_code;
pub mod client;
pub mod refresh_token;
pub mod request;
pub mod token;
pub mod user;

pub use authorization_code::AuthorizationCode;
pub use client::{Client, GrantType};
pub use refresh_token::RefreshToken;
pub use request::TokenRequest;
pub use token::TokenRecord;
pub use user::User;
