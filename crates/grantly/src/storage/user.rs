//! Client-to-user resolution trait for the client-credentials grant.

use async_trait::async_trait;

use crate::AuthResult;
use crate::types::{Client, User};

/// Resolves the user a machine client acts as.
///
/// The client-credentials grant has no resource owner in the request, so
/// the integration decides which user record (often a service account)
/// stands behind each client.
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Returns the user associated with the given client.
    ///
    /// Returns `Ok(None)` when the client has no associated user, which
    /// the engine reports as an invalid grant.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backend itself fails.
    async fn get_user_from_client(&self, client: &Client) -> AuthResult<Option<User>>;
}
