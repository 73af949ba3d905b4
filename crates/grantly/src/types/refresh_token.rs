//! Refresh token credential.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::{Client, User};

/// A stored refresh token awaiting exchange.
///
/// Refresh tokens are rotated: every successful exchange revokes the
/// presented token before a new pair is issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshToken {
    /// The opaque token value.
    pub refresh_token: String,

    /// Client the token was issued to.
    pub client: Client,

    /// Resource owner on whose behalf the token was issued.
    pub user: User,

    /// Absolute expiry instant. `None` means the token never expires.
    #[serde(
        with = "time::serde::rfc3339::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_at: Option<OffsetDateTime>,
}

impl RefreshToken {
    /// Checks if the token has expired.
    ///
    /// A token without an expiry never expires. Like authorization codes,
    /// the boundary is exclusive.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= OffsetDateTime::now_utc(),
            None => false,
        }
    }
}
