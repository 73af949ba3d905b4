//! Issued token record.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// The record produced by a successful grant exchange.
///
/// This is what [`TokenStorage::save_token`] receives and what the server
/// returns to the caller. The refresh-token half is optional so a storage
/// backend that withholds refresh tokens can drop it when enriching the
/// record.
///
/// [`TokenStorage::save_token`]: crate::storage::TokenStorage::save_token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    /// Unique record identifier.
    pub id: Uuid,

    /// The bearer access token value.
    pub access_token: String,

    /// Access token expiry instant.
    #[serde(with = "time::serde::rfc3339")]
    pub access_token_expires_at: OffsetDateTime,

    /// Refresh token value, when the grant issues one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Refresh token expiry instant.
    #[serde(
        with = "time::serde::rfc3339::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub refresh_token_expires_at: Option<OffsetDateTime>,

    /// Scope carried over from the redeemed credential or request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}
