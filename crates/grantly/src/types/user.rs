//! Resource-owner record.

use serde::{Deserialize, Serialize};

/// Opaque resource-owner record supplied by the storage backend.
///
/// The engine never inspects anything beyond carrying the record from a
/// validated credential into [`TokenStorage::save_token`]; its shape is the
/// storage implementation's business, hence the flattened attribute map.
///
/// [`TokenStorage::save_token`]: crate::storage::TokenStorage::save_token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Identifier within the storage backend.
    pub id: String,

    /// Arbitrary additional attributes, passed through untouched.
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Creates a user with no extra attributes.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: serde_json::Map::new(),
        }
    }
}
