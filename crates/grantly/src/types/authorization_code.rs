//! Authorization code credential.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::{Client, User};

/// A stored authorization code awaiting redemption.
///
/// Produced by the (out-of-scope) authorization endpoint and looked up by
/// the authorization-code grant. Codes are single-use: the storage backend
/// must invalidate a code the moment a token is issued against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationCode {
    /// The opaque code value handed to the client.
    pub code: String,

    /// Client the code was issued to.
    pub client: Client,

    /// Resource owner who approved the authorization.
    pub user: User,

    /// Absolute expiry instant.
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,

    /// Scope approved at authorization time, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl AuthorizationCode {
    /// Checks if the code has expired.
    ///
    /// Expiry is exclusive: a code whose `expires_at` equals the current
    /// instant is already expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at <= OffsetDateTime::now_utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    fn code_expiring_at(expires_at: OffsetDateTime) -> AuthorizationCode {
        AuthorizationCode {
            code: "abc123".to_string(),
            client: Client::new("1"),
            user: User::new("9"),
            expires_at,
            scope: None,
        }
    }

    #[test]
    fn test_future_code_is_not_expired() {
        let code = code_expiring_at(OffsetDateTime::now_utc() + Duration::seconds(60));
        assert!(!code.is_expired());
    }

    #[test]
    fn test_past_code_is_expired() {
        let code = code_expiring_at(OffsetDateTime::now_utc() - Duration::seconds(1));
        assert!(code.is_expired());
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        // An expiry instant that is not in the future counts as expired.
        let code = code_expiring_at(OffsetDateTime::now_utc() - Duration::nanoseconds(1));
        assert!(code.is_expired());
    }

    #[test]
    fn test_serde_rfc3339_expiry() {
        let code = code_expiring_at(OffsetDateTime::from_unix_timestamp(1_735_689_600).unwrap());
        let json = serde_json::to_string(&code).unwrap();
        assert!(json.contains(r#""expiresAt":"2025-01-01T00:00:00Z""#));
        assert!(!json.contains("scope"));

        let parsed: AuthorizationCode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, code);
    }
}
