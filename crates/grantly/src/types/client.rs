//! OAuth 2.0 client domain types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Grant Type
// =============================================================================

/// OAuth 2.0 grant types supported by this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    /// Authorization Code flow.
    AuthorizationCode,
    /// Client Credentials flow (machine-to-machine).
    ClientCredentials,
    /// Refresh Token flow.
    RefreshToken,
}

impl GrantType {
    /// Returns the OAuth 2.0 `grant_type` parameter value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthorizationCode => "authorization_code",
            Self::ClientCredentials => "client_credentials",
            Self::RefreshToken => "refresh_token",
        }
    }

    /// Parses a `grant_type` parameter value.
    ///
    /// Returns `None` for anything the engine does not implement, including
    /// the legacy `password` and `implicit` flows.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "authorization_code" => Some(Self::AuthorizationCode),
            "client_credentials" => Some(Self::ClientCredentials),
            "refresh_token" => Some(Self::RefreshToken),
            _ => None,
        }
    }
}

impl std::fmt::Display for GrantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Client
// =============================================================================

/// OAuth 2.0 client registration as seen by the grant engine.
///
/// The engine reads `id` for credential-binding checks; the grant-type
/// allow-list is consulted by the server facade before dispatch. Everything
/// else about a client (secrets, redirect URIs, scopes) belongs to the
/// out-of-scope authentication and authorization layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Unique client identifier used in OAuth flows.
    pub id: String,

    /// Grant types this client is allowed to use.
    /// Empty list means all grant types are allowed.
    #[serde(default)]
    pub grant_types: Vec<GrantType>,
}

impl Client {
    /// Creates a client allowed to use every grant type.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            grant_types: Vec::new(),
        }
    }

    /// Restricts the client to the given grant types.
    #[must_use]
    pub fn with_grant_types(mut self, grant_types: Vec<GrantType>) -> Self {
        self.grant_types = grant_types;
        self
    }

    /// Checks if the given grant type is allowed for this client.
    ///
    /// An empty allow-list means all grant types are allowed.
    #[must_use]
    pub fn is_grant_type_allowed(&self, grant_type: GrantType) -> bool {
        self.grant_types.is_empty() || self.grant_types.contains(&grant_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_type_as_str() {
        assert_eq!(GrantType::AuthorizationCode.as_str(), "authorization_code");
        assert_eq!(GrantType::ClientCredentials.as_str(), "client_credentials");
        assert_eq!(GrantType::RefreshToken.as_str(), "refresh_token");
    }

    #[test]
    fn test_grant_type_parse() {
        assert_eq!(
            GrantType::parse("authorization_code"),
            Some(GrantType::AuthorizationCode)
        );
        assert_eq!(
            GrantType::parse("refresh_token"),
            Some(GrantType::RefreshToken)
        );
        assert_eq!(GrantType::parse("password"), None);
        assert_eq!(GrantType::parse("implicit"), None);
        assert_eq!(GrantType::parse(""), None);
    }

    #[test]
    fn test_grant_type_allowed_empty_list() {
        let client = Client::new("acme");
        assert!(client.is_grant_type_allowed(GrantType::AuthorizationCode));
        assert!(client.is_grant_type_allowed(GrantType::ClientCredentials));
    }

    #[test]
    fn test_grant_type_allowed_restricted() {
        let client =
            Client::new("acme").with_grant_types(vec![GrantType::RefreshToken]);
        assert!(client.is_grant_type_allowed(GrantType::RefreshToken));
        assert!(!client.is_grant_type_allowed(GrantType::ClientCredentials));
    }

    #[test]
    fn test_serde_roundtrip() {
        let client = Client::new("acme").with_grant_types(vec![
            GrantType::AuthorizationCode,
            GrantType::RefreshToken,
        ]);

        let json = serde_json::to_string(&client).unwrap();
        assert!(json.contains(r#""grantTypes":["authorization_code","refresh_token"]"#));

        let parsed: Client = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, client);
    }
}
