//! Token endpoint request parameters.

use serde::Deserialize;

/// Parameters of a token request, after client authentication.
///
/// Mirrors the body of an RFC 6749 token request. The transport layer is
/// out of scope; callers build this from whatever carried the parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenRequest {
    /// The requested grant type. Empty when the parameter was absent.
    #[serde(default)]
    pub grant_type: String,

    /// Authorization code, for the authorization-code grant.
    pub code: Option<String>,

    /// Refresh token, for the refresh-token grant.
    pub refresh_token: Option<String>,

    /// Requested scope, for grants that accept one.
    pub scope: Option<String>,
}

impl TokenRequest {
    /// Builds an authorization-code exchange request.
    #[must_use]
    pub fn authorization_code(code: impl Into<String>) -> Self {
        Self {
            grant_type: "authorization_code".to_string(),
            code: Some(code.into()),
            ..Self::default()
        }
    }

    /// Builds a refresh-token exchange request.
    #[must_use]
    pub fn refresh_token(refresh_token: impl Into<String>) -> Self {
        Self {
            grant_type: "refresh_token".to_string(),
            refresh_token: Some(refresh_token.into()),
            ..Self::default()
        }
    }

    /// Builds a client-credentials request.
    #[must_use]
    pub fn client_credentials() -> Self {
        Self {
            grant_type: "client_credentials".to_string(),
            ..Self::default()
        }
    }

    /// Attaches a requested scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }
}
