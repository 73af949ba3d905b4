//! Grant-exchange error types.
//!
//! Every failure produced by the engine is a typed value carrying its kind
//! and a human-readable message. The engine performs no retries and no
//! partial recovery: any failure aborts the current grant operation.
//! Mapping kinds to HTTP responses is the caller's job; the helpers below
//! expose the RFC 6749 error code and status class for that purpose.

/// Errors that can occur while exchanging a grant for tokens.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A programmer or integration error, such as an invalid configuration
    /// value. Never caused by client input.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument.
        message: String,
    },

    /// A protocol parameter is missing or syntactically malformed.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Description of why the request is invalid.
        message: String,
    },

    /// The presented credential was semantically rejected: unknown, bound
    /// to another client, expired, or revoked. Messages are deliberately
    /// shared across causes that must stay indistinguishable.
    #[error("Invalid grant: {message}")]
    InvalidGrant {
        /// Description of why the grant is invalid.
        message: String,
    },

    /// The authenticated client is not allowed to use this grant type.
    #[error("Unauthorized client: {message}")]
    UnauthorizedClient {
        /// Description of why the client is not authorized.
        message: String,
    },

    /// The requested grant type is not supported by this server.
    #[error("Unsupported grant type: {grant_type}")]
    UnsupportedGrantType {
        /// The unsupported grant type.
        grant_type: String,
    },

    /// The storage backend failed. Absence of a record is never an error;
    /// this kind is reserved for true backend failures.
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the storage failure.
        message: String,
    },

    /// A storage contract violation or internally detected inconsistency,
    /// e.g. a revoked token that still reports a future expiry.
    #[error("Server error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl AuthError {
    /// Creates a new `InvalidArgument` error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a new `InvalidRequest` error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a new `InvalidGrant` error.
    #[must_use]
    pub fn invalid_grant(message: impl Into<String>) -> Self {
        Self::InvalidGrant {
            message: message.into(),
        }
    }

    /// Creates a new `UnauthorizedClient` error.
    #[must_use]
    pub fn unauthorized_client(message: impl Into<String>) -> Self {
        Self::UnauthorizedClient {
            message: message.into(),
        }
    }

    /// Creates a new `UnsupportedGrantType` error.
    #[must_use]
    pub fn unsupported_grant_type(grant_type: impl Into<String>) -> Self {
        Self::UnsupportedGrantType {
            grant_type: grant_type.into(),
        }
    }

    /// Creates a new `Storage` error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates a new `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns `true` if this is a client error (4xx category).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest { .. }
                | Self::InvalidGrant { .. }
                | Self::UnauthorizedClient { .. }
                | Self::UnsupportedGrantType { .. }
        )
    }

    /// Returns `true` if this is a server error (5xx category).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::Storage { .. } | Self::Internal { .. }
        )
    }

    /// Returns the HTTP status code class for this error.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidRequest { .. }
            | Self::InvalidGrant { .. }
            | Self::UnauthorizedClient { .. }
            | Self::UnsupportedGrantType { .. } => 400,
            Self::InvalidArgument { .. } | Self::Storage { .. } | Self::Internal { .. } => 500,
        }
    }

    /// Returns the RFC 6749 Section 5.2 error code for this error.
    #[must_use]
    pub fn oauth_error_code(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } => "invalid_request",
            Self::InvalidGrant { .. } => "invalid_grant",
            Self::UnauthorizedClient { .. } => "unauthorized_client",
            Self::UnsupportedGrantType { .. } => "unsupported_grant_type",
            Self::InvalidArgument { .. } | Self::Storage { .. } | Self::Internal { .. } => {
                "server_error"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::invalid_grant("authorization code is invalid");
        assert_eq!(
            err.to_string(),
            "Invalid grant: authorization code is invalid"
        );

        let err = AuthError::invalid_request("Missing parameter: `code`");
        assert_eq!(err.to_string(), "Invalid request: Missing parameter: `code`");

        let err = AuthError::unsupported_grant_type("password");
        assert_eq!(err.to_string(), "Unsupported grant type: password");

        let err = AuthError::internal("revoked refresh token should be expired");
        assert_eq!(
            err.to_string(),
            "Server error: revoked refresh token should be expired"
        );
    }

    #[test]
    fn test_error_predicates() {
        let err = AuthError::invalid_grant("test");
        assert!(err.is_client_error());
        assert!(!err.is_server_error());

        let err = AuthError::invalid_argument("test");
        assert!(!err.is_client_error());
        assert!(err.is_server_error());

        let err = AuthError::storage("database down");
        assert!(err.is_server_error());
    }

    #[test]
    fn test_http_status() {
        assert_eq!(AuthError::invalid_request("x").http_status(), 400);
        assert_eq!(AuthError::invalid_grant("x").http_status(), 400);
        assert_eq!(AuthError::unauthorized_client("x").http_status(), 400);
        assert_eq!(AuthError::unsupported_grant_type("x").http_status(), 400);
        assert_eq!(AuthError::invalid_argument("x").http_status(), 500);
        assert_eq!(AuthError::storage("x").http_status(), 500);
        assert_eq!(AuthError::internal("x").http_status(), 500);
    }

    #[test]
    fn test_oauth_error_code() {
        assert_eq!(
            AuthError::invalid_request("x").oauth_error_code(),
            "invalid_request"
        );
        assert_eq!(
            AuthError::invalid_grant("x").oauth_error_code(),
            "invalid_grant"
        );
        assert_eq!(
            AuthError::unauthorized_client("x").oauth_error_code(),
            "unauthorized_client"
        );
        assert_eq!(
            AuthError::unsupported_grant_type("x").oauth_error_code(),
            "unsupported_grant_type"
        );
        assert_eq!(AuthError::internal("x").oauth_error_code(), "server_error");
    }
}
