//! Authorization code grant (RFC 6749 Section 4.1.3).

use std::sync::Arc;

use crate::AuthResult;
use crate::error::AuthError;
use crate::storage::AuthorizationCodeStorage;
use crate::types::{AuthorizationCode, Client, TokenRequest};
use crate::validator::is_vschar;

/// Validates an authorization code against the authenticated client.
///
/// On success the redeemed code is handed back to the server facade, which
/// issues the token pair with the code's user and scope. The two rejection
/// causes that would let an attacker probe the code space, an unknown code
/// and a code bound to a different client, produce byte-identical errors.
pub struct AuthorizationCodeGrant {
    storage: Arc<dyn AuthorizationCodeStorage>,
}

impl AuthorizationCodeGrant {
    /// Creates a grant handler backed by the given code storage.
    pub fn new(storage: Arc<dyn AuthorizationCodeStorage>) -> Self {
        Self { storage }
    }

    /// Validates the `code` parameter and resolves the stored code.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for a missing or malformed parameter and
    /// `InvalidGrant` for an unknown, mismatched or expired code. The
    /// storage backend is only consulted after the parameter passes
    /// syntactic validation.
    pub async fn handle(
        &self,
        request: &TokenRequest,
        client: &Client,
    ) -> AuthResult<AuthorizationCode> {
        // 1. Syntactic validation before any storage access.
        // An empty value counts as missing, not malformed.
        let code = match request.code.as_deref() {
            Some(code) if !code.is_empty() => code,
            _ => return Err(AuthError::invalid_request("Missing parameter: `code`")),
        };

        if !is_vschar(code) {
            return Err(AuthError::invalid_request("Invalid parameter: `code`"));
        }

        // 2. Resolve the stored code
        let authorization_code = self
            .storage
            .get_authorization_code(code)
            .await?
            .ok_or_else(|| AuthError::invalid_grant("authorization code is invalid"))?;

        // 3. Credential binding: the code must belong to the caller.
        // Same message as the unknown-code case, so a stolen code reveals
        // nothing about its existence.
        if authorization_code.client.id != client.id {
            return Err(AuthError::invalid_grant("authorization code is invalid"));
        }

        // 4. Expiry
        if authorization_code.is_expired() {
            return Err(AuthError::invalid_grant("authorization code has expired"));
        }

        tracing::debug!(
            client_id = %client.id,
            user_id = %authorization_code.user.id,
            "authorization code accepted"
        );

        Ok(authorization_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::User;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::RwLock;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use time::{Duration, OffsetDateTime};

    struct MockCodeStorage {
        codes: RwLock<HashMap<String, AuthorizationCode>>,
        lookups: AtomicUsize,
    }

    impl MockCodeStorage {
        fn new() -> Self {
            Self {
                codes: RwLock::new(HashMap::new()),
                lookups: AtomicUsize::new(0),
            }
        }

        fn insert(&self, code: AuthorizationCode) {
            self.codes.write().unwrap().insert(code.code.clone(), code);
        }
    }

    #[async_trait]
    impl AuthorizationCodeStorage for MockCodeStorage {
        async fn get_authorization_code(
            &self,
            code: &str,
        ) -> AuthResult<Option<AuthorizationCode>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(self.codes.read().unwrap().get(code).cloned())
        }
    }

    fn valid_code() -> AuthorizationCode {
        AuthorizationCode {
            code: "abc123".to_string(),
            client: Client::new("1"),
            user: User::new("9"),
            expires_at: OffsetDateTime::now_utc() + Duration::seconds(60),
            scope: Some("read".to_string()),
        }
    }

    fn grant_with(storage: Arc<MockCodeStorage>) -> AuthorizationCodeGrant {
        AuthorizationCodeGrant::new(storage)
    }

    #[tokio::test]
    async fn test_valid_code_is_returned() {
        let storage = Arc::new(MockCodeStorage::new());
        storage.insert(valid_code());
        let grant = grant_with(storage);

        let code = grant
            .handle(&TokenRequest::authorization_code("abc123"), &Client::new("1"))
            .await
            .unwrap();

        assert_eq!(code.user.id, "9");
        assert_eq!(code.scope.as_deref(), Some("read"));
    }

    #[tokio::test]
    async fn test_missing_code_parameter() {
        let storage = Arc::new(MockCodeStorage::new());
        let grant = grant_with(storage.clone());

        let request = TokenRequest {
            grant_type: "authorization_code".to_string(),
            ..TokenRequest::default()
        };
        let err = grant.handle(&request, &Client::new("1")).await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid request: Missing parameter: `code`");
        // Validation failures never reach storage
        assert_eq!(storage.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_code_parameter_counts_as_missing() {
        let storage = Arc::new(MockCodeStorage::new());
        let grant = grant_with(storage.clone());

        let err = grant
            .handle(&TokenRequest::authorization_code(""), &Client::new("1"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid request: Missing parameter: `code`");
        assert_eq!(storage.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_code_parameter() {
        let storage = Arc::new(MockCodeStorage::new());
        let grant = grant_with(storage.clone());

        let err = grant
            .handle(
                &TokenRequest::authorization_code("bad\ncode"),
                &Client::new("1"),
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid request: Invalid parameter: `code`");
        assert_eq!(storage.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_and_mismatched_codes_are_indistinguishable() {
        let storage = Arc::new(MockCodeStorage::new());
        storage.insert(valid_code());
        let grant = grant_with(storage);

        let unknown = grant
            .handle(
                &TokenRequest::authorization_code("nope"),
                &Client::new("1"),
            )
            .await
            .unwrap_err();
        let mismatched = grant
            .handle(
                &TokenRequest::authorization_code("abc123"),
                &Client::new("2"),
            )
            .await
            .unwrap_err();

        assert_eq!(unknown.to_string(), mismatched.to_string());
        assert_eq!(
            unknown.to_string(),
            "Invalid grant: authorization code is invalid"
        );
    }

    #[tokio::test]
    async fn test_expired_code() {
        let storage = Arc::new(MockCodeStorage::new());
        let mut code = valid_code();
        code.expires_at = OffsetDateTime::now_utc() - Duration::seconds(1);
        storage.insert(code);
        let grant = grant_with(storage);

        let err = grant
            .handle(&TokenRequest::authorization_code("abc123"), &Client::new("1"))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid grant: authorization code has expired"
        );
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        struct FailingStorage;

        #[async_trait]
        impl AuthorizationCodeStorage for FailingStorage {
            async fn get_authorization_code(
                &self,
                _code: &str,
            ) -> AuthResult<Option<AuthorizationCode>> {
                Err(AuthError::storage("connection refused"))
            }
        }

        let grant = AuthorizationCodeGrant::new(Arc::new(FailingStorage));
        let err = grant
            .handle(&TokenRequest::authorization_code("abc123"), &Client::new("1"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Storage { .. }));
    }
}
