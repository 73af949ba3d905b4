//! Token value generation.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::AuthResult;

/// Produces opaque token values.
///
/// Integrations replace this to issue structured tokens (JWTs, prefixed
/// values) without touching the grant logic. Generation is async so an
/// implementation may consult an external signer.
#[async_trait]
pub trait TokenGenerator: Send + Sync {
    /// Generates an access token value.
    async fn generate_access_token(&self) -> AuthResult<String>;

    /// Generates a refresh token value.
    async fn generate_refresh_token(&self) -> AuthResult<String>;
}

/// Default generator: 256 bits of randomness, base64url without padding.
///
/// Produces 43-character values drawn from `A-Z a-z 0-9 - _`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokenGenerator;

impl RandomTokenGenerator {
    fn generate(&self) -> String {
        let mut bytes = [0u8; 32];
        rand::Rng::fill(&mut rand::thread_rng(), &mut bytes[..]);
        URL_SAFE_NO_PAD.encode(bytes)
    }
}

#[async_trait]
impl TokenGenerator for RandomTokenGenerator {
    async fn generate_access_token(&self) -> AuthResult<String> {
        Ok(self.generate())
    }

    async fn generate_refresh_token(&self) -> AuthResult<String> {
        Ok(self.generate())
    }
}
