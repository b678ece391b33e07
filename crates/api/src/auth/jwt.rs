//! Bearer token verification.
//!
//! With no `JWT_SECRET` configured every non-empty token is accepted and the
//! caller is treated as the shared frontend user. With a secret configured,
//! tokens must be HS256-signed JWTs whose `exp` claim lies in the future.

use catalog_core::error::CoreError;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Subject reported for tokens accepted without verification.
pub const DEFAULT_SUBJECT: &str = "default";

/// JWT claims read from a verified token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- an opaque caller identifier.
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Configuration for bearer token verification.
#[derive(Debug, Clone, Default)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret. `None` disables signature checks.
    pub secret: Option<String>,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var      | Required | Default                    |
    /// |--------------|----------|----------------------------|
    /// | `JWT_SECRET` | no       | unset (accept any token)   |
    ///
    /// An empty `JWT_SECRET` is treated as unset.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty());
        Self { secret }
    }

    /// Whether tokens are cryptographically verified.
    pub fn verifies_tokens(&self) -> bool {
        self.secret.is_some()
    }
}

/// Validate and decode an access token, returning the embedded [`Claims`].
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// Resolve a bearer token to the caller's subject.
pub fn authenticate(token: &str, config: &JwtConfig) -> Result<String, CoreError> {
    match &config.secret {
        None => Ok(DEFAULT_SUBJECT.to_string()),
        Some(secret) => validate_token(token, secret)
            .map(|claims| claims.sub)
            .map_err(|e| {
                tracing::debug!(error = %e, "Bearer token rejected");
                CoreError::Unauthorized("Invalid authentication credentials".into())
            }),
    }
}
