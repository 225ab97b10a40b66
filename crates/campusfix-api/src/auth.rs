//! Bearer token verification.
//!
//! CampusFix consumes identity; it never issues it. The external
//! identity provider mints HMAC-signed JWTs whose claims carry the
//! caller's id, normalized role, and username. This module only
//! verifies and decodes.

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campusfix_core::config::auth::AuthConfig;
use campusfix_core::error::AppError;
use campusfix_entity::user::Role;
use campusfix_service::context::RequestContext;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's ID.
    pub sub: Uuid,
    /// Role string as issued by the identity provider.
    pub role: String,
    /// Username for display and logging.
    pub username: String,
    /// Expiry (seconds since epoch).
    pub exp: u64,
}

/// Decodes and validates access tokens.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier").finish_non_exhaustive()
    }
}

impl TokenVerifier {
    /// Creates a verifier from configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_seconds;
        Self {
            key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Verify a token and resolve it into a request context.
    ///
    /// The role claim is parsed with exact enum membership; decorated
    /// role strings are rejected here, at the boundary.
    pub fn verify(&self, token: &str) -> Result<RequestContext, AppError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation)
            .map_err(|e| AppError::authentication(format!("Invalid bearer token: {e}")))?;

        let role: Role = data.claims.role.parse()?;
        Ok(RequestContext::new(
            data.claims.sub,
            role,
            data.claims.username,
        ))
    }
}
