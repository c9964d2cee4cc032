//! HS256 JWT adapter for bearer-token validation.
//!
//! This adapter implements the `SessionValidator` port by verifying token
//! signatures against a shared secret and extracting the `sub` claim as
//! the caller identity. Audience validation is disabled: the upstream
//! identity provider stamps an audience this service does not control.
//!
//! The secret is optional at construction so the service can boot without
//! auth configured; validating any token then reports a server
//! misconfiguration rather than blaming the caller.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Claims extracted from a verified token.
#[derive(Debug, Deserialize)]
struct Claims {
    /// Subject - the user ID.
    #[serde(default)]
    sub: Option<String>,
}

/// HS256 session validator.
pub struct JwtSessionValidator {
    secret: Option<Secret<String>>,
    leeway_secs: u64,
}

impl JwtSessionValidator {
    /// Creates a validator; pass `None` when no secret is configured.
    pub fn new(secret: Option<Secret<String>>) -> Self {
        Self {
            secret,
            leeway_secs: 30,
        }
    }

    /// Sets the clock skew tolerance for expiry checks.
    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }
}

#[async_trait::async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let secret = self.secret.as_ref().ok_or_else(|| {
            tracing::error!("token presented but no verification secret is configured");
            AuthError::Misconfigured
        })?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway_secs;
        validation.validate_aud = false;

        let key = DecodingKey::from_secret(secret.expose_secret().as_bytes());

        let data = decode::<Claims>(token, &key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => {
                    tracing::debug!(error = %e, "token verification failed");
                    AuthError::InvalidToken
                }
            }
        })?;

        let sub = data.claims.sub.filter(|s| !s.is_empty());
        let user_id = sub
            .and_then(|s| UserId::new(s).ok())
            .ok_or(AuthError::InvalidToken)?;

        Ok(AuthenticatedUser::new(user_id))
    }
}
