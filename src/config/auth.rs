//! Bearer-token verification settings.

use secrecy::Secret;
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Settings for HS256 token verification.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Shared secret tokens are signed with.
    ///
    /// Left optional so a development box can serve the public endpoints
    /// without any auth set up; authenticated requests then fail as a
    /// server misconfiguration rather than blaming the caller.
    pub jwt_secret: Option<Secret<String>>,

    /// Clock-skew tolerance for expiry checks, in seconds.
    pub leeway_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            leeway_secs: 30,
        }
    }
}

impl AuthConfig {
    /// A production deployment without a verification secret would turn
    /// every authenticated route into a 500; refuse to start instead.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        match (environment, &self.jwt_secret) {
            (Environment::Production, None) => Err(ValidationError::JwtSecretRequired),
            _ => Ok(()),
        }
    }
}
