//! Session validator port for bearer-token verification.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates bearer tokens on incoming requests.
///
/// # Contract
///
/// Implementations must:
/// - Return the authenticated caller for a valid token
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::InvalidToken` for any other verification failure
/// - Return `AuthError::Misconfigured` when the verification secret is
///   unavailable, so the failure surfaces as the server's fault
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a bearer token and extract the caller identity.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
