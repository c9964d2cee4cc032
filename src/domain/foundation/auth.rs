//! Caller identity and authentication outcomes.
//!
//! A verified bearer token reduces to an [`AuthenticatedUser`]; how the
//! token was verified is an adapter concern behind the `SessionValidator`
//! port. [`AuthError`] keeps the three outcomes the HTTP boundary must
//! distinguish: missing credentials, a defective token, and a server that
//! cannot verify anything at all.

use thiserror::Error;

use super::UserId;

/// Caller extracted from a validated token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The `sub` claim of the verified token.
    pub id: UserId,
}

impl AuthenticatedUser {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

/// Token validation outcomes that are not a success.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No credentials presented, or the header was not a bearer token.
    #[error("Authentication required")]
    MissingCredentials,

    /// Malformed token, bad signature, or no usable subject.
    #[error("Invalid token")]
    InvalidToken,

    /// The token was once valid but has expired.
    #[error("Token expired")]
    TokenExpired,

    /// No verification secret is configured; no token can be checked.
    #[error("Server misconfiguration: auth secret missing")]
    Misconfigured,
}

impl AuthError {
    /// Whether presenting fresh credentials could resolve this failure.
    pub fn requires_reauthentication(&self) -> bool {
        !self.is_server_fault()
    }

    /// Whether the failure lies with the server rather than the caller.
    pub fn is_server_fault(&self) -> bool {
        matches!(self, AuthError::Misconfigured)
    }
}
