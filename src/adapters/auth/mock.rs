//! Test double for the `SessionValidator` port.
//!
//! Maps literal token strings to users so tests can authenticate without
//! signing anything; a forced error overrides the map to exercise each
//! failure outcome.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Session validator backed by a fixed token map.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: HashMap<String, AuthenticatedUser>,
    forced_error: Option<AuthError>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `token` as authenticating `user`.
    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    /// Shorthand for `with_user` when the test only needs an identity.
    pub fn with_test_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        self.with_user(
            token,
            AuthenticatedUser::new(UserId::new(user_id).expect("test user id must be non-empty")),
        )
    }

    /// Makes every validation fail with `error`, regardless of token.
    pub fn with_error(mut self, error: AuthError) -> Self {
        self.forced_error = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = &self.forced_error {
            return Err(error.clone());
        }
        self.tokens
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
