//! List decisions handler.

use std::sync::Arc;

use crate::domain::decision::SavedDecision;
use crate::domain::foundation::UserId;
use crate::ports::{DecisionRepository, RepositoryError};

/// Lists a user's saved decisions, newest first.
pub struct ListDecisionsHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl ListDecisionsHandler {
    /// Creates the handler.
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<Vec<SavedDecision>, RepositoryError> {
        self.repository.list_for_user(user_id).await
    }
}
