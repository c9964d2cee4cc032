//! Get decision handler.

use std::sync::Arc;

use crate::domain::decision::SavedDecision;
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::{DecisionRepository, RepositoryError};

/// Fetches a single saved decision, scoped to its owner.
pub struct GetDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl GetDecisionHandler {
    /// Creates the handler.
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        id: &DecisionId,
        user_id: &UserId,
    ) -> Result<Option<SavedDecision>, RepositoryError> {
        self.repository.find_by_id(id, user_id).await
    }
}
