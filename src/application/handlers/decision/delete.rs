//! Delete decision handler.

use std::sync::Arc;

use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::{DecisionRepository, RepositoryError};

/// Deletes a saved decision, scoped to its owner.
pub struct DeleteDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl DeleteDecisionHandler {
    /// Creates the handler.
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    /// Returns false when no owned decision matched.
    pub async fn handle(
        &self,
        id: &DecisionId,
        user_id: &UserId,
    ) -> Result<bool, RepositoryError> {
        let deleted = self.repository.delete(id, user_id).await?;
        if deleted {
            tracing::info!(decision = %id, user = %user_id, "decision deleted");
        }
        Ok(deleted)
    }
}
