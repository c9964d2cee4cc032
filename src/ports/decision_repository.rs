//! Decision repository port for persisted analyses.
//!
//! Every operation is scoped to a caller identity: a decision is only
//! visible to, and deletable by, the user it was saved under.

use async_trait::async_trait;

use crate::domain::foundation::{DecisionId, UserId};
use crate::domain::decision::SavedDecision;

/// Port for persisting and retrieving decision analyses.
#[async_trait]
pub trait DecisionRepository: Send + Sync {
    /// Persist a decision, returning its id.
    async fn save(&self, decision: &SavedDecision) -> Result<DecisionId, RepositoryError>;

    /// All decisions for a user, newest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<SavedDecision>, RepositoryError>;

    /// A single decision, if it exists and belongs to the user.
    async fn find_by_id(
        &self,
        id: &DecisionId,
        user_id: &UserId,
    ) -> Result<Option<SavedDecision>, RepositoryError>;

    /// Delete a decision; returns false when nothing matched.
    async fn delete(&self, id: &DecisionId, user_id: &UserId) -> Result<bool, RepositoryError>;
}

/// Persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The backing store rejected or failed the operation.
    #[error("database error: {0}")]
    Database(String),

    /// A stored row could not be mapped back into a domain type.
    #[error("corrupt stored record: {0}")]
    CorruptRecord(String),
}

impl RepositoryError {
    /// Creates a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    /// Creates a corrupt record error.
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::CorruptRecord(message.into())
    }
}
