//! In-memory implementation of DecisionRepository.
//!
//! Used by tests and keyless demo deployments; rows live in a mutex-held
//! vector and disappear with the process.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::decision::SavedDecision;
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::{DecisionRepository, RepositoryError};

/// In-memory decision repository.
#[derive(Debug, Default)]
pub struct InMemoryDecisionRepository {
    decisions: Mutex<Vec<SavedDecision>>,
}

impl InMemoryDecisionRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored decisions across all users.
    pub fn len(&self) -> usize {
        self.decisions.lock().unwrap().len()
    }

    /// Whether the repository holds no decisions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DecisionRepository for InMemoryDecisionRepository {
    async fn save(&self, decision: &SavedDecision) -> Result<DecisionId, RepositoryError> {
        self.decisions.lock().unwrap().push(decision.clone());
        Ok(decision.id)
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<SavedDecision>, RepositoryError> {
        let mut owned: Vec<SavedDecision> = self
            .decisions
            .lock()
            .unwrap()
            .iter()
            .filter(|d| &d.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn find_by_id(
        &self,
        id: &DecisionId,
        user_id: &UserId,
    ) -> Result<Option<SavedDecision>, RepositoryError> {
        Ok(self
            .decisions
            .lock()
            .unwrap()
            .iter()
            .find(|d| &d.id == id && &d.user_id == user_id)
            .cloned())
    }

    async fn delete(&self, id: &DecisionId, user_id: &UserId) -> Result<bool, RepositoryError> {
        let mut decisions = self.decisions.lock().unwrap();
        let before = decisions.len();
        decisions.retain(|d| !(&d.id == id && &d.user_id == user_id));
        Ok(decisions.len() < before)
    }
}
