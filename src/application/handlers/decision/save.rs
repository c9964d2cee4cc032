//! Save decision handler.

use std::sync::Arc;

use crate::domain::decision::{AnalysisRecord, DecisionRequest, SavedDecision};
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::{DecisionRepository, RepositoryError};

/// Persists an analyzed decision under its owner.
pub struct SaveDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl SaveDecisionHandler {
    /// Creates the handler.
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    /// Stamps and stores a decision, returning its new id.
    pub async fn handle(
        &self,
        user_id: UserId,
        request: DecisionRequest,
        analysis: AnalysisRecord,
    ) -> Result<DecisionId, RepositoryError> {
        let decision = SavedDecision::new(user_id.clone(), request, analysis);
        tracing::info!(user = %user_id, title = %decision.title, "saving decision");
        self.repository.save(&decision).await
    }
}
