//! Analyze decision handler.
//!
//! The one place the analysis sequence is wired: obtain the raw payload
//! from the provider, normalize it against the request, then derive
//! confidence. The record is final once this handler returns it.

use std::sync::Arc;

use crate::domain::decision::{finalize_analysis, AnalysisRecord, ConfidenceModel, DecisionRequest};
use crate::ports::{AnalysisProvider, ProviderError};

/// Handles analysis of a decision request.
pub struct AnalyzeDecisionHandler {
    provider: Arc<dyn AnalysisProvider>,
    confidence: ConfidenceModel,
}

impl AnalyzeDecisionHandler {
    /// Creates a handler with the canonical confidence model.
    pub fn new(provider: Arc<dyn AnalysisProvider>) -> Self {
        Self {
            provider,
            confidence: ConfidenceModel::default(),
        }
    }

    /// Overrides the confidence model.
    pub fn with_confidence_model(mut self, confidence: ConfidenceModel) -> Self {
        self.confidence = confidence;
        self
    }

    /// Runs the provider call and the repair-then-score pipeline.
    ///
    /// The request is assumed validated; provider payload defects are
    /// repaired, so the only failure mode left is the provider call
    /// itself.
    pub async fn handle(&self, request: &DecisionRequest) -> Result<AnalysisRecord, ProviderError> {
        tracing::info!(title = %request.title, provider = self.provider.name(), "analyzing decision");
        let raw = self.provider.analyze(request).await?;
        let record = finalize_analysis(&raw, request, &self.confidence);
        tracing::info!(
            title = %request.title,
            confidence = record.confidence,
            recommended = %record.recommended_option,
            "analysis completed"
        );
        Ok(record)
    }

    /// Name of the active provider, for health reporting.
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}
