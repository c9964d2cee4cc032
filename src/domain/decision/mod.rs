//! Decision analysis domain.
//!
//! The pipeline for a single record is fixed: normalize the raw provider
//! payload first, then score the normalized result, then treat the record
//! as final. [`finalize_analysis`] is the one place that sequence is
//! encoded.

mod analysis;
mod confidence;
mod normalizer;
mod request;

pub use analysis::{AnalysisRecord, OptionScore, SavedDecision};
pub use confidence::{ConfidenceModel, QualitySignals};
pub use normalizer::{normalize, DEFAULT_SCORE, SUMMARY_MIN_WORDS};
pub use request::{
    DecisionRequest, DecisionRequestError, PriorityWeight, CONTEXT_MAX_CHARS, CONTEXT_MIN_CHARS,
    OPTIONS_MAX, OPTIONS_MIN, TITLE_MAX_CHARS, WEIGHT_MAX, WEIGHT_MIN,
};

use serde_json::Value;

/// Runs the full repair-then-score pipeline for one raw payload.
pub fn finalize_analysis(
    raw: &Value,
    request: &DecisionRequest,
    model: &ConfidenceModel,
) -> AnalysisRecord {
    let mut record = normalize(raw, request);
    let overall_scores = record.overall_scores();
    let signals = QualitySignals {
        reasoning: &record.reasoning,
        insight_count: record.key_insights.len(),
        comparative: &record.comparative_analysis,
    };
    record.confidence = model.estimate(&overall_scores, &signals);
    record
}

/// Whitespace-delimited word count, shared by the summary sufficiency
/// check and the confidence bonuses.
pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
