//! Analysis output types.
//!
//! An [`AnalysisRecord`] is constructed fresh per analysis call by the
//! normalizer; its `confidence` and `recommended_option` fields are
//! computed before the record is considered final, and nothing mutates it
//! afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{DecisionId, UserId};

use super::request::{DecisionRequest, PriorityWeight};

/// Per-option scoring detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionScore {
    /// The option this score belongs to; always one of the request's options.
    pub option: String,
    /// Aggregate score, intended range 0-100.
    pub overall_score: f64,
    /// Score per priority name; contains exactly the request's priorities.
    pub priority_scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub opportunities: Vec<String>,
}

/// A complete, schema-valid analysis of a decision request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// One entry per request option, in request order.
    pub scores: Vec<OptionScore>,
    pub summary: String,
    pub reasoning: String,
    /// Derived 0-95 certainty metric; never caller-supplied.
    pub confidence: f64,
    /// Always a member of the request's options.
    pub recommended_option: String,
    #[serde(default)]
    pub key_insights: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(default)]
    pub comparative_analysis: String,
}

impl AnalysisRecord {
    /// Looks up the score entry for an option.
    pub fn score_for(&self, option: &str) -> Option<&OptionScore> {
        self.scores.iter().find(|s| s.option == option)
    }

    /// Overall scores in record order, for confidence estimation.
    pub fn overall_scores(&self) -> Vec<f64> {
        self.scores.iter().map(|s| s.overall_score).collect()
    }
}

/// A decision analysis persisted under a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedDecision {
    pub id: DecisionId,
    pub user_id: UserId,
    pub title: String,
    pub context: String,
    pub options: Vec<String>,
    pub priorities: Vec<PriorityWeight>,
    pub analysis_result: AnalysisRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SavedDecision {
    /// Assembles a saved decision from its parts, stamping fresh id and timestamps.
    pub fn new(user_id: UserId, request: DecisionRequest, analysis_result: AnalysisRecord) -> Self {
        let now = Utc::now();
        Self {
            id: DecisionId::new(),
            user_id,
            title: request.title,
            context: request.context,
            options: request.options,
            priorities: request.priorities,
            analysis_result,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::request::PriorityWeight;

    fn sample_record() -> AnalysisRecord {
        AnalysisRecord {
            scores: vec![OptionScore {
                option: "Stay".to_string(),
                overall_score: 72.0,
                priority_scores: BTreeMap::from([("Growth".to_string(), 70.0)]),
                strengths: vec!["Stable".to_string()],
                weaknesses: vec!["Slower growth".to_string()],
                risks: vec!["Stagnation".to_string()],
                opportunities: vec!["Internal moves".to_string()],
            }],
            summary: "Summary".to_string(),
            reasoning: "Reasoning".to_string(),
            confidence: 60.0,
            recommended_option: "Stay".to_string(),
            key_insights: vec![],
            next_steps: vec![],
            comparative_analysis: String::new(),
        }
    }

    #[test]
    fn score_for_finds_option() {
        let record = sample_record();
        assert!(record.score_for("Stay").is_some());
        assert!(record.score_for("Leave").is_none());
    }

    #[test]
    fn overall_scores_preserve_order() {
        let record = sample_record();
        assert_eq!(record.overall_scores(), vec![72.0]);
    }

    #[test]
    fn saved_decision_takes_request_fields() {
        let request = DecisionRequest {
            title: "Job Offer".to_string(),
            context: "Deciding whether to accept.".to_string(),
            options: vec!["Stay".to_string(), "Leave".to_string()],
            priorities: vec![PriorityWeight::new("Growth", 8, "desc")],
        };
        let saved = SavedDecision::new(
            UserId::new("user-1").unwrap(),
            request,
            sample_record(),
        );
        assert_eq!(saved.title, "Job Offer");
        assert_eq!(saved.options.len(), 2);
        assert_eq!(saved.created_at, saved.updated_at);
    }

    #[test]
    fn record_deserializes_with_missing_optional_sequences() {
        let json = serde_json::json!({
            "scores": [],
            "summary": "s",
            "reasoning": "r",
            "confidence": 60.0,
            "recommended_option": "Stay"
        });
        let record: AnalysisRecord = serde_json::from_value(json).unwrap();
        assert!(record.key_insights.is_empty());
        assert!(record.comparative_analysis.is_empty());
    }
}
