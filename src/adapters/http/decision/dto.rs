//! HTTP DTOs for decision endpoints.
//!
//! The analyze request/response bodies reuse the domain types directly
//! (they are already serialization-ready); the DTOs here cover the save
//! envelope and the small status responses.

use serde::{Deserialize, Serialize};

use crate::domain::decision::{AnalysisRecord, DecisionRequest};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to save an analyzed decision.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveDecisionRequest {
    pub decision_input: DecisionRequest,
    pub analysis_result: AnalysisRecord,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub ai_service: String,
}

/// Response after persisting a decision.
#[derive(Debug, Clone, Serialize)]
pub struct SaveDecisionResponse {
    pub decision_id: String,
    pub status: String,
}

/// Response after deleting a decision.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteDecisionResponse {
    pub status: String,
    pub decision_id: String,
}

/// Error body for all decision endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    /// 400-class error body.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    /// 404-class error body.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    /// 500-class error body.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}
