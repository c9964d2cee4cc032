//! Analysis provider port - interface for decision analysis backends.
//!
//! Implementations obtain a raw analysis payload for a decision request,
//! whether from a hosted language model or a local generator. The payload
//! is deliberately weakly typed (`serde_json::Value`): providers are not
//! trusted to produce well-formed output, and only the normalizer
//! consumes the raw shape.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::decision::DecisionRequest;

/// Port for decision analysis backends.
///
/// Implementations connect to an external model service (or generate a
/// synthetic analysis locally) and return its payload without repair;
/// shape defects are the normalizer's concern, transport failures are
/// reported as [`ProviderError`].
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Produce a raw analysis payload for the request.
    async fn analyze(&self, request: &DecisionRequest) -> Result<Value, ProviderError>;

    /// Short provider name for health reporting and logs.
    fn name(&self) -> &'static str;
}

/// Analysis provider errors.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Provider returned a non-success HTTP status.
    #[error("provider returned status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body excerpt.
        message: String,
    },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Provider responded with no content.
    #[error("empty response from provider")]
    EmptyResponse,

    /// Provider content could not be parsed as JSON.
    #[error("unparsable provider content: {0}")]
    Parse(String),

    /// Every configured model candidate failed.
    #[error("all {attempted} model candidates failed; last error: {last}")]
    CandidatesExhausted {
        /// How many candidates were tried.
        attempted: usize,
        /// Description of the final failure.
        last: String,
    },
}

impl ProviderError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if another provider might succeed where this one failed.
    ///
    /// Transport-level and upstream-availability failures are worth
    /// retrying elsewhere; so is unusable content, since a different
    /// backend may produce parseable output for the same request.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ProviderError::Status { .. }
                | ProviderError::Network(_)
                | ProviderError::Timeout { .. }
                | ProviderError::EmptyResponse
                | ProviderError::Parse(_)
                | ProviderError::CandidatesExhausted { .. }
        )
    }
}
