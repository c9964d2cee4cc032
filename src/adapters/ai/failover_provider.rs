//! Failover provider - wrapper with automatic fallback between analysis
//! backends.
//!
//! When the primary provider fails with a retryable error, the fallback
//! provider is consulted instead of surfacing the failure. Pairing the
//! hosted provider with the heuristic generator makes the analysis call
//! effectively infallible.
//!
//! # Example
//!
//! ```ignore
//! let primary = GroqAnalysisProvider::new(groq_config);
//! let provider = FailoverAnalysisProvider::new(primary, HeuristicAnalysisProvider::new());
//! ```

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::decision::DecisionRequest;
use crate::ports::{AnalysisProvider, ProviderError};

/// Analysis provider wrapper with automatic fallback.
pub struct FailoverAnalysisProvider<P: AnalysisProvider, F: AnalysisProvider> {
    primary: P,
    fallback: F,
}

impl<P: AnalysisProvider, F: AnalysisProvider> FailoverAnalysisProvider<P, F> {
    /// Creates a failover provider from a primary and a fallback.
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P: AnalysisProvider, F: AnalysisProvider> AnalysisProvider
    for FailoverAnalysisProvider<P, F>
{
    async fn analyze(&self, request: &DecisionRequest) -> Result<Value, ProviderError> {
        match self.primary.analyze(request).await {
            Ok(payload) => Ok(payload),
            Err(err) if err.is_retryable() => {
                tracing::warn!(
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    error = %err,
                    "primary analysis provider failed; using fallback"
                );
                self.fallback.analyze(request).await
            }
            Err(err) => Err(err),
        }
    }

    fn name(&self) -> &'static str {
        self.primary.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::PriorityWeight;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct StubProvider {
        result: Result<Value, ProviderError>,
        calls: AtomicU32,
    }

    impl StubProvider {
        fn ok(payload: Value) -> Self {
            Self {
                result: Ok(payload),
                calls: AtomicU32::new(0),
            }
        }

        fn failing(error: ProviderError) -> Self {
            Self {
                result: Err(error),
                calls: AtomicU32::new(0),
            }
        }

        fn call_count(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AnalysisProvider for StubProvider {
        async fn analyze(&self, _request: &DecisionRequest) -> Result<Value, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.result {
                Ok(payload) => Ok(payload.clone()),
                Err(ProviderError::EmptyResponse) => Err(ProviderError::EmptyResponse),
                Err(e) => Err(ProviderError::network(e.to_string())),
            }
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    fn request() -> DecisionRequest {
        DecisionRequest {
            title: "Job Offer".to_string(),
            context: "Deciding whether to accept.".to_string(),
            options: vec!["Stay".to_string(), "Leave".to_string()],
            priorities: vec![PriorityWeight::new("Growth", 8, "desc")],
        }
    }

    #[tokio::test]
    async fn primary_success_skips_fallback() {
        let primary = StubProvider::ok(json!({"summary": "primary"}));
        let fallback = StubProvider::ok(json!({"summary": "fallback"}));
        let provider = FailoverAnalysisProvider::new(primary, fallback);

        let payload = provider.analyze(&request()).await.unwrap();
        assert_eq!(payload["summary"], "primary");
        assert_eq!(provider.fallback.call_count(), 0);
    }

    #[tokio::test]
    async fn retryable_failure_uses_fallback() {
        let primary = StubProvider::failing(ProviderError::EmptyResponse);
        let fallback = StubProvider::ok(json!({"summary": "fallback"}));
        let provider = FailoverAnalysisProvider::new(primary, fallback);

        let payload = provider.analyze(&request()).await.unwrap();
        assert_eq!(payload["summary"], "fallback");
        assert_eq!(provider.primary.call_count(), 1);
        assert_eq!(provider.fallback.call_count(), 1);
    }

    #[tokio::test]
    async fn reports_primary_name() {
        let provider = FailoverAnalysisProvider::new(
            StubProvider::ok(json!({})),
            StubProvider::ok(json!({})),
        );
        assert_eq!(provider.name(), "stub");
    }
}
