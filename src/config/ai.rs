//! Analysis provider configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Analysis provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// API key for the hosted model provider.
    ///
    /// When absent, the service falls back to the built-in heuristic
    /// analysis generator (no network calls).
    pub groq_api_key: Option<Secret<String>>,

    /// Chat-completions endpoint base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Ordered model candidates (comma-separated); each is tried in turn
    /// until one succeeds.
    pub models: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum tokens to generate per analysis
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature; kept low for consistent JSON output
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a hosted provider key is configured
    pub fn has_api_key(&self) -> bool {
        self.groq_api_key.is_some()
    }

    /// Ordered model candidates as a vector, falling back to the defaults
    pub fn model_candidates(&self) -> Vec<String> {
        match &self.models {
            Some(list) => list
                .split(',')
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect(),
            None => default_models(),
        }
    }

    /// Validate provider configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("https://") {
            return Err(ValidationError::ProviderUrlMustBeHttps);
        }
        if self.model_candidates().is_empty() {
            return Err(ValidationError::NoModelCandidates);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            base_url: default_base_url(),
            models: None,
            timeout_secs: default_timeout(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_models() -> Vec<String> {
    vec![
        "llama-3.1-70b-versatile".to_string(),
        "llama-3.1-8b-instant".to_string(),
        "mixtral-8x7b-32768".to_string(),
    ]
}

fn default_timeout() -> u64 {
    60
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_temperature() -> f32 {
    0.1
}
