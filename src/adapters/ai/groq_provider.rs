//! Groq provider - AnalysisProvider backed by Groq's OpenAI-compatible API.
//!
//! Sends the decision to a chat-completions endpoint with a JSON response
//! format, walking an ordered list of model candidates until one returns
//! usable content.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GroqConfig::new(api_key)
//!     .with_models(vec!["llama-3.1-70b-versatile".to_string()])
//!     .with_base_url("https://api.groq.com/openai/v1");
//!
//! let provider = GroqAnalysisProvider::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::domain::decision::DecisionRequest;
use crate::ports::{AnalysisProvider, ProviderError};

const SYSTEM_PROMPT: &str = r#"You are an expert decision analysis assistant. Analyze the following decision and return ONLY valid JSON.

CRITICAL: You MUST return valid JSON with this exact structure:
{
    "scores": [
        {
            "option": "Option Name",
            "overall_score": 85,
            "priority_scores": {
                "Priority1": 90,
                "Priority2": 75
            },
            "strengths": ["..."],
            "weaknesses": ["..."],
            "risks": ["..."],
            "opportunities": ["..."]
        }
    ],
    "summary": "Brief analysis summary",
    "reasoning": "Detailed reasoning behind scores",
    "recommended_option": "Option Name",
    "key_insights": ["..."],
    "next_steps": ["..."],
    "comparative_analysis": "How the options compare"
}

Do not include any other text, explanations, or markdown. Only the JSON object."#;

/// Configuration for the Groq provider.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Ordered model candidates, tried first to last.
    pub models: Vec<String>,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature; kept low for consistent JSON.
    pub temperature: f32,
}

impl GroqConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            models: vec![
                "llama-3.1-70b-versatile".to_string(),
                "llama-3.1-8b-instant".to_string(),
                "mixtral-8x7b-32768".to_string(),
            ],
            timeout: Duration::from_secs(60),
            max_tokens: 2000,
            temperature: 0.1,
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the ordered model candidate list.
    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the generation limit.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Groq API provider implementation.
pub struct GroqAnalysisProvider {
    config: GroqConfig,
    client: Client,
}

impl GroqAnalysisProvider {
    /// Creates a new Groq provider with the given configuration.
    pub fn new(config: GroqConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Renders the user prompt for a decision request.
    fn user_prompt(request: &DecisionRequest) -> String {
        let options = request
            .options
            .iter()
            .map(|opt| format!("- {opt}"))
            .collect::<Vec<_>>()
            .join("\n");
        let priorities = request
            .priorities
            .iter()
            .map(|p| format!("- {} (Weight: {}/10): {}", p.name, p.weight, p.description))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Please analyze this decision and return ONLY the JSON response:\n\n\
             TITLE: {}\nCONTEXT: {}\n\nOPTIONS:\n{}\n\nPRIORITIES:\n{}\n\n\
             Return valid JSON only:",
            request.title, request.context, options, priorities
        )
    }

    /// Calls one model candidate and parses its content into a raw payload.
    async fn call_model(
        &self,
        model: &str,
        request: &DecisionRequest,
    ) -> Result<Value, ProviderError> {
        let body = ChatCompletionRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: Self::user_prompt(request),
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            response_format: ResponseFormat { kind: "json_object" },
        };

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    ProviderError::network(format!("Connection failed: {e}"))
                } else {
                    ProviderError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message: message.chars().take(200).collect(),
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::parse(e.to_string()))?;

        let content = completion
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .unwrap_or_default();
        if content.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        let cleaned = strip_code_fences(content);
        serde_json::from_str(cleaned).map_err(|e| ProviderError::parse(e.to_string()))
    }
}

#[async_trait]
impl AnalysisProvider for GroqAnalysisProvider {
    async fn analyze(&self, request: &DecisionRequest) -> Result<Value, ProviderError> {
        let mut last_error: Option<ProviderError> = None;

        for (attempt, model) in self.config.models.iter().enumerate() {
            tracing::debug!(attempt = attempt + 1, %model, title = %request.title, "requesting analysis");
            match self.call_model(model, request).await {
                Ok(payload) => {
                    tracing::info!(%model, title = %request.title, "analysis succeeded");
                    return Ok(payload);
                }
                Err(err) => {
                    tracing::warn!(%model, error = %err, "model candidate failed");
                    last_error = Some(err);
                }
            }
        }

        Err(ProviderError::CandidatesExhausted {
            attempted: self.config.models.len(),
            last: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no model candidates configured".to_string()),
        })
    }

    fn name(&self) -> &'static str {
        "groq"
    }
}

/// Strips a surrounding markdown code fence from model content.
///
/// Models occasionally wrap the JSON in ```json ... ``` despite being told
/// not to.
fn strip_code_fences(content: &str) -> &str {
    let mut cleaned = content.trim();
    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }
    cleaned.trim()
}

// Wire types for the OpenAI-compatible chat completions API.

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: String,
}
