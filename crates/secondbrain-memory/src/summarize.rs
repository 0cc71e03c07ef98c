//! Note summarization via a generative text service.

use crate::error::MemoryError;
use crate::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Prefix of the summary stored when summarization fails.
pub const FAILURE_PREFIX: &str = "Summary failed: ";

/// Trait for summary providers.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce a short summary of `text`.
    async fn summarize(&self, text: &str) -> Result<String>;
}

/// Placeholder stored in place of a summary when the provider fails.
pub fn failure_placeholder(err: &MemoryError) -> String {
    match err {
        MemoryError::Summarizer(reason) => format!("{}{}", FAILURE_PREFIX, reason),
        other => format!("{}{}", FAILURE_PREFIX, other),
    }
}

const SYSTEM_PROMPT: &str =
    "Summarize the user's note in one or two short sentences. Reply with the summary only.";

/// Summarizer backed by an OpenAI-compatible chat-completions endpoint.
pub struct OpenAISummarizer {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    max_tokens: usize,
}

impl OpenAISummarizer {
    /// Create a new summarizer.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com".to_string(),
            max_tokens: 200,
        }
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the maximum tokens.
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    max_tokens: usize,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl Summarizer for OpenAISummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(MemoryError::Summarizer(
                "no API key configured (set OPENAI_API_KEY)".to_string(),
            ));
        }

        let request = ApiRequest {
            model: &self.model,
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ApiMessage {
                    role: "user",
                    content: text,
                },
            ],
            max_tokens: self.max_tokens,
        };

        debug!(model = %self.model, "Requesting summary");

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| MemoryError::Summarizer(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MemoryError::Summarizer(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| MemoryError::Summarizer(format!("failed to parse response: {}", e)))?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| MemoryError::Summarizer("empty response".to_string()))
    }
}
