//! OpenAI-compatible chat-completions provider.
//!
//! Sends the fixed sports-analyst system prompt followed by the user's query
//! to `{base}/chat/completions`. Any server exposing that endpoint works
//! (OpenAI, OpenRouter, Groq, a local vLLM, ...) by overriding the base URL.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompt::SYSTEM_PROMPT;
use super::retry::send_with_retry;
use super::{GenerationSettings, Provider};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    settings: GenerationSettings,
}

impl OpenAiProvider {
    /// Create a new provider.
    ///
    /// # Arguments
    /// * `api_key` - API key for authentication
    /// * `api_base` - Custom base URL (None = `https://api.openai.com/v1`)
    /// * `model` - Model to use for every request
    pub fn new(
        api_key: &str,
        api_base: Option<&str>,
        model: &str,
        settings: GenerationSettings,
        client: Client,
    ) -> Self {
        let base_url = api_base
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        debug!(base_url = %base_url, model, "Initialized OpenAI provider");

        Self {
            client,
            api_key: api_key.to_string(),
            base_url,
            model: model.to_string(),
            settings,
        }
    }
}

// ── OpenAI API request/response types ───────────────────────────────

#[derive(Debug, Clone, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<UsageResponse>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageResponse,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct MessageResponse {
    content: Option<String>,
}

#[derive(Deserialize)]
struct UsageResponse {
    total_tokens: Option<u32>,
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn generate(&self, query: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = CompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: query,
                },
            ],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        debug!(model = %self.model, url = %url, "Sending chat completion request");

        let body = send_with_retry("OpenAI", || {
            self.client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
        })
        .await?;

        let completion: CompletionResponse =
            serde_json::from_str(&body).context("Failed to parse OpenAI API response")?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .context("OpenAI API returned no choices")?;

        debug!(
            finish_reason = choice.finish_reason.as_deref().unwrap_or("unknown"),
            tokens = completion.usage.and_then(|u| u.total_tokens).unwrap_or(0),
            "Received OpenAI response"
        );

        let content = choice
            .message
            .content
            .context("OpenAI API returned an empty message")?;

        Ok(content.trim().to_string())
    }
}
