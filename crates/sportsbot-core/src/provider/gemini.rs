//! Google Gemini provider using the native `generateContent` endpoint.
//!
//! Gemini gets a single user turn: the query wrapped in the sports-analyst
//! preamble from [`gemini_prompt`].

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompt::gemini_prompt;
use super::retry::send_with_retry;
use super::{GenerationSettings, Provider};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-pro";

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    settings: GenerationSettings,
}

impl GeminiProvider {
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

        debug!(base_url = %base_url, model, "Initialized Gemini provider");

        Self {
            client,
            api_key: api_key.to_string(),
            base_url,
            model: model.to_string(),
            settings,
        }
    }

    fn endpoint(&self) -> String {
        // Accept both "gemini-pro" and "models/gemini-pro".
        let model = self.model.trim_start_matches("models/");
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

// ── Gemini API request/response types ───────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [TextPart<'a>; 1],
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, query: &str) -> Result<String> {
        let url = self.endpoint();
        let prompt = gemini_prompt(query);
        let request_body = GenerateRequest {
            contents: [Content {
                role: "user",
                parts: [TextPart { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                max_output_tokens: self.settings.max_tokens,
            },
        };

        debug!(model = %self.model, url = %url, "Sending generateContent request");

        let body = send_with_retry("Gemini", || {
            self.client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&request_body)
        })
        .await?;

        let response: GenerateResponse =
            serde_json::from_str(&body).context("Failed to parse Gemini API response")?;

        let Some(candidate) = response.candidates.into_iter().next() else {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "unknown".into());
            anyhow::bail!("Gemini API returned no candidates (block reason: {})", reason);
        };

        debug!(
            finish_reason = candidate.finish_reason.as_deref().unwrap_or("unknown"),
            "Received Gemini response"
        );

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            anyhow::bail!(
                "Gemini API returned an empty candidate (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            );
        }

        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn provider(base: &str, model: &str) -> GeminiProvider {
        GeminiProvider::new(
            "g-key",
            Some(base),
            model,
            GenerationSettings::default(),
            Client::new(),
        )
    }

    #[test]
    fn test_endpoint() {
        let p = GeminiProvider::new("k", None, DEFAULT_MODEL, GenerationSettings::default(), Client::new());
        assert_eq!(
            p.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );

        let p = provider("http://localhost:9000/", "models/gemini-1.5-flash");
        assert_eq!(p.endpoint(), "http://localhost:9000/models/gemini-1.5-flash:generateContent");
    }

    #[tokio::test]
    async fn test_generate_joins_parts() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/models/gemini-pro:generateContent")
                    .header("x-goog-api-key", "g-key")
                    .body_includes("Query: Explain the LBW rule")
                    .body_includes(r#""generationConfig":{"temperature":0.7,"maxOutputTokens":1024}"#);
                then.status(200).json_body(json!({
                    "candidates": [{
                        "content": {"role": "model", "parts": [
                            {"text": "LBW stands for leg before wicket. "},
                            {"text": "The umpire judges..."}
                        ]},
                        "finishReason": "STOP"
                    }]
                }));
            })
            .await;

        let p = provider(&server.base_url(), "gemini-pro");
        let out = p.generate("Explain the LBW rule").await.unwrap();
        assert_eq!(out, "LBW stands for leg before wicket. The umpire judges...");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_blocked_prompt_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/models/gemini-pro:generateContent");
                then.status(200)
                    .json_body(json!({"promptFeedback": {"blockReason": "SAFETY"}}));
            })
            .await;

        let p = provider(&server.base_url(), "gemini-pro");
        let err = p.generate("anything").await.unwrap_err();
        assert!(err.to_string().contains("block reason: SAFETY"));
    }

    #[tokio::test]
    async fn test_api_error_message_is_surfaced() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/models/gemini-pro:generateContent");
                then.status(400).json_body(json!([{
                    "error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}
                }]));
            })
            .await;

        let p = provider(&server.base_url(), "gemini-pro");
        let err = p.generate("anything").await.unwrap_err();
        assert!(err.to_string().contains("API key not valid."));
    }
}
