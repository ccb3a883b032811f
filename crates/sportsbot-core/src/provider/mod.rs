//! Response providers.
//!
//! Defines the `Provider` trait that every backend implements:
//!
//! - [`rule_based`]: offline keyword classifier + templates (always built)
//! - [`openai`]: OpenAI-compatible chat completions (feature `openai`)
//! - [`gemini`]: Google Gemini `generateContent` (feature `gemini`)

pub mod prompt;
pub mod rule_based;

#[cfg(feature = "gemini")]
pub mod gemini;
#[cfg(feature = "openai")]
pub mod openai;
#[cfg(any(feature = "openai", feature = "gemini"))]
mod retry;

use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

use crate::error::AgentError;

/// Trait for response providers.
///
/// A provider turns a trimmed, non-empty query into free text. Remote
/// providers report transport and API failures as errors instead of
/// returning them as text.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Short identifier used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Generate a response for `query`.
    async fn generate(&self, query: &str) -> anyhow::Result<String>;
}

/// Sampling parameters shared by remote providers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

/// The closed set of providers a `SportsAgent` can be built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Rule,
    OpenAi,
    Gemini,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [ProviderKind::Rule, ProviderKind::OpenAi, ProviderKind::Gemini];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Rule => "rule",
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
        }
    }

    /// Whether this provider was compiled into the current build.
    pub fn is_available(&self) -> bool {
        match self {
            ProviderKind::Rule => true,
            ProviderKind::OpenAi => cfg!(feature = "openai"),
            ProviderKind::Gemini => cfg!(feature = "gemini"),
        }
    }

    /// Environment variable holding this provider's API key, if it needs one.
    pub fn api_key_env(&self) -> Option<&'static str> {
        match self {
            ProviderKind::Rule => None,
            ProviderKind::OpenAi => Some("OPENAI_API_KEY"),
            ProviderKind::Gemini => Some("GOOGLE_API_KEY"),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rule" => Ok(ProviderKind::Rule),
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" => Ok(ProviderKind::Gemini),
            other => Err(AgentError::config(format!(
                "Unknown provider '{}'. Expected one of: rule, openai, gemini",
                other
            ))),
        }
    }
}
