//! Sports agent facade.
//!
//! `SportsAgent` picks a provider once, at construction, and forwards every
//! query to it. Selection order is: explicit option, `SPORTS_AGENT_PROVIDER`,
//! the config file, then the rule-based provider. Remote providers must have
//! a credential at construction time; a missing key never surfaces later as a
//! per-query failure.

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AgentError;
use crate::provider::rule_based::RuleBasedProvider;
use crate::provider::{GenerationSettings, Provider, ProviderKind};
use crate::query::Query;

/// Environment variable naming the default provider.
pub const PROVIDER_ENV: &str = "SPORTS_AGENT_PROVIDER";

/// Environment variable overriding the OpenAI model.
pub const OPENAI_MODEL_ENV: &str = "OPENAI_MODEL";

/// Caller-supplied overrides; each `None` falls back to env, then config.
#[derive(Debug, Clone, Default)]
pub struct AgentOptions {
    pub provider: Option<ProviderKind>,
    pub model: Option<String>,
    pub api_key: Option<String>,
}

/// Fully resolved settings for a remote provider.
#[derive(Debug, Clone, PartialEq)]
struct RemoteSettings {
    api_key: String,
    api_base: Option<String>,
    model: String,
}

pub struct SportsAgent {
    kind: ProviderKind,
    model: Option<String>,
    provider: Box<dyn Provider>,
}

impl SportsAgent {
    /// Build an agent using the process environment for fallbacks.
    pub fn new(options: AgentOptions, config: &Config) -> Result<Self, AgentError> {
        Self::with_env(options, config, |key| std::env::var(key).ok())
    }

    /// Build an agent with an explicit environment lookup.
    pub fn with_env<E>(options: AgentOptions, config: &Config, env: E) -> Result<Self, AgentError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let kind = select_provider(&options, config, &env)?;

        let (provider, model): (Box<dyn Provider>, Option<String>) = match kind {
            ProviderKind::Rule => (Box::new(RuleBasedProvider::new()) as Box<dyn Provider>, None),
            #[cfg(feature = "openai")]
            ProviderKind::OpenAi => {
                use crate::provider::openai::{OpenAiProvider, DEFAULT_MODEL};
                let remote = resolve_remote(kind, DEFAULT_MODEL, &options, config, &env)?;
                let p = OpenAiProvider::new(
                    &remote.api_key,
                    remote.api_base.as_deref(),
                    &remote.model,
                    generation_settings(config),
                    http_client()?,
                );
                (Box::new(p) as Box<dyn Provider>, Some(remote.model))
            }
            #[cfg(feature = "gemini")]
            ProviderKind::Gemini => {
                use crate::provider::gemini::{GeminiProvider, DEFAULT_MODEL};
                let remote = resolve_remote(kind, DEFAULT_MODEL, &options, config, &env)?;
                let p = GeminiProvider::new(
                    &remote.api_key,
                    remote.api_base.as_deref(),
                    &remote.model,
                    generation_settings(config),
                    http_client()?,
                );
                (Box::new(p) as Box<dyn Provider>, Some(remote.model))
            }
            #[allow(unreachable_patterns)]
            _ => {
                return Err(AgentError::config(format!(
                    "Provider '{}' is not available in this build. Rebuild with `--features {}`.",
                    kind, kind
                )))
            }
        };

        info!(
            provider = kind.as_str(),
            model = model.as_deref().unwrap_or("-"),
            "Sports agent ready"
        );

        Ok(Self {
            kind,
            model,
            provider,
        })
    }

    pub fn provider_kind(&self) -> ProviderKind {
        self.kind
    }

    /// Model used by a remote provider; `None` for the rule-based one.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Answer a query. Surrounding whitespace is trimmed; an empty query is
    /// rejected before the provider is called.
    pub async fn respond(&self, query: &str) -> Result<String, AgentError> {
        let query = Query::parse(query)?;
        debug!(provider = self.provider.name(), len = query.as_str().len(), "Processing query");

        match self.provider.generate(query.as_str()).await {
            Ok(text) => Ok(text),
            Err(source) => {
                warn!(provider = self.provider.name(), error = %source, "Provider call failed");
                Err(AgentError::Provider {
                    provider: self.provider.name(),
                    source,
                })
            }
        }
    }
}

fn select_provider<E>(options: &AgentOptions, config: &Config, env: &E) -> Result<ProviderKind, AgentError>
where
    E: Fn(&str) -> Option<String>,
{
    if let Some(kind) = options.provider {
        return Ok(kind);
    }
    let named = non_empty(env(PROVIDER_ENV)).or_else(|| non_empty(config.agent.provider.clone()));
    match named {
        Some(name) => name.parse(),
        None => Ok(ProviderKind::Rule),
    }
}

#[cfg_attr(not(any(feature = "openai", feature = "gemini")), allow(dead_code))]
fn generation_settings(config: &Config) -> GenerationSettings {
    GenerationSettings {
        temperature: config.agent.temperature,
        max_tokens: config.agent.max_tokens,
    }
}

#[cfg_attr(not(any(feature = "openai", feature = "gemini")), allow(dead_code))]
fn resolve_remote<E>(
    kind: ProviderKind,
    default_model: &str,
    options: &AgentOptions,
    config: &Config,
    env: &E,
) -> Result<RemoteSettings, AgentError>
where
    E: Fn(&str) -> Option<String>,
{
    let entry = config.providers.entry(kind);
    let key_env = kind.api_key_env().unwrap_or_default();

    let api_key = non_empty(options.api_key.clone())
        .or_else(|| non_empty(env(key_env)))
        .or_else(|| non_empty(entry.map(|e| e.api_key.clone())))
        .ok_or_else(|| {
            AgentError::config(format!(
                "{} API key is required. Set the {} environment variable or providers.{}.apiKey in {}.",
                kind,
                key_env,
                kind,
                Config::default_path().display()
            ))
        })?;

    let env_model = match kind {
        ProviderKind::OpenAi => non_empty(env(OPENAI_MODEL_ENV)),
        _ => None,
    };
    let model = non_empty(options.model.clone())
        .or(env_model)
        .or_else(|| non_empty(entry.and_then(|e| e.model.clone())))
        .unwrap_or_else(|| default_model.to_string());

    Ok(RemoteSettings {
        api_key,
        api_base: entry.and_then(|e| e.api_base.clone()),
        model,
    })
}

#[cfg_attr(not(any(feature = "openai", feature = "gemini")), allow(dead_code))]
fn http_client() -> Result<reqwest::Client, AgentError> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()
        .map_err(|e| AgentError::config(format!("Failed to build HTTP client: {}", e)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
