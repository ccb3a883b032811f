//! Configuration module for sportsbot.
//!
//! Loads typed configuration from `~/.sportsbot/config.json`. A missing file
//! means defaults: the rule-based provider and a server on `0.0.0.0:5000`.
//! Environment variables (`SPORTS_AGENT_PROVIDER`, `OPENAI_API_KEY`, ...) are
//! layered on top by the agent, not here.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::provider::ProviderKind;

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub agent: AgentDefaults,
    pub providers: ProvidersConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from the default path (`~/.sportsbot/config.json`).
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Get the default config directory path.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".sportsbot")
    }

    /// Write the default config template to `path`.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = serde_json::json!({
            "agent": {
                "provider": "rule"
            },
            "providers": {
                "openai": {
                    "apiKey": "",
                    "model": "gpt-4o-mini"
                },
                "gemini": {
                    "apiKey": "",
                    "model": "gemini-pro"
                }
            },
            "server": {
                "host": "0.0.0.0",
                "port": 5000
            }
        });

        std::fs::write(path, serde_json::to_string_pretty(&template)?)?;
        Ok(())
    }

    /// Write the default config template to the default path.
    pub fn write_default_template() -> anyhow::Result<PathBuf> {
        let path = Self::default_path();
        Self::write_template(&path)?;
        Ok(path)
    }

    /// Check the file-level settings, collecting every problem found.
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Some(ref name) = self.agent.provider {
            if let Err(e) = name.parse::<ProviderKind>() {
                errors.push(format!("agent.provider: {}", e));
            }
        }

        if self.agent.max_tokens == 0 {
            errors.push("agent.maxTokens must be greater than zero.".into());
        }
        if !(0.0..=2.0).contains(&self.agent.temperature) {
            errors.push("agent.temperature must be between 0.0 and 2.0.".into());
        }
        if self.server.port == 0 {
            errors.push("server.port must be non-zero.".into());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ── Agent Configuration ─────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentDefaults {
    /// Provider name; `None` falls through to the built-in default.
    pub provider: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for AgentDefaults {
    fn default() -> Self {
        Self {
            provider: None,
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

// ── Provider Configuration ──────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderEntry {
    pub api_key: String,
    pub api_base: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub openai: Option<ProviderEntry>,
    pub gemini: Option<ProviderEntry>,
}

impl ProvidersConfig {
    pub fn entry(&self, kind: ProviderKind) -> Option<&ProviderEntry> {
        match kind {
            ProviderKind::Rule => None,
            ProviderKind::OpenAi => self.openai.as_ref(),
            ProviderKind::Gemini => self.gemini.as_ref(),
        }
    }
}

// ── Server Configuration ────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.agent.provider, None);
        assert_eq!(config.agent.max_tokens, 1024);
        assert_eq!(config.server.bind_addr(), "0.0.0.0:5000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_minimal_json() {
        let json = r#"{"providers": {"gemini": {"apiKey": "test-key"}}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let entry = config.providers.entry(ProviderKind::Gemini).unwrap();
        assert_eq!(entry.api_key, "test-key");
        assert_eq!(entry.model, None);
        assert!(config.providers.entry(ProviderKind::OpenAi).is_none());
    }

    #[test]
    fn test_validate_collects_errors() {
        let json = r#"{
            "agent": {"provider": "cricinfo", "maxTokens": 0},
            "server": {"port": 0}
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("Unknown provider 'cricinfo'"));
        assert!(errors[1].contains("agent.maxTokens"));
        assert!(errors[2].contains("server.port"));
    }

    #[test]
    fn test_template_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        Config::write_template(&path).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.agent.provider.as_deref(), Some("rule"));
        assert_eq!(config.server.port, 5000);
        assert_eq!(
            config.providers.entry(ProviderKind::OpenAi).and_then(|e| e.model.as_deref()),
            Some("gpt-4o-mini")
        );
        // Empty keys are fine until a remote provider is selected.
        assert!(config.validate().is_ok());
    }
}
