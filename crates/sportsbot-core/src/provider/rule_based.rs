//! Offline provider backed by the keyword classifier.

use async_trait::async_trait;

use super::Provider;
use crate::rules;

/// Answers from canned templates. Never fails and never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedProvider;

impl RuleBasedProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Provider for RuleBasedProvider {
    fn name(&self) -> &'static str {
        "rule"
    }

    async fn generate(&self, query: &str) -> anyhow::Result<String> {
        Ok(rules::answer(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_uses_templates() {
        let p = RuleBasedProvider::new();
        let out = p.generate("Explain tennis scoring").await.unwrap();
        assert!(out.starts_with("Tennis basics"));
    }
}
