//! Typed errors surfaced by the agent facade.
//!
//! Provider internals work with `anyhow::Result`; the facade wraps those
//! failures into [`AgentError::Provider`] so callers can tell a failed call
//! apart from a real answer.

use thiserror::Error;

/// The query was rejected before reaching any provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Query cannot be empty")]
    Empty,
}

#[derive(Error, Debug)]
pub enum AgentError {
    /// Provider could not be constructed (unknown name, missing key, compiled out).
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Provider '{provider}' failed: {source}")]
    Provider {
        provider: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl AgentError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
