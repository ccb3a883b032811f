//! ⚽ sportsbot-core: Core library for the sportsbot sports assistant.
//!
//! This crate contains the building blocks for a small sports Q&A assistant:
//!
//! - [`rules`]: Keyword sport detector, intent classifier, and canned templates
//! - [`provider`]: Provider trait with rule-based, OpenAI, and Gemini backends
//! - [`agent`]: `SportsAgent` facade that picks a provider once and forwards queries
//! - [`config`]: Typed configuration loading from JSON
//! - [`query`]: Query trimming and validation shared by every boundary
//! - [`error`]: Typed errors surfaced to callers
//! - [`server`]: Axum router exposing `POST /query`
//!
//! # Quick Start
//!
//! ```no_run
//! use sportsbot_core::agent::{AgentOptions, SportsAgent};
//! use sportsbot_core::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let agent = SportsAgent::new(AgentOptions::default(), &config)?;
//!
//! let answer = agent.respond("What are the rules of cricket?").await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod provider;
pub mod query;
pub mod rules;
pub mod server;
