//! ⚽ sportsbot CLI: ask a sports question, serve the web endpoint, onboarding, status.
//!
//! Usage:
//!   sportsbot -q "rules of cricket"     Answer a single query
//!   echo "who will win?" | sportsbot    Read the query from stdin
//!   sportsbot serve                     Start the JSON endpoint (POST /query)
//!   sportsbot onboard                   Create a default configuration
//!   sportsbot status                    Show configuration and provider health

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;
use std::sync::Arc;

use sportsbot_core::agent::{AgentOptions, SportsAgent, PROVIDER_ENV};
use sportsbot_core::config::Config;
use sportsbot_core::provider::ProviderKind;
use sportsbot_core::query::Query;
use sportsbot_core::server;

#[derive(Parser)]
#[command(
    name = "sportsbot",
    version,
    about = "A small sports question-answering assistant",
    long_about = "⚽ sportsbot answers questions about cricket, football, basketball, and tennis.\n\n\
                  Runs offline with the rule-based provider, or forwards queries to OpenAI or Gemini."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    ask: AskArgs,
}

#[derive(Args)]
struct AskArgs {
    /// Sports query text (read from stdin when omitted)
    #[arg(short, long)]
    query: Option<String>,

    #[command(flatten)]
    provider: ProviderArgs,
}

#[derive(Args, Clone)]
struct ProviderArgs {
    /// Provider to use: rule, openai, or gemini (default: $SPORTS_AGENT_PROVIDER, config, then rule)
    #[arg(short, long)]
    provider: Option<ProviderKind>,

    /// Model to use (provider-specific, overrides config)
    #[arg(short, long)]
    model: Option<String>,
}

impl From<ProviderArgs> for AgentOptions {
    fn from(args: ProviderArgs) -> Self {
        AgentOptions {
            provider: args.provider,
            model: args.model,
            api_key: None,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the JSON web endpoint
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(long)]
        port: Option<u16>,

        #[command(flatten)]
        provider: ProviderArgs,
    },

    /// Create the default configuration file
    Onboard {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show configuration status and provider health
    Status,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // One-shot answers print to stdout, so keep the default log level quiet there.
    let default_level = match cli.command {
        Some(Commands::Serve { .. }) => "info",
        _ => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            provider,
        }) => cmd_serve(host, port, provider).await?,
        Some(Commands::Onboard { force }) => cmd_onboard(force)?,
        Some(Commands::Status) => cmd_status()?,
        None => return cmd_ask(cli.ask).await,
    }

    Ok(ExitCode::SUCCESS)
}

// ── Shared Setup ────────────────────────────────────────────────────

fn load_config() -> Result<Config> {
    let config = Config::load()?;
    if let Err(errors) = config.validate() {
        eprintln!("\n  \x1b[31m❌ Configuration errors:\x1b[0m");
        for e in &errors {
            eprintln!("     • {}", e);
        }
        eprintln!();
        anyhow::bail!(
            "Fix the above {} error(s) in {}",
            errors.len(),
            Config::default_path().display()
        );
    }
    Ok(config)
}

// ── Ask Command ─────────────────────────────────────────────────────

async fn cmd_ask(args: AskArgs) -> Result<ExitCode> {
    let raw = match args.query {
        Some(q) => q,
        None => {
            if io::stdin().is_terminal() {
                eprintln!("Enter your sports query, then press Ctrl+D (Unix) or Ctrl+Z Enter (Windows):");
            }
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let query = match Query::parse(&raw) {
        Ok(q) => q,
        Err(_) => {
            println!("No query provided.");
            return Ok(ExitCode::FAILURE);
        }
    };

    let config = load_config()?;
    let agent = SportsAgent::new(args.provider.into(), &config)?;
    let answer = agent.respond(query.as_str()).await?;
    println!("{}", answer);

    Ok(ExitCode::SUCCESS)
}

// ── Serve Command ───────────────────────────────────────────────────

async fn cmd_serve(host: Option<String>, port: Option<u16>, provider: ProviderArgs) -> Result<()> {
    let mut config = load_config()?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let agent = SportsAgent::new(provider.into(), &config)?;
    let addr = config.server.bind_addr();

    println!();
    println!("  ⚽ sportsbot v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "  Provider: {} | Model: {}",
        agent.provider_kind(),
        agent.model().unwrap_or("-")
    );
    println!("  Endpoint: POST http://{}/query", addr);
    println!("  Press Ctrl+C to stop.");
    println!("  ─────────────────────────────────────");

    server::serve(Arc::new(agent), &addr).await
}

// ── Onboard Command ─────────────────────────────────────────────────

fn cmd_onboard(force: bool) -> Result<()> {
    let path = Config::default_path();
    if path.exists() && !force {
        println!();
        println!("  ⚠️  Configuration already exists at:");
        println!("     {}", path.display());
        println!("  Re-run with --force to overwrite it.");
        println!();
        return Ok(());
    }

    let path = Config::write_default_template()?;
    println!();
    println!("  ✅ Configuration created at:");
    println!("     {}", path.display());
    println!();
    println!("  Next steps:");
    println!("  1. Ask away: sportsbot -q \"What are the rules of cricket?\"");
    println!("  2. For LLM answers, add an API key and set agent.provider to openai or gemini");
    println!();
    Ok(())
}

// ── Status Command ──────────────────────────────────────────────────

fn cmd_status() -> Result<()> {
    let config_path = Config::default_path();
    let config = Config::load()?;

    println!();
    println!("  ⚽ sportsbot status");
    println!("  ─────────────────────────────────────");

    if config_path.exists() {
        println!("  Config:    {}", config_path.display());
    } else {
        println!("  Config:    ⚠️  Not found, using defaults (run `sportsbot onboard`)");
    }

    if let Err(errors) = config.validate() {
        for e in &errors {
            println!("  Invalid:   ❌ {}", e);
        }
    }

    if let Ok(name) = std::env::var(PROVIDER_ENV) {
        println!("  Env:       {}={}", PROVIDER_ENV, name);
    }

    match SportsAgent::new(AgentOptions::default(), &config) {
        Ok(agent) => println!(
            "  Provider:  ✅ {} (model: {})",
            agent.provider_kind(),
            agent.model().unwrap_or("-")
        ),
        Err(e) => println!("  Provider:  ❌ {}", e),
    }

    for kind in ProviderKind::ALL {
        let built = if kind.is_available() { "built" } else { "not built" };
        let key = match kind.api_key_env() {
            None => "no key needed".to_string(),
            Some(var) => {
                let from_env = std::env::var(var).map(|v| !v.trim().is_empty()).unwrap_or(false);
                let from_file = config
                    .providers
                    .entry(kind)
                    .map(|e| !e.api_key.trim().is_empty())
                    .unwrap_or(false);
                match (from_env, from_file) {
                    (true, _) => format!("key from {}", var),
                    (false, true) => "key from config".to_string(),
                    (false, false) => "no key".to_string(),
                }
            }
        };
        println!("  {:<10} {}, {}", format!("{}:", kind), built, key);
    }

    println!("  Server:    {}", config.server.bind_addr());
    println!();
    Ok(())
}
