//! Vitrine - product catalog client
//!
//! Main entry point: parses flags, resolves configuration and hands off to
//! the product commands.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use vitrine_core::ClientConfig;

mod product_cli;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "vitrine",
    about = "Create, list, inspect and delete catalog products",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: product_cli::ProductCommand,

    /// Backend base URL (overrides config file and VITRINE_BASE_URL)
    #[clap(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[clap(long, global = true)]
    timeout: Option<u64>,

    /// Config file path (defaults to the user config directory)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Set log level
    #[clap(long, default_value = "info", global = true)]
    log_level: LogLevel,
}

/// Initialize tracing from the --log-level flag
///
/// `RUST_LOG` directives, when present, are added on top.
fn initialize_tracing(log_level: &LogLevel) {
    let mut filter = EnvFilter::new(log_level.to_filter_directive());

    if let Ok(extra) = std::env::var("RUST_LOG") {
        for directive in extra.split(',').filter(|d| !d.is_empty()) {
            if let Ok(parsed) = directive.parse() {
                filter = filter.add_directive(parsed);
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // stdout carries command output
        .init();
}

fn resolve_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config =
        ClientConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(url) = &cli.base_url {
        config = config
            .with_base_url(url)
            .context("Invalid --base-url")?;
    }
    if let Some(seconds) = cli.timeout {
        config = config.with_timeout_seconds(seconds);
    }

    tracing::debug!(
        "Using backend {} (timeout {}s)",
        config.base_url,
        config.timeout_seconds
    );
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let config = resolve_config(&cli)?;
    cli.command.execute(&config).await
}
