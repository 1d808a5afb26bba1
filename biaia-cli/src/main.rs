//! BIAIA CLI - Command-line interface
//!
//! Runs the web server or a one-shot place search.

mod commands;

use std::path::PathBuf;

use biaia_core::{BiaiaConfig, CliLogLevel, init_tracing};
use clap::Parser;
use tracing::{debug, info, warn};

#[derive(Debug, Parser)]
#[command(name = "biaia")]
#[command(about = "Pregnancy support platform server")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,

    /// Console log level (RUST_LOG takes precedence)
    #[arg(long, value_enum, global = true, default_value_t = CliLogLevel::Info)]
    log_level: CliLogLevel,

    /// Directory for the full debug log
    #[arg(long, global = true)]
    logs_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let dotenv = dotenvy::dotenv();
    init_tracing(cli.log_level.as_tracing_level(), cli.logs_dir.as_deref())?;

    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Failed to load .env file: {e}"),
    }

    let config = BiaiaConfig::from_env();
    commands::handle_command(cli.command, config).await
}
