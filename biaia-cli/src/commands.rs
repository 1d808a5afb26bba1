//! CLI command implementations

use anyhow::Context;
use biaia_core::BiaiaConfig;
use biaia_places::{PlacesProxy, SearchParams};
use clap::Subcommand;
use tracing::info;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the web server
    Server {
        /// Host to bind to (overrides BIAIA_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (overrides BIAIA_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run one place search through the proxy and print the response
    Search {
        /// Coordinate pair, e.g. "40.7128,-74.0060"
        #[arg(long, allow_hyphen_values = true)]
        ll: String,
        /// Comma separated Foursquare category ids
        #[arg(long)]
        categories: String,
        /// Search radius in meters
        #[arg(long)]
        radius: Option<String>,
        /// Maximum number of results
        #[arg(long)]
        limit: Option<String>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns the failure of the command that ran
pub async fn handle_command(command: Commands, mut config: BiaiaConfig) -> anyhow::Result<()> {
    match command {
        Commands::Server { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            start_server(config).await
        }
        Commands::Search {
            ll,
            categories,
            radius,
            limit,
        } => {
            let params = SearchParams {
                radius,
                limit,
                ..SearchParams::new(ll, categories)
            };
            search_places(config, params).await
        }
    }
}

async fn start_server(config: BiaiaConfig) -> anyhow::Result<()> {
    info!("Starting server on {}", config.server.bind_address());
    biaia_web::run_server(config)
        .await
        .context("web server failed")
}

async fn search_places(config: BiaiaConfig, params: SearchParams) -> anyhow::Result<()> {
    let proxy = PlacesProxy::from_config(&config.places)?;

    match proxy.search(params).await {
        Ok(response) => {
            println!("HTTP {}", response.status);
            println!("{}", serde_json::to_string_pretty(&response.body)?);
            Ok(())
        }
        Err(e) => {
            println!("HTTP {}", e.status_code());
            println!("{}", serde_json::to_string_pretty(&e.envelope())?);
            Err(e.into())
        }
    }
}
