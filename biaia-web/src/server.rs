//! HTTP server for BIAIA
//!
//! Serves the shell-rendered pages, the places search proxy and static assets.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use biaia_core::{BiaiaConfig, BiaiaError};
use biaia_places::PlacesProxy;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::handlers::{home_page, not_found, places_search};
use crate::shell::ApplicationShell;

/// Route of the places search proxy.
pub const PLACES_ROUTE: &str = "/api/foursquare";

/// Shared state handed to every handler. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    pub places: PlacesProxy,
    pub shell: ApplicationShell,
}

impl AppState {
    pub fn new(places: PlacesProxy, shell: ApplicationShell) -> Self {
        Self { places, shell }
    }
}

/// Builds the application router.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route(PLACES_ROUTE, get(places_search))
        .route_service("/favicon.png", ServeFile::new(static_dir.join("favicon.png")))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the server until Ctrl+C or SIGTERM.
///
/// # Errors
/// - `BiaiaError::Configuration` - The upstream base URL is invalid
/// - `BiaiaError::Io` - The listener could not bind or the server failed
pub async fn run_server(config: BiaiaConfig) -> Result<(), BiaiaError> {
    let places =
        PlacesProxy::from_config(&config.places).map_err(|e| BiaiaError::Configuration {
            reason: e.to_string(),
        })?;

    if !places.has_credential() {
        warn!("FOURSQUARE_API_KEY is not set, place searches will answer 500");
    }

    let state = AppState::new(places, ApplicationShell::standard());
    let app = build_router(state, &config.server.static_dir);

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("BIAIA server running on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
