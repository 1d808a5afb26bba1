//! Centralized configuration for BIAIA.
//!
//! All tunable parameters live here so that handlers and adapters receive
//! their settings explicitly instead of reading process state on their own.

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::warn;
use url::Url;

/// Environment variable holding the Foursquare Places credential.
pub const API_KEY_VAR: &str = "FOURSQUARE_API_KEY";

/// Upstream host used when no override is configured.
pub const DEFAULT_PLACES_BASE_URL: &str = "https://places-api.foursquare.com";

/// Pinned API version sent in the `X-Places-Api-Version` header.
pub const DEFAULT_PLACES_API_VERSION: NaiveDate = match NaiveDate::from_ymd_opt(2025, 6, 17) {
    Some(date) => date,
    None => panic!("invalid default API version date"),
};

const API_VERSION_FORMAT: &str = "%Y-%m-%d";

/// Central configuration for all BIAIA components.
#[derive(Debug, Clone, Default)]
pub struct BiaiaConfig {
    pub server: ServerConfig,
    pub places: PlacesConfig,
}

/// HTTP listener and asset settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: PathBuf::from("biaia-web/static"),
        }
    }
}

impl ServerConfig {
    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Foursquare Places upstream settings.
///
/// A missing credential does not stop the server from starting. Every
/// proxied search answers with a configuration error instead.
#[derive(Clone)]
pub struct PlacesConfig {
    /// Bearer credential for the upstream API
    pub api_key: Option<String>,
    /// Scheme and host of the upstream API
    pub base_url: String,
    /// API version date, sent as `YYYY-MM-DD`
    pub api_version: NaiveDate,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_PLACES_BASE_URL.to_string(),
            api_version: DEFAULT_PLACES_API_VERSION,
        }
    }
}

impl fmt::Debug for PlacesConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacesConfig")
            .field(
                "api_key",
                &self.api_key.as_ref().map(|key| format!("<{} chars>", key.len())),
            )
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl PlacesConfig {
    /// Creates a configuration carrying the given credential and defaults otherwise.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// The API version formatted for the upstream version header.
    pub fn api_version_header(&self) -> String {
        self.api_version.format(API_VERSION_FORMAT).to_string()
    }
}

impl BiaiaConfig {
    /// Creates configuration with environment variable overrides.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary key lookup.
    ///
    /// Invalid overrides are logged and ignored so the defaults stay in effect.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.places.api_key = lookup(API_KEY_VAR).filter(|key| !key.is_empty());

        if let Some(base_url) = lookup("FOURSQUARE_BASE_URL") {
            match Url::parse(&base_url) {
                Ok(_) => config.places.base_url = base_url,
                Err(e) => warn!("Ignoring FOURSQUARE_BASE_URL={base_url}: {e}"),
            }
        }

        if let Some(version) = lookup("FOURSQUARE_API_VERSION") {
            match NaiveDate::parse_from_str(&version, API_VERSION_FORMAT) {
                Ok(date) => config.places.api_version = date,
                Err(e) => warn!("Ignoring FOURSQUARE_API_VERSION={version}: {e}"),
            }
        }

        if let Some(host) = lookup("BIAIA_HOST") {
            config.server.host = host;
        }

        if let Some(port) = lookup("BIAIA_PORT") {
            match port.parse::<u16>() {
                Ok(port) => config.server.port = port,
                Err(e) => warn!("Ignoring BIAIA_PORT={port}: {e}"),
            }
        }

        if let Some(dir) = lookup("BIAIA_STATIC_DIR") {
            config.server.static_dir = PathBuf::from(dir);
        }

        config
    }

    /// Creates a configuration for tests with a fixed credential.
    pub fn for_testing() -> Self {
        Self {
            places: PlacesConfig::with_api_key("test-api-key"),
            ..Default::default()
        }
    }
}
