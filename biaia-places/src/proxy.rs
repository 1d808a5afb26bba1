//! Places search proxy
//!
//! Turns one inbound search into at most one upstream call and one outbound
//! JSON response. Validation happens before any network access: the
//! credential is checked first, then the required parameters.

use std::fmt;
use std::sync::Arc;

use biaia_core::PlacesConfig;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::errors::PlacesError;
use crate::providers::{FoursquareProvider, PlacesProvider};
use crate::types::{ErrorEnvelope, PlacesResponse, SearchParams, SearchQuery};

/// Upstream message fragment reported when the account has no calls left.
pub const QUOTA_EXHAUSTED_MARKER: &str = "no API credits remaining";

/// Message substituted for upstream bodies that are not JSON.
pub const UNPARSEABLE_BODY_MESSAGE: &str = "Could not parse JSON response from Foursquare";

/// Stateless proxy in front of a places provider.
///
/// Cloning is cheap; clones share the provider.
#[derive(Clone)]
pub struct PlacesProxy {
    provider: Arc<dyn PlacesProvider>,
    api_key: Option<String>,
}

impl fmt::Debug for PlacesProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacesProxy")
            .field("provider", &self.provider)
            .field("has_credential", &self.has_credential())
            .finish()
    }
}

impl PlacesProxy {
    /// Creates a proxy using the credential from `config` and the given provider.
    pub fn new(config: &PlacesConfig, provider: Arc<dyn PlacesProvider>) -> Self {
        Self {
            provider,
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
        }
    }

    /// Creates a proxy talking to the real Foursquare API.
    ///
    /// # Errors
    /// - `PlacesError::InvalidEndpoint` - `config.base_url` cannot address the search endpoint
    pub fn from_config(config: &PlacesConfig) -> Result<Self, PlacesError> {
        let provider = FoursquareProvider::from_config(config)?;
        Ok(Self::new(config, Arc::new(provider)))
    }

    /// Whether a credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Runs one search.
    ///
    /// Upstream failures are not errors here: any upstream status becomes a
    /// `PlacesResponse`, with quota exhaustion remapped to 403.
    ///
    /// # Errors
    /// - `PlacesError::MissingCredential` - No credential configured
    /// - `PlacesError::MissingParameters` - `ll` or `categories` absent
    /// - `PlacesError::Network` - The upstream request failed in transport
    pub async fn search(&self, params: SearchParams) -> Result<PlacesResponse, PlacesError> {
        let credential = self.credential()?;
        let query = SearchQuery::from_params(params)?;

        let reply = self.provider.search_places(credential, &query).await?;
        let body = parse_body(&reply.body);

        info!(status = reply.status.as_u16(), "Foursquare API status");

        if !reply.status.is_success() {
            error!(status = reply.status.as_u16(), details = %body, "Foursquare API error");

            if is_quota_exhausted(&body) {
                warn!("Foursquare quota exhausted, answering 403");
                return Ok(PlacesResponse::new(StatusCode::FORBIDDEN, body));
            }

            return Ok(PlacesResponse::new(reply.status, body));
        }

        info!("Foursquare API success: data received");
        Ok(PlacesResponse::new(StatusCode::OK, body))
    }

    fn credential(&self) -> Result<&str, PlacesError> {
        match self.api_key.as_deref() {
            Some(key) => {
                info!(api_key_length = key.len(), "Foursquare API key loaded");
                Ok(key)
            }
            None => {
                error!("Foursquare API key MISSING");
                Err(PlacesError::MissingCredential)
            }
        }
    }
}

/// Parses an upstream body, substituting a diagnostic object when it is not JSON.
pub fn parse_body(body: &[u8]) -> Value {
    serde_json::from_slice(body)
        .unwrap_or_else(|_| ErrorEnvelope::new(UNPARSEABLE_BODY_MESSAGE).into_value())
}

/// Whether an upstream error body reports an exhausted call quota.
///
/// Foursquare exposes no stable error code for this, so the message text is matched.
pub fn is_quota_exhausted(body: &Value) -> bool {
    body.get("message")
        .and_then(Value::as_str)
        .is_some_and(|message| message.contains(QUOTA_EXHAUSTED_MARKER))
}
