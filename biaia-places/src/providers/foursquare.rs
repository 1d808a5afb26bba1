//! Foursquare Places provider for production use.

use async_trait::async_trait;
use biaia_core::PlacesConfig;
use bytes::Bytes;
use reqwest::header::ACCEPT;
use tracing::{debug, warn};
use url::Url;

use super::PlacesProvider;
use crate::errors::PlacesError;
use crate::types::{SearchQuery, UpstreamReply};

/// Path of the search endpoint below the configured base URL.
pub const SEARCH_PATH: &str = "/places/search";

/// Header carrying the pinned API version date.
pub const API_VERSION_HEADER: &str = "X-Places-Api-Version";

/// Foursquare Places search over HTTPS.
///
/// Issues exactly one request per search. There is no timeout, retry or
/// backoff: a hung upstream holds the caller until the connection resolves.
#[derive(Debug, Clone)]
pub struct FoursquareProvider {
    client: reqwest::Client,
    endpoint: Url,
    api_version: String,
}

impl FoursquareProvider {
    /// Creates a provider for the endpoint and API version in `config`.
    ///
    /// # Errors
    /// - `PlacesError::InvalidEndpoint` - `config.base_url` is not an absolute URL
    pub fn from_config(config: &PlacesConfig) -> Result<Self, PlacesError> {
        let invalid = |e: url::ParseError| PlacesError::InvalidEndpoint {
            url: config.base_url.clone(),
            reason: e.to_string(),
        };
        let endpoint = Url::parse(&config.base_url)
            .and_then(|base| base.join(SEARCH_PATH))
            .map_err(invalid)?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            api_version: config.api_version_header(),
        })
    }

    /// Fully qualified search endpoint, without query.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PlacesProvider for FoursquareProvider {
    async fn search_places(
        &self,
        credential: &str,
        query: &SearchQuery,
    ) -> Result<UpstreamReply, PlacesError> {
        debug!(endpoint = %self.endpoint, ?query, "Sending Foursquare search");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&query.upstream_pairs())
            .bearer_auth(credential)
            .header(API_VERSION_HEADER, &self.api_version)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        // An unreadable body keeps the upstream status and goes through the
        // unparseable-body fallback.
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!(status = status.as_u16(), "Failed to read Foursquare response body: {e}");
                Bytes::new()
            }
        };

        Ok(UpstreamReply::new(status, body))
    }
}
