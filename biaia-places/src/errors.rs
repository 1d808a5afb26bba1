//! Error types for the places proxy.

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ErrorEnvelope;

/// Errors that stop a places search before an upstream answer is available.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// No credential was configured for the upstream API.
    #[error("Missing Foursquare API key (Check .env file and server restart)")]
    MissingCredential,

    /// The caller left out `ll` or `categories`.
    #[error("Missing required parameters: 'll' or 'categories'")]
    MissingParameters,

    /// The configured upstream base URL cannot address the search endpoint.
    #[error("Invalid upstream endpoint '{url}': {reason}")]
    InvalidEndpoint {
        /// The configured base URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The request never produced an upstream status (connection, TLS).
    #[error("Foursquare request failed: {reason}")]
    Network {
        /// The transport failure
        reason: String,
    },
}

impl PlacesError {
    /// HTTP status this error is answered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            PlacesError::MissingParameters => StatusCode::BAD_REQUEST,
            PlacesError::MissingCredential
            | PlacesError::InvalidEndpoint { .. }
            | PlacesError::Network { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body describing this error.
    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope::new(self.to_string())
    }
}

impl From<reqwest::Error> for PlacesError {
    fn from(error: reqwest::Error) -> Self {
        PlacesError::Network {
            reason: error.to_string(),
        }
    }
}
