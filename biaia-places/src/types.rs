//! Request-scoped values flowing through the places proxy.

use bytes::Bytes;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::form_urlencoded;

use crate::errors::PlacesError;

/// Search radius in meters forwarded when the caller omits `radius`.
pub const DEFAULT_RADIUS: &str = "5000";

/// Result count forwarded when the caller omits `limit`.
pub const DEFAULT_LIMIT: &str = "10";

/// Raw inbound query string of a places search.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Coordinate pair, `lat,lng`
    pub ll: Option<String>,
    /// Comma separated Foursquare category ids
    pub categories: Option<String>,
    /// Search radius in meters
    pub radius: Option<String>,
    /// Maximum number of results
    pub limit: Option<String>,
}

impl SearchParams {
    /// Creates params carrying only the two required fields.
    pub fn new(ll: impl Into<String>, categories: impl Into<String>) -> Self {
        Self {
            ll: Some(ll.into()),
            categories: Some(categories.into()),
            ..Default::default()
        }
    }

    /// Reads params from a raw URL query string.
    ///
    /// The first occurrence of a repeated key wins and unknown keys are
    /// ignored.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "ll" => &mut params.ll,
                "categories" => &mut params.categories,
                "radius" => &mut params.radius,
                "limit" => &mut params.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        params
    }
}

/// Validated search forwarded upstream.
///
/// Values are passed through as the caller wrote them; only absence is
/// checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Coordinate pair, sent upstream as `ll`
    pub location: String,
    /// Category ids, sent upstream as `fsq_category_ids`
    pub categories: String,
    /// Radius in meters
    pub radius: String,
    /// Result count
    pub limit: String,
}

impl SearchQuery {
    /// Builds a query, filling in defaults for the optional fields.
    ///
    /// Empty strings count as missing.
    ///
    /// # Errors
    /// - `PlacesError::MissingParameters` - `ll` or `categories` is absent
    pub fn from_params(params: SearchParams) -> Result<Self, PlacesError> {
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());

        let (Some(location), Some(categories)) = (present(params.ll), present(params.categories))
        else {
            return Err(PlacesError::MissingParameters);
        };

        Ok(Self {
            location,
            categories,
            radius: present(params.radius).unwrap_or_else(|| DEFAULT_RADIUS.to_string()),
            limit: present(params.limit).unwrap_or_else(|| DEFAULT_LIMIT.to_string()),
        })
    }

    /// Query pairs in the upstream's parameter naming.
    pub fn upstream_pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("ll", self.location.as_str()),
            ("fsq_category_ids", self.categories.as_str()),
            ("radius", self.radius.as_str()),
            ("limit", self.limit.as_str()),
        ]
    }
}

/// Status and untouched body bytes of one upstream exchange.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    /// Status the upstream answered with
    pub status: StatusCode,
    /// Raw body, possibly empty or not JSON
    pub body: Bytes,
}

impl UpstreamReply {
    /// Creates a reply from a status and body.
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// `{ "message": ... }` body sent for locally detected failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Human readable failure description
    pub message: String,
}

impl ErrorEnvelope {
    /// Creates an envelope carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Converts into a JSON value for the response body.
    pub fn into_value(self) -> Value {
        serde_json::json!({ "message": self.message })
    }
}

/// Outbound answer of the proxy: a status and a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacesResponse {
    /// Status to answer the caller with
    pub status: StatusCode,
    /// JSON body to answer the caller with
    pub body: Value,
}

impl PlacesResponse {
    /// Creates a response from a status and JSON body.
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }
}
