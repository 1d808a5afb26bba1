//! BIAIA Places - Foursquare place search proxy
//!
//! Validates inbound search parameters, forwards one credentialed request to
//! the Foursquare Places API and normalizes whatever comes back into a JSON
//! response with a status code.

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]

pub mod errors;
pub mod providers;
pub mod proxy;
pub mod types;

// Re-export main types
pub use errors::PlacesError;
pub use providers::{FoursquareProvider, PlacesProvider};
pub use proxy::PlacesProxy;
pub use types::{ErrorEnvelope, PlacesResponse, SearchParams, SearchQuery, UpstreamReply};

/// Convenience type alias for Results with PlacesError.
pub type Result<T> = std::result::Result<T, PlacesError>;
