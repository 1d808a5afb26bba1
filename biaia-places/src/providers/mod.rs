//! Upstream implementations for places search.

use async_trait::async_trait;

use crate::errors::PlacesError;
use crate::types::{SearchQuery, UpstreamReply};

pub mod foursquare;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use foursquare::FoursquareProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::{MockPlacesProvider, RecordedCall};

/// Trait for places search upstreams.
///
/// One call is one outbound request. Implementations report any HTTP status
/// as a successful `UpstreamReply` and reserve errors for exchanges that never
/// produced a status.
#[async_trait]
pub trait PlacesProvider: Send + Sync + std::fmt::Debug {
    /// Issue a single search against the upstream.
    ///
    /// # Errors
    /// - `PlacesError::Network` - Transport failure before a status arrived
    /// - `PlacesError::InvalidEndpoint` - The upstream URL cannot be built
    async fn search_places(
        &self,
        credential: &str,
        query: &SearchQuery,
    ) -> Result<UpstreamReply, PlacesError>;
}
