//! JSON API handlers

use axum::Json;
use axum::extract::{RawQuery, State};
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use biaia_places::SearchParams;

use crate::errors::WebError;
use crate::server::AppState;

/// `GET /api/foursquare` - proxies a place search to Foursquare.
///
/// The query string is read leniently: repeated keys keep their first value
/// and unknown keys are ignored, so only the proxy decides what is missing.
///
/// # Errors
/// - `WebError::Places` - Missing credential (500), missing parameters (400)
///   or a transport failure talking to Foursquare (500)
pub async fn places_search(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, WebError> {
    let params = SearchParams::from_query(query.as_deref().unwrap_or_default());
    let response = state.places.search(params).await?;
    Ok((response.status, Json(response.body)).into_response())
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> WebError {
    WebError::NotFound {
        path: uri.path().to_string(),
    }
}
