//! HTTP error responses

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use biaia_places::{ErrorEnvelope, PlacesError};
use thiserror::Error;

/// Errors a handler can answer with. Every variant renders as `{ "message": ... }`.
#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Places(#[from] PlacesError),

    #[error("No route for {path}")]
    NotFound { path: String },
}

impl WebError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebError::Places(e) => e.status_code(),
            WebError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let envelope = match &self {
            WebError::Places(e) => e.envelope(),
            WebError::NotFound { .. } => ErrorEnvelope::new(self.to_string()),
        };

        (status, Json(envelope)).into_response()
    }
}
