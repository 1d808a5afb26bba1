//! Mock provider implementation for testing.

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use reqwest::StatusCode;

use super::PlacesProvider;
use crate::errors::PlacesError;
use crate::types::{SearchQuery, UpstreamReply};

/// One search the mock received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Credential the proxy sent
    pub credential: String,
    /// Validated query the proxy sent
    pub query: SearchQuery,
}

#[derive(Debug, Clone)]
enum Outcome {
    Reply(StatusCode, Bytes),
    NetworkFailure(String),
}

/// Mock provider answering every search with a canned outcome and recording
/// each call it receives.
#[derive(Debug)]
pub struct MockPlacesProvider {
    outcome: Outcome,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockPlacesProvider {
    /// Answers with `200 {"results": []}`.
    pub fn new() -> Self {
        Self::with_reply(StatusCode::OK, r#"{"results": []}"#)
    }

    /// Answers with the given status and raw body.
    pub fn with_reply(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            outcome: Outcome::Reply(status, body.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answers with the given status and a serialized JSON body.
    pub fn with_json(status: StatusCode, body: serde_json::Value) -> Self {
        Self::with_reply(status, body.to_string())
    }

    /// Fails every search as if the connection was refused.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::NetworkFailure(reason.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of searches received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Snapshot of every search received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }
}

impl Default for MockPlacesProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlacesProvider for MockPlacesProvider {
    async fn search_places(
        &self,
        credential: &str,
        query: &SearchQuery,
    ) -> Result<UpstreamReply, PlacesError> {
        self.calls.lock().push(RecordedCall {
            credential: credential.to_string(),
            query: query.clone(),
        });

        match &self.outcome {
            Outcome::Reply(status, body) => Ok(UpstreamReply::new(*status, body.clone())),
            Outcome::NetworkFailure(reason) => Err(PlacesError::Network {
                reason: reason.clone(),
            }),
        }
    }
}
