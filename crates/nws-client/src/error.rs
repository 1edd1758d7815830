//! Error types for nws-client.

use alert_core::FetchError;
use thiserror::Error;

/// Errors that can occur when fetching the alerts feed.
#[derive(Debug, Error)]
pub enum NwsError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not a valid alerts feed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<NwsError> for FetchError {
    fn from(err: NwsError) -> Self {
        match err {
            NwsError::Http(e) => FetchError::Network(e.to_string()),
            NwsError::Status { status, .. } => FetchError::Status(status),
            NwsError::Json(e) => FetchError::Malformed(e.to_string()),
        }
    }
}
