//! Error types for the alerts dashboard.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors returned by the JSON API.
///
/// HTML pages never fail; they render the loading or error view instead.
#[derive(Debug, Error)]
pub enum WebError {
    /// The feed has not been fetched yet.
    #[error("Alerts are still loading")]
    Loading,

    /// The feed could not be fetched.
    #[error("{0}")]
    FeedUnavailable(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WebError::Loading => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            WebError::FeedUnavailable(msg) => {
                tracing::warn!("Alerts API requested after failed fetch");
                (StatusCode::SERVICE_UNAVAILABLE, msg.clone())
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for dashboard handlers.
pub type Result<T> = std::result::Result<T, WebError>;
