//! Error types for alert feeds.

use thiserror::Error;

/// The message shown to users whenever the feed could not be loaded.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load alerts. Please try again later.";

/// Errors that can occur while fetching the alert feed.
///
/// The variants only exist for diagnostics. Users always see
/// [`FETCH_FAILED_MESSAGE`], whichever stage failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The feed answered with a non-success status code.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The response body was not a valid alert feed.
    #[error("malformed alert feed: {0}")]
    Malformed(String),
}

impl FetchError {
    /// The fixed, user-facing message for this error.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_the_same_for_every_kind() {
        let errors = [
            FetchError::Network("connection refused".to_string()),
            FetchError::Status(503),
            FetchError::Malformed("expected value".to_string()),
        ];

        for err in errors {
            assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
        }
    }

    #[test]
    fn test_display_keeps_diagnostic_detail() {
        assert_eq!(FetchError::Status(500).to_string(), "unexpected status 500");
        assert_eq!(
            FetchError::Network("timed out".to_string()).to_string(),
            "network error: timed out"
        );
    }
}
