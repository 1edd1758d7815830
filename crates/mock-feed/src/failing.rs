//! Failing feed implementation - every fetch fails.

use alert_core::{async_trait, AlertRecord, AlertSource, FetchError};

/// A source whose fetches always fail with the same error.
#[derive(Debug, Clone)]
pub struct FailingFeed {
    error: FetchError,
}

impl FailingFeed {
    /// Create a feed failing with the given error.
    pub fn new(error: FetchError) -> Self {
        Self { error }
    }

    /// Create a feed that answers with an HTTP status code.
    pub fn status(code: u16) -> Self {
        Self::new(FetchError::Status(code))
    }
}

#[async_trait]
impl AlertSource for FailingFeed {
    async fn fetch_alerts(&self) -> Result<Vec<AlertRecord>, FetchError> {
        Err(self.error.clone())
    }

    fn name(&self) -> &str {
        "FailingFeed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_status_failure() {
        let feed = FailingFeed::status(503);
        assert_eq!(feed.fetch_alerts().await, Err(FetchError::Status(503)));
    }

    #[tokio::test]
    async fn test_custom_failure() {
        let feed = FailingFeed::new(FetchError::Network("refused".to_string()));
        let err = feed.fetch_alerts().await.unwrap_err();
        assert_eq!(err.to_string(), "network error: refused");
    }
}
