//! A feed that answers late.

use std::time::Duration;

use alert_core::{async_trait, AlertRecord, AlertSource, FetchError};
use tokio::time::sleep;

/// Holds back another feed's answer for a fixed time.
///
/// While it sleeps the dashboard stays in its loading phase, and a controller
/// can be dropped with the fetch still in flight.
pub struct DelayedFeed<S: AlertSource> {
    inner: S,
    delay: Duration,
}

impl<S: AlertSource> DelayedFeed<S> {
    /// Answer with `inner`'s alerts once `delay` has passed.
    pub fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }

    pub fn with_millis(inner: S, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }
}

#[async_trait]
impl<S: AlertSource> AlertSource for DelayedFeed<S> {
    async fn fetch_alerts(&self) -> Result<Vec<AlertRecord>, FetchError> {
        sleep(self.delay).await;
        self.inner.fetch_alerts().await
    }

    fn name(&self) -> &str {
        "DelayedFeed"
    }
}
