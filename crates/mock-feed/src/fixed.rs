//! Static feed implementation - returns a fixed alert list.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use alert_core::{async_trait, AlertRecord, AlertSource, FetchError};

/// A source that always returns the same alerts.
///
/// Clones share the fetch counter, so a test can keep one handle and give
/// the other to the code under test.
#[derive(Debug, Clone, Default)]
pub struct StaticFeed {
    alerts: Vec<AlertRecord>,
    calls: Arc<AtomicUsize>,
}

impl StaticFeed {
    /// Create a feed returning the given alerts.
    pub fn new(alerts: Vec<AlertRecord>) -> Self {
        Self {
            alerts,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a feed with no active alerts.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of times `fetch_alerts` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AlertSource for StaticFeed {
    async fn fetch_alerts(&self) -> Result<Vec<AlertRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.alerts.clone())
    }

    fn name(&self) -> &str {
        "StaticFeed"
    }
}
