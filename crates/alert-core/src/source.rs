//! The alert source trait.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::record::AlertRecord;

/// A feed of active weather alerts.
///
/// Implementations return the full, normalized alert list or a single
/// [`FetchError`]; they never return partial results. This trait is
/// object-safe and can be used as `Arc<dyn AlertSource>`.
#[async_trait]
pub trait AlertSource: Send + Sync {
    /// Fetch every active alert.
    async fn fetch_alerts(&self) -> Result<Vec<AlertRecord>, FetchError>;

    /// Get a human-readable name for this source.
    fn name(&self) -> &str;
}
