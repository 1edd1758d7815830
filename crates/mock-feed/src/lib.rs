//! Mock alert sources for testing.
//!
//! This crate provides in-memory implementations of the `AlertSource` trait:
//! - `StaticFeed` - Returns a fixed list of alerts and counts fetches
//! - `FailingFeed` - Always fails with a given `FetchError`
//! - `DelayedFeed` - Wraps another source with artificial latency
//!
//! For the real National Weather Service feed, use the `nws-client` crate.
//!
//! # Example
//!
//! ```rust
//! use mock_feed::{AlertRecord, AlertSource, StaticFeed};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_feed::FetchError> {
//!     let feed = StaticFeed::new(vec![AlertRecord::new(
//!         "urn:test:1",
//!         "Heat Advisory",
//!         "Hot",
//!         "Moderate",
//!         "Maricopa",
//!     )]);
//!
//!     let alerts = feed.fetch_alerts().await?;
//!     assert_eq!(alerts.len(), 1);
//!     assert_eq!(feed.calls(), 1);
//!     Ok(())
//! }
//! ```

mod delayed;
mod failing;
mod fixed;

// Re-export alert-core types for convenience
pub use alert_core::{async_trait, AlertRecord, AlertSource, FetchError};

pub use delayed::DelayedFeed;
pub use failing::FailingFeed;
pub use fixed::StaticFeed;
