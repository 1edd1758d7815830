//! National Weather Service alerts client library.
//!
//! This crate fetches the active alerts feed from `api.weather.gov` and
//! normalizes it into [`AlertRecord`]s:
//!
//! - One GET per call, no retries, no pagination
//! - Missing or malformed alert properties fall back to placeholders
//! - Implements [`alert_core::AlertSource`] so the dashboard can use it directly
//!
//! # Example
//!
//! ```no_run
//! use nws_client::{NwsClient, NwsConfig};
//!
//! # async fn example() -> Result<(), nws_client::NwsError> {
//! let client = NwsClient::new(NwsConfig::default())?;
//!
//! let alerts = client.active_alerts().await?;
//! for alert in &alerts {
//!     println!("[{}] {} ({})", alert.severity, alert.headline, alert.areas);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use alert_core::AlertRecord;
pub use client::NwsClient;
pub use config::{NwsConfig, DEFAULT_ALERTS_URL};
pub use error::NwsError;
pub use types::{AlertFeed, Feature};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
