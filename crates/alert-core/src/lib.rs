//! Core types for the weather alerts dashboard.
//!
//! This crate holds everything that does not touch the network or the UI:
//!
//! - [`AlertRecord`] - A normalized weather alert
//! - [`Severity`] - The ordered severity vocabulary used for sorting
//! - [`derive`] - The pure filter/sort pipeline
//! - [`ViewState`] / [`ViewEvent`] - The controller state and its reducer
//! - [`AlertSource`] - The trait implemented by alert feeds
//! - [`FetchError`] - The single error kind a feed can report
//!
//! # Example
//!
//! ```rust
//! use alert_core::{AlertRecord, SortColumn, ViewEvent, ViewState};
//!
//! let alerts = vec![
//!     AlertRecord::new("a", "Flood Watch", "River flooding", "Moderate", "Lake County"),
//!     AlertRecord::new("b", "Wind Advisory", "Gusty winds", "Minor", "Cook County"),
//! ];
//!
//! let view = ViewState::loading()
//!     .apply(ViewEvent::Loaded(alerts))
//!     .apply(ViewEvent::HeaderClicked(SortColumn::Severity));
//!
//! assert_eq!(view.displayed()[0].severity, "Minor");
//! ```

mod error;
mod pipeline;
mod record;
mod severity;
mod source;
mod view;

pub use error::{FetchError, FETCH_FAILED_MESSAGE};
pub use pipeline::{derive, matches_filter, SortColumn, SortDirection, SortState};
pub use record::AlertRecord;
pub use severity::Severity;
pub use source::AlertSource;
pub use view::{Phase, ViewEvent, ViewState};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
