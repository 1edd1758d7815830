//! The normalized alert record.

use serde::{Deserialize, Serialize};

use crate::pipeline::SortColumn;

/// Placeholder used when a feed entry has no headline.
pub const DEFAULT_HEADLINE: &str = "No Headline";

/// Placeholder used when a feed entry has no description.
pub const DEFAULT_DESCRIPTION: &str = "No Description";

/// Placeholder used when a feed entry has no severity.
pub const DEFAULT_SEVERITY: &str = "Unknown";

/// Placeholder used when a feed entry has no affected areas.
pub const DEFAULT_AREAS: &str = "Unknown";

/// A weather alert after normalization.
///
/// Every field is always populated. Records are created once per fetch and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    /// Identifier from the source feed.
    pub id: String,
    /// Human-readable title.
    pub headline: String,
    /// Full alert text.
    pub description: String,
    /// Severity as reported by the feed (see [`crate::Severity`]).
    pub severity: String,
    /// Affected geography.
    pub areas: String,
}

impl AlertRecord {
    /// Create a record from fully known values.
    pub fn new(
        id: impl Into<String>,
        headline: impl Into<String>,
        description: impl Into<String>,
        severity: impl Into<String>,
        areas: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            headline: headline.into(),
            description: description.into(),
            severity: severity.into(),
            areas: areas.into(),
        }
    }

    /// Create a record from possibly absent values, substituting the
    /// documented placeholder for each missing field.
    ///
    /// Only absence is replaced. An empty string is a value and is kept.
    pub fn with_defaults(
        id: impl Into<String>,
        headline: Option<String>,
        description: Option<String>,
        severity: Option<String>,
        areas: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            headline: headline.unwrap_or_else(|| DEFAULT_HEADLINE.to_string()),
            description: description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            severity: severity.unwrap_or_else(|| DEFAULT_SEVERITY.to_string()),
            areas: areas.unwrap_or_else(|| DEFAULT_AREAS.to_string()),
        }
    }

    /// The value shown in the given column.
    pub fn column(&self, column: SortColumn) -> &str {
        match column {
            SortColumn::Headline => &self.headline,
            SortColumn::Severity => &self.severity,
            SortColumn::Areas => &self.areas,
            SortColumn::Description => &self.description,
        }
    }
}
