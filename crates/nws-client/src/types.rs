//! Wire types for the alerts feed (GeoJSON `FeatureCollection`).
//!
//! Only the fields the dashboard shows are read. Everything else in the
//! feed (geometry, timestamps, references, ...) is ignored.

use alert_core::AlertRecord;
use serde::Deserialize;
use serde_json::Value;

/// The body returned by the active alerts endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertFeed {
    /// One entry per active alert.
    pub features: Vec<Feature>,
}

/// A single alert as it appears on the wire.
///
/// `properties` is kept as raw JSON so a missing or malformed property bag
/// still yields a record instead of failing the whole feed.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Feature identifier (an alert URN for NWS).
    #[serde(default)]
    pub id: Value,

    /// Alert properties.
    #[serde(default)]
    pub properties: Value,
}

impl Feature {
    /// A string property, if present and actually a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    /// Normalize into an [`AlertRecord`], substituting placeholders for
    /// absent fields.
    pub fn to_record(&self) -> AlertRecord {
        let owned = |key: &str| self.text(key).map(str::to_string);

        let id = self
            .id
            .as_str()
            .or_else(|| self.text("id"))
            .unwrap_or_default();

        AlertRecord::with_defaults(
            id,
            owned("headline"),
            owned("description"),
            owned("severity"),
            owned("areaDesc"),
        )
    }
}

impl AlertFeed {
    /// Normalize every feature, preserving feed order.
    pub fn into_records(self) -> Vec<AlertRecord> {
        self.features.iter().map(Feature::to_record).collect()
    }
}
