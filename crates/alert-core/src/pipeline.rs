//! The filter/sort pipeline and the sort-column toggle.
//!
//! [`derive`] is a pure function of its inputs: it never looks at anything
//! else and never mutates the full list.

use std::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};
use serde::{Deserialize, Serialize};

use crate::record::AlertRecord;
use crate::severity::Severity;

/// A sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    #[default]
    Headline,
    Severity,
    Areas,
    Description,
}

impl SortColumn {
    /// Columns in display order.
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Headline,
        SortColumn::Severity,
        SortColumn::Areas,
        SortColumn::Description,
    ];

    /// Identifier used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Headline => "headline",
            SortColumn::Severity => "severity",
            SortColumn::Areas => "areas",
            SortColumn::Description => "description",
        }
    }

    /// Header label.
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Headline => "Headline",
            SortColumn::Severity => "Severity",
            SortColumn::Areas => "Affected Areas",
            SortColumn::Description => "Description",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Identifier used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// The active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    /// Create a sort state.
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// The sort state after a click on `column`'s header.
    ///
    /// Clicking the active column flips the direction; any other column
    /// becomes active in ascending order.
    pub fn click(self, column: SortColumn) -> Self {
        if column == self.column {
            Self::new(column, self.direction.flip())
        } else {
            Self::new(column, SortDirection::Asc)
        }
    }
}

/// Whether a record passes the severity filter.
///
/// Case-insensitive substring match on severity only; an empty filter
/// matches everything.
pub fn matches_filter(record: &AlertRecord, filter: &str) -> bool {
    filter.is_empty()
        || record
            .severity
            .to_lowercase()
            .contains(&filter.to_lowercase())
}

/// Derive the displayed list from the full list and the view settings.
///
/// Filters on severity, then sorts stably: records that compare equal keep
/// their order from `alerts` in both directions.
pub fn derive(
    alerts: &[AlertRecord],
    filter: &str,
    column: SortColumn,
    direction: SortDirection,
) -> Vec<AlertRecord> {
    let mut displayed: Vec<AlertRecord> = alerts
        .iter()
        .filter(|record| matches_filter(record, filter))
        .cloned()
        .collect();

    let mut collator = text_collator();

    // sort_by is stable
    displayed.sort_by(|a, b| direction.apply(compare(&mut collator, a, b, column)));
    displayed
}

/// Root-locale collator for text columns.
///
/// Punctuation and spaces are significant, and strings that collate equal
/// stay equal so the sort keeps them in feed order.
fn text_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, false)
}

fn compare(
    collator: &mut Collator,
    a: &AlertRecord,
    b: &AlertRecord,
    column: SortColumn,
) -> Ordering {
    match column {
        SortColumn::Severity => Severity::rank(&a.severity).cmp(&Severity::rank(&b.severity)),
        other => {
            let a = a.column(other).to_lowercase();
            let b = b.column(other).to_lowercase();
            collator.collate(a.as_str(), b.as_str())
        }
    }
}
