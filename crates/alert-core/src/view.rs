//! Controller view state and its reducer.
//!
//! A [`ViewState`] is never patched in place. Every change is expressed as a
//! [`ViewEvent`] and [`ViewState::apply`] returns the next state with the
//! displayed list recomputed from scratch.

use std::sync::Arc;

use serde::Serialize;

use crate::error::FetchError;
use crate::pipeline::{derive, SortColumn, SortState};
use crate::record::AlertRecord;

/// Lifecycle phase of the alert view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Loading,
    Error,
    Ready,
}

/// An input to the view state.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// The feed was fetched; replaces the full list.
    Loaded(Vec<AlertRecord>),
    /// The feed could not be fetched; discards the full list.
    Failed(FetchError),
    /// The filter text changed.
    FilterChanged(String),
    /// A column header was clicked.
    HeaderClicked(SortColumn),
    /// The sort settings were replaced wholesale (e.g. from a URL).
    SortChanged(SortState),
}

/// Immutable snapshot of everything the alert view shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    alerts: Arc<[AlertRecord]>,
    filter: String,
    sort: SortState,
    displayed: Vec<AlertRecord>,
    phase: Phase,
    error_message: Option<String>,
}

impl ViewState {
    /// The initial state: loading, no alerts, no filter, sorted by headline.
    pub fn loading() -> Self {
        Self {
            alerts: Arc::from(Vec::new()),
            filter: String::new(),
            sort: SortState::default(),
            displayed: Vec::new(),
            phase: Phase::Loading,
            error_message: None,
        }
    }

    /// Apply an event and return the resulting state.
    pub fn apply(mut self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::Loaded(alerts) => {
                self.alerts = Arc::from(alerts);
                self.phase = Phase::Ready;
                self.error_message = None;
            }
            ViewEvent::Failed(err) => {
                self.alerts = Arc::from(Vec::new());
                self.phase = Phase::Error;
                self.error_message = Some(err.user_message().to_string());
            }
            ViewEvent::FilterChanged(filter) => self.filter = filter,
            ViewEvent::HeaderClicked(column) => self.sort = self.sort.click(column),
            ViewEvent::SortChanged(sort) => self.sort = sort,
        }

        self.displayed = derive(
            &self.alerts,
            &self.filter,
            self.sort.column,
            self.sort.direction,
        );
        self
    }

    /// Shorthand for `apply(ViewEvent::FilterChanged(..))`.
    pub fn with_filter(self, filter: impl Into<String>) -> Self {
        self.apply(ViewEvent::FilterChanged(filter.into()))
    }

    /// Shorthand for `apply(ViewEvent::SortChanged(..))`.
    pub fn with_sort(self, sort: SortState) -> Self {
        self.apply(ViewEvent::SortChanged(sort))
    }

    /// Every alert from the last successful fetch.
    pub fn alerts(&self) -> &[AlertRecord] {
        &self.alerts
    }

    /// The filtered and sorted alerts.
    pub fn displayed(&self) -> &[AlertRecord] {
        &self.displayed
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// User-facing error message, set only in [`Phase::Error`].
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Whether the fetch has completed, successfully or not.
    pub fn is_settled(&self) -> bool {
        self.phase != Phase::Loading
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::loading()
    }
}
