//! Alert table routes.
//!
//! View settings travel in the query string (`filter`, `sort`, `dir`), so
//! every request derives its own view from the controller's snapshot.

use alert_core::{
    AlertRecord, Phase, Severity, SortColumn, SortDirection, SortState, ViewState,
};
use askama::Template;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WebError};
use crate::state::AppState;

/// Text shown in place of rows when nothing matches.
pub const EMPTY_TABLE_MESSAGE: &str = "No active alerts.";

/// HTMX response header that replaces the browser URL after a swap.
pub const HX_REPLACE_URL: &str = "hx-replace-url";

/// Query parameters describing the view.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewParams {
    #[serde(default)]
    pub filter: String,
    pub sort: Option<SortColumn>,
    pub dir: Option<SortDirection>,
}

impl ViewParams {
    /// Requested sort, defaulting to headline ascending.
    pub fn sort_state(&self) -> SortState {
        SortState::new(self.sort.unwrap_or_default(), self.dir.unwrap_or_default())
    }

    /// Apply these settings to a controller snapshot.
    pub fn apply_to(&self, view: ViewState) -> ViewState {
        view.with_filter(self.filter.clone())
            .with_sort(self.sort_state())
    }
}

/// Full page template.
#[derive(Template)]
#[template(path = "alerts.html")]
pub struct AlertsPageTemplate {
    pub view: AlertsView,
}

/// Status-or-table fragment swapped in by HTMX.
#[derive(Template)]
#[template(path = "alerts_view.html")]
pub struct AlertsViewTemplate {
    pub view: AlertsView,
}

/// Everything the templates need, precomputed.
#[derive(Debug, Clone)]
pub struct AlertsView {
    pub loading: bool,
    pub failed: bool,
    pub error_message: String,
    pub filter: String,
    pub sort: &'static str,
    pub dir: &'static str,
    /// Full page URL for the current settings.
    pub page_href: String,
    /// Fragment URL for the current settings (used to poll while loading).
    pub refresh_href: String,
    pub headers: Vec<HeaderLink>,
    pub rows: Vec<AlertRow>,
    pub column_count: usize,
    pub empty_message: &'static str,
}

/// A clickable column header.
#[derive(Debug, Clone)]
pub struct HeaderLink {
    pub label: &'static str,
    pub active: bool,
    /// Arrow shown on the active column.
    pub indicator: &'static str,
    pub aria_sort: &'static str,
    /// Full page URL with the sort this click leads to.
    pub page_href: String,
    /// Fragment URL with the sort this click leads to.
    pub view_href: String,
}

/// One table row.
#[derive(Debug, Clone)]
pub struct AlertRow {
    pub headline: String,
    pub severity: String,
    pub areas: String,
    pub description: String,
    pub severity_class: &'static str,
    pub stripe_class: &'static str,
}

impl AlertsView {
    /// Build the template model from a derived view state.
    pub fn from_state(view: &ViewState) -> Self {
        let sort = view.sort();
        let filter = view.filter();

        let headers = SortColumn::ALL
            .iter()
            .map(|&column| HeaderLink::new(column, sort, filter))
            .collect();

        let rows = view
            .displayed()
            .iter()
            .enumerate()
            .map(|(index, record)| AlertRow::new(index, record))
            .collect();

        Self {
            loading: view.phase() == Phase::Loading,
            failed: view.phase() == Phase::Error,
            error_message: view.error_message().unwrap_or_default().to_string(),
            filter: filter.to_string(),
            sort: sort.column.as_str(),
            dir: sort.direction.as_str(),
            page_href: format!("/?{}", view_query(filter, sort)),
            refresh_href: format!("/alerts/view?{}", view_query(filter, sort)),
            headers,
            rows,
            column_count: SortColumn::ALL.len(),
            empty_message: EMPTY_TABLE_MESSAGE,
        }
    }
}

impl HeaderLink {
    fn new(column: SortColumn, current: SortState, filter: &str) -> Self {
        let next = current.click(column);
        let active = column == current.column;
        let (indicator, aria_sort) = match (active, current.direction) {
            (false, _) => ("", "none"),
            (true, SortDirection::Asc) => (" \u{25B2}", "ascending"),
            (true, SortDirection::Desc) => (" \u{25BC}", "descending"),
        };
        let query = view_query(filter, next);

        Self {
            label: column.label(),
            active,
            indicator,
            aria_sort,
            page_href: format!("/?{}", query),
            view_href: format!("/alerts/view?{}", query),
        }
    }
}

impl AlertRow {
    fn new(index: usize, record: &AlertRecord) -> Self {
        Self {
            headline: record.headline.clone(),
            severity: record.severity.clone(),
            areas: record.areas.clone(),
            description: record.description.clone(),
            severity_class: severity_class(&record.severity),
            stripe_class: if index % 2 == 0 { "stripe-even" } else { "stripe-odd" },
        }
    }
}

/// CSS class coloring a severity cell.
pub fn severity_class(severity: &str) -> &'static str {
    match Severity::parse(severity) {
        Some(Severity::Extreme) => "severity-extreme",
        Some(Severity::Severe) => "severity-severe",
        Some(Severity::Moderate) => "severity-moderate",
        Some(Severity::Minor) => "severity-minor",
        Some(Severity::Unknown) | None => "severity-neutral",
    }
}

fn view_query(filter: &str, sort: SortState) -> String {
    format!(
        "filter={}&sort={}&dir={}",
        urlencoding::encode(filter),
        sort.column.as_str(),
        sort.direction.as_str()
    )
}

/// JSON view of the displayed alerts.
#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub filter: String,
    pub sort: SortState,
    /// Number of alerts before filtering.
    pub total: usize,
    pub alerts: Vec<AlertRecord>,
}

/// Render the full alerts page.
pub async fn alerts_page(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> AlertsPageTemplate {
    let view = params.apply_to(state.alerts.snapshot());
    AlertsPageTemplate {
        view: AlertsView::from_state(&view),
    }
}

/// Render the status-or-table fragment.
///
/// The browser URL is replaced with the matching page URL, so a reload keeps
/// whatever filter and sort produced the fragment.
pub async fn alerts_view(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> ([(&'static str, String); 1], AlertsViewTemplate) {
    let view = AlertsView::from_state(&params.apply_to(state.alerts.snapshot()));
    ([(HX_REPLACE_URL, view.page_href.clone())], AlertsViewTemplate { view })
}

/// Get the displayed alerts as JSON.
pub async fn alerts_api(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<Json<AlertsResponse>> {
    let view = params.apply_to(state.alerts.snapshot());

    match view.phase() {
        Phase::Loading => Err(WebError::Loading),
        Phase::Error => Err(WebError::FeedUnavailable(
            view.error_message().unwrap_or_default().to_string(),
        )),
        Phase::Ready => Ok(Json(AlertsResponse {
            filter: view.filter().to_string(),
            sort: view.sort(),
            total: view.alerts().len(),
            alerts: view.displayed().to_vec(),
        })),
    }
}
