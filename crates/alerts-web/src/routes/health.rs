//! Health check endpoint.

use alert_core::Phase;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: String,
    /// Feed lifecycle phase; the server is healthy even if the feed failed.
    pub feed: Phase,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        feed: state.alerts.snapshot().phase(),
    })
}
