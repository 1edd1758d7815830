//! Web dashboard for active National Weather Service alerts.
//!
//! Fetches the alert feed once at startup and serves a filterable, sortable
//! table via HTMX + server-rendered HTML, plus a JSON view of the same data.

mod config;
mod controller;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use nws_client::NwsClient;
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::controller::AlertController;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, feed = %config.nws.alerts_url, "Starting alerts dashboard");

    // Start the controller; the feed is fetched once in the background
    let client = NwsClient::new(config.nws.clone())?;
    let controller = AlertController::start(Arc::new(client));

    let watcher = controller.clone();
    tokio::spawn(async move {
        let view = watcher.settled().await;
        info!(phase = ?view.phase(), alerts = view.alerts().len(), "Alert feed settled");
    });

    // Build application state
    let state = AppState::new(controller);

    // Build router
    let app = routes::router()
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Alerts dashboard listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
