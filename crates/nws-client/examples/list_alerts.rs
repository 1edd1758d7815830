//! Print the currently active alerts.
//!
//! Run with: cargo run --example list_alerts
//!
//! Reads NWS_ALERTS_URL and NWS_USER_AGENT (or a .env file).
//! An optional first argument filters by severity:
//!   cargo run --example list_alerts -- severe

use alert_core::{derive, SortColumn, SortDirection};
use nws_client::NwsClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nws_client=debug".parse()?),
        )
        .init();

    let filter = std::env::args().nth(1).unwrap_or_default();

    let client = NwsClient::from_env()?;
    println!("Fetching {}...", client.config().alerts_url);

    let alerts = client.active_alerts().await?;
    let displayed = derive(&alerts, &filter, SortColumn::Severity, SortDirection::Desc);

    println!("{} active alerts, {} shown", alerts.len(), displayed.len());
    for alert in displayed {
        println!("[{:>8}] {}", alert.severity, alert.headline);
        println!("           {}", alert.areas);
    }

    Ok(())
}
