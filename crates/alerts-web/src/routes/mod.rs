//! Route handlers for the alerts dashboard.

pub mod alerts;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // HTML pages
        .route("/", get(alerts::alerts_page))
        .route("/alerts/view", get(alerts::alerts_view))
        // Health check
        .route("/health", get(health::health))
        // API endpoints
        .route("/api/alerts", get(alerts::alerts_api))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use alert_core::AlertRecord;
    use mock_feed::{FailingFeed, StaticFeed};
    use serde_json::Value;

    use super::*;
    use crate::controller::AlertController;

    /// Serve the router on an ephemeral port and return its base URL.
    async fn serve(controller: AlertController) -> String {
        controller.settled().await;
        let app = router().with_state(AppState::new(controller));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn sample_feed() -> StaticFeed {
        StaticFeed::new(vec![
            AlertRecord::new("1", "Frost Advisory", "Cold", "Minor", "Ada, ID"),
            AlertRecord::new("2", "Red Flag Warning", "Dry", "Severe", "Kern, CA"),
        ])
    }

    #[tokio::test]
    async fn test_health() {
        let base = serve(AlertController::start(Arc::new(StaticFeed::empty()))).await;

        let body: Value = reqwest::get(format!("{}/health", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_page_renders_table() {
        let base = serve(AlertController::start(Arc::new(sample_feed()))).await;

        let response = reqwest::get(format!("{}/?sort=severity&dir=desc", base))
            .await
            .unwrap();
        assert!(response.status().is_success());

        let html = response.text().await.unwrap();
        assert!(html.contains("National Weather Alerts by NWS"));
        let severe = html.find("Red Flag Warning").unwrap();
        let minor = html.find("Frost Advisory").unwrap();
        assert!(severe < minor);
    }

    #[tokio::test]
    async fn test_filtered_fragment_keeps_filter_in_page_url() {
        let base = serve(AlertController::start(Arc::new(sample_feed()))).await;

        let response = reqwest::get(format!("{}/alerts/view?filter=min&sort=severity&dir=desc", base))
            .await
            .unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            response.headers()[alerts::HX_REPLACE_URL],
            "/?filter=min&sort=severity&dir=desc"
        );

        let html = response.text().await.unwrap();
        assert!(html.contains("Frost Advisory"));
        assert!(!html.contains("Red Flag Warning"));
    }

    #[tokio::test]
    async fn test_api_filters_and_sorts() {
        let base = serve(AlertController::start(Arc::new(sample_feed()))).await;

        let body: Value = reqwest::get(format!("{}/api/alerts?filter=MIN", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["total"], 2);
        assert_eq!(body["alerts"].as_array().unwrap().len(), 1);
        assert_eq!(body["alerts"][0]["headline"], "Frost Advisory");
        assert_eq!(body["sort"]["column"], "headline");
        assert_eq!(body["sort"]["direction"], "asc");
    }

    #[tokio::test]
    async fn test_invalid_sort_column_is_rejected() {
        let base = serve(AlertController::start(Arc::new(sample_feed()))).await;

        let response = reqwest::get(format!("{}/api/alerts?sort=bogus", base))
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_api_after_failed_fetch() {
        let base = serve(AlertController::start(Arc::new(FailingFeed::status(500)))).await;

        let response = reqwest::get(format!("{}/api/alerts", base)).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body["error"],
            "Failed to load alerts. Please try again later."
        );
    }
}
