//! The alert view controller.
//!
//! Owns the feed lifecycle: one fetch, issued when the controller starts,
//! moves the view from loading to ready or error. State transitions are
//! published on a `watch` channel; readers take snapshots and derive their
//! own filtered/sorted views from them.

use std::sync::Arc;

use alert_core::{AlertSource, ViewEvent, ViewState};
use tokio::sync::watch;
use tracing::{debug, error, info};

/// Publishes the alert view state to request handlers.
#[derive(Clone)]
pub struct AlertController {
    view: watch::Receiver<ViewState>,
}

impl AlertController {
    /// Start the controller and fetch the feed in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(source: Arc<dyn AlertSource>) -> Self {
        let (tx, rx) = watch::channel(ViewState::loading());
        tokio::spawn(fetch_once(source, tx));
        Self { view: rx }
    }

    /// The current view state.
    pub fn snapshot(&self) -> ViewState {
        self.view.borrow().clone()
    }

    /// Subscribe to view state transitions.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.view.clone()
    }

    /// Wait until the fetch has completed and return the resulting state.
    pub async fn settled(&self) -> ViewState {
        let mut rx = self.subscribe();
        let view = match rx.wait_for(ViewState::is_settled).await {
            Ok(view) => view.clone(),
            // The fetch task is gone without publishing
            Err(_) => self.snapshot(),
        };
        view
    }
}

impl std::fmt::Debug for AlertController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertController")
            .field("phase", &self.view.borrow().phase())
            .finish()
    }
}

/// Fetch the feed and publish the outcome.
///
/// Returns `false` when every receiver was dropped before the fetch
/// completed, in which case the result is discarded.
async fn fetch_once(source: Arc<dyn AlertSource>, tx: watch::Sender<ViewState>) -> bool {
    info!(source = source.name(), "Fetching alerts");

    let event = match source.fetch_alerts().await {
        Ok(alerts) => {
            info!(count = alerts.len(), "Alerts loaded");
            ViewEvent::Loaded(alerts)
        }
        Err(err) => {
            error!(error = %err, "Failed to load alerts");
            ViewEvent::Failed(err)
        }
    };

    let next = tx.borrow().clone().apply(event);
    if tx.send(next).is_err() {
        debug!("Alert controller dropped before the fetch completed; discarding result");
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use alert_core::{AlertRecord, Phase, FETCH_FAILED_MESSAGE};
    use mock_feed::{DelayedFeed, FailingFeed, StaticFeed};
    use std::time::Duration;

    fn sample() -> Vec<AlertRecord> {
        vec![
            AlertRecord::new("1", "Wind Advisory", "d", "Minor", "a"),
            AlertRecord::new("2", "Tornado Warning", "d", "Extreme", "b"),
        ]
    }

    #[tokio::test]
    async fn test_loads_alerts() {
        let controller = AlertController::start(Arc::new(StaticFeed::new(sample())));

        let view = controller.settled().await;
        assert_eq!(view.phase(), Phase::Ready);
        assert_eq!(view.alerts().len(), 2);
        assert_eq!(view.displayed()[0].headline, "Tornado Warning");
        assert_eq!(controller.snapshot(), view);
    }

    #[tokio::test]
    async fn test_fetches_exactly_once() {
        let feed = StaticFeed::new(sample());
        let controller = AlertController::start(Arc::new(feed.clone()));

        controller.settled().await;
        let _ = controller.snapshot();
        let _ = controller.clone().settled().await;

        assert_eq!(feed.calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_moves_to_error_phase() {
        let controller = AlertController::start(Arc::new(FailingFeed::status(503)));

        let view = controller.settled().await;
        assert_eq!(view.phase(), Phase::Error);
        assert_eq!(view.error_message(), Some(FETCH_FAILED_MESSAGE));
        assert!(view.displayed().is_empty());
    }

    #[tokio::test]
    async fn test_loading_until_fetch_completes() {
        let feed = DelayedFeed::with_millis(StaticFeed::new(sample()), 100);
        let controller = AlertController::start(Arc::new(feed));

        assert_eq!(controller.snapshot().phase(), Phase::Loading);

        let mut rx = controller.subscribe();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().phase(), Phase::Ready);
    }

    #[tokio::test]
    async fn test_result_discarded_after_teardown() {
        let (tx, rx) = watch::channel(ViewState::loading());
        drop(rx);

        let applied = fetch_once(Arc::new(StaticFeed::new(sample())), tx).await;
        assert!(!applied);
    }

    #[tokio::test]
    async fn test_dropping_controller_mid_fetch() {
        let feed = StaticFeed::new(sample());
        let controller =
            AlertController::start(Arc::new(DelayedFeed::with_millis(feed.clone(), 50)));
        drop(controller);

        tokio::time::sleep(Duration::from_millis(150)).await;
        // The fetch still ran once, its result just had nowhere to go
        assert_eq!(feed.calls(), 1);
    }

    #[tokio::test]
    async fn test_error_status_from_live_client() {
        use axum::http::StatusCode;
        use axum::routing::get;
        use axum::Router;
        use nws_client::{NwsClient, NwsConfig};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let stub = Router::new().route(
            "/alerts/active",
            get(|| async { StatusCode::BAD_GATEWAY }),
        );
        tokio::spawn(async move {
            axum::serve(listener, stub).await.unwrap();
        });

        let config = NwsConfig::new(format!("http://{}/alerts/active", addr));
        let client = NwsClient::new(config).unwrap();
        let controller = AlertController::start(Arc::new(client));

        let view = controller.settled().await;
        assert_eq!(view.phase(), Phase::Error);
        assert_eq!(
            view.error_message(),
            Some("Failed to load alerts. Please try again later.")
        );
    }
}
