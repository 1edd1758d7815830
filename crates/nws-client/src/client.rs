//! HTTP client for the active alerts feed.

use alert_core::{AlertRecord, AlertSource, FetchError};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::NwsConfig;
use crate::error::NwsError;
use crate::types::AlertFeed;

/// Media type served by the NWS API.
const GEO_JSON: &str = "application/geo+json";

/// Client for the National Weather Service alerts feed.
///
/// No request timeout is configured; failures surface only as transport
/// errors or non-success statuses.
#[derive(Clone)]
pub struct NwsClient {
    http: Client,
    config: NwsConfig,
}

impl NwsClient {
    /// Create a client with the given configuration.
    pub fn new(config: NwsConfig) -> Result<Self, NwsError> {
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(NwsError::Http)?;

        Ok(Self { http, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`NwsConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, NwsError> {
        Self::new(NwsConfig::from_env())
    }

    /// Fetch and parse the raw feed.
    pub async fn fetch_feed(&self) -> Result<AlertFeed, NwsError> {
        let url = &self.config.alerts_url;
        debug!(%url, "Fetching active alerts");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, GEO_JSON)
            .send()
            .await
            .map_err(NwsError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Alerts feed returned an error status");
            return Err(NwsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(NwsError::Http)?;
        let feed: AlertFeed = serde_json::from_str(&body)?;

        Ok(feed)
    }

    /// Fetch every active alert, normalized.
    pub async fn active_alerts(&self) -> Result<Vec<AlertRecord>, NwsError> {
        let records = self.fetch_feed().await?.into_records();
        info!(count = records.len(), "Fetched active alerts");
        Ok(records)
    }

    /// Get the configuration.
    pub fn config(&self) -> &NwsConfig {
        &self.config
    }
}

#[async_trait]
impl AlertSource for NwsClient {
    async fn fetch_alerts(&self) -> Result<Vec<AlertRecord>, FetchError> {
        self.active_alerts().await.map_err(FetchError::from)
    }

    fn name(&self) -> &str {
        "NwsClient"
    }
}

impl std::fmt::Debug for NwsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NwsClient")
            .field("config", &self.config)
            .finish()
    }
}
