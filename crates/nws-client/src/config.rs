//! Configuration types for nws-client.

use std::env;

/// The NWS endpoint listing every active alert.
pub const DEFAULT_ALERTS_URL: &str = "https://api.weather.gov/alerts/active";

/// Configuration for the alerts feed client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NwsConfig {
    /// Full URL of the active alerts feed.
    pub alerts_url: String,
    /// User-Agent header sent with each request.
    /// The NWS API rejects requests that do not identify themselves.
    pub user_agent: String,
}

impl NwsConfig {
    /// Create a configuration for the given feed URL.
    pub fn new(alerts_url: impl Into<String>) -> Self {
        Self {
            alerts_url: alerts_url.into(),
            user_agent: default_user_agent(),
        }
    }

    /// Replace the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `NWS_ALERTS_URL` | Alerts feed URL | `https://api.weather.gov/alerts/active` |
    /// | `NWS_USER_AGENT` | User-Agent header | `nws-alerts-dashboard/<version>` |
    pub fn from_env() -> Self {
        let alerts_url =
            env::var("NWS_ALERTS_URL").unwrap_or_else(|_| DEFAULT_ALERTS_URL.to_string());

        let user_agent = env::var("NWS_USER_AGENT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_user_agent);

        Self {
            alerts_url,
            user_agent,
        }
    }
}

impl Default for NwsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ALERTS_URL)
    }
}

fn default_user_agent() -> String {
    format!("nws-alerts-dashboard/{}", env!("CARGO_PKG_VERSION"))
}
