//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use nws_client::NwsConfig;

/// Alerts dashboard configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// Alerts feed client settings.
    pub nws: NwsConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `ALERTS_ADDR` | Server bind address | `127.0.0.1:8790` |
    /// | `ALERTS_STATIC_DIR` | Static asset directory | `static` |
    /// | `NWS_ALERTS_URL` | Alerts feed URL | `https://api.weather.gov/alerts/active` |
    /// | `NWS_USER_AGENT` | User-Agent sent to the feed | `nws-alerts-dashboard/<version>` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("ALERTS_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8790".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let static_dir = env::var("ALERTS_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Ok(Self {
            addr,
            static_dir,
            nws: NwsConfig::from_env(),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid ALERTS_ADDR format")]
    InvalidAddr,
}
