//! Application state shared across handlers.

use crate::controller::AlertController;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Alert view controller.
    pub alerts: AlertController,
}

impl AppState {
    /// Create new application state.
    pub fn new(alerts: AlertController) -> Self {
        Self { alerts }
    }
}
