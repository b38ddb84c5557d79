//! Application state shared across handlers

use std::sync::Arc;

use application::WeatherLookupService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Weather lookup use case
    pub lookup: Arc<WeatherLookupService>,
}
