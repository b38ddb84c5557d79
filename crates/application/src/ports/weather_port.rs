//! Weather resolution port
//!
//! Maps a resolved place name to current temperature readings via an
//! external lookup service.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current temperature readings for a location
///
/// Kelvin arrives pre-derived by the resolver as `temp_c + 273`, an
/// integer-offset approximation kept for compatibility with the historic
/// behavior (the physically exact offset would be 273.15).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature in degrees Celsius
    pub temp_c: f64,
    /// Temperature in degrees Fahrenheit
    pub temp_f: f64,
    /// Temperature in Kelvin
    pub temp_k: f64,
}

/// Failures a weather resolver can report
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Upstream answered with a non-success status
    #[error("weather not found")]
    NotFound,

    /// The outbound request could not be completed
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The response body could not be decoded
    #[error("parse error: {0}")]
    ParseError(String),
}

/// Resolves a place name to current weather conditions
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Issue a single outbound lookup keyed by the place name
    async fn fetch_weather(&self, city: &str) -> Result<WeatherReading, WeatherError>;
}
