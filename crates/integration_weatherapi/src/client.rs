//! WeatherAPI current conditions client

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{models::WeatherApiResponse, query::normalize_location_query};

/// Offset used to derive Kelvin from Celsius
///
/// The historic behavior uses the integer offset 273, not the physically
/// exact 273.15. Kept as-is for output compatibility.
const KELVIN_OFFSET: f64 = 273.0;

/// WeatherAPI client errors
#[derive(Debug, Error)]
pub enum WeatherApiError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The service answered with a non-success status
    #[error("Weather not found")]
    NotFound,

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the weather service
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// WeatherAPI service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherApiConfig {
    /// WeatherAPI base URL (default: <https://api.weatherapi.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key for the weather upstream
    #[serde(default = "default_api_key")]
    pub api_key: SecretString,

    /// Connection timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

fn default_api_key() -> SecretString {
    SecretString::from(String::new())
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Current temperature readings for a resolved place
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    /// Place name as reported by the weather upstream
    pub name: String,
    /// Temperature in degrees Celsius
    pub temp_c: f64,
    /// Temperature in degrees Fahrenheit
    pub temp_f: f64,
    /// Temperature in Kelvin, derived as `temp_c + 273`
    pub temp_k: f64,
}

/// Current weather lookup trait
#[async_trait]
pub trait CurrentWeatherLookup: Send + Sync {
    /// Fetch current conditions for a place name
    ///
    /// The name is normalized before use (see
    /// [`normalize_location_query`]). A single attempt; failures are
    /// final.
    async fn current(&self, location: &str) -> Result<CurrentConditions, WeatherApiError>;
}

/// WeatherAPI HTTP client implementation
#[derive(Debug)]
pub struct WeatherApiClient {
    client: Client,
    config: WeatherApiConfig,
}

impl WeatherApiClient {
    /// Create a new WeatherAPI client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn build_current_url(&self, location: &str) -> String {
        format!(
            "{}/current.json?q={}&key={}",
            self.config.base_url.trim_end_matches('/'),
            normalize_location_query(location),
            self.config.api_key.expose_secret(),
        )
    }

    fn to_conditions(response: &WeatherApiResponse) -> CurrentConditions {
        CurrentConditions {
            name: response.location.name.clone(),
            temp_c: response.current.temp_c,
            temp_f: response.current.temp_f,
            temp_k: response.current.temp_c + KELVIN_OFFSET,
        }
    }
}

#[async_trait]
impl CurrentWeatherLookup for WeatherApiClient {
    #[instrument(skip(self), fields(location = %location))]
    async fn current(&self, location: &str) -> Result<CurrentConditions, WeatherApiError> {
        let url = self.build_current_url(location);
        debug!("Fetching current conditions");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, "WeatherAPI answered with non-success status");
            return Err(WeatherApiError::NotFound);
        }

        let body: WeatherApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherApiError::ParseError(e.to_string()))?;

        Ok(Self::to_conditions(&body))
    }
}
