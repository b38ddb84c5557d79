//! Application configuration
//!
//! Sections:
//! - `server`: HTTP server settings
//! - `viacep`: CEP lookup upstream
//! - `weatherapi`: weather upstream (holds the API key)
//! - `telemetry`: tracing and OTLP export

mod server;

use serde::Deserialize;

pub use crate::telemetry::TelemetryConfig;
pub use integration_viacep::ViaCepConfig;
pub use integration_weatherapi::WeatherApiConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// CEP lookup upstream configuration
    #[serde(default)]
    pub viacep: ViaCepConfig,

    /// Weather upstream configuration
    #[serde(default)]
    pub weatherapi: WeatherApiConfig,

    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Precedence, lowest to highest: built-in defaults, a `config`
    /// file in the working directory (any format the `config` crate
    /// recognizes), then `CEPWEATHER_*` environment variables
    /// (e.g. `CEPWEATHER_SERVER_PORT`).
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value fails to
    /// deserialize into the expected type.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("CEPWEATHER")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
