//! Infrastructure layer - adapters for external systems
//!
//! Implements ports defined in the application layer and provides
//! configuration loading and telemetry setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::{ViaCepLocationAdapter, WeatherApiAdapter};
pub use config::{AppConfig, ServerConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, TelemetryGuard, init_telemetry};
