//! Telemetry setup: tracing subscriber and optional OTLP export

mod otel;

pub use otel::{TelemetryConfig, TelemetryError, TelemetryGuard, init_telemetry};
