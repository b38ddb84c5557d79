//! CEP weather HTTP server
//!
//! Main entry point: loads configuration, wires the upstream clients into
//! the lookup use case, and serves the API with graceful shutdown.

use std::{sync::Arc, time::Duration};

use application::{
    WeatherLookupService,
    ports::{LocationPort, WeatherPort},
};
use infrastructure::{AppConfig, ViaCepLocationAdapter, WeatherApiAdapter, init_telemetry};
use integration_viacep::ViaCepClient;
use integration_weatherapi::WeatherApiClient;
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Telemetry needs the config, so a load failure is only logged after
    // the subscriber is installed.
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let _telemetry_guard = init_telemetry(&config.telemetry)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {e}"))?;

    if let Some(e) = config_error {
        tracing::warn!("Failed to load config, using defaults: {}", e);
    }

    info!("cep-weather v{} starting", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        viacep = %config.viacep.base_url,
        weatherapi = %config.weatherapi.base_url,
        "Configuration loaded"
    );

    let viacep_client = ViaCepClient::new(config.viacep.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize ViaCEP client: {e}"))?;
    let weatherapi_client = WeatherApiClient::new(config.weatherapi.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize WeatherAPI client: {e}"))?;

    let location: Arc<dyn LocationPort> = Arc::new(ViaCepLocationAdapter::new(viacep_client));
    let weather: Arc<dyn WeatherPort> = Arc::new(WeatherApiAdapter::new(weatherapi_client));

    let state = AppState {
        lookup: Arc::new(WeatherLookupService::new(location, weather)),
    };

    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }

    info!("Waiting up to {:?} for connections to close", timeout);
    // Connection draining itself is handled by axum's graceful_shutdown
}
