//! Weather adapter - implements `WeatherPort` using `integration_weatherapi`

use application::ports::{WeatherError, WeatherPort, WeatherReading};
use async_trait::async_trait;
use integration_weatherapi::{CurrentWeatherLookup, WeatherApiClient, WeatherApiError};
use tracing::{debug, instrument};

/// Adapter resolving city names to temperature readings through WeatherAPI
#[derive(Debug)]
pub struct WeatherApiAdapter {
    client: WeatherApiClient,
}

impl WeatherApiAdapter {
    /// Create a new adapter wrapping the given client
    #[must_use]
    pub const fn new(client: WeatherApiClient) -> Self {
        Self { client }
    }

    fn convert_error(error: WeatherApiError) -> WeatherError {
        match error {
            WeatherApiError::NotFound => WeatherError::NotFound,
            WeatherApiError::ConnectionFailed(msg) | WeatherApiError::RequestFailed(msg) => {
                WeatherError::RequestFailed(msg)
            },
            WeatherApiError::ParseError(msg) => WeatherError::ParseError(msg),
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherApiAdapter {
    #[instrument(skip(self), fields(city = %city))]
    async fn fetch_weather(&self, city: &str) -> Result<WeatherReading, WeatherError> {
        let conditions = self
            .client
            .current(city)
            .await
            .map_err(Self::convert_error)?;

        debug!(temp_c = conditions.temp_c, "Fetched current conditions");
        Ok(WeatherReading {
            temp_c: conditions.temp_c,
            temp_f: conditions.temp_f,
            temp_k: conditions.temp_k,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use integration_weatherapi::WeatherApiConfig;
    use secrecy::SecretString;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn adapter_for(mock_server: &MockServer) -> WeatherApiAdapter {
        let config = WeatherApiConfig {
            base_url: mock_server.uri(),
            api_key: SecretString::from("test-token".to_string()),
            timeout_secs: 5,
        };
        let client = WeatherApiClient::new(config).expect("client creation should succeed");
        WeatherApiAdapter::new(client)
    }

    #[test]
    fn not_found_maps_to_not_found() {
        let mapped = WeatherApiAdapter::convert_error(WeatherApiError::NotFound);
        assert!(matches!(mapped, WeatherError::NotFound));
    }

    #[test]
    fn transport_failures_map_to_request_failed() {
        let mapped =
            WeatherApiAdapter::convert_error(WeatherApiError::RequestFailed("timeout".into()));
        assert!(matches!(mapped, WeatherError::RequestFailed(_)));

        let mapped =
            WeatherApiAdapter::convert_error(WeatherApiError::ConnectionFailed("refused".into()));
        assert!(matches!(mapped, WeatherError::RequestFailed(_)));
    }

    #[test]
    fn decode_failures_map_to_parse_error() {
        let mapped =
            WeatherApiAdapter::convert_error(WeatherApiError::ParseError("bad json".into()));
        assert!(matches!(mapped, WeatherError::ParseError(_)));
    }

    #[tokio::test]
    async fn fetches_reading_with_derived_kelvin() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/current.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "location": {"name": "Sao Paulo"},
                "current": {"temp_c": 20.0, "temp_f": 68.0}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let reading = adapter
            .fetch_weather("Sao Paulo")
            .await
            .expect("lookup should succeed");

        assert!((reading.temp_c - 20.0).abs() < f64::EPSILON);
        assert!((reading.temp_f - 68.0).abs() < f64::EPSILON);
        assert!((reading.temp_k - 293.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn upstream_error_status_yields_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/current.json"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {"code": 1006, "message": "No matching location found."}
            })))
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let result = adapter.fetch_weather("Nowhere").await;

        assert!(matches!(result, Err(WeatherError::NotFound)));
    }
}
