//! Location adapter - implements `LocationPort` using `integration_viacep`

use application::ports::{Location, LocationError, LocationPort};
use async_trait::async_trait;
use domain::Cep;
use integration_viacep::{CepLookup, ViaCepClient, ViaCepError};
use tracing::{debug, instrument};

/// Adapter resolving postal codes to cities through ViaCEP
#[derive(Debug)]
pub struct ViaCepLocationAdapter {
    client: ViaCepClient,
}

impl ViaCepLocationAdapter {
    /// Create a new adapter wrapping the given client
    #[must_use]
    pub const fn new(client: ViaCepClient) -> Self {
        Self { client }
    }

    fn convert_error(error: ViaCepError) -> LocationError {
        match error {
            ViaCepError::NotFound => LocationError::NotFound,
            ViaCepError::ConnectionFailed(msg) | ViaCepError::RequestFailed(msg) => {
                LocationError::RequestFailed(msg)
            },
            ViaCepError::ParseError(msg) => LocationError::ParseError(msg),
        }
    }
}

#[async_trait]
impl LocationPort for ViaCepLocationAdapter {
    #[instrument(skip(self), fields(cep = %cep))]
    async fn resolve_location(&self, cep: &Cep) -> Result<Location, LocationError> {
        let response = self
            .client
            .lookup(cep.as_str())
            .await
            .map_err(Self::convert_error)?;

        debug!(city = %response.localidade, "Resolved CEP to city");
        Ok(Location {
            city: response.localidade,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use integration_viacep::ViaCepConfig;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn adapter_for(mock_server: &MockServer) -> ViaCepLocationAdapter {
        let config = ViaCepConfig {
            base_url: mock_server.uri(),
            timeout_secs: 5,
        };
        let client = ViaCepClient::new(config).expect("client creation should succeed");
        ViaCepLocationAdapter::new(client)
    }

    fn cep(raw: &str) -> Cep {
        Cep::new(raw).expect("valid test CEP")
    }

    #[test]
    fn not_found_maps_to_not_found() {
        let mapped = ViaCepLocationAdapter::convert_error(ViaCepError::NotFound);
        assert!(matches!(mapped, LocationError::NotFound));
    }

    #[test]
    fn transport_failures_map_to_request_failed() {
        let mapped =
            ViaCepLocationAdapter::convert_error(ViaCepError::RequestFailed("timeout".into()));
        assert!(matches!(mapped, LocationError::RequestFailed(_)));

        let mapped =
            ViaCepLocationAdapter::convert_error(ViaCepError::ConnectionFailed("refused".into()));
        assert!(matches!(mapped, LocationError::RequestFailed(_)));
    }

    #[test]
    fn decode_failures_map_to_parse_error() {
        let mapped =
            ViaCepLocationAdapter::convert_error(ViaCepError::ParseError("bad json".into()));
        assert!(matches!(mapped, LocationError::ParseError(_)));
    }

    #[tokio::test]
    async fn resolves_city_from_lookup_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/01310930/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "cep": "01310-930",
                "logradouro": "Avenida Paulista",
                "bairro": "Bela Vista",
                "localidade": "São Paulo",
                "uf": "SP"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let location = adapter.resolve_location(&cep("01310930")).await;

        assert_eq!(
            location.expect("lookup should succeed"),
            Location {
                city: "São Paulo".to_string()
            }
        );
    }

    #[tokio::test]
    async fn unknown_cep_yields_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/99999999/json/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"erro": true})),
            )
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let result = adapter.resolve_location(&cep("99999999")).await;

        assert!(matches!(result, Err(LocationError::NotFound)));
    }
}
