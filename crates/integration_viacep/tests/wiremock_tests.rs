//! Integration tests for the ViaCEP client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of the various response scenarios.

use integration_viacep::{CepLookup, ViaCepClient, ViaCepConfig, ViaCepError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Sample ViaCEP response for a known CEP
fn sample_address_response() -> serde_json::Value {
    serde_json::json!({
        "cep": "01310-930",
        "logradouro": "Avenida Paulista",
        "complemento": "2100",
        "bairro": "Bela Vista",
        "localidade": "São Paulo",
        "uf": "SP",
        "ibge": "3550308",
        "gia": "1004",
        "ddd": "11",
        "siafi": "7107"
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> ViaCepClient {
    let config = ViaCepConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    ViaCepClient::new(config).expect("Failed to create client")
}

#[tokio::test]
async fn test_lookup_known_cep_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/01310930/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_address_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.lookup("01310930").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let address = result.unwrap();
    assert_eq!(address.localidade, "São Paulo");
    assert_eq!(address.uf, "SP");
}

#[tokio::test]
async fn test_unknown_cep_error_flag_maps_to_not_found() {
    let mock_server = MockServer::start().await;

    // ViaCEP answers 200 with an error flag for well-formed unknown CEPs
    Mock::given(method("GET"))
        .and(path("/99999999/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"erro": true})))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.lookup("99999999").await;

    assert!(
        matches!(result, Err(ViaCepError::NotFound)),
        "Expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn test_bad_status_maps_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/01310930/json/"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.lookup("01310930").await;

    assert!(
        matches!(result, Err(ViaCepError::NotFound)),
        "Expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn test_server_error_maps_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/01310930/json/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.lookup("01310930").await;

    // Transport-level bad status is indistinguishable from unknown CEP
    assert!(
        matches!(result, Err(ViaCepError::NotFound)),
        "Expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response_maps_to_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/01310930/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.lookup("01310930").await;

    assert!(
        matches!(result, Err(ViaCepError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unreachable_server_maps_to_request_failed() {
    // Point at a server that was shut down. `MockServer::start()` hands out
    // pooled servers that stay alive after drop, so use a non-pooled one.
    let mock_server = MockServer::builder().start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let config = ViaCepConfig {
        base_url: uri,
        timeout_secs: 1,
    };
    #[allow(clippy::expect_used)]
    let client = ViaCepClient::new(config).expect("Failed to create client");
    let result = client.lookup("01310930").await;

    assert!(
        matches!(result, Err(ViaCepError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}
