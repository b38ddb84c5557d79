//! ViaCEP lookup client
//!
//! HTTP client for the ViaCEP postal code API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::ViaCepResponse;

/// ViaCEP client errors
#[derive(Debug, Error)]
pub enum ViaCepError {
    /// Connection to the lookup service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The service answered with a non-success status, or flagged the
    /// CEP as unknown in the response body
    #[error("CEP not found")]
    NotFound,

    /// Request to the lookup service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the lookup service
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// ViaCEP service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViaCepConfig {
    /// ViaCEP API base URL (default: <https://viacep.com.br/ws>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://viacep.com.br/ws".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for ViaCepConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// CEP lookup trait for resolving postal codes to address data
#[async_trait]
pub trait CepLookup: Send + Sync {
    /// Look up a CEP (8 digits, pre-validated by the caller)
    ///
    /// A single attempt; failures are final.
    async fn lookup(&self, cep: &str) -> Result<ViaCepResponse, ViaCepError>;
}

/// ViaCEP HTTP client implementation
#[derive(Debug)]
pub struct ViaCepClient {
    client: Client,
    config: ViaCepConfig,
}

impl ViaCepClient {
    /// Create a new ViaCEP client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ViaCepConfig) -> Result<Self, ViaCepError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ViaCepError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, ViaCepError> {
        Self::new(ViaCepConfig::default())
    }

    fn build_lookup_url(&self, cep: &str) -> String {
        format!("{}/{}/json/", self.config.base_url.trim_end_matches('/'), cep)
    }
}

#[async_trait]
impl CepLookup for ViaCepClient {
    #[instrument(skip(self), fields(cep = %cep))]
    async fn lookup(&self, cep: &str) -> Result<ViaCepResponse, ViaCepError> {
        let url = self.build_lookup_url(cep);
        debug!(url = %url, "Fetching address data");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ViaCepError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, "ViaCEP answered with non-success status");
            return Err(ViaCepError::NotFound);
        }

        let body: ViaCepResponse = response
            .json()
            .await
            .map_err(|e| ViaCepError::ParseError(e.to_string()))?;

        if body.erro {
            debug!("ViaCEP flagged the CEP as unknown");
            return Err(ViaCepError::NotFound);
        }

        Ok(body)
    }
}
