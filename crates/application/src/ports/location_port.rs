//! Location resolution port
//!
//! Maps a postal code to a place name via an external lookup service.
//! A single failed attempt is final: no retries happen at this layer or
//! below it.

use async_trait::async_trait;
use domain::Cep;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A place resolved from a postal code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Human-readable city name, used as the weather lookup key
    pub city: String,
}

/// Failures a location resolver can report
///
/// `NotFound` covers both a non-success upstream status and an explicit
/// not-found flag in the response body; the resolver does not distinguish
/// "upstream says invalid" from "upstream unreachable with bad status".
#[derive(Debug, Error)]
pub enum LocationError {
    /// Upstream reported the postal code as unknown, or answered with a
    /// non-success status
    #[error("location not found")]
    NotFound,

    /// The outbound request could not be completed
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The response body could not be decoded
    #[error("parse error: {0}")]
    ParseError(String),
}

/// Resolves a validated postal code to a location
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationPort: Send + Sync {
    /// Issue a single outbound lookup keyed by the postal code
    async fn resolve_location(&self, cep: &Cep) -> Result<Location, LocationError>;
}
