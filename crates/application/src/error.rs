//! Application-level errors
//!
//! The outward taxonomy is deliberately small: each pipeline stage maps
//! every internal failure to exactly one of these kinds. Error messages
//! double as the wire-level error bodies, so they must stay stable.

use thiserror::Error;

/// Errors that can surface from the weather lookup use case
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    /// Postal code failed structural validation
    #[error("invalid zipcode")]
    InvalidCep,

    /// Location lookup failed or the upstream flagged the CEP as unknown
    #[error("can not find zipcode")]
    CepNotFound,

    /// Weather lookup failed for the resolved location
    #[error("can not find weather")]
    WeatherNotFound,
}
