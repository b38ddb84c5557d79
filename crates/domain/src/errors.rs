//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Postal code failed structural validation
    #[error("Invalid CEP: {0}")]
    InvalidCep(String),
}
