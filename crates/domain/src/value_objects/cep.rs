//! CEP value object with structural validation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated Brazilian postal code (CEP): exactly 8 decimal digits,
/// no separators, no whitespace (e.g. "01310930").
///
/// Validation is purely structural; a well-formed CEP may still not
/// exist upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cep {
    value: String,
}

impl Cep {
    /// Create a new CEP, validating the 8-digit format
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let value = code.into();

        if value.is_empty() {
            return Err(DomainError::InvalidCep("empty zipcode".to_string()));
        }

        if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidCep(
                "invalid zipcode format".to_string(),
            ));
        }

        Ok(Self { value })
    }

    /// Get the CEP as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for Cep {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Cep {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
