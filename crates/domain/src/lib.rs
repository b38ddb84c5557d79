//! Domain layer for CepWeather
//!
//! Contains core business types, value objects, and domain errors.
//! This layer has no external dependencies and defines the ubiquitous language.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
