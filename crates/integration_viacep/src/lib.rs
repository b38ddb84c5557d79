//! ViaCEP postal code integration
//!
//! Client for the ViaCEP API (<https://viacep.com.br>). Resolves a
//! Brazilian CEP to address data without requiring an API key.

pub mod client;
mod models;

pub use client::{CepLookup, ViaCepClient, ViaCepConfig, ViaCepError};
pub use models::ViaCepResponse;
