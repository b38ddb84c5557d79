//! Value objects for the CepWeather domain

mod cep;

pub use cep::Cep;
