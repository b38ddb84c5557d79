//! WeatherAPI.com current conditions integration
//!
//! Client for the WeatherAPI current weather endpoint
//! (<https://www.weatherapi.com>). Requires an API key.

pub mod client;
mod models;
mod query;

pub use client::{
    CurrentConditions, CurrentWeatherLookup, WeatherApiClient, WeatherApiConfig, WeatherApiError,
};
pub use models::WeatherApiResponse;
pub use query::normalize_location_query;
