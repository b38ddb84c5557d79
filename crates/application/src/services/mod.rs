//! Application services

mod weather_lookup;

pub use weather_lookup::{WeatherLookupService, WeatherReport};
