//! WeatherAPI response models
//!
//! Types for the subset of the WeatherAPI current-conditions payload the
//! service consumes.

use serde::Deserialize;

/// Raw current-conditions response from WeatherAPI
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherApiResponse {
    pub location: LocationData,
    pub current: CurrentData,
}

/// Location block of the response
#[derive(Debug, Clone, Deserialize)]
pub struct LocationData {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
    #[serde(default)]
    pub tz_id: String,
    #[serde(default)]
    pub localtime: String,
}

/// Current conditions block of the response
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentData {
    #[serde(default)]
    pub last_updated: String,
    pub temp_c: f64,
    pub temp_f: f64,
    #[serde(default)]
    pub is_day: u8,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default)]
    pub wind_kph: f64,
    #[serde(default)]
    pub humidity: f64,
    #[serde(default)]
    pub cloud: f64,
    #[serde(default)]
    pub feelslike_c: f64,
    #[serde(default)]
    pub uv: f64,
}

/// Weather condition descriptor
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub code: i32,
}
