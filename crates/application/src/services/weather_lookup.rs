//! Weather lookup use case
//!
//! The orchestrating pipeline: validate the postal code, resolve it to a
//! location, resolve the location to weather, assemble the report. Each
//! stage depends on the previous stage's output, so execution is strictly
//! sequential and any failure short-circuits the chain.

use std::sync::Arc;

use domain::Cep;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{LocationPort, WeatherPort},
};

/// Final output of a weather lookup: place name plus three temperature
/// readings. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Resolved city name
    pub city: String,
    /// Temperature in degrees Celsius
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    /// Temperature in degrees Fahrenheit
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    /// Temperature in Kelvin
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

/// Use case chaining the location and weather resolvers
///
/// Port failures collapse per stage into a single outward error kind:
/// a transport failure and an upstream "not found" surface identically.
/// The underlying cause is logged before the collapse so traces keep the
/// distinction even though callers do not see it.
pub struct WeatherLookupService {
    location: Arc<dyn LocationPort>,
    weather: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for WeatherLookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherLookupService").finish_non_exhaustive()
    }
}

impl WeatherLookupService {
    /// Create a new lookup service over the given resolvers
    pub fn new(location: Arc<dyn LocationPort>, weather: Arc<dyn WeatherPort>) -> Self {
        Self { location, weather }
    }

    /// Resolve a raw postal code string to a weather report
    ///
    /// Stages run in order; dropping the returned future aborts any
    /// in-flight upstream call.
    #[instrument(skip(self), fields(cep = %raw_cep))]
    pub async fn search(&self, raw_cep: &str) -> Result<WeatherReport, ApplicationError> {
        let cep = Cep::new(raw_cep).map_err(|e| {
            warn!(error = %e, "CEP validation failed");
            ApplicationError::InvalidCep
        })?;

        let location = self
            .location
            .resolve_location(&cep)
            .await
            .map_err(|e| {
                warn!(error = %e, "location resolution failed");
                ApplicationError::CepNotFound
            })?;

        debug!(city = %location.city, "location resolved");

        let reading = self
            .weather
            .fetch_weather(&location.city)
            .await
            .map_err(|e| {
                warn!(error = %e, city = %location.city, "weather resolution failed");
                ApplicationError::WeatherNotFound
            })?;

        Ok(WeatherReport {
            city: location.city,
            temp_c: reading.temp_c,
            temp_f: reading.temp_f,
            temp_k: reading.temp_k,
        })
    }
}
