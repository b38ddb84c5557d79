//! Port definitions for the application layer
//!
//! Ports are interfaces that define how the use case reaches its upstream
//! resolvers. Adapters in the infrastructure layer implement these ports,
//! and tests substitute doubles without network access.

mod location_port;
mod weather_port;

#[cfg(test)]
pub use location_port::MockLocationPort;
pub use location_port::{Location, LocationError, LocationPort};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::{WeatherError, WeatherPort, WeatherReading};
