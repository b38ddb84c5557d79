//! Port implementations backed by the integration clients

mod location;
mod weather;

pub use location::ViaCepLocationAdapter;
pub use weather::WeatherApiAdapter;
