//! Location query normalization
//!
//! WeatherAPI rejects lookup keys with spaces or accented characters, so
//! place names are normalized before being embedded in the query string:
//! spaces become underscores and non-ASCII characters are transliterated
//! to their closest ASCII equivalents.

use deunicode::deunicode;

/// Normalize a place name for safe inclusion in an upstream query
///
/// ```
/// use integration_weatherapi::normalize_location_query;
///
/// assert_eq!(normalize_location_query("São Paulo"), "Sao_Paulo");
/// ```
#[must_use]
pub fn normalize_location_query(location: &str) -> String {
    deunicode(&location.replace(' ', "_"))
}
