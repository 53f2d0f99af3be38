//! Card header labels: the place name and the wall clock.

use chrono::NaiveDateTime;
use serde::Deserialize;

/// Address fields from a Nominatim reverse lookup.
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
pub struct Address {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub suburb: Option<String>,
    pub state_district: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReverseResp {
    #[serde(default)]
    pub address: Option<Address>,
}

/// Coordinates with four decimals, used whenever no name is available.
pub fn coordinate_label(lat: f64, lon: f64) -> String {
    format!("{lat:.4}, {lon:.4}")
}

/// Pick the most specific place name an address offers.
pub fn place_label(address: &Address, lat: f64, lon: f64) -> String {
    let city = non_empty(&address.city)
        .or_else(|| non_empty(&address.town))
        .or_else(|| non_empty(&address.village))
        .or_else(|| non_empty(&address.suburb))
        .or_else(|| non_empty(&address.state_district));
    let state = non_empty(&address.state);
    let country = non_empty(&address.country);

    match (city, state, country) {
        (Some(city), _, Some(country)) => format!("{city}, {country}"),
        (_, Some(state), Some(country)) => format!("{state}, {country}"),
        (_, _, Some(country)) => country.to_string(),
        _ => coordinate_label(lat, lon),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// `hh:mm:ss AM` clock shown next to the place name.
pub fn clock_label(now: NaiveDateTime) -> String {
    now.format("%I:%M:%S %p").to_string()
}
