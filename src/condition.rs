//! Weather condition lookup.
//!
//! A WMO weather code maps to a fixed description and icon. When the code is
//! missing or not in the table, the condition is derived from the Celsius
//! temperature instead.

use serde::Serialize;

/// Display description and icon glyph for a weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub description: &'static str,
    pub icon: &'static str,
}

impl Condition {
    const fn new(description: &'static str, icon: &'static str) -> Self {
        Self { description, icon }
    }
}

/// Returned when neither a code nor a temperature is available.
pub const UNKNOWN: Condition = Condition::new("Unknown", "❓");

/// Look up a WMO weather code.
/// See: https://open-meteo.com/en/docs#weathervariables
pub fn from_wmo_code(code: i32) -> Option<Condition> {
    let (description, icon) = match code {
        0 => ("Clear sky", "☀️"),
        1 => ("Mainly clear", "🌤️"),
        2 => ("Partly cloudy", "⛅"),
        3 => ("Overcast", "☁️"),
        4 => ("Cloudy", "☁️"),
        45 => ("Fog", "🌫️"),
        48 => ("Depositing rime fog", "🌫️"),
        51 => ("Light drizzle", "🌦️"),
        53 => ("Moderate drizzle", "🌧️"),
        55 => ("Dense drizzle", "🌧️"),
        56 => ("Light Freezing Drizzle", "🌨️"),
        57 => ("Dense Freezing Drizzle", "🌨️"),
        61 => ("Slight Rain", "☔"),
        63 => ("Moderate Rain", "🌧️"),
        65 => ("Heavy Rain", "⛈️"),
        66 => ("Light Freezing Rain", "🌧️"),
        67 => ("Heavy Freezing Rain", "🌧️"),
        71 => ("Slight Snow Fall", "🌨️"),
        73 => ("Moderate Snow Fall", "❄️"),
        75 => ("Heavy Snow Fall", "🥶"),
        77 => ("Snow Grains", "🌨️"),
        80 => ("Rain Showers", "🌧️"),
        81 => ("Heavy Rain Showers", "⛈️"),
        82 => ("Violent Rain Showers", "⚡"),
        85 => ("Slight Snow Showers", "🌨️"),
        86 => ("Heavy Snow Showers", "🌨️"),
        95 => ("Thunderstorm", "🌩️"),
        96 => ("Thunderstorm with Slight Hail", "⛈️"),
        99 => ("Thunderstorm with Heavy Hail", "🌪️"),
        _ => return None,
    };
    Some(Condition::new(description, icon))
}

/// Temperature bands, hottest first. Lower bounds are inclusive except for
/// the top band, which starts strictly above 35.
pub fn from_temperature(temp_c: f64) -> Condition {
    if temp_c > 35.0 {
        Condition::new("Very Hot Weather", "🔥")
    } else if temp_c >= 28.0 {
        Condition::new("Warm & Pleasant Weather", "☀️")
    } else if temp_c >= 20.0 {
        Condition::new("Mild Weather", "🌡️")
    } else if temp_c >= 10.0 {
        Condition::new("Cool Weather", "🧥")
    } else if temp_c >= 0.0 {
        Condition::new("Chilly Weather", "❄️")
    } else {
        Condition::new("Freezing Cold", "🧊")
    }
}

/// Resolve a condition. A known code always wins over the temperature.
pub fn classify_condition(code: Option<i32>, temperature_c: Option<f64>) -> Condition {
    if let Some(found) = code.and_then(from_wmo_code) {
        return found;
    }
    match temperature_c {
        Some(t) if t.is_finite() => from_temperature(t),
        _ => UNKNOWN,
    }
}
