//! Temperature units and display rounding.
//!
//! Celsius is the canonical unit everywhere in the crate. Conversion to the
//! user's preferred unit happens once, at the final formatting step.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Freezing point of water in Fahrenheit.
const FAHRENHEIT_OFFSET: f64 = 32.0;

pub fn to_fahrenheit(temp_c: f64) -> f64 {
    temp_c * 9.0 / 5.0 + FAHRENHEIT_OFFSET
}

pub fn to_celsius(temp_f: f64) -> f64 {
    (temp_f - FAHRENHEIT_OFFSET) * 5.0 / 9.0
}

/// User-selected display unit. Owned by the caller and passed in explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitPreference {
    #[default]
    Celsius,
    Fahrenheit,
}

impl UnitPreference {
    /// Convert a Celsius value into this unit without rounding.
    pub fn convert(self, temp_c: f64) -> f64 {
        match self {
            Self::Celsius => temp_c,
            Self::Fahrenheit => to_fahrenheit(temp_c),
        }
    }

    /// Convert a value expressed in this unit back to Celsius, for
    /// reclassifying an already-converted temperature.
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => to_celsius(value),
        }
    }

    /// Convert then round half away from zero. Rounding happens exactly once.
    pub fn display(self, temp_c: f64) -> i64 {
        self.convert(temp_c).round() as i64
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for UnitPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celsius => f.write_str("C"),
            Self::Fahrenheit => f.write_str("F"),
        }
    }
}

impl FromStr for UnitPreference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" => Ok(Self::Celsius),
            "f" | "fahrenheit" => Ok(Self::Fahrenheit),
            other => Err(anyhow::anyhow!(
                "unknown temperature unit '{other}' (expected C or F)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature() {
        assert_eq!(to_celsius(212.0), 100.0);
        assert_eq!(to_celsius(32.0), 0.0);
        assert_eq!(to_fahrenheit(0.0), 32.0);
        assert_eq!(to_fahrenheit(100.0), 212.0);
    }

    #[test]
    fn round_trip_is_close() {
        for x in [-40.0, -17.3, 0.0, 12.25, 36.6, 55.5] {
            assert!((to_celsius(to_fahrenheit(x)) - x).abs() < 1e-9);
        }
    }

    #[test]
    fn display_rounds_after_conversion() {
        // 20.3 C -> 68.54 F -> 69, whereas rounding first would give 68.
        assert_eq!(UnitPreference::Fahrenheit.display(20.3), 69);
        assert_eq!(UnitPreference::Celsius.display(20.5), 21);
        assert_eq!(UnitPreference::Celsius.display(-2.5), -3);
    }

    #[test]
    fn reclassification_goes_back_to_celsius() {
        assert_eq!(UnitPreference::Fahrenheit.to_celsius(86.0), 30.0);
        assert_eq!(UnitPreference::Celsius.to_celsius(30.0), 30.0);
    }

    #[test]
    fn parses_unit_names() {
        assert_eq!("F".parse::<UnitPreference>().unwrap(), UnitPreference::Fahrenheit);
        assert_eq!(" celsius ".parse::<UnitPreference>().unwrap(), UnitPreference::Celsius);
        assert!("kelvin".parse::<UnitPreference>().is_err());
    }
}
