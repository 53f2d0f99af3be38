//! Open-Meteo forecast payload.
//!
//! Every block is optional and decoded on its own, so a malformed `hourly`
//! block never takes `daily` or `current_weather` down with it.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct CurrentWeather {
    #[serde(default)]
    pub temperature: Option<f64>,
    // The forecast endpoint has used both spellings.
    #[serde(default, alias = "weathercode")]
    pub weather_code: Option<i32>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct HourlyBlock {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct DailyBlock {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default, alias = "weathercode")]
    pub weather_code: Vec<Option<i32>>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
}

/// Raw forecast response with every field optional.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WeatherPayload {
    pub current_weather: Option<CurrentWeather>,
    pub hourly: Option<HourlyBlock>,
    pub daily: Option<DailyBlock>,
}

impl WeatherPayload {
    /// Decode a JSON value. Blocks that are absent or have the wrong shape
    /// become `None`; this never fails.
    pub fn from_value(value: &Value) -> Self {
        Self {
            current_weather: block(value, "current_weather"),
            hourly: block(value, "hourly"),
            daily: block(value, "daily"),
        }
    }

    /// The `current_weather` block as a snapshot (empty when absent).
    pub fn snapshot(&self) -> WeatherSnapshot {
        let current = self.current_weather.clone().unwrap_or_default();
        WeatherSnapshot {
            temperature_celsius: current.temperature,
            weather_code: current.weather_code,
        }
    }

    pub fn hourly_series(&self) -> HourlySeries {
        self.hourly
            .as_ref()
            .map(HourlySeries::from_block)
            .unwrap_or_default()
    }

    pub fn daily_series(&self) -> DailySeries {
        self.daily
            .as_ref()
            .map(DailySeries::from_block)
            .unwrap_or_default()
    }
}

fn block<T: DeserializeOwned>(value: &Value, key: &str) -> Option<T> {
    let raw = value.get(key)?;
    match serde_json::from_value(raw.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::debug!("ignoring malformed '{key}' block: {e}");
            None
        }
    }
}

/// Current conditions as reported by the provider. Celsius.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature_celsius: Option<f64>,
    pub weather_code: Option<i32>,
}

/// Hourly samples, index-aligned with the provider's arrays. Celsius.
///
/// A sample keeps its slot even when its timestamp or temperature is
/// unusable, so "the current hour" is found against the provider's own
/// timeline.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HourlySeries {
    pub time: Vec<Option<NaiveDateTime>>,
    pub temperature: Vec<Option<f64>>,
}

impl HourlySeries {
    /// Pair timestamps with temperatures. Extra entries in the longer array
    /// are ignored.
    pub fn from_block(raw: &HourlyBlock) -> Self {
        let mut series = Self::default();
        for (stamp, temp) in raw.time.iter().zip(&raw.temperature_2m) {
            let time = parse_timestamp(stamp);
            if time.is_none() {
                tracing::debug!("unparseable hourly timestamp '{stamp}'");
            }
            series.time.push(time);
            series.temperature.push(*temp);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.time.len().min(self.temperature.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sample at `i` when both its timestamp and temperature are known.
    pub fn sample(&self, i: usize) -> Option<(NaiveDateTime, f64)> {
        Some((*self.time.get(i)?.as_ref()?, *self.temperature.get(i)?.as_ref()?))
    }
}

/// A complete daily row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub weather_code: Option<i32>,
    pub temp_max: f64,
    pub temp_min: f64,
}

/// Daily rows, index-aligned with the provider's arrays; index 0 is today
/// whether or not its row is usable. Celsius.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DailySeries {
    pub date: Vec<Option<NaiveDate>>,
    pub weather_code: Vec<Option<i32>>,
    pub temp_max: Vec<Option<f64>>,
    pub temp_min: Vec<Option<f64>>,
}

impl DailySeries {
    /// Build from the raw block. A short `weather_code` array yields `None`
    /// codes; extra entries in the longer arrays are ignored.
    pub fn from_block(raw: &DailyBlock) -> Self {
        let mut series = Self::default();
        let rows = raw
            .time
            .iter()
            .zip(&raw.temperature_2m_max)
            .zip(&raw.temperature_2m_min)
            .enumerate();
        for (i, ((stamp, tmax), tmin)) in rows {
            let date = NaiveDate::parse_from_str(stamp, "%Y-%m-%d").ok();
            if date.is_none() {
                tracing::debug!("unparseable daily date '{stamp}'");
            }
            series.date.push(date);
            series.weather_code.push(raw.weather_code.get(i).copied().flatten());
            series.temp_max.push(*tmax);
            series.temp_min.push(*tmin);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.date
            .len()
            .min(self.weather_code.len())
            .min(self.temp_max.len())
            .min(self.temp_min.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The row at `i` when its date, max and min are all known.
    pub fn row(&self, i: usize) -> Option<DailyRow> {
        Some(DailyRow {
            date: (*self.date.get(i)?)?,
            weather_code: *self.weather_code.get(i)?,
            temp_max: (*self.temp_max.get(i)?)?,
            temp_min: (*self.temp_min.get(i)?)?,
        })
    }
}

/// Parse a provider timestamp. Open-Meteo sends local wall-clock time
/// without seconds (`2025-01-01T14:00`); full ISO-8601 forms are accepted
/// too, keeping their local time.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_local())
        })
}
