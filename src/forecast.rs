//! Forecast resolution: raw payload in, display-ready card out.
//!
//! Everything here is pure. Classification always sees Celsius; the unit
//! preference is applied only when a number is formatted for display.

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::condition::{self, Condition};
use crate::payload::{DailySeries, HourlySeries, WeatherPayload};
use crate::units::UnitPreference;

/// Maximum number of entries in the hourly window.
pub const HOURLY_WINDOW: usize = 24;

/// Default number of days in the daily summary (today excluded).
pub const DEFAULT_SUMMARY_DAYS: usize = 5;

/// Caller-owned display preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub unit: UnitPreference,
    pub summary_days: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            unit: UnitPreference::default(),
            summary_days: DEFAULT_SUMMARY_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyEntry {
    pub display_time: String,
    pub temp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyEntry {
    pub weekday_label: String,
    pub icon: &'static str,
    pub temp_max: i64,
    pub temp_min: i64,
}

/// Everything the weather card renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayForecast {
    pub icon: &'static str,
    pub description: &'static str,
    pub current_temp: i64,
    pub unit: UnitPreference,
    pub hourly: Vec<HourlyEntry>,
    pub daily: Vec<DailyEntry>,
}

/// Resolve a payload against the caller's clock and preferences.
pub fn resolve(
    payload: &WeatherPayload,
    now: NaiveDateTime,
    options: &DisplayOptions,
) -> DisplayForecast {
    let snapshot = payload.snapshot();
    let current_c = snapshot.temperature_celsius.unwrap_or(0.0);
    let Condition { description, icon } =
        condition::classify_condition(snapshot.weather_code, Some(current_c));

    DisplayForecast {
        icon,
        description,
        current_temp: options.unit.display(current_c),
        unit: options.unit,
        hourly: build_hourly_window(&payload.hourly_series(), now, options.unit),
        daily: build_daily_summary(&payload.daily_series(), options.unit, options.summary_days),
    }
}

/// Up to 24 hourly entries starting at the sample for the current hour of
/// the current day, or at the first sample when no timestamp matches.
/// Samples inside the window with a missing temperature are skipped.
pub fn build_hourly_window(
    series: &HourlySeries,
    now: NaiveDateTime,
    unit: UnitPreference,
) -> Vec<HourlyEntry> {
    let len = series.len();
    let start = series.time[..len]
        .iter()
        .position(|t| matches!(t, Some(t) if t.date() == now.date() && t.hour() == now.hour()))
        .unwrap_or(0);

    (start..len)
        .take(HOURLY_WINDOW)
        .filter_map(|i| series.sample(i))
        .map(|(time, temp)| HourlyEntry {
            display_time: hour_label(time.hour()),
            temp: unit.display(temp),
        })
        .collect()
}

/// Summary of the `days` days after today, in series order. Days inside
/// that range without a usable row are skipped.
pub fn build_daily_summary(
    series: &DailySeries,
    unit: UnitPreference,
    days: usize,
) -> Vec<DailyEntry> {
    (1..series.len())
        .take(days)
        .filter_map(|i| series.row(i))
        .map(|row| {
            let condition = condition::classify_condition(row.weather_code, Some(row.temp_max));
            DailyEntry {
                weekday_label: row.date.format("%a").to_string(),
                icon: condition.icon,
                temp_max: unit.display(row.temp_max),
                temp_min: unit.display(row.temp_min),
            }
        })
        .collect()
}

/// 12-hour label with a single-letter meridiem: 0 -> "12a", 14 -> "2p".
pub fn hour_label(hour: u32) -> String {
    let meridiem = if hour < 12 { 'a' } else { 'p' };
    let twelve = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{twelve}{meridiem}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_labels() {
        assert_eq!(hour_label(0), "12a");
        assert_eq!(hour_label(1), "1a");
        assert_eq!(hour_label(11), "11a");
        assert_eq!(hour_label(12), "12p");
        assert_eq!(hour_label(14), "2p");
        assert_eq!(hour_label(23), "11p");
    }

    #[test]
    fn empty_payload_resolves_to_defaults() {
        let now = NaiveDateTime::parse_from_str("2025-01-01T09:30", "%Y-%m-%dT%H:%M").unwrap();
        let card = resolve(&WeatherPayload::default(), now, &DisplayOptions::default());
        assert_eq!(card.current_temp, 0);
        assert_eq!(card.description, "Chilly Weather");
        assert!(card.hourly.is_empty());
        assert!(card.daily.is_empty());
    }
}
