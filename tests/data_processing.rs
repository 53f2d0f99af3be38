//! Payload decoding tests (no network)
//! - missing and malformed blocks degrade to empty series
//! - mismatched array lengths are truncated
//! - unusable samples keep their slot so indices match the provider
//! - both weather code spellings are accepted

use chrono::{NaiveDate, NaiveDateTime};
use forecast_card::WeatherPayload;

#[test]
fn empty_object_has_no_blocks() {
    let payload = WeatherPayload::from_value(&serde_json::json!({}));
    assert_eq!(payload, WeatherPayload::default());
    assert!(payload.hourly_series().is_empty());
    assert!(payload.daily_series().is_empty());
    assert_eq!(payload.snapshot().temperature_celsius, None);
}

#[test]
fn malformed_block_does_not_poison_others() {
    let payload = WeatherPayload::from_value(&serde_json::json!({
        "current_weather": { "temperature": 21.4, "weather_code": 2 },
        "hourly": "not an object",
        "daily": { "time": 7 }
    }));
    assert!(payload.hourly.is_none());
    assert!(payload.daily.is_none());
    let snap = payload.snapshot();
    assert_eq!(snap.temperature_celsius, Some(21.4));
    assert_eq!(snap.weather_code, Some(2));
}

#[test]
fn legacy_weathercode_spelling() {
    let payload = WeatherPayload::from_value(&serde_json::json!({
        "current_weather": { "temperature": 3.0, "weathercode": 71 },
        "daily": {
            "time": ["2025-01-01"],
            "weathercode": [3],
            "temperature_2m_max": [4.0],
            "temperature_2m_min": [-1.0]
        }
    }));
    assert_eq!(payload.snapshot().weather_code, Some(71));
    assert_eq!(payload.daily_series().weather_code, vec![Some(3)]);
}

#[test]
fn hourly_mismatched_lengths_truncate() {
    let payload = WeatherPayload::from_value(&serde_json::json!({
        "hourly": {
            "time": ["2025-01-01T00:00", "2025-01-01T01:00", "2025-01-01T02:00"],
            "temperature_2m": [1.0, 2.0]
        }
    }));
    let series = payload.hourly_series();
    assert_eq!(series.len(), 2);
    assert_eq!(
        series.time[1],
        Some(NaiveDateTime::parse_from_str("2025-01-01T01:00", "%Y-%m-%dT%H:%M").unwrap())
    );
}

#[test]
fn hourly_keeps_slots_for_unusable_samples() {
    let payload = WeatherPayload::from_value(&serde_json::json!({
        "hourly": {
            "time": ["2025-01-01T00:00", "garbage", "2025-01-01T02:00:00", "2025-01-01T03:00"],
            "temperature_2m": [1.0, 2.0, 3.0, null]
        }
    }));
    let series = payload.hourly_series();
    assert_eq!(series.len(), 4);
    assert_eq!(series.time[1], None);
    assert_eq!(series.temperature, vec![Some(1.0), Some(2.0), Some(3.0), None]);
    assert!(series.sample(1).is_none());
    assert!(series.sample(3).is_none());
    assert_eq!(series.sample(2).map(|(_, t)| t), Some(3.0));
}

#[test]
fn daily_rows_stay_aligned() {
    let payload = WeatherPayload::from_value(&serde_json::json!({
        "daily": {
            "time": ["2025-01-01", "2025-01-02", "2025-01-03"],
            "weather_code": [0],
            "temperature_2m_max": [10.0, 11.0, null],
            "temperature_2m_min": [1.0, 2.0, 3.0]
        }
    }));
    let series = payload.daily_series();
    assert_eq!(series.len(), 3);
    assert_eq!(series.weather_code, vec![Some(0), None, None]);
    assert_eq!(series.date[1], Some(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()));
    assert!(series.row(2).is_none());
    assert_eq!(series.row(1).map(|r| r.temp_max), Some(11.0));
}

#[test]
fn daily_bad_first_row_is_still_today() {
    let payload = WeatherPayload::from_value(&serde_json::json!({
        "daily": {
            "time": ["not-a-date", "2025-01-02"],
            "weather_code": [0, 1],
            "temperature_2m_max": [10.0, 11.0],
            "temperature_2m_min": [1.0, 2.0]
        }
    }));
    let series = payload.daily_series();
    assert_eq!(series.len(), 2);
    assert!(series.row(0).is_none());
    assert_eq!(series.row(1).map(|r| r.weather_code), Some(Some(1)));
}
