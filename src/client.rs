//! HTTP access to Open-Meteo and Nominatim.
//!
//! One request per call. Failures surface to the caller; nothing is retried.

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::FORECAST_DAYS;
use crate::payload::WeatherPayload;
use crate::place::{self, ReverseResp};

const REQUEST_TIMEOUT_SECS: u64 = 15;
const USER_AGENT: &str = concat!("forecast-card/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client.
pub fn http_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .context("failed to build HTTP client")
}

/// Fetch current weather, hourly temperatures and the 7-day daily forecast.
pub async fn fetch_forecast(client: &Client, base: &str, lat: f64, lon: f64) -> Result<WeatherPayload> {
    let url = format!(
        "{}/forecast?latitude={}&longitude={}&current_weather=true&hourly={}&daily={}&timezone={}&forecast_days={}",
        base.trim_end_matches('/'),
        lat,
        lon,
        urlencoding::encode("temperature_2m,precipitation"),
        urlencoding::encode("weather_code,temperature_2m_max,temperature_2m_min"),
        "auto",
        FORECAST_DAYS,
    );
    tracing::info!("fetching forecast for {lat},{lon}");

    let body: Value = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("network error: {url}"))?
        .error_for_status()
        .with_context(|| format!("request failed: {url}"))?
        .json()
        .await
        .with_context(|| format!("failed to parse JSON from {url}"))?;

    tracing::debug!("forecast payload: {body}");
    Ok(WeatherPayload::from_value(&body))
}

/// Reverse geocode a coordinate into a display label. Never fails: any
/// error falls back to the coordinates themselves.
pub async fn fetch_place_name(client: &Client, base: &str, lat: f64, lon: f64) -> String {
    match reverse_geocode(client, base, lat, lon).await {
        Ok(resp) => place::place_label(&resp.address.unwrap_or_default(), lat, lon),
        Err(e) => {
            tracing::warn!("reverse geocode failed: {e:#}");
            place::coordinate_label(lat, lon)
        }
    }
}

async fn reverse_geocode(client: &Client, base: &str, lat: f64, lon: f64) -> Result<ReverseResp> {
    let url = format!(
        "{}/reverse?lat={}&lon={}&zoom=10&addressdetails=1&format=json",
        base.trim_end_matches('/'),
        lat,
        lon
    );
    let resp = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("network error: {url}"))?
        .error_for_status()
        .with_context(|| format!("request failed: {url}"))?
        .json::<ReverseResp>()
        .await
        .with_context(|| format!("failed to parse JSON from {url}"))?;
    Ok(resp)
}
