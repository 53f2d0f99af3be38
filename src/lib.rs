//! Forecast Card
//!
//! Core library for turning an Open‑Meteo forecast into a display-ready
//! weather card: current conditions with a description and icon, the next
//! 24 hours starting at the current hour, and a short daily summary.
//!
//! The resolver in [`forecast`] is pure and never fails. The binary crate
//! fetches data via [`client`], optionally pulls headlines via [`news`],
//! and calls `run`.

pub mod client;
pub mod condition;
pub mod config;
pub mod forecast;
pub mod news;
pub mod payload;
pub mod place;
pub mod render;
pub mod units;

use anyhow::{Context, Result};
use chrono::Local;

pub use condition::{Condition, classify_condition};
pub use config::{Args, NewsSettings, Settings};
pub use forecast::{
    DailyEntry, DisplayForecast, DisplayOptions, HourlyEntry, build_daily_summary,
    build_hourly_window, resolve,
};
pub use news::{NewsCategories, NewsFeed, NewsItem};
pub use payload::{DailySeries, HourlySeries, WeatherPayload, WeatherSnapshot};
pub use units::UnitPreference;

/// Fetch, resolve and print one card.
pub async fn run(settings: &Settings) -> Result<()> {
    let client = client::http_client()?;
    let (lat, lon) = (settings.latitude, settings.longitude);

    let payload = client::fetch_forecast(&client, &settings.forecast_base, lat, lon).await?;
    let place = if settings.geocode {
        client::fetch_place_name(&client, &settings.geocode_base, lat, lon).await
    } else {
        place::coordinate_label(lat, lon)
    };

    let now = Local::now().naive_local();
    let card = resolve(&payload, now, &settings.display);

    // headlines are a side panel; a failed fetch must not hide the weather
    let headlines = match &settings.news {
        Some(news) => match fetch_headlines(&client, news).await {
            Ok(items) => Some(Ok(items)),
            Err(e) => {
                tracing::warn!("failed to fetch news: {e:#}");
                Some(Err(e))
            }
        },
        None => None,
    };

    if settings.json {
        let news = match &headlines {
            Some(Ok(items)) => serde_json::to_value(items).context("failed to serialize headlines")?,
            _ => serde_json::Value::Null,
        };
        let out = serde_json::json!({ "place": place, "weather": card, "news": news });
        let out = serde_json::to_string_pretty(&out).context("failed to serialize card")?;
        println!("{out}");
    } else {
        let header = format!("{place}  {}", place::clock_label(now));
        print!("{}", render::render_card(&header, &card));
        match &headlines {
            Some(Ok(items)) => print!("\n{}", news::render_headlines(items)),
            Some(Err(_)) => println!("\nFailed to fetch news. Please check your API key or network connection."),
            None => {}
        }
    }
    Ok(())
}

async fn fetch_headlines(client: &reqwest::Client, news: &NewsSettings) -> Result<Vec<NewsItem>> {
    let mut feed = NewsFeed::new(client, &news.base, &news.api_key, &news.categories);
    feed.collect(news.pages).await
}
