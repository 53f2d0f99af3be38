//! Runtime settings: command-line flags layered over environment variables.

use anyhow::{Result, anyhow};
use clap::Parser;
use std::env;

use crate::forecast::{DEFAULT_SUMMARY_DAYS, DisplayOptions};
use crate::news::NewsCategories;
use crate::units::UnitPreference;

/// Days fetched from the provider, today included.
pub const FORECAST_DAYS: usize = 7;

/// Gets the url for the forecast
pub fn forecast_base() -> String {
    env::var("OPEN_METEO_FORECAST_BASE")
        .unwrap_or_else(|_| "https://api.open-meteo.com/v1".to_string())
}

/// Gets the url for reverse geocoding
pub fn geocode_base() -> String {
    env::var("NOMINATIM_BASE").unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string())
}

/// Gets the url for the headline feed
pub fn news_base() -> String {
    env::var("NEWSDATA_BASE").unwrap_or_else(|_| "https://newsdata.io/api/1".to_string())
}

#[derive(Parser, Debug)]
#[command(version, about = "Current weather, the next 24 hours and the week ahead")]
pub struct Args {
    #[arg(long, allow_hyphen_values = true, help = "Latitude in decimal degrees")]
    pub lat: f64,

    #[arg(long, allow_hyphen_values = true, help = "Longitude in decimal degrees")]
    pub lon: f64,

    #[arg(long, env = "FORECAST_UNIT", default_value = "C", help = "Display unit (C or F)")]
    pub unit: UnitPreference,

    #[arg(long, default_value_t = DEFAULT_SUMMARY_DAYS, help = "Days in the summary (1-6)")]
    pub days: usize,

    #[arg(long, help = "Skip the reverse geocoding lookup")]
    pub no_geocode: bool,

    #[arg(long, help = "Print the resolved card as JSON")]
    pub json: bool,

    #[arg(long, help = "Also list news headlines")]
    pub news: bool,

    #[arg(long = "category", help = "Enabled news category (repeatable, default: all)")]
    pub categories: Vec<String>,

    #[arg(long, default_value_t = 1, help = "Headline pages to load")]
    pub news_pages: usize,

    #[arg(long, env = "NEWSDATA_API_KEY", hide_env_values = true, help = "newsdata.io API key")]
    pub news_api_key: Option<String>,
}

/// Headline feed settings, present only when headlines were requested.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsSettings {
    pub api_key: String,
    pub base: String,
    pub categories: NewsCategories,
    pub pages: usize,
}

/// Validated settings consumed by the library.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub latitude: f64,
    pub longitude: f64,
    pub display: DisplayOptions,
    pub geocode: bool,
    pub json: bool,
    pub forecast_base: String,
    pub geocode_base: String,
    pub news: Option<NewsSettings>,
}

impl Settings {
    pub fn from_args(args: Args) -> Result<Self> {
        if !(-90.0..=90.0).contains(&args.lat) {
            return Err(anyhow!("latitude out of range: {}", args.lat));
        }
        if !(-180.0..=180.0).contains(&args.lon) {
            return Err(anyhow!("longitude out of range: {}", args.lon));
        }
        let max_days = FORECAST_DAYS - 1;
        let summary_days = args.days.clamp(1, max_days);
        if summary_days != args.days {
            tracing::warn!("summary days {} clamped to {summary_days}", args.days);
        }

        let news = if args.news {
            let api_key = args
                .news_api_key
                .filter(|k| !k.trim().is_empty())
                .ok_or_else(|| anyhow!("--news needs an API key (--news-api-key or NEWSDATA_API_KEY)"))?;
            let categories = if args.categories.is_empty() {
                NewsCategories::default()
            } else {
                NewsCategories::with_enabled(&args.categories)
            };
            Some(NewsSettings {
                api_key,
                base: news_base(),
                categories,
                pages: args.news_pages.max(1),
            })
        } else {
            None
        };

        Ok(Self {
            latitude: args.lat,
            longitude: args.lon,
            display: DisplayOptions {
                unit: args.unit,
                summary_days,
            },
            geocode: !args.no_geocode,
            json: args.json,
            forecast_base: forecast_base(),
            geocode_base: geocode_base(),
            news,
        })
    }
}
