//! Headline feed from newsdata.io.
//!
//! Category selection is a plain value owned by the caller. The feed pages
//! through `latest` results by following the provider's `nextPage` token.

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Category sent when nothing is enabled.
pub const FALLBACK_CATEGORY: &str = "top";

/// Categories offered in settings, all enabled by default.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Technology",
    "Sports",
    "Politics",
    "Entertainment",
    "Business",
    "Health",
];

/// Ordered category toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsCategories {
    entries: Vec<(String, bool)>,
}

impl Default for NewsCategories {
    fn default() -> Self {
        Self {
            entries: DEFAULT_CATEGORIES
                .iter()
                .map(|c| (c.to_string(), true))
                .collect(),
        }
    }
}

impl NewsCategories {
    /// Known categories with only `enabled` switched on. Names are matched
    /// case-insensitively; unknown names are appended.
    pub fn with_enabled<S: AsRef<str>>(enabled: &[S]) -> Self {
        let mut categories = Self::default();
        for entry in &mut categories.entries {
            entry.1 = false;
        }
        for name in enabled {
            categories.set(name.as_ref(), true);
        }
        categories
    }

    /// Flip one category, adding it (enabled) when it is not known yet.
    pub fn toggle(&mut self, name: &str) {
        let current = self.is_enabled(name);
        self.set(name, !current);
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|(c, on)| *on && c.eq_ignore_ascii_case(name))
    }

    fn set(&mut self, name: &str, on: bool) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        match self.entries.iter_mut().find(|(c, _)| c.eq_ignore_ascii_case(name)) {
            Some(entry) => entry.1 = on,
            None => self.entries.push((name.to_string(), on)),
        }
    }

    /// Comma-joined, lowercased enabled categories, or `top` when none are.
    pub fn query(&self) -> String {
        let active: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, on)| *on)
            .map(|(c, _)| c.to_lowercase())
            .collect();
        if active.is_empty() {
            FALLBACK_CATEGORY.to_string()
        } else {
            active.join(",")
        }
    }
}

/// One headline.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NewsItem {
    #[serde(default)]
    pub article_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
    #[serde(default, rename = "pubDate")]
    pub pub_date: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
struct LatestResp {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    results: Option<Vec<NewsItem>>,
    #[serde(default, rename = "nextPage")]
    next_page: Option<String>,
}

/// One page of results and the token for the following page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewsPage {
    pub items: Vec<NewsItem>,
    pub next_page: Option<String>,
}

/// Fetch one page of `latest` headlines. A response without `results`
/// is an empty, final page.
pub async fn fetch_news_page(
    client: &Client,
    base: &str,
    api_key: &str,
    category: &str,
    page: Option<&str>,
) -> Result<NewsPage> {
    let key = urlencoding::encode(api_key).into_owned();
    let mut url = format!(
        "{}/latest?apikey={}&language=en&category={}",
        base.trim_end_matches('/'),
        key,
        urlencoding::encode(category),
    );
    if let Some(token) = page {
        url.push_str(&format!("&page={}", urlencoding::encode(token)));
    }
    // the key is part of the query string, keep it out of logs and errors
    let shown = if key.is_empty() { url.clone() } else { url.replace(&key, "***") };
    tracing::info!("fetching headlines: category={category} page={page:?}");

    let resp: LatestResp = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("network error: {shown}"))?
        .error_for_status()
        .map_err(|e| anyhow!("request failed: {shown} ({})", e.without_url()))?
        .json()
        .await
        .with_context(|| format!("failed to parse JSON from {shown}"))?;

    if resp.status.as_deref() == Some("error") {
        return Err(anyhow!("news provider returned an error status"));
    }

    Ok(NewsPage {
        items: resp.results.unwrap_or_default(),
        next_page: resp.next_page.filter(|t| !t.is_empty()),
    })
}

/// Pages through headlines for a fixed category selection.
pub struct NewsFeed<'a> {
    client: &'a Client,
    base: String,
    api_key: String,
    category: String,
    next: Option<String>,
    exhausted: bool,
}

impl<'a> NewsFeed<'a> {
    pub fn new(client: &'a Client, base: &str, api_key: &str, categories: &NewsCategories) -> Self {
        Self {
            client,
            base: base.to_string(),
            api_key: api_key.to_string(),
            category: categories.query(),
            next: None,
            exhausted: false,
        }
    }

    pub fn has_more(&self) -> bool {
        !self.exhausted
    }

    /// The next page, or `None` once the provider stops handing out tokens.
    pub async fn next_page(&mut self) -> Result<Option<Vec<NewsItem>>> {
        if self.exhausted {
            return Ok(None);
        }
        let page = fetch_news_page(
            self.client,
            &self.base,
            &self.api_key,
            &self.category,
            self.next.as_deref(),
        )
        .await?;
        self.next = page.next_page;
        self.exhausted = self.next.is_none();
        Ok(Some(page.items))
    }

    /// Up to `max_pages` pages, concatenated in provider order.
    pub async fn collect(&mut self, max_pages: usize) -> Result<Vec<NewsItem>> {
        let mut items = Vec::new();
        for _ in 0..max_pages {
            match self.next_page().await? {
                Some(page) => items.extend(page),
                None => break,
            }
        }
        Ok(items)
    }
}

/// Headline list for the text output.
pub fn render_headlines(items: &[NewsItem]) -> String {
    if items.is_empty() {
        return "_(no headlines)_\n".into();
    }
    let mut s = String::from("Headlines\n");
    for item in items {
        let title = item.title.as_deref().unwrap_or("--");
        match item.source_id.as_deref() {
            Some(source) => s.push_str(&format!("- {title} ({source})\n")),
            None => s.push_str(&format!("- {title}\n")),
        }
    }
    s
}
