use crate::{Error, Result, config::YoutubeConfig};
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h1[^>]*>([^<]+)</h1>").expect("valid heading regex"));

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

/// Looks up a cooking video for a generated recipe on YouTube.
#[derive(Debug, Clone)]
pub struct VideoFinder {
    client: Client,
    base_url: String,
    api_key: String,
}

impl VideoFinder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// `None` when no key is configured.
    pub fn from_config(config: &YoutubeConfig) -> Option<Self> {
        if config.api_key.trim().is_empty() {
            return None;
        }

        let mut finder = Self::new(&config.api_key);
        if !config.base_url.trim().is_empty() {
            finder = finder.with_base_url(&config.base_url);
        }
        Some(finder)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Best effort: any failure is logged and yields `None`.
    pub async fn find_video(&self, recipe: &str) -> Option<String> {
        let title = extract_recipe_title(recipe)?;

        match self.search(&title).await {
            Ok(Some(url)) => {
                info!("Found video for \"{}\": {}", title, url);
                Some(url)
            }
            Ok(None) => {
                debug!("No video found for \"{}\"", title);
                None
            }
            Err(e) => {
                warn!("Video lookup for \"{}\" failed: {}", title, e);
                None
            }
        }
    }

    async fn search(&self, title: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", "1"),
                ("q", title),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::internal(format!("YouTube request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::internal(format!(
                "YouTube API returned error: {} - {}",
                status, body
            )));
        }

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| Error::internal(format!("Failed to parse YouTube response: {}", e)))?;

        Ok(search
            .items
            .into_iter()
            .find_map(|item| item.id.video_id)
            .map(|id| format!("{}{}", WATCH_URL, id)))
    }
}

/// Dish name from the first `<h1>`, falling back to the first non-empty line
/// with markdown heading or emphasis markers stripped.
pub fn extract_recipe_title(recipe: &str) -> Option<String> {
    if let Some(caps) = HEADING_RE.captures(recipe) {
        let title = caps[1].trim();
        if !title.is_empty() {
            return Some(title.to_string());
        }
    }

    let line = recipe.lines().map(str::trim).find(|line| !line.is_empty())?;
    let line = line.trim_start_matches('#').trim_matches('*').trim();
    let line = line
        .strip_prefix("Title:")
        .or_else(|| line.strip_prefix("title:"))
        .unwrap_or(line)
        .trim_matches('*')
        .trim();

    if line.is_empty() || line.starts_with('<') {
        None
    } else {
        Some(line.to_string())
    }
}
