use crate::{Error, Result};
use reqwest::{Client, Url};
use tracing::debug;

/// Host and path of `url`, for logs. Query strings often carry signed-URL
/// tokens and are never logged.
pub fn loggable_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => format!("{}{}", parsed.host_str().unwrap_or(""), parsed.path()),
        Err(_) => "<invalid url>".to_string(),
    }
}

/// Downloads image bytes with a plain GET.
///
/// No retries, no timeout and no size cap: a slow or huge download holds the
/// request for as long as the transfer takes.
#[derive(Debug, Clone, Default)]
pub struct ImageFetcher {
    client: Client,
}

impl ImageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let log_url = loggable_url(url);
        debug!("Fetching image from {}", log_url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| Error::Fetch(e.without_url()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Fetch(e.without_url()))?;

        debug!("Fetched {} bytes from {}", bytes.len(), log_url);
        Ok(bytes.to_vec())
    }
}
