mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = load_from_path(&config_path).await?;
    config.apply_api_key_override(env::var("LLM_API_KEY").ok());
    config.apply_youtube_key_override(env::var("YOUTUBE_API_KEY").ok());
    config.validate()?;

    Ok(config)
}

/// Reads and parses a config file without env overrides or validation.
pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    pub fn apply_api_key_override(&mut self, api_key: Option<String>) {
        if let Some(api_key) = api_key.filter(|key| !key.trim().is_empty()) {
            debug!("Using LLM API key from environment");
            self.llm.api_key = api_key;
        }
    }

    pub fn apply_youtube_key_override(&mut self, api_key: Option<String>) {
        if let Some(api_key) = api_key.filter(|key| !key.trim().is_empty()) {
            debug!("Using YouTube API key from environment");
            self.youtube.get_or_insert_with(YoutubeConfig::default).api_key = api_key;
        }
    }

    /// The configured YouTube key, if any.
    pub fn youtube_api_key(&self) -> Option<&str> {
        self.youtube
            .as_ref()
            .map(|youtube| youtube.api_key.trim())
            .filter(|key| !key.is_empty())
    }
}
