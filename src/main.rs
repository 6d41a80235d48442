use anyhow::Result;
use recipe_vision::{config, server};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<LevelFilter> {
    level.parse::<LevelFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let level_filter = match validate_log_level(&log_level) {
        Ok(level_filter) => level_filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level_filter.into())
                .from_env_lossy(),
        )
        .json()
        .init();

    info!("Starting recipe-vision server with log level: {}", log_level);
    info!(
        "Vision model: {}, text model: {}",
        config.llm.vision_model, config.llm.text_model
    );
    info!(
        "Video lookup: {}",
        if config.youtube_api_key().is_some() { "enabled" } else { "disabled" }
    );

    server::run(config).await?;

    Ok(())
}
