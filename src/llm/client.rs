use super::{GeminiClient, OpenAiClient, types::GenerationRequest};
use crate::{
    Result,
    config::{LlmConfig, LlmProvider},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Runs one generation and returns the model's text verbatim.
    async fn generate(&self, request: GenerationRequest) -> Result<String>;
}

pub fn create_llm_client(config: &LlmConfig) -> Arc<dyn LlmClient> {
    info!("Using {:?} LLM provider", config.provider);

    match config.provider {
        LlmProvider::Gemini => Arc::new(GeminiClient::new(config.clone())),
        LlmProvider::OpenAi => Arc::new(OpenAiClient::new(config.clone())),
    }
}
