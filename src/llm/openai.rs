use super::{LlmClient, types::GenerationRequest};
use crate::{Error, Result, config::LlmConfig};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestMessageContentPartImageArgs,
        ChatCompletionRequestMessageContentPartTextArgs, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, ChatCompletionRequestUserMessageContentPart,
        CreateChatCompletionRequestArgs, ImageDetail, ImageUrlArgs,
    },
};
use async_trait::async_trait;
use tracing::debug;

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        Self {
            client: Client::with_config(openai_config),
        }
    }

    fn build_user_message(request: &GenerationRequest) -> Result<ChatCompletionRequestMessage> {
        let content = match &request.image {
            None => ChatCompletionRequestUserMessageContent::Text(request.prompt.clone()),
            Some(image) => {
                let text = ChatCompletionRequestMessageContentPartTextArgs::default()
                    .text(request.prompt.clone())
                    .build()?;
                let image = ChatCompletionRequestMessageContentPartImageArgs::default()
                    .image_url(
                        ImageUrlArgs::default()
                            .url(image.to_data_url())
                            .detail(ImageDetail::Auto)
                            .build()?,
                    )
                    .build()?;

                ChatCompletionRequestUserMessageContent::Array(vec![
                    ChatCompletionRequestUserMessageContentPart::Text(text),
                    ChatCompletionRequestUserMessageContentPart::ImageUrl(image),
                ])
            }
        };

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| Error::llm(format!("Failed to build user message: {}", e)))?;
        Ok(message.into())
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String> {
        debug!(
            "Creating chat completion with model {} (image attached: {})",
            request.model,
            request.image.is_some()
        );

        let message = Self::build_user_message(&request)?;
        let openai_request = CreateChatCompletionRequestArgs::default()
            .model(&request.model)
            .messages(vec![message])
            .build()?;

        let response = self.client.chat().create(openai_request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| Error::llm("Chat completion returned no content"))
    }
}
