mod decode;
mod parse;

pub use decode::{decode_image, decode_image_blocking};
pub use parse::{FOOD_ITEMS_KEY, extract_json_object, parse_food_items};

use crate::{
    Result,
    llm::{GenerationRequest, LlmClient},
};
use std::sync::Arc;
use tracing::{debug, info};

pub const VISION_PROMPT: &str = "List the food items you see in this image in JSON format:\n\
{\"food_items\": [\"item1\", \"item2\", \"item3\"]}\n\
Please ONLY return a valid JSON object with no extra text.";

/// Asks a vision model which food items appear in an image.
pub struct LabelExtractor {
    client: Arc<dyn LlmClient>,
    model: String,
}

impl LabelExtractor {
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Decodes `bytes`, queries the model and parses its reply.
    ///
    /// An unparseable reply is not an error: it comes back as an empty list
    /// and the caller decides what that means.
    pub async fn extract_labels(&self, bytes: Vec<u8>) -> Result<Vec<String>> {
        let image = decode_image_blocking(bytes).await?;

        let request = GenerationRequest::text(&self.model, VISION_PROMPT).with_image(image);
        let response = self.client.generate(request).await?;
        debug!("Vision model replied with {} characters", response.len());

        let labels = parse_food_items(&response);
        info!("Detected {} food items: {}", labels.len(), labels.join(", "));

        Ok(labels)
    }
}
