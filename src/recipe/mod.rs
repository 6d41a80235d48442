mod prompt;

pub use prompt::{RecipePreferences, build_recipe_prompt, build_recipe_prompt_with};

use crate::{
    Error, Result,
    llm::{GenerationRequest, LlmClient},
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns a list of ingredients into free-form recipe text.
pub struct RecipeGenerator {
    client: Arc<dyn LlmClient>,
    model: String,
}

impl RecipeGenerator {
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// The model's reply is returned as-is; its structure is not checked.
    pub async fn generate(
        &self,
        labels: &[String],
        meal_type: &str,
        dietary_goal: &str,
    ) -> Result<String> {
        self.generate_with(labels, &RecipePreferences::new(meal_type, dietary_goal))
            .await
    }

    pub async fn generate_with(
        &self,
        labels: &[String],
        preferences: &RecipePreferences,
    ) -> Result<String> {
        if labels.is_empty() {
            warn!("Refusing to generate a recipe without ingredients");
            return Err(Error::NoLabelsFound);
        }

        let prompt = build_recipe_prompt_with(labels, preferences);
        debug!("Recipe prompt: {}", prompt);

        self.client
            .generate(GenerationRequest::text(&self.model, prompt))
            .await
    }
}
