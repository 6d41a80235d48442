mod stage;
mod types;

pub use stage::{PipelineStage, StageTracker};
pub use types::{RecipeRequest, RecipeResponse};

use crate::{
    Error, Result,
    config::{Config, LlmConfig},
    fetch::ImageFetcher,
    llm::{LlmClient, create_llm_client},
    recipe::RecipeGenerator,
    video::VideoFinder,
    vision::LabelExtractor,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Fetch, detect, generate. One instance serves every request; nothing is
/// shared between requests beyond the clients themselves.
pub struct RecipePipeline {
    fetcher: ImageFetcher,
    extractor: LabelExtractor,
    generator: RecipeGenerator,
    video_finder: Option<VideoFinder>,
}

impl RecipePipeline {
    pub fn new(fetcher: ImageFetcher, extractor: LabelExtractor, generator: RecipeGenerator) -> Self {
        Self {
            fetcher,
            extractor,
            generator,
            video_finder: None,
        }
    }

    pub fn with_video_finder(mut self, video_finder: VideoFinder) -> Self {
        self.video_finder = Some(video_finder);
        self
    }

    pub fn from_client(client: Arc<dyn LlmClient>, config: &LlmConfig) -> Self {
        Self::new(
            ImageFetcher::new(),
            LabelExtractor::new(client.clone(), &config.vision_model),
            RecipeGenerator::new(client, &config.text_model),
        )
    }

    pub fn from_config(config: &Config) -> Self {
        let pipeline = Self::from_client(create_llm_client(&config.llm), &config.llm);

        match config.youtube.as_ref().and_then(VideoFinder::from_config) {
            Some(finder) => pipeline.with_video_finder(finder),
            None => {
                warn!("No YouTube API key configured; video links will be omitted");
                pipeline
            }
        }
    }

    pub async fn run(&self, request: &RecipeRequest) -> Result<RecipeResponse> {
        let mut tracker = StageTracker::new();

        match self.run_stages(request, &mut tracker).await {
            Ok(response) => Ok(response),
            Err(e) => {
                tracker.fail(&e);
                Err(e)
            }
        }
    }

    async fn run_stages(
        &self,
        request: &RecipeRequest,
        tracker: &mut StageTracker,
    ) -> Result<RecipeResponse> {
        let labels = match request.manual_labels() {
            Some(labels) => {
                info!("Using {} caller-supplied labels", labels.len());
                tracker.advance()?;
                labels
            }
            None => {
                let bytes = self.fetcher.fetch(&request.image_url).await?;
                tracker.advance()?;
                self.extractor.extract_labels(bytes).await?
            }
        };
        if labels.is_empty() {
            return Err(Error::NoLabelsFound);
        }
        tracker.advance()?;

        let recipe = self
            .generator
            .generate_with(&labels, &request.preferences())
            .await?;
        tracker.advance()?;

        info!(
            "Generated {} recipe ({} characters) from {} labels",
            request.meal_type,
            recipe.len(),
            labels.len()
        );

        let video_url = match &self.video_finder {
            Some(finder) => finder.find_video(&recipe).await,
            None => None,
        };

        Ok(RecipeResponse {
            labels,
            recipe,
            video_url,
        })
    }
}
