use super::MockLlmClient;
use image::{ImageFormat, Rgb, RgbImage};
use recipe_vision::{
    config::{Config, LlmConfig, LlmProvider, LogsConfig, ServerConfig},
    llm::LlmClient,
    pipeline::RecipePipeline,
};
use std::{io::Cursor, sync::Arc};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const VISION_REPLY: &str = "```json\n{\"food_items\": [\"egg\", \"rice\"]}\n```";
pub const RECIPE_REPLY: &str =
    "Egg Fried Rice\nIngredients: egg, rice\nSteps: fry the rice, add the egg.\nCalories: 450";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            provider: LlmProvider::Gemini,
            base_url: String::new(),
            api_key: "test-api-key".to_string(),
            vision_model: "vision-model".to_string(),
            text_model: "text-model".to_string(),
        },
        youtube: None,
    }
}

pub fn sample_png() -> Vec<u8> {
    let img = RgbImage::from_pixel(4, 4, Rgb([250, 200, 30]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// Image host serving a PNG at `/food.png`, HTML at `/page.html`, 404 elsewhere.
pub async fn start_image_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/food.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(sample_png()),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string("<html><body>not an image</body></html>"),
        )
        .mount(&server)
        .await;

    server
}

pub fn create_test_pipeline(mock: &Arc<MockLlmClient>) -> RecipePipeline {
    let client: Arc<dyn LlmClient> = mock.clone();
    RecipePipeline::from_client(client, &create_test_config().llm)
}
