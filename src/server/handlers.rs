use super::types::ErrorResponse;
use crate::{
    Error,
    fetch::loggable_url,
    pipeline::{RecipePipeline, RecipeRequest, RecipeResponse},
};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{Level, error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<RecipePipeline>,
}

pub async fn generate_recipe(
    State(state): State<AppState>,
    Json(request): Json<RecipeRequest>,
) -> Result<Json<RecipeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let log_url = loggable_url(&request.image_url);
    info!(
        "Received recipe request for {} (meal type: {}, dietary goal: {})",
        log_url, request.meal_type, request.dietary_goal
    );

    match state.pipeline.run(&request).await {
        Ok(response) => {
            info!("Successfully generated recipe for {}", log_url);
            Ok(Json(response))
        }
        Err(e) => {
            let (status, body) = error_response(&e);
            if failure_level(status) == Level::WARN {
                warn!("Rejected recipe request for {} ({}): {}", log_url, e.kind(), e);
            } else {
                error!(
                    "Failed to generate recipe for {} ({}): {}",
                    log_url,
                    e.kind(),
                    e
                );
            }
            Err((status, body))
        }
    }
}

/// Client-caused failures are expected traffic, not server faults.
fn failure_level(status: StatusCode) -> Level {
    if status.is_client_error() {
        Level::WARN
    } else {
        Level::ERROR
    }
}

/// Flattens every failure into a status code and a `detail` message.
pub fn error_response(error: &Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = match error {
        Error::NoLabelsFound => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            detail: error.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_labels_is_bad_request() {
        let (status, Json(body)) = error_response(&Error::NoLabelsFound);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.detail, "No food items detected.");
    }

    #[test]
    fn test_failure_log_level() {
        let (status, _) = error_response(&Error::NoLabelsFound);
        assert_eq!(failure_level(status), Level::WARN);

        let (status, _) = error_response(&Error::llm("quota exceeded"));
        assert_eq!(failure_level(status), Level::ERROR);
    }

    #[test]
    fn test_other_errors_are_internal() {
        for error in [
            Error::llm("quota exceeded"),
            Error::internal("boom"),
            Error::config("bad"),
        ] {
            let (status, Json(body)) = error_response(&error);
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body.detail, error.to_string());
        }
    }
}
