use crate::recipe::RecipePreferences;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRequest {
    pub image_url: String,
    #[serde(default = "default_meal_type")]
    pub meal_type: String,
    #[serde(default = "default_dietary_goal")]
    pub dietary_goal: String,
    /// When non-empty, used instead of asking the vision model.
    #[serde(default)]
    pub manual_labels: Option<Vec<String>>,
    #[serde(default)]
    pub amount_people: Option<u32>,
    #[serde(default)]
    pub meal_time: Option<String>,
    #[serde(default)]
    pub restrict_diet: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub labels: Vec<String>,
    pub recipe: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl RecipeRequest {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            meal_type: default_meal_type(),
            dietary_goal: default_dietary_goal(),
            manual_labels: None,
            amount_people: None,
            meal_time: None,
            restrict_diet: None,
        }
    }

    /// Caller-supplied labels, trimmed with blanks dropped. `None` when the
    /// list is absent or empty, meaning the image should be analysed.
    pub fn manual_labels(&self) -> Option<Vec<String>> {
        let labels = self.manual_labels.as_ref().filter(|labels| !labels.is_empty())?;

        Some(
            labels
                .iter()
                .map(|label| label.trim())
                .filter(|label| !label.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn preferences(&self) -> RecipePreferences {
        RecipePreferences {
            meal_type: self.meal_type.clone(),
            dietary_goal: self.dietary_goal.clone(),
            amount_people: self.amount_people,
            meal_time: self.meal_time.clone(),
            restrict_diet: self.restrict_diet.clone(),
        }
    }
}

fn default_meal_type() -> String {
    "dinner".to_string()
}

fn default_dietary_goal() -> String {
    "normal".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_request_defaults() {
        let request: RecipeRequest =
            serde_json::from_value(json!({"image_url": "https://example.com/a.jpg"})).unwrap();

        assert_eq!(request.meal_type, "dinner");
        assert_eq!(request.dietary_goal, "normal");
        assert!(request.manual_labels().is_none());
        assert_eq!(request.amount_people, None);
        assert_eq!(request.meal_time, None);
        assert_eq!(request.restrict_diet, None);
    }

    #[test]
    fn test_request_requires_image_url() {
        let result = serde_json::from_value::<RecipeRequest>(json!({"meal_type": "lunch"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_fields() {
        let request: RecipeRequest = serde_json::from_value(json!({
            "image_url": "https://example.com/a.jpg",
            "manual_labels": [" egg ", "", "spinach"],
            "amount_people": 4,
            "meal_time": "30 minutes",
            "restrict_diet": "vegetarian"
        }))
        .unwrap();

        assert_eq!(
            request.manual_labels(),
            Some(vec!["egg".to_string(), "spinach".to_string()])
        );

        let preferences = request.preferences();
        assert_eq!(preferences.amount_people, Some(4));
        assert_eq!(preferences.meal_time.as_deref(), Some("30 minutes"));
        assert_eq!(preferences.restrict_diet.as_deref(), Some("vegetarian"));
    }

    #[test]
    fn test_empty_manual_labels_mean_analyse_image() {
        let mut request = RecipeRequest::new("https://example.com/a.jpg");
        request.manual_labels = Some(Vec::new());
        assert!(request.manual_labels().is_none());

        request.manual_labels = Some(vec!["  ".to_string()]);
        assert_eq!(request.manual_labels(), Some(Vec::new()));
    }

    #[test]
    fn test_response_shape() {
        let response = RecipeResponse {
            labels: vec!["egg".to_string()],
            recipe: "Boil the egg.".to_string(),
            video_url: None,
        };

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({"labels": ["egg"], "recipe": "Boil the egg."})
        );
    }

    #[test]
    fn test_response_with_video() {
        let response = RecipeResponse {
            labels: vec!["egg".to_string()],
            recipe: "Boil the egg.".to_string(),
            video_url: Some("https://www.youtube.com/watch?v=abc".to_string()),
        };

        assert_eq!(
            serde_json::to_value(response).unwrap()["video_url"],
            "https://www.youtube.com/watch?v=abc"
        );
    }
}
