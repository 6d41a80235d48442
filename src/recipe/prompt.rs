/// Cooking preferences that shape the recipe prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipePreferences {
    pub meal_type: String,
    pub dietary_goal: String,
    pub amount_people: Option<u32>,
    pub meal_time: Option<String>,
    pub restrict_diet: Option<String>,
}

impl RecipePreferences {
    pub fn new(meal_type: impl Into<String>, dietary_goal: impl Into<String>) -> Self {
        Self {
            meal_type: meal_type.into(),
            dietary_goal: dietary_goal.into(),
            amount_people: None,
            meal_time: None,
            restrict_diet: None,
        }
    }
}

const NOT_SPECIFIED: &str = "not specified";

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Fills the recipe template with the detected ingredients and preferences.
pub fn build_recipe_prompt(labels: &[String], meal_type: &str, dietary_goal: &str) -> String {
    build_recipe_prompt_with(labels, &RecipePreferences::new(meal_type, dietary_goal))
}

pub fn build_recipe_prompt_with(labels: &[String], preferences: &RecipePreferences) -> String {
    let label_text = labels.join(", ");
    let meal_type = &preferences.meal_type;
    let dietary_goal = &preferences.dietary_goal;
    let people = preferences
        .amount_people
        .map(|n| n.to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());
    let meal_time = non_blank(preferences.meal_time.as_deref()).unwrap_or(NOT_SPECIFIED);

    let mut prompt = format!(
        "I have the following ingredients: {label_text}. \
         My meal type is {meal_type} and dietary goal is {dietary_goal}. \
         People eating: {people}. Preferred cooking time: {meal_time}. "
    );

    if let Some(restriction) = non_blank(preferences.restrict_diet.as_deref()) {
        prompt.push_str(&format!(
            "Strict dietary restriction to follow: {restriction}. \
             Do not use any ingredient that conflicts with it; list such ingredients as excluded. "
        ));
    }

    prompt.push_str(
        "Please generate a full recipe including title, ingredients, steps, and estimated calories.",
    );
    prompt
}
