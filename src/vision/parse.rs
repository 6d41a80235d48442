//! Best-effort recovery of the `{"food_items": [...]}` object from free text.
//!
//! Models wrap JSON in prose or markdown fences often enough that the reply is
//! never parsed directly. Everything from the first `{` to the last `}` is
//! tried as JSON; any failure yields no labels rather than an error.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::warn;

static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid JSON object pattern"));

pub const FOOD_ITEMS_KEY: &str = "food_items";

/// Greedy first-`{`-to-last-`}` match decoded as JSON.
pub fn extract_json_object(text: &str) -> Option<Value> {
    let candidate = JSON_OBJECT.find(text)?;

    match serde_json::from_str(candidate.as_str()) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to decode JSON from model output: {}", e);
            None
        }
    }
}

/// Returns the food labels found in `text`, or an empty list when the reply
/// has no usable `food_items` array.
pub fn parse_food_items(text: &str) -> Vec<String> {
    let Some(value) = extract_json_object(text) else {
        warn!("No food_items object in model output. Raw text: {}", text);
        return Vec::new();
    };

    let Some(items) = value.get(FOOD_ITEMS_KEY).and_then(Value::as_array) else {
        warn!("Model output lacks a food_items array. Raw text: {}", text);
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}
