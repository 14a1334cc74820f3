#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Shown in place of a missing recipe title.
pub const TITLE_FALLBACK: &str = "No title available";
/// Shown as the only list item when a recipe has no usable ingredients.
pub const INGREDIENTS_FALLBACK: &str = "No ingredients available";
/// Shown in place of missing instructions.
pub const INSTRUCTIONS_FALLBACK: &str = "No instructions available";

/// Request body shared by the `/recommend` and `/create` endpoints.
#[derive(Clone, Debug, Serialize)]
pub struct IngredientsRequest {
    pub ingredients: Vec<String>,
}

/// A recipe as returned by the backend.
///
/// Every field is optional; the render helpers below substitute fixed
/// fallback text so a sparse response still produces a complete card.
/// Replaced wholesale on each successful response, never merged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
}

impl Recipe {
    /// Title text for the card header.
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or(TITLE_FALLBACK)
    }

    /// Ingredient list items: the comma-joined `ingredients` field split
    /// on `,` with each part trimmed, or a single fallback item.
    pub fn ingredient_items(&self) -> Vec<String> {
        match self.ingredients.as_deref() {
            Some(list) => list.split(',').map(|item| item.trim().to_owned()).collect(),
            None => vec![INGREDIENTS_FALLBACK.to_owned()],
        }
    }

    /// Instruction text for the card body.
    pub fn instructions_text(&self) -> &str {
        self.instructions.as_deref().unwrap_or(INSTRUCTIONS_FALLBACK)
    }
}

/// Accept any JSON value for a field but keep it only if it is a string.
///
/// The backend is loosely typed here; a number, array, or null in
/// `ingredients` must not fail the whole response, it just means the
/// render path falls back.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
