use serde::{Deserialize, Serialize};

/// Request payload for `POST /api/recipe/generate`.
///
/// The ingredients are forwarded to the text generator in the order the
/// user added them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRequest {
    pub ingredients: Vec<String>,
}

/// Response payload of the recipe endpoint. `recipe` is Markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub recipe: String,
}
