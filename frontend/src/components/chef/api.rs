use common::model::recipe::{RecipeRequest, RecipeResponse};
use gloo_net::http::Request;

const RECIPE_API: &str = "/api/recipe/generate";

/// Posts the ingredient list to the backend and returns the recipe text.
pub async fn fetch_recipe(request: &RecipeRequest) -> Result<String, gloo_net::Error> {
    let response = Request::post(RECIPE_API).json(request)?.send().await?;
    if !response.ok() {
        let detail = response.text().await.unwrap_or_default();
        return Err(gloo_net::Error::GlooError(format!(
            "{} {}",
            response.status(),
            detail
        )));
    }
    Ok(response.json::<RecipeResponse>().await?.recipe)
}
