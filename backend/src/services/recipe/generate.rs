//! # Recipe Generation Service
//!
//! Backend logic for `POST /api/recipe/generate`.
//!
//! 1.  The `RecipeRequest` body is rejected with `400` when it carries no ingredients.
//! 2.  The ingredient list is handed, unchanged and in order, to the configured
//!     `RecipeGenerator`.
//! 3.  The generated Markdown is wrapped in a `RecipeResponse`. Generator failures are
//!     mapped to HTTP statuses by `RecipeError`.

use actix_web::{web, HttpResponse};
use common::model::recipe::{RecipeRequest, RecipeResponse};
use log::{error, warn};

use super::error::RecipeError;
use super::generator::RecipeGenerator;

pub async fn process(
    payload: web::Json<RecipeRequest>,
    generator: web::Data<dyn RecipeGenerator>,
) -> Result<HttpResponse, RecipeError> {
    let recipe = generate_recipe(&payload.ingredients, generator.get_ref()).await?;
    Ok(HttpResponse::Ok().json(RecipeResponse { recipe }))
}

pub async fn generate_recipe(
    ingredients: &[String],
    generator: &dyn RecipeGenerator,
) -> Result<String, RecipeError> {
    if ingredients.is_empty() {
        warn!("Rejected recipe request without ingredients");
        return Err(RecipeError::EmptyIngredients);
    }

    generator.generate(ingredients).await.map_err(|e| {
        error!("Recipe generation failed: {}", e);
        e
    })
}
