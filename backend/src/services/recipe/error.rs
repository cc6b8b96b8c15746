use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Failures of `POST /api/recipe/generate`.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("at least one ingredient is required")]
    EmptyIngredients,
    #[error("no access token configured for the text generation service")]
    MissingCredential,
    #[error("text generation request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("text generation returned no recipe")]
    EmptyCompletion,
}

impl ResponseError for RecipeError {
    fn status_code(&self) -> StatusCode {
        match self {
            RecipeError::EmptyIngredients => StatusCode::BAD_REQUEST,
            RecipeError::MissingCredential => StatusCode::SERVICE_UNAVAILABLE,
            RecipeError::Upstream(_) | RecipeError::EmptyCompletion => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}
