//! # Recipe Service Module
//!
//! Turns the ingredient list collected by the frontend into a recipe by
//! asking an external text generation service. The browser never talks to
//! that service itself, so the access token stays on the server.
//!
//! ## Sub-modules:
//! - `generate`: the Actix handler validating the request and shaping the response.
//! - `generator`: the `RecipeGenerator` seam and its chat-completions client.
//! - `error`: the error type and its HTTP status mapping.

mod error;
mod generate;
mod generator;

use actix_web::web::{post, scope};
use actix_web::Scope;

pub use generator::{ChatCompletionsGenerator, RecipeGenerator};

/// The base path for all recipe-related API endpoints.
const API_PATH: &str = "/api/recipe";

/// Configures and returns the Actix `Scope` for recipe routes.
///
/// # Registered Routes:
///
/// *   **`POST /generate`**:
///     - **Handler**: `generate::process`
///     - **Description**: Expects a `RecipeRequest` JSON payload and answers with a
///       `RecipeResponse` holding Markdown text. The generator is taken from the
///       application data as `web::Data<dyn RecipeGenerator>`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/generate", post().to(generate::process))
}
