//! Text generation client used to produce recipes.
//!
//! The service is reached through an OpenAI-compatible chat completions
//! endpoint (the Hugging Face router by default). One request per call:
//! no retry, no timeout beyond what `reqwest` applies by default.

use async_trait::async_trait;
use log::{debug, info};
use serde::Deserialize;
use serde_json::json;

use super::error::RecipeError;
use crate::config::Settings;

const SYSTEM_PROMPT: &str = "You are an assistant that receives a list of ingredients that a user has \
and suggests a recipe they could make with some or all of those ingredients. You don't need to use \
every ingredient they mention in your recipe. The recipe can include additional ingredients they \
didn't mention, but try not to include too many extra ingredients. Format your response in markdown \
to make it easier to render to a web page";

const MAX_TOKENS: u32 = 1024;

/// Anything that can turn an ingredient list into recipe text.
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    async fn generate(&self, ingredients: &[String]) -> Result<String, RecipeError>;
}

/// Builds the user turn of the conversation.
pub fn user_prompt(ingredients: &[String]) -> String {
    format!(
        "I have {}. Please give me a recipe you'd recommend I make!",
        ingredients.join(", ")
    )
}

#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Picks the text of the first choice, rejecting empty answers.
fn first_choice_text(completion: ChatCompletion) -> Result<String, RecipeError> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|text| !text.trim().is_empty())
        .ok_or(RecipeError::EmptyCompletion)
}

pub struct ChatCompletionsGenerator {
    client: reqwest::Client,
    url: String,
    model: String,
    token: Option<String>,
}

impl ChatCompletionsGenerator {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: settings.completions_url.clone(),
            model: settings.model.clone(),
            token: settings.hf_token.clone(),
        }
    }
}

#[async_trait]
impl RecipeGenerator for ChatCompletionsGenerator {
    async fn generate(&self, ingredients: &[String]) -> Result<String, RecipeError> {
        let token = self.token.as_deref().ok_or(RecipeError::MissingCredential)?;

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": user_prompt(ingredients) },
            ],
            "max_tokens": MAX_TOKENS,
        });

        info!(
            "Requesting recipe from {} for {} ingredients",
            self.model,
            ingredients.len()
        );
        let completion: ChatCompletion = self
            .client
            .post(&self.url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = first_choice_text(completion)?;
        debug!("Received recipe of {} bytes", text.len());
        Ok(text)
    }
}
