//! Update function for the ingredient collector.
//!
//! Failed recipe requests are only logged: the screen keeps whatever it
//! showed before and the user may click again.

use gloo_console::error;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::api::fetch_recipe;
use super::messages::Msg;
use super::state::ChefComponent;

pub fn update(component: &mut ChefComponent, ctx: &Context<ChefComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SubmitIngredient => {
            let Some(input) = component.input_ref.cast::<HtmlInputElement>() else {
                return false;
            };
            component.state.add_ingredient(input.value());
            input.set_value("");
            true
        }
        Msg::RequestRecipe => {
            // Overlapping requests are allowed; whichever answers last wins.
            let request = component.state.recipe_request();
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_recipe(&request).await {
                    Ok(recipe) => link.send_message(Msg::RecipeReceived(recipe)),
                    Err(err) => error!(format!("Recipe request failed: {}", err)),
                }
            });
            false
        }
        Msg::RecipeReceived(recipe) => {
            let change = component.state.set_recipe(recipe);
            component.scroll_pending = change.scrolls();
            change.changed()
        }
    }
}
