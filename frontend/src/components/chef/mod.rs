//! Ingredient collector ("Chef Claude").
//!
//! The user builds a list of ingredients; with more than three on hand, a
//! prompt offers to ask the backend for a recipe, which is rendered as
//! Markdown below the list.

use yew::prelude::*;

mod api;
mod ingredients_list;
mod messages;
mod recipe;
mod recipe_prompt;
mod state;
mod update;
mod view;

use messages::Msg;
pub use state::ChefComponent;

impl Component for ChefComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ChefComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.scroll_pending {
            self.scroll_pending = false;
            self.scroll_to_recipe();
        }
    }
}
