//! Meme generator: two captions over an image that can be swapped for a
//! random one from the imgflip template listing.

use gloo_console::error;
use yew::prelude::*;

mod api;
mod header;
mod messages;
mod state;
mod update;
mod view;

use messages::Msg;
pub use state::MemeComponent;

impl Component for MemeComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        MemeComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_candidates().await {
                    Ok(candidates) => link.send_message(Msg::CandidatesLoaded(candidates)),
                    Err(err) => error!(format!("Loading meme images failed: {}", err)),
                }
            });
        }
    }
}
