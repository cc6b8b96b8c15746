use common::state::meme::Shuffle;
use gloo_console::warn;
use yew::prelude::*;

use super::messages::Msg;
use super::state::MemeComponent;

pub fn update(component: &mut MemeComponent, _ctx: &Context<MemeComponent>, msg: Msg) -> bool {
    match msg {
        Msg::FieldChanged { field, value } => {
            component.state.set_field(field, value);
            true
        }
        Msg::NewImage => match component.state.shuffle(js_sys::Math::random()) {
            Shuffle::Picked(_) => true,
            Shuffle::OutOfRange { index, available } => {
                warn!(format!(
                    "No meme image at index {} ({} loaded), keeping the current one",
                    index, available
                ));
                false
            }
        },
        Msg::CandidatesLoaded(candidates) => {
            component.state.set_candidates(candidates);
            false
        }
    }
}
