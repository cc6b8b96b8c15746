//! Travel journal: a header and one entry per visited place.

use common::model::place::{places, Place};
use yew::{html, Component, Context, Html, Properties};

mod entry;
mod header;

use entry::PlaceEntry;
use header::TravelHeader;

#[derive(Properties, PartialEq)]
pub struct TravelJournalProps {
    /// Places to list, in display order. Defaults to the built-in journal.
    #[prop_or_else(places)]
    pub places: Vec<Place>,
}

pub struct TravelJournal;

impl Component for TravelJournal {
    type Message = ();
    type Properties = TravelJournalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TravelJournal
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                <TravelHeader />
                <div class="places">
                    { for ctx.props().places.iter().map(|place| html! {
                        <PlaceEntry key={place.id} place={place.clone()} />
                    }) }
                </div>
            </>
        }
    }
}
