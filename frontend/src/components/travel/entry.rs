use common::model::place::Place;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct PlaceEntryProps {
    pub place: Place,
}

/// One journal entry: picture, location line, title, dates and description.
pub struct PlaceEntry;

impl Component for PlaceEntry {
    type Message = ();
    type Properties = PlaceEntryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PlaceEntry
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let place = &ctx.props().place;
        html! {
            <div class="place-container">
                <div class="picture-container">
                    <img src={place.img.src.clone()} alt={place.img.alt.clone()} />
                </div>

                <div class="text-container">
                    <div class="place-header">
                        <img src="assets/location.svg" alt="map marker" />
                        <p class="place-name">{ place.country.clone() }</p>
                        <p class="google-link">
                            <a href={place.google_maps_link.clone()}>{"View on Google Maps"}</a>
                        </p>
                    </div>

                    <h1>{ place.title.clone() }</h1>

                    <div class="about-place">
                        <p><b>{ place.dates.clone() }</b></p>
                        <p class="place-description">{ place.text.clone() }</p>
                    </div>
                </div>
            </div>
        }
    }
}
