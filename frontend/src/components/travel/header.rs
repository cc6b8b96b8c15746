use yew::{html, Component, Context, Html};

pub struct TravelHeader;

impl Component for TravelHeader {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        TravelHeader
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <header class="travel-header">
                <img src="assets/globe.svg" alt="globe" />
                <h1>{"my travel journal."}</h1>
            </header>
        }
    }
}
