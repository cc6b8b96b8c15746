use yew::{html, Component, Context, Html};

/// Static banner with the logo and the site title.
pub struct FactsNavbar;

impl Component for FactsNavbar {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        FactsNavbar
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="navbar">
                <img class="react-logo" alt="react-logo" src="assets/react.svg" />
                <span class="title">{"ReactFacts"}</span>
            </div>
        }
    }
}
