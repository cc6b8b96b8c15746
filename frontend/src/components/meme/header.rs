use yew::{html, Component, Context, Html};

pub struct MemeHeader;

impl Component for MemeHeader {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        MemeHeader
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <header class="header">
                <img src="assets/troll-face.svg" alt="Troll face" />
                <h1>{"Meme Generator"}</h1>
            </header>
        }
    }
}
