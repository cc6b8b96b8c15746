//! ReactFacts: a banner and a fixed list of facts. No state.

use common::model::fact::FACTS;
use yew::{html, Component, Context, Html};

mod navbar;

use navbar::FactsNavbar;

pub struct FactsPage;

impl Component for FactsPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        FactsPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="facts-root">
                <FactsNavbar />
                <main class="facts">
                    <h1>{"Fun facts about React"}</h1>
                    <ul>
                        { for FACTS.iter().map(|fact| html! { <li>{ *fact }</li> }) }
                    </ul>
                </main>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    #[tokio::test]
    async fn banner_and_every_fact_are_rendered() {
        let html = LocalServerRenderer::<FactsPage>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(html.contains("<span class=\"title\">ReactFacts</span>"));
        assert!(html.contains("react-logo"));
        for fact in FACTS {
            assert!(html.contains(&format!("<li>{fact}</li>")), "missing fact {fact}");
        }
    }
}
