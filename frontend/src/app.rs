//! App shell: a navigation bar and the currently selected demo.
//!
//! Each demo owns its state; switching demos unmounts the previous one.

use crate::components::chef::ChefComponent;
use crate::components::facts::FactsPage;
use crate::components::meme::MemeComponent;
use crate::components::travel::TravelJournal;
use yew::{classes, html, Component, Context, Html};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Demo {
    Chef,
    Meme,
    Facts,
    Travel,
}

impl Demo {
    pub const ALL: [Demo; 4] = [Demo::Chef, Demo::Meme, Demo::Facts, Demo::Travel];

    pub fn label(self) -> &'static str {
        match self {
            Demo::Chef => "Chef Claude",
            Demo::Meme => "Meme Generator",
            Demo::Facts => "ReactFacts",
            Demo::Travel => "Travel Journal",
        }
    }
}

pub enum Msg {
    Open(Demo),
}

pub struct App {
    active: Demo,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { active: Demo::Chef }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Open(demo) => {
                let changed = self.active != demo;
                self.active = demo;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="app-root">
                <nav class="demo-nav">
                    { for Demo::ALL.iter().map(|&demo| html! {
                        <button
                            class={classes!("demo-tab", (demo == self.active).then_some("active"))}
                            onclick={link.callback(move |_| Msg::Open(demo))}
                        >
                            { demo.label() }
                        </button>
                    }) }
                </nav>
                {
                    match self.active {
                        Demo::Chef => html! { <ChefComponent /> },
                        Demo::Meme => html! { <MemeComponent /> },
                        Demo::Facts => html! { <FactsPage /> },
                        Demo::Travel => html! { <TravelJournal /> },
                    }
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    #[tokio::test]
    async fn opens_on_the_chef_demo_with_all_tabs() {
        let html = LocalServerRenderer::<App>::new()
            .hydratable(false)
            .render()
            .await;

        for demo in Demo::ALL {
            assert!(html.contains(demo.label()), "missing tab {}", demo.label());
        }
        assert!(html.contains("add-ingredient-form"));
    }
}
