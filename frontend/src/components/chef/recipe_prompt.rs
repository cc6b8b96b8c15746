use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RecipePromptProps {
    /// Attached to the section so the parent can scroll to it.
    pub section_ref: NodeRef,
    pub on_request: Callback<MouseEvent>,
}

pub struct RecipePrompt;

impl Component for RecipePrompt {
    type Message = ();
    type Properties = RecipePromptProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RecipePrompt
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="recipe-div" ref={props.section_ref.clone()}>
                <div>
                    <h3>{"Ready for a recipe?"}</h3>
                    <p>{"Generate a recipe from your list of ingredients."}</p>
                </div>
                <button onclick={props.on_request.clone()}>{"Get a Recipe"}</button>
            </div>
        }
    }
}
