//! View rendering for the ingredient collector.
//!
//! Sections appear progressively: the list once an ingredient exists, the
//! recipe prompt once more than three exist, and the recipe once one has
//! been received.

use super::ingredients_list::IngredientsList;
use super::messages::Msg;
use super::recipe::Recipe;
use super::recipe_prompt::RecipePrompt;
use super::state::ChefComponent;
use common::state::chef::ChefState;
use yew::html::Scope;
use yew::prelude::*;

pub fn view(component: &ChefComponent, ctx: &Context<ChefComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="chef-root">
            { build_header() }
            <main>
                { build_form(component, link) }
                {
                    build_sections(
                        &component.state,
                        &component.recipe_section_ref,
                        link.callback(|_| Msg::RequestRecipe),
                    )
                }
            </main>
        </div>
    }
}

fn build_header() -> Html {
    html! {
        <header class="chef-header">
            <img src="assets/chef-claude-icon.svg" alt="Chef Claude icon" />
            <h1>{"Chef Claude"}</h1>
        </header>
    }
}

/// The add-ingredient form. Submitting never reloads the page; the input
/// is read and cleared by the update function.
fn build_form(component: &ChefComponent, link: &Scope<ChefComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitIngredient
    });

    html! {
        <form class="add-ingredient-form" {onsubmit}>
            <input
                ref={component.input_ref.clone()}
                aria-label="Add ingredient"
                placeholder="e.g. oregano"
                type="text"
                name="ingredient"
            />
            <button>{"Add ingredient"}</button>
        </form>
    }
}

/// Everything below the form, driven purely by the collector state.
fn build_sections(state: &ChefState, section_ref: &NodeRef, on_request: Callback<MouseEvent>) -> Html {
    html! {
        <>
            if state.show_list() {
                <IngredientsList ingredients={state.ingredients().to_vec()} />
            }
            if state.can_generate() {
                <RecipePrompt section_ref={section_ref.clone()} {on_request} />
            }
            if state.has_recipe() {
                <Recipe markdown={state.recipe().to_string()} />
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct SectionsProps {
        ingredients: Vec<&'static str>,
        recipe: &'static str,
    }

    #[function_component]
    fn Sections(props: &SectionsProps) -> Html {
        let mut state = ChefState::new();
        for label in &props.ingredients {
            state.add_ingredient(*label);
        }
        state.set_recipe(props.recipe.to_string());
        build_sections(&state, &NodeRef::default(), Callback::from(|_: MouseEvent| ()))
    }

    async fn render(ingredients: Vec<&'static str>, recipe: &'static str) -> String {
        LocalServerRenderer::<Sections>::with_props(SectionsProps { ingredients, recipe })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn empty_collector_shows_only_the_form() {
        let html = LocalServerRenderer::<ChefComponent>::new()
            .hydratable(false)
            .render()
            .await;
        assert!(html.contains("add-ingredient-form"));
        assert!(!html.contains("ingredients-div"));
        assert!(!html.contains("Get a Recipe"));
    }

    #[tokio::test]
    async fn prompt_is_hidden_with_three_ingredients() {
        let html = render(vec!["a", "b", "c"], "").await;
        assert!(html.contains("ingredients-div"));
        assert!(!html.contains("Get a Recipe"));
    }

    #[tokio::test]
    async fn prompt_is_shown_with_four_ingredients() {
        let html = render(vec!["a", "b", "c", "d"], "").await;
        assert!(html.contains("Get a Recipe"));
        assert!(!html.contains("Chef Claude Recommends:"));
    }

    #[tokio::test]
    async fn recipe_is_rendered_once_received() {
        let html = render(vec!["a", "b", "c", "d"], "Mix *well*").await;
        assert!(html.contains("<em>well</em>"));
    }
}
