use common::state::chef::ingredients_heading;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct IngredientsListProps {
    pub ingredients: Vec<String>,
}

/// Renders the ingredients on hand, in the order they were added.
pub struct IngredientsList;

impl Component for IngredientsList {
    type Message = ();
    type Properties = IngredientsListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        IngredientsList
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let ingredients = &ctx.props().ingredients;
        html! {
            <div class="ingredients-div">
                <h2 class="ingredients-title">{ ingredients_heading(ingredients.len()) }</h2>
                <ul class="ingredients">
                    // Labels may repeat, so the position is the key.
                    { for ingredients.iter().enumerate().map(|(i, ingredient)| html! {
                        <li key={i}>{ ingredient.clone() }</li>
                    }) }
                </ul>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    async fn render(ingredients: &[&str]) -> String {
        let props = IngredientsListProps {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        };
        LocalServerRenderer::<IngredientsList>::with_props(props)
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn single_ingredient_uses_singular_heading() {
        let html = render(&["salt"]).await;
        assert!(html.contains("Ingredient on Hand:"));
        assert!(!html.contains("Ingredients on Hand:"));
    }

    #[tokio::test]
    async fn lists_ingredients_in_order_with_plural_heading() {
        let html = render(&["salt", "pepper"]).await;
        assert!(html.contains("Ingredients on Hand:"));
        assert!(html.contains("<li>salt</li><li>pepper</li>"));
    }

    #[tokio::test]
    async fn repeated_labels_each_get_an_entry() {
        let html = render(&["salt", "salt"]).await;
        assert_eq!(html.matches("<li>salt</li>").count(), 2);
    }
}
