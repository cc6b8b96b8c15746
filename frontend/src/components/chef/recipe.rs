use pulldown_cmark::{html as markdown, Parser};
use yew::{html, AttrValue, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct RecipeProps {
    /// Recipe as returned by the text generator, in Markdown.
    pub markdown: String,
}

/// Shows the generated recipe.
pub struct Recipe;

impl Component for Recipe {
    type Message = ();
    type Properties = RecipeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Recipe
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let rendered = markdown_to_html(&ctx.props().markdown);
        html! {
            <section class="suggested-recipe-container" aria-live="polite">
                <h2>{"Chef Claude Recommends:"}</h2>
                { Html::from_html_unchecked(AttrValue::from(rendered)) }
            </section>
        }
    }
}

fn markdown_to_html(source: &str) -> String {
    let mut output = String::new();
    markdown::push_html(&mut output, Parser::new(source));
    output
}
