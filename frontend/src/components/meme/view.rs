use common::model::meme::{Meme, MemeField};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::header::MemeHeader;
use super::messages::Msg;
use super::state::MemeComponent;

pub fn view(component: &MemeComponent, ctx: &Context<MemeComponent>) -> Html {
    let link = ctx.link();
    let meme = component.state.meme();

    html! {
        <div class="meme-root">
            <MemeHeader />
            <main>
                <div class="form">
                    { caption_input("Top Text", MemeField::TopText, meme, link) }
                    { caption_input("Bottom Text", MemeField::BottomText, meme, link) }
                    <button onclick={link.callback(|_| Msg::NewImage)}>{"Get a new meme image 🖼"}</button>
                </div>
                { meme_preview(meme) }
            </main>
        </div>
    }
}

/// Placeholder text for a caption input. The top one is fixed; the bottom
/// one mirrors the current bottom caption.
fn caption_placeholder(field: MemeField, meme: &Meme) -> String {
    match field {
        MemeField::TopText => "One does not simply".to_string(),
        MemeField::BottomText => meme.bottom_text.clone(),
    }
}

/// A labelled, controlled caption input. The `name` attribute tells the
/// change handler which caption to update.
fn caption_input(
    label: &'static str,
    field: MemeField,
    meme: &Meme,
    link: &Scope<MemeComponent>,
) -> Html {
    let value = match field {
        MemeField::TopText => meme.top_text.clone(),
        MemeField::BottomText => meme.bottom_text.clone(),
    };
    let placeholder = caption_placeholder(field, meme);

    let oninput = link.batch_callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        MemeField::from_input_name(&input.name()).map(|field| Msg::FieldChanged {
            field,
            value: input.value(),
        })
    });

    html! {
        <label>
            { label }
            <input
                type="text"
                {placeholder}
                name={field.input_name()}
                {value}
                {oninput}
            />
        </label>
    }
}

fn meme_preview(meme: &Meme) -> Html {
    html! {
        <div class="meme">
            <img src={meme.image_url.clone()} alt="Meme" />
            <span class="top">{ meme.top_text.clone() }</span>
            <span class="bottom">{ meme.bottom_text.clone() }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::meme::MemeCandidate;
    use common::state::meme::MemeState;
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct PreviewProps {
        meme: Meme,
    }

    #[function_component]
    fn Preview(props: &PreviewProps) -> Html {
        meme_preview(&props.meme)
    }

    async fn render(meme: Meme) -> String {
        LocalServerRenderer::<Preview>::with_props(PreviewProps { meme })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn initial_screen_shows_default_meme() {
        let html = LocalServerRenderer::<MemeComponent>::new()
            .hydratable(false)
            .render()
            .await;
        assert!(html.contains("Meme Generator"));
        assert!(html.contains("http://i.imgflip.com/1bij.jpg"));
        assert!(html.contains("name=\"topText\""));
        assert!(html.contains("name=\"bottomText\""));
        assert!(html.contains("placeholder=\"Walk into Mordor\""));
    }

    #[test]
    fn bottom_placeholder_follows_bottom_caption() {
        let mut state = MemeState::new();
        state.set_field(MemeField::BottomText, "Write Rust".to_string());
        state.set_field(MemeField::TopText, "Or".to_string());

        assert_eq!(caption_placeholder(MemeField::BottomText, state.meme()), "Write Rust");
        assert_eq!(caption_placeholder(MemeField::TopText, state.meme()), "One does not simply");
    }

    #[tokio::test]
    async fn top_caption_edit_renders_only_in_top_span() {
        let mut state = MemeState::new();
        state.set_field(MemeField::TopText, "Rust".to_string());

        let html = render(state.meme().clone()).await;
        assert!(html.contains("<span class=\"top\">Rust</span>"));
        assert!(html.contains("<span class=\"bottom\">Walk into Mordor</span>"));
    }

    #[tokio::test]
    async fn new_image_keeps_captions() {
        let mut state = MemeState::new();
        state.set_candidates(
            (0..20)
                .map(|i| MemeCandidate {
                    id: i.to_string(),
                    name: format!("template {i}"),
                    url: format!("https://i.imgflip.com/t{i}.jpg"),
                    width: 0,
                    height: 0,
                    box_count: 2,
                })
                .collect(),
        );
        state.shuffle(0.45);

        let html = render(state.meme().clone()).await;
        assert!(html.contains("https://i.imgflip.com/t5.jpg"));
        assert!(html.contains("<span class=\"top\">One does not simply</span>"));
        assert!(html.contains("<span class=\"bottom\">Walk into Mordor</span>"));
    }
}
