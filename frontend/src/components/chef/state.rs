//! Component state for the ingredient collector.

use common::state::chef::ChefState;
use web_sys::Element;
use yew::prelude::*;

/// Holds the reducer state plus the DOM handles the view needs.
pub struct ChefComponent {
    /// Ingredients and the last recipe received.
    pub state: ChefState,

    /// The ingredient `<input>`, read and cleared on submit.
    pub input_ref: NodeRef,

    /// The "Ready for a recipe?" section, scrolled into view when a recipe arrives.
    pub recipe_section_ref: NodeRef,

    /// Set when the recipe text changed and the next render should scroll.
    pub scroll_pending: bool,
}

impl ChefComponent {
    pub fn new() -> Self {
        Self {
            state: ChefState::new(),
            input_ref: NodeRef::default(),
            recipe_section_ref: NodeRef::default(),
            scroll_pending: false,
        }
    }

    /// Scrolls the recipe section into view, if it is mounted.
    pub fn scroll_to_recipe(&self) {
        if let Some(section) = self.recipe_section_ref.cast::<Element>() {
            section.scroll_into_view();
        }
    }
}
