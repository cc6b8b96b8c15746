use crate::model::recipe::RecipeRequest;

/// The "Get a Recipe" prompt appears once the list holds more than this
/// many ingredients.
pub const GENERATE_THRESHOLD: usize = 3;

/// State of the ingredient collector.
///
/// Ingredients are append-only for the lifetime of the component. Labels
/// are stored exactly as submitted: duplicates and empty strings are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChefState {
    ingredients: Vec<String>,
    recipe: String,
}

impl ChefState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn recipe(&self) -> &str {
        &self.recipe
    }

    /// Appends one ingredient taken from the submitted form.
    pub fn add_ingredient(&mut self, label: impl Into<String>) {
        self.ingredients.push(label.into());
    }

    /// Replaces the recipe text with the latest response.
    pub fn set_recipe(&mut self, recipe: String) -> RecipeChange {
        if self.recipe == recipe {
            return RecipeChange::Unchanged;
        }
        self.recipe = recipe;
        if self.recipe.is_empty() {
            RecipeChange::Cleared
        } else {
            RecipeChange::Arrived
        }
    }

    pub fn show_list(&self) -> bool {
        !self.ingredients.is_empty()
    }

    pub fn heading(&self) -> &'static str {
        ingredients_heading(self.ingredients.len())
    }

    pub fn can_generate(&self) -> bool {
        self.ingredients.len() > GENERATE_THRESHOLD
    }

    pub fn has_recipe(&self) -> bool {
        !self.recipe.is_empty()
    }

    /// Snapshot of the current list, sent to the recipe endpoint.
    pub fn recipe_request(&self) -> RecipeRequest {
        RecipeRequest {
            ingredients: self.ingredients.clone(),
        }
    }
}

/// Outcome of [`ChefState::set_recipe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeChange {
    Unchanged,
    Cleared,
    Arrived,
}

impl RecipeChange {
    pub fn changed(self) -> bool {
        self != RecipeChange::Unchanged
    }

    /// Only new, non-empty text brings the recipe section into view.
    pub fn scrolls(self) -> bool {
        self == RecipeChange::Arrived
    }
}

/// Heading above the ingredient list: singular for one entry, plural
/// otherwise.
pub fn ingredients_heading(count: usize) -> &'static str {
    if count > 1 {
        "Ingredients on Hand:"
    } else {
        "Ingredient on Hand:"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(labels: &[&str]) -> ChefState {
        let mut state = ChefState::new();
        for label in labels {
            state.add_ingredient(*label);
        }
        state
    }

    #[test]
    fn starts_empty() {
        let state = ChefState::new();
        assert!(!state.show_list());
        assert!(!state.can_generate());
        assert!(!state.has_recipe());
    }

    #[test]
    fn keeps_insertion_order_and_pluralizes() {
        let mut state = with(&["salt"]);
        assert_eq!(state.heading(), "Ingredient on Hand:");

        state.add_ingredient("pepper");
        assert_eq!(state.ingredients(), ["salt", "pepper"]);
        assert_eq!(state.heading(), "Ingredients on Hand:");
    }

    #[test]
    fn duplicates_and_empty_labels_are_kept() {
        let state = with(&["salt", "salt", ""]);
        assert_eq!(state.ingredients(), ["salt", "salt", ""]);
    }

    #[test]
    fn generate_is_offered_only_above_three() {
        let mut state = with(&["a", "b", "c"]);
        assert!(!state.can_generate());
        state.add_ingredient("d");
        assert!(state.can_generate());
    }

    #[test]
    fn recipe_request_snapshots_the_list() {
        let mut state = with(&["egg", "flour"]);
        let request = state.recipe_request();
        state.add_ingredient("milk");
        assert_eq!(request.ingredients, vec!["egg", "flour"]);
    }

    #[test]
    fn last_recipe_wins() {
        let mut state = with(&["a", "b", "c", "d"]);
        assert!(state.set_recipe("first".to_string()).changed());
        assert!(state.set_recipe("second".to_string()).changed());
        assert!(!state.set_recipe("second".to_string()).changed());
        assert_eq!(state.recipe(), "second");
        assert_eq!(state.ingredients().len(), 4);
    }

    #[test]
    fn only_new_text_scrolls_into_view() {
        let mut state = with(&["a", "b", "c", "d"]);
        assert_eq!(state.set_recipe(String::new()), RecipeChange::Unchanged);

        let arrived = state.set_recipe("Bake it".to_string());
        assert_eq!(arrived, RecipeChange::Arrived);
        assert!(arrived.scrolls());

        let repeated = state.set_recipe("Bake it".to_string());
        assert!(!repeated.changed());
        assert!(!repeated.scrolls());

        let cleared = state.set_recipe(String::new());
        assert_eq!(cleared, RecipeChange::Cleared);
        assert!(cleared.changed());
        assert!(!cleared.scrolls());
    }
}
