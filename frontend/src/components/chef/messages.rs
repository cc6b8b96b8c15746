pub enum Msg {
    SubmitIngredient,
    RequestRecipe,
    RecipeReceived(String),
}
