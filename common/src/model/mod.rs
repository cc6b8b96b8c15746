pub mod fact;
pub mod meme;
pub mod place;
pub mod recipe;
