pub mod chef;
pub mod facts;
pub mod meme;
pub mod travel;
