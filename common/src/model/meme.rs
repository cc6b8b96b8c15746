use serde::{Deserialize, Serialize};

/// Public listing of popular meme templates.
pub const MEME_LIST_URL: &str = "https://api.imgflip.com/get_memes";

/// The captioned image shown by the meme generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meme {
    pub top_text: String,
    pub bottom_text: String,
    pub image_url: String,
}

impl Default for Meme {
    fn default() -> Self {
        Self {
            top_text: "One does not simply".to_string(),
            bottom_text: "Walk into Mordor".to_string(),
            image_url: "http://i.imgflip.com/1bij.jpg".to_string(),
        }
    }
}

/// Caption fields that can be edited through the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemeField {
    TopText,
    BottomText,
}

impl MemeField {
    /// Value of the `name` attribute of the matching `<input>`.
    pub fn input_name(self) -> &'static str {
        match self {
            MemeField::TopText => "topText",
            MemeField::BottomText => "bottomText",
        }
    }

    /// Resolves an input `name` attribute back to the field it edits.
    pub fn from_input_name(name: &str) -> Option<Self> {
        match name {
            "topText" => Some(MemeField::TopText),
            "bottomText" => Some(MemeField::BottomText),
            _ => None,
        }
    }
}

/// One image template from the imgflip listing.
///
/// Only `url` is needed to render; the other fields are kept because the
/// listing always carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemeCandidate {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub box_count: u32,
}

/// Envelope returned by `GET /get_memes`.
#[derive(Debug, Clone, Deserialize)]
pub struct MemeListResponse {
    pub success: bool,
    pub data: MemeListData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemeListData {
    pub memes: Vec<MemeCandidate>,
}
