use common::state::meme::MemeState;

/// State of the meme generator component.
pub struct MemeComponent {
    pub state: MemeState,

    /// Guard so the candidate list is fetched only on the first render.
    pub loaded: bool,
}

impl MemeComponent {
    pub fn new() -> Self {
        Self {
            state: MemeState::new(),
            loaded: false,
        }
    }
}
