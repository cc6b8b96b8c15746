use crate::model::meme::{Meme, MemeCandidate, MemeField};

/// Upper bound of the shuffle draw. The draw does not depend on how many
/// candidates were fetched.
pub const SHUFFLE_RANGE: usize = 10;

/// Maps a uniform sample in `[0, 1)` to a candidate index in
/// `0..=SHUFFLE_RANGE` by rounding up, so `0` is only hit for an exact
/// zero sample.
pub fn draw_index(sample: f64) -> usize {
    let scaled = (sample.clamp(0.0, 1.0) * SHUFFLE_RANGE as f64).ceil();
    scaled as usize
}

/// Result of a shuffle request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shuffle {
    /// The image was replaced by the candidate at this index.
    Picked(usize),
    /// The drawn index is past the end of the fetched list; nothing changed.
    OutOfRange { index: usize, available: usize },
}

/// State of the meme generator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemeState {
    meme: Meme,
    candidates: Vec<MemeCandidate>,
}

impl MemeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meme(&self) -> &Meme {
        &self.meme
    }

    pub fn candidates(&self) -> &[MemeCandidate] {
        &self.candidates
    }

    /// Updates one caption; the other caption and the image are untouched.
    pub fn set_field(&mut self, field: MemeField, value: String) {
        match field {
            MemeField::TopText => self.meme.top_text = value,
            MemeField::BottomText => self.meme.bottom_text = value,
        }
    }

    pub fn set_candidates(&mut self, candidates: Vec<MemeCandidate>) {
        self.candidates = candidates;
    }

    /// Swaps the image for the candidate picked by `sample`.
    pub fn shuffle(&mut self, sample: f64) -> Shuffle {
        let index = draw_index(sample);
        match self.candidates.get(index) {
            Some(candidate) => {
                self.meme.image_url = candidate.url.clone();
                Shuffle::Picked(index)
            }
            None => Shuffle::OutOfRange {
                index,
                available: self.candidates.len(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(count: usize) -> Vec<MemeCandidate> {
        (0..count)
            .map(|i| MemeCandidate {
                id: i.to_string(),
                name: format!("meme {i}"),
                url: format!("https://i.imgflip.com/{i}.jpg"),
                width: 500,
                height: 500,
                box_count: 2,
            })
            .collect()
    }

    #[test]
    fn draw_rounds_up_into_one_to_ten() {
        assert_eq!(draw_index(0.0), 0);
        assert_eq!(draw_index(0.01), 1);
        assert_eq!(draw_index(0.1), 1);
        assert_eq!(draw_index(0.55), 6);
        assert_eq!(draw_index(0.999), 10);
    }

    #[test]
    fn top_text_change_leaves_the_rest_alone() {
        let mut state = MemeState::new();
        let before = state.meme().clone();

        state.set_field(MemeField::TopText, "Hello".to_string());

        assert_eq!(state.meme().top_text, "Hello");
        assert_eq!(state.meme().bottom_text, before.bottom_text);
        assert_eq!(state.meme().image_url, before.image_url);
    }

    #[test]
    fn shuffle_replaces_only_the_image() {
        let mut state = MemeState::new();
        state.set_field(MemeField::BottomText, "bottom".to_string());
        state.set_candidates(candidates(100));

        assert_eq!(state.shuffle(0.25), Shuffle::Picked(3));
        assert_eq!(state.meme().image_url, "https://i.imgflip.com/3.jpg");
        assert_eq!(state.meme().top_text, "One does not simply");
        assert_eq!(state.meme().bottom_text, "bottom");
    }

    #[test]
    fn shuffle_before_candidates_load_is_a_no_op() {
        let mut state = MemeState::new();
        let before = state.meme().clone();

        assert_eq!(
            state.shuffle(0.5),
            Shuffle::OutOfRange {
                index: 5,
                available: 0
            }
        );
        assert_eq!(state.meme(), &before);
    }

    #[test]
    fn short_candidate_list_can_be_overrun() {
        let mut state = MemeState::new();
        state.set_candidates(candidates(4));

        assert!(matches!(state.shuffle(0.85), Shuffle::OutOfRange { index: 9, .. }));
        assert_eq!(state.shuffle(0.29), Shuffle::Picked(3));
    }

    #[test]
    fn input_names_round_trip() {
        for field in [MemeField::TopText, MemeField::BottomText] {
            assert_eq!(MemeField::from_input_name(field.input_name()), Some(field));
        }
        assert_eq!(MemeField::from_input_name("imageUrl"), None);
    }

    #[test]
    fn parses_imgflip_listing() {
        let body = r#"{
            "success": true,
            "data": { "memes": [
                { "id": "181913649", "name": "Drake Hotline Bling",
                  "url": "https://i.imgflip.com/30b1gx.jpg",
                  "width": 1200, "height": 1200, "box_count": 2, "captions": 1000 }
            ] }
        }"#;
        let parsed: crate::model::meme::MemeListResponse =
            serde_json::from_str(body).expect("listing parses");
        assert!(parsed.success);
        assert_eq!(parsed.data.memes[0].url, "https://i.imgflip.com/30b1gx.jpg");
    }
}
