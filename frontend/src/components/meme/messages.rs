use common::model::meme::{MemeCandidate, MemeField};

pub enum Msg {
    FieldChanged { field: MemeField, value: String },
    NewImage,
    CandidatesLoaded(Vec<MemeCandidate>),
}
