use common::model::meme::{MemeCandidate, MemeListResponse, MEME_LIST_URL};
use gloo_net::http::Request;

/// Fetches the public list of meme templates.
pub async fn fetch_candidates() -> Result<Vec<MemeCandidate>, gloo_net::Error> {
    let listing: MemeListResponse = Request::get(MEME_LIST_URL).send().await?.json().await?;
    if !listing.success {
        return Err(gloo_net::Error::GlooError(
            "meme listing reported success=false".to_string(),
        ));
    }
    Ok(listing.data.memes)
}
