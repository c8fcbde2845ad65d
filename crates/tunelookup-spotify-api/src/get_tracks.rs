use crate::bearer_token::BearerToken;
use crate::endpoints::Endpoints;
use crate::error::Result;
use crate::fetch::fetch;
use crate::track::Tracks;
use crate::track_id::TrackId;
use tracing::debug;

/// https://developer.spotify.com/documentation/web-api/reference/get-several-tracks
///
/// One request for the whole list, ids joined in the order given.
pub async fn get_tracks(
    http: &reqwest::Client,
    endpoints: &Endpoints,
    track_ids: &[TrackId],
    market: Option<&str>,
    bearer: &BearerToken,
) -> Result<Tracks> {
    let url = endpoints.tracks_url()?;
    let ids = track_ids
        .iter()
        .map(|id| id.as_ref())
        .collect::<Vec<_>>()
        .join(",");
    debug!("Fetching {} track(s) from {}", track_ids.len(), url);

    let mut query = vec![("ids", ids.as_str())];
    if let Some(market) = market {
        query.push(("market", market));
    }
    fetch(http, url, &query, bearer).await
}
