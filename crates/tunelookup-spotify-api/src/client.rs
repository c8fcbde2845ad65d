use crate::auth::client_credentials::request_client_credentials_token;
use crate::bearer_token::BearerToken;
use crate::credentials::ClientCredentials;
use crate::endpoints::Endpoints;
use crate::error::Result;
use crate::get_tracks::get_tracks;
use crate::track::Tracks;
use crate::track_id::TrackId;

/// Catalog lookups authenticated once with the client-credentials flow.
///
/// The token obtained in [`SpotifyClient::connect`] is used for every call
/// and never refreshed.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    bearer: BearerToken,
}

impl SpotifyClient {
    pub async fn connect(credentials: ClientCredentials) -> Result<Self> {
        Self::connect_with(credentials, Endpoints::default()).await
    }

    pub async fn connect_with(credentials: ClientCredentials, endpoints: Endpoints) -> Result<Self> {
        let http = reqwest::Client::new();
        let bearer = request_client_credentials_token(&http, &endpoints, &credentials).await?;
        Ok(Self {
            http,
            endpoints,
            bearer,
        })
    }

    /// Look up one track. The result is a one-element batch, not a bare track.
    pub async fn get_song_title(&self, uri: &str) -> Result<Tracks> {
        self.get_song_titles(&[uri]).await
    }

    /// Look up several tracks in a single request.
    pub async fn get_song_titles<S: AsRef<str>>(&self, uris: &[S]) -> Result<Tracks> {
        let ids = uris
            .iter()
            .map(|uri| TrackId::from_uri(uri.as_ref()))
            .collect::<Vec<_>>();
        get_tracks(&self.http, &self.endpoints, &ids, None, &self.bearer).await
    }
}
