//! Mock Spotify hosts shared by the integration tests.
#![allow(dead_code)]

use serde_json::json;
use tunelookup_spotify_api::ClientCredentials;
use tunelookup_spotify_api::Endpoints;
use tunelookup_spotify_api::SpotifyClient;
use url::Url;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::method;
use wiremock::matchers::path;

pub const TOKEN: &str = "test-token";

pub fn credentials() -> ClientCredentials {
    ClientCredentials::new("test-client-id", "test-client-secret")
}

pub fn endpoints(server: &MockServer) -> Endpoints {
    Endpoints::single(Url::parse(&server.uri()).expect("mock server uri"))
}

/// Mount a token endpoint that accepts any credentials.
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(server)
        .await;
}

/// Start a mock server with a working token endpoint and connect to it.
pub async fn connected() -> (MockServer, SpotifyClient) {
    let server = MockServer::start().await;
    mount_token(&server).await;
    let client = SpotifyClient::connect_with(credentials(), endpoints(&server))
        .await
        .expect("connect to mock server");
    (server, client)
}

pub fn track_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "album": {
            "album_type": "album",
            "album_group": "single",
            "total_tracks": 10,
            "available_markets": ["US"],
            "external_urls": { "spotify": format!("https://open.spotify.com/album/{id}-album") },
            "href": format!("https://api.spotify.com/v1/albums/{id}-album"),
            "id": format!("{id}-album"),
            "images": [{ "url": "https://i.scdn.co/image/x", "height": 640, "width": 640 }],
            "name": "Test Album",
            "release_date": "2020-01-01",
            "release_date_precision": "day",
            "type": "album",
            "uri": format!("spotify:album:{id}-album"),
            "artists": []
        },
        "artists": [{
            "external_urls": { "spotify": "https://open.spotify.com/artist/artist1" },
            "href": "https://api.spotify.com/v1/artists/artist1",
            "id": "artist1",
            "name": "Test Artist",
            "type": "artist",
            "uri": "spotify:artist:artist1"
        }],
        "available_markets": ["US"],
        "disc_number": 1,
        "duration_ms": 210000,
        "explicit": false,
        "external_ids": { "isrc": "USRC17607839" },
        "external_urls": { "spotify": format!("https://open.spotify.com/track/{id}") },
        "href": format!("https://api.spotify.com/v1/tracks/{id}"),
        "id": id,
        "name": name,
        "popularity": 50,
        "preview_url": null,
        "track_number": 1,
        "type": "track",
        "uri": format!("spotify:track:{id}"),
        "is_local": false
    })
}

/// Query string pairs of every request that hit `/v1/tracks`.
pub async fn track_requests(server: &MockServer) -> Vec<Vec<(String, String)>> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .into_iter()
        .filter(|req| req.url.path() == "/v1/tracks")
        .map(|req| req.url.query_pairs().into_owned().collect())
        .collect()
}
