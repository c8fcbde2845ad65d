pub mod bearer_token;
pub mod client;
pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod fetch;
pub mod get_tracks;
pub mod track;
pub mod track_id;
pub mod auth {
    pub mod client_credentials;
}

pub use client::SpotifyClient;
pub use credentials::ClientCredentials;
pub use endpoints::Endpoints;
pub use error::SpotifyError;
pub use track::Tracks;
