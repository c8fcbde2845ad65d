use url::Url;

pub const ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const API_URL: &str = "https://api.spotify.com";

/// Base URLs of the two Spotify hosts the crate talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub accounts: Url,
    pub api: Url,
}

impl Endpoints {
    pub fn new(accounts: Url, api: Url) -> Self {
        Self { accounts, api }
    }

    /// Point both hosts at one base URL, e.g. a local mock server.
    pub fn single(base: Url) -> Self {
        Self::new(base.clone(), base)
    }

    pub fn token_url(&self) -> Result<Url, url::ParseError> {
        self.accounts.join("/api/token")
    }

    pub fn tracks_url(&self) -> Result<Url, url::ParseError> {
        self.api.join("/v1/tracks")
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            accounts: Url::parse(ACCOUNTS_URL).expect("static accounts url"),
            api: Url::parse(API_URL).expect("static api url"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.token_url().unwrap().as_str(),
            "https://accounts.spotify.com/api/token"
        );
        assert_eq!(
            endpoints.tracks_url().unwrap().as_str(),
            "https://api.spotify.com/v1/tracks"
        );
    }

    #[test]
    fn single_base_keeps_port() {
        let endpoints = Endpoints::single(Url::parse("http://127.0.0.1:3030").unwrap());
        assert_eq!(
            endpoints.tracks_url().unwrap().as_str(),
            "http://127.0.0.1:3030/v1/tracks"
        );
    }
}
