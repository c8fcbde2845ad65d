use std::ops::Deref;

const URI_PREFIX: &str = "spotify:track:";
const OPEN_URL_PREFIXES: [&str; 2] = [
    "https://open.spotify.com/track/",
    "http://open.spotify.com/track/",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackId(pub String);

impl TrackId {
    /// Accepts `spotify:track:<id>`, an open.spotify.com track link or a bare id.
    ///
    /// Anything else is kept verbatim; the Web API decides whether it is valid.
    pub fn from_uri(uri: &str) -> Self {
        if let Some(id) = uri.strip_prefix(URI_PREFIX) {
            return TrackId(id.to_string());
        }
        for prefix in OPEN_URL_PREFIXES {
            if let Some(rest) = uri.strip_prefix(prefix) {
                let id = rest.split(['?', '#', '/']).next().unwrap_or(rest);
                return TrackId(id.to_string());
            }
        }
        TrackId(uri.to_string())
    }
}

impl From<&str> for TrackId {
    fn from(uri: &str) -> Self {
        TrackId::from_uri(uri)
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl Deref for TrackId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl AsRef<str> for TrackId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_is_reduced_to_id() {
        let id = TrackId::from_uri("spotify:track:1NSNsucHrizvMEfer2tQ5D");
        assert_eq!(id.as_ref(), "1NSNsucHrizvMEfer2tQ5D");
    }

    #[test]
    fn open_link_is_reduced_to_id() {
        let id = TrackId::from_uri("https://open.spotify.com/track/1NSNsucHrizvMEfer2tQ5D?si=abc");
        assert_eq!(id.as_ref(), "1NSNsucHrizvMEfer2tQ5D");
    }

    #[test]
    fn bare_id_passes_through() {
        assert_eq!(TrackId::from("4iV5W9uYEdYUVa79Axb7Rh").to_string(), "4iV5W9uYEdYUVa79Axb7Rh");
    }

    #[test]
    fn other_shapes_are_not_rejected() {
        assert_eq!(&*TrackId::from_uri("spotify:album:xyz"), "spotify:album:xyz");
        assert_eq!(&*TrackId::from_uri(""), "");
    }
}
