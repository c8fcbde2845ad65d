use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Map;
use serde_json::Value;

/// Envelope of `GET /v1/tracks`.
///
/// Ids the service could not resolve come back as `null` and stay `None`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracks {
    pub tracks: Vec<Option<Track>>,
}

impl Tracks {
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Resolved tracks, skipping `null` entries.
    pub fn found(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter().flatten()
    }
}

/// One track object exactly as the service sent it.
///
/// `id`, `name` and `uri` must be present; every other key is kept untouched
/// in `rest` and can be read through the typed accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Track {
    pub fn album(&self) -> serde_json::Result<Album> {
        self.field("album")
    }

    pub fn artists(&self) -> serde_json::Result<Vec<Artist>> {
        self.field("artists")
    }

    pub fn external_ids(&self) -> serde_json::Result<ExternalIds> {
        self.field("external_ids")
    }

    pub fn duration_ms(&self) -> Option<u64> {
        self.rest.get("duration_ms").and_then(Value::as_u64)
    }

    pub fn explicit(&self) -> Option<bool> {
        self.rest.get("explicit").and_then(Value::as_bool)
    }

    pub fn popularity(&self) -> Option<u64> {
        self.rest.get("popularity").and_then(Value::as_u64)
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.rest.get("preview_url").and_then(Value::as_str)
    }

    /// Decode a key of the record into `T`; a missing key decodes as `null`.
    pub fn field<T: DeserializeOwned>(&self, key: &str) -> serde_json::Result<T> {
        let value = self.rest.get(key).cloned().unwrap_or(Value::Null);
        serde_json::from_value(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub album_type: String,
    pub total_tracks: i64,
    #[serde(default)]
    pub available_markets: Vec<String>,
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    pub name: String,
    pub release_date: String,
    pub release_date_precision: String,
    pub restrictions: Option<Restrictions>,
    #[serde(rename = "type")]
    pub type_field: String,
    pub uri: String,
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<i64>,
    pub width: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restrictions {
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub type_field: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalIds {
    pub isrc: Option<String>,
    pub ean: Option<String>,
    pub upc: Option<String>,
}
