use crate::bearer_token::BearerToken;
use crate::error::Result;
use crate::error::SpotifyError;
use url::Url;

/// Authenticated GET returning the decoded JSON body.
pub async fn fetch<T>(
    http: &reqwest::Client,
    url: Url,
    query: &[(&str, &str)],
    bearer: &BearerToken,
) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let res = http
        .get(url)
        .query(query)
        .bearer_auth(&bearer.0)
        .send()
        .await?;
    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        return Err(SpotifyError::from_status(status, &body));
    }
    decode(body)
}

pub(crate) fn decode<T>(body: String) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    match serde_json::from_str(&body) {
        Ok(x) => Ok(x),
        Err(source) => Err(SpotifyError::Decode { source, body }),
    }
}
