use crate::bearer_token::BearerToken;
use crate::credentials::ClientCredentials;
use crate::endpoints::Endpoints;
use crate::error::Result;
use crate::error::SpotifyError;
use crate::fetch::decode;
use base64::Engine;
use serde::Deserialize;
use tracing::debug;

/// https://developer.spotify.com/documentation/web-api/tutorials/client-credentials-flow
pub async fn request_client_credentials_token(
    http: &reqwest::Client,
    endpoints: &Endpoints,
    credentials: &ClientCredentials,
) -> Result<BearerToken> {
    let url = endpoints.token_url()?;
    debug!("Requesting client credentials token from {}", url);

    let res = http
        .post(url)
        .header(http::header::AUTHORIZATION, basic_authorization(credentials))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;
    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        return Err(SpotifyError::from_token_status(status, &body));
    }

    let resp: TokenResponse = decode(body)?;
    debug!("Access Token: len={}", resp.access_token.len());
    debug!("Token type: {}", resp.token_type);
    debug!("Expires in: {}s", resp.expires_in);

    Ok(BearerToken(resp.access_token))
}

fn basic_authorization(credentials: &ClientCredentials) -> String {
    let pair = format!("{}:{}", credentials.client_id, credentials.client_secret);
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(pair)
    )
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    token_type: String,
    expires_in: u64,
}
