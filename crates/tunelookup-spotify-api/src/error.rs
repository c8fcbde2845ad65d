use http::StatusCode;
use serde::Deserialize;

pub type Result<T, E = SpotifyError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum SpotifyError {
    #[error("Spotify rejected the client credentials ({status}): {message}")]
    Authentication { status: StatusCode, message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Invalid request ({status}): {message}")]
    InvalidRequest { status: StatusCode, message: String },

    #[error("Spotify is unavailable ({status}): {message}")]
    TransientService { status: StatusCode, message: String },

    #[error("Request failed before a response arrived")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to deserialize:\n{body}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Invalid endpoint url")]
    Url(#[from] url::ParseError),

    #[error("Missing env var: {0}")]
    MissingEnv(&'static str),
}

impl SpotifyError {
    /// Classify a non-success response from the Web API.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = error_message(body);
        match status {
            StatusCode::NOT_FOUND => SpotifyError::NotFound { message },
            StatusCode::TOO_MANY_REQUESTS => SpotifyError::TransientService { status, message },
            s if s.is_server_error() => SpotifyError::TransientService { status, message },
            _ => SpotifyError::InvalidRequest { status, message },
        }
    }

    /// Classify a non-success response from the accounts service.
    pub fn from_token_status(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                SpotifyError::Authentication {
                    status,
                    message: error_message(body),
                }
            }
            _ => Self::from_status(status, body),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SpotifyError::Authentication { status, .. }
            | SpotifyError::InvalidRequest { status, .. }
            | SpotifyError::TransientService { status, .. } => Some(*status),
            SpotifyError::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            SpotifyError::Transport(e) => e.status(),
            SpotifyError::Decode { .. } | SpotifyError::Url(_) | SpotifyError::MissingEnv(_) => None,
        }
    }
}

/// Web API errors look like `{"error": {"status": 400, "message": "..."}}`,
/// the accounts service uses `{"error": "...", "error_description": "..."}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Api { error: ApiError },
    OAuth {
        error: String,
        error_description: Option<String>,
    },
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody::Api { error }) => error.message,
        Ok(ErrorBody::OAuth {
            error,
            error_description,
        }) => error_description.unwrap_or(error),
        Err(_) => body.to_string(),
    }
}
