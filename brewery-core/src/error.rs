use thiserror::Error;

/// Upstream directory failure. Terminal for the query that hit it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("request to brewery directory failed: {0}")]
    Transport(String),

    #[error("brewery directory returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to parse brewery directory response: {0}")]
    Decode(String),
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if err.is_builder() {
            FetchError::Client(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}
