//! Error from a single HTTP attempt, kept apart from `ThumbError` so it can be
//! classified for retry first.

/// Failure of one request attempt.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// URL rejected before any request was made.
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// Curl reported an error (timeout, connection, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}

impl FetchError {
    /// HTTP status of the failed response, if the server answered.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Http(code) => Some(*code),
            FetchError::InvalidUrl { .. } | FetchError::Curl(_) => None,
        }
    }
}
