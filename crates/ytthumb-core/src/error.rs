//! Library error type.
//!
//! User-facing kinds map onto a translation key so the presentation layer can
//! show a localized message; the rest are ambient failures.

use crate::i18n::keys;

#[derive(Debug, thiserror::Error)]
pub enum ThumbError {
    /// Non-empty input that matched none of the recognized URL shapes.
    #[error("not a recognized video URL: {input:?}")]
    InvalidUrl { input: String },

    /// Fetching or saving a thumbnail failed. Isolated to one descriptor.
    #[error("download of {url} failed: {reason}")]
    DownloadFailed { url: String, reason: String },

    /// The image host has no image for this variant (e.g. HTTP 404).
    #[error("image not available at {url} (HTTP {status})")]
    ImageUnavailable { url: String, status: u32 },

    /// The privacy-policy document could not be read or fetched.
    #[error("could not load privacy policy from {source_name}: {reason}")]
    PolicyLoadFailed { source_name: String, reason: String },

    #[error("unknown language code: {code:?}")]
    UnknownLanguage { code: String },

    #[error("config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ThumbError {
    /// Translation key for the message shown to the user, if this kind has one.
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            ThumbError::InvalidUrl { .. } => Some(keys::ERROR_INVALID_URL),
            ThumbError::DownloadFailed { .. } => Some(keys::ERROR_DOWNLOAD_FAILED),
            ThumbError::ImageUnavailable { .. } => Some(keys::IMAGE_NOT_AVAILABLE),
            ThumbError::PolicyLoadFailed { .. }
            | ThumbError::UnknownLanguage { .. }
            | ThumbError::Config(_)
            | ThumbError::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ThumbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_kinds_have_message_keys() {
        let e = ThumbError::InvalidUrl {
            input: "nope".into(),
        };
        assert_eq!(e.message_key(), Some("errorInvalidUrl"));
        let e = ThumbError::DownloadFailed {
            url: "u".into(),
            reason: "r".into(),
        };
        assert_eq!(e.message_key(), Some("errorDownloadFailed"));
        let e = ThumbError::ImageUnavailable {
            url: "u".into(),
            status: 404,
        };
        assert_eq!(e.message_key(), Some("imageNotAvailable"));
    }

    #[test]
    fn policy_failure_is_not_translated() {
        let e = ThumbError::PolicyLoadFailed {
            source_name: "/privacy".into(),
            reason: "gone".into(),
        };
        assert!(e.message_key().is_none());
        assert!(e.to_string().contains("/privacy"));
    }
}
