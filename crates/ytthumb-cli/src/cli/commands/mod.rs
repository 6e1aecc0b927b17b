//! CLI command handlers, one per file.

mod completions;
mod download;
mod lang;
mod privacy;
mod shell;
mod show;

pub use completions::run_completions;
pub use download::{run_download, DownloadArgs};
pub use lang::run_lang;
pub use privacy::run_privacy;
pub use shell::run_shell;
pub use show::run_show;

use anyhow::Result;
use ytthumb_core::{classify, InputOutcome, ThumbError, Translator, VideoId};

/// Message shown to the user for `err`: its translation when the kind has
/// one, the error text otherwise.
pub(crate) fn user_message(t: &Translator, err: &ThumbError) -> String {
    match err.message_key() {
        Some(key) => t.t(key).to_string(),
        None => err.to_string(),
    }
}

/// Identifier for a one-shot command. `Ok(None)` for blank input, which is
/// ignored without an error; `ThumbError::InvalidUrl` otherwise.
pub(crate) fn resolve_video(url: &str) -> Result<Option<VideoId>, ThumbError> {
    match classify(url) {
        InputOutcome::Empty => Ok(None),
        InputOutcome::Recognized(id) => Ok(Some(id)),
        InputOutcome::Unrecognized => {
            tracing::info!(input = %url, "rejected url");
            Err(ThumbError::InvalidUrl {
                input: url.to_string(),
            })
        }
    }
}

/// `resolve_video` with the error translated for the command boundary.
pub(crate) fn resolve_video_for(t: &Translator, url: &str) -> Result<Option<VideoId>> {
    resolve_video(url).map_err(|e| anyhow::anyhow!(user_message(t, &e)))
}
