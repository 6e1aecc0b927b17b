//! Privacy-policy document: loading with fallback, structure, and the
//! localized policy date.

mod format;

pub use format::{format_policy, split_links, Block, Inline};

use chrono::NaiveDate;
use std::path::PathBuf;

use crate::error::{Result, ThumbError};
use crate::fetch::{self, FetchOptions};
use crate::i18n::{format_long_date, Language};

/// Policy text compiled into the binary.
pub const BUNDLED_POLICY: &str = include_str!("../../assets/privacy.txt");

/// Shown when the policy cannot be loaded. Deliberately untranslated.
pub const FALLBACK_TEXT: &str = "Privacy Policy content could not be loaded.";

/// Date the policy was written.
pub fn policy_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// `policy_date()` formatted for `language`.
pub fn localized_policy_date(language: Language) -> String {
    format_long_date(policy_date(), language)
}

/// Where the policy text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicySource {
    Bundled,
    File(PathBuf),
    Url(String),
}

impl PolicySource {
    /// `None` means the bundled text; `http://` / `https://` values are
    /// fetched; anything else is a local path.
    pub fn from_setting(setting: Option<&str>) -> PolicySource {
        match setting.map(str::trim).filter(|s| !s.is_empty()) {
            None => PolicySource::Bundled,
            Some(s) if s.starts_with("http://") || s.starts_with("https://") => {
                PolicySource::Url(s.to_string())
            }
            Some(s) => PolicySource::File(PathBuf::from(s)),
        }
    }

    fn name(&self) -> String {
        match self {
            PolicySource::Bundled => "bundled policy".to_string(),
            PolicySource::File(p) => p.display().to_string(),
            PolicySource::Url(u) => u.clone(),
        }
    }
}

/// Reads the policy text. Blocking when the source is a URL.
pub fn load_policy(source: &PolicySource, opts: &FetchOptions) -> Result<String> {
    let failed = |reason: String| ThumbError::PolicyLoadFailed {
        source_name: source.name(),
        reason,
    };
    match source {
        PolicySource::Bundled => Ok(BUNDLED_POLICY.to_string()),
        PolicySource::File(path) => std::fs::read_to_string(path).map_err(|e| failed(e.to_string())),
        PolicySource::Url(url) => {
            let bytes = fetch::get(url, opts).map_err(|e| failed(e.to_string()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

/// Policy text, or `FALLBACK_TEXT` when loading fails (logged).
pub fn load_policy_or_fallback(source: &PolicySource, opts: &FetchOptions) -> String {
    match load_policy(source, opts) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("failed to load privacy policy: {}", e);
            FALLBACK_TEXT.to_string()
        }
    }
}
