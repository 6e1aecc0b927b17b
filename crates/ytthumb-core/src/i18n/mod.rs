//! Translated UI strings.
//!
//! Six bundled languages, each a static table of `(key, text)` pairs. Lookups
//! for a key missing from a table return the key itself so a label is never
//! blank.

mod date;
mod store;
mod tables;

pub use date::format_long_date;
pub use store::{LanguageStore, Preferences};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ThumbError;

/// Translation keys used by the library. The CLI uses further keys by name.
pub mod keys {
    pub const TITLE: &str = "title";
    pub const SUBTITLE: &str = "subtitle";
    pub const INPUT_PLACEHOLDER: &str = "inputPlaceholder";
    pub const GET_THUMBNAIL_BUTTON: &str = "getThumbnailButton";
    pub const ERROR_INVALID_URL: &str = "errorInvalidUrl";
    pub const ERROR_DOWNLOAD_FAILED: &str = "errorDownloadFailed";
    pub const THUMBNAIL_MAX_RES: &str = "thumbnailMaxRes";
    pub const THUMBNAIL_SD: &str = "thumbnailSD";
    pub const THUMBNAIL_HIGH: &str = "thumbnailHigh";
    pub const THUMBNAIL_MEDIUM: &str = "thumbnailMedium";
    pub const THUMBNAIL_DEFAULT: &str = "thumbnailDefault";
    pub const IMAGE_NOT_AVAILABLE: &str = "imageNotAvailable";
    pub const IMAGE_AVAILABLE: &str = "imageAvailable";
    pub const DOWNLOAD_BUTTON: &str = "downloadButton";
    pub const SAVED_TO: &str = "savedTo";
    pub const PRIVACY_POLICY: &str = "privacyPolicy";
    pub const BACK_TO_HOME: &str = "backToHome";
    pub const WRITTEN_BY: &str = "writtenBy";
    pub const ON_DATE: &str = "onDate";
    pub const CURRENT_LANGUAGE: &str = "currentLanguage";
    pub const LANGUAGE_CHANGED: &str = "languageChanged";
}

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Pt,
    Hi,
    Id,
    Ar,
}

/// Direction text is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Wraps `text` in Unicode directional isolates when right-to-left so a
    /// terminal lays it out correctly next to left-to-right text.
    pub fn isolate(self, text: &str) -> String {
        match self {
            TextDirection::Ltr => text.to_string(),
            TextDirection::Rtl => format!("\u{2067}{text}\u{2069}"),
        }
    }
}

impl Language {
    /// All languages, in menu order.
    pub fn all() -> &'static [Language] {
        &[
            Language::En,
            Language::Es,
            Language::Pt,
            Language::Hi,
            Language::Id,
            Language::Ar,
        ]
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Pt => "pt",
            Language::Hi => "hi",
            Language::Id => "id",
            Language::Ar => "ar",
        }
    }

    /// Name of the language in the language itself.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Pt => "Português",
            Language::Hi => "हिन्दी",
            Language::Id => "Bahasa Indonesia",
            Language::Ar => "العربية",
        }
    }

    /// BCP-47 tag used for date formatting.
    pub fn locale(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Es => "es-ES",
            Language::Pt => "pt-BR",
            Language::Hi => "hi-IN",
            Language::Id => "id-ID",
            Language::Ar => "ar-SA",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::Ar => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }

    /// Recognized language for a code, or `None`.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::all()
            .iter()
            .copied()
            .find(|l| l.code().eq_ignore_ascii_case(code.trim()))
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::En => tables::EN,
            Language::Es => tables::ES,
            Language::Pt => tables::PT,
            Language::Hi => tables::HI,
            Language::Id => tables::ID,
            Language::Ar => tables::AR,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ThumbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| ThumbError::UnknownLanguage {
            code: s.to_string(),
        })
    }
}

/// Translated text for `key` in `language`, or `key` itself when the table
/// has no entry.
pub fn lookup<'a>(language: Language, key: &'a str) -> &'a str {
    language
        .table()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

/// Lookup bound to one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        lookup(self.language, key)
    }
}
