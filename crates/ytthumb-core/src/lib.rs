pub mod config;
pub mod download;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod i18n;
pub mod logging;
pub mod policy;
pub mod retry;
pub mod state;
pub mod thumbnail;

pub use error::{Result, ThumbError};
pub use extract::{classify, extract, InputOutcome, VideoId};
pub use i18n::{lookup, Language, LanguageStore, Translator};
pub use thumbnail::{derive, ThumbnailDescriptor, ThumbnailVariant};
