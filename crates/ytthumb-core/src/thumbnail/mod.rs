//! Thumbnail URL derivation.
//!
//! Every video has five predictable thumbnail URLs on the image host. The
//! descriptors built here only describe them; whether an image actually
//! exists is found out when it is probed or downloaded.

mod sanitize;

pub use sanitize::sanitize_filename_for_linux;

use crate::extract::VideoId;
use crate::i18n::{keys, Translator};

/// Base of every thumbnail URL.
pub const IMAGE_HOST: &str = "https://img.youtube.com/vi";

/// Fallback when sanitizing leaves nothing usable.
const DEFAULT_FILENAME: &str = "youtube-thumbnail.jpg";

/// The five thumbnail variants, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbnailVariant {
    MaxRes,
    Standard,
    High,
    Medium,
    Default,
}

impl ThumbnailVariant {
    pub fn all() -> [ThumbnailVariant; 5] {
        [
            ThumbnailVariant::MaxRes,
            ThumbnailVariant::Standard,
            ThumbnailVariant::High,
            ThumbnailVariant::Medium,
            ThumbnailVariant::Default,
        ]
    }

    /// File stem on the image host.
    pub fn file_stem(self) -> &'static str {
        match self {
            ThumbnailVariant::MaxRes => "maxresdefault",
            ThumbnailVariant::Standard => "sddefault",
            ThumbnailVariant::High => "hqdefault",
            ThumbnailVariant::Medium => "mqdefault",
            ThumbnailVariant::Default => "default",
        }
    }

    pub fn dimensions(self) -> (u32, u32) {
        match self {
            ThumbnailVariant::MaxRes => (1280, 720),
            ThumbnailVariant::Standard => (640, 480),
            ThumbnailVariant::High => (480, 360),
            ThumbnailVariant::Medium => (320, 180),
            ThumbnailVariant::Default => (120, 90),
        }
    }

    /// Display size, e.g. `1280x720`.
    pub fn size(self) -> String {
        let (w, h) = self.dimensions();
        format!("{w}x{h}")
    }

    pub fn label_key(self) -> &'static str {
        match self {
            ThumbnailVariant::MaxRes => keys::THUMBNAIL_MAX_RES,
            ThumbnailVariant::Standard => keys::THUMBNAIL_SD,
            ThumbnailVariant::High => keys::THUMBNAIL_HIGH,
            ThumbnailVariant::Medium => keys::THUMBNAIL_MEDIUM,
            ThumbnailVariant::Default => keys::THUMBNAIL_DEFAULT,
        }
    }

    /// Short name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ThumbnailVariant::MaxRes => "maxres",
            ThumbnailVariant::Standard => "sd",
            ThumbnailVariant::High => "hq",
            ThumbnailVariant::Medium => "mq",
            ThumbnailVariant::Default => "default",
        }
    }

    /// Parses a size (`640x480`), a short name (`sd`) or a file stem (`sddefault`).
    pub fn parse(s: &str) -> Option<ThumbnailVariant> {
        let s = s.trim().to_ascii_lowercase();
        let s = s.replace('×', "x");
        ThumbnailVariant::all()
            .into_iter()
            .find(|v| s == v.size() || s == v.name() || s == v.file_stem())
    }

    pub fn url_for(self, id: &VideoId) -> String {
        format!("{}/{}/{}.jpg", IMAGE_HOST, id, self.file_stem())
    }
}

/// One thumbnail variant of one video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailDescriptor {
    pub variant: ThumbnailVariant,
    /// Translated variant name.
    pub label: String,
    pub width: u32,
    pub height: u32,
    /// `WxH`, as shown to the user and used in the download filename.
    pub size: String,
    pub url: String,
}

impl ThumbnailDescriptor {
    pub fn new(id: &VideoId, variant: ThumbnailVariant, translator: &Translator) -> Self {
        let (width, height) = variant.dimensions();
        ThumbnailDescriptor {
            variant,
            label: translator.t(variant.label_key()).to_string(),
            width,
            height,
            size: variant.size(),
            url: variant.url_for(id),
        }
    }

    /// Local filename for a download: `youtube-thumbnail-{id}-{size}.jpg`,
    /// sanitized because the identifier is arbitrary text.
    pub fn download_filename(&self, id: &VideoId) -> String {
        let raw = format!("youtube-thumbnail-{}-{}.jpg", id, self.size);
        let sanitized = sanitize_filename_for_linux(&raw);
        if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
            DEFAULT_FILENAME.to_string()
        } else {
            sanitized
        }
    }
}

/// The five descriptors for `id`, in fixed order from 1280x720 down to 120x90.
pub fn derive(id: &VideoId, translator: &Translator) -> [ThumbnailDescriptor; 5] {
    ThumbnailVariant::all().map(|variant| ThumbnailDescriptor::new(id, variant, translator))
}
