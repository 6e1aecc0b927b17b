//! Video identifier extraction from pasted URLs.
//!
//! Recognized shapes, tried in order:
//! - `youtube.com/watch?v=ID`
//! - `youtu.be/ID`
//! - `youtube.com/embed/ID`
//! - `youtube.com/v/ID`
//! - `m.youtube.com/watch?v=ID`
//!
//! The identifier runs up to the first `&`, `?`, `#` or newline, so trailing
//! query parameters and fragments never leak into it. Nothing beyond that
//! shape is validated.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Opaque video identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Which recognized URL shape an identifier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlShape {
    Watch,
    ShortLink,
    Embed,
    LegacyPath,
    Mobile,
}

static PATTERNS: Lazy<Vec<(UrlShape, Regex)>> = Lazy::new(|| {
    [
        (UrlShape::Watch, r"youtube\.com/watch\?v=([^&\n?#]+)"),
        (UrlShape::ShortLink, r"youtu\.be/([^&\n?#]+)"),
        (UrlShape::Embed, r"youtube\.com/embed/([^&\n?#]+)"),
        (UrlShape::LegacyPath, r"youtube\.com/v/([^&\n?#]+)"),
        (UrlShape::Mobile, r"m\.youtube\.com/watch\?v=([^&\n?#]+)"),
    ]
    .into_iter()
    .map(|(shape, pattern)| (shape, Regex::new(pattern).expect("static pattern compiles")))
    .collect()
});

impl UrlShape {
    /// First shape in order that yields a non-empty identifier for `input`.
    pub fn of(input: &str) -> Option<(UrlShape, VideoId)> {
        PATTERNS.iter().find_map(|(shape, re)| {
            re.captures(input)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
                .filter(|id| !id.is_empty())
                .map(|id| (*shape, VideoId(id.to_string())))
        })
    }
}

/// Extracts the video identifier from `input`, or `None` when the input is
/// empty or matches no recognized shape.
pub fn extract(input: &str) -> Option<VideoId> {
    if input.trim().is_empty() {
        return None;
    }
    UrlShape::of(input).map(|(_, id)| id)
}

/// What a submission should do with `input`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Empty or whitespace only: ignore silently.
    Empty,
    Recognized(VideoId),
    /// Non-empty and unmatched: report an invalid URL.
    Unrecognized,
}

pub fn classify(input: &str) -> InputOutcome {
    if input.trim().is_empty() {
        return InputOutcome::Empty;
    }
    match UrlShape::of(input) {
        Some((shape, id)) => {
            tracing::debug!(?shape, id = %id, "recognized video url");
            InputOutcome::Recognized(id)
        }
        None => InputOutcome::Unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(input: &str) -> Option<String> {
        extract(input).map(|v| v.as_str().to_string())
    }

    #[test]
    fn all_shapes_yield_same_identifier() {
        let inputs = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
        ];
        for input in inputs {
            assert_eq!(id(input).as_deref(), Some("dQw4w9WgXcQ"), "{input}");
        }
    }

    #[test]
    fn shapes_are_reported() {
        assert_eq!(
            UrlShape::of("youtu.be/abc").map(|(s, _)| s),
            Some(UrlShape::ShortLink)
        );
        assert_eq!(
            UrlShape::of("https://youtube.com/embed/abc").map(|(s, _)| s),
            Some(UrlShape::Embed)
        );
        assert_eq!(
            UrlShape::of("https://youtube.com/v/abc").map(|(s, _)| s),
            Some(UrlShape::LegacyPath)
        );
        // The watch pattern also covers the mobile domain and comes first.
        assert_eq!(
            UrlShape::of("https://m.youtube.com/watch?v=abc").map(|(s, _)| s),
            Some(UrlShape::Watch)
        );
    }

    #[test]
    fn empty_and_whitespace_are_absent() {
        assert_eq!(id(""), None);
        assert_eq!(id("   "), None);
        assert_eq!(classify(""), InputOutcome::Empty);
        assert_eq!(classify(" \t\n "), InputOutcome::Empty);
    }

    #[test]
    fn identifier_stops_at_separators() {
        assert_eq!(id("https://youtu.be/abc123&foo=bar").as_deref(), Some("abc123"));
        assert_eq!(
            id("https://www.youtube.com/watch?v=abc123&t=42s").as_deref(),
            Some("abc123")
        );
        assert_eq!(id("https://youtu.be/abc123?si=xyz").as_deref(), Some("abc123"));
        assert_eq!(
            id("https://www.youtube.com/embed/abc123#start").as_deref(),
            Some("abc123")
        );
        assert_eq!(id("https://youtu.be/abc123\nmore").as_deref(), Some("abc123"));
    }

    #[test]
    fn unrecognized_input_is_absent() {
        assert_eq!(id("not a url"), None);
        assert_eq!(id("https://vimeo.com/12345"), None);
        assert_eq!(classify("not a url"), InputOutcome::Unrecognized);
    }

    #[test]
    fn empty_capture_is_not_an_identifier() {
        assert_eq!(id("https://youtu.be/?si=abc"), None);
        assert_eq!(classify("https://www.youtube.com/watch?v=&x=1"), InputOutcome::Unrecognized);
    }

    #[test]
    fn scheme_and_prefix_are_optional_and_shape_may_be_embedded() {
        assert_eq!(id("youtube.com/watch?v=XYZ").as_deref(), Some("XYZ"));
        assert_eq!(
            id("look at this: https://youtu.be/XYZ it's great").as_deref(),
            Some("XYZ it's great")
        );
    }

    #[test]
    fn identifier_is_opaque() {
        assert_eq!(id("https://youtu.be/a/b/c").as_deref(), Some("a/b/c"));
        let v = extract("https://youtu.be/abc").unwrap();
        assert_eq!(v.to_string(), "abc");
        assert_eq!(v.as_ref(), "abc");
    }
}
