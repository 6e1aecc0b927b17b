//! Page state: an immutable record advanced by discrete events.
//!
//! `Idle` until a submission is recognized, then `Loaded`. A failed
//! submission or download moves to `Error` but keeps whatever was loaded
//! before; only a successful submission replaces the descriptors.

use crate::extract::{classify, InputOutcome, VideoId};
use crate::i18n::{keys, Language, Translator};
use crate::thumbnail::{derive, ThumbnailDescriptor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    InputChanged(String),
    Submitted,
    LanguageChanged(Language),
    DownloadFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loaded,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    input: String,
    video_id: Option<VideoId>,
    descriptors: Vec<ThumbnailDescriptor>,
    /// Translation key of the current error, if any.
    error: Option<&'static str>,
    language: Language,
}

impl PageState {
    pub fn new(language: Language) -> Self {
        PageState {
            language,
            ..PageState::default()
        }
    }

    pub fn apply(self, event: PageEvent) -> PageState {
        match event {
            PageEvent::InputChanged(input) => PageState { input, ..self },
            PageEvent::Submitted => self.submit(),
            PageEvent::LanguageChanged(language) => {
                let descriptors = match &self.video_id {
                    Some(id) => derive(id, &Translator::new(language)).to_vec(),
                    None => Vec::new(),
                };
                PageState {
                    language,
                    descriptors,
                    ..self
                }
            }
            PageEvent::DownloadFailed => PageState {
                error: Some(keys::ERROR_DOWNLOAD_FAILED),
                ..self
            },
        }
    }

    fn submit(self) -> PageState {
        let cleared = PageState {
            error: None,
            ..self
        };
        match classify(&cleared.input) {
            InputOutcome::Empty => cleared,
            InputOutcome::Recognized(id) => {
                let descriptors = derive(&id, &cleared.translator()).to_vec();
                PageState {
                    video_id: Some(id),
                    descriptors,
                    ..cleared
                }
            }
            InputOutcome::Unrecognized => {
                tracing::debug!(input = %cleared.input, "unrecognized url submitted");
                PageState {
                    error: Some(keys::ERROR_INVALID_URL),
                    ..cleared
                }
            }
        }
    }

    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::Error
        } else if self.video_id.is_some() {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn video_id(&self) -> Option<&VideoId> {
        self.video_id.as_ref()
    }

    pub fn descriptors(&self) -> &[ThumbnailDescriptor] {
        &self.descriptors
    }

    pub fn error_key(&self) -> Option<&'static str> {
        self.error
    }

    /// Translated error message, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.map(|key| self.translator().t(key))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(state: PageState, input: &str) -> PageState {
        state
            .apply(PageEvent::InputChanged(input.to_string()))
            .apply(PageEvent::Submitted)
    }

    #[test]
    fn starts_idle() {
        let s = PageState::new(Language::En);
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.descriptors().is_empty());
    }

    #[test]
    fn valid_submission_loads_five_descriptors() {
        let s = submit(
            PageState::new(Language::En),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        );
        assert_eq!(s.phase(), Phase::Loaded);
        assert_eq!(s.video_id().unwrap().as_str(), "dQw4w9WgXcQ");
        let urls: Vec<&str> = s.descriptors().iter().map(|d| d.url.as_str()).collect();
        assert_eq!(urls.len(), 5);
        assert!(urls[0].ends_with("dQw4w9WgXcQ/maxresdefault.jpg"));
        assert!(urls[1].ends_with("dQw4w9WgXcQ/sddefault.jpg"));
        assert!(urls[2].ends_with("dQw4w9WgXcQ/hqdefault.jpg"));
        assert!(urls[3].ends_with("dQw4w9WgXcQ/mqdefault.jpg"));
        assert!(urls[4].ends_with("dQw4w9WgXcQ/default.jpg"));
    }

    #[test]
    fn empty_submission_shows_no_error() {
        let s = submit(PageState::new(Language::En), "   ");
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.error_message().is_none());
    }

    #[test]
    fn empty_submission_clears_previous_error_and_keeps_results() {
        let s = submit(PageState::new(Language::En), "https://youtu.be/abc");
        let s = submit(s, "garbage");
        assert_eq!(s.phase(), Phase::Error);
        let s = submit(s, "");
        assert_eq!(s.phase(), Phase::Loaded);
        assert_eq!(s.video_id().unwrap().as_str(), "abc");
    }

    #[test]
    fn invalid_submission_keeps_previous_results() {
        let s = submit(PageState::new(Language::En), "https://youtu.be/abc123");
        let before = s.descriptors().to_vec();
        let s = submit(s, "not a url");
        assert_eq!(s.phase(), Phase::Error);
        assert_eq!(s.error_key(), Some("errorInvalidUrl"));
        assert_eq!(s.error_message(), Some("Please enter a valid YouTube URL"));
        assert_eq!(s.descriptors(), before.as_slice());
        assert_eq!(s.video_id().unwrap().as_str(), "abc123");
    }

    #[test]
    fn new_submission_replaces_results() {
        let s = submit(PageState::new(Language::En), "https://youtu.be/first");
        let s = submit(s, "https://youtu.be/second");
        assert_eq!(s.video_id().unwrap().as_str(), "second");
        assert!(s.descriptors().iter().all(|d| d.url.contains("second")));
    }

    #[test]
    fn download_failure_keeps_descriptors() {
        let s = submit(PageState::new(Language::Es), "https://youtu.be/abc");
        let s = s.apply(PageEvent::DownloadFailed);
        assert_eq!(s.phase(), Phase::Error);
        assert_eq!(s.descriptors().len(), 5);
        assert_eq!(
            s.error_message(),
            Some("La descarga falló, inténtalo de nuevo")
        );
    }

    #[test]
    fn language_change_relabels_descriptors() {
        let s = submit(PageState::new(Language::En), "https://youtu.be/abc");
        assert_eq!(s.descriptors()[1].label, "Standard Definition");
        let s = s.apply(PageEvent::LanguageChanged(Language::Pt));
        assert_eq!(s.language(), Language::Pt);
        assert_eq!(s.descriptors()[1].label, "Definição padrão");
        assert_eq!(s.descriptors()[1].url, "https://img.youtube.com/vi/abc/sddefault.jpg");
    }
}
