//! Current language plus its persisted preference (JSON under the XDG state dir).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{Language, Translator};
use crate::error::{Result, ThumbError};

/// On-disk shape of the preference file. The code is kept as a plain string
/// so an unknown value falls back to the default instead of failing to parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub language: Option<String>,
}

/// Holds the current language. The preference is read once in `load` and
/// written on every `set_language`.
#[derive(Debug, Clone)]
pub struct LanguageStore {
    language: Language,
    path: PathBuf,
}

impl LanguageStore {
    /// Default path for the preference file: `~/.local/state/ytthumb/preferences.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("ytthumb")
            .map_err(|e| ThumbError::Config(e.to_string()))?;
        Ok(xdg_dirs
            .get_state_home()
            .join("ytthumb")
            .join("preferences.json"))
    }

    /// Initialize from the preference at `path`. A missing, unreadable or
    /// unrecognized preference yields the default language.
    pub fn load(path: &Path) -> LanguageStore {
        let language = read_preference(path).unwrap_or_default();
        tracing::debug!(path = %path.display(), language = %language, "loaded language preference");
        LanguageStore {
            language,
            path: path.to_path_buf(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.language)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Switch to `code` and persist it. Unknown codes are rejected and the
    /// current language is kept; so is a failed write.
    pub fn set_language(&mut self, code: &str) -> Result<Language> {
        let language: Language = code.parse()?;
        save_preference(&self.path, language)?;
        self.language = language;
        tracing::info!(language = %language, "language preference saved");
        Ok(language)
    }
}

fn read_preference(path: &Path) -> Option<Language> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(path = %path.display(), "could not read language preference: {}", e);
            return None;
        }
    };
    let prefs: Preferences = match serde_json::from_slice(&bytes) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(path = %path.display(), "ignoring malformed language preference: {}", e);
            return None;
        }
    };
    let code = prefs.language?;
    let language = Language::from_code(&code);
    if language.is_none() {
        tracing::warn!(code = %code, "ignoring unknown language preference");
    }
    language
}

fn save_preference(path: &Path, language: Language) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let prefs = Preferences {
        language: Some(language.code().to_string()),
    };
    let json = serde_json::to_string_pretty(&prefs)
        .map_err(|e| ThumbError::Config(format!("serialize preferences: {e}")))?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_defaults_to_english() {
        let dir = tempfile::tempdir().unwrap();
        let store = LanguageStore::load(&dir.path().join("preferences.json"));
        assert_eq!(store.language(), Language::En);
    }

    #[test]
    fn set_language_persists_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let mut store = LanguageStore::load(&path);
        assert_eq!(store.set_language("hi").unwrap(), Language::Hi);
        assert_eq!(store.language(), Language::Hi);

        let fresh = LanguageStore::load(&path);
        assert_eq!(fresh.language(), Language::Hi);
        assert_eq!(fresh.translator().language(), Language::Hi);
    }

    #[test]
    fn unknown_code_is_rejected_and_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let mut store = LanguageStore::load(&path);
        store.set_language("es").unwrap();
        let err = store.set_language("klingon").unwrap_err();
        assert!(matches!(err, ThumbError::UnknownLanguage { .. }));
        assert_eq!(store.language(), Language::Es);
        assert_eq!(LanguageStore::load(&path).language(), Language::Es);
    }

    #[test]
    fn unrecognized_persisted_value_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"language":"fr"}"#).unwrap();
        assert_eq!(LanguageStore::load(&path).language(), Language::En);

        std::fs::write(&path, "not json").unwrap();
        assert_eq!(LanguageStore::load(&path).language(), Language::En);

        std::fs::write(&path, "{}").unwrap();
        assert_eq!(LanguageStore::load(&path).language(), Language::En);
    }

    #[test]
    fn persisted_file_is_plain_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let mut store = LanguageStore::load(&path);
        store.set_language("ar").unwrap();
        let prefs: Preferences =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(prefs.language.as_deref(), Some("ar"));
    }
}
