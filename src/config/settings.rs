//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared freely with
//! the host UI.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// DictationConfig
// ---------------------------------------------------------------------------

/// Settings for the speech-recognition session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictationConfig {
    /// Recognition language as a BCP 47 tag (e.g. `"pt-BR"`, `"en-US"`).
    pub language: String,
    /// Deliver interim (not yet finalized) results while speaking.
    pub interim_results: bool,
    /// Number of alternative transcripts requested per segment.
    pub max_alternatives: u32,
}

impl Default for DictationConfig {
    fn default() -> Self {
        Self {
            language: "pt-BR".into(),
            interim_results: true,
            max_alternatives: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// NoticeConfig
// ---------------------------------------------------------------------------

/// Dismiss durations (milliseconds) for the transient notice kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeConfig {
    /// "Type a note before saving" — shown on an empty-content save.
    pub save_error_dismiss_ms: u64,
    /// "Speech recognition is not supported…" — shown when dictation is
    /// requested without a recognizer.
    pub unsupported_dismiss_ms: u64,
    /// Engine failures during an active session.
    pub dictation_error_dismiss_ms: u64,
    /// "Note saved" confirmation.
    pub success_dismiss_ms: u64,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            save_error_dismiss_ms: 1_000,
            unsupported_dismiss_ms: 2_000,
            dictation_error_dismiss_ms: 2_000,
            success_dismiss_ms: 4_000,
        }
    }
}

// ---------------------------------------------------------------------------
// StorageConfig
// ---------------------------------------------------------------------------

/// Settings for the persisted note slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Explicit path to `notes.json`; `None` uses the platform data dir.
    pub notes_file: Option<std::path::PathBuf>,
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use voicenotes::config::AppConfig;
///
/// // Load (returns Default when the file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Speech-recognition settings.
    pub dictation: DictationConfig,
    /// Notice dismiss durations.
    pub notices: NoticeConfig,
    /// Note storage settings.
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// (first-run scenario) so callers never need to special-case a missing
    /// file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns `true` when no `settings.toml` file exists yet.
    pub fn is_first_run() -> bool {
        !AppPaths::new().settings_file.exists()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Verify that a default `AppConfig` can be serialised to TOML and
    /// deserialised back without any data loss.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(original, loaded);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        assert_eq!(config, AppConfig::default());
    }

    /// Verify default values.
    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.dictation.language, "pt-BR");
        assert!(cfg.dictation.interim_results);
        assert_eq!(cfg.dictation.max_alternatives, 1);

        assert_eq!(cfg.notices.save_error_dismiss_ms, 1_000);
        assert_eq!(cfg.notices.unsupported_dismiss_ms, 2_000);
        assert_eq!(cfg.notices.success_dismiss_ms, 4_000);

        assert!(cfg.storage.notes_file.is_none());
    }

    /// Verify that modified non-default values survive a round trip.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.dictation.language = "en-US".into();
        cfg.dictation.interim_results = false;
        cfg.notices.success_dismiss_ms = 2_500;
        cfg.storage.notes_file = Some(dir.path().join("elsewhere.json"));

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded, cfg);
    }

    /// A malformed settings file is an error (unlike the note slot, which
    /// degrades to empty — settings have an explicit load-or-default caller).
    #[test]
    fn malformed_settings_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "not = [valid").expect("write");

        assert!(AppConfig::load_from(&path).is_err());
    }
}
