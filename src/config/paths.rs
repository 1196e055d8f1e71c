//! Cross-platform application paths using the `dirs` crate.
//!
//! Layout:
//!
//! Config dir (settings):
//!   Windows: %APPDATA%\voicenotes\
//!   macOS:   ~/Library/Application Support/voicenotes/
//!   Linux:   ~/.config/voicenotes/
//!
//! Data dir (note storage):
//!   Windows: %LOCALAPPDATA%\voicenotes\
//!   macOS:   ~/Library/Application Support/voicenotes/
//!   Linux:   ~/.local/share/voicenotes/

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml`.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Directory for persisted note data.
    pub data_dir: PathBuf,
    /// Full path to `notes.json` — the single versioned note slot.
    pub notes_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "voicenotes";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory if the platform cannot provide a
    /// standard path (should be extremely rare in practice).
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = config_dir.join("settings.toml");
        let notes_file = data_dir.join("notes.json");

        Self {
            config_dir,
            settings_file,
            data_dir,
            notes_file,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_non_empty() {
        let paths = AppPaths::new();
        assert!(paths.config_dir.to_str().is_some_and(|s| !s.is_empty()));
        assert!(paths.data_dir.to_str().is_some_and(|s| !s.is_empty()));
        assert!(paths
            .settings_file
            .file_name()
            .is_some_and(|n| n == "settings.toml"));
        assert!(paths
            .notes_file
            .file_name()
            .is_some_and(|n| n == "notes.json"));
    }
}
