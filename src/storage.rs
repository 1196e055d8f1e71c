//! Persistent note slot: one JSON document under a fixed, versioned key.
//!
//! The on-disk document is
//!
//! ```json
//! { "key": "voicenotes/notes@1.0.0", "notes": [ { "id": …, "date": …, "content": … } ] }
//! ```
//!
//! in `notes.json` under the platform data dir. The whole ordered sequence
//! round-trips through this slot; dates serialize as RFC 3339 and come back
//! as the same semantic instant.
//!
//! Loading is deliberately lenient: a missing, unreadable, malformed or
//! wrong-key slot logs a warning and yields an empty collection — corrupt
//! local data must never prevent startup.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::{AppConfig, AppPaths};
use crate::notes::NoteCollection;

/// The fixed, versioned storage key. A slot written under any other key is
/// treated as absent.
pub const STORAGE_KEY: &str = "voicenotes/notes@1.0.0";

// ---------------------------------------------------------------------------
// Slot document
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
struct Slot {
    key: String,
    notes: NoteCollection,
}

// ---------------------------------------------------------------------------
// NoteStore
// ---------------------------------------------------------------------------

/// Reads and writes the note slot.
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    /// Store at the path from `config`, falling back to the platform data
    /// dir when no override is set.
    pub fn from_config(config: &AppConfig) -> Self {
        let path = config
            .storage
            .notes_file
            .clone()
            .unwrap_or_else(|| AppPaths::new().notes_file);
        Self { path }
    }

    /// Store at an explicit path (useful for tests).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The slot's file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full ordered sequence.
    ///
    /// Infallible by contract: every failure mode degrades to an empty
    /// collection (with a warning for anything other than a missing file).
    pub fn load(&self) -> NoteCollection {
        if !self.path.exists() {
            log::debug!("note slot {} missing; starting empty", self.path.display());
            return NoteCollection::new();
        }

        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) => {
                log::warn!(
                    "could not read note slot {}: {e}; starting empty",
                    self.path.display()
                );
                return NoteCollection::new();
            }
        };

        let slot: Slot = match serde_json::from_str(&data) {
            Ok(slot) => slot,
            Err(e) => {
                log::warn!(
                    "malformed note slot {}: {e}; starting empty",
                    self.path.display()
                );
                return NoteCollection::new();
            }
        };

        if slot.key != STORAGE_KEY {
            log::warn!(
                "note slot key mismatch (found {:?}, expected {STORAGE_KEY:?}); starting empty",
                slot.key
            );
            return NoteCollection::new();
        }

        slot.notes
    }

    /// Write the full ordered sequence, creating parent directories as
    /// needed.
    ///
    /// A failed save is recoverable — callers log it and keep the in-memory
    /// collection.
    pub fn save(&self, notes: &NoteCollection) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let slot = Slot {
            key: STORAGE_KEY.to_string(),
            notes: notes.clone(),
        };
        let data = serde_json::to_string_pretty(&slot)?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
