//! Top-level application controller.
//!
//! # Architecture
//!
//! [`NoteApp`] is the single object a host UI talks to. It owns the
//! committed [`NoteCollection`], the persistent [`NoteStore`], and the
//! [`DraftComposer`] for the "add note" dialog, and it wires the save flow:
//!
//! ```text
//! composer.committed_text ──▶ commit() ──▶ Note
//!                                │            │
//!                        EmptyContent     insert at head
//!                          notice +           │
//!                        dialog stays     persist slot
//!                            open             │
//!                                     success notice + close
//! ```
//!
//! Every outcome the user must see goes through the shared [`NoticeSink`];
//! the controller itself renders nothing.

use std::sync::Arc;
use std::time::Duration;

use crate::composer::DraftComposer;
use crate::config::AppConfig;
use crate::dictation::SpeechEngine;
use crate::notes::{commit, CommitError, Note, NoteCollection, NoteId};
use crate::notice::{Notice, NoticeSink};
use crate::storage::NoteStore;

/// Notice shown when the user saves with nothing typed.
const EMPTY_SAVE_MSG: &str = "Type a note before saving";
/// Confirmation shown after a successful save.
const SAVED_MSG: &str = "Note saved";

// ---------------------------------------------------------------------------
// NoteApp
// ---------------------------------------------------------------------------

/// The note-taking application core: collection, storage, search, and the
/// note-capture dialog.
pub struct NoteApp {
    config: AppConfig,
    store: NoteStore,
    notes: NoteCollection,
    notices: Arc<dyn NoticeSink>,
    composer: DraftComposer,
}

impl NoteApp {
    /// Build the app from its collaborators, loading persisted notes from
    /// the configured slot (empty on first run or corrupt data).
    pub fn new(
        engine: Arc<dyn SpeechEngine>,
        notices: Arc<dyn NoticeSink>,
        config: AppConfig,
    ) -> Self {
        let store = NoteStore::from_config(&config);
        Self::with_store(engine, notices, config, store)
    }

    /// Build the app against an explicit store (useful for tests).
    pub fn with_store(
        engine: Arc<dyn SpeechEngine>,
        notices: Arc<dyn NoticeSink>,
        config: AppConfig,
        store: NoteStore,
    ) -> Self {
        let notes = store.load();
        log::info!("loaded {} note(s) from {}", notes.len(), store.path().display());

        let composer = DraftComposer::new(engine, Arc::clone(&notices), config.clone());

        Self {
            config,
            store,
            notes,
            notices,
            composer,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// The committed notes, most recent first.
    pub fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    /// The note-capture dialog's composer.
    pub fn composer(&self) -> &DraftComposer {
        &self.composer
    }

    /// Mutable access for driving dialog transitions.
    pub fn composer_mut(&mut self) -> &mut DraftComposer {
        &mut self.composer
    }

    // ── Search ───────────────────────────────────────────────────────────

    /// Case-insensitive substring search; empty query returns everything.
    /// Re-evaluated on every keystroke by the host.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        self.notes.filter(query)
    }

    // ── Save flow ────────────────────────────────────────────────────────

    /// Commit the composer's text into a new note at the collection head.
    ///
    /// On validation failure the dialog stays open with the draft untouched
    /// and an error notice is emitted. On success the note is persisted, a
    /// success notice is emitted, and the dialog closes (draft reset to
    /// idle, any dictation session stopped).
    pub fn save_draft(&mut self) -> Result<NoteId, CommitError> {
        match commit(self.composer.committed_text()) {
            Err(e) => {
                log::info!("save rejected: {e}");
                self.notices.notify(Notice::error(
                    EMPTY_SAVE_MSG,
                    Duration::from_millis(self.config.notices.save_error_dismiss_ms),
                ));
                Err(e)
            }
            Ok(note) => {
                let id = note.id();
                self.notes.insert(note);
                self.persist();
                self.composer.close();
                self.notices.notify(Notice::success(
                    SAVED_MSG,
                    Duration::from_millis(self.config.notices.success_dismiss_ms),
                ));
                Ok(id)
            }
        }
    }

    // ── Deletion ─────────────────────────────────────────────────────────

    /// Delete the note with `id`; returns `false` when no such note exists.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        match self.notes.remove(id) {
            Some(note) => {
                log::info!("deleted note {}", note.id());
                self.persist();
                true
            }
            None => false,
        }
    }

    // ── Persistence ──────────────────────────────────────────────────────

    /// Best-effort write of the full collection; a failure is logged and
    /// the in-memory collection stays authoritative.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.notes) {
            log::warn!("could not persist notes: {e:#}");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
