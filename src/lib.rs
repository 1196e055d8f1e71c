//! voicenotes — the core of a local note-taking app with dictation.
//!
//! Users create notes by typing or by dictating speech that an external
//! recognizer transcribes live, review and accept or discard the transcript,
//! and commit the result to a searchable, locally persisted collection.
//! This crate is the whole of that logic; rendering belongs to the host UI.
//!
//! # Architecture
//!
//! ```text
//! host UI ──────────────────────────────┐
//!    │  clicks / keystrokes             │ drains Notice channel
//!    ▼                                  │
//! ┌─────────────── NoteApp ─────────────┴──┐
//! │                                        │
//! │  DraftComposer ◀── DictationSession ◀──┼── SpeechEngine (external)
//! │       │                                │
//! │       ▼ save                           │
//! │  commit() ──▶ NoteCollection ──▶ NoteStore (versioned JSON slot)
//! │                     ▲                  │
//! │          filter(query)                 │
//! └────────────────────────────────────────┘
//! ```
//!
//! Everything is single-threaded and event-driven: transitions run
//! synchronously inside host event handlers, and the two asynchronous
//! sources (recognizer partials, notices) are plain channels the host
//! drains once per frame.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::{mpsc, Arc};
//! use voicenotes::{AppConfig, NoteApp, UnsupportedEngine};
//!
//! voicenotes::logging::init();
//!
//! let config = AppConfig::load().unwrap_or_default();
//! let (notice_tx, notice_rx) = mpsc::channel();
//!
//! // A real host plugs in its platform recognizer here.
//! let mut app = NoteApp::new(
//!     Arc::new(UnsupportedEngine),
//!     Arc::new(notice_tx),
//!     config,
//! );
//!
//! app.composer_mut().open_text_entry();
//! app.composer_mut().set_text("buy milk");
//! app.save_draft().expect("note saved");
//!
//! for notice in notice_rx.try_iter() {
//!     println!("[{:?}] {}", notice.kind, notice.message);
//! }
//! assert_eq!(app.search("milk").len(), 1);
//! ```

pub mod app;
pub mod composer;
pub mod config;
pub mod dictation;
pub mod logging;
pub mod notes;
pub mod notice;
pub mod storage;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use app::NoteApp;
pub use composer::{Draft, DraftComposer, DraftMode};
pub use config::AppConfig;
pub use dictation::{
    DictationEvent, DictationSession, EngineError, EngineRun, SpeechEngine, UnsupportedEngine,
};
pub use notes::{commit, CommitError, Note, NoteCollection, NoteId};
pub use notice::{Notice, NoticeKind, NoticeSink};
pub use storage::{NoteStore, STORAGE_KEY};
