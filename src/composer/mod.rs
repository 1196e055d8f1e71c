//! Draft Composer — the note-capture state machine.
//!
//! # Architecture
//!
//! ```text
//! host UI events                   recognizer events
//! (clicks, keystrokes)             (mpsc channel)
//!        │                                │
//!        ▼                                ▼
//! ┌──────────────────── DraftComposer ─────────────────────┐
//! │  Draft { mode, committed_text, live_transcript }       │
//! │  Option<DictationSession>   (at most one, owned here)  │
//! └───────────────┬───────────────────────┬────────────────┘
//!                 │ commit on save        │ Notice
//!                 ▼                       ▼
//!        Note Commit Pipeline       NoticeSink (host UI)
//! ```
//!
//! The composer is single-threaded and event-driven: every transition runs
//! synchronously inside a host event handler, and recognizer output is
//! drained in arrival order through `poll_dictation`.

pub mod controller;
pub mod draft;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use controller::DraftComposer;
pub use draft::{Draft, DraftMode};
