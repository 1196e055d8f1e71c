//! Dictation Session Adapter.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │               SpeechEngine (trait)                  │
//! │                                                     │
//! │   is_supported()        start(lang, Sender) ───┐    │
//! │                                                ▼    │
//! │                                   Box<dyn EngineRun>│
//! └────────────────────────────────────────┬────────────┘
//!                                          │ DictationEvent
//!                                          ▼ (mpsc channel)
//!                               DictationSession::poll()
//!                                          │
//!                                          ▼
//!                               DraftComposer (applies
//!                               last-write-wins partials)
//! ```
//!
//! The engine is an external, possibly-unavailable capability with a narrow
//! contract: start, stream full-transcript partials, stop, error. The
//! session adapter owns the channel receiver, so discarding a session also
//! severs its event stream.

pub mod engine;
pub mod session;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use engine::{DictationEvent, EngineError, EngineRun, SpeechEngine, UnsupportedEngine};
pub use session::DictationSession;

// test-only re-export so composer and app test modules can import the
// scripted engine without spelling out the engine module path.
#[cfg(test)]
pub use engine::{RunProbe, ScriptedEngine};
