//! The Draft Composer state machine.
//!
//! [`DraftComposer`] owns the in-progress note: the [`Draft`] buffers, the
//! active [`DictationSession`] (at most one, exclusively owned — never a
//! process-wide handle), and the engine / notice-sink collaborators. Every
//! transition of the capture state machine is a method here, applied
//! synchronously inside the host's event handlers.
//!
//! The host drives dictation the same way the rest of the app drives its
//! channels: call [`poll_dictation`](DraftComposer::poll_dictation) once per
//! frame to drain pending recognizer events in arrival order.

use std::sync::Arc;
use std::time::Duration;

use crate::composer::draft::{Draft, DraftMode};
use crate::config::AppConfig;
use crate::dictation::{DictationEvent, DictationSession, SpeechEngine};
use crate::notice::{Notice, NoticeSink};

/// Notice shown when dictation is requested without recognizer support.
const UNSUPPORTED_MSG: &str = "Speech recognition is not supported in this browser";

// ---------------------------------------------------------------------------
// DraftComposer
// ---------------------------------------------------------------------------

/// Mediates text entry, live dictation, and the accept / decline review of
/// a transcript into one draft note.
pub struct DraftComposer {
    engine: Arc<dyn SpeechEngine>,
    notices: Arc<dyn NoticeSink>,
    config: AppConfig,
    draft: Draft,
    /// The one active (or just-stopped) session. `None` outside dictation.
    session: Option<DictationSession>,
}

impl DraftComposer {
    /// Create a composer in [`DraftMode::Idle`] with empty buffers.
    pub fn new(
        engine: Arc<dyn SpeechEngine>,
        notices: Arc<dyn NoticeSink>,
        config: AppConfig,
    ) -> Self {
        Self {
            engine,
            notices,
            config,
            draft: Draft::default(),
            session: None,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// The current draft buffers and mode.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Current state-machine mode.
    pub fn mode(&self) -> DraftMode {
        self.draft.mode
    }

    /// The user-committed text buffer.
    pub fn committed_text(&self) -> &str {
        &self.draft.committed_text
    }

    /// The not-yet-accepted live transcript.
    pub fn live_transcript(&self) -> &str {
        &self.draft.live_transcript
    }

    /// Whether a dictation session currently exists.
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    // ── Transitions ──────────────────────────────────────────────────────

    /// Idle → TextEntry: the user chose to type. Committed text starts
    /// empty and editable.
    pub fn open_text_entry(&mut self) {
        if self.draft.mode != DraftMode::Idle {
            log::debug!("open_text_entry ignored in mode {:?}", self.draft.mode);
            return;
        }
        self.draft.mode = DraftMode::TextEntry;
    }

    /// Replace the committed text with what the user typed.
    ///
    /// Only [`DraftMode::TextEntry`] accepts edits; calls in any other mode
    /// are ignored.
    pub fn set_text(&mut self, text: impl Into<String>) {
        if self.draft.mode != DraftMode::TextEntry {
            log::debug!("set_text ignored in mode {:?}", self.draft.mode);
            return;
        }
        self.draft.committed_text = text.into();
    }

    /// Start (or restart) a dictation session.
    ///
    /// - From `Idle`: the draft opens straight into `Dictating`.
    /// - From `TextEntry`: dictation runs alongside the committed text —
    ///   it augments, never replaces, the typed draft.
    /// - From `Dictating`: the active session is stopped and replaced; the
    ///   old session's events can no longer reach this draft.
    /// - From `ReviewingDictation`: ignored — the pending transcript must be
    ///   accepted or declined first.
    ///
    /// An unsupported engine changes nothing and emits a one-shot notice.
    pub fn start_dictation(&mut self) {
        if self.draft.mode == DraftMode::ReviewingDictation {
            log::debug!("start_dictation ignored while reviewing");
            return;
        }

        if !self.engine.is_supported() {
            log::info!("dictation requested but the engine is unsupported");
            self.notices.notify(Notice::error(
                UNSUPPORTED_MSG,
                Duration::from_millis(self.config.notices.unsupported_dismiss_ms),
            ));
            return;
        }

        // One session per draft: stop the previous one before the new one
        // can write to the live transcript.
        if let Some(mut previous) = self.session.take() {
            previous.stop();
        }

        match DictationSession::start(self.engine.as_ref(), &self.config.dictation.language) {
            Ok(session) => {
                self.session = Some(session);
                self.draft.live_transcript.clear();
                self.draft.mode = DraftMode::Dictating;
            }
            Err(e) => {
                // The engine rejected the request; surface it and stay put.
                log::warn!("dictation start rejected: {e}");
                self.notices.notify(Notice::error(
                    format!("Could not start dictation: {e}"),
                    Duration::from_millis(self.config.notices.dictation_error_dismiss_ms),
                ));
            }
        }
    }

    /// Drain pending recognizer events and apply them in arrival order.
    ///
    /// Partials replace the live transcript wholesale (last write wins) and
    /// only while `Dictating`. An engine error surfaces a notice and marks
    /// the run defunct, but the mode stays `Dictating` until the user stops
    /// explicitly.
    pub fn poll_dictation(&mut self) {
        let events = match self.session.as_mut() {
            Some(session) => session.poll(),
            None => return,
        };

        for event in events {
            match event {
                DictationEvent::Partial(text) => {
                    if self.draft.mode == DraftMode::Dictating {
                        self.draft.live_transcript = text;
                    } else {
                        log::debug!("stale partial ignored in mode {:?}", self.draft.mode);
                    }
                }
                DictationEvent::Error(cause) => {
                    log::warn!("dictation engine error: {cause}");
                    self.notices.notify(Notice::error(
                        format!("Dictation error: {cause}"),
                        Duration::from_millis(self.config.notices.dictation_error_dismiss_ms),
                    ));
                }
            }
        }
    }

    /// Dictating → ReviewingDictation: stop recording and hold the live
    /// transcript for review.
    ///
    /// Partials the engine emitted before the stop are drained and applied
    /// first, so the review shows the full transcript.
    pub fn stop_dictation(&mut self) {
        if self.draft.mode != DraftMode::Dictating {
            log::debug!("stop_dictation ignored in mode {:?}", self.draft.mode);
            return;
        }

        self.poll_dictation();
        if let Some(mut session) = self.session.take() {
            session.stop();
        }
        self.draft.mode = DraftMode::ReviewingDictation;
    }

    /// ReviewingDictation → TextEntry: merge the transcript into the
    /// committed text.
    ///
    /// The merge is `committed + " " + transcript` with a single space
    /// separator even when the committed text is empty — the leading space
    /// is the pinned contract.
    pub fn accept_dictation(&mut self) {
        if self.draft.mode != DraftMode::ReviewingDictation {
            log::debug!("accept_dictation ignored in mode {:?}", self.draft.mode);
            return;
        }

        self.draft.committed_text = format!(
            "{} {}",
            self.draft.committed_text, self.draft.live_transcript
        );
        self.draft.live_transcript.clear();
        self.draft.mode = DraftMode::TextEntry;
    }

    /// ReviewingDictation → TextEntry: discard the transcript. The committed
    /// text is never touched.
    pub fn decline_dictation(&mut self) {
        if self.draft.mode != DraftMode::ReviewingDictation {
            log::debug!("decline_dictation ignored in mode {:?}", self.draft.mode);
            return;
        }

        self.draft.live_transcript.clear();
        self.draft.mode = DraftMode::TextEntry;
    }

    /// Any state → Idle: the dialog closed. Both buffers are discarded and
    /// any in-flight session is stopped (and its microphone released).
    pub fn close(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.stop();
        }
        self.draft.clear();
    }
}

impl std::fmt::Debug for DraftComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftComposer")
            .field("draft", &self.draft)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
