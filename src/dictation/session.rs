//! One active recognition run, owned by its draft.
//!
//! [`DictationSession`] pairs the engine's run handle with the receiving end
//! of its event channel. The owner drains events with [`poll`] in arrival
//! order, exactly like the UI-side channel polling the rest of the app uses.
//!
//! Cancellation falls out of ownership: dropping the session drops the
//! receiver, so a stale or replaced run can no longer reach the draft no
//! matter when the engine emits. The drop guard also stops the run, which
//! releases the microphone even when a dialog is abandoned mid-recording.
//!
//! [`poll`]: DictationSession::poll

use std::sync::mpsc::{self, Receiver};

use crate::dictation::engine::{DictationEvent, EngineError, EngineRun, SpeechEngine};

// ---------------------------------------------------------------------------
// DictationSession
// ---------------------------------------------------------------------------

/// A single bounded recognition run: exists between `start` and `stop`.
///
/// At most one session is active per draft; the composer enforces this by
/// stopping and replacing any session it still holds before starting a new
/// one.
pub struct DictationSession {
    run: Box<dyn EngineRun>,
    events: Receiver<DictationEvent>,
    stopped: bool,
}

impl std::fmt::Debug for DictationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictationSession")
            .field("stopped", &self.stopped)
            .finish_non_exhaustive()
    }
}

impl DictationSession {
    /// Start a new run on `engine` in `language`.
    ///
    /// # Errors
    ///
    /// Forwards the engine's rejection ([`EngineError::Unsupported`] /
    /// [`EngineError::Rejected`]); nothing is held on failure.
    pub fn start(engine: &dyn SpeechEngine, language: &str) -> Result<Self, EngineError> {
        let (tx, rx) = mpsc::channel();
        let run = engine.start(language, tx)?;
        log::debug!("dictation session started (language: {language})");
        Ok(Self {
            run,
            events: rx,
            stopped: false,
        })
    }

    /// Drain every pending event, in the order the engine emitted them.
    ///
    /// Non-blocking; returns an empty vec when nothing is pending.
    pub fn poll(&mut self) -> Vec<DictationEvent> {
        let mut pending = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            pending.push(event);
        }
        pending
    }

    /// Terminate recognition and release the microphone.
    ///
    /// Idempotent; safe to call any number of times.
    pub fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.run.stop();
            log::debug!("dictation session stopped");
        }
    }

    /// Whether [`stop`](Self::stop) has been called.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Drop for DictationSession {
    /// The microphone must be released even when the session is discarded
    /// without an explicit stop (dialog closed mid-recording).
    fn drop(&mut self) {
        self.stop();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictation::engine::ScriptedEngine;

    #[test]
    fn poll_returns_events_in_arrival_order() {
        let engine = ScriptedEngine::supported();
        let mut session = DictationSession::start(&engine, "pt-BR").expect("start");

        engine.emit(DictationEvent::Partial("one".into()));
        engine.emit(DictationEvent::Partial("one two".into()));
        engine.emit(DictationEvent::Partial("one two three".into()));

        let events = session.poll();
        assert_eq!(
            events,
            vec![
                DictationEvent::Partial("one".into()),
                DictationEvent::Partial("one two".into()),
                DictationEvent::Partial("one two three".into()),
            ]
        );
        // Drained: a second poll is empty.
        assert!(session.poll().is_empty());
    }

    #[test]
    fn stop_is_idempotent() {
        let engine = ScriptedEngine::supported();
        let mut session = DictationSession::start(&engine, "pt-BR").expect("start");

        session.stop();
        session.stop();
        session.stop();

        assert!(session.is_stopped());
        assert!(engine.probe(0).is_stopped());
    }

    #[test]
    fn drop_stops_the_run() {
        let engine = ScriptedEngine::supported();
        let session = DictationSession::start(&engine, "pt-BR").expect("start");
        let probe = engine.probe(0);

        drop(session);

        assert!(probe.is_stopped());
    }

    #[test]
    fn dropped_session_cannot_receive_events() {
        let engine = ScriptedEngine::supported();
        let session = DictationSession::start(&engine, "pt-BR").expect("start");
        drop(session);

        // The receiver is gone; the engine's send fails outright.
        assert!(!engine.emit(DictationEvent::Partial("too late".into())));
    }

    #[test]
    fn start_on_unsupported_engine_fails() {
        let engine = ScriptedEngine::unsupported();
        let result = DictationSession::start(&engine, "pt-BR");
        assert!(matches!(result, Err(EngineError::Unsupported)));
    }
}
