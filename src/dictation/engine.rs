//! Speech-recognition engine trait and implementations.
//!
//! # Overview
//!
//! [`SpeechEngine`] is the narrow contract the composer programs against: a
//! possibly-unavailable external recognizer that can start one continuous,
//! interim-enabled run at a time. It is object-safe and `Send + Sync` so it
//! can be held behind an `Arc<dyn SpeechEngine>`.
//!
//! A started run streams [`DictationEvent`]s through the channel sender the
//! caller provides and is terminated through its [`EngineRun`] handle.
//!
//! [`UnsupportedEngine`] is the always-unavailable implementation a host
//! plugs in when the platform exposes no recognizer — the app still launches
//! and surfaces a notice instead of crashing.
//!
//! [`ScriptedEngine`] (available under `#[cfg(test)]`) records every started
//! run and lets tests emit events and inspect stop flags.

use std::sync::mpsc::Sender;

use thiserror::Error;

// ---------------------------------------------------------------------------
// EngineError
// ---------------------------------------------------------------------------

/// All errors that can arise from the recognition engine boundary.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// The host environment exposes no speech-recognition capability.
    ///
    /// Callers check [`SpeechEngine::is_supported`] before every start, so
    /// this surfaces only when that check was skipped.
    #[error("speech recognition is not supported in this environment")]
    Unsupported,

    /// The engine rejected the start request (microphone busy, permission
    /// denied, …).
    #[error("recognition engine rejected the request: {0}")]
    Rejected(String),
}

// ---------------------------------------------------------------------------
// DictationEvent
// ---------------------------------------------------------------------------

/// Events emitted by an active recognition run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictationEvent {
    /// The **full reconstructed transcript so far** — the concatenation of
    /// every finalized and interim segment in order.
    ///
    /// Each payload replaces the previous live transcript wholesale; it is
    /// never a delta to append.
    Partial(String),

    /// The engine failed mid-run. The run is defunct and will produce no
    /// more useful partials, but the handle must still be stopped to release
    /// the microphone.
    Error(String),
}

// ---------------------------------------------------------------------------
// SpeechEngine trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe interface to an external speech recognizer.
///
/// # Contract
///
/// - [`is_supported`](Self::is_supported) must be consulted before every
///   start attempt; an unsupported engine is a user notice, not a crash.
/// - [`start`](Self::start) begins continuous recognition with interim
///   results enabled and streams [`DictationEvent`]s through `events` until
///   the returned run is stopped or the receiving end is dropped.
/// - A run holds the microphone for its whole lifetime and releases it on
///   [`EngineRun::stop`], including when it stopped because of an error.
pub trait SpeechEngine: Send + Sync {
    /// Whether the host environment exposes a recognizer at all.
    fn is_supported(&self) -> bool;

    /// Begin one continuous recognition run in `language` (a BCP 47 tag,
    /// e.g. `"pt-BR"`).
    fn start(
        &self,
        language: &str,
        events: Sender<DictationEvent>,
    ) -> Result<Box<dyn EngineRun>, EngineError>;
}

// Compile-time assertion: Box<dyn SpeechEngine> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn SpeechEngine>) {}
};

/// Handle to one active recognition run.
pub trait EngineRun: Send {
    /// Terminate recognition and release the microphone.
    ///
    /// Idempotent: calling it on an already-stopped run is a no-op and must
    /// never panic.
    fn stop(&mut self);
}

// ---------------------------------------------------------------------------
// UnsupportedEngine
// ---------------------------------------------------------------------------

/// A [`SpeechEngine`] for hosts without any recognizer.
///
/// `is_supported` reports `false`, so a well-behaved caller never reaches
/// `start`; if one does anyway it gets [`EngineError::Unsupported`] rather
/// than a panic.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedEngine;

impl SpeechEngine for UnsupportedEngine {
    fn is_supported(&self) -> bool {
        false
    }

    fn start(
        &self,
        _language: &str,
        _events: Sender<DictationEvent>,
    ) -> Result<Box<dyn EngineRun>, EngineError> {
        Err(EngineError::Unsupported)
    }
}

// ---------------------------------------------------------------------------
// ScriptedEngine  (test-only)
// ---------------------------------------------------------------------------

/// Per-run probe handed out by [`ScriptedEngine`]: the event sender the run
/// was started with plus its stop flag.
#[cfg(test)]
#[derive(Clone)]
pub struct RunProbe {
    events: Sender<DictationEvent>,
    stopped: std::sync::Arc<std::sync::atomic::AtomicBool>,
}

#[cfg(test)]
impl RunProbe {
    /// Emit an event into the run's channel. Returns `false` when the
    /// receiving session has been dropped (delivery impossible).
    pub fn emit(&self, event: DictationEvent) -> bool {
        self.events.send(event).is_ok()
    }

    /// Whether `stop` has been called on this run.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(std::sync::atomic::Ordering::SeqCst)
    }
}

/// A test double that records every started run.
#[cfg(test)]
pub struct ScriptedEngine {
    supported: bool,
    runs: std::sync::Mutex<Vec<RunProbe>>,
}

#[cfg(test)]
impl ScriptedEngine {
    /// An engine that reports support and accepts every start.
    pub fn supported() -> Self {
        Self {
            supported: true,
            runs: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// An engine that reports no recognizer capability.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            runs: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Number of runs started so far.
    pub fn run_count(&self) -> usize {
        self.runs.lock().unwrap().len()
    }

    /// Probe for the `idx`-th started run (0-based).
    pub fn probe(&self, idx: usize) -> RunProbe {
        self.runs.lock().unwrap()[idx].clone()
    }

    /// Emit an event into the most recently started run.
    ///
    /// Returns `false` when no run was started or the session was dropped.
    pub fn emit(&self, event: DictationEvent) -> bool {
        match self.runs.lock().unwrap().last() {
            Some(probe) => probe.emit(event),
            None => false,
        }
    }
}

#[cfg(test)]
impl SpeechEngine for ScriptedEngine {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn start(
        &self,
        _language: &str,
        events: Sender<DictationEvent>,
    ) -> Result<Box<dyn EngineRun>, EngineError> {
        if !self.supported {
            return Err(EngineError::Unsupported);
        }
        let stopped = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
        self.runs.lock().unwrap().push(RunProbe {
            events,
            stopped: std::sync::Arc::clone(&stopped),
        });
        Ok(Box::new(ScriptedRun { stopped }))
    }
}

#[cfg(test)]
struct ScriptedRun {
    stopped: std::sync::Arc<std::sync::atomic::AtomicBool>,
}

#[cfg(test)]
impl EngineRun for ScriptedRun {
    fn stop(&mut self) {
        self.stopped.store(true, std::sync::atomic::Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    // --- UnsupportedEngine ---

    #[test]
    fn unsupported_engine_reports_no_support() {
        assert!(!UnsupportedEngine.is_supported());
    }

    #[test]
    fn unsupported_engine_start_returns_unsupported() {
        let (tx, _rx) = mpsc::channel();
        let err = UnsupportedEngine.start("pt-BR", tx).err().expect("must fail");
        assert!(matches!(err, EngineError::Unsupported));
    }

    // --- ScriptedEngine ---

    #[test]
    fn scripted_engine_records_runs_and_delivers_events() {
        let engine = ScriptedEngine::supported();
        let (tx, rx) = mpsc::channel();
        let _run = engine.start("pt-BR", tx).expect("start");

        assert_eq!(engine.run_count(), 1);
        assert!(engine.emit(DictationEvent::Partial("hello".into())));
        assert_eq!(rx.try_recv().unwrap(), DictationEvent::Partial("hello".into()));
    }

    #[test]
    fn scripted_engine_emit_fails_after_receiver_dropped() {
        let engine = ScriptedEngine::supported();
        let (tx, rx) = mpsc::channel();
        let _run = engine.start("pt-BR", tx).expect("start");
        drop(rx);
        assert!(!engine.emit(DictationEvent::Partial("lost".into())));
    }

    #[test]
    fn scripted_run_stop_sets_probe_flag() {
        let engine = ScriptedEngine::supported();
        let (tx, _rx) = mpsc::channel();
        let mut run = engine.start("pt-BR", tx).expect("start");

        let probe = engine.probe(0);
        assert!(!probe.is_stopped());
        run.stop();
        assert!(probe.is_stopped());
    }

    // --- trait object safety ---

    #[test]
    fn box_dyn_speech_engine_compiles() {
        // If this test compiles, the trait is object-safe.
        let engine: Box<dyn SpeechEngine> = Box::new(UnsupportedEngine);
        assert!(!engine.is_supported());
    }

    // --- EngineError display ---

    #[test]
    fn engine_error_display_mentions_support() {
        assert!(EngineError::Unsupported.to_string().contains("not supported"));
    }

    #[test]
    fn engine_error_display_rejected_carries_cause() {
        let e = EngineError::Rejected("microphone busy".into());
        assert!(e.to_string().contains("microphone busy"));
    }
}
