//! Draft buffers and the note-capture mode enumeration.
//!
//! [`DraftMode`] is the closed set of states the composing dialog can be in;
//! [`Draft`] carries the two text buffers those states govern. Neither is
//! persisted — a draft lives only while the dialog is open.

// ---------------------------------------------------------------------------
// DraftMode
// ---------------------------------------------------------------------------

/// States of the note-capture state machine.
///
/// The transitions are:
///
/// ```text
/// Idle ──choose text───────▶ TextEntry
///      ──choose dictation──▶ Dictating        (engine supported)
///      ──choose dictation──▶ Idle + notice    (engine unsupported)
/// TextEntry ──record──────▶ Dictating         (keeps committed text)
/// Dictating ──stop────────▶ ReviewingDictation
/// ReviewingDictation ──accept──▶ TextEntry    (merge transcript)
///                    ──decline─▶ TextEntry    (discard transcript)
/// any open state ──close──▶ Idle              (discard everything)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    /// Dialog closed or nothing chosen yet; both buffers empty.
    Idle,

    /// The user is typing into the committed-text buffer.
    TextEntry,

    /// A dictation session is live; partials replace the live transcript.
    Dictating,

    /// The session has been stopped; the live transcript awaits an explicit
    /// accept or decline.
    ReviewingDictation,
}

impl DraftMode {
    /// Returns `true` while a dictation session exists or its transcript is
    /// pending review — the only states in which the live transcript may be
    /// non-empty.
    pub fn is_dictation(&self) -> bool {
        matches!(self, DraftMode::Dictating | DraftMode::ReviewingDictation)
    }

    /// Returns `true` when the composing dialog is open in any mode.
    pub fn is_open(&self) -> bool {
        !matches!(self, DraftMode::Idle)
    }

    /// A short human-readable label suitable for a status line.
    pub fn label(&self) -> &'static str {
        match self {
            DraftMode::Idle => "Idle",
            DraftMode::TextEntry => "Typing",
            DraftMode::Dictating => "Recording",
            DraftMode::ReviewingDictation => "Reviewing",
        }
    }
}

impl Default for DraftMode {
    fn default() -> Self {
        DraftMode::Idle
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// The in-progress, uncommitted note.
///
/// The draft exclusively owns both buffers. `committed_text` changes only
/// through user keystrokes or an accepted dictation merge; `live_transcript`
/// changes only while [`DraftMode::Dictating`] and is replaced wholesale by
/// every recognizer partial.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Current state-machine mode.
    pub mode: DraftMode,
    /// Text the user has typed or accepted.
    pub committed_text: String,
    /// Not-yet-accepted transcript from the active / just-stopped session.
    pub live_transcript: String,
}

impl Draft {
    /// Discard both buffers and return to [`DraftMode::Idle`].
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
