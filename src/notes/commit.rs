//! The note commit pipeline: validate a draft's committed text and finalize
//! it into an immutable [`Note`].
//!
//! Validation failure is recoverable by design — the caller keeps the draft,
//! keeps the dialog open, and surfaces a transient notice.

use thiserror::Error;

use crate::notes::note::Note;

// ---------------------------------------------------------------------------
// CommitError
// ---------------------------------------------------------------------------

/// Validation failures that prevent a draft from becoming a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommitError {
    /// The committed text is empty or all-whitespace. The draft must be
    /// preserved so the user can keep typing.
    #[error("note content is empty")]
    EmptyContent,
}

// ---------------------------------------------------------------------------
// commit
// ---------------------------------------------------------------------------

/// Finalize `content` into a [`Note`] with fresh identity and the current
/// wall-clock timestamp.
///
/// Content is stored verbatim — including a leading space left by an
/// accepted dictation merge; only the emptiness check looks at trimmed text.
///
/// # Errors
///
/// [`CommitError::EmptyContent`] when `content` is empty or all-whitespace.
pub fn commit(content: &str) -> Result<Note, CommitError> {
    if content.trim().is_empty() {
        return Err(CommitError::EmptyContent);
    }
    Ok(Note::new(content.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
