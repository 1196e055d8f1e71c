//! The immutable note record.
//!
//! A [`Note`] is created exactly once, by the commit pipeline, and never
//! mutated afterwards: identity, timestamp and content are all fixed at
//! commit time. The serialized field names are `id`, `date` and `content`,
//! matching the on-disk note slot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// NoteId
// ---------------------------------------------------------------------------

/// Opaque unique note identity, assigned at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Allocate a fresh random id.
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Note
// ---------------------------------------------------------------------------

/// A finalized, committed note.
///
/// Fields are private; the only constructor is the commit pipeline, so every
/// `Note` in the system has a valid id, a commit-time timestamp and non-empty
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    #[serde(rename = "date")]
    created_at: DateTime<Utc>,
    content: String,
}

impl Note {
    /// Construct a note with fresh identity and the current wall-clock time.
    ///
    /// Crate-private: external callers go through the commit pipeline, which
    /// validates the content first.
    pub(crate) fn new(content: String) -> Self {
        Self {
            id: NoteId::new(),
            created_at: Utc::now(),
            content,
        }
    }

    /// The note's unique identity.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// When the note was committed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The note text, stored verbatim as committed.
    pub fn content(&self) -> &str {
        &self.content
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
