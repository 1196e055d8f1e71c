//! Note data model, commit pipeline and collection.
//!
//! A draft becomes a [`Note`] only through [`commit`], which validates the
//! content and fixes identity and timestamp. Committed notes live in a
//! [`NoteCollection`], most recent first, which also answers the search
//! filter and handles explicit deletion.

pub mod collection;
pub mod commit;
pub mod note;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use collection::NoteCollection;
pub use commit::{commit, CommitError};
pub use note::{Note, NoteId};
