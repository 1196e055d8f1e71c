//! The ordered note collection and its substring filter.
//!
//! # Responsibility
//! - Hold committed notes, most recent first.
//! - Answer case-insensitive substring queries without reordering.
//! - Remove notes on explicit user deletion.
//!
//! # Invariants
//! - Insertion is always at the head; existing order never changes.
//! - `filter("")` returns every note in collection order.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::notes::note::{Note, NoteId};

// ---------------------------------------------------------------------------
// NoteCollection
// ---------------------------------------------------------------------------

/// Ordered sequence of committed notes, most recent first.
///
/// Serializes transparently as a JSON array of notes, so the storage slot
/// holds exactly the sequence and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteCollection {
    notes: VecDeque<Note>,
}

impl NoteCollection {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `note` at the head (most recent first). O(1), no
    /// deduplication.
    pub fn insert(&mut self, note: Note) {
        self.notes.push_front(note);
    }

    /// Case-insensitive substring filter.
    ///
    /// An empty query matches every note; matches keep collection order.
    pub fn filter(&self, query: &str) -> Vec<&Note> {
        if query.is_empty() {
            return self.notes.iter().collect();
        }
        let needle = query.to_lowercase();
        self.notes
            .iter()
            .filter(|note| note.content().to_lowercase().contains(&needle))
            .collect()
    }

    /// Remove the note with `id`, returning it if present.
    pub fn remove(&mut self, id: NoteId) -> Option<Note> {
        let index = self.notes.iter().position(|note| note.id() == id)?;
        self.notes.remove(index)
    }

    /// The most recently committed note.
    pub fn front(&self) -> Option<&Note> {
        self.notes.front()
    }

    /// Iterate in collection order (most recent first).
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// Number of notes held.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns `true` when the collection holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::commit::commit;

    fn collection_of(contents: &[&str]) -> NoteCollection {
        let mut collection = NoteCollection::new();
        for content in contents {
            collection.insert(commit(content).expect("commit"));
        }
        collection
    }

    // ---- insertion order ---

    #[test]
    fn insert_puts_newest_first() {
        let collection = collection_of(&["oldest", "middle", "newest"]);

        let contents: Vec<&str> = collection.iter().map(Note::content).collect();
        assert_eq!(contents, vec!["newest", "middle", "oldest"]);
        assert_eq!(collection.front().unwrap().content(), "newest");
    }

    #[test]
    fn duplicate_content_is_not_deduplicated() {
        let collection = collection_of(&["same", "same"]);
        assert_eq!(collection.len(), 2);
    }

    // ---- filter ---

    #[test]
    fn empty_query_returns_all_in_order() {
        let collection = collection_of(&["a", "b", "c"]);

        let all = collection.filter("");
        assert_eq!(all.len(), 3);
        let contents: Vec<&str> = all.iter().map(|n| n.content()).collect();
        assert_eq!(contents, vec!["c", "b", "a"]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let collection = collection_of(&["Buy milk tomorrow", "call mom"]);

        let hits = collection.filter("MILK");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].content(), "Buy milk tomorrow");
    }

    #[test]
    fn filter_matches_substrings_anywhere() {
        let collection = collection_of(&["the middle word counts"]);
        assert_eq!(collection.filter("middle").len(), 1);
        assert_eq!(collection.filter("counts").len(), 1);
        assert_eq!(collection.filter("absent").len(), 0);
    }

    #[test]
    fn filter_keeps_collection_order() {
        let collection = collection_of(&["milk one", "other", "milk two"]);

        let hits = collection.filter("milk");
        let contents: Vec<&str> = hits.iter().map(|n| n.content()).collect();
        assert_eq!(contents, vec!["milk two", "milk one"]);
    }

    // ---- remove ---

    #[test]
    fn remove_by_id_deletes_exactly_one() {
        let mut collection = collection_of(&["keep", "delete me", "also keep"]);
        let target = collection
            .iter()
            .find(|n| n.content() == "delete me")
            .unwrap()
            .id();

        let removed = collection.remove(target).expect("removed");
        assert_eq!(removed.content(), "delete me");
        assert_eq!(collection.len(), 2);
        assert!(collection.remove(target).is_none());
    }

    // ---- serde ---

    #[test]
    fn serializes_as_a_bare_array() {
        let collection = collection_of(&["one"]);
        let json = serde_json::to_value(&collection).expect("serialize");
        assert!(json.is_array());

        let back: NoteCollection = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, collection);
    }
}
