//! # Notebook — a per-identity note collection on an abstract key-value store
//!
//! This module is the core of the storage layer. [`Notebook`] keeps one
//! user's ordered note collection synchronized with a durable key-value
//! store. All reads and writes go through the [`KeyValueStore`] trait, so the
//! same logic works against an in-memory store (tests, native fallback) or
//! the browser's origin-scoped storage ([`crate::LocalStore`]).
//!
//! ## [`KeyValueStore`] trait
//!
//! A synchronous string-keyed interface with three methods: `get`, `set`,
//! and `remove`. Web Storage is a synchronous API, so unlike an IndexedDB
//! store there is nothing to await. Implementations live in sibling modules
//! ([`crate::memory`], and `web` on wasm).
//!
//! ## Partitioning
//!
//! Each identity's collection is stored as a single JSON array under
//! [`partition_key`]\(email\) = `notes_{email}`. A notebook is attached to
//! exactly one partition for its whole lifetime; switching identities means
//! attaching a fresh notebook, never merging.
//!
//! ## Write path
//!
//! Every mutation ([`save`](Notebook::save), [`delete`](Notebook::delete))
//! validates, applies the change in memory, and immediately rewrites the full
//! collection under the partition key. From the caller's perspective a
//! returned `Ok` means the mutation is durable.

use crate::models::Note;

/// Synchronous string key-value storage, scoped to the browser origin.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Error from a notebook mutation. Nothing is persisted when one is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NoteError {
    #[error("Note title is required.")]
    EmptyTitle,
    #[error("Note content is required.")]
    EmptyContent,
    #[error("No note at position {0}.")]
    OutOfRange(usize),
}

/// Storage key for the note collection belonging to `email`.
pub fn partition_key(email: &str) -> String {
    format!("notes_{email}")
}

/// One identity's note collection, bound to a [`KeyValueStore`] partition.
pub struct Notebook<S: KeyValueStore> {
    store: S,
    key: String,
    notes: Vec<Note>,
}

impl<S: KeyValueStore> Notebook<S> {
    /// Attach to the collection stored for `email`, loading it whole.
    ///
    /// An absent key, or a value that no longer parses, yields an empty
    /// collection rather than an error; the store is the only copy and a
    /// corrupted one degrades to "no notes".
    pub fn attach(store: S, email: &str) -> Self {
        let key = partition_key(email);
        let notes = store
            .get(&key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { store, key, notes }
    }

    /// The whole ordered collection.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Create or update a note, then commit the collection.
    ///
    /// Title and content must be non-empty after trimming; the stored strings
    /// keep their original whitespace. `Some(index)` within range replaces
    /// the note at that position, anything else appends.
    pub fn save(
        &mut self,
        title: &str,
        content: &str,
        index: Option<usize>,
    ) -> Result<(), NoteError> {
        if title.trim().is_empty() {
            return Err(NoteError::EmptyTitle);
        }
        if content.trim().is_empty() {
            return Err(NoteError::EmptyContent);
        }
        let note = Note {
            title: title.to_string(),
            content: content.to_string(),
        };
        match index {
            Some(i) if i < self.notes.len() => self.notes[i] = note,
            _ => self.notes.push(note),
        }
        self.commit();
        Ok(())
    }

    /// Remove the note at `index`, preserving the order of the rest.
    pub fn delete(&mut self, index: usize) -> Result<(), NoteError> {
        if index >= self.notes.len() {
            return Err(NoteError::OutOfRange(index));
        }
        self.notes.remove(index);
        self.commit();
        Ok(())
    }

    /// Rewrite the full collection under the partition key.
    fn commit(&self) {
        if let Ok(raw) = serde_json::to_string(&self.notes) {
            self.store.set(&self.key, &raw);
        }
    }
}
