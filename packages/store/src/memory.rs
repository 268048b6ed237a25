use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::notebook::KeyValueStore;

/// In-memory KeyValueStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notebook::{partition_key, NoteError, Notebook};

    #[test]
    fn test_attach_without_prior_commit_is_empty() {
        let store = MemoryStore::new();
        let notebook = Notebook::attach(store, "a@b.com");
        assert!(notebook.notes().is_empty());
    }

    #[test]
    fn test_create_then_read() {
        let store = MemoryStore::new();
        let mut notebook = Notebook::attach(store, "a@b.com");

        notebook.save("Groceries", "Milk, eggs", None).unwrap();
        notebook.save("Ideas", "Time travel plot holes", None).unwrap();

        let notes = notebook.notes();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[1].title, "Ideas");
        assert_eq!(notes[1].content, "Time travel plot holes");
    }

    #[test]
    fn test_update_at_index_keeps_length_and_neighbors() {
        let store = MemoryStore::new();
        let mut notebook = Notebook::attach(store, "a@b.com");
        notebook.save("First", "one", None).unwrap();
        notebook.save("Second", "two", None).unwrap();
        notebook.save("Third", "three", None).unwrap();

        notebook.save("Second (edited)", "two!", Some(1)).unwrap();

        let notes = notebook.notes();
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[0].title, "First");
        assert_eq!(notes[1].title, "Second (edited)");
        assert_eq!(notes[1].content, "two!");
        assert_eq!(notes[2].title, "Third");
    }

    #[test]
    fn test_out_of_range_index_appends() {
        let store = MemoryStore::new();
        let mut notebook = Notebook::attach(store, "a@b.com");
        notebook.save("First", "one", None).unwrap();

        notebook.save("Second", "two", Some(7)).unwrap();

        assert_eq!(notebook.notes().len(), 2);
        assert_eq!(notebook.notes()[1].title, "Second");
    }

    #[test]
    fn test_delete_preserves_relative_order() {
        let store = MemoryStore::new();
        let mut notebook = Notebook::attach(store, "a@b.com");
        for (title, content) in [("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")] {
            notebook.save(title, content, None).unwrap();
        }

        notebook.delete(1).unwrap();

        let titles: Vec<_> = notebook.notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["a", "c", "d"]);
    }

    #[test]
    fn test_delete_out_of_range_errors() {
        let store = MemoryStore::new();
        let mut notebook = Notebook::attach(store, "a@b.com");
        notebook.save("only", "note", None).unwrap();

        assert_eq!(notebook.delete(1), Err(NoteError::OutOfRange(1)));
        assert_eq!(notebook.notes().len(), 1);
    }

    #[test]
    fn test_blank_title_or_content_is_never_committed() {
        let store = MemoryStore::new();
        let mut notebook = Notebook::attach(store.clone(), "a@b.com");

        assert_eq!(notebook.save("  ", "content", None), Err(NoteError::EmptyTitle));
        assert_eq!(notebook.save("title", "\n\t", None), Err(NoteError::EmptyContent));
        assert!(notebook.notes().is_empty());
        assert!(store.get(&partition_key("a@b.com")).is_none());
    }

    #[test]
    fn test_reattach_reads_last_committed_collection() {
        let store = MemoryStore::new();
        let mut notebook = Notebook::attach(store.clone(), "a@b.com");
        notebook.save("kept", "across reloads", None).unwrap();
        drop(notebook);

        let reloaded = Notebook::attach(store, "a@b.com");
        assert_eq!(reloaded.notes().len(), 1);
        assert_eq!(reloaded.notes()[0].title, "kept");
    }

    #[test]
    fn test_commit_is_idempotent() {
        let store = MemoryStore::new();
        let key = partition_key("a@b.com");
        let mut notebook = Notebook::attach(store.clone(), "a@b.com");

        notebook.save("same", "note", None).unwrap();
        let first = store.get(&key).unwrap();

        // Rewriting the identical note at its own index commits the same
        // collection again.
        notebook.save("same", "note", Some(0)).unwrap();
        assert_eq!(store.get(&key).unwrap(), first);
    }

    #[test]
    fn test_roundtrip_preserves_whitespace_and_newlines() {
        let store = MemoryStore::new();
        let title = "  padded title  ";
        let content = "line one\nline two\n\n\ttabbed";

        let mut notebook = Notebook::attach(store.clone(), "a@b.com");
        notebook.save(title, content, None).unwrap();

        let reloaded = Notebook::attach(store, "a@b.com");
        assert_eq!(reloaded.notes()[0].title, title);
        assert_eq!(reloaded.notes()[0].content, content);
    }

    #[test]
    fn test_collections_are_partitioned_by_email() {
        let store = MemoryStore::new();

        let mut first = Notebook::attach(store.clone(), "a@b.com");
        first.save("mine", "a's note", None).unwrap();

        let mut second = Notebook::attach(store.clone(), "c@d.com");
        assert!(second.notes().is_empty());
        second.save("theirs", "c's note", None).unwrap();

        let a = Notebook::attach(store.clone(), "a@b.com");
        assert_eq!(a.notes()[0].title, "mine");
        let c = Notebook::attach(store, "c@d.com");
        assert_eq!(c.notes()[0].title, "theirs");
    }

    #[test]
    fn test_corrupt_collection_degrades_to_empty() {
        let store = MemoryStore::new();
        store.set(&partition_key("a@b.com"), "[{broken");

        let notebook = Notebook::attach(store, "a@b.com");
        assert!(notebook.notes().is_empty());
    }
}
