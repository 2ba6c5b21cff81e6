//! In-memory keyed collection of all shortened URL entries.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::entry::Entry;

/// The authoritative mapping from short id to [`Entry`].
///
/// One instance is constructed at startup and shared (via `Arc`) with every
/// request handler; it lives for the process lifetime and is never persisted.
///
/// Each operation takes the lock once, so individual reads and writes are
/// atomic. No atomicity is promised across operations: an [`id_available`]
/// check followed by a [`put`] can interleave with other writers, and the
/// later write wins.
///
/// [`id_available`]: UrlStore::id_available
/// [`put`]: UrlStore::put
#[derive(Debug, Default)]
pub struct UrlStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl UrlStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with the given (id, url) pairs.
    pub fn from_entries<I, S, U>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, U)>,
        S: Into<String>,
        U: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(id, url)| {
                let entry = Entry::new(id, url);
                (entry.id.clone(), entry)
            })
            .collect();

        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Returns the entry for `id`, or `None` if absent. No side effects.
    pub fn get(&self, id: &str) -> Option<Entry> {
        self.entries.read().get(id).cloned()
    }

    /// Returns a point-in-time snapshot of every current entry, keyed by id.
    pub fn all(&self) -> HashMap<String, Entry> {
        self.entries.read().clone()
    }

    /// Returns true iff no entry currently has the given id.
    pub fn id_available(&self, id: &str) -> bool {
        !self.entries.read().contains_key(id)
    }

    /// Inserts a new entry or replaces the existing entry at `id`.
    ///
    /// Always succeeds and returns the resulting entry. Callers needing
    /// create-only semantics must check [`Self::id_available`] first.
    pub fn put(&self, id: &str, url: &str) -> Entry {
        let entry = Entry::new(id, url);
        self.entries.write().insert(id.to_string(), entry.clone());
        entry
    }

    /// Removes the entry at `id`.
    ///
    /// Returns the removed entry, or `None` when no entry had that id. The
    /// store itself does not treat a missing id as an error; callers decide
    /// how to report absence.
    pub fn remove(&self, id: &str) -> Option<Entry> {
        self.entries.write().remove(id)
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
