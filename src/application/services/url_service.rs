//! Mapping operations: lookup, listing, creation, upsert, and deletion.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use crate::domain::entry::Entry;
use crate::domain::store::UrlStore;
use crate::error::{AppError, id_not_found};
use crate::utils::id_generator::generate_id;

/// Service for reading and mutating the shortened URL mapping.
///
/// Wraps the shared [`UrlStore`] and turns absence and id conflicts into
/// the error conditions the HTTP layer reports. All operations are
/// synchronous and in-memory.
pub struct UrlService {
    store: Arc<UrlStore>,
}

impl UrlService {
    /// Creates a new service over the shared store.
    pub fn new(store: Arc<UrlStore>) -> Self {
        Self { store }
    }

    /// Retrieves the entry for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no entry has that id.
    pub fn get(&self, id: &str) -> Result<Entry, AppError> {
        self.store.get(id).ok_or_else(|| id_not_found(id))
    }

    /// Returns a snapshot of every current entry, keyed by id.
    pub fn list(&self) -> HashMap<String, Entry> {
        self.store.all()
    }

    /// Creates an entry, allocating an id when the client did not supply one.
    ///
    /// A client-supplied id must currently be available; an omitted id is
    /// drawn at random from the 4-hex space until a free one is found. There
    /// is no retry limit: at the intended scale (a small number of live
    /// entries in a 65536-value space) the loop terminates almost
    /// immediately. The availability check and the insert are separate store
    /// operations; two concurrent allocations can race, and the later write
    /// wins.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the supplied id is empty and
    /// [`AppError::Conflict`] when it is already taken.
    pub fn create(&self, id: Option<String>, url: String) -> Result<Entry, AppError> {
        let id = match id {
            Some(id) => {
                if id.is_empty() {
                    return Err(AppError::bad_request(
                        "Field 'id' must not be empty",
                        json!({}),
                    ));
                }
                if !self.store.id_available(&id) {
                    return Err(AppError::conflict(
                        format!("'{id}' is not available."),
                        json!({ "id": id }),
                    ));
                }
                id
            }
            None => loop {
                let candidate = generate_id();
                if self.store.id_available(&candidate) {
                    break candidate;
                }
            },
        };

        Ok(self.store.put(&id, &url))
    }

    /// Inserts or replaces the entry at `id`. Always succeeds.
    pub fn upsert(&self, id: &str, url: &str) -> Entry {
        self.store.put(id, url)
    }

    /// Deletes the entry at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no entry has that id; the store
    /// itself reports absence and this service maps it to the error
    /// condition.
    pub fn delete(&self, id: &str) -> Result<(), AppError> {
        match self.store.remove(id) {
            Some(_) => Ok(()),
            None => Err(id_not_found(id)),
        }
    }

    /// Number of entries currently stored.
    pub fn entry_count(&self) -> usize {
        self.store.len()
    }
}
