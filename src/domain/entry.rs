//! Entry record representing one shortened URL mapping.

use serde::{Deserialize, Serialize};

/// One id → url mapping record.
///
/// Serializes as a flat JSON object with exactly the fields `id` and `url`;
/// this schema is the wire representation on every API endpoint. The `id`
/// never changes after creation; replacing the `url` produces a new record
/// under the same key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub url: String,
}

impl Entry {
    /// Creates a new Entry.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}
