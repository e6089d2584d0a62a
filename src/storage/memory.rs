//! In-memory storage backend.
//!
//! A trivial [`Storage`] implementation that keeps the "persisted" collection
//! in a `Vec`. Used by tests and by consumers embedding the library without
//! durable storage.

use crate::domain::error::Result;
use crate::domain::WatchedEntry;
use crate::storage::backend::Storage;

/// In-memory storage backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Vec<WatchedEntry>,
}

impl MemoryStorage {
    /// Creates an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-seeded with entries, as if previously persisted.
    #[must_use]
    pub fn seeded(entries: Vec<WatchedEntry>) -> Self {
        Self { entries }
    }
}

impl Storage for MemoryStorage {
    fn load(&mut self) -> Result<Vec<WatchedEntry>> {
        Ok(self.entries.clone())
    }

    fn persist(&mut self, entries: &[WatchedEntry]) -> Result<()> {
        self.entries = entries.to_vec();
        Ok(())
    }
}
