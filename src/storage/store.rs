//! The persisted watched store.
//!
//! [`WatchedStore`] owns the in-memory watched collection and keeps it
//! synchronized with a [`Storage`] backend: loaded once on open, fully
//! rewritten after every mutation. Insertion order is preserved, and the
//! store performs no uniqueness checks — membership is the caller's
//! concern, checked via [`contains`](WatchedStore::contains) before an
//! entry is ever constructed.

use crate::domain::error::Result;
use crate::domain::{WatchedEntry, WatchedStats};
use crate::storage::backend::Storage;

/// Owns the watched collection and its persistence.
pub struct WatchedStore {
    entries: Vec<WatchedEntry>,
    backend: Box<dyn Storage>,
}

impl WatchedStore {
    /// Opens a store over a backend, loading the persisted collection.
    ///
    /// Missing or unparseable persisted data yields an empty collection
    /// (the backend absorbs that case); only a failing medium is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot read its medium.
    pub fn open(mut backend: Box<dyn Storage>) -> Result<Self> {
        let entries = backend.load()?;
        tracing::debug!(entry_count = entries.len(), "watched store opened");
        Ok(Self { entries, backend })
    }

    /// Appends an entry and persists the full resulting collection.
    ///
    /// No uniqueness check is performed; callers decide membership via
    /// [`contains`](Self::contains) before constructing an entry.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails; the in-memory collection keeps
    /// the appended entry either way, so a retry persists the same state.
    pub fn add(&mut self, entry: WatchedEntry) -> Result<()> {
        let _span = tracing::debug_span!("watched_add", id = %entry.id).entered();

        self.entries.push(entry);
        self.backend.persist(&self.entries)?;

        tracing::debug!(entry_count = self.entries.len(), "entry added");
        Ok(())
    }

    /// Removes all entries with the given id and persists the result.
    ///
    /// A no-op removal (id absent) still persists an equal collection.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let _span = tracing::debug_span!("watched_remove", id = %id).entered();

        self.entries.retain(|entry| entry.id != id);
        self.backend.persist(&self.entries)?;

        tracing::debug!(entry_count = self.entries.len(), "entry removed");
        Ok(())
    }

    /// Returns the collection in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[WatchedEntry] {
        &self.entries
    }

    /// Returns `true` if an entry with the given id is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Number of entries in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Computes aggregate statistics over the collection.
    #[must_use]
    pub fn stats(&self) -> WatchedStats {
        WatchedStats::from_entries(&self.entries)
    }
}
