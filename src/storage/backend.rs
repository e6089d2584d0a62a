//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait that abstracts over different
//! persistence backends. This allows seamless switching between storage
//! implementations without changing business logic.
//!
//! # Design Philosophy
//!
//! The trait is designed to be minimal and focused on the actual operations
//! needed by the watched store, not a generic ORM: one load at startup, one
//! full-collection persist after every mutation.

use crate::domain::error::Result;
use crate::domain::WatchedEntry;

/// Abstraction over persistent storage backends for the watched collection.
///
/// The collection is persisted as a whole: there is no incremental or delta
/// persistence and no batching. This is a deliberate simplicity tradeoff
/// acceptable at small collection sizes; an implementation scaling this
/// design should note the O(n) rewrite cost per mutation.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): one JSON file with atomic
///   writes (default)
/// - [`MemoryStorage`](crate::storage::MemoryStorage): in-memory, for tests
///   and persistence-free embedding
pub trait Storage: Send {
    /// Loads the persisted collection.
    ///
    /// Called once at startup. A missing file or unparseable contents yield
    /// an empty collection rather than an error; malformed persisted data is
    /// recovered from, not surfaced.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backing medium itself fails to read.
    fn load(&mut self) -> Result<Vec<WatchedEntry>>;

    /// Replaces the persisted collection with `entries`.
    ///
    /// Called after every mutation with the full resulting collection,
    /// preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn persist(&mut self, entries: &[WatchedEntry]) -> Result<()>;
}
