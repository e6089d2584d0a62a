//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable storage implementation using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - loads the entire file into memory once
//! - **Write**: O(n) - serializes and writes the entire collection
//! - **Best for**: small watched lists, infrequent writes

use crate::domain::error::{CinetrackError, Result};
use crate::domain::WatchedEntry;
use crate::storage::backend::Storage;
use std::path::PathBuf;

/// JSON file storage backend.
///
/// Stores the watched collection as a single JSON array in one file. The
/// whole collection is rewritten on every persist.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It's designed to be driven from the
/// single logical thread that owns the watched store.
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonStorage {
    /// Creates a JSON storage backend at the given file path.
    ///
    /// Parent directories are created eagerly so the first persist cannot
    /// fail on a missing directory.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directory creation fails.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self { file_path })
    }
}

impl Storage for JsonStorage {
    fn load(&mut self) -> Result<Vec<WatchedEntry>> {
        let _span = tracing::debug_span!("json_load", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no storage file, starting with empty collection");
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.file_path)?;
        match serde_json::from_str::<Vec<WatchedEntry>>(&contents) {
            Ok(entries) => {
                tracing::debug!(entry_count = entries.len(), "loaded watched collection");
                Ok(entries)
            }
            Err(e) => {
                // Malformed persisted data is recovered from, never surfaced:
                // the collection restarts empty and the file is rewritten on
                // the next mutation.
                tracing::warn!(error = %e, "failed to parse stored collection, starting empty");
                Ok(Vec::new())
            }
        }
    }

    fn persist(&mut self, entries: &[WatchedEntry]) -> Result<()> {
        let _span = tracing::debug_span!("json_persist",
            path = ?self.file_path,
            entry_count = entries.len()
        )
        .entered();

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| CinetrackError::Storage(format!("failed to serialize JSON: {e}")))?;

        // Write to a temporary file first, then atomically rename it, so the
        // file is never left in a corrupt state even if the process crashes.
        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("watched collection persisted");
        Ok(())
    }
}
