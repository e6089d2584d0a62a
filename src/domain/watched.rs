//! Watched-list domain models.
//!
//! A [`WatchedEntry`] is a movie the user has marked as watched together
//! with their rating; the entries live in an insertion-ordered collection
//! owned by [`crate::storage::WatchedStore`]. [`WatchedStats`] aggregates
//! the collection for summary display.

use crate::domain::MovieDetail;
use serde::{Deserialize, Serialize};

/// A watched movie with the user's rating.
///
/// Uniqueness by `id` is the caller's responsibility: the store appends
/// whatever it is given, and the application layer checks membership before
/// offering a rating for an id that is already present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedEntry {
    /// Catalog identifier (IMDb id).
    pub id: String,

    /// Display title.
    pub title: String,

    /// Release year as reported by the catalog.
    pub year: String,

    /// Poster image URL.
    pub poster_url: String,

    /// Runtime in minutes.
    pub runtime_minutes: u32,

    /// Catalog rating on a 0–10 scale.
    pub catalog_rating: f64,

    /// The user's rating, 1–10.
    pub user_rating: u8,

    /// How many times the user adjusted the rating before confirming.
    pub rating_decision_count: u32,

    /// Unix timestamp when the entry was added to the watched list.
    pub added_at: i64,
}

impl WatchedEntry {
    /// Builds an entry from a loaded detail record and the user's rating draft.
    ///
    /// Stamps `added_at` with the current time.
    #[must_use]
    pub fn from_detail(detail: &MovieDetail, user_rating: u8, rating_decision_count: u32) -> Self {
        Self {
            id: detail.id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            poster_url: detail.poster_url.clone(),
            runtime_minutes: detail.runtime_minutes,
            catalog_rating: detail.catalog_rating,
            user_rating,
            rating_decision_count,
            added_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Aggregate statistics over a watched collection.
///
/// Averages are 0 for an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WatchedStats {
    /// Number of entries in the collection.
    pub count: usize,

    /// Mean catalog rating across entries.
    pub avg_catalog_rating: f64,

    /// Mean user rating across entries.
    pub avg_user_rating: f64,

    /// Mean runtime in minutes across entries.
    pub avg_runtime_minutes: f64,
}

impl WatchedStats {
    /// Computes statistics over a slice of entries.
    #[must_use]
    pub fn from_entries(entries: &[WatchedEntry]) -> Self {
        let count = entries.len();
        if count == 0 {
            return Self::default();
        }

        #[allow(clippy::cast_precision_loss)]
        let len = count as f64;
        let avg = |f: fn(&WatchedEntry) -> f64| entries.iter().map(f).sum::<f64>() / len;

        Self {
            count,
            avg_catalog_rating: avg(|e| e.catalog_rating),
            avg_user_rating: avg(|e| f64::from(e.user_rating)),
            avg_runtime_minutes: avg(|e| f64::from(e.runtime_minutes)),
        }
    }
}
