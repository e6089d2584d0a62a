//! Movie domain models.
//!
//! This module defines the two shapes a catalog lookup can produce: a
//! [`MovieSummary`] (one of many results for a keyword search) and a
//! [`MovieDetail`] (the full record for a single title). Both carry only the
//! fields this library depends on, not the catalog's full schema.

use serde::{Deserialize, Serialize};

/// A single search result from the catalog.
///
/// Produced by a keyword search; many summaries come back per query. Holds
/// just enough to render a result row and to key a follow-up detail lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Catalog identifier (IMDb id), used as the key for detail lookups
    /// and watched-list membership.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Release year as reported by the catalog (kept as a string; the
    /// catalog uses ranges like "2008–2013" for series).
    pub year: String,

    /// Poster image URL, or the catalog's "N/A" placeholder.
    pub poster_url: String,
}

/// The full record for a single title.
///
/// Produced by a detail lookup, one per id. Numeric fields are already
/// parsed from the catalog's string encoding by the lookup's validation
/// step, so consumers never see `"132 min"` or `"N/A"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    /// Catalog identifier (IMDb id).
    pub id: String,

    /// Display title.
    pub title: String,

    /// Release year as reported by the catalog.
    pub year: String,

    /// Poster image URL.
    pub poster_url: String,

    /// Runtime in minutes, 0 when the catalog reports no runtime.
    pub runtime_minutes: u32,

    /// Catalog rating on a 0–10 scale, 0.0 when unrated.
    pub catalog_rating: f64,

    /// Plot synopsis.
    pub plot: String,

    /// Release date string as reported by the catalog.
    pub release_date: String,

    /// Comma-separated principal cast.
    pub actors: String,

    /// Director credit.
    pub director: String,

    /// Comma-separated genres.
    pub genre: String,
}
