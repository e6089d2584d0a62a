//! Lookup implementations for the two catalog subject kinds.
//!
//! [`SearchLookup`] resolves a keyword into summaries; [`DetailLookup`]
//! resolves an id into a full record. Both share one [`OmdbClient`] and
//! implement the [`Lookup`] capability, so the coordinator's lookup-and-
//! cancel logic is written once and only the transport call and validation
//! policy differ per subject kind.

use std::sync::Arc;

use futures_util::future::BoxFuture;
use tokio_util::sync::CancellationToken;

use crate::domain::{MovieDetail, MovieSummary};
use crate::fetch::{FetchError, Lookup};

use super::client::OmdbClient;
use super::wire::{DetailResponse, SearchHit, SearchResponse, RESPONSE_FALSE};

/// Parses the catalog's `"132 min"` runtime encoding into whole minutes.
///
/// Takes the leading numeric token and rounds it; anything unparseable
/// (including the catalog's `"N/A"`) becomes 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_runtime_minutes(runtime: &str) -> u32 {
    runtime
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<f64>().ok())
        .map_or(0, |minutes| minutes.round().max(0.0) as u32)
}

/// Parses the catalog's decimal rating string; `"N/A"` becomes 0.0.
fn parse_rating(rating: &str) -> f64 {
    rating.parse::<f64>().unwrap_or(0.0)
}

/// Keyword search: query string → list of [`MovieSummary`].
pub struct SearchLookup {
    client: Arc<OmdbClient>,
}

impl SearchLookup {
    /// Creates a search lookup over a shared client.
    #[must_use]
    pub fn new(client: Arc<OmdbClient>) -> Self {
        Self { client }
    }
}

impl Lookup for SearchLookup {
    type Subject = String;
    type Raw = SearchResponse;
    type Output = Vec<MovieSummary>;

    fn issue(
        &self,
        subject: Self::Subject,
        cancel: CancellationToken,
    ) -> BoxFuture<'static, Result<Self::Raw, FetchError>> {
        let client = Arc::clone(&self.client);
        Box::pin(async move { client.search(&subject, cancel).await })
    }

    fn validate(&self, raw: Self::Raw) -> Result<Self::Output, FetchError> {
        if raw.response == RESPONSE_FALSE {
            return Err(FetchError::NotFound);
        }
        Ok(raw.search.into_iter().map(summary_from_hit).collect())
    }
}

fn summary_from_hit(hit: SearchHit) -> MovieSummary {
    MovieSummary {
        id: hit.imdb_id,
        title: hit.title,
        year: hit.year,
        poster_url: hit.poster,
    }
}

/// Detail lookup: catalog id → [`MovieDetail`].
pub struct DetailLookup {
    client: Arc<OmdbClient>,
}

impl DetailLookup {
    /// Creates a detail lookup over a shared client.
    #[must_use]
    pub fn new(client: Arc<OmdbClient>) -> Self {
        Self { client }
    }
}

impl Lookup for DetailLookup {
    type Subject = String;
    type Raw = DetailResponse;
    type Output = MovieDetail;

    fn issue(
        &self,
        subject: Self::Subject,
        cancel: CancellationToken,
    ) -> BoxFuture<'static, Result<Self::Raw, FetchError>> {
        let client = Arc::clone(&self.client);
        Box::pin(async move { client.detail(&subject, cancel).await })
    }

    fn validate(&self, raw: Self::Raw) -> Result<Self::Output, FetchError> {
        if raw.response == RESPONSE_FALSE {
            return Err(FetchError::NotFound);
        }
        Ok(MovieDetail {
            id: raw.imdb_id,
            title: raw.title,
            year: raw.year,
            poster_url: raw.poster,
            runtime_minutes: parse_runtime_minutes(&raw.runtime),
            catalog_rating: parse_rating(&raw.imdb_rating),
            plot: raw.plot,
            release_date: raw.released,
            actors: raw.actors,
            director: raw.director,
            genre: raw.genre,
        })
    }
}
