//! The application facade consumed by a presentation layer.
//!
//! [`MovieApp`] wires the core together: query changes run through the
//! request gate into the search coordinator, selection toggles drive the
//! detail coordinator and the rating draft, and confirmed ratings land in
//! the watched store. A presentation layer supplies query strings, ids, and
//! rating confirmations, and reads back [`FetchResult`] snapshots, the
//! selection, and the watched collection; it never touches the coordinators
//! or the store directly.
//!
//! The facade is generic over the two lookup implementations so tests can
//! drive it end-to-end with a mock transport; [`CatalogApp`] is the
//! production instantiation over the catalog client.

use std::sync::Arc;

use crate::catalog::{DetailLookup, OmdbClient, SearchLookup};
use crate::domain::error::Result;
use crate::domain::{MovieDetail, MovieSummary, WatchedEntry, WatchedStats};
use crate::fetch::{evaluate, FetchCoordinator, FetchResult, GateDecision, Lookup};
use crate::storage::{JsonStorage, Storage, WatchedStore};
use crate::Config;

use super::rating::RatingDraft;
use super::selection::SelectionController;

/// The production facade: catalog-backed lookups plus JSON persistence.
pub type CatalogApp = MovieApp<SearchLookup, DetailLookup>;

/// Application facade owning the coordinators, selection, rating draft, and
/// watched store.
pub struct MovieApp<S, D>
where
    S: Lookup<Subject = String, Output = Vec<MovieSummary>>,
    D: Lookup<Subject = String, Output = MovieDetail>,
{
    search: FetchCoordinator<S>,
    detail: FetchCoordinator<D>,
    selection: SelectionController,
    rating: Option<RatingDraft>,
    store: WatchedStore,
}

impl CatalogApp {
    /// Builds the production facade from configuration.
    ///
    /// Creates one shared catalog client for both lookups and opens the
    /// watched store over JSON file storage at the configured path.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the storage
    /// file's directory cannot be created or read.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Arc::new(OmdbClient::new(config.base_url.clone(), config.api_key.clone())?);
        let backend = Box::new(JsonStorage::new(config.storage_file())?);
        Self::from_parts(
            SearchLookup::new(Arc::clone(&client)),
            DetailLookup::new(client),
            backend,
        )
    }
}

impl<S, D> MovieApp<S, D>
where
    S: Lookup<Subject = String, Output = Vec<MovieSummary>>,
    D: Lookup<Subject = String, Output = MovieDetail>,
{
    /// Builds a facade from explicit lookups and a storage backend.
    ///
    /// This is the seam tests use: mock lookups with controlled resolution
    /// order, and in-memory storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot load the persisted collection.
    pub fn from_parts(search: S, detail: D, backend: Box<dyn Storage>) -> Result<Self> {
        Ok(Self {
            search: FetchCoordinator::new(search),
            detail: FetchCoordinator::new(detail),
            selection: SelectionController::new(),
            rating: None,
            store: WatchedStore::open(backend)?,
        })
    }

    /// Reacts to a query change.
    ///
    /// Too-short queries suppress: the search coordinator returns to idle
    /// (clearing any previously shown failure) and no request is issued.
    /// Eligible queries start a lookup, superseding any in-flight one.
    pub async fn set_query(&self, query: &str) {
        match evaluate(query) {
            GateDecision::Suppress => {
                tracing::debug!(query_len = query.chars().count(), "query suppressed");
                self.search.reset().await;
            }
            GateDecision::Proceed => {
                self.search.start(query.to_string()).await;
            }
        }
    }

    /// Snapshot of the search coordinator's state.
    pub async fn search_result(&self) -> FetchResult<Vec<MovieSummary>> {
        self.search.result().await
    }

    /// Reacts to a click on a title.
    ///
    /// Toggle semantics: clicking the open title closes the detail view and
    /// cancels any outstanding detail lookup; clicking another title opens
    /// it with a fresh rating draft and starts its detail lookup.
    pub async fn select_movie(&mut self, id: &str) {
        let selected = self.selection.toggle(id).map(str::to_string);
        match selected {
            Some(id) => {
                tracing::debug!(id = %id, "detail view opened");
                self.rating = Some(RatingDraft::new());
                self.detail.start(id).await;
            }
            None => {
                tracing::debug!("detail view closed by reselect");
                self.rating = None;
                self.detail.reset().await;
            }
        }
    }

    /// Closes the detail view unconditionally (explicit close or escape).
    pub async fn close_detail(&mut self) {
        self.selection.close();
        self.rating = None;
        self.detail.reset().await;
    }

    /// The id currently open for detail viewing, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selection.selected()
    }

    /// Snapshot of the detail coordinator's state.
    pub async fn detail_result(&self) -> FetchResult<MovieDetail> {
        self.detail.result().await
    }

    /// Records a provisional rating for the open detail view.
    ///
    /// Ignored when no detail view is open.
    pub fn set_rating(&mut self, rating: u8) {
        match self.rating.as_mut() {
            Some(draft) => draft.set(rating),
            None => tracing::debug!(rating, "rating ignored, no detail view open"),
        }
    }

    /// Confirms the drafted rating, adding the open title to the watched list.
    ///
    /// Requires an open detail view whose lookup has succeeded and a drafted
    /// rating; refuses ids already in the collection (the membership check
    /// lives here, not in the store). On success the entry is persisted and
    /// the detail view closes.
    ///
    /// Returns `true` if an entry was added.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the collection fails.
    pub async fn confirm_watched(&mut self) -> Result<bool> {
        let Some(id) = self.selection.selected().map(str::to_string) else {
            tracing::debug!("confirm ignored, no detail view open");
            return Ok(false);
        };
        if self.store.contains(&id) {
            tracing::debug!(id = %id, "confirm ignored, already watched");
            return Ok(false);
        }
        let Some(rating) = self.rating.as_ref().and_then(RatingDraft::rating) else {
            tracing::debug!(id = %id, "confirm ignored, no rating drafted");
            return Ok(false);
        };
        let FetchResult::Success(detail) = self.detail.result().await else {
            tracing::debug!(id = %id, "confirm ignored, detail not loaded");
            return Ok(false);
        };

        let decisions = self.rating.as_ref().map_or(0, RatingDraft::decisions);
        let mut entry = WatchedEntry::from_detail(&detail, rating, decisions);
        // Detail bodies key by the id the caller asked for.
        entry.id = id;

        self.store.add(entry)?;
        self.close_detail().await;
        Ok(true)
    }

    /// Removes all watched entries with the given id and persists.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the collection fails.
    pub fn remove_watched(&mut self, id: &str) -> Result<()> {
        self.store.remove(id)
    }

    /// The watched collection in insertion order.
    #[must_use]
    pub fn watched(&self) -> &[WatchedEntry] {
        self.store.entries()
    }

    /// Returns `true` if the id is already in the watched collection.
    #[must_use]
    pub fn is_watched(&self, id: &str) -> bool {
        self.store.contains(id)
    }

    /// Aggregate statistics over the watched collection.
    #[must_use]
    pub fn watched_stats(&self) -> WatchedStats {
        self.store.stats()
    }
}
