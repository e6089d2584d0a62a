//! cinetrack: movie catalog search with a persisted, user-rated watched list.
//!
//! cinetrack is an embedded library (no CLI, no rendering) consumed by a
//! presentation layer. It provides:
//! - Query-driven catalog search where a stale, slow response can never
//!   overwrite the result of a newer query
//! - Detail lookups keyed by selection, with cooperative cancellation when
//!   the detail view closes
//! - A watched list with user ratings, persisted as JSON and reloaded across
//!   sessions
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation layer (embedding application)         │  ← queries, clicks,
//! └─────────────────────────────────────────────────────┘    rating confirms
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← MovieApp facade
//! │  - Request gating on query changes                  │  ← selection toggle
//! │  - Rating draft per detail session                  │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Fetch Core    │   │ Storage Layer │   │ Catalog Layer │
//! │ (fetch/)      │   │ (storage/)    │   │ (catalog/)    │
//! │ - Coordinator │   │ - JSON I/O    │   │ - HTTP client │
//! │ - Generations │   │ - Backend API │   │ - Wire models │
//! │ - Classifier  │   │ - Watched     │   │ - Lookups     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Movie / watched models, errors (domain/)         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Correctness model
//!
//! Each [`fetch::FetchCoordinator`] owns at most one in-flight lookup.
//! Starting a new lookup cancels the previous transport call and bumps a
//! generation counter; a completion is applied only if its generation is
//! still current. Results therefore apply in "last start wins" order, never
//! network-completion order, even on a transport that cannot abort.
//!
//! The watched collection is loaded once at startup and fully rewritten to
//! storage after every mutation; malformed persisted data degrades to an
//! empty collection instead of an error.
//!
//! # Example
//!
//! ```no_run
//! use cinetrack::{initialize, Config};
//!
//! # async fn run() -> cinetrack::Result<()> {
//! let config = Config {
//!     api_key: "your-key".to_string(),
//!     ..Config::default()
//! };
//!
//! let app = initialize(&config)?;
//!
//! app.set_query("saw").await;
//! // ... later, read app.search_result().await, toggle selection,
//! // draft a rating, and app.confirm_watched().await
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod observability;
pub mod storage;

pub use app::{CatalogApp, MovieApp, RatingDraft, SelectionController};
pub use domain::{CinetrackError, MovieDetail, MovieSummary, Result, WatchedEntry, WatchedStats};
pub use fetch::{FetchCoordinator, FetchResult};

use std::path::PathBuf;

use serde::Deserialize;

/// Library configuration.
///
/// Holds everything the production facade needs: the catalog endpoint and
/// key, where to persist the watched list, and the trace level for the
/// optional tracing subscriber.
///
/// # Example (TOML)
///
/// ```toml
/// api_key = "572b4bd1"
/// base_url = "https://www.omdbapi.com/"
/// storage_path = "/home/user/.local/share/cinetrack/watched.json"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API key sent with every catalog request.
    pub api_key: String,

    /// Catalog endpoint URL. Default: `https://www.omdbapi.com/`
    pub base_url: String,

    /// Path of the watched-list JSON file.
    ///
    /// Defaults to `watched.json` inside the platform data directory
    /// (see [`infrastructure::paths::get_data_dir`]).
    pub storage_path: Option<PathBuf>,

    /// Trace level for the tracing subscriber.
    ///
    /// Accepts full `EnvFilter` directives. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://www.omdbapi.com/".to_string(),
            storage_path: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| CinetrackError::Config(format!("failed to parse config: {e}")))
    }

    /// Resolves the watched-list file path.
    #[must_use]
    pub fn storage_file(&self) -> PathBuf {
        self.storage_path
            .clone()
            .unwrap_or_else(|| infrastructure::paths::get_data_dir().join("watched.json"))
    }
}

/// Initializes the library with configuration.
///
/// Sets up the tracing subscriber (no-op if one is already installed) and
/// builds the production [`CatalogApp`] facade.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the storage
/// location cannot be prepared.
pub fn initialize(config: &Config) -> Result<CatalogApp> {
    observability::init_tracing(config);
    tracing::debug!("initializing cinetrack");
    CatalogApp::new(config)
}
