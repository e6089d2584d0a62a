//! The query-driven fetch core.
//!
//! Everything that makes catalog lookups behave correctly under asynchrony
//! lives here: the minimum-length request gate, the cancelled-versus-failed
//! classifier, the lookup capability trait, and the generation-checked
//! coordinator that guarantees a stale response never overwrites a newer
//! one.
//!
//! # Modules
//!
//! - [`gate`]: Minimum-length policy for raw queries
//! - [`classify`]: Cancelled-versus-reported failure classification
//! - [`error`]: The fetch failure taxonomy
//! - [`lookup`]: The `{issue, validate}` capability trait
//! - [`coordinator`]: The generation-checked fetch coordinator

pub mod classify;
pub mod coordinator;
pub mod error;
pub mod gate;
pub mod lookup;

pub use classify::{classify, Classification};
pub use coordinator::{FetchCoordinator, FetchResult};
pub use error::FetchError;
pub use gate::{evaluate, GateDecision, MIN_QUERY_CHARS};
pub use lookup::Lookup;
