//! The query-driven fetch coordinator.
//!
//! One [`FetchCoordinator`] instance owns all in-flight state for one
//! logical subject kind (keyword search, or detail by id). Starting a new
//! lookup supersedes the previous one in two layers:
//!
//! 1. The prior transport call's cancellation token is fired, so the
//!    network resources are released promptly.
//! 2. A generation counter is bumped, and a completion is applied to state
//!    only if the generation it started under is still current. A slow,
//!    stale response can therefore never overwrite the result of a newer
//!    lookup, even on a transport that cannot abort.
//!
//! Results apply in "last start wins" order, never network-completion order;
//! this is the single most important correctness property of the crate.
//!
//! # State machine
//!
//! ```text
//! Idle ──start──▶ Loading ──completion──▶ Success | Failure
//!  ▲                 ▲                         │
//!  │                 └───────── start ─────────┘
//!  └── reset (gate suppression, detail close)
//! ```

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use super::classify::{classify, Classification};
use super::lookup::Lookup;

/// The observable state of one coordinator instance.
///
/// Exactly one variant holds at any time. `Idle` is both the initial state
/// and the state re-entered when the request gate suppresses a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult<T> {
    /// No lookup has run, or the last one was reset away.
    Idle,

    /// A lookup is in flight.
    Loading,

    /// The most recent lookup completed with a validated payload.
    Success(T),

    /// The most recent lookup failed; the string is the user-visible message.
    Failure(String),
}

impl<T> FetchResult<T> {
    /// Returns `true` for the `Idle` variant.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns `true` for the `Loading` variant.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the payload of a `Success`, if that is the current variant.
    #[must_use]
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the message of a `Failure`, if that is the current variant.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for FetchResult<T> {
    fn default() -> Self {
        Self::Idle
    }
}

/// Shared coordinator state: the generation counter, the observable result,
/// and the cancellation token of the current in-flight lookup.
struct Inner<T> {
    generation: u64,
    result: FetchResult<T>,
    cancel: CancellationToken,
}

/// Coordinates lookups for one subject kind.
///
/// Cloning is cheap and shares the same state, so a handle can be held by
/// the application facade while completions are applied from spawned tasks.
pub struct FetchCoordinator<L: Lookup> {
    lookup: Arc<L>,
    inner: Arc<Mutex<Inner<L::Output>>>,
}

impl<L: Lookup> Clone for FetchCoordinator<L> {
    fn clone(&self) -> Self {
        Self {
            lookup: Arc::clone(&self.lookup),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: Lookup> FetchCoordinator<L> {
    /// Creates a coordinator in the `Idle` state.
    #[must_use]
    pub fn new(lookup: L) -> Self {
        Self {
            lookup: Arc::new(lookup),
            inner: Arc::new(Mutex::new(Inner {
                generation: 0,
                result: FetchResult::Idle,
                cancel: CancellationToken::new(),
            })),
        }
    }

    /// Begins a new lookup, superseding any prior in-flight one.
    ///
    /// Mints a new generation, fires the previous lookup's cancellation
    /// token, sets the state to `Loading`, and spawns the transport call.
    /// When the call completes, its result is applied only if no newer
    /// `start` (or `cancel`/`reset`) has happened in the meantime.
    pub async fn start(&self, subject: L::Subject) {
        let (generation, token) = {
            let mut inner = self.inner.lock().await;
            inner.cancel.cancel();
            inner.cancel = CancellationToken::new();
            inner.generation += 1;
            inner.result = FetchResult::Loading;
            (inner.generation, inner.cancel.clone())
        };

        tracing::debug!(generation, subject = ?subject, "lookup started");

        let lookup = Arc::clone(&self.lookup);
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let outcome = match lookup.issue(subject, token).await {
                Ok(raw) => lookup.validate(raw),
                Err(error) => Err(error),
            };

            let mut guard = inner.lock().await;
            if guard.generation != generation {
                tracing::trace!(
                    generation,
                    current_generation = guard.generation,
                    "stale completion discarded"
                );
                return;
            }

            match outcome {
                Ok(value) => {
                    tracing::debug!(generation, "lookup succeeded");
                    guard.result = FetchResult::Success(value);
                }
                Err(error) => match classify(&error) {
                    Classification::Cancelled => {
                        tracing::trace!(generation, "cancelled completion dropped");
                    }
                    Classification::Reported(message) => {
                        tracing::debug!(generation, message = %message, "lookup failed");
                        guard.result = FetchResult::Failure(message);
                    }
                },
            }
        });
    }

    /// Invalidates the current generation and signals transport cancellation
    /// without starting a replacement lookup.
    ///
    /// Used when the consumer is torn down while a lookup is outstanding.
    /// The observable state is left untouched; any late completion is
    /// discarded by the generation check.
    pub async fn cancel(&self) {
        let mut inner = self.inner.lock().await;
        inner.cancel.cancel();
        inner.generation += 1;
        tracing::debug!(generation = inner.generation, "lookup cancelled");
    }

    /// Cancels any in-flight lookup and returns to `Idle`.
    ///
    /// This is the suppression path: a too-short query clears a previously
    /// shown failure without issuing a request.
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.cancel.cancel();
        inner.generation += 1;
        inner.result = FetchResult::Idle;
        tracing::debug!(generation = inner.generation, "coordinator reset to idle");
    }

    /// Returns a snapshot of the current observable state.
    pub async fn result(&self) -> FetchResult<L::Output> {
        self.inner.lock().await.result.clone()
    }
}
