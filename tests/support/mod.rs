//! Shared test support: scripted lookups and sample data.
//!
//! `MockLookup` stands in for the catalog transport with explicit control
//! over when and how each lookup resolves. It deliberately ignores the
//! cancellation token, modeling a transport with no native cancellation, so
//! tests exercise the coordinator's generation check rather than relying on
//! prompt aborts.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures_util::future::BoxFuture;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use cinetrack::domain::{MovieDetail, MovieSummary};
use cinetrack::fetch::{FetchCoordinator, FetchError, FetchResult, Lookup};

type Scripted<T> = Result<T, FetchError>;

/// A lookup whose resolutions are scripted by the test.
///
/// Clones share the same script, so a test can keep a handle after moving
/// the lookup into a coordinator or facade.
pub struct MockLookup<T> {
    pending: Arc<Mutex<HashMap<String, oneshot::Receiver<Scripted<T>>>>>,
    issued: Arc<AtomicUsize>,
}

impl<T> Clone for MockLookup<T> {
    fn clone(&self) -> Self {
        Self {
            pending: Arc::clone(&self.pending),
            issued: Arc::clone(&self.issued),
        }
    }
}

impl<T> Default for MockLookup<T> {
    fn default() -> Self {
        Self {
            pending: Arc::new(Mutex::new(HashMap::new())),
            issued: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl<T> MockLookup<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pending resolution for a subject and returns the sender
    /// that completes it. Dropping the sender without sending models an
    /// aborted transport (the lookup resolves as cancelled).
    pub fn expect(&self, subject: &str) -> oneshot::Sender<Scripted<T>> {
        let (tx, rx) = oneshot::channel();
        self.pending
            .lock()
            .expect("mock script lock poisoned")
            .insert(subject.to_string(), rx);
        tx
    }

    /// How many lookups were actually issued.
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }
}

impl<T: Clone + Send + 'static> Lookup for MockLookup<T> {
    type Subject = String;
    type Raw = T;
    type Output = T;

    fn issue(
        &self,
        subject: Self::Subject,
        _cancel: CancellationToken,
    ) -> BoxFuture<'static, Result<Self::Raw, FetchError>> {
        self.issued.fetch_add(1, Ordering::SeqCst);
        let rx = self
            .pending
            .lock()
            .expect("mock script lock poisoned")
            .remove(&subject);
        Box::pin(async move {
            match rx {
                Some(rx) => rx.await.unwrap_or(Err(FetchError::Cancelled)),
                None => Err(FetchError::Transport(format!(
                    "no scripted response for {subject}"
                ))),
            }
        })
    }

    fn validate(&self, raw: Self::Raw) -> Result<Self::Output, FetchError> {
        Ok(raw)
    }
}

/// Polls a coordinator until it leaves `Loading` (or gives up).
pub async fn settled<L: Lookup>(coordinator: &FetchCoordinator<L>) -> FetchResult<L::Output> {
    for _ in 0..200 {
        let result = coordinator.result().await;
        if !result.is_loading() {
            return result;
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    coordinator.result().await
}

/// Lets any already-resolved completions run before asserting.
pub async fn drain() {
    tokio::time::sleep(Duration::from_millis(20)).await;
}

pub fn summary(id: &str, title: &str) -> MovieSummary {
    MovieSummary {
        id: id.to_string(),
        title: title.to_string(),
        year: "2004".to_string(),
        poster_url: "p.jpg".to_string(),
    }
}

pub fn detail(id: &str, title: &str) -> MovieDetail {
    MovieDetail {
        id: id.to_string(),
        title: title.to_string(),
        year: "2004".to_string(),
        poster_url: "p.jpg".to_string(),
        runtime_minutes: 103,
        catalog_rating: 7.6,
        plot: "Two strangers awaken in a room.".to_string(),
        release_date: "29 Oct 2004".to_string(),
        actors: "Cary Elwes, Leigh Whannell".to_string(),
        director: "James Wan".to_string(),
        genre: "Horror, Mystery".to_string(),
    }
}
