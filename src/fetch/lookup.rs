//! The lookup capability interface.
//!
//! A [`Lookup`] bundles the two halves of resolving one subject kind against
//! the catalog: issuing the transport call and validating the raw response
//! into a domain value. The coordinator is generic over this trait, so the
//! lookup-and-cancel logic exists exactly once and each subject kind only
//! supplies its own transport and validation policy.

use futures_util::future::BoxFuture;
use tokio_util::sync::CancellationToken;

use super::error::FetchError;

/// Capability interface for resolving one subject kind.
///
/// Implementations are cheap handles over a shared transport client; the
/// coordinator holds them in an `Arc` and calls `issue` from a spawned task.
///
/// # Implementations
///
/// - [`SearchLookup`](crate::catalog::SearchLookup): keyword → summaries
/// - [`DetailLookup`](crate::catalog::DetailLookup): id → full record
pub trait Lookup: Send + Sync + 'static {
    /// What the lookup resolves: a keyword query or a catalog id.
    type Subject: std::fmt::Debug + Send + 'static;

    /// The raw, wire-shaped response before validation.
    type Raw: Send + 'static;

    /// The validated domain value.
    type Output: Clone + Send + 'static;

    /// Issues the transport call for a subject.
    ///
    /// The returned future must observe `cancel` and resolve to
    /// [`FetchError::Cancelled`] promptly once the token fires; the
    /// coordinator's generation check guarantees correctness even when a
    /// transport cannot abort, but prompt cancellation releases network
    /// resources early.
    fn issue(
        &self,
        subject: Self::Subject,
        cancel: CancellationToken,
    ) -> BoxFuture<'static, Result<Self::Raw, FetchError>>;

    /// Validates a raw response into the domain value.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotFound`] when the response carries the
    /// catalog's "no match" marker, or a decode failure when the shape is
    /// otherwise unusable.
    fn validate(&self, raw: Self::Raw) -> Result<Self::Output, FetchError>;
}
