//! Failure taxonomy for the catalog fetch path.
//!
//! Fetch failures are not propagated with `?` like the rest of the crate's
//! errors; they are classified (see [`crate::fetch::classify`]) into either
//! an intentional cancellation, which is silently dropped, or a reported
//! failure whose display string becomes the user-visible message.

use thiserror::Error;

/// A failure produced while issuing or validating a catalog lookup.
///
/// The `Display` implementations double as the user-visible messages, so
/// the wording here is part of the contract: a missing title always reads
/// "Movie not found" and a bad HTTP status always reads "Something went
/// wrong with fetching movie data".
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The lookup's cancellation token fired before the transport finished.
    ///
    /// Raised only by the coordinator's own cancellation mechanism; it marks
    /// a superseded request, not an actual error, and never reaches the
    /// user-visible failure state.
    #[error("request cancelled")]
    Cancelled,

    /// The catalog answered but reported no match for the subject.
    #[error("Movie not found")]
    NotFound,

    /// The catalog answered with a non-2xx HTTP status.
    ///
    /// Detected before any JSON parsing is attempted.
    #[error("Something went wrong with fetching movie data")]
    Status(u16),

    /// The request failed below HTTP: connection, DNS, TLS.
    #[error("{0}")]
    Transport(String),

    /// The response body could not be decoded as the expected JSON shape.
    #[error("{0}")]
    Decode(String),
}
