//! Failure classification: cancelled versus reported.
//!
//! The single correctness-relevant distinction on the fetch path is whether
//! a failure was caused by the coordinator's own cancellation mechanism. A
//! cancelled lookup represents an intentionally superseded request and must
//! be dropped without a state transition; everything else surfaces to the
//! user as a message.

use super::error::FetchError;

/// The two ways a fetch failure can be handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Intentional cancellation; drop silently, no state change.
    Cancelled,

    /// A real failure; the string is the user-visible message.
    Reported(String),
}

/// Classifies a fetch failure.
///
/// Pure: the mapping depends only on the error value. Cancellation maps to
/// [`Classification::Cancelled`]; any other failure maps to
/// [`Classification::Reported`] carrying the error's display string.
#[must_use]
pub fn classify(error: &FetchError) -> Classification {
    match error {
        FetchError::Cancelled => Classification::Cancelled,
        other => Classification::Reported(other.to_string()),
    }
}
