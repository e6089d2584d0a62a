//! Request gating: the minimum-length query policy.
//!
//! A lookup is only worth issuing once the user has typed enough to mean
//! something. Queries shorter than [`MIN_QUERY_CHARS`] are suppressed: the
//! caller clears any previously shown failure, resets to idle, and issues no
//! request. No trimming is performed; the raw character count decides, so
//! whitespace-only input is suppressed by length alone.

/// Minimum query length (in characters) eligible for a catalog lookup.
pub const MIN_QUERY_CHARS: usize = 3;

/// The outcome of gating a raw query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The query is long enough; the caller starts a lookup.
    Proceed,

    /// The query is too short; no request, no error shown.
    Suppress,
}

/// Evaluates whether a raw query should trigger a lookup.
///
/// Pure and synchronous; the only effect is whatever the caller does with
/// the decision.
#[must_use]
pub fn evaluate(query: &str) -> GateDecision {
    if query.chars().count() < MIN_QUERY_CHARS {
        GateDecision::Suppress
    } else {
        GateDecision::Proceed
    }
}
