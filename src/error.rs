//! Error types for the timer core

use thiserror::Error;

/// Errors surfaced to callers of the session manager.
///
/// Observer delivery failures and transport failures are recovered
/// internally and never appear here. Cancellation of a running engine is a
/// normal outcome, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Requested durations fall outside the allowed bounds. The request is
    /// rejected without mutating any session state.
    #[error("invalid duration: {0}")]
    InvalidDuration(String),
}
