//! Error types for the revision pipeline
//!
//! The diff engine itself is total and never fails; every failure mode in
//! this crate belongs to the revision request path.

use thiserror::Error;

/// Errors surfaced by the revision orchestrator and its backend
#[derive(Debug, Error)]
pub enum RevisionError {
    /// Unrecognized mode literal; the engine is never invoked
    #[error("unrecognized revision mode: {0:?} (expected \"grammar\" or \"full\")")]
    InvalidMode(String),

    /// Source text is empty after trimming
    #[error("input text is empty")]
    EmptyInput,

    /// Backend returned blank or whitespace-only text
    #[error("backend returned an empty revision")]
    EmptyResponse,

    /// Backend response could not be interpreted as plain text
    #[error("malformed backend response: {0}")]
    MalformedResponse(String),

    /// Backend request exceeded its timeout
    #[error("backend request timed out")]
    BackendTimeout,

    /// Backend could not be reached or answered with a failure status
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),
}

impl RevisionError {
    /// Whether the caller may reasonably resubmit the same request
    ///
    /// Retrying is a caller-level policy decision; the orchestrator never
    /// retries internally.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RevisionError::BackendTimeout | RevisionError::BackendUnavailable(_)
        )
    }
}
