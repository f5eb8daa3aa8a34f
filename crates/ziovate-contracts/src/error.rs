//! Error taxonomy for the ziovate client core.
//!
//! All fallible operations behind the API seam return `ApiResult<T>`.
//! Variants are split along the line that matters to callers: transient
//! failures are eligible for automatic retry, everything else must be
//! surfaced to the user (or, for `Validation`, fixed locally and resubmitted).

use thiserror::Error;

/// The unified error type for the ziovate client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller submitted bad input. Recoverable locally by re-prompting.
    #[error("validation failed on '{field}': {message}")]
    Validation { field: String, message: String },

    /// The backend rejected the credentials. Surfaced to the user, never retried.
    #[error("authentication failed: {reason}")]
    Auth { reason: String },

    /// The backend could not be reached. Transient; eligible for retry with backoff.
    #[error("backend unreachable: {reason}")]
    Unreachable { reason: String },

    /// The call did not complete within its deadline. Transient; eligible for retry.
    #[error("request timed out after {elapsed_ms} ms")]
    Timeout { elapsed_ms: u64 },

    /// The referenced entity does not exist. Permanent; surfaced to the user.
    #[error("{entity} '{id}' not found")]
    NotFound { entity: String, id: String },

    /// A duplicate submission collided with an existing record.
    ///
    /// Callers recording dose actions must handle this idempotently rather
    /// than surface it as a failure.
    #[error("conflicting submission: {reason}")]
    Conflict { reason: String },

    /// A prescription file was rejected on size or content type.
    #[error("prescription upload rejected: {reason}")]
    Upload { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

impl ApiError {
    /// Return true if the error is transient and safe to retry automatically.
    ///
    /// Only `Unreachable` and `Timeout` qualify. Auth and validation failures
    /// retried verbatim would fail the same way; retrying a `Conflict` would
    /// double-submit the very action the conflict guards against.
    pub fn is_transient(&self) -> bool {
        matches!(self, ApiError::Unreachable { .. } | ApiError::Timeout { .. })
    }
}

/// Convenience alias used throughout the ziovate crates.
pub type ApiResult<T> = Result<T, ApiError>;
