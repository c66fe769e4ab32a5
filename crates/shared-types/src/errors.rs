//! # Error Types
//!
//! The error taxonomy surfaced by every content operation.
//!
//! `Unauthorized`, `Conflict`, `NotFound`, `InvalidIdentifier` and
//! `Validation` are expected outcomes reported back to the caller as ordinary
//! negative responses. `Timeout` and `StoreUnavailable` are infrastructure
//! faults.

use thiserror::Error;

/// Errors returned by content, voting and moderation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// Question or answer does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Identifier is not a 24-hex-character id.
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Caller may not perform this action (non-owner delete, self-vote, self-answer).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Action already applied (duplicate vote of the same kind, duplicate tag).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Request content rejected at intake.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Operation deadline exceeded; nothing was written.
    #[error("operation timed out")]
    Timeout,

    /// Document store could not be reached or returned unreadable data.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl ContentError {
    /// True for outcomes caused by the request rather than the infrastructure.
    pub fn is_client_outcome(&self) -> bool {
        !matches!(self, ContentError::Timeout | ContentError::StoreUnavailable(_))
    }

    /// Stable machine-readable kind, used in responses and metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentError::NotFound(_) => "not_found",
            ContentError::InvalidIdentifier(_) => "invalid_identifier",
            ContentError::Unauthorized(_) => "unauthorized",
            ContentError::Conflict(_) => "conflict",
            ContentError::Validation(_) => "validation",
            ContentError::Timeout => "timeout",
            ContentError::StoreUnavailable(_) => "store_unavailable",
        }
    }

    pub fn question_not_found() -> Self {
        ContentError::NotFound("question".to_string())
    }

    pub fn answer_not_found() -> Self {
        ContentError::NotFound("answer".to_string())
    }
}

/// Result alias for content operations.
pub type ContentResult<T> = Result<T, ContentError>;
