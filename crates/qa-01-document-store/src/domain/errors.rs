//! # Domain Errors
//!
//! Error types for the document store.
//!
//! Every `StoreError` reaching a service is reported as
//! `ContentError::StoreUnavailable`; the store itself never decides
//! business outcomes.

use shared_types::ContentError;
use thiserror::Error;

/// Errors raised by `DocumentStore` implementations and the codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Backend I/O failure or backend unreachable.
    #[error("Document store unavailable: {message}")]
    Unavailable { message: String },

    /// Insert of a key that already exists.
    #[error("Document already exists: {key}")]
    DuplicateKey { key: String },

    /// Document bytes could not be encoded or decoded.
    #[error("Document serialization error: {message}")]
    Serialization { message: String },
}

impl From<StoreError> for ContentError {
    fn from(err: StoreError) -> Self {
        ContentError::StoreUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_conversion() {
        let err = StoreError::Unavailable {
            message: "connection refused".to_string(),
        };
        match ContentError::from(err) {
            ContentError::StoreUnavailable(message) => {
                assert!(message.contains("connection refused"));
            }
            other => panic!("Expected StoreUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_store_error_messages() {
        let duplicate = StoreError::DuplicateKey {
            key: "q:5f1d".to_string(),
        };
        assert_eq!(duplicate.to_string(), "Document already exists: q:5f1d");

        let corrupt = StoreError::Serialization {
            message: "stored value too short (3 bytes)".to_string(),
        };
        assert_eq!(
            ContentError::from(corrupt),
            ContentError::StoreUnavailable(
                "Document serialization error: stored value too short (3 bytes)".to_string()
            )
        );
    }
}
