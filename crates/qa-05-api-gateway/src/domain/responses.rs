//! Response payloads.
//!
//! Mutating methods answer with a [`MutationResponse`] envelope in a normal
//! JSON-RPC result, whether or not the action was applied. Reads answer with
//! typed payloads and report failures as JSON-RPC errors.

use qa_01_document_store::QueryResult;
use serde::{Deserialize, Serialize};
use shared_types::{ContentError, VoteKind};

use crate::domain::error::ApiError;

/// `{success, message}` envelope of a mutating call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    /// Created entity or vote receipt, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl MutationResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            error: None,
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn failed(error: ContentError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            error: Some(error.into()),
            data: None,
        }
    }

    /// Build from a service result, attaching the serialized value on success.
    pub fn from_result<T: Serialize>(
        result: Result<T, ContentError>,
        message: &str,
    ) -> Self {
        match result {
            Ok(value) => match serde_json::to_value(value) {
                Ok(serde_json::Value::Null) => Self::ok(message),
                Ok(data) => Self::ok(message).with_data(data),
                Err(e) => Self::failed(ContentError::StoreUnavailable(e.to_string())),
            },
            Err(error) => Self::failed(error),
        }
    }
}

/// A list read with its total count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            total_count: items.len(),
            items,
        }
    }
}

impl<T> From<QueryResult<T>> for Listing<T> {
    fn from(result: QueryResult<T>) -> Self {
        Self {
            items: result.items,
            total_count: result.total_count,
        }
    }
}

/// Answer to `content_getUserVote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserVote {
    pub has_voted: bool,
    pub vote_type: Option<VoteKind>,
}

impl From<Option<VoteKind>> for UserVote {
    fn from(vote_type: Option<VoteKind>) -> Self {
        Self {
            has_voted: vote_type.is_some(),
            vote_type,
        }
    }
}
