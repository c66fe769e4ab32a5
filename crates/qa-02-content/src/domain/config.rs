//! Content service configuration.

use qa_01_document_store::DEFAULT_OPERATION_TIMEOUT;
use std::time::Duration;

/// Tuning for `ContentService`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentConfig {
    /// Per-operation deadline.
    pub operation_timeout: Duration,
    /// Number of questions in the user feed.
    pub feed_limit: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
            feed_limit: 50,
        }
    }
}
