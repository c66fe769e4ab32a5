//! # Operation Deadline
//!
//! Every store-touching operation runs under a bounded deadline. On expiry the
//! in-flight future is dropped and the caller sees `Timeout`. A store write
//! is the last step of every guarded operation and nothing is awaited after
//! it, so a call that reports `Timeout` has written nothing: the document is
//! left exactly as it was before the call.

use shared_types::{ContentError, ContentResult};
use std::future::Future;
use std::time::Duration;

/// Deadline used when a service is built without an explicit one.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Run `operation` with a deadline, mapping expiry to `ContentError::Timeout`.
pub async fn with_deadline<T, F>(deadline: Duration, operation: F) -> ContentResult<T>
where
    F: Future<Output = ContentResult<T>>,
{
    match tokio::time::timeout(deadline, operation).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(deadline_ms = deadline.as_millis() as u64, "operation deadline exceeded");
            Err(ContentError::Timeout)
        }
    }
}
