//! # Document Store Metrics
//!
//! Enable with the `metrics` feature:
//! ```toml
//! qa-01-document-store = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `qa_store_cas_retries_total` - Optimistic updates that lost a race and re-ran
//! - `qa_store_cas_exhausted_total` - Updates that gave up after the retry budget

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, IntCounter};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Version mismatches followed by a re-run of the mutation
    pub static ref CAS_RETRIES: IntCounter = register_int_counter!(
        "qa_store_cas_retries_total",
        "Total optimistic document updates retried after a version mismatch"
    )
    .expect("Failed to create CAS_RETRIES metric");

    /// Updates that ran out of attempts
    pub static ref CAS_EXHAUSTED: IntCounter = register_int_counter!(
        "qa_store_cas_exhausted_total",
        "Total optimistic document updates abandoned after the retry budget"
    )
    .expect("Failed to create CAS_EXHAUSTED metric");
}

#[cfg(feature = "metrics")]
pub fn record_cas_retry() {
    CAS_RETRIES.inc();
}

#[cfg(feature = "metrics")]
pub fn record_cas_exhausted() {
    CAS_EXHAUSTED.inc();
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_cas_retry() {}

#[cfg(not(feature = "metrics"))]
pub fn record_cas_exhausted() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_callable() {
        record_cas_retry();
        record_cas_exhausted();
    }
}
