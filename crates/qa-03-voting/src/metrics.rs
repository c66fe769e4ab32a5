//! # Voting Metrics
//!
//! Enable with the `metrics` feature.
//!
//! ## Metrics Exported
//!
//! - `qa_votes_total` - Vote requests by kind and outcome
//!   (`added`, `switched`, `duplicate`, `self_vote`, or the error kind
//!   when the call fails after deciding, e.g. `timeout`, `conflict`)

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter_vec, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Vote decisions, labeled by requested kind and outcome
    pub static ref VOTES: IntCounterVec = register_int_counter_vec!(
        "qa_votes_total",
        "Total vote requests decided by the transition policy",
        &["kind", "outcome"]
    )
    .expect("Failed to create VOTES metric");
}

#[cfg(feature = "metrics")]
pub fn record_vote(kind: &str, outcome: &str) {
    VOTES.with_label_values(&[kind, outcome]).inc();
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_vote(_kind: &str, _outcome: &str) {}
