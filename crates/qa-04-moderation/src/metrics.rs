//! # Moderation Metrics
//!
//! Enable with the `metrics` feature.
//!
//! ## Metrics Exported
//!
//! - `qa_flags_total` - Flags raised, labeled by target kind

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter_vec, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    pub static ref FLAGS: IntCounterVec = register_int_counter_vec!(
        "qa_flags_total",
        "Total moderation flags raised",
        &["target"]
    )
    .expect("Failed to create FLAGS metric");
}

#[cfg(feature = "metrics")]
pub fn record_flag(target: &str) {
    FLAGS.with_label_values(&[target]).inc();
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_flag(_target: &str) {}
