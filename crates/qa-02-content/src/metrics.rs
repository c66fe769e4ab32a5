//! # Content Metrics
//!
//! Enable with the `metrics` feature.
//!
//! ## Metrics Exported
//!
//! - `qa_questions_created_total`
//! - `qa_answers_created_total`

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, IntCounter};

#[cfg(feature = "metrics")]
lazy_static! {
    pub static ref QUESTIONS_CREATED: IntCounter = register_int_counter!(
        "qa_questions_created_total",
        "Total questions posted"
    )
    .expect("Failed to create QUESTIONS_CREATED metric");

    pub static ref ANSWERS_CREATED: IntCounter = register_int_counter!(
        "qa_answers_created_total",
        "Total answers posted"
    )
    .expect("Failed to create ANSWERS_CREATED metric");
}

#[cfg(feature = "metrics")]
pub fn record_question_created() {
    QUESTIONS_CREATED.inc();
}

#[cfg(feature = "metrics")]
pub fn record_answer_created() {
    ANSWERS_CREATED.inc();
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_question_created() {}

#[cfg(not(feature = "metrics"))]
pub fn record_answer_created() {}
