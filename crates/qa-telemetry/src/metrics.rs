//! Prometheus metrics for the RPC surface.
//!
//! All metrics follow the naming convention: `qa_<area>_<metric>_<unit>`.
//! Metrics live in the default registry, next to the per-subsystem counters
//! (`qa_votes_total`, `qa_flags_total`, `qa_store_cas_retries_total`, ...)
//! that the subsystem crates register behind their `metrics` feature.

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec,
    IntCounterVec, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// RPC requests by method and outcome (`ok` or an error kind)
    pub static ref RPC_REQUESTS: IntCounterVec = register_int_counter_vec!(
        "qa_rpc_requests_total",
        "Total JSON-RPC requests by method and outcome",
        &["method", "outcome"]
    )
    .expect("metric creation failed");

    /// RPC handling latency by method
    pub static ref RPC_LATENCY: HistogramVec = register_histogram_vec!(
        "qa_rpc_request_duration_seconds",
        "Time spent handling JSON-RPC requests",
        &["method"],
        exponential_buckets(0.0005, 2.0, 14).expect("valid buckets")
    )
    .expect("metric creation failed");
}

/// Force registration so the metrics appear before the first request.
pub fn register_metrics() -> Result<(), TelemetryError> {
    lazy_static::initialize(&RPC_REQUESTS);
    lazy_static::initialize(&RPC_LATENCY);
    Ok(())
}

/// Record one handled request.
pub fn record_rpc(method: &str, outcome: &str, seconds: f64) {
    RPC_REQUESTS.with_label_values(&[method, outcome]).inc();
    RPC_LATENCY.with_label_values(&[method]).observe(seconds);
}

/// Encode the default registry as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
