//! # Content Service Runtime
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (logs, optional OTLP traces, metrics registry)
//! 2. Load and validate configuration from the environment
//! 3. Open the document store and wire the services
//! 4. Serve JSON-RPC until Ctrl+C, then drain in-flight requests

use anyhow::{Context, Result};
use tracing::info;

use qa_telemetry::{init_telemetry, TelemetryConfig};
use service_runtime::{ServiceConfig, ServiceContainer};

#[tokio::main]
async fn main() -> Result<()> {
    let _telemetry = init_telemetry(TelemetryConfig::from_env())
        .await
        .context("Failed to initialize telemetry")?;

    let config = ServiceConfig::from_env().context("Invalid configuration")?;
    info!(
        addr = %config.listen_addr(),
        backend = ?config.storage.backend,
        data_dir = %config.storage.data_dir.display(),
        "Starting content service v{}",
        env!("CARGO_PKG_VERSION")
    );

    let container = ServiceContainer::new(config).context("Failed to build services")?;
    let gateway = container.gateway().context("Failed to build gateway")?;

    gateway
        .start(shutdown_signal())
        .await
        .context("JSON-RPC server failed")?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for Ctrl+C"),
    }
}
