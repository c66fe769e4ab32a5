//! API Gateway service: JSON-RPC over HTTP, health and metrics endpoints.

use crate::domain::config::GatewayConfig;
use crate::domain::error::{ApiError, GatewayError};
use crate::router::{is_method_supported, outcome_label, route_method, AppState};
use crate::rpc::RpcHandlers;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// API Gateway service state
pub struct ApiGatewayService {
    config: GatewayConfig,
    rpc_handlers: Arc<RpcHandlers>,
}

impl ApiGatewayService {
    pub fn new(config: GatewayConfig, rpc_handlers: RpcHandlers) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        Ok(Self {
            config,
            rpc_handlers: Arc::new(rpc_handlers),
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build the HTTP router
    pub fn router(&self) -> Router {
        let state = AppState {
            rpc_handlers: Arc::clone(&self.rpc_handlers),
            max_batch_size: self.config.max_batch_size,
        };

        Router::new()
            .route("/", post(handle_json_rpc))
            .route("/health", get(health_check))
            .route("/metrics", get(metrics_endpoint))
            .layer(RequestBodyLimitLayer::new(self.config.max_body_bytes))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    pub async fn start<F>(&self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.listen_addr)
            .await
            .map_err(|e| GatewayError::Bind(format!("{}: {}", self.config.listen_addr, e)))?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(addr) = listener.local_addr() {
            info!(addr = %addr, "Starting JSON-RPC server");
        }
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| GatewayError::Serve(e.to_string()))?;
        info!("JSON-RPC server stopped");
        Ok(())
    }
}

fn error_body(id: Option<serde_json::Value>, error: ApiError) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "error": error,
        "id": id
    })
}

/// Handle JSON-RPC request
async fn handle_json_rpc(State(state): State<AppState>, body: String) -> impl IntoResponse {
    let request: serde_json::Value = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(error_body(None, ApiError::parse_error(e.to_string()))),
            );
        }
    };

    let response = match request {
        serde_json::Value::Array(requests) => {
            if requests.is_empty() {
                error_body(None, ApiError::invalid_request("empty batch"))
            } else if requests.len() > state.max_batch_size {
                error_body(
                    None,
                    ApiError::invalid_request(format!(
                        "batch of {} exceeds limit of {}",
                        requests.len(),
                        state.max_batch_size
                    )),
                )
            } else {
                let mut responses = Vec::with_capacity(requests.len());
                for req in &requests {
                    responses.push(process_single_request(&state, req).await);
                }
                serde_json::Value::Array(responses)
            }
        }
        single => process_single_request(&state, &single).await,
    };

    (StatusCode::OK, Json(response))
}

/// Process a single JSON-RPC request
async fn process_single_request(
    state: &AppState,
    request: &serde_json::Value,
) -> serde_json::Value {
    let id = request.get("id").cloned();

    // Notifications are not supported; every call needs an id.
    if let Some(ref id_val) = id {
        if id_val.is_null() {
            return error_body(
                None,
                ApiError::invalid_request("null id (notifications not supported)"),
            );
        }
        if let Some(s) = id_val.as_str() {
            if s.is_empty() {
                return error_body(None, ApiError::invalid_request("empty string id"));
            }
            if s.len() > 256 {
                return error_body(
                    None,
                    ApiError::invalid_request("id string too long (max 256 chars)"),
                );
            }
        }
        if !id_val.is_string() && !id_val.is_number() {
            return error_body(
                None,
                ApiError::invalid_request("id must be string or number"),
            );
        }
    }

    let Some(method) = request.get("method").and_then(|m| m.as_str()) else {
        return error_body(id, ApiError::invalid_request("missing method"));
    };
    let params = request.get("params");

    let started = Instant::now();
    let result = route_method(state, method, params).await;
    let outcome = outcome_label(&result);
    let metric_method = if is_method_supported(method) {
        method
    } else {
        "unknown"
    };
    qa_telemetry::record_rpc(metric_method, &outcome, started.elapsed().as_secs_f64());

    match result {
        Ok(value) => {
            debug!(method, outcome = %outcome, "rpc handled");
            serde_json::json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": value
            })
        }
        Err(e) => {
            debug!(method, code = e.code, "rpc failed");
            error_body(id, e)
        }
    }
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "content-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Prometheus text exposition of the default registry
async fn metrics_endpoint() -> impl IntoResponse {
    match qa_telemetry::encode_metrics() {
        Ok(text) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            text,
        ),
        Err(e) => {
            warn!(error = %e, "failed to encode metrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
                e.to_string(),
            )
        }
    }
}
