//! QA-05 API Gateway - JSON-RPC 2.0 interface to the content services.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                   API GATEWAY (qa-05)                      │
//! ├───────────────────────────────────────────────────────────┤
//! │   POST /        GET /health        GET /metrics            │
//! │      │                                                     │
//! │   BodyLimit → Trace                                        │
//! │      │                                                     │
//! │   parse params, check presence → route_method              │
//! └──────┬───────────────────┬────────────────────┬───────────┘
//!        ▼                   ▼                    ▼
//!   ContentApi          VotingApi          ModerationApi
//! ```
//!
//! # Response shapes
//!
//! - Mutating methods (`postQuestion`, `upvoteAnswer`, `flagAnswer`, ...)
//!   always return a `{success, message, error?, data?}` result. A rejected
//!   vote is a normal result with `success: false`, not a JSON-RPC error.
//! - Reads return typed payloads; lists come as `{items, total_count}`.
//! - Missing or empty ids fail with `INVALID_PARAMS` before any service call.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod router;
pub mod rpc;
pub mod service;

pub use domain::config::GatewayConfig;
pub use domain::error::{codes, ApiError, ApiResult, GatewayError};
pub use domain::responses::{Listing, MutationResponse, UserVote};
pub use router::{is_method_supported, METHODS};
pub use rpc::RpcHandlers;
pub use service::ApiGatewayService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
