//! # Content Service Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/   # Cross-crate flows over the service container
//! │   ├── flows.rs       # Vote lifecycle, cascade delete, moderation
//! │   ├── races.rs       # Concurrent writers on one question document
//! │   └── gateway.rs     # JSON-RPC end to end
//! └── benches/           # criterion benchmarks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p qa-tests
//! cargo test -p qa-tests integration::races
//! cargo bench -p qa-tests
//! ```

#![allow(dead_code)]

pub mod integration;
