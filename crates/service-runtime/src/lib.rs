//! # Service Runtime Library
//!
//! Exposes the runtime's modules for testing. The entry point is the
//! `main.rs` binary.
//!
//! - `container/` - configuration and service wiring
//! - `adapters/` - storage backends supplied by the runtime

#![allow(clippy::type_complexity)]

pub mod adapters;
pub mod container;

pub use container::{ServiceConfig, ServiceContainer};
