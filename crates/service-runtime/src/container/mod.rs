//! # Service Container
//!
//! Configuration and dependency injection for the runtime. Every service is
//! built once on a shared store handle and handed to the gateway as a trait
//! object.

pub mod config;
pub mod services;

pub use config::{ConfigError, ServiceConfig, StorageBackend, StorageConfig};
pub use services::{open_store, ContainerError, ServiceContainer};
