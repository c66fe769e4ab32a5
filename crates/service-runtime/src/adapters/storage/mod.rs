//! # Production Storage Adapters
//!
//! Enable the `rocksdb` feature to use the RocksDB document store:
//!
//! ```toml
//! service-runtime = { path = "...", features = ["rocksdb"] }
//! ```
//!
//! Without it only the in-memory store from `qa-01-document-store` is
//! available.

#[cfg(feature = "rocksdb")]
pub mod rocksdb_adapter;

#[cfg(feature = "rocksdb")]
pub use rocksdb_adapter::{RocksDbConfig, RocksDbDocumentStore};

pub use qa_01_document_store::{InMemoryDocumentStore, SystemTimeSource};
