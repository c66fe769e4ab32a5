//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the document store.
//!
//! Production: `RocksDbDocumentStore` (service-runtime/adapters/storage)
//! Testing: `InMemoryDocumentStore` (adapters/memory.rs)

use async_trait::async_trait;
use shared_types::Timestamp;

use crate::domain::document::{CasOutcome, Collection, VersionedDocument};
use crate::domain::errors::StoreError;

/// Versioned document storage.
///
/// Each operation is atomic on a single document. There is no cross-document
/// transaction.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document and its current version.
    async fn get(
        &self,
        collection: Collection,
        key: &str,
    ) -> Result<Option<VersionedDocument>, StoreError>;

    /// Insert a new document at version 1.
    ///
    /// Fails with `DuplicateKey` if the key already exists.
    async fn insert(&self, collection: Collection, key: &str, body: Vec<u8>)
        -> Result<u64, StoreError>;

    /// Replace a document only if its version still equals `expected_version`.
    ///
    /// The check and the write are indivisible.
    async fn compare_and_swap(
        &self,
        collection: Collection,
        key: &str,
        expected_version: u64,
        body: Vec<u8>,
    ) -> Result<CasOutcome, StoreError>;

    /// Remove a document. Returns whether it existed.
    async fn delete(&self, collection: Collection, key: &str) -> Result<bool, StoreError>;

    /// Every document of a collection, in unspecified order.
    async fn scan(&self, collection: Collection) -> Result<Vec<VersionedDocument>, StoreError>;
}

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Current timestamp in milliseconds since epoch.
    fn now(&self) -> Timestamp;
}
