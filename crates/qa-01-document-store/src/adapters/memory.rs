//! # In-Memory Document Store
//!
//! `HashMap`-backed store. The version check and the write of
//! `compare_and_swap` happen under one write lock with no await point between
//! them, so a cancelled caller can never leave a partial write.
//!
//! Two test hooks: an artificial latency applied before every operation, and
//! an "unavailable" switch that makes every operation fail.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use crate::domain::document::{CasOutcome, Collection, VersionedDocument};
use crate::domain::errors::StoreError;
use crate::ports::outbound::DocumentStore;

type Documents = HashMap<(Collection, String), (u64, Vec<u8>)>;

/// In-memory `DocumentStore`.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    data: RwLock<Documents>,
    latency_ms: AtomicU64,
    unavailable: AtomicBool,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every subsequent operation by `latency`.
    pub fn set_latency(&self, latency: Duration) {
        self.latency_ms
            .store(latency.as_millis() as u64, Ordering::SeqCst);
    }

    /// Make every subsequent operation fail with `Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored documents in a collection.
    pub fn len(&self, collection: Collection) -> usize {
        self.data
            .read()
            .keys()
            .filter(|(c, _)| *c == collection)
            .count()
    }

    pub fn is_empty(&self, collection: Collection) -> bool {
        self.len(collection) == 0
    }

    async fn before_operation(&self) -> Result<(), StoreError> {
        let latency = self.latency_ms.load(Ordering::SeqCst);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                message: "in-memory store switched off".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(
        &self,
        collection: Collection,
        key: &str,
    ) -> Result<Option<VersionedDocument>, StoreError> {
        self.before_operation().await?;
        let data = self.data.read();
        Ok(data
            .get(&(collection, key.to_string()))
            .map(|(version, body)| VersionedDocument {
                key: key.to_string(),
                version: *version,
                body: body.clone(),
            }))
    }

    async fn insert(
        &self,
        collection: Collection,
        key: &str,
        body: Vec<u8>,
    ) -> Result<u64, StoreError> {
        self.before_operation().await?;
        let mut data = self.data.write();
        let slot = (collection, key.to_string());
        if data.contains_key(&slot) {
            return Err(StoreError::DuplicateKey {
                key: key.to_string(),
            });
        }
        data.insert(slot, (1, body));
        Ok(1)
    }

    async fn compare_and_swap(
        &self,
        collection: Collection,
        key: &str,
        expected_version: u64,
        body: Vec<u8>,
    ) -> Result<CasOutcome, StoreError> {
        self.before_operation().await?;
        let mut data = self.data.write();
        match data.get_mut(&(collection, key.to_string())) {
            None => Ok(CasOutcome::Missing),
            Some((version, _)) if *version != expected_version => {
                Ok(CasOutcome::VersionMismatch { current: *version })
            }
            Some(entry) => {
                entry.0 += 1;
                entry.1 = body;
                Ok(CasOutcome::Committed { version: entry.0 })
            }
        }
    }

    async fn delete(&self, collection: Collection, key: &str) -> Result<bool, StoreError> {
        self.before_operation().await?;
        Ok(self
            .data
            .write()
            .remove(&(collection, key.to_string()))
            .is_some())
    }

    async fn scan(&self, collection: Collection) -> Result<Vec<VersionedDocument>, StoreError> {
        self.before_operation().await?;
        let data = self.data.read();
        Ok(data
            .iter()
            .filter(|((c, _), _)| *c == collection)
            .map(|((_, key), (version, body))| VersionedDocument {
                key: key.clone(),
                version: *version,
                body: body.clone(),
            })
            .collect())
    }
}
