//! # RocksDB Document Store
//!
//! Production implementation of the `DocumentStore` port.
//!
//! ## Layout
//!
//! One key space, collections separated by key prefix (`q:` questions,
//! `t:` tags). Each value is an 8-byte big-endian version followed by the
//! JSON document body.
//!
//! ## Atomicity
//!
//! The database is an `OptimisticTransactionDB`. Each read-check-write
//! sequence (`insert`, `compare_and_swap`, `delete`) reads its key with
//! `get_for_update` inside a transaction, and RocksDB rejects the commit if
//! another writer touched that key in between. Writes to different keys
//! never wait on each other. A rejected CAS reports the version that won;
//! a rejected delete is retried.
//!
//! Reads (`get`, `scan`) run on the blocking thread pool. Writes commit
//! inline with no await after them, so a caller whose deadline expires never
//! has a write land behind its `Timeout`.

use async_trait::async_trait;
use qa_01_document_store::{CasOutcome, Collection, DocumentStore, StoreError, VersionedDocument};
use rocksdb::{
    ErrorKind, IteratorMode, OptimisticTransactionDB, OptimisticTransactionOptions, Options,
    Transaction, WriteOptions,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

const VERSION_LEN: usize = 8;

/// Commit attempts for an unconditional delete before giving up.
const MAX_DELETE_ATTEMPTS: usize = 16;

/// RocksDB configuration for production use
#[derive(Debug, Clone)]
pub struct RocksDbConfig {
    /// Path to the database directory
    pub path: PathBuf,
    /// Block cache size in bytes (default: 64MB)
    pub block_cache_size: usize,
    /// Write buffer size in bytes (default: 32MB)
    pub write_buffer_size: usize,
    /// Enable fsync after each write (default: true for durability)
    pub sync_writes: bool,
    /// Refuse writes when free disk space falls below this percentage
    pub min_disk_space_percent: u8,
}

impl Default for RocksDbConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data/documents"),
            block_cache_size: 64 * 1024 * 1024,
            write_buffer_size: 32 * 1024 * 1024,
            sync_writes: true,
            min_disk_space_percent: 5,
        }
    }
}

impl RocksDbConfig {
    /// Create config for testing (smaller buffers, no sync)
    pub fn for_testing(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            block_cache_size: 8 * 1024 * 1024,
            write_buffer_size: 4 * 1024 * 1024,
            sync_writes: false,
            min_disk_space_percent: 0,
        }
    }
}

/// RocksDB-backed `DocumentStore`.
pub struct RocksDbDocumentStore {
    inner: Arc<Inner>,
}

struct Inner {
    db: OptimisticTransactionDB,
    config: RocksDbConfig,
}

impl RocksDbDocumentStore {
    /// Open or create the database.
    pub fn open(config: RocksDbConfig) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&config.path).map_err(|e| StoreError::Unavailable {
            message: format!("cannot create {}: {}", config.path.display(), e),
        })?;

        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.set_write_buffer_size(config.write_buffer_size);
        opts.set_compression_type(rocksdb::DBCompressionType::Snappy);

        let mut block_opts = rocksdb::BlockBasedOptions::default();
        block_opts.set_bloom_filter(10.0, false);
        block_opts.set_block_cache(&rocksdb::Cache::new_lru_cache(config.block_cache_size));
        opts.set_block_based_table_factory(&block_opts);

        let db = OptimisticTransactionDB::open(&opts, &config.path).map_err(|e| {
            StoreError::Unavailable {
                message: format!("failed to open RocksDB: {}", e),
            }
        })?;
        info!(path = %config.path.display(), "RocksDB document store opened");

        Ok(Self {
            inner: Arc::new(Inner { db, config }),
        })
    }

    /// Free disk space of the data directory, in percent.
    pub fn available_disk_space_percent(&self) -> Result<u8, StoreError> {
        self.inner.available_disk_space_percent()
    }

    /// Run a read against the database on the blocking thread pool.
    async fn blocking<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Inner) -> Result<T, StoreError> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || op(&inner))
            .await
            .map_err(|e| StoreError::Unavailable {
                message: format!("storage task failed: {}", e),
            })?
    }
}

impl Inner {
    fn available_disk_space_percent(&self) -> Result<u8, StoreError> {
        let available = fs2::available_space(&self.config.path).map_err(io_error)?;
        let total = fs2::total_space(&self.config.path).map_err(io_error)?;
        if total == 0 {
            return Err(StoreError::Unavailable {
                message: "unable to determine disk space".to_string(),
            });
        }
        Ok(((available as f64 / total as f64) * 100.0) as u8)
    }

    fn ensure_disk_space(&self) -> Result<(), StoreError> {
        if self.config.min_disk_space_percent == 0 {
            return Ok(());
        }
        let free = self.available_disk_space_percent()?;
        if free < self.config.min_disk_space_percent {
            warn!(free, minimum = self.config.min_disk_space_percent, "disk space low");
            return Err(StoreError::Unavailable {
                message: format!("disk space below {}%", self.config.min_disk_space_percent),
            });
        }
        Ok(())
    }

    fn transaction(&self) -> Transaction<'_, OptimisticTransactionDB> {
        let mut write_opts = WriteOptions::default();
        write_opts.set_sync(self.config.sync_writes);
        self.db
            .transaction_opt(&write_opts, &OptimisticTransactionOptions::default())
    }

    fn read_raw(&self, storage_key: &[u8]) -> Result<Option<(u64, Vec<u8>)>, StoreError> {
        let value = self.db.get(storage_key).map_err(rocks_error("get"))?;
        value.map(|raw| split_value(&raw)).transpose()
    }

    fn insert(&self, storage_key: &[u8], key: &str, body: &[u8]) -> Result<u64, StoreError> {
        self.ensure_disk_space()?;
        let duplicate = || StoreError::DuplicateKey {
            key: key.to_string(),
        };
        let txn = self.transaction();
        if txn
            .get_for_update(storage_key, true)
            .map_err(rocks_error("get"))?
            .is_some()
        {
            return Err(duplicate());
        }
        txn.put(storage_key, join_value(1, body))
            .map_err(rocks_error("put"))?;
        match txn.commit() {
            Ok(()) => Ok(1),
            Err(e) if is_conflict(&e) => Err(duplicate()),
            Err(e) => Err(rocks_error("commit")(e)),
        }
    }

    fn compare_and_swap(
        &self,
        storage_key: &[u8],
        expected_version: u64,
        body: &[u8],
    ) -> Result<CasOutcome, StoreError> {
        self.ensure_disk_space()?;
        let txn = self.transaction();
        let current = match txn
            .get_for_update(storage_key, true)
            .map_err(rocks_error("get"))?
        {
            None => return Ok(CasOutcome::Missing),
            Some(raw) => split_value(&raw)?.0,
        };
        if current != expected_version {
            return Ok(CasOutcome::VersionMismatch { current });
        }
        let version = current + 1;
        txn.put(storage_key, join_value(version, body))
            .map_err(rocks_error("put"))?;
        match txn.commit() {
            Ok(()) => Ok(CasOutcome::Committed { version }),
            Err(e) if is_conflict(&e) => Ok(match self.read_raw(storage_key)? {
                None => CasOutcome::Missing,
                Some((current, _)) => CasOutcome::VersionMismatch { current },
            }),
            Err(e) => Err(rocks_error("commit")(e)),
        }
    }

    fn delete(&self, storage_key: &[u8]) -> Result<bool, StoreError> {
        for _ in 0..MAX_DELETE_ATTEMPTS {
            let txn = self.transaction();
            if txn
                .get_for_update(storage_key, true)
                .map_err(rocks_error("get"))?
                .is_none()
            {
                return Ok(false);
            }
            txn.delete(storage_key).map_err(rocks_error("delete"))?;
            match txn.commit() {
                Ok(()) => return Ok(true),
                Err(e) if is_conflict(&e) => continue,
                Err(e) => return Err(rocks_error("commit")(e)),
            }
        }
        Err(StoreError::Unavailable {
            message: format!("delete kept conflicting after {} attempts", MAX_DELETE_ATTEMPTS),
        })
    }

    fn scan(&self, prefix: &[u8]) -> Result<Vec<VersionedDocument>, StoreError> {
        let mut results = Vec::new();
        let iter = self
            .db
            .iterator(IteratorMode::From(prefix, rocksdb::Direction::Forward));
        for item in iter {
            let (key, value) = item.map_err(rocks_error("scan"))?;
            if !key.starts_with(prefix) {
                break;
            }
            let (version, body) = split_value(&value)?;
            let key = String::from_utf8_lossy(&key[prefix.len()..]).into_owned();
            results.push(VersionedDocument { key, version, body });
        }
        Ok(results)
    }
}

/// Optimistic commit rejected because the key changed after it was read.
fn is_conflict(e: &rocksdb::Error) -> bool {
    matches!(e.kind(), ErrorKind::Busy | ErrorKind::TryAgain)
}

fn rocks_error(op: &'static str) -> impl Fn(rocksdb::Error) -> StoreError {
    move |e| StoreError::Unavailable {
        message: format!("RocksDB {} failed: {}", op, e),
    }
}

fn io_error(e: std::io::Error) -> StoreError {
    StoreError::Unavailable {
        message: e.to_string(),
    }
}

fn join_value(version: u64, body: &[u8]) -> Vec<u8> {
    let mut value = Vec::with_capacity(VERSION_LEN + body.len());
    value.extend_from_slice(&version.to_be_bytes());
    value.extend_from_slice(body);
    value
}

fn split_value(raw: &[u8]) -> Result<(u64, Vec<u8>), StoreError> {
    if raw.len() < VERSION_LEN {
        return Err(StoreError::Serialization {
            message: format!("stored value too short ({} bytes)", raw.len()),
        });
    }
    let (version, body) = raw.split_at(VERSION_LEN);
    let mut bytes = [0u8; VERSION_LEN];
    bytes.copy_from_slice(version);
    Ok((u64::from_be_bytes(bytes), body.to_vec()))
}

#[async_trait]
impl DocumentStore for RocksDbDocumentStore {
    async fn get(
        &self,
        collection: Collection,
        key: &str,
    ) -> Result<Option<VersionedDocument>, StoreError> {
        let storage_key = collection.storage_key(key);
        let key = key.to_string();
        self.blocking(move |inner| {
            Ok(inner
                .read_raw(&storage_key)?
                .map(|(version, body)| VersionedDocument { key, version, body }))
        })
        .await
    }

    async fn insert(
        &self,
        collection: Collection,
        key: &str,
        body: Vec<u8>,
    ) -> Result<u64, StoreError> {
        let version = self
            .inner
            .insert(&collection.storage_key(key), key, &body)?;
        debug!(collection = %collection, key, "document inserted");
        Ok(version)
    }

    async fn compare_and_swap(
        &self,
        collection: Collection,
        key: &str,
        expected_version: u64,
        body: Vec<u8>,
    ) -> Result<CasOutcome, StoreError> {
        self.inner
            .compare_and_swap(&collection.storage_key(key), expected_version, &body)
    }

    async fn delete(&self, collection: Collection, key: &str) -> Result<bool, StoreError> {
        self.inner.delete(&collection.storage_key(key))
    }

    async fn scan(&self, collection: Collection) -> Result<Vec<VersionedDocument>, StoreError> {
        let prefix = collection.key_prefix();
        self.blocking(move |inner| inner.scan(prefix)).await
    }
}
