//! # Service Container
//!
//! Holds the document store and every subsystem service built on it.
//!
//! ## Wiring
//!
//! ```text
//! DocumentStore (memory | rocksdb)
//!        │
//!   QuestionRepository ──┬── ContentService ──┐
//!   TagRepository ───────┘                    │
//!        ├────────────────── VotingService ───┼── RpcHandlers ── ApiGatewayService
//!        └────────────────── ModerationService┘
//! ```
//!
//! All services share one store handle and one clock, so they all see the
//! same documents and the same optimistic version sequence.

use std::sync::Arc;

use qa_01_document_store::{
    DocumentStore, InMemoryDocumentStore, QuestionRepository, RepositoryConfig, StoreError,
    SystemTimeSource, TagRepository, TimeSource,
};
use qa_02_content::{ContentApi, ContentConfig, ContentService};
use qa_03_voting::{VotingApi, VotingService};
use qa_04_moderation::{ModerationApi, ModerationService};
use qa_05_api_gateway::{ApiGatewayService, GatewayError, RpcHandlers};
use tracing::{info, instrument};

use crate::container::config::{ServiceConfig, StorageBackend, StorageConfig};

/// Container construction errors.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("storage backend {0} is not compiled in (enable the `{0}` feature)")]
    BackendDisabled(&'static str),
}

/// Central container holding all service instances.
pub struct ServiceContainer {
    pub config: ServiceConfig,
    pub store: Arc<dyn DocumentStore>,
    pub content: Arc<dyn ContentApi>,
    pub voting: Arc<dyn VotingApi>,
    pub moderation: Arc<dyn ModerationApi>,
}

impl ServiceContainer {
    /// Open the configured store and build every service on it.
    #[instrument(skip(config), fields(backend = ?config.storage.backend))]
    pub fn new(config: ServiceConfig) -> Result<Self, ContainerError> {
        let store = open_store(&config.storage)?;
        Ok(Self::with_store(config, store, Arc::new(SystemTimeSource)))
    }

    /// Build every service on an existing store and clock.
    pub fn with_store(
        config: ServiceConfig,
        store: Arc<dyn DocumentStore>,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        let questions = QuestionRepository::with_config(
            Arc::clone(&store),
            clock,
            RepositoryConfig {
                max_cas_retries: config.max_cas_retries,
            },
        );
        let tags = TagRepository::new(Arc::clone(&store));

        let content = Arc::new(ContentService::with_config(
            questions.clone(),
            tags,
            ContentConfig {
                operation_timeout: config.operation_timeout,
                feed_limit: config.feed_limit,
            },
        ));
        let voting = Arc::new(VotingService::with_deadline(
            questions.clone(),
            config.operation_timeout,
        ));
        let moderation = Arc::new(ModerationService::with_deadline(
            questions,
            config.operation_timeout,
        ));

        info!(
            timeout_ms = config.operation_timeout.as_millis() as u64,
            max_cas_retries = config.max_cas_retries,
            "services wired"
        );

        Self {
            config,
            store,
            content,
            voting,
            moderation,
        }
    }

    /// JSON-RPC gateway over the container's services.
    pub fn gateway(&self) -> Result<ApiGatewayService, GatewayError> {
        let handlers = RpcHandlers::new(
            Arc::clone(&self.content),
            Arc::clone(&self.voting),
            Arc::clone(&self.moderation),
        );
        ApiGatewayService::new(self.config.gateway.clone(), handlers)
    }
}

/// Open the document store selected by configuration.
pub fn open_store(config: &StorageConfig) -> Result<Arc<dyn DocumentStore>, ContainerError> {
    match config.backend {
        StorageBackend::Memory => {
            info!("using in-memory document store");
            Ok(Arc::new(InMemoryDocumentStore::new()))
        }
        StorageBackend::RocksDb => open_rocksdb(config),
    }
}

#[cfg(feature = "rocksdb")]
fn open_rocksdb(config: &StorageConfig) -> Result<Arc<dyn DocumentStore>, ContainerError> {
    use crate::adapters::storage::{RocksDbConfig, RocksDbDocumentStore};

    let store = RocksDbDocumentStore::open(RocksDbConfig {
        path: config.data_dir.clone(),
        min_disk_space_percent: config.min_disk_space_percent,
        ..RocksDbConfig::default()
    })?;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "rocksdb"))]
fn open_rocksdb(_config: &StorageConfig) -> Result<Arc<dyn DocumentStore>, ContainerError> {
    Err(ContainerError::BackendDisabled("rocksdb"))
}
