//! # Service Configuration
//!
//! Runtime parameters read from `QA_*` environment variables. Every value has
//! a default; `validate()` rejects settings the services cannot run with.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use qa_01_document_store::{DEFAULT_MAX_CAS_RETRIES, DEFAULT_OPERATION_TIMEOUT};
use qa_05_api_gateway::GatewayConfig;

/// Complete service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// JSON-RPC gateway configuration.
    pub gateway: GatewayConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Deadline applied to every content, voting and moderation operation.
    pub operation_timeout: Duration,
    /// Optimistic update attempts before `Conflict`.
    pub max_cas_retries: u32,
    /// Questions returned by the user feed.
    pub feed_limit: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            storage: StorageConfig::default(),
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
            max_cas_retries: DEFAULT_MAX_CAS_RETRIES,
            feed_limit: 50,
        }
    }
}

/// Document store backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    RocksDb,
}

impl std::str::FromStr for StorageBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "rocksdb" => Ok(StorageBackend::RocksDb),
            _ => Err(()),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Data directory for the RocksDB backend.
    pub data_dir: PathBuf,
    /// Minimum free disk space percentage before writes are refused.
    pub min_disk_space_percent: u8,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            data_dir: PathBuf::from("./data"),
            min_disk_space_percent: 5,
        }
    }
}

impl ServiceConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load from any variable lookup, starting from the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("QA_LISTEN_ADDR") {
            config.gateway.listen_addr = parse_var("QA_LISTEN_ADDR", &value)?;
        }
        if let Some(value) = lookup("QA_STORAGE_BACKEND") {
            config.storage.backend = parse_var("QA_STORAGE_BACKEND", &value)?;
        }
        if let Some(value) = lookup("QA_DATA_DIR") {
            config.storage.data_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("QA_OPERATION_TIMEOUT_MS") {
            config.operation_timeout =
                Duration::from_millis(parse_var("QA_OPERATION_TIMEOUT_MS", &value)?);
        }
        if let Some(value) = lookup("QA_MAX_CAS_RETRIES") {
            config.max_cas_retries = parse_var("QA_MAX_CAS_RETRIES", &value)?;
        }
        if let Some(value) = lookup("QA_FEED_LIMIT") {
            config.feed_limit = parse_var("QA_FEED_LIMIT", &value)?;
        }
        if let Some(value) = lookup("QA_MAX_BODY_BYTES") {
            config.gateway.max_body_bytes = parse_var("QA_MAX_BODY_BYTES", &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values the services cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.operation_timeout.is_zero() {
            return Err(ConfigError::Zero("QA_OPERATION_TIMEOUT_MS"));
        }
        if self.max_cas_retries == 0 {
            return Err(ConfigError::Zero("QA_MAX_CAS_RETRIES"));
        }
        if self.feed_limit == 0 {
            return Err(ConfigError::Zero("QA_FEED_LIMIT"));
        }
        self.gateway
            .validate()
            .map_err(|e| ConfigError::Gateway(e.to_string()))
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.gateway.listen_addr
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: value.to_string(),
    })
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable could not be parsed.
    InvalidValue { var: &'static str, value: String },
    /// A variable that must be positive is zero.
    Zero(&'static str),
    /// Gateway limits rejected.
    Gateway(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { var, value } => {
                write!(f, "invalid value {:?} for {}", value, var)
            }
            ConfigError::Zero(var) => write!(f, "{} must be greater than zero", var),
            ConfigError::Gateway(message) => write!(f, "gateway configuration: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}
