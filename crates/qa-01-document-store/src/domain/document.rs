//! # Documents
//!
//! Raw, versioned documents as seen by the storage port.

use std::fmt;

/// Logical collection a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Questions,
    Tags,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Collection::Questions => "questions",
            Collection::Tags => "tags",
        }
    }

    /// Key prefix used by flat key-value backends.
    pub fn key_prefix(self) -> &'static [u8] {
        match self {
            Collection::Questions => b"q:",
            Collection::Tags => b"t:",
        }
    }

    /// Flat storage key: prefix followed by the document key.
    pub fn storage_key(self, key: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.key_prefix().len() + key.len());
        out.extend_from_slice(self.key_prefix());
        out.extend_from_slice(key.as_bytes());
        out
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stored document with its version.
///
/// Versions start at 1 on insert and increase by one per committed write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedDocument {
    pub key: String,
    pub version: u64,
    pub body: Vec<u8>,
}

/// Result of a conditional replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasOutcome {
    /// Write applied; the document now has this version.
    Committed { version: u64 },
    /// Document changed since it was read; nothing written.
    VersionMismatch { current: u64 },
    /// Document no longer exists; nothing written.
    Missing,
}
