//! # Document Store (qa-01)
//!
//! The persistence layer for question documents. Every other subsystem reads
//! and writes questions through the typed [`QuestionRepository`] defined here.
//!
//! ## Update Model
//!
//! A question document (with its embedded answers, vote ledgers and flags) is
//! the unit of atomicity. Writes use optimistic concurrency:
//!
//! ```text
//! load(id) ──→ (document, version)
//!     │
//!     ↓
//! mutate a copy (locate answer by id inside `answers`)
//!     │
//!     ↓
//! compare_and_swap(id, version, new_document)
//!     ├── Committed        → done
//!     ├── VersionMismatch  → reload and re-run the mutation
//!     └── Missing          → NotFound
//! ```
//!
//! A mutation closure that rejects (returns `Err` or `Mutation::Skip`) never
//! writes, so rejected operations leave the document untouched.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Atomic Replace | A document is replaced in full or not at all |
//! | 2 | Version Monotonicity | Every committed write bumps the version by one |
//! | 3 | Fail-Fast Ids | Malformed ids are rejected before any store call |
//! | 4 | Containment | Deleting a question removes every embedded record |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Documents, queries, codec, ownership rules, errors
//! - `ports/` - Port traits (inbound ownership lookup, outbound store/clock)
//! - `adapters/` - In-memory store and time sources
//! - `repository/` - Typed question repository with the CAS retry loop
//! - `deadline` - Per-operation deadline
//! - `metrics` - Prometheus counters (feature `metrics`)

pub mod adapters;
pub mod deadline;
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod repository;

// Re-export key types for convenience
pub use adapters::{InMemoryDocumentStore, ManualTimeSource, SystemTimeSource};
pub use deadline::{with_deadline, DEFAULT_OPERATION_TIMEOUT};
pub use domain::document::{CasOutcome, Collection, VersionedDocument};
pub use domain::errors::StoreError;
pub use domain::query::{QueryResult, QuestionFilter, QuestionQuery, SortOrder};
pub use ports::inbound::OwnershipLookup;
pub use ports::outbound::{DocumentStore, TimeSource};
pub use repository::{
    Mutation, QuestionRepository, RepositoryConfig, TagRepository, DEFAULT_MAX_CAS_RETRIES,
};
