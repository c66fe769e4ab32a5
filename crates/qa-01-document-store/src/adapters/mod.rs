//! # Adapters
//!
//! - `memory` - In-memory `DocumentStore` for tests and the `memory` backend
//! - `infra` - Time sources

pub mod infra;
pub mod memory;

pub use infra::{ManualTimeSource, SystemTimeSource};
pub use memory::InMemoryDocumentStore;
