//! # Shared Types Crate
//!
//! This crate contains the document entities, identifiers and the error
//! taxonomy used by every content subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: The persisted `Question`/`Answer` shape is
//!   defined here and nowhere else.
//! - **Containment**: Answers, votes and flags live inside their question
//!   document. Deleting the question deletes everything it contains.
//! - **Opaque Identity**: Document ids are 24-hex-character `ObjectId`s; user
//!   ids are opaque strings owned by an external identity service.

pub mod entities;
pub mod errors;
pub mod ids;

pub use entities::*;
pub use errors::*;
pub use ids::*;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Current wall-clock time in milliseconds.
pub fn now_millis() -> Timestamp {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
