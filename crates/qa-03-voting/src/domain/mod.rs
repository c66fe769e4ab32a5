//! # Domain Layer
//!
//! Pure voting logic. Every function here works on an already-loaded answer;
//! persistence and retries live in the service.

pub mod counters;
pub mod errors;
pub mod invariants;
pub mod ledger;
pub mod policy;
