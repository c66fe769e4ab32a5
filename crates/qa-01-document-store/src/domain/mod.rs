//! # Domain Layer
//!
//! Pure domain logic for the document store. No I/O.
//!
//! ## Modules
//!
//! - `document` - Collections, versioned documents, CAS outcomes
//! - `query` - Question predicates, sort orders, counted results
//! - `codec` - JSON document encoding
//! - `ownership` - Author resolution inside a loaded question
//! - `errors` - Store error types

pub mod codec;
pub mod document;
pub mod errors;
pub mod ownership;
pub mod query;
