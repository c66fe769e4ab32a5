//! # Adapters
//!
//! Port implementations supplied by the runtime.

pub mod storage;
