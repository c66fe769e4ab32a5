//! # Ports Layer
//!
//! - `inbound` - `ContentApi` driving port

pub mod inbound;

pub use inbound::{ContentApi, NewQuestion};
