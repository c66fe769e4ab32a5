//! # Ports Layer
//!
//! - `inbound` - Ownership lookup offered to the other subsystems
//! - `outbound` - Document store and clock required from the host

pub mod inbound;
pub mod outbound;
