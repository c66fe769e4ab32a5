//! Gateway domain: errors, configuration, parameter and response types.

pub mod config;
pub mod error;
pub mod params;
pub mod responses;
