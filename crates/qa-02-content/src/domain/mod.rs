//! # Domain Layer

pub mod config;
pub mod validation;
