//! # Domain Layer

pub mod flags;
pub mod target;
