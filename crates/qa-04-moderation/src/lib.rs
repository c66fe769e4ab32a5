//! # QA-04 Moderation
//!
//! Flag tracker for questions and answers.
//!
//! A flag appends `{user_id, reason, created_at}` to the target's flag list
//! and sets its `is_flagged` cache. The cache is idempotent; the list is not:
//! the same user may flag the same target any number of times.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): `FlagTarget`, flag application
//! - **Ports Layer** (`ports/`): `ModerationApi` driving port
//! - **Service Layer** (`service/`): `ModerationService`

pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

pub use domain::target::FlagTarget;
pub use ports::inbound::ModerationApi;
pub use service::ModerationService;
