//! # QA-02 Content
//!
//! Question and answer intake, browsing and the tag catalogue.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`)
//!   - `validation`: Text length rules and tag sanitation
//!   - `config`: Deadline and feed size
//!
//! - **Ports Layer** (`ports/`): `ContentApi` driving port
//!
//! - **Service Layer** (`service/`): `ContentService` over `QuestionRepository`
//!   and `TagRepository`
//!
//! ## Rules
//!
//! - Question text is trimmed and must hold at least 10 characters
//! - Answer text is trimmed and must hold at least 20 characters
//! - At most 5 tags; tags are lower-cased and trimmed, and empty or
//!   over-long tags are dropped
//! - A user may not answer their own question
//! - Only the question owner may delete it or mark it answered; deleting a
//!   question removes every answer, vote and flag inside it
//! - Only the answer's author may delete an answer

pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

pub use domain::config::ContentConfig;
pub use domain::validation::{
    sanitize_tags, MAX_TAGS, MAX_TAG_LEN, MIN_ANSWER_LEN, MIN_QUESTION_LEN,
};
pub use ports::inbound::{ContentApi, NewQuestion};
pub use service::ContentService;
