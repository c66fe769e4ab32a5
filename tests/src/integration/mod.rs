//! Cross-crate integration tests.
//!
//! Every test builds the full service graph through `ServiceContainer`, the
//! same wiring the runtime binary uses, over the in-memory document store.

pub mod flows;
pub mod gateway;
pub mod manifests;
pub mod races;

use std::sync::Arc;

use qa_01_document_store::{InMemoryDocumentStore, ManualTimeSource};
use qa_02_content::NewQuestion;
use service_runtime::{ServiceConfig, ServiceContainer};
use shared_types::UserId;

/// Container plus handles the tests poke at directly.
pub struct Fixture {
    pub container: ServiceContainer,
    pub store: Arc<InMemoryDocumentStore>,
    pub clock: Arc<ManualTimeSource>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_config(ServiceConfig::default())
    }

    pub fn with_config(config: ServiceConfig) -> Self {
        let store = Arc::new(InMemoryDocumentStore::new());
        let clock = Arc::new(ManualTimeSource::new(1_700_000_000_000));
        let container = ServiceContainer::with_store(config, store.clone(), clock.clone());
        Self {
            container,
            store,
            clock,
        }
    }

    /// Posts a question by `asker`; returns its id.
    pub async fn question(&self, asker: &str, text: &str) -> String {
        self.clock.advance(1);
        self.container
            .content
            .post_question(NewQuestion {
                user_id: UserId::from(asker),
                text: text.to_string(),
                details: String::new(),
                tags: vec!["rust".to_string()],
            })
            .await
            .unwrap()
            .id
            .to_hex()
    }

    /// Posts an answer by `author`; returns its id.
    pub async fn answer(&self, question_id: &str, author: &str) -> String {
        self.clock.advance(1);
        self.container
            .content
            .post_answer(
                question_id,
                &UserId::from(author),
                &format!("An answer from {author} that is long enough."),
            )
            .await
            .unwrap()
            .id
            .to_hex()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
