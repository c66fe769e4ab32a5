//! # Question Repository
//!
//! Typed access to question documents on top of any `DocumentStore`.
//!
//! `update` is the element-match write used by every mutating operation: it
//! loads the document, hands a copy to the caller's mutation, and commits with
//! a compare-and-swap on the version it read. A lost race re-runs the
//! mutation against the fresh document, so the decision is always made on the
//! state that gets written.

mod tags;


pub use tags::TagRepository;

use async_trait::async_trait;
use shared_types::{Answer, ContentError, ContentResult, ObjectId, Question, Timestamp, UserId};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::domain::codec;
use crate::domain::document::{CasOutcome, Collection};
use crate::domain::errors::StoreError;
use crate::domain::ownership;
use crate::domain::query::{QueryResult, QuestionQuery};
use crate::metrics;
use crate::ports::inbound::OwnershipLookup;
use crate::ports::outbound::{DocumentStore, TimeSource};

/// Default number of optimistic attempts per update.
pub const DEFAULT_MAX_CAS_RETRIES: u32 = 16;

/// Repository tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Attempts before an update gives up with `Conflict`.
    pub max_cas_retries: u32,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            max_cas_retries: DEFAULT_MAX_CAS_RETRIES,
        }
    }
}

/// What a mutation closure decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation<T> {
    /// Write the mutated document, then return the value.
    Commit(T),
    /// Return the value without writing.
    Skip(T),
}

/// Question documents keyed by their hex id.
pub struct QuestionRepository<S: ?Sized> {
    store: Arc<S>,
    clock: Arc<dyn TimeSource>,
    config: RepositoryConfig,
}

impl<S: ?Sized> Clone for QuestionRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            config: self.config,
        }
    }
}

impl<S: DocumentStore + ?Sized> QuestionRepository<S> {
    pub fn new(store: Arc<S>, clock: Arc<dyn TimeSource>) -> Self {
        Self::with_config(store, clock, RepositoryConfig::default())
    }

    pub fn with_config(store: Arc<S>, clock: Arc<dyn TimeSource>, config: RepositoryConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    /// Current time from the repository clock.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Persist a new question.
    #[instrument(skip(self, question), fields(question_id = %question.id))]
    pub async fn insert(&self, question: &Question) -> ContentResult<()> {
        let body = codec::encode(question)?;
        match self
            .store
            .insert(Collection::Questions, &question.id.to_hex(), body)
            .await
        {
            Ok(_) => Ok(()),
            Err(StoreError::DuplicateKey { key }) => {
                Err(ContentError::Conflict(format!("question {key} already exists")))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load a question, `NotFound` if absent.
    pub async fn find(&self, id: &ObjectId) -> ContentResult<Question> {
        self.load(id)
            .await?
            .map(|(_, question)| question)
            .ok_or_else(ContentError::question_not_found)
    }

    /// Remove a question and everything embedded in it.
    #[instrument(skip(self), fields(question_id = %id))]
    pub async fn delete(&self, id: &ObjectId) -> ContentResult<()> {
        if self.store.delete(Collection::Questions, &id.to_hex()).await? {
            Ok(())
        } else {
            Err(ContentError::question_not_found())
        }
    }

    /// Read-modify-write a question under optimistic concurrency.
    ///
    /// `mutate` may run more than once; it must derive its decision only from
    /// the document it is given. On `Commit` the question's `updated_at` is
    /// refreshed and the document is written only if nobody else wrote it in
    /// between. An `Err` or `Skip` from `mutate` writes nothing.
    pub async fn update<T, F>(&self, id: &ObjectId, mut mutate: F) -> ContentResult<T>
    where
        T: Send,
        F: FnMut(&mut Question, Timestamp) -> ContentResult<Mutation<T>> + Send,
    {
        let key = id.to_hex();

        for attempt in 0..self.config.max_cas_retries {
            let (version, mut question) = self
                .load(id)
                .await?
                .ok_or_else(ContentError::question_not_found)?;
            let now = self.clock.now();

            let value = match mutate(&mut question, now)? {
                Mutation::Skip(value) => return Ok(value),
                Mutation::Commit(value) => value,
            };
            question.updated_at = question.updated_at.max(now);

            let body = codec::encode(&question)?;
            match self
                .store
                .compare_and_swap(Collection::Questions, &key, version, body)
                .await?
            {
                CasOutcome::Committed { version } => {
                    debug!(question_id = %key, version, attempt, "question updated");
                    return Ok(value);
                }
                CasOutcome::Missing => return Err(ContentError::question_not_found()),
                CasOutcome::VersionMismatch { current } => {
                    metrics::record_cas_retry();
                    debug!(
                        question_id = %key,
                        expected = version,
                        current,
                        attempt,
                        "version mismatch, retrying"
                    );
                }
            }
        }

        metrics::record_cas_exhausted();
        warn!(question_id = %key, retries = self.config.max_cas_retries, "update abandoned");
        Err(ContentError::Conflict(
            "question is being modified concurrently, try again".to_string(),
        ))
    }

    /// `update` targeting one embedded answer by id.
    ///
    /// `NotFound` if the answer is absent from the current document. On
    /// `Commit` the answer's `updated_at` is refreshed too.
    pub async fn update_answer<T, F>(
        &self,
        question_id: &ObjectId,
        answer_id: &ObjectId,
        mut mutate: F,
    ) -> ContentResult<T>
    where
        T: Send,
        F: FnMut(&mut Answer, Timestamp) -> ContentResult<Mutation<T>> + Send,
    {
        self.update(question_id, |question, now| {
            let answer = question
                .answer_mut(answer_id)
                .ok_or_else(ContentError::answer_not_found)?;
            let outcome = mutate(answer, now)?;
            if matches!(outcome, Mutation::Commit(_)) {
                answer.updated_at = answer.updated_at.max(now);
            }
            Ok(outcome)
        })
        .await
    }

    /// Evaluate a query over every question.
    pub async fn query(&self, query: &QuestionQuery) -> ContentResult<QueryResult<Question>> {
        let questions = self.scan().await?;
        Ok(query.apply(questions))
    }

    /// Every stored question, in store order.
    pub async fn scan(&self) -> ContentResult<Vec<Question>> {
        self.store
            .scan(Collection::Questions)
            .await?
            .iter()
            .map(|doc| codec::decode::<Question>(&doc.body).map_err(ContentError::from))
            .collect()
    }

    async fn load(&self, id: &ObjectId) -> ContentResult<Option<(u64, Question)>> {
        match self.store.get(Collection::Questions, &id.to_hex()).await? {
            Some(doc) => Ok(Some((doc.version, codec::decode(&doc.body)?))),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl<S: DocumentStore + ?Sized> OwnershipLookup for QuestionRepository<S> {
    async fn question_author(&self, question_id: &ObjectId) -> ContentResult<UserId> {
        let question = self.find(question_id).await?;
        Ok(ownership::question_author(&question).clone())
    }

    async fn answer_author(
        &self,
        question_id: &ObjectId,
        answer_id: &ObjectId,
    ) -> ContentResult<UserId> {
        let question = self.find(question_id).await?;
        ownership::answer_author(&question, answer_id).cloned()
    }
}
