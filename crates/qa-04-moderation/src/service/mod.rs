//! # Moderation Service
//!
//! Flags bypass the vote policy and go straight to a single document update.

use async_trait::async_trait;
use qa_01_document_store::{
    with_deadline, DocumentStore, Mutation, QueryResult, QuestionFilter, QuestionQuery,
    QuestionRepository, SortOrder, DEFAULT_OPERATION_TIMEOUT,
};
use shared_types::{Answer, ContentResult, Question, UserId};
use std::time::Duration;
use tracing::{info, instrument};

use crate::domain::flags;
use crate::domain::target::FlagTarget;
use crate::metrics;
use crate::ports::inbound::ModerationApi;


pub struct ModerationService<S: ?Sized> {
    repo: QuestionRepository<S>,
    deadline: Duration,
}

impl<S: DocumentStore + ?Sized> ModerationService<S> {
    pub fn new(repo: QuestionRepository<S>) -> Self {
        Self::with_deadline(repo, DEFAULT_OPERATION_TIMEOUT)
    }

    pub fn with_deadline(repo: QuestionRepository<S>, deadline: Duration) -> Self {
        Self { repo, deadline }
    }
}

#[async_trait]
impl<S: DocumentStore + ?Sized> ModerationApi for ModerationService<S> {
    #[instrument(skip(self, target, user, reason), fields(target = %target, user = %user))]
    async fn flag(&self, target: FlagTarget, user: &UserId, reason: &str) -> ContentResult<()> {
        let update = async {
            match target {
                FlagTarget::Question { question_id } => {
                    self.repo
                        .update(&question_id, |question, now| {
                            flags::flag_question(question, user, reason, now);
                            Ok(Mutation::Commit(()))
                        })
                        .await
                }
                FlagTarget::Answer {
                    question_id,
                    answer_id,
                } => {
                    self.repo
                        .update_answer(&question_id, &answer_id, |answer, now| {
                            flags::flag_answer(answer, user, reason, now);
                            Ok(Mutation::Commit(()))
                        })
                        .await
                }
            }
        };
        with_deadline(self.deadline, update).await?;

        metrics::record_flag(target.kind());
        info!("flag recorded");
        Ok(())
    }

    async fn flagged_questions(&self) -> ContentResult<QueryResult<Question>> {
        let query =
            QuestionQuery::new(QuestionFilter::Flagged).sorted(SortOrder::RecentActivityFirst);
        with_deadline(self.deadline, self.repo.query(&query)).await
    }

    async fn flagged_answers(&self) -> ContentResult<QueryResult<Answer>> {
        let query = QuestionQuery::new(QuestionFilter::WithFlaggedAnswers)
            .sorted(SortOrder::RecentActivityFirst);
        let questions = with_deadline(self.deadline, self.repo.query(&query)).await?;

        let items: Vec<Answer> = questions
            .items
            .into_iter()
            .flat_map(|question| question.answers)
            .filter(|answer| answer.is_flagged)
            .collect();
        Ok(QueryResult {
            total_count: items.len(),
            items,
        })
    }
}
