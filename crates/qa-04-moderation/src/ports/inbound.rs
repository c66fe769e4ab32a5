//! # Inbound Ports (Driving Ports)

use async_trait::async_trait;
use qa_01_document_store::QueryResult;
use shared_types::{Answer, ContentResult, Question, UserId};

use crate::domain::target::FlagTarget;

/// Moderation API (Driving Port)
#[async_trait]
pub trait ModerationApi: Send + Sync {
    /// Append a flag to the target and mark it flagged.
    ///
    /// # Errors
    /// - `NotFound`: question or answer absent
    /// - `Timeout`, `StoreUnavailable`: nothing was written
    async fn flag(&self, target: FlagTarget, user: &UserId, reason: &str) -> ContentResult<()>;

    /// Flag a question by its hex id.
    async fn flag_question(
        &self,
        question_id: &str,
        user: &UserId,
        reason: &str,
    ) -> ContentResult<()> {
        self.flag(FlagTarget::question(question_id)?, user, reason)
            .await
    }

    /// Flag an answer by its hex ids.
    async fn flag_answer(
        &self,
        question_id: &str,
        answer_id: &str,
        user: &UserId,
        reason: &str,
    ) -> ContentResult<()> {
        self.flag(FlagTarget::answer(question_id, answer_id)?, user, reason)
            .await
    }

    /// Flagged questions, most recent activity first, with their count.
    async fn flagged_questions(&self) -> ContentResult<QueryResult<Question>>;

    /// Flagged answers across all questions, with their count.
    async fn flagged_answers(&self) -> ContentResult<QueryResult<Answer>>;
}
