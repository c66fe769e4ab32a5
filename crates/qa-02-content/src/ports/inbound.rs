//! # Inbound Ports (Driving Ports)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared_types::{Answer, ContentResult, Question, Tag, UserId};

/// Intake payload for a new question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub user_id: UserId,
    pub text: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Question/answer content API (Driving Port)
///
/// Ids are 24-hex strings, parsed before any store call. List results are
/// newest first.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Create a question with no answers or flags.
    async fn post_question(&self, request: NewQuestion) -> ContentResult<Question>;

    async fn get_question(&self, question_id: &str) -> ContentResult<Question>;

    async fn questions_by_user(&self, user: &UserId) -> ContentResult<Vec<Question>>;

    /// Questions carrying any of the given tags (sanitised first).
    async fn questions_by_tags(&self, tags: &[String]) -> ContentResult<Vec<Question>>;

    /// Questions whose text contains the whole word, ignoring case.
    async fn questions_by_word(&self, word: &str) -> ContentResult<Vec<Question>>;

    /// Questions whose text or any answer text contains the keyword.
    async fn search(&self, keyword: &str) -> ContentResult<Vec<Question>>;

    /// Delete a question and everything embedded in it. Owner only.
    async fn delete_question(&self, question_id: &str, user: &UserId) -> ContentResult<()>;

    /// Append an answer. The question's author may not answer.
    async fn post_answer(
        &self,
        question_id: &str,
        user: &UserId,
        text: &str,
    ) -> ContentResult<Answer>;

    /// Remove an answer with its votes and flags. Answer author only.
    async fn delete_answer(
        &self,
        question_id: &str,
        answer_id: &str,
        user: &UserId,
    ) -> ContentResult<()>;

    /// Set `is_answered`. Owner only.
    async fn mark_answered(&self, question_id: &str, user: &UserId) -> ContentResult<()>;

    /// Most recent questions across all users.
    async fn user_feed(&self, user: &UserId) -> ContentResult<Vec<Question>>;

    async fn add_tag(&self, name: &str, description: &str) -> ContentResult<Tag>;

    async fn remove_tag(&self, name: &str) -> ContentResult<()>;

    async fn list_tags(&self) -> ContentResult<Vec<Tag>>;
}
