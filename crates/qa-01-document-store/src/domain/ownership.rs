//! # Ownership Rules
//!
//! Author resolution inside an already-loaded question. Used by mutation
//! closures so the author check and the write see the same document version.

use shared_types::{ContentError, ContentResult, ObjectId, Question, UserId};

/// Author of the question.
pub fn question_author(question: &Question) -> &UserId {
    &question.user_id
}

/// Author of an embedded answer, or `NotFound` if the answer is absent.
pub fn answer_author<'a>(question: &'a Question, answer_id: &ObjectId) -> ContentResult<&'a UserId> {
    question
        .answer(answer_id)
        .map(|a| &a.user_id)
        .ok_or_else(ContentError::answer_not_found)
}

/// Reject unless `user` authored the question.
pub fn ensure_question_owner(question: &Question, user: &UserId, action: &str) -> ContentResult<()> {
    if question_author(question) != user {
        return Err(ContentError::Unauthorized(format!(
            "only the question owner can {action}"
        )));
    }
    Ok(())
}
