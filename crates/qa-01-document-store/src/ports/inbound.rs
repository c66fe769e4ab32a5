//! # Inbound Ports (Driving Ports)
//!
//! Author resolution used by voting (self-vote check) and by delete/answer
//! authorization in the content subsystem.

use async_trait::async_trait;
use shared_types::{ContentResult, ObjectId, UserId};

/// Resolves who wrote a question or an answer.
#[async_trait]
pub trait OwnershipLookup: Send + Sync {
    /// Author of a question. `NotFound` if absent.
    async fn question_author(&self, question_id: &ObjectId) -> ContentResult<UserId>;

    /// Author of an answer inside a question. `NotFound` if either is absent.
    async fn answer_author(
        &self,
        question_id: &ObjectId,
        answer_id: &ObjectId,
    ) -> ContentResult<UserId>;
}
