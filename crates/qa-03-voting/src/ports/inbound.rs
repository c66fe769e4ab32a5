//! # Inbound Ports (Driving Ports)
//!
//! Identifiers arrive as strings and are parsed by the service, so malformed
//! ids fail with `InvalidIdentifier` before any store round-trip.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared_types::{ContentResult, UserId, VoteKind};

use crate::domain::counters::Tally;

/// The change a successful vote made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum AppliedVote {
    Added,
    Switched { previous: VoteKind },
}

/// Result of an accepted vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub vote_type: VoteKind,
    pub applied: AppliedVote,
    pub tally: Tally,
}

/// Answer voting API (Driving Port)
#[async_trait]
pub trait VotingApi: Send + Sync {
    /// Record an upvote. See `cast_vote`.
    async fn upvote(
        &self,
        question_id: &str,
        answer_id: &str,
        user: &UserId,
    ) -> ContentResult<VoteReceipt> {
        self.cast_vote(question_id, answer_id, user, VoteKind::Upvote)
            .await
    }

    /// Record a downvote. See `cast_vote`.
    async fn downvote(
        &self,
        question_id: &str,
        answer_id: &str,
        user: &UserId,
    ) -> ContentResult<VoteReceipt> {
        self.cast_vote(question_id, answer_id, user, VoteKind::Downvote)
            .await
    }

    /// Vote on an answer.
    ///
    /// # Errors
    /// - `InvalidIdentifier`: malformed id
    /// - `NotFound`: question or answer absent
    /// - `Unauthorized`: the user wrote the answer
    /// - `Conflict`: the user already holds a vote of this kind
    /// - `Timeout`, `StoreUnavailable`: nothing was written
    async fn cast_vote(
        &self,
        question_id: &str,
        answer_id: &str,
        user: &UserId,
        kind: VoteKind,
    ) -> ContentResult<VoteReceipt>;

    /// The user's current vote on an answer, if any.
    async fn vote_of(
        &self,
        question_id: &str,
        answer_id: &str,
        user: &UserId,
    ) -> ContentResult<Option<VoteKind>>;

    /// Display counters of an answer.
    async fn tally(&self, question_id: &str, answer_id: &str) -> ContentResult<Tally>;
}
