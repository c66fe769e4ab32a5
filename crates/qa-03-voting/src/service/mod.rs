//! # Voting Service
//!
//! Implements `VotingApi`. The policy runs inside the repository's optimistic
//! update, so the decision is always taken on the exact document version that
//! gets written. A racer that loses the compare-and-swap re-decides against
//! the winner's state and typically sees `RejectDuplicate`.

use async_trait::async_trait;
use qa_01_document_store::{
    with_deadline, DocumentStore, Mutation, QuestionRepository, DEFAULT_OPERATION_TIMEOUT,
};
use shared_types::{ContentError, ContentResult, ObjectId, UserId, VoteKind};
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::domain::counters::Tally;
use crate::domain::policy::{self, VoteOutcome};
use crate::domain::{invariants, ledger};
use crate::metrics;
use crate::ports::inbound::{AppliedVote, VoteReceipt, VotingApi};


/// Answer voting service.
pub struct VotingService<S: ?Sized> {
    repo: QuestionRepository<S>,
    deadline: Duration,
}

impl<S: DocumentStore + ?Sized> VotingService<S> {
    pub fn new(repo: QuestionRepository<S>) -> Self {
        Self::with_deadline(repo, DEFAULT_OPERATION_TIMEOUT)
    }

    pub fn with_deadline(repo: QuestionRepository<S>, deadline: Duration) -> Self {
        Self { repo, deadline }
    }
}

fn parse_ids(question_id: &str, answer_id: &str) -> ContentResult<(ObjectId, ObjectId)> {
    Ok((
        ObjectId::parse_str(question_id)?,
        ObjectId::parse_str(answer_id)?,
    ))
}

/// Metric label of a finished vote call. A decision that was never
/// persisted is labeled by the error that ended the call.
fn outcome_label(
    result: &ContentResult<VoteReceipt>,
    decided: Option<VoteOutcome>,
) -> &'static str {
    match (result, decided) {
        (Ok(receipt), _) => match receipt.applied {
            AppliedVote::Added => VoteOutcome::Add.label(),
            AppliedVote::Switched { previous } => VoteOutcome::Switch { previous }.label(),
        },
        (Err(_), Some(outcome)) if !outcome.is_applied() => outcome.label(),
        (Err(e), _) => e.kind(),
    }
}

fn rejection(outcome: VoteOutcome, kind: VoteKind) -> ContentError {
    match outcome {
        VoteOutcome::RejectSelfVote => {
            ContentError::Unauthorized("cannot vote on your own answer".to_string())
        }
        _ => ContentError::Conflict(format!("answer already has your {kind}")),
    }
}

#[async_trait]
impl<S: DocumentStore + ?Sized> VotingApi for VotingService<S> {
    #[instrument(skip(self, user), fields(user = %user))]
    async fn cast_vote(
        &self,
        question_id: &str,
        answer_id: &str,
        user: &UserId,
        kind: VoteKind,
    ) -> ContentResult<VoteReceipt> {
        let (question_id, answer_id) = parse_ids(question_id, answer_id)?;
        let mut decided: Option<VoteOutcome> = None;

        let result = with_deadline(
            self.deadline,
            self.repo
                .update_answer(&question_id, &answer_id, |answer, now| {
                    let outcome = policy::decide(&answer.votes, user, kind, &answer.user_id);
                    decided = Some(outcome);

                    let applied = match outcome {
                        VoteOutcome::RejectSelfVote | VoteOutcome::RejectDuplicate => {
                            return Err(rejection(outcome, kind));
                        }
                        VoteOutcome::Switch { previous } => AppliedVote::Switched { previous },
                        VoteOutcome::Add => AppliedVote::Added,
                    };

                    let tally = ledger::apply(answer, user, kind, outcome, now)?;
                    debug_assert!(invariants::check_answer(answer).is_ok());

                    Ok(Mutation::Commit(VoteReceipt {
                        vote_type: kind,
                        applied,
                        tally,
                    }))
                }),
        )
        .await;

        metrics::record_vote(kind.as_str(), outcome_label(&result, decided));

        match &result {
            Ok(receipt) => info!(
                question_id = %question_id,
                answer_id = %answer_id,
                upvotes = receipt.tally.upvotes,
                downvotes = receipt.tally.downvotes,
                "vote recorded"
            ),
            Err(e) => debug!(question_id = %question_id, answer_id = %answer_id, error = %e, "vote rejected"),
        }
        result
    }

    async fn vote_of(
        &self,
        question_id: &str,
        answer_id: &str,
        user: &UserId,
    ) -> ContentResult<Option<VoteKind>> {
        let (question_id, answer_id) = parse_ids(question_id, answer_id)?;
        let question = with_deadline(self.deadline, self.repo.find(&question_id)).await?;
        let answer = question
            .answer(&answer_id)
            .ok_or_else(ContentError::answer_not_found)?;
        Ok(ledger::vote_of(answer, user))
    }

    async fn tally(&self, question_id: &str, answer_id: &str) -> ContentResult<Tally> {
        let (question_id, answer_id) = parse_ids(question_id, answer_id)?;
        let question = with_deadline(self.deadline, self.repo.find(&question_id)).await?;
        question
            .answer(&answer_id)
            .map(Tally::of)
            .ok_or_else(ContentError::answer_not_found)
    }
}
