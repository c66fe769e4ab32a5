//! # Vote Ledger
//!
//! Applies a policy outcome to one answer. The new counters are computed
//! before anything is edited, so either the ledger and both counters all
//! change or nothing does.

use shared_types::{Answer, Timestamp, UserId, Vote, VoteKind};

use super::counters::{CounterDelta, Tally};
use super::errors::LedgerError;
use super::policy::VoteOutcome;

/// Apply `outcome` for `user` requesting `requested`.
///
/// Rejections leave the answer untouched. Returns the counters afterwards.
pub fn apply(
    answer: &mut Answer,
    user: &UserId,
    requested: VoteKind,
    outcome: VoteOutcome,
    now: Timestamp,
) -> Result<Tally, LedgerError> {
    if !outcome.is_applied() {
        return Ok(Tally::of(answer));
    }

    let tally = CounterDelta::for_outcome(outcome, requested).applied_to(Tally::of(answer))?;

    if let VoteOutcome::Switch { .. } = outcome {
        answer.votes.retain(|vote| &vote.user_id != user);
    }
    answer.votes.push(Vote {
        user_id: user.clone(),
        vote_type: requested,
        voted_at: now,
    });
    answer.upvotes = tally.upvotes;
    answer.downvotes = tally.downvotes;

    Ok(tally)
}

/// The user's current vote on the answer, if any.
pub fn vote_of(answer: &Answer, user: &UserId) -> Option<VoteKind> {
    answer
        .votes
        .iter()
        .find(|vote| &vote.user_id == user)
        .map(|vote| vote.vote_type)
}
