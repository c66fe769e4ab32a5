//! # Vote Transition Policy
//!
//! Pure decision over the current ledger of one answer. Deterministic: the
//! same inputs always yield the same outcome.

use shared_types::{UserId, Vote, VoteKind};

/// What a vote request does to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The acting user wrote the answer.
    RejectSelfVote,
    /// The acting user already holds a vote of the requested kind.
    RejectDuplicate,
    /// The acting user holds a vote of the opposite kind; replace it.
    Switch { previous: VoteKind },
    /// The acting user has not voted yet.
    Add,
}

impl VoteOutcome {
    /// True if the outcome leads to a write.
    pub fn is_applied(self) -> bool {
        matches!(self, VoteOutcome::Switch { .. } | VoteOutcome::Add)
    }

    /// Metric label.
    pub fn label(self) -> &'static str {
        match self {
            VoteOutcome::RejectSelfVote => "self_vote",
            VoteOutcome::RejectDuplicate => "duplicate",
            VoteOutcome::Switch { .. } => "switched",
            VoteOutcome::Add => "added",
        }
    }
}

/// Decide the transition for `acting` requesting `requested` on an answer
/// written by `author`.
///
/// `current` must already hold at most one record per user.
pub fn decide(current: &[Vote], acting: &UserId, requested: VoteKind, author: &UserId) -> VoteOutcome {
    if acting == author {
        return VoteOutcome::RejectSelfVote;
    }

    match current.iter().find(|vote| &vote.user_id == acting) {
        Some(existing) if existing.vote_type == requested => VoteOutcome::RejectDuplicate,
        Some(existing) => VoteOutcome::Switch {
            previous: existing.vote_type,
        },
        None => VoteOutcome::Add,
    }
}
