//! # Counter Reconciler
//!
//! `upvotes`/`downvotes` are display caches. They move only through a
//! `CounterDelta` produced together with a ledger edit, and can always be
//! recomputed from the ledger.

use serde::{Deserialize, Serialize};
use shared_types::{Answer, Vote, VoteKind};

use super::errors::LedgerError;
use super::policy::VoteOutcome;

/// Display counters of one answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub upvotes: u32,
    pub downvotes: u32,
}

impl Tally {
    /// Counters as currently stored on the answer.
    pub fn of(answer: &Answer) -> Self {
        Self {
            upvotes: answer.upvotes,
            downvotes: answer.downvotes,
        }
    }

    /// Counters derived from the ledger alone.
    pub fn from_ledger(votes: &[Vote]) -> Self {
        votes.iter().fold(Self::default(), |mut tally, vote| {
            match vote.vote_type {
                VoteKind::Upvote => tally.upvotes += 1,
                VoteKind::Downvote => tally.downvotes += 1,
            }
            tally
        })
    }
}

/// Signed change to both counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterDelta {
    pub upvotes: i32,
    pub downvotes: i32,
}

impl CounterDelta {
    fn unit(kind: VoteKind, amount: i32) -> Self {
        match kind {
            VoteKind::Upvote => Self {
                upvotes: amount,
                downvotes: 0,
            },
            VoteKind::Downvote => Self {
                upvotes: 0,
                downvotes: amount,
            },
        }
    }

    /// Delta for an outcome of `requested`. Rejections move nothing.
    pub fn for_outcome(outcome: VoteOutcome, requested: VoteKind) -> Self {
        match outcome {
            VoteOutcome::Add => Self::unit(requested, 1),
            VoteOutcome::Switch { previous } => {
                let removed = Self::unit(previous, -1);
                let added = Self::unit(requested, 1);
                Self {
                    upvotes: removed.upvotes + added.upvotes,
                    downvotes: removed.downvotes + added.downvotes,
                }
            }
            VoteOutcome::RejectSelfVote | VoteOutcome::RejectDuplicate => Self::default(),
        }
    }

    pub fn is_zero(self) -> bool {
        self.upvotes == 0 && self.downvotes == 0
    }

    /// Counters after the delta, without touching the answer.
    pub fn applied_to(self, tally: Tally) -> Result<Tally, LedgerError> {
        Ok(Tally {
            upvotes: shift(tally.upvotes, self.upvotes, "upvotes")?,
            downvotes: shift(tally.downvotes, self.downvotes, "downvotes")?,
        })
    }
}

fn shift(value: u32, delta: i32, kind: &'static str) -> Result<u32, LedgerError> {
    if delta >= 0 {
        value
            .checked_add(delta.unsigned_abs())
            .ok_or(LedgerError::CounterOverflow { kind })
    } else {
        value
            .checked_sub(delta.unsigned_abs())
            .ok_or(LedgerError::CounterUnderflow { kind })
    }
}
