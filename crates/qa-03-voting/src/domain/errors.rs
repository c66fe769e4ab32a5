//! Ledger errors.
//!
//! These indicate a stored answer whose counters disagree with its ledger.
//! They never arise from a well-formed document.

use shared_types::ContentError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("{kind} counter would drop below zero")]
    CounterUnderflow { kind: &'static str },

    #[error("{kind} counter overflow")]
    CounterOverflow { kind: &'static str },

    #[error("user {user} holds {count} vote records")]
    DuplicateRecords { user: String, count: usize },

    #[error("counters ({upvotes}/{downvotes}) disagree with ledger ({ledger_up}/{ledger_down})")]
    CounterDrift {
        upvotes: u32,
        downvotes: u32,
        ledger_up: u32,
        ledger_down: u32,
    },
}

impl From<LedgerError> for ContentError {
    fn from(err: LedgerError) -> Self {
        ContentError::StoreUnavailable(format!("inconsistent answer document: {err}"))
    }
}
