//! Ledger/counter invariant checks.

use shared_types::Answer;
use std::collections::HashMap;

use super::counters::Tally;
use super::errors::LedgerError;

/// At most one record per user.
pub fn check_unique_voters(answer: &Answer) -> Result<(), LedgerError> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for vote in &answer.votes {
        *seen.entry(vote.user_id.as_str()).or_default() += 1;
    }
    match seen.into_iter().find(|(_, count)| *count > 1) {
        Some((user, count)) => Err(LedgerError::DuplicateRecords {
            user: user.to_string(),
            count,
        }),
        None => Ok(()),
    }
}

/// Counters equal the ledger's per-kind cardinalities.
pub fn check_counters(answer: &Answer) -> Result<(), LedgerError> {
    let ledger = Tally::from_ledger(&answer.votes);
    if ledger != Tally::of(answer) {
        return Err(LedgerError::CounterDrift {
            upvotes: answer.upvotes,
            downvotes: answer.downvotes,
            ledger_up: ledger.upvotes,
            ledger_down: ledger.downvotes,
        });
    }
    Ok(())
}

pub fn check_answer(answer: &Answer) -> Result<(), LedgerError> {
    check_unique_voters(answer)?;
    check_counters(answer)
}
