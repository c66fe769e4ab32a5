//! # QA-03 Answer Voting
//!
//! Maintains the per-user vote ledger embedded in each answer and keeps the
//! display counters consistent with it.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure business logic, no I/O
//!   - `policy::decide`: Vote Transition Policy
//!   - `ledger::apply`: Ledger edit plus counter delta, all-or-nothing
//!   - `counters`: Counter deltas and reconciliation from the ledger
//!   - `invariants`: Checks for the ledger/counter invariants
//!
//! - **Ports Layer** (`ports/`): `VotingApi` driving port
//!
//! - **Service Layer** (`service/`): `VotingService` runs the policy inside a
//!   single optimistic document update
//!
//! ## Vote Flow
//!
//! ```text
//! cast_vote(question, answer, user, kind)
//!     │  parse ids (InvalidIdentifier, no store call)
//!     ↓
//! load question ── locate answer (NotFound)
//!     ↓
//! decide(ledger, user, kind, answer author)
//!     ├── RejectSelfVote  → Unauthorized, nothing written
//!     ├── RejectDuplicate → Conflict, nothing written
//!     ├── Switch(old)     → remove old, -1 old, insert new, +1 new ─┐
//!     └── Add             → insert new, +1 new ─────────────────────┤
//!                                                                    ↓
//!                                    compare-and-swap whole document
//!                                    (lost race: reload and decide again)
//! ```
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: At most one vote record per user id per answer
//! - **INVARIANT-2**: `upvotes` equals the number of upvote records, and
//!   `downvotes` equals the number of downvote records
//! - **INVARIANT-3**: A rejected vote never changes the ledger or counters

pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

pub use domain::counters::{CounterDelta, Tally};
pub use domain::errors::LedgerError;
pub use domain::policy::{decide, VoteOutcome};
pub use ports::inbound::{AppliedVote, VoteReceipt, VotingApi};
pub use service::VotingService;
