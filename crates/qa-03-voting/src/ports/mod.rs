//! # Ports Layer
//!
//! - `inbound` - `VotingApi` driving port
//!
//! The driven side is the document store's `DocumentStore` port, consumed
//! through `QuestionRepository`.

pub mod inbound;

pub use inbound::{AppliedVote, VoteReceipt, VotingApi};
