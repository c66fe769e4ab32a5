//! # Core Domain Entities
//!
//! The persisted document shape. One `Question` document contains its
//! `Answer`s; each answer contains its vote ledger and flags.
//!
//! ```text
//! Question ─┬─ flags: [Flag]
//!           └─ answers: [Answer ─┬─ flags: [Flag]
//!                                └─ votes: [Vote]   (unique by user_id)]
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{ObjectId, UserId};
use crate::Timestamp;

/// Direction of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Upvote,
    Downvote,
}

impl VoteKind {
    /// The other direction.
    pub fn opposite(self) -> Self {
        match self {
            VoteKind::Upvote => VoteKind::Downvote,
            VoteKind::Downvote => VoteKind::Upvote,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VoteKind::Upvote => "upvote",
            VoteKind::Downvote => "downvote",
        }
    }
}

impl fmt::Display for VoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user's vote on one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub user_id: UserId,
    pub vote_type: VoteKind,
    pub voted_at: Timestamp,
}

/// A moderation flag. A user may flag the same target repeatedly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    pub user_id: UserId,
    pub reason: String,
    pub created_at: Timestamp,
}

/// An answer embedded in its question document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: ObjectId,
    pub question_id: ObjectId,
    pub user_id: UserId,
    pub text: String,
    /// Display counter; always equals the number of upvote records in `votes`.
    pub upvotes: u32,
    /// Display counter; always equals the number of downvote records in `votes`.
    pub downvotes: u32,
    pub is_flagged: bool,
    #[serde(default)]
    pub flags: Vec<Flag>,
    /// Vote ledger. At most one record per user id.
    #[serde(default)]
    pub votes: Vec<Vote>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Answer {
    /// Fresh answer with empty ledger and flags.
    pub fn new(question_id: ObjectId, user_id: UserId, text: String, now: Timestamp) -> Self {
        Self {
            id: ObjectId::new(),
            question_id,
            user_id,
            text,
            upvotes: 0,
            downvotes: 0,
            is_flagged: false,
            flags: Vec::new(),
            votes: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A question document, the unit of atomic update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: ObjectId,
    pub user_id: UserId,
    pub text: String,
    pub details: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub answers: Vec<Answer>,
    pub is_answered: bool,
    pub is_flagged: bool,
    #[serde(default)]
    pub flags: Vec<Flag>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Question {
    /// Fresh question with no answers or flags.
    pub fn new(
        user_id: UserId,
        text: String,
        details: String,
        tags: Vec<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id: ObjectId::new(),
            user_id,
            text,
            details,
            tags,
            answers: Vec::new(),
            is_answered: false,
            is_flagged: false,
            flags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Find an embedded answer by id.
    pub fn answer(&self, answer_id: &ObjectId) -> Option<&Answer> {
        self.answers.iter().find(|a| &a.id == answer_id)
    }

    /// Find an embedded answer by id, mutably.
    pub fn answer_mut(&mut self, answer_id: &ObjectId) -> Option<&mut Answer> {
        self.answers.iter_mut().find(|a| &a.id == answer_id)
    }

    /// Remove an embedded answer, returning it if present.
    pub fn remove_answer(&mut self, answer_id: &ObjectId) -> Option<Answer> {
        let pos = self.answers.iter().position(|a| &a.id == answer_id)?;
        Some(self.answers.remove(pos))
    }
}

/// Tag catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_question() -> Question {
        Question::new(
            UserId::from("asker"),
            "How do lifetimes work?".to_string(),
            String::new(),
            vec!["rust".to_string()],
            1_000,
        )
    }

    #[test]
    fn test_vote_kind_wire_names() {
        assert_eq!(serde_json::to_string(&VoteKind::Upvote).unwrap(), "\"upvote\"");
        assert_eq!(
            serde_json::from_str::<VoteKind>("\"downvote\"").unwrap(),
            VoteKind::Downvote
        );
        assert_eq!(VoteKind::Upvote.opposite(), VoteKind::Downvote);
    }

    #[test]
    fn test_answer_lookup_and_removal() {
        let mut q = make_question();
        let a1 = Answer::new(q.id, UserId::from("u1"), "first answer text here...".into(), 2_000);
        let a2 = Answer::new(q.id, UserId::from("u2"), "second answer text here..".into(), 2_001);
        let (id1, id2) = (a1.id, a2.id);
        q.answers.push(a1);
        q.answers.push(a2);

        assert_eq!(q.answer(&id2).map(|a| a.user_id.as_str()), Some("u2"));
        assert!(q.remove_answer(&id1).is_some());
        assert!(q.answer(&id1).is_none());
        assert_eq!(q.answers.len(), 1);
        assert!(q.remove_answer(&id1).is_none());
    }

    #[test]
    fn test_persisted_answer_shape() {
        let a = Answer::new(ObjectId::new(), UserId::from("u1"), "x".repeat(20), 5);
        let value = serde_json::to_value(&a).unwrap();
        for field in [
            "id", "question_id", "user_id", "text", "upvotes", "downvotes", "is_flagged",
            "flags", "votes", "created_at", "updated_at",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
    }
}
