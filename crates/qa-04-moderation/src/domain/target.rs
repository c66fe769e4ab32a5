//! Flaggable targets.

use shared_types::{ContentResult, ObjectId};
use std::fmt;

/// Something that can be flagged, with what is needed to locate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagTarget {
    Question {
        question_id: ObjectId,
    },
    Answer {
        question_id: ObjectId,
        answer_id: ObjectId,
    },
}

impl FlagTarget {
    /// Parse a question target.
    pub fn question(question_id: &str) -> ContentResult<Self> {
        Ok(FlagTarget::Question {
            question_id: ObjectId::parse_str(question_id)?,
        })
    }

    /// Parse an answer target.
    pub fn answer(question_id: &str, answer_id: &str) -> ContentResult<Self> {
        Ok(FlagTarget::Answer {
            question_id: ObjectId::parse_str(question_id)?,
            answer_id: ObjectId::parse_str(answer_id)?,
        })
    }

    /// The document that holds the target.
    pub fn question_id(&self) -> &ObjectId {
        match self {
            FlagTarget::Question { question_id } | FlagTarget::Answer { question_id, .. } => {
                question_id
            }
        }
    }

    /// Metric label.
    pub fn kind(&self) -> &'static str {
        match self {
            FlagTarget::Question { .. } => "question",
            FlagTarget::Answer { .. } => "answer",
        }
    }
}

impl fmt::Display for FlagTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagTarget::Question { question_id } => write!(f, "question {question_id}"),
            FlagTarget::Answer {
                question_id,
                answer_id,
            } => write!(f, "answer {answer_id} of question {question_id}"),
        }
    }
}
