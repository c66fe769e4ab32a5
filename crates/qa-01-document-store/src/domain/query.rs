//! # Question Queries
//!
//! Scalar, array and text predicates over question documents, with sort order,
//! limit and a total count taken before the limit is applied.

use shared_types::{Question, UserId};

/// Predicate selecting question documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionFilter {
    /// Every question.
    All,
    /// Questions authored by this user.
    ByUser(UserId),
    /// Questions carrying at least one of these tags.
    AnyTag(Vec<String>),
    /// Whole-word, case-insensitive match on the question text.
    Word(String),
    /// Case-insensitive substring of the question text or any answer text.
    Keyword(String),
    /// Questions with `is_flagged` set.
    Flagged,
    /// Questions holding at least one flagged answer.
    WithFlaggedAnswers,
}

impl QuestionFilter {
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            QuestionFilter::All => true,
            QuestionFilter::ByUser(user) => &question.user_id == user,
            QuestionFilter::AnyTag(tags) => question.tags.iter().any(|t| tags.contains(t)),
            QuestionFilter::Word(word) => contains_word(&question.text, word),
            QuestionFilter::Keyword(keyword) => {
                let needle = keyword.to_lowercase();
                question.text.to_lowercase().contains(&needle)
                    || question
                        .answers
                        .iter()
                        .any(|a| a.text.to_lowercase().contains(&needle))
            }
            QuestionFilter::Flagged => question.is_flagged,
            QuestionFilter::WithFlaggedAnswers => question.answers.iter().any(|a| a.is_flagged),
        }
    }
}

/// True if `word` appears in `text` as a whole word, ignoring case.
///
/// Word boundaries are any non-alphanumeric character.
pub fn contains_word(text: &str, word: &str) -> bool {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return false;
    }
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .any(|token| token == word)
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// `created_at` descending.
    #[default]
    NewestFirst,
    /// `updated_at` descending.
    RecentActivityFirst,
    /// Store order.
    Unordered,
}

/// A filter with sort and optional limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionQuery {
    pub filter: QuestionFilter,
    pub sort: SortOrder,
    pub limit: Option<usize>,
}

impl QuestionQuery {
    pub fn new(filter: QuestionFilter) -> Self {
        Self {
            filter,
            sort: SortOrder::default(),
            limit: None,
        }
    }

    pub fn sorted(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Filter, sort, count and truncate an in-memory candidate set.
    pub fn apply(&self, candidates: impl IntoIterator<Item = Question>) -> QueryResult<Question> {
        let mut items: Vec<Question> = candidates
            .into_iter()
            .filter(|q| self.filter.matches(q))
            .collect();

        match self.sort {
            SortOrder::NewestFirst => {
                items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)))
            }
            SortOrder::RecentActivityFirst => {
                items.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)))
            }
            SortOrder::Unordered => {}
        }

        let total_count = items.len();
        if let Some(limit) = self.limit {
            items.truncate(limit);
        }
        QueryResult { items, total_count }
    }
}

/// Matching items plus the number matched before any limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> QueryResult<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}
