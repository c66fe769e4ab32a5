//! # Intake Validation
//!
//! Lengths are counted in characters after trimming.

use shared_types::{ContentError, ContentResult};

pub const MIN_QUESTION_LEN: usize = 10;
pub const MIN_ANSWER_LEN: usize = 20;
pub const MAX_TAGS: usize = 5;
pub const MAX_TAG_LEN: usize = 20;

/// Trimmed question text, or `Validation`.
pub fn question_text(raw: &str) -> ContentResult<String> {
    trimmed_min(raw, MIN_QUESTION_LEN, "question")
}

/// Trimmed answer text, or `Validation`.
pub fn answer_text(raw: &str) -> ContentResult<String> {
    trimmed_min(raw, MIN_ANSWER_LEN, "answer")
}

fn trimmed_min(raw: &str, min: usize, what: &str) -> ContentResult<String> {
    let text = raw.trim();
    if text.chars().count() < min {
        return Err(ContentError::Validation(format!(
            "{what} must be at least {min} characters long"
        )));
    }
    Ok(text.to_string())
}

/// Tags for a new question: at most `MAX_TAGS` supplied, then sanitised.
pub fn question_tags(raw: &[String]) -> ContentResult<Vec<String>> {
    if raw.len() > MAX_TAGS {
        return Err(ContentError::Validation(format!(
            "maximum {MAX_TAGS} tags allowed"
        )));
    }
    Ok(sanitize_tags(raw))
}

/// Lower-case and trim each tag, dropping empty and over-long ones.
pub fn sanitize_tags(raw: &[String]) -> Vec<String> {
    raw.iter().filter_map(|tag| sanitize_tag(tag)).collect()
}

/// A single sanitised tag, or `None` if it is empty or too long.
pub fn sanitize_tag(raw: &str) -> Option<String> {
    let tag = raw.trim().to_lowercase();
    if tag.is_empty() || tag.chars().count() > MAX_TAG_LEN {
        None
    } else {
        Some(tag)
    }
}

/// A non-empty trimmed search term.
pub fn search_term(raw: &str, what: &str) -> ContentResult<String> {
    let term = raw.trim();
    if term.is_empty() {
        return Err(ContentError::Validation(format!("{what} is required")));
    }
    Ok(term.to_string())
}
