//! JSON-RPC parameter objects.
//!
//! Every method takes a single object with snake_case fields. Presence of
//! ids and user ids is checked here; id format is left to the services,
//! which reject malformed ids before touching the store.

use serde::Deserialize;
use shared_types::UserId;

use crate::domain::error::{ApiError, ApiResult};

/// Field-presence check run after deserialization.
pub trait Validate {
    fn validate(&self) -> ApiResult<()>;
}

fn require(field: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::invalid_params(format!("{field} is required")));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostQuestionParams {
    pub user_id: UserId,
    #[serde(alias = "question")]
    pub text: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Validate for PostQuestionParams {
    fn validate(&self) -> ApiResult<()> {
        require("user_id", self.user_id.as_str())?;
        require("text", &self.text)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionParams {
    pub question_id: String,
}

impl Validate for QuestionParams {
    fn validate(&self) -> ApiResult<()> {
        require("question_id", &self.question_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserParams {
    pub user_id: UserId,
}

impl Validate for UserParams {
    fn validate(&self) -> ApiResult<()> {
        require("user_id", self.user_id.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagsParams {
    pub tags: Vec<String>,
}

impl Validate for TagsParams {
    fn validate(&self) -> ApiResult<()> {
        if self.tags.is_empty() {
            return Err(ApiError::invalid_params("at least one tag is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordParams {
    #[serde(alias = "search_word")]
    pub word: String,
}

impl Validate for WordParams {
    fn validate(&self) -> ApiResult<()> {
        require("word", &self.word)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeywordParams {
    pub keyword: String,
}

impl Validate for KeywordParams {
    fn validate(&self) -> ApiResult<()> {
        require("keyword", &self.keyword)
    }
}

/// A user acting on a question (delete, mark answered).
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionActionParams {
    pub question_id: String,
    pub user_id: UserId,
}

impl Validate for QuestionActionParams {
    fn validate(&self) -> ApiResult<()> {
        require("question_id", &self.question_id)?;
        require("user_id", self.user_id.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostAnswerParams {
    pub question_id: String,
    pub user_id: UserId,
    #[serde(alias = "answer")]
    pub text: String,
}

impl Validate for PostAnswerParams {
    fn validate(&self) -> ApiResult<()> {
        require("question_id", &self.question_id)?;
        require("user_id", self.user_id.as_str())?;
        require("text", &self.text)
    }
}

/// A user acting on an answer (delete, vote, vote lookup).
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerActionParams {
    pub question_id: String,
    pub answer_id: String,
    pub user_id: UserId,
}

impl Validate for AnswerActionParams {
    fn validate(&self) -> ApiResult<()> {
        require("question_id", &self.question_id)?;
        require("answer_id", &self.answer_id)?;
        require("user_id", self.user_id.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlagQuestionParams {
    pub question_id: String,
    pub user_id: UserId,
    #[serde(default)]
    pub reason: String,
}

impl Validate for FlagQuestionParams {
    fn validate(&self) -> ApiResult<()> {
        require("question_id", &self.question_id)?;
        require("user_id", self.user_id.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlagAnswerParams {
    pub question_id: String,
    pub answer_id: String,
    pub user_id: UserId,
    #[serde(default)]
    pub reason: String,
}

impl Validate for FlagAnswerParams {
    fn validate(&self) -> ApiResult<()> {
        require("question_id", &self.question_id)?;
        require("answer_id", &self.answer_id)?;
        require("user_id", self.user_id.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddTagParams {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Validate for AddTagParams {
    fn validate(&self) -> ApiResult<()> {
        require("name", &self.name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagNameParams {
    pub name: String,
}

impl Validate for TagNameParams {
    fn validate(&self) -> ApiResult<()> {
        require("name", &self.name)
    }
}

/// Decode and check the parameter object of a call.
///
/// Accepts the object itself or a one-element array wrapping it.
pub fn parse<T>(params: Option<&serde_json::Value>) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned + Validate,
{
    let param = params
        .and_then(|p| if p.is_array() { p.get(0) } else { Some(p) })
        .ok_or_else(|| ApiError::invalid_params("missing parameter object"))?;

    let parsed: T = serde_json::from_value(param.clone())
        .map_err(|e| ApiError::invalid_params(e.to_string()))?;
    parsed.validate()?;
    Ok(parsed)
}
