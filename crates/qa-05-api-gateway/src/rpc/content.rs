//! Question, answer, browse and tag methods.

use qa_02_content::{ContentApi, NewQuestion};
use shared_types::{Question, Tag};
use std::sync::Arc;
use tracing::instrument;

use crate::domain::error::ApiResult;
use crate::domain::params::*;
use crate::domain::responses::{Listing, MutationResponse};

/// Content RPC methods handler
pub struct ContentRpc {
    api: Arc<dyn ContentApi>,
}

impl ContentRpc {
    pub fn new(api: Arc<dyn ContentApi>) -> Self {
        Self { api }
    }

    /// content_postQuestion
    #[instrument(skip(self, params), fields(user = %params.user_id))]
    pub async fn post_question(&self, params: PostQuestionParams) -> MutationResponse {
        let request = NewQuestion {
            user_id: params.user_id,
            text: params.text,
            details: params.details,
            tags: params.tags,
        };
        MutationResponse::from_result(
            self.api.post_question(request).await,
            "Question created successfully",
        )
    }

    /// content_getQuestion
    #[instrument(skip(self))]
    pub async fn get_question(&self, params: QuestionParams) -> ApiResult<Question> {
        Ok(self.api.get_question(&params.question_id).await?)
    }

    /// content_getQuestionsByUserId
    pub async fn questions_by_user(&self, params: UserParams) -> ApiResult<Listing<Question>> {
        Ok(self.api.questions_by_user(&params.user_id).await?.into())
    }

    /// content_getQuestionsByTags
    pub async fn questions_by_tags(&self, params: TagsParams) -> ApiResult<Listing<Question>> {
        Ok(self.api.questions_by_tags(&params.tags).await?.into())
    }

    /// content_getQuestionsByWord
    pub async fn questions_by_word(&self, params: WordParams) -> ApiResult<Listing<Question>> {
        Ok(self.api.questions_by_word(&params.word).await?.into())
    }

    /// content_search
    pub async fn search(&self, params: KeywordParams) -> ApiResult<Listing<Question>> {
        Ok(self.api.search(&params.keyword).await?.into())
    }

    /// content_deleteQuestion
    #[instrument(skip(self, params), fields(user = %params.user_id))]
    pub async fn delete_question(&self, params: QuestionActionParams) -> MutationResponse {
        MutationResponse::from_result(
            self.api
                .delete_question(&params.question_id, &params.user_id)
                .await,
            "Question deleted successfully",
        )
    }

    /// content_postAnswer
    #[instrument(skip(self, params), fields(user = %params.user_id))]
    pub async fn post_answer(&self, params: PostAnswerParams) -> MutationResponse {
        MutationResponse::from_result(
            self.api
                .post_answer(&params.question_id, &params.user_id, &params.text)
                .await,
            "Answer posted successfully",
        )
    }

    /// content_deleteAnswer
    #[instrument(skip(self, params), fields(user = %params.user_id))]
    pub async fn delete_answer(&self, params: AnswerActionParams) -> MutationResponse {
        MutationResponse::from_result(
            self.api
                .delete_answer(&params.question_id, &params.answer_id, &params.user_id)
                .await,
            "Answer deleted successfully",
        )
    }

    /// content_markQuestionAnswered
    #[instrument(skip(self, params), fields(user = %params.user_id))]
    pub async fn mark_answered(&self, params: QuestionActionParams) -> MutationResponse {
        MutationResponse::from_result(
            self.api
                .mark_answered(&params.question_id, &params.user_id)
                .await,
            "Question marked as answered",
        )
    }

    /// content_getUserFeed
    pub async fn user_feed(&self, params: UserParams) -> ApiResult<Listing<Question>> {
        Ok(self.api.user_feed(&params.user_id).await?.into())
    }

    /// content_addTag
    #[instrument(skip(self, params), fields(tag = %params.name))]
    pub async fn add_tag(&self, params: AddTagParams) -> MutationResponse {
        MutationResponse::from_result(
            self.api.add_tag(&params.name, &params.description).await,
            "Tag added successfully",
        )
    }

    /// content_removeTag
    #[instrument(skip(self, params), fields(tag = %params.name))]
    pub async fn remove_tag(&self, params: TagNameParams) -> MutationResponse {
        MutationResponse::from_result(
            self.api.remove_tag(&params.name).await,
            "Tag removed successfully",
        )
    }

    /// content_listTags
    pub async fn list_tags(&self) -> ApiResult<Listing<Tag>> {
        Ok(self.api.list_tags().await?.into())
    }
}
