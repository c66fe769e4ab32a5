//! Flagging and moderation listing methods.

use qa_04_moderation::ModerationApi;
use shared_types::{Answer, Question};
use std::sync::Arc;
use tracing::instrument;

use crate::domain::error::ApiResult;
use crate::domain::params::{FlagAnswerParams, FlagQuestionParams};
use crate::domain::responses::{Listing, MutationResponse};

/// Moderation RPC methods handler
pub struct ModerationRpc {
    api: Arc<dyn ModerationApi>,
}

impl ModerationRpc {
    pub fn new(api: Arc<dyn ModerationApi>) -> Self {
        Self { api }
    }

    /// content_flagQuestion
    #[instrument(skip(self, params), fields(user = %params.user_id))]
    pub async fn flag_question(&self, params: FlagQuestionParams) -> MutationResponse {
        MutationResponse::from_result(
            self.api
                .flag_question(&params.question_id, &params.user_id, &params.reason)
                .await,
            "Question flagged successfully",
        )
    }

    /// content_flagAnswer
    #[instrument(skip(self, params), fields(user = %params.user_id))]
    pub async fn flag_answer(&self, params: FlagAnswerParams) -> MutationResponse {
        MutationResponse::from_result(
            self.api
                .flag_answer(
                    &params.question_id,
                    &params.answer_id,
                    &params.user_id,
                    &params.reason,
                )
                .await,
            "Answer flagged successfully",
        )
    }

    /// content_getFlaggedQuestions
    pub async fn flagged_questions(&self) -> ApiResult<Listing<Question>> {
        Ok(self.api.flagged_questions().await?.into())
    }

    /// content_getFlaggedAnswers
    pub async fn flagged_answers(&self) -> ApiResult<Listing<Answer>> {
        Ok(self.api.flagged_answers().await?.into())
    }
}
