//! Answer voting methods.

use qa_03_voting::VotingApi;
use shared_types::VoteKind;
use std::sync::Arc;
use tracing::instrument;

use crate::domain::error::ApiResult;
use crate::domain::params::AnswerActionParams;
use crate::domain::responses::{MutationResponse, UserVote};

/// Voting RPC methods handler
pub struct VotingRpc {
    api: Arc<dyn VotingApi>,
}

impl VotingRpc {
    pub fn new(api: Arc<dyn VotingApi>) -> Self {
        Self { api }
    }

    /// content_upvoteAnswer / content_downvoteAnswer
    #[instrument(skip(self, params), fields(user = %params.user_id, kind = kind.as_str()))]
    pub async fn vote(&self, params: AnswerActionParams, kind: VoteKind) -> MutationResponse {
        let message = match kind {
            VoteKind::Upvote => "Answer upvoted successfully",
            VoteKind::Downvote => "Answer downvoted successfully",
        };
        MutationResponse::from_result(
            self.api
                .cast_vote(&params.question_id, &params.answer_id, &params.user_id, kind)
                .await,
            message,
        )
    }

    /// content_getUserVote
    pub async fn user_vote(&self, params: AnswerActionParams) -> ApiResult<UserVote> {
        let vote = self
            .api
            .vote_of(&params.question_id, &params.answer_id, &params.user_id)
            .await?;
        Ok(vote.into())
    }
}
