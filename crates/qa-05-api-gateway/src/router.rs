//! Method dispatch for JSON-RPC calls.

use crate::domain::error::{ApiError, ApiResult};
use crate::domain::params::parse;
use crate::rpc::RpcHandlers;
use serde::Serialize;
use shared_types::VoteKind;
use std::sync::Arc;

/// Every method the gateway serves.
pub const METHODS: &[&str] = &[
    "content_postQuestion",
    "content_getQuestion",
    "content_getQuestionsByUserId",
    "content_getQuestionsByTags",
    "content_getQuestionsByWord",
    "content_search",
    "content_deleteQuestion",
    "content_postAnswer",
    "content_deleteAnswer",
    "content_markQuestionAnswered",
    "content_getUserFeed",
    "content_upvoteAnswer",
    "content_downvoteAnswer",
    "content_getUserVote",
    "content_flagQuestion",
    "content_flagAnswer",
    "content_getFlaggedQuestions",
    "content_getFlaggedAnswers",
    "content_addTag",
    "content_removeTag",
    "content_listTags",
];

pub fn is_method_supported(method: &str) -> bool {
    METHODS.contains(&method)
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub rpc_handlers: Arc<RpcHandlers>,
    pub max_batch_size: usize,
}

fn to_json<T: Serialize>(value: T) -> ApiResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))
}

/// Route a JSON-RPC method to its handler.
///
/// Mutating methods always produce a result envelope; only malformed
/// parameters surface as JSON-RPC errors for them.
pub async fn route_method(
    state: &AppState,
    method: &str,
    params: Option<&serde_json::Value>,
) -> ApiResult<serde_json::Value> {
    let rpc = &state.rpc_handlers;

    match method {
        // Questions and answers
        "content_postQuestion" => to_json(rpc.content.post_question(parse(params)?).await),
        "content_getQuestion" => to_json(rpc.content.get_question(parse(params)?).await?),
        "content_deleteQuestion" => to_json(rpc.content.delete_question(parse(params)?).await),
        "content_postAnswer" => to_json(rpc.content.post_answer(parse(params)?).await),
        "content_deleteAnswer" => to_json(rpc.content.delete_answer(parse(params)?).await),
        "content_markQuestionAnswered" => {
            to_json(rpc.content.mark_answered(parse(params)?).await)
        }

        // Browse and search
        "content_getQuestionsByUserId" => {
            to_json(rpc.content.questions_by_user(parse(params)?).await?)
        }
        "content_getQuestionsByTags" => {
            to_json(rpc.content.questions_by_tags(parse(params)?).await?)
        }
        "content_getQuestionsByWord" => {
            to_json(rpc.content.questions_by_word(parse(params)?).await?)
        }
        "content_search" => to_json(rpc.content.search(parse(params)?).await?),
        "content_getUserFeed" => to_json(rpc.content.user_feed(parse(params)?).await?),

        // Voting
        "content_upvoteAnswer" => {
            to_json(rpc.voting.vote(parse(params)?, VoteKind::Upvote).await)
        }
        "content_downvoteAnswer" => {
            to_json(rpc.voting.vote(parse(params)?, VoteKind::Downvote).await)
        }
        "content_getUserVote" => to_json(rpc.voting.user_vote(parse(params)?).await?),

        // Moderation
        "content_flagQuestion" => to_json(rpc.moderation.flag_question(parse(params)?).await),
        "content_flagAnswer" => to_json(rpc.moderation.flag_answer(parse(params)?).await),
        "content_getFlaggedQuestions" => to_json(rpc.moderation.flagged_questions().await?),
        "content_getFlaggedAnswers" => to_json(rpc.moderation.flagged_answers().await?),

        // Tag catalogue
        "content_addTag" => to_json(rpc.content.add_tag(parse(params)?).await),
        "content_removeTag" => to_json(rpc.content.remove_tag(parse(params)?).await),
        "content_listTags" => to_json(rpc.content.list_tags().await?),

        _ => Err(ApiError::method_not_found(method)),
    }
}

/// Metric outcome label of a routed call.
pub fn outcome_label(result: &ApiResult<serde_json::Value>) -> String {
    match result {
        Ok(value) => match value.get("success") {
            Some(serde_json::Value::Bool(false)) => value
                .pointer("/error/data/kind")
                .and_then(|kind| kind.as_str())
                .unwrap_or("rejected")
                .to_string(),
            _ => "ok".to_string(),
        },
        Err(e) => match e.kind() {
            Some(kind) => kind.to_string(),
            None => format!("rpc_{}", -e.code),
        },
    }
}
