//! # JSON-RPC End to End
//!
//! Drives the gateway built by `ServiceContainer::gateway()` through the full
//! answer lifecycle, checking envelopes and reads against the shared store.

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::integration::Fixture;

    struct Client {
        router: Router,
        next_id: u64,
    }

    impl Client {
        fn new(fx: &Fixture) -> Self {
            Self {
                router: fx.container.gateway().unwrap().router(),
                next_id: 0,
            }
        }

        async fn call(&mut self, method: &str, params: Value) -> Value {
            self.next_id += 1;
            let body = json!({
                "jsonrpc": "2.0",
                "id": self.next_id,
                "method": method,
                "params": params,
            });
            let request = Request::builder()
                .method("POST")
                .uri("/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap();
            let response = self.router.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let response: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(response["id"], self.next_id);
            response
        }

        async fn result(&mut self, method: &str, params: Value) -> Value {
            let response = self.call(method, params).await;
            assert!(response.get("error").is_none(), "{method}: {response}");
            response["result"].clone()
        }
    }

    #[tokio::test]
    async fn test_answer_lifecycle_over_rpc() {
        let fx = Fixture::new();
        let mut rpc = Client::new(&fx);

        let posted = rpc
            .result(
                "content_postQuestion",
                json!({
                    "user_id": "asker",
                    "text": "What does Pin guarantee?",
                    "tags": [" Rust ", "ASYNC"]
                }),
            )
            .await;
        assert_eq!(posted["success"], true);
        let q = posted["data"]["id"].as_str().unwrap().to_string();
        assert_eq!(posted["data"]["tags"], json!(["rust", "async"]));

        let answered = rpc
            .result(
                "content_postAnswer",
                json!({
                    "question_id": q,
                    "user_id": "author",
                    "text": "That the value will not move again."
                }),
            )
            .await;
        let a = answered["data"]["id"].as_str().unwrap().to_string();

        let ids = |user: &str| json!({"question_id": q, "answer_id": a, "user_id": user});

        let up = rpc.result("content_upvoteAnswer", ids("alice")).await;
        assert_eq!(up["success"], true);
        assert_eq!(up["message"], "Answer upvoted successfully");

        let dup = rpc.result("content_upvoteAnswer", ids("alice")).await;
        assert_eq!(dup["success"], false);
        assert_eq!(dup["error"]["data"]["kind"], "conflict");

        let switched = rpc.result("content_downvoteAnswer", ids("alice")).await;
        assert_eq!(switched["success"], true);

        let own = rpc.result("content_upvoteAnswer", ids("author")).await;
        assert_eq!(own["success"], false);
        assert_eq!(own["error"]["data"]["kind"], "unauthorized");

        let vote = rpc.result("content_getUserVote", ids("alice")).await;
        assert_eq!(vote, json!({"has_voted": true, "vote_type": "downvote"}));

        let flagged = rpc
            .result(
                "content_flagAnswer",
                json!({"question_id": q, "answer_id": a, "user_id": "mod", "reason": "check"}),
            )
            .await;
        assert_eq!(flagged["success"], true);
        let listing = rpc.result("content_getFlaggedAnswers", json!({})).await;
        assert_eq!(listing["total_count"], 1);

        let question = rpc
            .result("content_getQuestion", json!({"question_id": q}))
            .await;
        let answer = &question["answers"][0];
        assert_eq!(answer["upvotes"], 0);
        assert_eq!(answer["downvotes"], 1);
        assert_eq!(answer["votes"].as_array().unwrap().len(), 1);

        let deleted = rpc.result("content_deleteAnswer", ids("author")).await;
        assert_eq!(deleted["success"], true);

        let listing = rpc.result("content_getFlaggedAnswers", json!({})).await;
        assert_eq!(listing["total_count"], 0);
        let gone = rpc.result("content_upvoteAnswer", ids("bob")).await;
        assert_eq!(gone["success"], false);
        assert_eq!(gone["error"]["data"]["kind"], "not_found");
    }

    #[tokio::test]
    async fn test_rpc_and_services_share_the_store() {
        let fx = Fixture::new();
        let q = fx.question("asker", "Are writes visible across layers?").await;
        let a = fx.answer(&q, "author").await;
        let mut rpc = Client::new(&fx);

        rpc.result(
            "content_upvoteAnswer",
            json!({"question_id": q, "answer_id": a, "user_id": "alice"}),
        )
        .await;

        let tally = fx.container.voting.tally(&q, &a).await.unwrap();
        assert_eq!(tally.upvotes, 1);

        let feed = rpc
            .result("content_getUserFeed", json!({"user_id": "anyone"}))
            .await;
        assert_eq!(feed["total_count"], 1);
        assert_eq!(feed["items"][0]["id"], q);
    }

    #[tokio::test]
    async fn test_missing_ids_never_reach_the_store() {
        let fx = Fixture::new();
        fx.store.set_unavailable(true);
        let mut rpc = Client::new(&fx);

        let response = rpc
            .call(
                "content_upvoteAnswer",
                json!({"question_id": "", "answer_id": "x", "user_id": "alice"}),
            )
            .await;
        assert_eq!(response["error"]["code"], -32602);

        let response = rpc
            .result(
                "content_downvoteAnswer",
                json!({"question_id": "zz", "answer_id": "x", "user_id": "alice"}),
            )
            .await;
        assert_eq!(response["success"], false);
        assert_eq!(response["error"]["data"]["kind"], "invalid_identifier");
    }
}
