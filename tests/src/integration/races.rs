//! # Concurrent Writers
//!
//! Voting, flagging, answering and deleting race on one question document.
//! Every writer goes through the optimistic update loop, so no update may be
//! lost and the ledger must stay consistent with the counters.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::future::join_all;
    use qa_03_voting::Tally;
    use service_runtime::ServiceConfig;
    use shared_types::{ContentError, UserId, VoteKind};

    use crate::integration::Fixture;

    const QUESTION: &str = "Which lock should guard the cache?";

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_same_user_racing_both_kinds_keeps_one_vote() {
        let fx = Arc::new(Fixture::new());
        let q = fx.question("asker", QUESTION).await;
        let a = fx.answer(&q, "author").await;

        let tasks: Vec<_> = (0..12)
            .map(|i| {
                let fx = Arc::clone(&fx);
                let (q, a) = (q.clone(), a.clone());
                tokio::spawn(async move {
                    let kind = if i % 2 == 0 {
                        VoteKind::Upvote
                    } else {
                        VoteKind::Downvote
                    };
                    fx.container
                        .voting
                        .cast_vote(&q, &a, &UserId::from("racer"), kind)
                        .await
                })
            })
            .collect();

        for result in join_all(tasks).await {
            match result.unwrap() {
                Ok(_) | Err(ContentError::Conflict(_)) => {}
                Err(other) => panic!("unexpected outcome: {other:?}"),
            }
        }

        let question = fx.container.content.get_question(&q).await.unwrap();
        let answer = &question.answers[0];
        assert_eq!(answer.votes.len(), 1);
        assert_eq!(Tally::of(answer), Tally::from_ledger(&answer.votes));
        assert_eq!(answer.upvotes + answer.downvotes, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_votes_flags_and_answers_interleave_without_loss() {
        let fx = Arc::new(Fixture::new());
        let q = fx.question("asker", QUESTION).await;
        let a = fx.answer(&q, "author").await;

        let mut tasks = Vec::new();
        for i in 0..6 {
            let fx = Arc::clone(&fx);
            let (q, a) = (q.clone(), a.clone());
            tasks.push(tokio::spawn(async move {
                fx.container
                    .voting
                    .upvote(&q, &a, &UserId::new(format!("voter-{i}")))
                    .await
                    .map(|_| ())
            }));
        }
        for i in 0..3 {
            let fx = Arc::clone(&fx);
            let (q, a) = (q.clone(), a.clone());
            tasks.push(tokio::spawn(async move {
                fx.container
                    .moderation
                    .flag_answer(&q, &a, &UserId::new(format!("mod-{i}")), "check")
                    .await
            }));
        }
        for i in 0..3 {
            let fx = Arc::clone(&fx);
            let q = q.clone();
            tasks.push(tokio::spawn(async move {
                fx.container
                    .content
                    .post_answer(
                        &q,
                        &UserId::new(format!("helper-{i}")),
                        "Use an RwLock when reads dominate.",
                    )
                    .await
                    .map(|_| ())
            }));
        }

        for result in join_all(tasks).await {
            result.unwrap().unwrap();
        }

        let question = fx.container.content.get_question(&q).await.unwrap();
        assert_eq!(question.answers.len(), 4);
        let answer = question.answers.iter().find(|x| x.id.to_hex() == a).unwrap();
        assert_eq!(answer.votes.len(), 6);
        assert_eq!(answer.upvotes, 6);
        assert_eq!(answer.flags.len(), 3);
        assert!(answer.is_flagged);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_votes_racing_answer_delete_never_resurrect_it() {
        let fx = Arc::new(Fixture::new());
        let q = fx.question("asker", QUESTION).await;
        let a = fx.answer(&q, "author").await;

        let mut tasks = Vec::new();
        for i in 0..8 {
            let fx = Arc::clone(&fx);
            let (q, a) = (q.clone(), a.clone());
            tasks.push(tokio::spawn(async move {
                fx.container
                    .voting
                    .downvote(&q, &a, &UserId::new(format!("voter-{i}")))
                    .await
                    .map(|_| ())
            }));
        }
        {
            let fx = Arc::clone(&fx);
            let (q, a) = (q.clone(), a.clone());
            tasks.push(tokio::spawn(async move {
                fx.container
                    .content
                    .delete_answer(&q, &a, &UserId::from("author"))
                    .await
            }));
        }

        let mut deleted = false;
        for (index, result) in join_all(tasks).await.into_iter().enumerate() {
            match result.unwrap() {
                Ok(()) if index == 8 => deleted = true,
                Ok(()) | Err(ContentError::NotFound(_)) => {}
                Err(other) => panic!("unexpected outcome: {other:?}"),
            }
        }

        assert!(deleted);
        let question = fx.container.content.get_question(&q).await.unwrap();
        assert!(question.answers.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_exhausted_retries_surface_as_conflict() {
        let fx = Arc::new(Fixture::with_config(ServiceConfig {
            max_cas_retries: 1,
            ..ServiceConfig::default()
        }));
        let q = fx.question("asker", QUESTION).await;
        let a = fx.answer(&q, "author").await;

        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let fx = Arc::clone(&fx);
                let (q, a) = (q.clone(), a.clone());
                tokio::spawn(async move {
                    fx.container
                        .voting
                        .upvote(&q, &a, &UserId::new(format!("voter-{i}")))
                        .await
                })
            })
            .collect();

        let mut accepted = 0u32;
        for result in join_all(tasks).await {
            match result.unwrap() {
                Ok(_) => accepted += 1,
                Err(ContentError::Conflict(_)) => {}
                Err(other) => panic!("unexpected outcome: {other:?}"),
            }
        }

        // Whatever won is reflected exactly once.
        let question = fx.container.content.get_question(&q).await.unwrap();
        let answer = &question.answers[0];
        assert!(accepted >= 1);
        assert_eq!(answer.upvotes, accepted);
        assert_eq!(answer.votes.len() as u32, accepted);
    }
}
