//! # Cross-Crate Flows
//!
//! Content, voting and moderation operating on the same question documents.
//!
//! ## Flows Tested:
//!
//! 1. **Vote lifecycle**: add, duplicate, switch, self-vote, lookup
//! 2. **Cascade delete**: deleting an answer or question drops its votes and flags
//! 3. **Moderation**: repeat flags, flagged listings
//! 4. **Faults**: identifier checks before storage, store outages

#[cfg(test)]
mod tests {
    use qa_01_document_store::Collection;
    use qa_03_voting::{AppliedVote, Tally};
    use shared_types::{Answer, ContentError, UserId, VoteKind};

    use crate::integration::Fixture;

    const QUESTION: &str = "How do I share state between tasks?";

    async fn stored_answer(fx: &Fixture, question_id: &str, answer_id: &str) -> Answer {
        let question = fx.container.content.get_question(question_id).await.unwrap();
        question
            .answers
            .into_iter()
            .find(|a| a.id.to_hex() == answer_id)
            .unwrap()
    }

    fn assert_counters_match_ledger(answer: &Answer) {
        assert_eq!(Tally::of(answer), Tally::from_ledger(&answer.votes));
        let mut voters: Vec<_> = answer.votes.iter().map(|v| v.user_id.clone()).collect();
        voters.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        voters.dedup();
        assert_eq!(voters.len(), answer.votes.len(), "one vote per user");
    }

    // =========================================================================
    // VOTE LIFECYCLE
    // =========================================================================

    #[tokio::test]
    async fn test_vote_lifecycle_across_services() {
        let fx = Fixture::new();
        let q = fx.question("asker", QUESTION).await;
        let a = fx.answer(&q, "author").await;
        let voting = &fx.container.voting;
        let alice = UserId::from("alice");

        let receipt = voting.upvote(&q, &a, &alice).await.unwrap();
        assert_eq!(receipt.applied, AppliedVote::Added);
        assert_eq!(receipt.tally, Tally { upvotes: 1, downvotes: 0 });

        assert!(matches!(
            voting.upvote(&q, &a, &alice).await,
            Err(ContentError::Conflict(_))
        ));

        let receipt = voting.downvote(&q, &a, &alice).await.unwrap();
        assert_eq!(
            receipt.applied,
            AppliedVote::Switched {
                previous: VoteKind::Upvote
            }
        );
        assert_eq!(receipt.tally, Tally { upvotes: 0, downvotes: 1 });

        voting.upvote(&q, &a, &UserId::from("bob")).await.unwrap();

        assert!(matches!(
            voting.upvote(&q, &a, &UserId::from("author")).await,
            Err(ContentError::Unauthorized(_))
        ));

        assert_eq!(
            voting.vote_of(&q, &a, &alice).await.unwrap(),
            Some(VoteKind::Downvote)
        );
        assert_eq!(voting.vote_of(&q, &a, &UserId::from("carol")).await.unwrap(), None);

        let answer = stored_answer(&fx, &q, &a).await;
        assert_eq!(answer.votes.len(), 2);
        assert_eq!(Tally::of(&answer), Tally { upvotes: 1, downvotes: 1 });
        assert_counters_match_ledger(&answer);
    }

    #[tokio::test]
    async fn test_rejected_votes_leave_document_untouched() {
        let fx = Fixture::new();
        let q = fx.question("asker", QUESTION).await;
        let a = fx.answer(&q, "author").await;
        fx.container
            .voting
            .upvote(&q, &a, &UserId::from("alice"))
            .await
            .unwrap();
        let before = fx.container.content.get_question(&q).await.unwrap();

        fx.clock.advance(60_000);
        let _ = fx.container.voting.upvote(&q, &a, &UserId::from("alice")).await;
        let _ = fx.container.voting.downvote(&q, &a, &UserId::from("author")).await;

        let after = fx.container.content.get_question(&q).await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_votes_are_scoped_to_one_answer() {
        let fx = Fixture::new();
        let q = fx.question("asker", QUESTION).await;
        let first = fx.answer(&q, "author").await;
        let second = fx.answer(&q, "other").await;
        let alice = UserId::from("alice");

        fx.container.voting.upvote(&q, &first, &alice).await.unwrap();
        let receipt = fx.container.voting.upvote(&q, &second, &alice).await.unwrap();
        assert_eq!(receipt.applied, AppliedVote::Added);

        // The second author may vote on the first answer.
        fx.container
            .voting
            .downvote(&q, &first, &UserId::from("other"))
            .await
            .unwrap();

        let tally = fx.container.voting.tally(&q, &first).await.unwrap();
        assert_eq!(tally, Tally { upvotes: 1, downvotes: 1 });
    }

    // =========================================================================
    // CASCADE DELETE
    // =========================================================================

    #[tokio::test]
    async fn test_deleting_answer_drops_votes_and_flags() {
        let fx = Fixture::new();
        let q = fx.question("asker", QUESTION).await;
        let a = fx.answer(&q, "author").await;
        let kept = fx.answer(&q, "other").await;

        fx.container
            .voting
            .upvote(&q, &a, &UserId::from("alice"))
            .await
            .unwrap();
        fx.container
            .moderation
            .flag_answer(&q, &a, &UserId::from("mod"), "spam")
            .await
            .unwrap();
        assert_eq!(
            fx.container.moderation.flagged_answers().await.unwrap().total_count,
            1
        );

        assert!(matches!(
            fx.container
                .content
                .delete_answer(&q, &a, &UserId::from("alice"))
                .await,
            Err(ContentError::Unauthorized(_))
        ));
        fx.container
            .content
            .delete_answer(&q, &a, &UserId::from("author"))
            .await
            .unwrap();

        let question = fx.container.content.get_question(&q).await.unwrap();
        assert_eq!(question.answers.len(), 1);
        assert_eq!(question.answers[0].id.to_hex(), kept);

        let flagged = fx.container.moderation.flagged_answers().await.unwrap();
        assert_eq!(flagged.total_count, 0);
        assert!(flagged.items.is_empty());

        assert!(matches!(
            fx.container.voting.upvote(&q, &a, &UserId::from("bob")).await,
            Err(ContentError::NotFound(_))
        ));
        assert!(matches!(
            fx.container.voting.vote_of(&q, &a, &UserId::from("alice")).await,
            Err(ContentError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_deleting_question_cascades_everything() {
        let fx = Fixture::new();
        let q = fx.question("asker", QUESTION).await;
        let a = fx.answer(&q, "author").await;
        let survivor = fx.question("asker", "A second question that stays").await;

        fx.container
            .voting
            .upvote(&q, &a, &UserId::from("alice"))
            .await
            .unwrap();
        fx.container
            .moderation
            .flag_question(&q, &UserId::from("mod"), "off topic")
            .await
            .unwrap();
        fx.container
            .moderation
            .flag_answer(&q, &a, &UserId::from("mod"), "rude")
            .await
            .unwrap();

        assert!(matches!(
            fx.container
                .content
                .delete_question(&q, &UserId::from("author"))
                .await,
            Err(ContentError::Unauthorized(_))
        ));
        fx.container
            .content
            .delete_question(&q, &UserId::from("asker"))
            .await
            .unwrap();

        assert!(matches!(
            fx.container.content.get_question(&q).await,
            Err(ContentError::NotFound(_))
        ));
        assert_eq!(fx.store.len(Collection::Questions), 1);
        assert!(fx.container.content.get_question(&survivor).await.is_ok());

        let moderation = &fx.container.moderation;
        assert_eq!(moderation.flagged_questions().await.unwrap().total_count, 0);
        assert_eq!(moderation.flagged_answers().await.unwrap().total_count, 0);
        assert!(matches!(
            fx.container.voting.upvote(&q, &a, &UserId::from("bob")).await,
            Err(ContentError::NotFound(_))
        ));
        assert!(matches!(
            moderation.flag_question(&q, &UserId::from("mod"), "again").await,
            Err(ContentError::NotFound(_))
        ));
    }

    // =========================================================================
    // MODERATION
    // =========================================================================

    #[tokio::test]
    async fn test_flags_accumulate_and_list() {
        let fx = Fixture::new();
        let q = fx.question("asker", QUESTION).await;
        let a = fx.answer(&q, "author").await;
        let clean = fx.question("asker", "A question nobody flags").await;
        let moderation = &fx.container.moderation;

        moderation
            .flag_question(&q, &UserId::from("mod-a"), "duplicate")
            .await
            .unwrap();
        moderation
            .flag_question(&q, &UserId::from("mod-b"), "still a duplicate")
            .await
            .unwrap();
        // Authors may flag their own content.
        moderation
            .flag_answer(&q, &a, &UserId::from("author"), "outdated")
            .await
            .unwrap();

        let question = fx.container.content.get_question(&q).await.unwrap();
        assert!(question.is_flagged);
        let flaggers: Vec<_> = question.flags.iter().map(|f| f.user_id.as_str()).collect();
        assert_eq!(flaggers, ["mod-a", "mod-b"]);
        assert!(question.answers[0].is_flagged);
        assert_eq!(question.answers[0].flags[0].reason, "outdated");

        let flagged = moderation.flagged_questions().await.unwrap();
        assert_eq!(flagged.total_count, 1);
        assert_eq!(flagged.items[0].id.to_hex(), q);
        assert!(flagged.items.iter().all(|item| item.id.to_hex() != clean));

        let flagged = moderation.flagged_answers().await.unwrap();
        assert_eq!(flagged.total_count, 1);
        assert_eq!(flagged.items[0].id.to_hex(), a);
    }

    #[tokio::test]
    async fn test_flagging_does_not_touch_votes() {
        let fx = Fixture::new();
        let q = fx.question("asker", QUESTION).await;
        let a = fx.answer(&q, "author").await;
        fx.container
            .voting
            .downvote(&q, &a, &UserId::from("alice"))
            .await
            .unwrap();

        fx.container
            .moderation
            .flag_answer(&q, &a, &UserId::from("alice"), "wrong")
            .await
            .unwrap();

        let answer = stored_answer(&fx, &q, &a).await;
        assert_eq!(Tally::of(&answer), Tally { upvotes: 0, downvotes: 1 });
        assert_counters_match_ledger(&answer);
    }

    #[tokio::test]
    async fn test_mark_answered_is_owner_only_and_idempotent() {
        let fx = Fixture::new();
        let q = fx.question("asker", QUESTION).await;
        fx.answer(&q, "author").await;
        let content = &fx.container.content;

        assert!(matches!(
            content.mark_answered(&q, &UserId::from("author")).await,
            Err(ContentError::Unauthorized(_))
        ));
        content.mark_answered(&q, &UserId::from("asker")).await.unwrap();
        content.mark_answered(&q, &UserId::from("asker")).await.unwrap();
        assert!(content.get_question(&q).await.unwrap().is_answered);
    }

    // =========================================================================
    // FAULTS
    // =========================================================================

    #[tokio::test]
    async fn test_malformed_ids_rejected_before_storage() {
        let fx = Fixture::new();
        fx.store.set_unavailable(true);
        let user = UserId::from("alice");
        let valid = "0123456789abcdef01234567";

        assert!(matches!(
            fx.container.voting.upvote("not-an-id", valid, &user).await,
            Err(ContentError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            fx.container.voting.downvote(valid, "xyz", &user).await,
            Err(ContentError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            fx.container.moderation.flag_answer(valid, "", &user, "r").await,
            Err(ContentError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            fx.container.content.get_question("123").await,
            Err(ContentError::InvalidIdentifier(_))
        ));
    }

    #[tokio::test]
    async fn test_store_outage_is_reported_and_recovers() {
        let fx = Fixture::new();
        let q = fx.question("asker", QUESTION).await;
        let a = fx.answer(&q, "author").await;
        let alice = UserId::from("alice");

        fx.store.set_unavailable(true);
        let err = fx.container.voting.upvote(&q, &a, &alice).await.unwrap_err();
        assert!(matches!(err, ContentError::StoreUnavailable(_)));
        assert!(!err.is_client_outcome());

        fx.store.set_unavailable(false);
        let receipt = fx.container.voting.upvote(&q, &a, &alice).await.unwrap();
        assert_eq!(receipt.applied, AppliedVote::Added);
    }
}
