//! # Vote Path Benchmarks
//!
//! | Group | What it measures |
//! |-------|------------------|
//! | `vote-policy` | `decide` over ledgers of growing size |
//! | `vote-path` | a full switch through the service and in-memory store |

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qa_01_document_store::{
    InMemoryDocumentStore, QuestionRepository, SystemTimeSource, TagRepository,
};
use qa_02_content::{ContentApi, ContentService, NewQuestion};
use qa_03_voting::{decide, VotingApi, VotingService};
use shared_types::{UserId, Vote, VoteKind};

fn ledger(size: usize) -> Vec<Vote> {
    (0..size)
        .map(|i| Vote {
            user_id: UserId::new(format!("user-{i}")),
            vote_type: if i % 4 == 0 {
                VoteKind::Downvote
            } else {
                VoteKind::Upvote
            },
            voted_at: i as u64,
        })
        .collect()
}

fn bench_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("vote-policy");
    let author = UserId::from("author");
    let newcomer = UserId::from("newcomer");

    for size in [10usize, 100, 1_000] {
        let votes = ledger(size);
        let last = UserId::new(format!("user-{}", size - 1));
        group.throughput(Throughput::Elements(1));

        group.bench_with_input(BenchmarkId::new("add", size), &votes, |b, votes| {
            b.iter(|| decide(black_box(votes), &newcomer, VoteKind::Upvote, &author))
        });
        group.bench_with_input(BenchmarkId::new("switch_last", size), &votes, |b, votes| {
            b.iter(|| decide(black_box(votes), &last, VoteKind::Downvote, &author))
        });
    }
    group.finish();
}

fn bench_vote_path(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("vote-path");

    for voters in [0usize, 100] {
        let store = Arc::new(InMemoryDocumentStore::new());
        let questions = QuestionRepository::new(Arc::clone(&store), Arc::new(SystemTimeSource));
        let content = ContentService::new(questions.clone(), TagRepository::new(Arc::clone(&store)));
        let voting = VotingService::new(questions);

        let (q, a) = runtime.block_on(async {
            let question = content
                .post_question(NewQuestion {
                    user_id: UserId::from("asker"),
                    text: "How fast is a vote?".to_string(),
                    details: String::new(),
                    tags: vec![],
                })
                .await
                .unwrap();
            let q = question.id.to_hex();
            let a = content
                .post_answer(&q, &UserId::from("author"), "Fast enough to measure.")
                .await
                .unwrap()
                .id
                .to_hex();
            for i in 0..voters {
                voting
                    .upvote(&q, &a, &UserId::new(format!("voter-{i}")))
                    .await
                    .unwrap();
            }
            (q, a)
        });

        // Alternating kinds keeps every call a switch on the same ledger entry.
        let counter = AtomicU64::new(0);
        let racer = UserId::from("racer");
        let (voting, q, a, racer, counter) = (&voting, &q, &a, &racer, &counter);
        group.bench_function(BenchmarkId::new("switch", voters), |b| {
            b.to_async(&runtime).iter(|| async move {
                let kind = if counter.fetch_add(1, Ordering::Relaxed) % 2 == 0 {
                    VoteKind::Upvote
                } else {
                    VoteKind::Downvote
                };
                black_box(voting.cast_vote(q, a, racer, kind).await.unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_policy, bench_vote_path);
criterion_main!(benches);
