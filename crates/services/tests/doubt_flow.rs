use std::sync::Arc;

use lesson_core::model::{Author, ReplyFormat};
use lesson_core::time::fixed_clock;
use services::doubt::{DoubtService, DoubtSession};
use services::error::DoubtError;
use services::resolver::KeywordResolver;

fn service() -> DoubtService {
    DoubtService::new(fixed_clock(), Arc::new(KeywordResolver::intro_to_ml()))
}

#[tokio::test]
async fn decision_tree_doubt_is_answered_regardless_of_casing() {
    let svc = service();

    for query in ["What is a decision tree?", "explain a DECISION TREE please"] {
        let mut session = DoubtSession::new();
        let reply = svc.ask(&mut session, query).await.unwrap();
        assert_eq!(reply.author(), Author::Resolver);
        assert_eq!(reply.format(), ReplyFormat::Text);
        assert!(reply.body().starts_with("Decision trees are a non-parametric"));
    }
}

#[tokio::test]
async fn transcript_alternates_learner_and_resolver_messages() {
    let svc = service();
    let mut session = DoubtSession::new();

    svc.ask(&mut session, "what is supervised learning?").await.unwrap();
    svc.ask(&mut session, "something else entirely").await.unwrap();

    let authors: Vec<Author> = session.messages().iter().map(|m| m.author()).collect();
    assert_eq!(
        authors,
        vec![
            Author::Learner,
            Author::Resolver,
            Author::Learner,
            Author::Resolver
        ]
    );

    // Second query hit the generic fallback, not the supervision rule.
    assert!(session.messages()[3].body().starts_with("In machine learning"));
}

#[tokio::test]
async fn overlapping_submits_are_serialized_by_the_gate() {
    let mut session = DoubtSession::new();
    let clock = fixed_clock();

    // First query is in flight.
    session.submit("foo", clock.now()).unwrap();
    let second = session.submit("foo", clock.now());
    assert!(matches!(second, Err(DoubtError::AwaitingReply)));

    // After the reply lands, the next submit succeeds.
    session.complete("bar", clock.now()).unwrap();
    session.submit("baz", clock.now()).unwrap();
    assert_eq!(session.messages().len(), 3);
}

#[tokio::test]
async fn video_format_reply_ignores_keywords() {
    let svc = service();
    let mut session = DoubtSession::new();
    session.set_format(ReplyFormat::VideoRef);

    let reply = svc.ask(&mut session, "decision tree").await.unwrap();
    assert_eq!(reply.format(), ReplyFormat::VideoRef);
    assert_eq!(reply.body(), "AI-generated video explanation");
}

#[tokio::test]
async fn empty_queries_never_reach_the_resolver() {
    let svc = service();
    let mut session = DoubtSession::new();

    let err = svc.ask(&mut session, "   ").await.unwrap_err();
    assert!(matches!(err, DoubtError::EmptyQuery));
    assert!(session.messages().is_empty());
}
