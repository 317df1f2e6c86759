use std::sync::Arc;
use std::time::Duration;

use lesson_core::Clock;
use lesson_core::model::DoubtMessage;

use super::session::DoubtSession;
use crate::error::{DoubtError, ResolverError};
use crate::resolver::Resolver;

const DEFAULT_REPLY_TIMEOUT: Duration = Duration::from_secs(10);

/// Orchestrates the full doubt cycle against a resolver collaborator.
///
/// `ask` runs submit → resolve → complete. Resolver failures and timeouts
/// go through the session's `fail` path, so the gate always reopens and the
/// learner can retry — a session is never left stuck awaiting a reply.
#[derive(Clone)]
pub struct DoubtService {
    clock: Clock,
    resolver: Arc<dyn Resolver>,
    reply_timeout: Duration,
    failure_notice: String,
}

impl DoubtService {
    #[must_use]
    pub fn new(clock: Clock, resolver: Arc<dyn Resolver>) -> Self {
        Self {
            clock,
            resolver,
            reply_timeout: DEFAULT_REPLY_TIMEOUT,
            failure_notice:
                "Sorry, I couldn't put an explanation together just now. Please ask again."
                    .to_string(),
        }
    }

    #[must_use]
    pub fn with_reply_timeout(mut self, timeout: Duration) -> Self {
        self.reply_timeout = timeout;
        self
    }

    /// Override the transcript notice appended when a reply fails.
    #[must_use]
    pub fn with_failure_notice(mut self, notice: impl Into<String>) -> Self {
        self.failure_notice = notice.into();
        self
    }

    /// Submit a query and wait for the resolver reply.
    ///
    /// The reply is generated for the format active at submission time,
    /// even if the session format changes while the request is in flight.
    ///
    /// # Errors
    ///
    /// Returns `DoubtError::EmptyQuery`/`DoubtError::AwaitingReply` from the
    /// submit step, and `DoubtError::Resolver` when the resolver fails or
    /// times out — in which case a failure notice has been appended to the
    /// transcript and the gate is open again.
    pub async fn ask<'s>(
        &self,
        session: &'s mut DoubtSession,
        query: &str,
    ) -> Result<&'s DoubtMessage, DoubtError> {
        let pending = session.submit(query, self.clock.now())?;
        tracing::debug!(session = %session.id(), format = %pending.format, "doubt submitted");

        let resolved = tokio::time::timeout(
            self.reply_timeout,
            self.resolver.resolve(&pending.query, pending.format),
        )
        .await;

        match resolved {
            Ok(Ok(content)) => session.complete(content.body, self.clock.now()),
            Ok(Err(error)) => {
                tracing::warn!(session = %session.id(), %error, "resolver failed");
                session.fail(self.failure_notice.clone(), self.clock.now())?;
                Err(DoubtError::Resolver(error))
            }
            Err(_elapsed) => {
                let secs = self.reply_timeout.as_secs();
                tracing::warn!(session = %session.id(), secs, "resolver timed out");
                session.fail(self.failure_notice.clone(), self.clock.now())?;
                Err(DoubtError::Resolver(ResolverError::Timeout { secs }))
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lesson_core::model::{Author, ReplyFormat};
    use lesson_core::time::fixed_clock;

    use crate::resolver::{KeywordResolver, ResolverContent};

    struct FailingResolver;

    #[async_trait]
    impl Resolver for FailingResolver {
        async fn resolve(
            &self,
            _query: &str,
            _format: ReplyFormat,
        ) -> Result<ResolverContent, ResolverError> {
            Err(ResolverError::EmptyResponse)
        }
    }

    struct StallingResolver;

    #[async_trait]
    impl Resolver for StallingResolver {
        async fn resolve(
            &self,
            _query: &str,
            format: ReplyFormat,
        ) -> Result<ResolverContent, ResolverError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(ResolverContent::placeholder(format))
        }
    }

    fn service(resolver: Arc<dyn Resolver>) -> DoubtService {
        DoubtService::new(fixed_clock(), resolver)
    }

    #[tokio::test]
    async fn ask_appends_query_and_reply() {
        let svc = service(Arc::new(KeywordResolver::intro_to_ml()));
        let mut session = DoubtSession::new();

        let reply = svc.ask(&mut session, "What is a decision tree?").await.unwrap();
        assert_eq!(reply.author(), Author::Resolver);
        assert!(reply.body().starts_with("Decision trees"));

        assert_eq!(session.messages().len(), 2);
        assert!(!session.awaiting_reply());
    }

    #[tokio::test]
    async fn resolver_failure_reopens_the_gate() {
        let svc = service(Arc::new(FailingResolver));
        let mut session = DoubtSession::new();

        let err = svc.ask(&mut session, "foo").await.unwrap_err();
        assert!(matches!(
            err,
            DoubtError::Resolver(ResolverError::EmptyResponse)
        ));

        // Failure notice appended, gate reopened.
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].author(), Author::Resolver);
        assert!(!session.awaiting_reply());

        // The learner can retry right away.
        let svc = service(Arc::new(KeywordResolver::intro_to_ml()));
        svc.ask(&mut session, "foo").await.unwrap();
    }

    #[tokio::test]
    async fn stalled_resolver_times_out() {
        let svc = service(Arc::new(StallingResolver))
            .with_reply_timeout(Duration::from_millis(20));
        let mut session = DoubtSession::new();

        let err = svc.ask(&mut session, "foo").await.unwrap_err();
        assert!(matches!(
            err,
            DoubtError::Resolver(ResolverError::Timeout { .. })
        ));
        assert!(!session.awaiting_reply());
    }

    #[tokio::test]
    async fn video_format_yields_a_placeholder_reply() {
        let svc = service(Arc::new(KeywordResolver::intro_to_ml()));
        let mut session = DoubtSession::new();
        session.set_format(ReplyFormat::VideoRef);

        let reply = svc.ask(&mut session, "decision tree").await.unwrap();
        assert_eq!(reply.format(), ReplyFormat::VideoRef);
        assert_eq!(reply.body(), "AI-generated video explanation");
    }
}
