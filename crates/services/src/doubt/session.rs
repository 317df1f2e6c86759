use chrono::{DateTime, Utc};
use std::fmt;

use lesson_core::model::{Author, DoubtMessage, MessageId, ReplyFormat, SessionId};

use crate::error::DoubtError;

//
// ─── PENDING REQUEST ───────────────────────────────────────────────────────────
//

/// The single outstanding doubt awaiting its resolver reply.
///
/// Captures the query and the format active at submission time; format
/// changes made while the request is in flight must not affect the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDoubt {
    pub query: String,
    pub format: ReplyFormat,
    pub submitted_at: DateTime<Utc>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Linear doubt-resolution transcript with a single-outstanding-request gate.
///
/// Messages are append-only and chronological. At most one learner query may
/// be awaiting a reply; `submit` is rejected until `complete`, `fail`, or
/// `cancel` reopens the gate.
pub struct DoubtSession {
    id: SessionId,
    messages: Vec<DoubtMessage>,
    format: ReplyFormat,
    pending: Option<PendingDoubt>,
    next_id: MessageId,
}

impl DoubtSession {
    /// Open an empty session with the default `Text` reply format.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            messages: Vec::new(),
            format: ReplyFormat::default(),
            pending: None,
            next_id: MessageId::new(1),
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The transcript so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[DoubtMessage] {
        &self.messages
    }

    /// The format applied to the next submission.
    #[must_use]
    pub fn format(&self) -> ReplyFormat {
        self.format
    }

    /// Choose the format for subsequent queries. Always legal; an in-flight
    /// request keeps the format it was submitted with.
    pub fn set_format(&mut self, format: ReplyFormat) {
        self.format = format;
    }

    #[must_use]
    pub fn awaiting_reply(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingDoubt> {
        self.pending.as_ref()
    }

    /// Submit a learner query: appends the learner message and arms the
    /// gate. Returns the captured query/format for the resolver call.
    ///
    /// # Errors
    ///
    /// Returns `DoubtError::EmptyQuery` for blank text and
    /// `DoubtError::AwaitingReply` while a reply is outstanding; the
    /// transcript is unchanged in both cases.
    pub fn submit(&mut self, query: &str, now: DateTime<Utc>) -> Result<PendingDoubt, DoubtError> {
        if query.trim().is_empty() {
            return Err(DoubtError::EmptyQuery);
        }
        if self.pending.is_some() {
            return Err(DoubtError::AwaitingReply);
        }

        let pending = PendingDoubt {
            query: query.to_string(),
            format: self.format,
            submitted_at: now,
        };
        self.push_message(Author::Learner, query, ReplyFormat::Text, now);
        self.pending = Some(pending.clone());
        Ok(pending)
    }

    /// Append the resolver reply for the pending request and reopen the
    /// gate. The reply carries the format captured at submission time.
    ///
    /// # Errors
    ///
    /// Returns `DoubtError::NoPending` when no request is outstanding.
    pub fn complete(
        &mut self,
        body: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<&DoubtMessage, DoubtError> {
        let pending = self.pending.take().ok_or(DoubtError::NoPending)?;
        self.push_message(Author::Resolver, body, pending.format, now);
        self.messages.last().ok_or(DoubtError::NoPending)
    }

    /// Append a resolver-authored failure notice and reopen the gate.
    ///
    /// This is the recovery path for resolver failures and timeouts: the
    /// learner sees what happened and can retry immediately.
    ///
    /// # Errors
    ///
    /// Returns `DoubtError::NoPending` when no request is outstanding.
    pub fn fail(
        &mut self,
        notice: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<&DoubtMessage, DoubtError> {
        self.pending.take().ok_or(DoubtError::NoPending)?;
        self.push_message(Author::Resolver, notice, ReplyFormat::Text, now);
        self.messages.last().ok_or(DoubtError::NoPending)
    }

    /// Discard the in-flight expectation without appending a reply.
    ///
    /// Extension point: the reference behavior never cancels, but a host
    /// may abandon a request it no longer cares about.
    ///
    /// # Errors
    ///
    /// Returns `DoubtError::NoPending` when no request is outstanding.
    pub fn cancel(&mut self) -> Result<PendingDoubt, DoubtError> {
        self.pending.take().ok_or(DoubtError::NoPending)
    }

    fn push_message(
        &mut self,
        author: Author,
        body: impl Into<String>,
        format: ReplyFormat,
        now: DateTime<Utc>,
    ) {
        let message = DoubtMessage::new(self.next_id, author, body, format, now);
        self.next_id = self.next_id.next();
        self.messages.push(message);
    }
}

impl Default for DoubtSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DoubtSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoubtSession")
            .field("id", &self.id)
            .field("messages_len", &self.messages.len())
            .field("format", &self.format)
            .field("awaiting_reply", &self.awaiting_reply())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
