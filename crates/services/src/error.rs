//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the quiz attempt state machine.
///
/// Every variant is a rejected operation: the attempt state is unchanged
/// whenever one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("option index {index} is out of range for {len} options")]
    OptionOutOfRange { index: usize, len: usize },
    #[error("current question is already answered")]
    AlreadyAnswered,
    #[error("no option selected for the current question")]
    NoSelection,
    #[error("current question has not been answered yet")]
    NotAnswered,
    #[error("quiz attempt is already completed")]
    Completed,
    #[error("quiz attempt is not completed yet")]
    NotCompleted,
    #[error(transparent)]
    Summary(#[from] lesson_core::model::SummaryError),
}

/// Errors emitted by resolver collaborators.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolverError {
    #[error("resolver is not configured")]
    Disabled,
    #[error("resolver returned an empty response")]
    EmptyResponse,
    #[error("resolver request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("resolver did not reply within {secs}s")]
    Timeout { secs: u64 },
}

/// Errors emitted by the doubt session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DoubtError {
    #[error("query text is empty")]
    EmptyQuery,
    #[error("a reply is already pending for this session")]
    AwaitingReply,
    #[error("no reply is pending for this session")]
    NoPending,
    #[error(transparent)]
    Resolver(#[from] ResolverError),
}
