mod ids;
mod message;
mod question;
mod summary;

pub use ids::{AttemptId, MessageId, QuestionId, SessionId};

pub use message::{Author, DoubtMessage, ReplyFormat};
pub use question::{BankError, Question, QuestionBank, QuestionDraft, QuestionError};
pub use summary::{FeedbackTier, QuizSummary, SummaryError, SummaryFeedback};
