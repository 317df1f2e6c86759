#![forbid(unsafe_code)]

pub mod doubt;
pub mod error;
pub mod notes;
pub mod quiz;
pub mod resolver;

pub use lesson_core::Clock;

pub use error::{DoubtError, QuizError, ResolverError};

pub use doubt::{DoubtService, DoubtSession, PendingDoubt};
pub use notes::{LearningInsights, practice_set};
pub use quiz::{QuestionOutcome, QuizAttempt, QuizProgress, QuizReport, intro_to_ml_bank};
pub use resolver::{
    KeywordResolver, KeywordRule, RemoteResolver, RemoteResolverConfig, Resolver, ResolverContent,
};
