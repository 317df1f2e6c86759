use chrono::{DateTime, Utc};
use std::fmt;

use lesson_core::model::{
    AttemptId, FeedbackTier, Question, QuestionBank, QuestionId, QuizSummary, SummaryFeedback,
};

use super::progress::QuizProgress;
use crate::error::QuizError;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// The checked result of one question within an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub question_id: QuestionId,
    pub selected: usize,
    pub is_correct: bool,
}

/// Completion-screen data: the summary plus the configured wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    pub summary: QuizSummary,
    pub tier: FeedbackTier,
    pub message: String,
    pub recommendation: String,
}

//
// ─── ATTEMPT ───────────────────────────────────────────────────────────────────
//

/// One learner's pass through a question bank.
///
/// Steps through the bank in presentation order. Each question goes through
/// `select` → `check` → `advance`; after the last question is advanced past,
/// the attempt is complete and only `reset` and `summary`/`report` remain
/// legal. Violating a precondition returns an error and leaves the state
/// untouched.
pub struct QuizAttempt {
    id: AttemptId,
    bank: QuestionBank,
    current: usize,
    selection: Option<usize>,
    answered: bool,
    outcomes: Vec<QuestionOutcome>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizAttempt {
    /// Start a fresh attempt at question 0 with no selection and score 0.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    #[must_use]
    pub fn new(bank: QuestionBank, started_at: DateTime<Utc>) -> Self {
        Self {
            id: AttemptId::new(),
            bank,
            current: 0,
            selection: None,
            answered: false,
            outcomes: Vec::new(),
            started_at,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> AttemptId {
        self.id
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// The question currently presented, or `None` once complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_complete() {
            None
        } else {
            self.bank.get(self.current)
        }
    }

    /// The learner's tentative choice for the current question.
    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// True once the current question has been checked.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// The current question's explanation, revealed only after `check`.
    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        if !self.answered {
            return None;
        }
        self.current_question().and_then(Question::explanation)
    }

    /// Count of correct answers among checked questions. The in-flight
    /// question never counts until its `check`.
    #[must_use]
    pub fn score(&self) -> u32 {
        let correct = self.outcomes.iter().filter(|o| o.is_correct).count();
        u32::try_from(correct).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    /// Returns a summary of the current attempt progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            position: (self.current + 1).min(self.bank.len()),
            total: self.bank.len(),
            answered: self.outcomes.len(),
            score: self.score(),
            is_complete: self.is_complete(),
        }
    }

    /// Record a tentative choice for the current question.
    ///
    /// Re-selecting before `check` is allowed; the score never changes here.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` after the attempt finished,
    /// `QuizError::AlreadyAnswered` once the question was checked, and
    /// `QuizError::OptionOutOfRange` for an invalid option index.
    pub fn select(&mut self, option_index: usize) -> Result<(), QuizError> {
        let Some(question) = self.current_question() else {
            return Err(QuizError::Completed);
        };
        if self.answered {
            return Err(QuizError::AlreadyAnswered);
        }
        if !question.has_option(option_index) {
            return Err(QuizError::OptionOutOfRange {
                index: option_index,
                len: question.options().len(),
            });
        }

        self.selection = Some(option_index);
        Ok(())
    }

    /// Check the current selection against the correct answer.
    ///
    /// Marks the question answered, scores it, and reveals the explanation.
    /// A second `check` before `advance` is rejected, never double-counted.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` after the attempt finished,
    /// `QuizError::AlreadyAnswered` on a duplicate check, and
    /// `QuizError::NoSelection` when nothing is selected.
    pub fn check(&mut self) -> Result<&QuestionOutcome, QuizError> {
        let Some(question) = self.current_question() else {
            return Err(QuizError::Completed);
        };
        if self.answered {
            return Err(QuizError::AlreadyAnswered);
        }
        let Some(selected) = self.selection else {
            return Err(QuizError::NoSelection);
        };

        let outcome = QuestionOutcome {
            question_id: question.id(),
            selected,
            is_correct: question.is_correct(selected),
        };
        self.outcomes.push(outcome);
        self.answered = true;

        self.outcomes.last().ok_or(QuizError::Completed)
    }

    /// Move past the current (answered) question.
    ///
    /// On a non-final question this presents the next one with cleared
    /// selection state; on the final question it completes the attempt at
    /// `now`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` after the attempt finished and
    /// `QuizError::NotAnswered` if the current question was not checked.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<(), QuizError> {
        if self.is_complete() {
            return Err(QuizError::Completed);
        }
        if !self.answered {
            return Err(QuizError::NotAnswered);
        }

        self.selection = None;
        self.answered = false;
        if self.bank.is_last(self.current) {
            self.completed_at = Some(now);
        } else {
            self.current += 1;
        }
        Ok(())
    }

    /// Discard all progress and restart at question 0. Always legal.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.current = 0;
        self.selection = None;
        self.answered = false;
        self.outcomes.clear();
        self.started_at = now;
        self.completed_at = None;
    }

    /// Final summary of a completed attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotCompleted` while questions remain.
    pub fn summary(&self) -> Result<QuizSummary, QuizError> {
        let completed_at = self.completed_at.ok_or(QuizError::NotCompleted)?;
        let total = u32::try_from(self.bank.len()).unwrap_or(u32::MAX);
        Ok(QuizSummary::new(
            self.id,
            self.score(),
            total,
            self.started_at,
            completed_at,
        )?)
    }

    /// Summary paired with the configured tier message and recommendation.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotCompleted` while questions remain.
    pub fn report(&self, feedback: &SummaryFeedback) -> Result<QuizReport, QuizError> {
        let summary = self.summary()?;
        let message = feedback.message_for(&summary).to_string();
        let recommendation = feedback.recommendation_for(&summary).to_string();
        let tier = summary.tier();
        Ok(QuizReport {
            summary,
            tier,
            message,
            recommendation,
        })
    }
}

impl fmt::Debug for QuizAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizAttempt")
            .field("id", &self.id)
            .field("bank_len", &self.bank.len())
            .field("current", &self.current)
            .field("selection", &self.selection)
            .field("answered", &self.answered)
            .field("score", &self.score())
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
