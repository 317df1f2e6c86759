use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question data, typically loaded from static configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl QuestionDraft {
    /// Validate the draft into an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the prompt is blank, fewer than two
    /// options are given, an option is blank, or the correct-answer index
    /// does not point into the option list.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::BlankPrompt { id: self.id });
        }
        if self.options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                id: self.id,
                len: self.options.len(),
            });
        }
        if let Some(index) = self.options.iter().position(|o| o.trim().is_empty()) {
            return Err(QuestionError::BlankOption { id: self.id, index });
        }
        if self.correct >= self.options.len() {
            return Err(QuestionError::CorrectOutOfRange {
                id: self.id,
                correct: self.correct,
                len: self.options.len(),
            });
        }
        if let Some(explanation) = &self.explanation {
            if explanation.trim().is_empty() {
                return Err(QuestionError::BlankExplanation { id: self.id });
            }
        }

        Ok(Question {
            id: self.id,
            prompt: self.prompt,
            options: self.options,
            correct: self.correct,
            explanation: self.explanation,
        })
    }
}

/// A validated multiple-choice question.
///
/// Invariants: at least two options, every option non-blank, and the
/// correct-answer index always points into the option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    correct: usize,
    explanation: Option<String>,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// 0-based index of the correct option.
    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// Returns true if `index` is a valid option index for this question.
    #[must_use]
    pub fn has_option(&self, index: usize) -> bool {
        index < self.options.len()
    }

    /// Returns true if `index` is the correct option.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct
    }
}

//
// ─── QUESTION BANK ─────────────────────────────────────────────────────────────
//

/// Ordered, immutable set of questions for one quiz.
///
/// Insertion order is presentation order and is fixed for the lifetime of
/// an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from validated questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self { questions })
    }

    /// Validate a list of drafts into a bank, in order.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Question` for the first invalid draft, or
    /// `BankError::Empty` for an empty list.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, BankError> {
        let questions = drafts
            .into_iter()
            .map(QuestionDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Returns true if `index` is the last question in presentation order.
    #[must_use]
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.questions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

//
// ─── VALIDATION ERRORS ─────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question {id} has a blank prompt")]
    BlankPrompt { id: QuestionId },

    #[error("question {id} has {len} options, need at least 2")]
    TooFewOptions { id: QuestionId, len: usize },

    #[error("question {id} has a blank option at index {index}")]
    BlankOption { id: QuestionId, index: usize },

    #[error("question {id} marks option {correct} correct but has {len} options")]
    CorrectOutOfRange {
        id: QuestionId,
        correct: usize,
        len: usize,
    },

    #[error("question {id} has a blank explanation")]
    BlankExplanation { id: QuestionId },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,

    #[error(transparent)]
    Question(#[from] QuestionError),
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
