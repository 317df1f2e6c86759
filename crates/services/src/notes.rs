//! Performance-derived study guidance: focus areas keyed off the quiz
//! feedback tier, and random practice sets drawn from a question bank.

use rand::Rng;
use rand::seq::SliceRandom;

use lesson_core::model::{FeedbackTier, Question, QuestionBank};

/// Focus areas suggested from the learner's latest quiz performance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningInsights {
    pub focus_areas: Vec<String>,
}

impl LearningInsights {
    /// Weak results pull the fundamentals into focus; stronger results move
    /// the suggestions toward evaluation and more advanced technique.
    #[must_use]
    pub fn for_tier(tier: FeedbackTier) -> Self {
        let focus_areas = match tier {
            FeedbackTier::Encouragement => vec![
                "Understanding the differences between supervised and unsupervised learning"
                    .to_string(),
                "Identifying appropriate algorithms for specific problem types".to_string(),
            ],
            FeedbackTier::Middle => vec![
                "Decision Trees vs. Random Forests".to_string(),
                "Evaluating Model Performance".to_string(),
            ],
            FeedbackTier::Top => vec![
                "Evaluating Model Performance".to_string(),
                "Feature Engineering Techniques".to_string(),
            ],
        };
        Self { focus_areas }
    }
}

/// Draw up to `n` distinct practice questions from a bank, in random order.
pub fn practice_set<R: Rng + ?Sized>(bank: &QuestionBank, n: usize, rng: &mut R) -> Vec<Question> {
    let mut questions: Vec<Question> = bank.iter().cloned().collect();
    questions.shuffle(rng);
    questions.truncate(n);
    questions
}
