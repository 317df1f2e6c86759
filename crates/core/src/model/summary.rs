use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::AttemptId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds total questions ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },

    #[error("summary for an empty quiz")]
    NoQuestions,
}

/// Coarse feedback category derived from the fraction of correct answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    /// Every question answered correctly.
    Top,
    /// At least half answered correctly.
    Middle,
    /// Less than half answered correctly.
    Encouragement,
}

/// Final result of a completed quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    attempt_id: AttemptId,
    score: u32,
    total: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// Build a summary from final counts.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::ScoreExceedsTotal` if more answers were correct
    /// than questions exist, `SummaryError::NoQuestions` for a zero-question
    /// total, and `SummaryError::InvalidTimeRange` if `completed_at` is
    /// before `started_at`.
    pub fn new(
        attempt_id: AttemptId,
        score: u32,
        total: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        if total == 0 {
            return Err(SummaryError::NoQuestions);
        }
        if score > total {
            return Err(SummaryError::ScoreExceedsTotal { score, total });
        }

        Ok(Self {
            attempt_id,
            score,
            total,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn attempt_id(&self) -> AttemptId {
        self.attempt_id
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Fraction of questions answered correctly, in `[0.0, 1.0]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        f64::from(self.score) / f64::from(self.total)
    }

    /// Score as a rounded percentage.
    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.fraction() * 100.0).round() as u32
    }

    /// Feedback tier: full marks map to `Top`, at least half to `Middle`,
    /// anything below to `Encouragement`.
    #[must_use]
    pub fn tier(&self) -> FeedbackTier {
        if self.score == self.total {
            FeedbackTier::Top
        } else if self.fraction() >= 0.5 {
            FeedbackTier::Middle
        } else {
            FeedbackTier::Encouragement
        }
    }
}

//
// ─── FEEDBACK WORDING ──────────────────────────────────────────────────────────
//

/// Feedback wording for the completion screen.
///
/// The strings are configuration: which message applies is decided by
/// `QuizSummary::tier` and the recommendation threshold, never by matching
/// on the text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryFeedback {
    pub top: String,
    pub middle: String,
    pub encouragement: String,
    /// Topic suggested when less than half the answers were correct.
    pub below_threshold_topic: String,
    /// Topic suggested otherwise.
    pub at_or_above_threshold_topic: String,
}

impl Default for SummaryFeedback {
    fn default() -> Self {
        Self {
            top: "Excellent! You've mastered this topic.".to_string(),
            middle: "Good job! You're making progress.".to_string(),
            encouragement: "Keep practicing! You'll improve with time.".to_string(),
            below_threshold_topic: "supervised vs. unsupervised learning".to_string(),
            at_or_above_threshold_topic: "advanced classification techniques".to_string(),
        }
    }
}

impl SummaryFeedback {
    /// The tier message for a completed quiz.
    #[must_use]
    pub fn message_for(&self, summary: &QuizSummary) -> &str {
        match summary.tier() {
            FeedbackTier::Top => &self.top,
            FeedbackTier::Middle => &self.middle,
            FeedbackTier::Encouragement => &self.encouragement,
        }
    }

    /// The topic recommendation, chosen by the half-correct threshold.
    #[must_use]
    pub fn recommendation_for(&self, summary: &QuizSummary) -> &str {
        if summary.fraction() < 0.5 {
            &self.below_threshold_topic
        } else {
            &self.at_or_above_threshold_topic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn summary(score: u32, total: u32) -> QuizSummary {
        QuizSummary::new(AttemptId::new(), score, total, fixed_now(), fixed_now()).unwrap()
    }

    #[test]
    fn full_marks_is_top_tier() {
        let s = summary(3, 3);
        assert_eq!(s.tier(), FeedbackTier::Top);
        assert_eq!(s.percent(), 100);
    }

    #[test]
    fn half_correct_is_middle_tier() {
        assert_eq!(summary(2, 4).tier(), FeedbackTier::Middle);
        assert_eq!(summary(2, 3).tier(), FeedbackTier::Middle);
    }

    #[test]
    fn below_half_is_encouragement_tier() {
        let s = summary(1, 3);
        assert_eq!(s.tier(), FeedbackTier::Encouragement);
        assert_eq!(s.percent(), 33);
    }

    #[test]
    fn score_cannot_exceed_total() {
        let err =
            QuizSummary::new(AttemptId::new(), 4, 3, fixed_now(), fixed_now()).unwrap_err();
        assert!(matches!(
            err,
            SummaryError::ScoreExceedsTotal { score: 4, total: 3 }
        ));
    }

    #[test]
    fn completion_cannot_precede_start() {
        let start = fixed_now();
        let earlier = start - chrono::Duration::seconds(1);
        let err = QuizSummary::new(AttemptId::new(), 1, 3, start, earlier).unwrap_err();
        assert!(matches!(err, SummaryError::InvalidTimeRange));
    }

    #[test]
    fn recommendation_follows_threshold() {
        let feedback = SummaryFeedback::default();

        let low = summary(1, 3);
        assert_eq!(
            feedback.recommendation_for(&low),
            feedback.below_threshold_topic
        );
        assert_eq!(feedback.message_for(&low), feedback.encouragement);

        let high = summary(2, 3);
        assert_eq!(
            feedback.recommendation_for(&high),
            feedback.at_or_above_threshold_topic
        );
        assert_eq!(feedback.message_for(&high), feedback.middle);
    }
}
