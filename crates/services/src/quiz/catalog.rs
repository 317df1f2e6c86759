use lesson_core::model::{QuestionBank, QuestionDraft};

/// Question bank for the "Introduction to Machine Learning" lesson.
///
/// Banks are static configuration, so the reference lesson ships as data
/// and goes through the same draft validation as any host-supplied bank.
///
/// # Panics
///
/// Panics if the embedded catalog is malformed; that is a defect in this
/// crate, not an input error.
#[must_use]
pub fn intro_to_ml_bank() -> QuestionBank {
    let drafts: Vec<QuestionDraft> =
        serde_json::from_str(INTRO_TO_ML).expect("embedded catalog should parse");
    QuestionBank::from_drafts(drafts).expect("embedded catalog should validate")
}

const INTRO_TO_ML: &str = r#"[
  {
    "id": 1,
    "prompt": "Which algorithm is best suited for classification problems?",
    "options": [
      "Linear Regression",
      "Decision Trees",
      "K-means Clustering",
      "Principal Component Analysis"
    ],
    "correct": 1,
    "explanation": "Decision Trees are well-suited for classification problems because they can create complex decision boundaries and are easy to interpret."
  },
  {
    "id": 2,
    "prompt": "What is the main difference between supervised and unsupervised learning?",
    "options": [
      "Supervised learning requires more computational power",
      "Unsupervised learning always performs better",
      "Supervised learning uses labeled data while unsupervised does not",
      "Unsupervised learning is only used for image processing"
    ],
    "correct": 2,
    "explanation": "The key difference is that supervised learning uses labeled data (with known outputs) to train models, while unsupervised learning works with unlabeled data to find patterns."
  },
  {
    "id": 3,
    "prompt": "Which of the following is an example of reinforcement learning?",
    "options": [
      "Predicting house prices based on historical data",
      "Clustering customers based on purchasing behavior",
      "Teaching a computer to play chess by rewarding good moves",
      "Identifying spam emails based on content"
    ],
    "correct": 2,
    "explanation": "Reinforcement learning involves an agent learning to make decisions by performing actions and receiving rewards or penalties, similar to how one might learn to play chess."
  }
]"#;

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_core::model::QuestionId;

    #[test]
    fn catalog_parses_and_validates() {
        let bank = intro_to_ml_bank();
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.get(0).unwrap().id(), QuestionId::new(1));
        assert!(bank.iter().all(|q| q.explanation().is_some()));
    }

    #[test]
    fn catalog_correct_answers_are_in_range() {
        for question in intro_to_ml_bank().iter() {
            assert!(question.has_option(question.correct()));
        }
    }
}
