use async_trait::async_trait;

use lesson_core::model::ReplyFormat;

use super::{Resolver, ResolverContent};
use crate::error::ResolverError;

/// One keyword rule: the reply applies when the query contains any of the
/// keywords (case-insensitive substring match).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    keywords: Vec<String>,
    reply: String,
}

impl KeywordRule {
    #[must_use]
    pub fn new(keywords: impl IntoIterator<Item = impl Into<String>>, reply: impl Into<String>) -> Self {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
            reply: reply.into(),
        }
    }

    fn matches(&self, query_lower: &str) -> bool {
        self.keywords.iter().any(|k| query_lower.contains(k))
    }
}

/// The stand-in "AI": an explicitly ordered rule list, first match wins.
///
/// For non-text formats the query is ignored entirely and a placeholder is
/// returned — media generation is simulated, not real.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordResolver {
    rules: Vec<KeywordRule>,
    fallback: String,
}

impl KeywordResolver {
    #[must_use]
    pub fn new(rules: Vec<KeywordRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// The reference rule set for the machine-learning lesson.
    ///
    /// Rule order matters: "decision tree" is checked before the
    /// supervised/unsupervised rule.
    #[must_use]
    pub fn intro_to_ml() -> Self {
        Self::new(
            vec![
                KeywordRule::new(["decision tree"], DECISION_TREE_REPLY),
                KeywordRule::new(["supervised", "unsupervised"], SUPERVISION_REPLY),
            ],
            FALLBACK_REPLY,
        )
    }

    /// First matching rule's reply, or the fallback.
    #[must_use]
    pub fn lookup(&self, query: &str) -> &str {
        let query_lower = query.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&query_lower))
            .map_or(self.fallback.as_str(), |rule| rule.reply.as_str())
    }
}

#[async_trait]
impl Resolver for KeywordResolver {
    async fn resolve(
        &self,
        query: &str,
        format: ReplyFormat,
    ) -> Result<ResolverContent, ResolverError> {
        if format != ReplyFormat::Text {
            return Ok(ResolverContent::placeholder(format));
        }
        Ok(ResolverContent::text(self.lookup(query)))
    }
}

const DECISION_TREE_REPLY: &str = "Decision trees are a non-parametric supervised learning method used for classification and regression. The goal is to create a model that predicts the value of a target variable by learning simple decision rules inferred from the data features. A tree can be seen as a piecewise constant approximation.\n\nKey advantages of decision trees:\n- Easy to understand and interpret\n- Requires little data preparation\n- Can handle both numerical and categorical data\n- Uses a white box model (if a given situation is observable in a model, the explanation for the condition is easily explained)";

const SUPERVISION_REPLY: &str = "Supervised learning uses labeled training data to learn the mapping function that turns input variables (X) into the output variable (Y). The goal is to approximate the mapping function so well that when you have new input data (X), you can predict the output variables (Y) for that data.\n\nUnsupervised learning, in contrast, uses unlabeled training data. The goal is to model the underlying structure or distribution in the data in order to learn more about the data. These algorithms discover hidden patterns or data groupings without the need for human intervention.";

const FALLBACK_REPLY: &str = "In machine learning, models are trained using data to make predictions or decisions without being explicitly programmed to perform the task. There are several types of machine learning:\n\n1. Supervised Learning: Uses labeled data\n2. Unsupervised Learning: Uses unlabeled data to find patterns\n3. Reinforcement Learning: Learns through trial and error with rewards\n\nThe choice of algorithm depends on your specific problem, data availability, and desired outcomes. Would you like me to explain any specific concept in more detail?";

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn decision_tree_rule_matches_any_casing() {
        let resolver = KeywordResolver::intro_to_ml();

        for query in ["What is a decision tree?", "Explain a DECISION TREE"] {
            let content = resolver.resolve(query, ReplyFormat::Text).await.unwrap();
            assert_eq!(content.format, ReplyFormat::Text);
            assert_eq!(content.body, DECISION_TREE_REPLY);
        }
    }

    #[tokio::test]
    async fn supervision_rule_matches_either_keyword() {
        let resolver = KeywordResolver::intro_to_ml();

        for query in ["supervised learning?", "what is UNSUPERVISED clustering"] {
            let content = resolver.resolve(query, ReplyFormat::Text).await.unwrap();
            assert_eq!(content.body, SUPERVISION_REPLY);
        }
    }

    #[tokio::test]
    async fn first_matching_rule_wins() {
        let resolver = KeywordResolver::intro_to_ml();

        // Mentions both topics; the decision-tree rule is ordered first.
        let content = resolver
            .resolve(
                "is a decision tree supervised or unsupervised?",
                ReplyFormat::Text,
            )
            .await
            .unwrap();
        assert_eq!(content.body, DECISION_TREE_REPLY);
    }

    #[tokio::test]
    async fn unknown_query_gets_the_fallback() {
        let resolver = KeywordResolver::intro_to_ml();
        let content = resolver.resolve("foo", ReplyFormat::Text).await.unwrap();
        assert_eq!(content.body, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn non_text_formats_ignore_the_query() {
        let resolver = KeywordResolver::intro_to_ml();

        let video = resolver
            .resolve("decision tree", ReplyFormat::VideoRef)
            .await
            .unwrap();
        assert_eq!(video.format, ReplyFormat::VideoRef);
        assert_eq!(video.body, "AI-generated video explanation");

        let diagram = resolver
            .resolve("decision tree", ReplyFormat::DiagramRef)
            .await
            .unwrap();
        assert_eq!(diagram.format, ReplyFormat::DiagramRef);
        assert_eq!(diagram.body, "AI-generated diagram explanation");
    }
}
