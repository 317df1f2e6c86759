mod keyword;
mod remote;

pub use keyword::{KeywordResolver, KeywordRule};
pub use remote::{RemoteResolver, RemoteResolverConfig};

use async_trait::async_trait;

use lesson_core::model::ReplyFormat;

use crate::error::ResolverError;

/// Content produced by a resolver: a format tag plus a body.
///
/// For `Text` the body is the explanation itself; for the media formats it
/// is a reference to the generated artifact (simulated by a placeholder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverContent {
    pub format: ReplyFormat,
    pub body: String,
}

impl ResolverContent {
    #[must_use]
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            format: ReplyFormat::Text,
            body: body.into(),
        }
    }

    /// Placeholder content for simulated media generation.
    #[must_use]
    pub fn placeholder(format: ReplyFormat) -> Self {
        let body = match format {
            ReplyFormat::Text => "AI-generated explanation",
            ReplyFormat::VideoRef => "AI-generated video explanation",
            ReplyFormat::DiagramRef => "AI-generated diagram explanation",
        };
        Self {
            format,
            body: body.to_string(),
        }
    }
}

/// External collaborator mapping (query, format) to generated content.
///
/// Stands in for any real explanation-generation service; implementations
/// range from keyword matching to an HTTP-backed model.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolve a learner query into content in the requested format.
    ///
    /// # Errors
    ///
    /// Returns `ResolverError` when the collaborator is unavailable or the
    /// request fails.
    async fn resolve(&self, query: &str, format: ReplyFormat)
    -> Result<ResolverContent, ResolverError>;
}
