use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use lesson_core::model::ReplyFormat;

use super::{Resolver, ResolverContent};
use crate::error::ResolverError;

/// Connection settings for a real explanation-generation service.
#[derive(Clone, Debug)]
pub struct RemoteResolverConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl RemoteResolverConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("LESSON_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("LESSON_AI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("LESSON_AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// Resolver backed by a chat-completions HTTP service.
///
/// This is the seat reserved for a real model behind the `Resolver` seam.
/// Media formats still return placeholders — generation stays simulated
/// even here, only text answers go to the service.
#[derive(Clone)]
pub struct RemoteResolver {
    client: Client,
    config: Option<RemoteResolverConfig>,
}

impl RemoteResolver {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(RemoteResolverConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<RemoteResolverConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    async fn generate(&self, query: &str) -> Result<String, ResolverError> {
        let config = self.config.as_ref().ok_or(ResolverError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: format!(
                    "You are a tutor resolving a learner's doubt about the current lesson. \
                     Answer concisely.\n\n{query}"
                ),
            }],
            temperature: 0.2,
        };

        tracing::debug!(model = %config.model, "sending doubt query to remote resolver");

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ResolverError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ResolverError::EmptyResponse)?;

        let content = content.trim();
        if content.is_empty() {
            return Err(ResolverError::EmptyResponse);
        }
        Ok(content.to_string())
    }
}

#[async_trait]
impl Resolver for RemoteResolver {
    async fn resolve(
        &self,
        query: &str,
        format: ReplyFormat,
    ) -> Result<ResolverContent, ResolverError> {
        if format != ReplyFormat::Text {
            return Ok(ResolverContent::placeholder(format));
        }
        let body = self.generate(query).await?;
        Ok(ResolverContent::text(body))
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_resolver_is_disabled() {
        let resolver = RemoteResolver::new(None);
        assert!(!resolver.enabled());

        let err = resolver
            .resolve("anything", ReplyFormat::Text)
            .await
            .unwrap_err();
        assert!(matches!(err, ResolverError::Disabled));
    }

    #[tokio::test]
    async fn media_formats_never_hit_the_network() {
        // No config, yet media formats still succeed: they are simulated.
        let resolver = RemoteResolver::new(None);
        let content = resolver
            .resolve("decision tree", ReplyFormat::DiagramRef)
            .await
            .unwrap();
        assert_eq!(content.format, ReplyFormat::DiagramRef);
    }
}
