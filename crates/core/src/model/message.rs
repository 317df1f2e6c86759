use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::MessageId;

/// Desired shape of a resolver reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplyFormat {
    #[default]
    Text,
    VideoRef,
    DiagramRef,
}

impl ReplyFormat {
    /// Wire/display name (`text`, `video-ref`, `diagram-ref`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyFormat::Text => "text",
            ReplyFormat::VideoRef => "video-ref",
            ReplyFormat::DiagramRef => "diagram-ref",
        }
    }
}

impl fmt::Display for ReplyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    Learner,
    Resolver,
}

/// One entry in a doubt-session transcript. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubtMessage {
    id: MessageId,
    author: Author,
    body: String,
    format: ReplyFormat,
    created_at: DateTime<Utc>,
}

impl DoubtMessage {
    #[must_use]
    pub fn new(
        id: MessageId,
        author: Author,
        body: impl Into<String>,
        format: ReplyFormat,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author,
            body: body.into(),
            format,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub fn author(&self) -> Author {
        self.author
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn format(&self) -> ReplyFormat {
        self.format
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
