//! Chat message types: what a conversation appends, one entry per turn side.

use serde::{Deserialize, Serialize};

use super::roadmap::RoadmapPayload;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sender {
    User,
    System,
}

/// The widget kind a render sink should use for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    Options,
    Roadmap,
}

/// Kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MessageContent {
    /// Plain text, rendered as a bubble.
    Text,

    /// Choices the user can pick; a pick comes back as the next user message.
    Options { options: Vec<String> },

    /// A full roadmap.
    Roadmap { roadmap: RoadmapPayload },
}

/// A single entry in a conversation. Never edited once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub body: String,
    #[serde(flatten)]
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn user(body: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            body: body.into(),
            content: MessageContent::Text,
        }
    }

    pub fn text(body: impl Into<String>) -> Self {
        Self {
            sender: Sender::System,
            body: body.into(),
            content: MessageContent::Text,
        }
    }

    pub fn options<I, S>(body: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sender: Sender::System,
            body: body.into(),
            content: MessageContent::Options {
                options: options.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn roadmap(body: impl Into<String>, roadmap: RoadmapPayload) -> Self {
        Self {
            sender: Sender::System,
            body: body.into(),
            content: MessageContent::Roadmap { roadmap },
        }
    }

    pub fn kind(&self) -> MessageKind {
        match self.content {
            MessageContent::Text => MessageKind::Text,
            MessageContent::Options { .. } => MessageKind::Options,
            MessageContent::Roadmap { .. } => MessageKind::Roadmap,
        }
    }

    /// The offered choices, if this is an options message.
    pub fn choices(&self) -> Option<&[String]> {
        match &self.content {
            MessageContent::Options { options } => Some(options),
            _ => None,
        }
    }

    /// The carried roadmap, if this is a roadmap message.
    pub fn roadmap_payload(&self) -> Option<&RoadmapPayload> {
        match &self.content {
            MessageContent::Roadmap { roadmap } => Some(roadmap),
            _ => None,
        }
    }
}
