//! Conversation state for the chat-search shell.
//!
//! A session owns an append-only message history whose first entry is always
//! the fixed greeting. The reasoning backend sits behind the [`Assistant`]
//! trait so session semantics can be exercised without network access.

mod session;

pub use session::ChatSession;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Speaker role for a conversation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
    User,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Assistant => write!(f, "assistant"),
            Role::User => write!(f, "user"),
        }
    }
}

/// A single conversation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Create a user message.
    pub fn user(content: &str) -> Self {
        Self {
            role: Role::User,
            content: content.to_string(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: &str) -> Self {
        Self {
            role: Role::Assistant,
            content: content.to_string(),
        }
    }
}

/// Reasoning backend that turns a conversation into a reply.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Produce a reply to the latest user message given the full history.
    async fn reply(&self, history: &[ChatMessage]) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Assistant.to_string(), "assistant");
        assert_eq!(Role::User.to_string(), "user");
    }

    #[test]
    fn test_message_constructors() {
        let msg = ChatMessage::user("hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "hello");

        let msg = ChatMessage::assistant("hi there");
        assert_eq!(msg.role, Role::Assistant);
    }
}
