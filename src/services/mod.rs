//! Service layer for language-model providers
//!
//! Chat backends sit behind the [`ChatModel`] trait so the agent framework
//! can swap the default provider for an OpenAI-compatible gateway without
//! touching the adapter.

pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Response from a completion request
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: String,
    pub model: Option<String>,
    pub stop_reason: Option<String>,
}

/// Core trait for chat-model clients
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Provider name (e.g. "openai", "openrouter")
    fn provider(&self) -> &str;

    /// Model identifier requests are issued with
    fn model(&self) -> &str;

    /// Create a non-streaming completion.
    ///
    /// # Errors
    ///
    /// Returns transport and provider errors unchanged.
    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<ChatResponse>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let message = ChatMessage::user("hi");
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "hi");
    }
}
