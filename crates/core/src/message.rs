//! Prompt message value objects.
//!
//! The pipeline always produces exactly two messages: one system message
//! (fixed instructions plus worked examples) and one user message (the
//! serialized fragment, auxiliary files, and autopilot catalog hits).

use serde::{Deserialize, Serialize};

/// The role of a prompt message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    /// Fixed instructions; never subject to trimming.
    System,
    /// The per-request payload; auxiliary lines may be trimmed from it.
    User,
}

/// A single message of the outbound prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

impl PromptMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::User,
            content: content.into(),
        }
    }
}

/// The two-part prompt the pipeline hands to the outbound LLM
/// collaborator: index 0 system, index 1 user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationPrompt {
    pub system: PromptMessage,
    pub user: PromptMessage,
}

impl ExplanationPrompt {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: PromptMessage::system(system),
            user: PromptMessage::user(user),
        }
    }

    /// Convert into the ordered two-element message list expected by
    /// chat-completion style APIs.
    pub fn into_messages(self) -> Vec<PromptMessage> {
        vec![self.system, self.user]
    }
}
