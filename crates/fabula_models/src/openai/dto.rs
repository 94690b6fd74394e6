//! Chat-completions data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use fabula_core::{Message, Role};
use serde::{Deserialize, Serialize};

/// Message in a chat-completions request or response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatMessage {
    /// Message role
    role: Role,
    /// Message text; providers may return null for non-text replies
    #[serde(default)]
    content: Option<String>,
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role,
            content: Some(message.content.clone()),
        }
    }
}

/// Chat-completions request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl ChatCompletionRequest {
    /// Creates a new builder for `ChatCompletionRequest`.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// One completion alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Choice {
    /// Position in the choices list
    #[serde(default)]
    index: u32,
    /// Generated message
    message: ChatMessage,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Chat-completions response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatCompletionResponse {
    /// Response identifier
    #[serde(default)]
    id: String,
    /// Model that served the request
    #[serde(default)]
    model: String,
    /// Completion alternatives
    #[serde(default)]
    choices: Vec<Choice>,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) message: String,
}
