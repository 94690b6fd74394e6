//! Request and response types for model generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Provider-neutral generation request.
///
/// Sampling settings belong to the driver; a request carries only the
/// conversation.
///
/// # Examples
///
/// ```
/// use fabula_core::{GenerateRequest, Role};
///
/// let request = GenerateRequest::from_prompt("Tell me a story");
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(request.messages()[0].role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
}

impl GenerateRequest {
    /// A request holding the given messages.
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// A request holding one user message.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self::new(vec![Message::user(prompt)])
    }
}

/// Text outputs returned by a driver.
///
/// # Examples
///
/// ```
/// use fabula_core::GenerateResponse;
///
/// let response = GenerateResponse::new(vec!["Once upon a time".to_string()]);
/// assert_eq!(response.text(), "Once upon a time");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// Text outputs, in provider order
    outputs: Vec<String>,
    /// Provider's reason for stopping, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    finish_reason: Option<String>,
}

impl GenerateResponse {
    /// Wrap text outputs.
    pub fn new(outputs: Vec<String>) -> Self {
        Self {
            outputs,
            finish_reason: None,
        }
    }

    /// Attach the provider's finish reason.
    pub fn with_finish_reason(mut self, reason: impl Into<String>) -> Self {
        self.finish_reason = Some(reason.into());
        self
    }

    /// All text outputs concatenated without separators.
    pub fn text(&self) -> String {
        self.outputs.concat()
    }
}
