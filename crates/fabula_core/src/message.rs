//! Message types for chat requests.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a chat request.
///
/// # Examples
///
/// ```
/// use fabula_core::{Message, Role};
///
/// let message = Message::user("Hello!");
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.content, "Hello!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// Message text
    pub content: String,
}

impl Message {
    /// Create a message with the user role.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}
