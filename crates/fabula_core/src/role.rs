//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Chat roles understood by chat-completion providers.
///
/// Serialized in lowercase, matching the wire format.
///
/// # Examples
///
/// ```
/// use fabula_core::Role;
///
/// assert_eq!(format!("{}", Role::User), "user");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// User messages are from the human
    User,
    /// Replies from the model
    Assistant,
}
