//! Generated story text.

use serde::{Deserialize, Serialize};

/// Text returned by the model, kept byte-for-byte.
///
/// A story is never parsed, trimmed or re-encoded. Use
/// [`lint_story`](crate::lint_story) for an optional, report-only check
/// against the prompt's formatting rules.
///
/// # Examples
///
/// ```
/// use fabula_core::Story;
///
/// let story = Story::new("Title \"Test\"\n...\nTitle \"The End\"");
/// assert_eq!(story.as_str(), "Title \"Test\"\n...\nTitle \"The End\"");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Story(String);

impl Story {
    /// Wrap model output.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the verbatim text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the verbatim text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Story {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
