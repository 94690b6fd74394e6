//! Core data types for the Fabula story suggestion library.
//!
//! This crate holds everything about a story request that does not touch the
//! network: the genre table and its weighted draw, the prompt template, the
//! request/response types handed to a driver, and the opaque [`Story`] a
//! driver returns.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod characters;
mod genre;
mod lint;
mod message;
mod prompt;
mod request;
mod role;
mod story;

pub use characters::render_character_list;
pub use genre::{Genre, GenreTable, select_genre};
pub use lint::{LintFinding, lint_story};
pub use message::Message;
pub use prompt::{CHARACTER_NAMES_SLOT, PromptTemplate, STORY_TYPE_SLOT};
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
pub use story::Story;
