//! Fabula - weighted-genre story suggestions
//!
//! Fabula draws a story genre from a weighted table, binds a fixed
//! storytelling prompt to a cast of characters and that genre, and asks a
//! chat-completion model for a short scripted story. The model's reply is
//! returned exactly as received.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fabula::{GenreTable, ModelConfig, PromptTemplate, initialize_model, suggest_story};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model = initialize_model(ModelConfig::load()?)?;
//!     let characters = vec!["Alice".to_string(), "Bob".to_string()];
//!     let mut rng = StdRng::from_entropy();
//!
//!     let suggestion = suggest_story(
//!         &model,
//!         &characters,
//!         &GenreTable::default_table(),
//!         &PromptTemplate::story(),
//!         None,
//!         &mut rng,
//!     )
//!     .await?;
//!     suggestion.write_to(&mut std::io::stdout())?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `fabula_error` - Error types
//! - `fabula_core` - Genres, prompt template, story and request types
//! - `fabula_interface` - `FabulaDriver` trait definition
//! - `fabula_models` - Provider client and configuration
//!
//! This crate re-exports the commonly used items from each.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generator;
mod suggestion;

pub use generator::generate_story;
pub use suggestion::{PromptPreview, Suggestion, preview_prompt, suggest_story};

pub use fabula_core::{
    Genre, GenerateRequest, GenerateResponse, GenreTable, LintFinding, PromptTemplate, Story,
    lint_story, render_character_list, select_genre,
};
pub use fabula_error::{
    ConfigError, FabulaError, FabulaErrorKind, FabulaResult, OutputError, ProviderError,
    ProviderErrorKind, TransportError, TransportErrorKind, ValidationError, ValidationErrorKind,
};
pub use fabula_interface::FabulaDriver;
pub use fabula_models::{ModelConfig, OpenAIClient, initialize_model};
