//! Chat-completion provider integration for Fabula.
//!
//! This crate turns configuration into a ready-to-use model handle. The
//! handle talks to any OpenAI-compatible `chat/completions` endpoint and
//! implements [`FabulaDriver`](fabula_interface::FabulaDriver).
//!
//! # Example
//!
//! ```no_run
//! use fabula_core::GenerateRequest;
//! use fabula_interface::FabulaDriver;
//! use fabula_models::{ModelConfig, initialize_model};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ModelConfig::load()?;
//! let client = initialize_model(config)?;
//! let response = client.generate(&GenerateRequest::from_prompt("Hello")).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod openai;

pub use config::{API_KEY_FALLBACK_ENV, ModelConfig};
pub use openai::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse, ChatMessage,
    Choice, OpenAIClient,
};

use fabula_error::FabulaResult;

/// Build a model handle from configuration.
///
/// Performs no network I/O. The credential is checked when a request is
/// sent, so a handle can be built before a key is available.
///
/// # Errors
///
/// Returns a configuration error for an empty model name, a temperature
/// outside `[0, 2]`, or an HTTP client that cannot be constructed.
pub fn initialize_model(config: ModelConfig) -> FabulaResult<OpenAIClient> {
    OpenAIClient::new(config)
}
