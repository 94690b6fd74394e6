//! OpenAI-compatible chat-completions client.

mod client;
mod dto;

pub use client::OpenAIClient;
pub use dto::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse, ChatMessage,
    Choice,
};
