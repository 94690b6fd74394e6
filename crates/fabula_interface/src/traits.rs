//! Trait definitions for model backends.

use async_trait::async_trait;
use fabula_core::{GenerateRequest, GenerateResponse};
use fabula_error::FabulaResult;

/// Core trait that every model backend implements.
///
/// Implementations send one request per call and surface failures through
/// the shared error taxonomy so callers can tell configuration, transport
/// and provider failures apart.
#[async_trait]
pub trait FabulaDriver: Send + Sync {
    /// Send a request and wait for the complete response.
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: FabulaDriver + ?Sized> FabulaDriver for Box<T> {
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
