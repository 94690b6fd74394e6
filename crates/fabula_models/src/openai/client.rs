use super::dto::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ErrorEnvelope};
use crate::ModelConfig;
use fabula_core::{GenerateRequest, GenerateResponse};
use fabula_error::{
    ConfigError, FabulaError, FabulaResult, ProviderError, ProviderErrorKind, RetryableError,
    TransportError, TransportErrorKind,
};
use fabula_interface::FabulaDriver;
use reqwest::Client;
use std::time::Duration;
use tokio_retry2::strategy::{ExponentialBackoff, jitter};
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, error, info, instrument, warn};

/// Client for OpenAI-compatible chat-completion endpoints.
///
/// Construction performs no network I/O. The credential is checked on
/// every call, before anything is sent.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    config: ModelConfig,
}

impl std::fmt::Debug for OpenAIClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIClient")
            .field("config", &self.config)
            .finish()
    }
}

impl OpenAIClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the settings are invalid or the HTTP
    /// client cannot be built.
    #[instrument(skip_all, fields(model = %config.model()))]
    pub fn new(config: ModelConfig) -> FabulaResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        debug!("Created chat-completions client");
        Ok(Self { client, config })
    }

    /// Settings this client was built with.
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Converts a provider-neutral request into a chat-completions body.
    fn convert_request(&self, request: &GenerateRequest) -> FabulaResult<ChatCompletionRequest> {
        let messages: Vec<ChatMessage> = request.messages().iter().map(ChatMessage::from).collect();

        ChatCompletionRequest::builder()
            .model(self.config.model().clone())
            .messages(messages)
            .temperature(Some(*self.config.temperature()))
            .build()
            .map_err(|e| {
                ProviderError::new(ProviderErrorKind::Parse(format!(
                    "Failed to build request: {}",
                    e
                )))
                .into()
            })
    }

    /// Converts a chat-completions body into a provider-neutral response.
    fn convert_response(response: ChatCompletionResponse) -> FabulaResult<GenerateResponse> {
        let choice = response.choices().first().ok_or_else(|| {
            ProviderError::new(ProviderErrorKind::Parse(
                "Response contained no choices".to_string(),
            ))
        })?;
        let text = choice.message().content().clone().ok_or_else(|| {
            ProviderError::new(ProviderErrorKind::Parse(
                "Response choice has no text content".to_string(),
            ))
        })?;

        let mut generated = GenerateResponse::new(vec![text]);
        if let Some(reason) = choice.finish_reason() {
            generated = generated.with_finish_reason(reason.clone());
        }
        Ok(generated)
    }

    fn transport_error(&self, e: &reqwest::Error) -> FabulaError {
        if e.is_timeout() {
            TransportError::new(TransportErrorKind::Timeout(*self.config.timeout_secs())).into()
        } else {
            TransportError::new(TransportErrorKind::Unreachable(e.to_string())).into()
        }
    }

    /// Sends one request, without retry.
    #[instrument(skip(self, api_key, body), fields(model = %body.model()))]
    async fn send_once(
        &self,
        api_key: &str,
        body: &ChatCompletionRequest,
    ) -> FabulaResult<GenerateResponse> {
        debug!(url = %self.config.base_url(), "Sending chat-completions request");

        let response = self
            .client
            .post(self.config.base_url())
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send chat-completions request");
                self.transport_error(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let raw = match response.text().await {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(error = %e, status = %status, "Failed to read error response body");
                    String::new()
                }
            };
            let message = serde_json::from_str::<ErrorEnvelope>(&raw)
                .map(|envelope| envelope.error.message)
                .unwrap_or(raw);
            error!(status = %status, message = %message, "Provider returned error");
            return Err(
                ProviderError::new(ProviderErrorKind::from_status(status.as_u16(), message)).into(),
            );
        }

        let raw = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read chat-completions response");
            self.transport_error(&e)
        })?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&raw).map_err(|e| {
            error!(error = %e, "Failed to parse chat-completions response");
            ProviderError::new(ProviderErrorKind::Parse(e.to_string()))
        })?;

        debug!(response_id = %parsed.id(), choices = parsed.choices().len(), "Received response");
        Self::convert_response(parsed)
    }

    /// Sends a request, retrying transport failures and rate limits.
    async fn send_with_retry(
        &self,
        api_key: &str,
        body: &ChatCompletionRequest,
    ) -> FabulaResult<GenerateResponse> {
        let first = self.send_once(api_key, body).await;
        let err = match first {
            Ok(response) => return Ok(response),
            Err(e) => e,
        };

        if *self.config.no_retry() || !err.is_retryable() {
            return Err(err);
        }

        let (mut initial_ms, mut retries, max_delay_secs) = err.retry_strategy_params();
        if let Some(backoff) = self.config.retry_backoff_ms() {
            initial_ms = *backoff;
        }
        if let Some(max_retries) = self.config.max_retries() {
            retries = *max_retries;
        }
        if retries == 0 {
            return Err(err);
        }

        info!(
            error = %err,
            initial_backoff_ms = initial_ms,
            max_retries = retries,
            max_delay_secs,
            "Request failed, will retry with backoff"
        );

        // base 2 doubles each delay; factor scales the first one to initial_ms
        let strategy = ExponentialBackoff::from_millis(2)
            .factor((initial_ms / 2).max(1))
            .max_delay(Duration::from_secs(max_delay_secs))
            .map(jitter)
            .take(retries);

        let client = self;
        Retry::spawn(strategy, move || async move {
            match client.send_once(api_key, body).await {
                Ok(response) => Ok(response),
                Err(e) if e.is_retryable() => {
                    warn!(error = %e, "Request failed, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    warn!(error = %e, "Permanent error, failing immediately");
                    Err(RetryError::Permanent(e))
                }
            }
        })
        .await
    }
}

#[async_trait::async_trait]
impl FabulaDriver for OpenAIClient {
    #[instrument(skip(self, request), fields(provider = "openai", model = %self.config.model()))]
    async fn generate(&self, request: &GenerateRequest) -> FabulaResult<GenerateResponse> {
        let api_key = self.config.credential()?;
        let body = self.convert_request(request)?;
        self.send_with_retry(api_key, &body).await
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
