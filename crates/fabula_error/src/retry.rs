//! Retry classification.

use crate::{FabulaError, FabulaErrorKind, ProviderError, ProviderErrorKind, TransportError};

/// Trait for errors that support retry logic.
///
/// Only transient failures are retryable: transport problems and provider
/// throttling. Configuration and validation errors fail immediately.
///
/// # Examples
///
/// ```
/// use fabula_error::{ProviderError, ProviderErrorKind, RetryableError};
///
/// let err = ProviderError::new(ProviderErrorKind::RateLimit("Too many requests".to_string()));
/// assert!(err.is_retryable());
/// let (backoff, retries, _max_delay) = err.retry_strategy_params();
/// assert_eq!(backoff, 5000);
/// assert_eq!(retries, 3);
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;

    /// Get retry strategy parameters for this error.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        (1000, 2, 30)
    }
}

impl RetryableError for TransportError {
    fn is_retryable(&self) -> bool {
        true
    }
}

impl RetryableError for ProviderError {
    fn is_retryable(&self) -> bool {
        matches!(self.kind, ProviderErrorKind::RateLimit(_))
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self.kind {
            ProviderErrorKind::RateLimit(_) => (5000, 3, 40),
            _ => (1000, 2, 30),
        }
    }
}

impl RetryableError for FabulaError {
    fn is_retryable(&self) -> bool {
        match self.kind() {
            FabulaErrorKind::Transport(e) => e.is_retryable(),
            FabulaErrorKind::Provider(e) => e.is_retryable(),
            FabulaErrorKind::Config(_)
            | FabulaErrorKind::Validation(_)
            | FabulaErrorKind::Output(_) => false,
        }
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self.kind() {
            FabulaErrorKind::Transport(e) => e.retry_strategy_params(),
            FabulaErrorKind::Provider(e) => e.retry_strategy_params(),
            _ => (1000, 0, 0),
        }
    }
}
