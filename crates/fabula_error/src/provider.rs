//! Provider response errors.

/// Non-success responses from the chat-completion provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Credential rejected (HTTP 401/403)
    #[display("Credential rejected (HTTP {}): {}", status, message)]
    Auth {
        /// HTTP status code
        status: u16,
        /// Provider error body
        message: String,
    },

    /// Provider throttled the request (HTTP 429)
    #[display("Rate limited: {}", _0)]
    RateLimit(String),

    /// Any other non-success status
    #[display("HTTP {} error: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Provider error body
        message: String,
    },

    /// Success status but the body could not be interpreted
    #[display("Failed to parse provider response: {}", _0)]
    Parse(String),
}

impl ProviderErrorKind {
    /// Classify an HTTP status and body into a provider error kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use fabula_error::ProviderErrorKind;
    ///
    /// let kind = ProviderErrorKind::from_status(429, "slow down");
    /// assert!(matches!(kind, ProviderErrorKind::RateLimit(_)));
    /// ```
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => ProviderErrorKind::Auth { status, message },
            429 => ProviderErrorKind::RateLimit(message),
            _ => ProviderErrorKind::Api { status, message },
        }
    }
}

/// Provider error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
