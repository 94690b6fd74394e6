//! Transport error types.

/// Ways a request can fail before any provider response arrives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TransportErrorKind {
    /// Connection could not be established or was dropped
    #[display("Provider unreachable: {}", _0)]
    Unreachable(String),

    /// Request exceeded the configured timeout (seconds)
    #[display("Request timed out after {}s", _0)]
    Timeout(u64),
}

/// Transport error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    /// The kind of transport failure
    pub kind: TransportErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TransportError {
    /// Create a new TransportError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use fabula_error::{TransportError, TransportErrorKind};
    ///
    /// let err = TransportError::new(TransportErrorKind::Unreachable("connection refused".into()));
    /// assert!(format!("{}", err).contains("connection refused"));
    /// ```
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
