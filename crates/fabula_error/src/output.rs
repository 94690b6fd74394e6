//! Output error types.

/// Failure writing a finished result to its destination.
///
/// Raised after a story or prompt was produced but could not be written
/// out in full, for example to a closed stdout. Never retried.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Output Error: {} at line {} in {}", message, line, file)]
pub struct OutputError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl OutputError {
    /// Create a new OutputError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use fabula_error::OutputError;
    ///
    /// let err = OutputError::new("Broken pipe");
    /// assert!(format!("{}", err).contains("Broken pipe"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
