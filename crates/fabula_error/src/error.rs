//! Top-level error wrapper types.

use crate::{ConfigError, OutputError, ProviderError, TransportError, ValidationError};

/// Every failure a Fabula operation can surface.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaError, ConfigError};
///
/// let err: FabulaError = ConfigError::new("API key not configured").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FabulaErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Malformed genre table or character list
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Network unreachable or timed out
    #[from(TransportError)]
    Transport(TransportError),
    /// Non-success provider response
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Result could not be written
    #[from(OutputError)]
    Output(OutputError),
}

/// Fabula error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaErrorKind, FabulaResult, ValidationError, ValidationErrorKind};
///
/// fn might_fail() -> FabulaResult<()> {
///     Err(ValidationError::new(ValidationErrorKind::EmptyTable))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), FabulaErrorKind::Validation(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fabula Error: {}", _0)]
pub struct FabulaError(Box<FabulaErrorKind>);

impl FabulaError {
    /// Create a new error from a kind.
    pub fn new(kind: FabulaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FabulaErrorKind {
        &self.0
    }

    /// Consume the wrapper and return the kind.
    pub fn into_kind(self) -> FabulaErrorKind {
        *self.0
    }
}

// Generic From implementation for any type that converts to FabulaErrorKind
impl<T> From<T> for FabulaError
where
    T: Into<FabulaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fabula operations.
pub type FabulaResult<T> = std::result::Result<T, FabulaError>;
