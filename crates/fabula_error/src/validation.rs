//! Input validation errors.

/// Specific validation failures for genre tables and character lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Genre and weight sequences differ in length
    #[display("{} genres but {} weights", genres, weights)]
    LengthMismatch {
        /// Number of genres supplied
        genres: usize,
        /// Number of weights supplied
        weights: usize,
    },

    /// No genres (and no weights) were supplied
    #[display("Genre table is empty")]
    EmptyTable,

    /// A weight is negative, NaN or infinite
    #[display("Invalid weight for '{}': {}", genre, weight)]
    InvalidWeight {
        /// Genre label the weight belongs to
        genre: String,
        /// The offending weight, rendered as text
        weight: String,
    },

    /// Every weight is zero, so nothing can be drawn
    #[display("All genre weights are zero")]
    NoPositiveWeight,

    /// The character list is empty
    #[display("Character list is empty")]
    EmptyCharacters,

    /// A template slot was left without a value
    #[display("No value bound for template slot '{}'", _0)]
    UnboundSlot(String),

    /// Genre label is not one of the known genres
    #[display("Unknown genre: {}", _0)]
    UnknownGenre(String),
}

/// Validation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    line: u32,
    file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with caller location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use fabula_error::{ValidationError, ValidationErrorKind};
    ///
    /// let err = ValidationError::new(ValidationErrorKind::EmptyCharacters);
    /// assert_eq!(err.kind(), &ValidationErrorKind::EmptyCharacters);
    /// ```
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}

impl From<ValidationErrorKind> for ValidationError {
    #[track_caller]
    fn from(kind: ValidationErrorKind) -> Self {
        Self::new(kind)
    }
}
