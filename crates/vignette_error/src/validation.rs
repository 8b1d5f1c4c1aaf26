//! Request validation error types.

/// Specific error conditions for request validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Story text is shorter than the minimum length
    StoryTooShort {
        /// Actual character count
        length: usize,
        /// Minimum allowed character count
        min: usize,
    },
    /// Story text exceeds the maximum length
    StoryTooLong {
        /// Actual character count
        length: usize,
        /// Maximum allowed character count
        max: usize,
    },
    /// Panel number outside the 1..=3 range
    InvalidPanelNumber(u8),
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationErrorKind::StoryTooShort { length, min } => write!(
                f,
                "Story is too short: {} characters (minimum {})",
                length, min
            ),
            ValidationErrorKind::StoryTooLong { length, max } => write!(
                f,
                "Story is too long: {} characters (maximum {})",
                length, max
            ),
            ValidationErrorKind::InvalidPanelNumber(n) => {
                write!(f, "Panel number {} is out of range (expected 1-3)", n)
            }
        }
    }
}

/// Validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use vignette_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::StoryTooShort {
///     length: 4,
///     min: 10,
/// });
/// assert!(format!("{}", err).contains("too short"));
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The specific error condition
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
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

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Validation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ValidationError {}
