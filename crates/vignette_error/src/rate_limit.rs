//! Error types for rate governor operations.

/// Error kinds for rate governor operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum RateLimitErrorKind {
    /// Configuration file error.
    #[display("Configuration error: {_0}")]
    Config(String),
    /// Admission denied for an identifier.
    #[display("Rate limit exceeded for '{identifier}': {limit} requests per window")]
    Denied {
        /// Caller identifier that was denied
        identifier: String,
        /// Maximum requests allowed in the window
        limit: u32,
        /// Milliseconds until the window resets
        retry_after_ms: u64,
    },
}

/// Rate governor error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Rate Limit Error: {} at line {} in {}", kind, line, file)]
pub struct RateLimitError {
    kind: RateLimitErrorKind,
    line: u32,
    file: &'static str,
}

impl RateLimitError {
    /// Create a new rate governor error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RateLimitErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RateLimitErrorKind {
        &self.kind
    }
}

impl<T> From<T> for RateLimitError
where
    T: Into<RateLimitErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}
