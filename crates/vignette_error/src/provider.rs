//! Provider boundary error types.
//!
//! The image and text providers are opaque capabilities; every failure they
//! surface maps to one of the kinds here. Content-policy rejections are kept
//! distinct from transient failures so callers can offer rephrasing guidance.

/// Error kinds for provider calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// API key not configured for the provider.
    #[display("API key not configured for provider '{_0}'")]
    MissingApiKey(String),
    /// HTTP error with status code and response body.
    #[display("HTTP {status} error: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },
    /// Network or transport level failure.
    #[display("Transport error: {_0}")]
    Transport(String),
    /// The provider rejected the prompt on safety/policy grounds.
    #[display("Content policy rejection: {_0}")]
    ContentPolicy(String),
    /// The provider response could not be parsed.
    #[display("Response parsing failed: {_0}")]
    ResponseParsing(String),
    /// The provider returned a response with no usable content.
    #[display("Provider returned an empty response")]
    EmptyResponse,
}

/// Substrings that indicate a safety/policy rejection rather than a
/// transient failure.
const POLICY_INDICATORS: [&str; 5] = [
    "content_policy",
    "content policy",
    "safety system",
    "safety_violations",
    "rejected as a result of our safety",
];

impl ProviderErrorKind {
    /// Map an API error response to the appropriate kind.
    ///
    /// Responses whose body carries a policy indicator become
    /// [`ProviderErrorKind::ContentPolicy`]; everything else stays an
    /// HTTP error.
    pub fn from_api_response(status: u16, message: String) -> Self {
        let lower = message.to_lowercase();
        if POLICY_INDICATORS.iter().any(|needle| lower.contains(needle)) {
            ProviderErrorKind::ContentPolicy(message)
        } else {
            ProviderErrorKind::Http { status, message }
        }
    }

    /// Check if this is a content-policy rejection.
    pub fn is_content_policy(&self) -> bool {
        matches!(self, ProviderErrorKind::ContentPolicy(_))
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use vignette_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("empty response"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    kind: ProviderErrorKind,
    line: u32,
    file: &'static str,
}

impl ProviderError {
    /// Create a new provider error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ProviderErrorKind {
        &self.kind
    }
}

impl<T> From<T> for ProviderError
where
    T: Into<ProviderErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}
