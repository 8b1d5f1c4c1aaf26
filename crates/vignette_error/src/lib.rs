//! Error types for the Vignette comic generation library.
//!
//! Each domain gets its own error kind enum paired with a location-tracking
//! error struct. The top-level [`VignetteError`] aggregates them for callers
//! that work across domains.

mod generation;
mod provider;
mod rate_limit;
mod validation;

pub use generation::{GenerationError, GenerationErrorKind};
pub use provider::{ProviderError, ProviderErrorKind};
pub use rate_limit::{RateLimitError, RateLimitErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};

/// Top-level error type aggregating all Vignette error domains.
#[derive(Debug, Clone, derive_more::Display, derive_more::From, derive_more::Error)]
pub enum VignetteError {
    /// Request validation failed before any provider call.
    #[display("{_0}")]
    Validation(ValidationError),
    /// Admission denied by the rate governor.
    #[display("{_0}")]
    RateLimit(RateLimitError),
    /// The image or text provider call failed.
    #[display("{_0}")]
    Provider(ProviderError),
    /// Sequence or iteration level failure.
    #[display("{_0}")]
    Generation(GenerationError),
}

/// Result type alias used across Vignette crates.
pub type VignetteResult<T> = Result<T, VignetteError>;

impl VignetteError {
    /// Whether this error stems from a provider content-policy rejection.
    ///
    /// Callers use this to present rephrasing guidance instead of a
    /// generic failure message.
    pub fn is_content_policy(&self) -> bool {
        match self {
            VignetteError::Provider(e) => e.kind().is_content_policy(),
            VignetteError::Generation(e) => e.kind().is_content_policy(),
            _ => false,
        }
    }
}
