//! Provider driver traits.
//!
//! The external generation provider is an opaque capability: one call in,
//! one image URL or text blob out. Providers are stateless across calls,
//! which is why panel-to-panel continuity lives entirely in prompt text.

use async_trait::async_trait;
use vignette_error::ProviderError;

/// Driver for the external image generation capability.
///
/// Implementations enforce their own timeouts and surface timeouts as
/// errors; the orchestration core treats a timeout like any other
/// provider failure.
#[async_trait]
pub trait ImageDriver: Send + Sync {
    /// Generate a single image from a complete panel prompt.
    ///
    /// Returns the URL of the generated image.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails; content-policy rejections
    /// carry [`vignette_error::ProviderErrorKind::ContentPolicy`].
    async fn generate_image(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Provider name for logging and tracing.
    fn provider_name(&self) -> &str;
}

/// Driver for the external text generation capability.
#[async_trait]
pub trait TextDriver: Send + Sync {
    /// Generate text (e.g. panel captions) from a prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Provider name for logging and tracing.
    fn provider_name(&self) -> &str;
}
