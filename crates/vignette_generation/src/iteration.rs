//! Targeted regeneration of single panels.

use std::sync::Arc;
use vignette_continuity::PromptComposer;
use vignette_core::{ArtStyleKey, PANELS_PER_SEQUENCE};
use vignette_error::{
    GenerationError, GenerationErrorKind, ValidationError, ValidationErrorKind, VignetteError,
};
use vignette_interface::ImageDriver;

/// Regenerates or refines one already-produced panel.
///
/// Iteration reuses the same composition rules and the same character
/// token as the original sequence, so the replacement panel stays
/// visually continuous with its neighbors. Calls are stateless and
/// independent of any in-flight sequence; callers editing the same
/// position concurrently are responsible for serializing those edits
/// (a late stale regeneration can otherwise overwrite a newer one).
#[derive(Clone)]
pub struct PanelIterationEngine {
    image_driver: Arc<dyn ImageDriver>,
}

impl PanelIterationEngine {
    /// Create an iteration engine over an image driver.
    pub fn new(image_driver: Arc<dyn ImageDriver>) -> Self {
        Self { image_driver }
    }

    /// Regenerate one panel with the original narrative focus.
    ///
    /// # Errors
    ///
    /// Returns a validation error for positions outside 1-3, or a
    /// generation error when the provider call fails.
    #[tracing::instrument(skip(self, story, character_token))]
    pub async fn regenerate(
        &self,
        position: u8,
        story: &str,
        style_key: ArtStyleKey,
        character_token: &str,
    ) -> Result<String, VignetteError> {
        let focus = PromptComposer::narrative_focus(position, story);
        self.generate(position, &focus, style_key, character_token)
            .await
    }

    /// Regenerate one panel with refinement text appended to its
    /// narrative focus.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::regenerate`].
    #[tracing::instrument(skip(self, story, character_token, refinement_text))]
    pub async fn iterate(
        &self,
        position: u8,
        story: &str,
        style_key: ArtStyleKey,
        character_token: &str,
        refinement_text: &str,
    ) -> Result<String, VignetteError> {
        let mut focus = PromptComposer::narrative_focus(position, story);
        if !refinement_text.trim().is_empty() {
            focus.push_str("\nREFINEMENT: ");
            focus.push_str(refinement_text.trim());
        }
        self.generate(position, &focus, style_key, character_token)
            .await
    }

    async fn generate(
        &self,
        position: u8,
        focus: &str,
        style_key: ArtStyleKey,
        character_token: &str,
    ) -> Result<String, VignetteError> {
        if position == 0 || position > PANELS_PER_SEQUENCE {
            return Err(
                ValidationError::new(ValidationErrorKind::InvalidPanelNumber(position)).into(),
            );
        }

        let prompt = PromptComposer::build_panel_prompt(position, focus, style_key, character_token);
        match self.image_driver.generate_image(&prompt).await {
            Ok(image_url) => {
                tracing::info!(position, "Panel regenerated");
                Ok(image_url)
            }
            Err(err) => {
                let content_policy = err.kind().is_content_policy();
                tracing::error!(position, content_policy, error = %err, "Panel iteration failed");
                Err(GenerationError::new(GenerationErrorKind::IterationFailed {
                    position,
                    reason: err.kind().to_string(),
                    content_policy,
                })
                .into())
            }
        }
    }
}
