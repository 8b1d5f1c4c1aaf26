//! The end-to-end generation sequence.

use crate::captions;
use futures::Stream;
use std::sync::Arc;
use vignette_continuity::{ContentSanitizer, PromptComposer};
use vignette_core::{GenerationRequest, ProgressEvent};
use vignette_interface::{ImageDriver, TextDriver};

/// Drives one generation sequence from free-text story to three panel
/// URLs, streaming progress along the way.
///
/// Panels are generated strictly sequentially: providers are stateless
/// across calls, so continuity lives in prompt text, and generating
/// panel n+1 only after panel n succeeds lets a doomed sequence fail
/// fast while the caller renders partial results as they arrive.
///
/// One orchestrator is cheap to clone and safe to share; each `run`
/// call owns its own sequence state.
#[derive(Clone)]
pub struct GenerationOrchestrator {
    image_driver: Arc<dyn ImageDriver>,
    text_driver: Option<Arc<dyn TextDriver>>,
    sanitizer: Arc<ContentSanitizer>,
}

impl GenerationOrchestrator {
    /// Create an orchestrator without caption generation.
    pub fn new(image_driver: Arc<dyn ImageDriver>) -> Self {
        Self {
            image_driver,
            text_driver: None,
            sanitizer: Arc::new(ContentSanitizer::new()),
        }
    }

    /// Enable caption generation through a text driver.
    ///
    /// Caption failures never fail a sequence; the terminal event simply
    /// omits captions.
    pub fn with_captions(mut self, text_driver: Arc<dyn TextDriver>) -> Self {
        self.text_driver = Some(text_driver);
        self
    }

    /// Run one sequence, returning its progress event stream.
    ///
    /// The stream is lazy: nothing happens until it is polled, and
    /// dropping it between panels stops further provider calls (a call
    /// already in flight completes; its cost is sunk). The stream ends
    /// with exactly one `SequenceComplete` or `Failed` event.
    pub fn run(&self, request: GenerationRequest) -> impl Stream<Item = ProgressEvent> + Send {
        let image_driver = Arc::clone(&self.image_driver);
        let text_driver = self.text_driver.clone();
        let sanitizer = Arc::clone(&self.sanitizer);

        async_stream::stream! {
            let sequence_id = uuid::Uuid::new_v4();
            tracing::info!(
                %sequence_id,
                style = %request.art_style,
                story_chars = request.story.chars().count(),
                "Starting generation sequence"
            );

            // Fail fast on invalid input, before any provider call.
            if let Err(err) = request.validate() {
                tracing::warn!(%sequence_id, error = %err, "Request validation failed");
                yield ProgressEvent::failed(err.kind().to_string(), None, false);
                return;
            }

            let sanitized = sanitizer.sanitize(&request.story);
            yield ProgressEvent::queued(sanitized.warnings().clone());
            let story = sanitized.into_story();

            // The character token is computed once and shared verbatim by
            // all three prompts; this is the continuity invariant.
            let character_token = PromptComposer::build_character_token(
                request.character_description.as_deref().unwrap_or(""),
                request.has_reference_images,
            );
            let prompts =
                PromptComposer::build_sequence_prompts(&story, request.art_style, &character_token);

            let mut panel_urls: Vec<String> = Vec::with_capacity(prompts.len());
            for (index, prompt) in prompts.iter().enumerate() {
                let position = index as u8 + 1;
                yield ProgressEvent::panel_started(position);

                match image_driver.generate_image(prompt).await {
                    Ok(image_url) => {
                        tracing::info!(%sequence_id, position, "Panel generated");
                        panel_urls.push(image_url.clone());
                        yield ProgressEvent::panel_done(position, image_url);
                    }
                    Err(err) => {
                        // Panels already delivered stay with the caller;
                        // nothing is rolled back.
                        let is_safety = err.kind().is_content_policy();
                        tracing::error!(
                            %sequence_id,
                            position,
                            is_safety,
                            error = %err,
                            "Panel generation failed, aborting sequence"
                        );
                        let message = if is_safety {
                            format!(
                                "Panel {} was declined by the image provider's safety system. \
                                 Try rephrasing the story with calmer wording, or soften the \
                                 moment this panel depicts.",
                                position
                            )
                        } else {
                            format!("Failed to generate panel {}: {}", position, err.kind())
                        };
                        yield ProgressEvent::failed(message, Some(position), is_safety);
                        return;
                    }
                }
            }

            let generated_captions = match &text_driver {
                Some(driver) => Some(
                    captions::generate_with_fallback(
                        driver.as_ref(),
                        &story,
                        request.art_style,
                    )
                    .await,
                ),
                None => None,
            };

            tracing::info!(%sequence_id, panels = panel_urls.len(), "Sequence complete");
            yield ProgressEvent::sequence_complete(panel_urls, generated_captions);
        }
    }
}
