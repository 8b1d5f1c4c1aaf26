//! Iterate command handler.

use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};
use vignette_continuity::{ContentSanitizer, PromptComposer};
use vignette_core::ArtStyleKey;
use vignette_generation::PanelIterationEngine;
use vignette_models::OpenAiImageClient;

/// Handles the iterate command.
///
/// Regenerates a single panel. The story passes through the sanitizer
/// and the character token is rebuilt exactly as the full sequence run
/// builds it, so the replacement panel stays continuous with its
/// siblings.
#[tracing::instrument(skip(story, character, refinement), fields(panel = panel, style = %style))]
pub async fn handle_iterate_command(
    panel: u8,
    story: String,
    style: String,
    character: Option<String>,
    reference_images: bool,
    refinement: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let sanitizer = ContentSanitizer::new();
    let result = sanitizer.sanitize(&story);
    for warning in result.warnings() {
        warn!(warning = %warning, "Story content rewritten");
    }
    let story = result.into_story();

    let character_token = PromptComposer::build_character_token(
        character.as_deref().unwrap_or_default(),
        reference_images,
    );
    let style_key = ArtStyleKey::parse_or_default(&style);

    let engine = PanelIterationEngine::new(Arc::new(OpenAiImageClient::from_env()?));
    info!("Regenerating panel");

    let image_url = match refinement {
        Some(text) => {
            engine
                .iterate(panel, &story, style_key, &character_token, &text)
                .await?
        }
        None => {
            engine
                .regenerate(panel, &story, style_key, &character_token)
                .await?
        }
    };

    println!(
        "{}",
        serde_json::to_string(&json!({
            "panelNumber": panel,
            "imageUrl": image_url,
        }))?
    );
    Ok(())
}
