//! Captions command handler.

use tracing::info;
use vignette_core::ArtStyleKey;
use vignette_generation::captions;
use vignette_models::OpenAiChatClient;

/// Handles the captions command.
///
/// Prints the three-caption set as a JSON array. Provider or parse
/// failures degrade to the fallback captions rather than erroring.
#[tracing::instrument(skip(story), fields(style = %style))]
pub async fn handle_captions_command(
    story: String,
    style: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let driver = OpenAiChatClient::from_env()?;
    let style_key = ArtStyleKey::parse_or_default(&style);

    info!("Generating captions");
    let captions = captions::generate_with_fallback(&driver, &story, style_key).await;

    println!("{}", serde_json::to_string(&captions)?);
    Ok(())
}
