//! Caption generation and typed parsing with a fixed fallback.

use vignette_continuity::StyleCatalog;
use vignette_core::ArtStyleKey;
use vignette_interface::TextDriver;

/// Captions used whenever the provider output cannot be parsed into
/// exactly three strings.
pub const FALLBACK_CAPTIONS: [&str; 3] = [
    "The story begins...",
    "The action unfolds...",
    "The story concludes.",
];

/// The fallback triple as owned strings.
pub fn fallback_captions() -> [String; 3] {
    FALLBACK_CAPTIONS.map(str::to_string)
}

/// Build the caption-writing prompt for one strip.
///
/// The provider only sees the story and style; captions must work
/// without seeing the images.
pub fn caption_prompt(story: &str, style_key: ArtStyleKey) -> String {
    let style = StyleCatalog::lookup(style_key);
    format!(
        "You are a professional comic book writer who creates concise, impactful captions. \
         You respond ONLY with valid JSON arrays.\n\
         \n\
         Generate concise, impactful captions for a 3-panel comic strip.\n\
         \n\
         STORY: {story}\n\
         ART STYLE: {style_name}\n\
         \n\
         Create ONE caption for each panel. Each caption should:\n\
         - Be 1-2 short sentences maximum\n\
         - Match the comic's tone and style\n\
         - Progress the story (Setup -> Action -> Payoff)\n\
         - Work without seeing the image\n\
         - Be suitable for the panel position\n\
         \n\
         Return ONLY a JSON array of exactly 3 strings, one for each panel.\n\
         Example format: [\"Panel 1 caption here.\", \"Panel 2 caption here.\", \"Panel 3 caption here.\"]\n\
         \n\
         DO NOT include any other text, explanations, or formatting. ONLY the JSON array.",
        story = story,
        style_name = style.name,
    )
}

/// Parse provider output into exactly three captions.
///
/// Tolerates code fences and surrounding prose by extracting the
/// outermost JSON array before parsing. Anything that is not a
/// 3-element array of strings is an error, never a panic.
pub fn parse_captions(text: &str) -> Result<[String; 3], String> {
    let start = text
        .find('[')
        .ok_or_else(|| "no JSON array in caption output".to_string())?;
    let end = text
        .rfind(']')
        .ok_or_else(|| "unterminated JSON array in caption output".to_string())?;
    if end < start {
        return Err("malformed JSON array in caption output".to_string());
    }

    let parsed: Vec<String> = serde_json::from_str(&text[start..=end])
        .map_err(|e| format!("caption output is not a string array: {}", e))?;

    let count = parsed.len();
    parsed
        .try_into()
        .map_err(|_| format!("expected 3 captions, got {}", count))
}

/// Generate captions through a text driver, substituting the fallback
/// triple on any failure.
///
/// Caption generation is best-effort by design: a provider or parse
/// failure degrades to the fallback rather than surfacing an error.
#[tracing::instrument(skip(driver, story))]
pub async fn generate_with_fallback(
    driver: &dyn TextDriver,
    story: &str,
    style_key: ArtStyleKey,
) -> [String; 3] {
    let prompt = caption_prompt(story, style_key);
    match driver.generate_text(&prompt).await {
        Ok(text) => parse_captions(&text).unwrap_or_else(|reason| {
            tracing::warn!(reason = %reason, "Caption parsing failed, using fallback captions");
            fallback_captions()
        }),
        Err(err) => {
            tracing::warn!(error = %err, "Caption generation failed, using fallback captions");
            fallback_captions()
        }
    }
}
