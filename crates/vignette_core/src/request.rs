//! Generation request type and validation.

use crate::ArtStyleKey;
use serde::{Deserialize, Serialize};
use vignette_error::{ValidationError, ValidationErrorKind};

/// Minimum story length in characters.
pub const STORY_MIN_CHARS: usize = 10;

/// Maximum story length in characters.
pub const STORY_MAX_CHARS: usize = 2000;

/// Caller-supplied request to generate a three-panel strip.
///
/// Immutable for the duration of one sequence. Unknown art style strings
/// deserialize to `classic` via the uniform fallback policy.
///
/// # Examples
///
/// ```
/// use vignette_core::{ArtStyleKey, GenerationRequest};
///
/// let request = GenerationRequest::new(
///     "A hero discovers flight over a city at dawn",
///     ArtStyleKey::Classic,
/// );
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Free-text story description (10-2000 characters)
    pub story: String,
    /// Requested art style
    #[serde(default, deserialize_with = "lenient_style")]
    pub art_style: ArtStyleKey,
    /// Optional character description for the continuity token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_description: Option<String>,
    /// Whether reference imagery exists for the characters
    #[serde(default)]
    pub has_reference_images: bool,
}

/// Accept any style string on the wire, falling back to `classic`.
fn lenient_style<'de, D>(deserializer: D) -> Result<ArtStyleKey, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(ArtStyleKey::parse_or_default(&raw))
}

impl GenerationRequest {
    /// Create a request with no character description or reference images.
    pub fn new(story: impl Into<String>, art_style: ArtStyleKey) -> Self {
        Self {
            story: story.into(),
            art_style,
            character_description: None,
            has_reference_images: false,
        }
    }

    /// Set the character description.
    pub fn with_character_description(mut self, description: impl Into<String>) -> Self {
        self.character_description = Some(description.into());
        self
    }

    /// Mark that reference imagery exists for the characters.
    pub fn with_reference_images(mut self, has_reference_images: bool) -> Self {
        self.has_reference_images = has_reference_images;
        self
    }

    /// Validate story bounds.
    ///
    /// Runs before any provider call; an invalid request fails the
    /// sequence fast with no partial side effects.
    ///
    /// # Errors
    ///
    /// Returns an error if the story is outside the 10-2000 character range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let length = self.story.chars().count();
        if length < STORY_MIN_CHARS {
            return Err(ValidationError::new(ValidationErrorKind::StoryTooShort {
                length,
                min: STORY_MIN_CHARS,
            }));
        }
        if length > STORY_MAX_CHARS {
            return Err(ValidationError::new(ValidationErrorKind::StoryTooLong {
                length,
                max: STORY_MAX_CHARS,
            }));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vignette_error::ValidationErrorKind;

    #[test]
    fn short_story_rejected() {
        let request = GenerationRequest::new("too short", ArtStyleKey::Manga);
        let err = request.validate().unwrap_err();
        assert!(matches!(
            err.kind(),
            ValidationErrorKind::StoryTooShort { length: 9, .. }
        ));
    }

    #[test]
    fn long_story_rejected() {
        let request = GenerationRequest::new("x".repeat(2001), ArtStyleKey::Classic);
        let err = request.validate().unwrap_err();
        assert!(matches!(
            err.kind(),
            ValidationErrorKind::StoryTooLong { length: 2001, .. }
        ));
    }

    #[test]
    fn unknown_wire_style_falls_back() {
        let request: GenerationRequest = serde_json::from_str(
            r#"{"story": "A hero discovers flight", "artStyle": "oil-painting"}"#,
        )
        .unwrap();
        assert_eq!(request.art_style, ArtStyleKey::Classic);
        assert!(!request.has_reference_images);
    }
}
