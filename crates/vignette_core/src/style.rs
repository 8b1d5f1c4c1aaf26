//! Art style keys and the style record type.

use serde::{Deserialize, Serialize};

/// The five supported art styles.
///
/// Unrecognized keys fall back to [`ArtStyleKey::Classic`] uniformly —
/// parsing a style string never fails. This is the single fallback policy
/// applied across validation, catalog lookup, and prompt composition.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ArtStyleKey {
    /// Classic American comic book: bold lines, vibrant colors.
    #[default]
    Classic,
    /// Japanese manga: screentone shading, dynamic angles.
    Manga,
    /// Graphic novel: realistic, muted tones.
    GraphicNovel,
    /// Vintage 1950s pulp magazine aesthetic.
    RetroPulp,
    /// Minimalist line art: simple, clean lines.
    Minimalist,
}

impl ArtStyleKey {
    /// Parse a style string, falling back to `classic` for unknown keys.
    pub fn parse_or_default(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

/// A registered art style.
///
/// Immutable, defined at process start; the rendering instruction is the
/// substring shared verbatim by all three panel prompts of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArtStyle {
    /// Style key
    pub key: ArtStyleKey,
    /// Human-readable name
    pub name: &'static str,
    /// Short description for pickers
    pub description: &'static str,
    /// Full rendering instruction injected into every panel prompt
    pub rendering_instruction: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_round_trip() {
        for (text, key) in [
            ("classic", ArtStyleKey::Classic),
            ("manga", ArtStyleKey::Manga),
            ("graphic-novel", ArtStyleKey::GraphicNovel),
            ("retro-pulp", ArtStyleKey::RetroPulp),
            ("minimalist", ArtStyleKey::Minimalist),
        ] {
            assert_eq!(ArtStyleKey::parse_or_default(text), key);
            assert_eq!(key.to_string(), text);
        }
    }

    #[test]
    fn unknown_key_falls_back_to_classic() {
        assert_eq!(
            ArtStyleKey::parse_or_default("watercolor"),
            ArtStyleKey::Classic
        );
        assert_eq!(ArtStyleKey::parse_or_default(""), ArtStyleKey::Classic);
    }
}
