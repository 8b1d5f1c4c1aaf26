//! Static registry of art styles and the fixed composition plan.

use vignette_core::{ArtStyle, ArtStyleKey, PanelSlot, ShotType};

/// The five registered art styles.
///
/// Each rendering instruction insists on one cohesive scene because the
/// provider otherwise tends to return collages when prompted with
/// "comic" language.
static STYLES: [ArtStyle; 5] = [
    ArtStyle {
        key: ArtStyleKey::Classic,
        name: "Classic Comic Book",
        description: "Bold lines, vibrant colors",
        rendering_instruction: "A single unified illustration in classic American comic book \
            style. Bold black ink outlines, vibrant primary colors, Ben-Day dots halftone \
            shading, dynamic superhero poses. Professional comic art with strong composition \
            and clear focal point. NOT a collage or multiple panels - ONE cohesive scene only.",
    },
    ArtStyle {
        key: ArtStyleKey::Manga,
        name: "Manga Style",
        description: "Screentone shading, dynamic angles",
        rendering_instruction: "A single unified illustration in Japanese manga style. Clean \
            precise linework, screentone patterns for shading, dramatic perspective angles, \
            motion speed lines, expressive character faces. Black and white with gray tones. \
            Professional manga art with strong composition. NOT a collage or multiple panels - \
            ONE cohesive scene only.",
    },
    ArtStyle {
        key: ArtStyleKey::GraphicNovel,
        name: "Graphic Novel",
        description: "Realistic, muted tones",
        rendering_instruction: "A single unified illustration in sophisticated graphic novel \
            style. Realistic human proportions, painterly shading and rendering, muted earthy \
            color palette, cinematic atmospheric lighting, mature illustration aesthetic. \
            Professional graphic novel art with strong composition. NOT a collage or multiple \
            panels - ONE cohesive scene only.",
    },
    ArtStyle {
        key: ArtStyleKey::RetroPulp,
        name: "Retro Pulp",
        description: "Vintage comic aesthetic",
        rendering_instruction: "A single unified illustration in vintage 1950s pulp magazine \
            style. Limited spot color palette (red, yellow, blue), aged yellowed paper \
            texture, dramatic noir shadows, retro mid-century illustration. Professional pulp \
            art with strong composition. NOT a collage or multiple panels - ONE cohesive \
            scene only.",
    },
    ArtStyle {
        key: ArtStyleKey::Minimalist,
        name: "Minimalist Line Art",
        description: "Simple, clean lines",
        rendering_instruction: "A single unified illustration in minimalist line art style. \
            Clean simple vector-style lines, limited flat color palette, strategic use of \
            negative white space, modern geometric shapes, contemporary illustration \
            aesthetic. Professional minimal design with strong composition. NOT a collage or \
            multiple panels - ONE cohesive scene only.",
    },
];

/// The fixed three-step composition plan, identical for every style.
static COMPOSITION_PLAN: [PanelSlot; 3] = [
    PanelSlot {
        position: 1,
        shot_type: ShotType::Establishing,
        description: "Wide shot to establish setting and characters",
        camera_angle: "eye level or slightly high angle",
    },
    PanelSlot {
        position: 2,
        shot_type: ShotType::Action,
        description: "Medium shot focusing on action or dialogue",
        camera_angle: "dynamic angle to emphasize action",
    },
    PanelSlot {
        position: 3,
        shot_type: ShotType::Reaction,
        description: "Close-up or reveal showing consequence or reaction",
        camera_angle: "close angle for emotional impact",
    },
];

/// Static registry mapping style keys to rendering instructions and the
/// fixed shot-composition plan.
///
/// # Examples
///
/// ```
/// use vignette_continuity::StyleCatalog;
/// use vignette_core::ArtStyleKey;
///
/// let style = StyleCatalog::lookup(ArtStyleKey::Manga);
/// assert_eq!(style.name, "Manga Style");
/// assert_eq!(StyleCatalog::composition_plan().len(), 3);
/// ```
pub struct StyleCatalog;

impl StyleCatalog {
    /// Look up a style by key. Never errors.
    pub fn lookup(key: ArtStyleKey) -> &'static ArtStyle {
        STYLES
            .iter()
            .find(|style| style.key == key)
            .unwrap_or(&STYLES[0])
    }

    /// Look up a style by raw string, falling back to `classic`.
    pub fn lookup_str(key: &str) -> &'static ArtStyle {
        Self::lookup(ArtStyleKey::parse_or_default(key))
    }

    /// The fixed three-slot composition plan shared by every style.
    pub fn composition_plan() -> &'static [PanelSlot; 3] {
        &COMPOSITION_PLAN
    }

    /// The composition slot for a panel position (1-3).
    pub fn slot(position: u8) -> &'static PanelSlot {
        match position {
            2 => &COMPOSITION_PLAN[1],
            3 => &COMPOSITION_PLAN[2],
            _ => &COMPOSITION_PLAN[0],
        }
    }

    /// All registered styles, for pickers and CLI listings.
    pub fn all() -> &'static [ArtStyle] {
        &STYLES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_positions_are_fixed() {
        let plan = StyleCatalog::composition_plan();
        assert_eq!(plan[0].position, 1);
        assert_eq!(plan[0].shot_type, ShotType::Establishing);
        assert_eq!(plan[1].position, 2);
        assert_eq!(plan[1].shot_type, ShotType::Action);
        assert_eq!(plan[2].position, 3);
        assert_eq!(plan[2].shot_type, ShotType::Reaction);
    }

    #[test]
    fn every_key_resolves_to_its_own_style() {
        for style in StyleCatalog::all() {
            assert_eq!(StyleCatalog::lookup(style.key).key, style.key);
        }
    }

    #[test]
    fn unknown_string_falls_back_to_classic() {
        assert_eq!(StyleCatalog::lookup_str("pointillism").key, ArtStyleKey::Classic);
    }
}
