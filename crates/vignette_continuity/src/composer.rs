//! Prompt composition for continuity-preserving panel generation.
//!
//! Every panel prompt of a sequence shares byte-identical style and
//! character substrings; only shot type, camera angle, and narrative
//! focus differ between positions. That fixed structure is the whole
//! continuity mechanism.

use crate::StyleCatalog;
use vignette_core::{ArtStyleKey, PANELS_PER_SEQUENCE};

/// Default character token when the caller supplies no description.
const DEFAULT_CHARACTER: &str = "the main character";

/// Pure prompt builder. All functions are deterministic: identical
/// inputs always yield identical output.
pub struct PromptComposer;

impl PromptComposer {
    /// Build the character-consistency token for a sequence.
    ///
    /// Computed once per sequence and reused unmodified for all three
    /// panels and any later iteration of them. When reference imagery
    /// exists, the token leads with a directive to preserve the
    /// established appearance.
    pub fn build_character_token(description: &str, has_reference_images: bool) -> String {
        let description = if description.trim().is_empty() {
            DEFAULT_CHARACTER
        } else {
            description
        };
        if has_reference_images {
            format!(
                "Maintain exact character appearance from the reference image. {}",
                description
            )
        } else {
            description.to_string()
        }
    }

    /// Derive the narrative focus for a panel position.
    ///
    /// The same story is labeled with SETUP / ACTION / PAYOFF framing so
    /// the three panels read as before, during, and after one moment.
    pub fn narrative_focus(position: u8, story: &str) -> String {
        match position {
            2 => format!(
                "ACTION: {}. Show the main action happening NOW - the key dramatic moment, \
                 the conflict unfolding, the pivotal event in progress. This is the \"during\" \
                 moment at its peak.",
                story
            ),
            3 => format!(
                "PAYOFF: {}. Show the result or consequence - the aftermath, the reaction, \
                 the resolution or cliffhanger. This is the \"after\" moment that delivers \
                 impact.",
                story
            ),
            _ => format!(
                "SETUP: {}. Show the initial scene - establish the setting, introduce the \
                 characters, and set up what's about to happen. This is the \"before\" moment \
                 that creates context.",
                story
            ),
        }
    }

    /// Assemble the complete generation prompt for one panel.
    ///
    /// Concatenates, in fixed order: the style rendering instruction, the
    /// panel-position statement, shot type and camera angle, the
    /// narrative focus, the character token, and the negative-constraint
    /// block.
    #[tracing::instrument(skip(narrative_focus, character_token))]
    pub fn build_panel_prompt(
        position: u8,
        narrative_focus: &str,
        style_key: ArtStyleKey,
        character_token: &str,
    ) -> String {
        let style = StyleCatalog::lookup(style_key);
        let slot = StyleCatalog::slot(position);
        let shot = slot.shot_type.label();

        format!(
            "{style_prompt}\n\
             \n\
             SCENE DESCRIPTION:\n\
             This is panel {position} of {total} in a comic strip sequence.\n\
             {shot_upper} - {slot_description}\n\
             Camera angle: {camera_angle}\n\
             \n\
             STORY CONTEXT: {narrative_focus}\n\
             \n\
             CHARACTER DETAILS: {character_token}\n\
             \n\
             CRITICAL INSTRUCTIONS:\n\
             - Create ONE single unified illustration (not a collage, not multiple sub-panels)\n\
             - Follow the {style_name} aesthetic exactly\n\
             - Use {shot} framing for this scene\n\
             - Keep character appearance EXACTLY consistent with previous panels\n\
             - Maintain the same art style, color palette, and rendering quality\n\
             - NO text, speech bubbles, captions, sound effects, or typography in the image\n\
             - NO panel borders or frames within the image\n\
             - Professional single-scene illustration with clear focal point\n\
             - Composition suitable for horizontal comic panel format\n\
             \n\
             GENERATE: A single cohesive {shot} illustration showing this moment in the story.",
            style_prompt = style.rendering_instruction,
            position = position,
            total = PANELS_PER_SEQUENCE,
            shot_upper = shot.to_uppercase(),
            slot_description = slot.description,
            camera_angle = slot.camera_angle,
            narrative_focus = narrative_focus,
            character_token = character_token,
            style_name = style.name,
            shot = shot,
        )
    }

    /// Build the three panel prompts for one sequence, in position order.
    #[tracing::instrument(skip(story, character_token))]
    pub fn build_sequence_prompts(
        story: &str,
        style_key: ArtStyleKey,
        character_token: &str,
    ) -> [String; 3] {
        [1u8, 2, 3].map(|position| {
            let focus = Self::narrative_focus(position, story);
            Self::build_panel_prompt(position, &focus, style_key, character_token)
        })
    }
}
