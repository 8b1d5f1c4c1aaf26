//! Tests for prompt composition and continuity invariants.

use vignette_continuity::{PromptComposer, StyleCatalog};
use vignette_core::ArtStyleKey;

#[test]
fn sequence_prompts_are_deterministic() {
    let story = "A hero discovers flight over a city at dawn";
    let token = PromptComposer::build_character_token("a caped figure", false);

    let first = PromptComposer::build_sequence_prompts(story, ArtStyleKey::Classic, &token);
    let second = PromptComposer::build_sequence_prompts(story, ArtStyleKey::Classic, &token);
    assert_eq!(first, second);
}

#[test]
fn style_and_character_substrings_are_identical_across_panels() {
    let token = PromptComposer::build_character_token("a detective in a red coat", true);
    let prompts =
        PromptComposer::build_sequence_prompts("A locked room is opened", ArtStyleKey::Manga, &token);

    let style = StyleCatalog::lookup(ArtStyleKey::Manga);
    for prompt in &prompts {
        assert!(prompt.contains(style.rendering_instruction));
        assert!(prompt.contains(&token));
    }
}

#[test]
fn panels_differ_only_in_shot_and_focus() {
    let token = PromptComposer::build_character_token("", false);
    let prompts =
        PromptComposer::build_sequence_prompts("A cat chases a drone", ArtStyleKey::Minimalist, &token);

    assert!(prompts[0].contains("panel 1 of 3"));
    assert!(prompts[0].contains("ESTABLISHING SHOT"));
    assert!(prompts[0].contains("SETUP:"));

    assert!(prompts[1].contains("panel 2 of 3"));
    assert!(prompts[1].contains("ACTION SHOT"));
    assert!(prompts[1].contains("ACTION:"));

    assert!(prompts[2].contains("panel 3 of 3"));
    assert!(prompts[2].contains("REACTION SHOT"));
    assert!(prompts[2].contains("PAYOFF:"));

    // Pairwise distinct despite shared style/character substrings.
    assert_ne!(prompts[0], prompts[1]);
    assert_ne!(prompts[1], prompts[2]);
}

#[test]
fn character_token_prefixes_reference_directive() {
    let with_refs = PromptComposer::build_character_token("a knight", true);
    assert!(with_refs.starts_with("Maintain exact character appearance"));
    assert!(with_refs.ends_with("a knight"));

    let without_refs = PromptComposer::build_character_token("a knight", false);
    assert_eq!(without_refs, "a knight");
}

#[test]
fn empty_description_gets_neutral_default() {
    assert_eq!(
        PromptComposer::build_character_token("", false),
        "the main character"
    );
    assert_eq!(
        PromptComposer::build_character_token("   ", false),
        "the main character"
    );
}

#[test]
fn negative_constraints_appear_in_every_prompt() {
    let token = PromptComposer::build_character_token("someone", false);
    let prompts =
        PromptComposer::build_sequence_prompts("A quiet morning turns strange", ArtStyleKey::RetroPulp, &token);
    for prompt in &prompts {
        assert!(prompt.contains("NO text, speech bubbles, captions"));
        assert!(prompt.contains("NO panel borders"));
        assert!(prompt.contains("not a collage"));
    }
}

#[test]
fn unknown_style_composes_with_classic_instruction() {
    let token = PromptComposer::build_character_token("someone", false);
    let focus = PromptComposer::narrative_focus(1, "A quiet morning");
    let prompt = PromptComposer::build_panel_prompt(
        1,
        &focus,
        ArtStyleKey::parse_or_default("charcoal-sketch"),
        &token,
    );
    let classic = StyleCatalog::lookup(ArtStyleKey::Classic);
    assert!(prompt.contains(classic.rendering_instruction));
}
