//! Tests for single-panel regeneration and refinement.

mod test_utils;

use std::sync::Arc;
use test_utils::MockImageDriver;
use vignette_core::ArtStyleKey;
use vignette_error::VignetteError;
use vignette_generation::PanelIterationEngine;

const STORY: &str = "A robot learns to paint in a sunlit studio";
const TOKEN: &str = "a small round robot with a blue visor";

#[tokio::test]
async fn regenerate_rebuilds_only_that_panel() {
    let driver = Arc::new(MockImageDriver::new());
    let engine = PanelIterationEngine::new(driver.clone());

    let url = engine
        .regenerate(3, STORY, ArtStyleKey::Minimalist, TOKEN)
        .await
        .unwrap();
    assert!(!url.is_empty());
    assert_eq!(driver.call_count(), 1);

    let prompt = &driver.prompts()[0];
    assert!(prompt.contains("panel 3 of 3"));
    assert!(prompt.contains("PAYOFF:"));
    assert!(prompt.contains(TOKEN));
}

#[tokio::test]
async fn iterate_appends_refinement_to_the_focus() {
    let driver = Arc::new(MockImageDriver::new());
    let engine = PanelIterationEngine::new(driver.clone());

    engine
        .iterate(2, STORY, ArtStyleKey::Classic, TOKEN, "make the brush strokes wilder")
        .await
        .unwrap();

    let prompt = &driver.prompts()[0];
    assert!(prompt.contains("ACTION:"));
    assert!(prompt.contains("REFINEMENT: make the brush strokes wilder"));
}

#[tokio::test]
async fn blank_refinement_leaves_the_focus_unchanged() {
    let driver = Arc::new(MockImageDriver::new());
    let engine = PanelIterationEngine::new(driver.clone());

    engine
        .iterate(1, STORY, ArtStyleKey::Classic, TOKEN, "   ")
        .await
        .unwrap();

    assert!(!driver.prompts()[0].contains("REFINEMENT"));
}

#[tokio::test]
async fn out_of_range_position_is_rejected_before_the_provider() {
    let driver = Arc::new(MockImageDriver::new());
    let engine = PanelIterationEngine::new(driver.clone());

    let err = engine
        .regenerate(4, STORY, ArtStyleKey::Classic, TOKEN)
        .await
        .unwrap_err();
    assert!(matches!(err, VignetteError::Validation(_)));
    assert_eq!(driver.call_count(), 0);

    assert!(
        engine
            .regenerate(0, STORY, ArtStyleKey::Classic, TOKEN)
            .await
            .is_err()
    );
}

#[tokio::test]
async fn policy_rejection_surfaces_as_content_policy() {
    let driver = Arc::new(MockImageDriver::policy_failing_at(1));
    let engine = PanelIterationEngine::new(driver);

    let err = engine
        .regenerate(1, STORY, ArtStyleKey::Classic, TOKEN)
        .await
        .unwrap_err();
    assert!(err.is_content_policy());
}

#[tokio::test]
async fn same_token_preserves_continuity_with_the_original_sequence() {
    // An iteration reuses the token from the original sequence, so the
    // prompt it sends must embed the identical character substring.
    let driver = Arc::new(MockImageDriver::new());
    let engine = PanelIterationEngine::new(driver.clone());

    engine
        .regenerate(1, STORY, ArtStyleKey::Manga, TOKEN)
        .await
        .unwrap();
    engine
        .regenerate(2, STORY, ArtStyleKey::Manga, TOKEN)
        .await
        .unwrap();

    let prompts = driver.prompts();
    assert!(prompts.iter().all(|p| p.contains(TOKEN)));
}
