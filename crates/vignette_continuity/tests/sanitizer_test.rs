//! Tests for the content sanitizer's rewrite rules.

use vignette_continuity::ContentSanitizer;

#[test]
fn flagged_phrasing_is_rewritten_with_warnings() {
    let sanitizer = ContentSanitizer::new();
    let result = sanitizer.sanitize("The villain pulls a gun and a fight breaks out");

    assert!(result.was_modified());
    assert!(result.warnings().len() >= 2);
    assert_ne!(
        result.sanitized_story(),
        "The villain pulls a gun and a fight breaks out"
    );
    assert!(!result.sanitized_story().contains("gun"));
    assert!(!result.sanitized_story().contains("fight"));
}

#[test]
fn clean_story_passes_through_unchanged() {
    let sanitizer = ContentSanitizer::new();
    let story = "A baker perfects a croissant recipe before sunrise";
    let result = sanitizer.sanitize(story);

    assert_eq!(result.sanitized_story(), story);
    assert!(result.warnings().is_empty());
}

#[test]
fn sanitization_is_idempotent() {
    let sanitizer = ContentSanitizer::new();
    let result = sanitizer.sanitize("Soldiers shoot and bombs explode as the war ends in death");
    let second = sanitizer.sanitize(result.sanitized_story());

    assert!(second.warnings().is_empty());
    assert_eq!(second.sanitized_story(), result.sanitized_story());
}

#[test]
fn sanitization_is_deterministic() {
    let sanitizer = ContentSanitizer::new();
    let story = "The knight killed the dragon in a bloody battle";
    let first = sanitizer.sanitize(story);
    let second = sanitizer.sanitize(story);

    assert_eq!(first.sanitized_story(), second.sanitized_story());
    assert_eq!(first.warnings(), second.warnings());
}

#[test]
fn warnings_follow_rule_order() {
    let sanitizer = ContentSanitizer::new();
    // "kill" rule precedes the "gun" rule regardless of word order in the story.
    let result = sanitizer.sanitize("He drops the gun before anyone gets killed");
    assert_eq!(result.warnings().len(), 2);
    assert!(result.warnings()[0].contains("kill"));
    assert!(result.warnings()[1].contains("gadget"));
}

#[test]
fn matching_is_case_insensitive() {
    let sanitizer = ContentSanitizer::new();
    let result = sanitizer.sanitize("DEATH comes to the valley");
    assert!(result.was_modified());
    assert!(result.sanitized_story().contains("vanish"));
}
