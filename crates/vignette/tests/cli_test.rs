//! CLI argument parsing tests.

use clap::{CommandFactory, Parser};
use vignette::cli::{Cli, Commands};

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn generate_parses_defaults() {
    let cli = Cli::try_parse_from(["vignette", "generate", "--story", "A hero learns to fly"])
        .expect("generate should parse");
    match cli.command {
        Commands::Generate {
            story,
            style,
            character,
            reference_images,
            captions,
            identifier,
            rate_state,
        } => {
            assert_eq!(story, "A hero learns to fly");
            assert_eq!(style, "classic");
            assert!(character.is_none());
            assert!(!reference_images);
            assert!(!captions);
            assert_eq!(identifier, "cli");
            assert!(rate_state.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn iterate_parses_refinement() {
    let cli = Cli::try_parse_from([
        "vignette",
        "iterate",
        "--panel",
        "2",
        "--story",
        "A hero learns to fly",
        "--style",
        "manga",
        "--refinement",
        "make the sky stormier",
    ])
    .expect("iterate should parse");
    match cli.command {
        Commands::Iterate {
            panel,
            style,
            refinement,
            ..
        } => {
            assert_eq!(panel, 2);
            assert_eq!(style, "manga");
            assert_eq!(refinement.as_deref(), Some("make the sky stormier"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn generate_requires_story() {
    assert!(Cli::try_parse_from(["vignette", "generate"]).is_err());
}

#[tokio::test]
async fn generate_denies_when_the_window_is_exhausted() {
    use std::time::{SystemTime, UNIX_EPOCH};
    use vignette::cli::handle_generate_command;

    let dir = tempfile::tempdir().unwrap();
    let state_path = dir.path().join("rate_windows.json");

    // A window already at capacity, resetting in the far future.
    let reset_at_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
        + 600_000;
    std::fs::write(
        &state_path,
        format!(r#"{{"cli":{{"count":{},"reset_at_ms":{}}}}}"#, u32::MAX, reset_at_ms),
    )
    .unwrap();

    let err = handle_generate_command(
        "A hero learns to fly over a sleeping city".to_string(),
        "classic".to_string(),
        None,
        false,
        false,
        "cli".to_string(),
        Some(state_path),
    )
    .await
    .expect_err("an exhausted window must deny before any provider call");
    assert!(err.to_string().contains("Rate limit exceeded"));
}
