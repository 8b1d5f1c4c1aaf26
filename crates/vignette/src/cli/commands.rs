//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the vignette binary.
#[derive(Parser, Debug)]
#[command(name = "vignette")]
#[command(about = "Three-panel comic sequence generation")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a full three-panel sequence, streaming progress events
    /// as JSON lines on stdout
    Generate {
        /// Story text to illustrate (10-2000 characters)
        #[arg(short, long)]
        story: String,

        /// Art style key (classic, manga, graphic-novel, retro-pulp,
        /// minimalist); unknown values fall back to classic
        #[arg(long, default_value = "classic")]
        style: String,

        /// Character description carried into every panel prompt
        #[arg(long)]
        character: Option<String>,

        /// State that reference images accompany the request
        #[arg(long)]
        reference_images: bool,

        /// Also generate narrative captions for the finished sequence
        #[arg(long)]
        captions: bool,

        /// Identifier used for rate-limit bucketing
        #[arg(long, default_value = "cli")]
        identifier: String,

        /// Rate window state file (defaults to
        /// <config dir>/vignette/rate_windows.json)
        #[arg(long, value_name = "PATH")]
        rate_state: Option<PathBuf>,
    },

    /// Regenerate a single panel, optionally with refinement text
    Iterate {
        /// Panel position to regenerate (1-3)
        #[arg(short, long)]
        panel: u8,

        /// Story text the sequence was generated from
        #[arg(short, long)]
        story: String,

        /// Art style key; unknown values fall back to classic
        #[arg(long, default_value = "classic")]
        style: String,

        /// Character description carried into the panel prompt
        #[arg(long)]
        character: Option<String>,

        /// State that reference images accompany the request
        #[arg(long)]
        reference_images: bool,

        /// Refinement instruction appended to the panel's narrative focus
        #[arg(long)]
        refinement: Option<String>,
    },

    /// Generate the three-caption set for a story without images
    Captions {
        /// Story text to caption
        #[arg(short, long)]
        story: String,

        /// Art style key; unknown values fall back to classic
        #[arg(long, default_value = "classic")]
        style: String,
    },

    /// List the available art styles
    Styles,
}
