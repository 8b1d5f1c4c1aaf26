//! Vignette CLI - three-panel comic sequence generation.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vignette::cli::{
    Cli, Commands, handle_captions_command, handle_generate_command, handle_iterate_command,
    handle_styles_command,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load .env if present so OPENAI_API_KEY can live in a local file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
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
            handle_generate_command(
                story,
                style,
                character,
                reference_images,
                captions,
                identifier,
                rate_state,
            )
            .await?;
        }
        Commands::Iterate {
            panel,
            story,
            style,
            character,
            reference_images,
            refinement,
        } => {
            handle_iterate_command(panel, story, style, character, reference_images, refinement)
                .await?;
        }
        Commands::Captions { story, style } => {
            handle_captions_command(story, style).await?;
        }
        Commands::Styles => {
            handle_styles_command();
        }
    }

    Ok(())
}
