//! Generate command handler.

use futures::StreamExt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use vignette_core::{ArtStyleKey, GenerationRequest, ProgressEvent};
use vignette_generation::GenerationOrchestrator;
use vignette_interface::RateStore;
use vignette_models::{OpenAiChatClient, OpenAiImageClient};
use vignette_rate_limit::{FileRateStore, GovernorConfig};

/// Handles the generate command.
///
/// Admission runs first, against the persistent window store, so budget
/// accumulates across invocations: a full window prints the denial with
/// its `X-RateLimit-*` headers and exits before any provider call.
/// Admitted requests stream progress events as JSON lines on stdout.
#[tracing::instrument(skip_all, fields(style = %style, identifier = %identifier))]
pub async fn handle_generate_command(
    story: String,
    style: String,
    character: Option<String>,
    reference_images: bool,
    captions: bool,
    identifier: String,
    rate_state: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = GovernorConfig::load()?;
    let store = match rate_state {
        Some(path) => FileRateStore::open(path),
        None => FileRateStore::open_default()?,
    };
    admit(&store, &identifier, &config)?;

    let image_driver = Arc::new(OpenAiImageClient::from_env()?);
    let mut orchestrator = GenerationOrchestrator::new(image_driver);
    if captions {
        orchestrator = orchestrator.with_captions(Arc::new(OpenAiChatClient::from_env()?));
    }

    let mut request =
        GenerationRequest::new(story, ArtStyleKey::parse_or_default(&style))
            .with_reference_images(reference_images);
    if let Some(description) = character {
        request = request.with_character_description(description);
    }

    info!("Starting comic sequence generation");

    let mut failed = false;
    let mut stream = Box::pin(orchestrator.run(request));
    while let Some(event) = stream.next().await {
        if let ProgressEvent::Failed { message, .. } = &event {
            warn!(message = %message, "Sequence failed");
            failed = true;
        }
        println!("{}", serde_json::to_string(&event)?);
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

/// Check the rate window, printing headers and erroring on denial.
pub(crate) fn admit(
    store: &FileRateStore,
    identifier: &str,
    config: &GovernorConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let window = config.window();
    if let Err(err) = store.check(identifier, config.max_requests, window) {
        report_denial(store, identifier, config.max_requests, window);
        return Err(err.into());
    }
    Ok(())
}

fn report_denial(store: &FileRateStore, identifier: &str, max_requests: u32, window: Duration) {
    let headers = store.headers_for(identifier, max_requests, window);
    for (name, value) in headers.to_headers() {
        eprintln!("{name}: {value}");
    }
}
