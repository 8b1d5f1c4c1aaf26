//! Unified interface for three-panel comic sequence generation.
//!
//! Re-exports the workspace crates so applications can depend on a
//! single crate: core types, the continuity engine, the rate governor,
//! the generation orchestrator, and the OpenAI-compatible clients.

pub mod cli;

pub use vignette_continuity::{ContentSanitizer, PromptComposer, StyleCatalog};
pub use vignette_core::{
    ArtStyle, ArtStyleKey, GenerationRequest, PANELS_PER_SEQUENCE, PanelSlot, ProgressEvent,
    SanitizationResult, ShotType, STORY_MAX_CHARS, STORY_MIN_CHARS,
};
pub use vignette_error::{
    GenerationError, ProviderError, RateLimitError, ValidationError, VignetteError, VignetteResult,
};
pub use vignette_generation::{GenerationOrchestrator, PanelIterationEngine};
pub use vignette_interface::{ImageDriver, RateLimitHeaders, RateStore, TextDriver};
pub use vignette_models::{OpenAiChatClient, OpenAiImageClient};
pub use vignette_rate_limit::{GovernorConfig, MemoryRateStore};
