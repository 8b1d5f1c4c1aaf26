//! Core data types for the Vignette comic generation library.
//!
//! This crate provides the foundation data types used across all Vignette
//! crates: art style keys, panel slots, generation requests, sanitization
//! results, and the progress event stream vocabulary.

mod event;
mod panel;
mod request;
mod sanitize;
mod style;

pub use event::ProgressEvent;
pub use panel::{PANELS_PER_SEQUENCE, PanelSlot, ShotType};
pub use request::{GenerationRequest, STORY_MAX_CHARS, STORY_MIN_CHARS};
pub use sanitize::SanitizationResult;
pub use style::{ArtStyle, ArtStyleKey};
