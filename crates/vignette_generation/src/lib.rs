//! Generation orchestration for three-panel comic strips.
//!
//! The [`GenerationOrchestrator`] drives the end-to-end sequence —
//! sanitize, compose prompts, one image call per panel in order, optional
//! captions — and delivers progress as a lazy, one-way event stream. The
//! [`PanelIterationEngine`] regenerates single panels outside any
//! sequence.

pub mod captions;
mod iteration;
mod orchestrator;

pub use iteration::PanelIterationEngine;
pub use orchestrator::GenerationOrchestrator;
