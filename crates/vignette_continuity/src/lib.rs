//! Visual continuity for three-panel comic generation.
//!
//! Image providers are stateless across calls, so character and style
//! consistency across a strip depends entirely on prompt text. This crate
//! owns the three pieces that make that work: the [`StyleCatalog`] of
//! fixed rendering instructions, the [`PromptComposer`] that assembles
//! per-panel prompts sharing identical style and character substrings,
//! and the [`ContentSanitizer`] that rewrites stories to reduce
//! content-policy rejections.

mod catalog;
mod composer;
mod sanitizer;

pub use catalog::StyleCatalog;
pub use composer::PromptComposer;
pub use sanitizer::ContentSanitizer;
