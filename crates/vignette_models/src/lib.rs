//! Provider clients for the Vignette comic generation library.
//!
//! Currently one family: OpenAI-compatible HTTP APIs for image
//! generation and chat completion. The clients implement the
//! `vignette_interface` driver traits, so the orchestration core never
//! sees provider specifics.

mod openai_compat;

pub use openai_compat::{OpenAiChatClient, OpenAiImageClient};
