//! Clients for OpenAI-compatible APIs.
//!
//! Covers the images/generations and chat/completions endpoint shapes
//! shared by OpenAI and compatible gateways.

mod chat;
mod dto;
mod image;

pub use chat::OpenAiChatClient;
pub use image::OpenAiImageClient;
