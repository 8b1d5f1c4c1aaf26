//! Data transfer objects for OpenAI-compatible APIs.

use serde::{Deserialize, Serialize};

/// Image generation request.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRequest {
    /// Model identifier
    pub model: String,
    /// Complete generation prompt
    pub prompt: String,
    /// Number of images to generate
    pub n: u8,
    /// Output size, e.g. "1024x1024"
    pub size: String,
    /// Quality tier, e.g. "standard"
    pub quality: String,
    /// Rendering style, e.g. "vivid"
    pub style: String,
}

/// One generated image in the response.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageData {
    /// URL of the generated image
    #[serde(default)]
    pub url: Option<String>,
}

/// Image generation response.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageResponse {
    /// Generated images
    #[serde(default)]
    pub data: Vec<ImageData>,
}

/// A message in the OpenAI chat format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

/// Chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// A choice in the chat response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The message content
    pub message: ChatMessage,
}

/// Chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Response choices
    pub choices: Vec<ChatChoice>,
}
