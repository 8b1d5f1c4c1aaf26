//! Chat completion client, used for caption generation.

use crate::openai_compat::dto::{ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};
use vignette_error::{ProviderError, ProviderErrorKind};
use vignette_interface::TextDriver;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4";

/// Client for an OpenAI-compatible chat completion endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiChatClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiChatClient {
    /// Creates a new chat client.
    #[instrument(skip(api_key), fields(model = %model))]
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        debug!(model = %model, url = %base_url, "Created chat client");
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url,
            temperature: 0.8,
            max_tokens: 200,
        }
    }

    /// Creates a client from the `OPENAI_API_KEY` environment variable,
    /// with optional `VIGNETTE_TEXT_MODEL` and `VIGNETTE_TEXT_URL`
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is unset or empty.
    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ProviderError::new(ProviderErrorKind::MissingApiKey("openai-chat".to_string()))
            })?;
        let model =
            std::env::var("VIGNETTE_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            std::env::var("VIGNETTE_TEXT_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(api_key, model, base_url))
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Override the completion token limit.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextDriver for OpenAiChatClient {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
        };

        debug!(prompt_chars = prompt.chars().count(), "Sending chat request");

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ProviderError::new(ProviderErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Chat API error");
            return Err(ProviderError::new(ProviderErrorKind::from_api_response(
                status.as_u16(),
                error_text,
            )));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse chat response");
            ProviderError::new(ProviderErrorKind::ResponseParsing(e.to_string()))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| ProviderError::new(ProviderErrorKind::EmptyResponse))
    }

    fn provider_name(&self) -> &str {
        "openai-chat"
    }
}
