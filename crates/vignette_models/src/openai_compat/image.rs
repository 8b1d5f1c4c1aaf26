//! Image generation client.

use crate::openai_compat::dto::{ImageRequest, ImageResponse};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};
use vignette_error::{ProviderError, ProviderErrorKind};
use vignette_interface::ImageDriver;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/images/generations";
const DEFAULT_MODEL: &str = "dall-e-3";

/// Client for an OpenAI-compatible image generation endpoint.
///
/// Defaults match the strip's panel format: one 1024x1024 image per
/// call, standard quality, vivid style.
#[derive(Debug, Clone)]
pub struct OpenAiImageClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    size: String,
    quality: String,
    style: String,
}

impl OpenAiImageClient {
    /// Creates a new image client.
    #[instrument(skip(api_key), fields(model = %model))]
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        debug!(model = %model, url = %base_url, "Created image client");
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url,
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
            style: "vivid".to_string(),
        }
    }

    /// Creates a client from the `OPENAI_API_KEY` environment variable,
    /// with optional `VIGNETTE_IMAGE_MODEL` and `VIGNETTE_IMAGE_URL`
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
                ProviderError::new(ProviderErrorKind::MissingApiKey("openai-image".to_string()))
            })?;
        let model =
            std::env::var("VIGNETTE_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            std::env::var("VIGNETTE_IMAGE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(api_key, model, base_url))
    }

    /// Override the output size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Override the quality tier.
    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = quality.into();
        self
    }

    /// Override the rendering style.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ImageDriver for OpenAiImageClient {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate_image(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = ImageRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            n: 1,
            size: self.size.clone(),
            quality: self.quality.clone(),
            style: self.style.clone(),
        };

        debug!(prompt_chars = prompt.chars().count(), "Sending image request");

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
            error!(status = %status, error = %error_text, "Image API error");
            return Err(ProviderError::new(ProviderErrorKind::from_api_response(
                status.as_u16(),
                error_text,
            )));
        }

        let parsed: ImageResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse image response");
            ProviderError::new(ProviderErrorKind::ResponseParsing(e.to_string()))
        })?;

        parsed
            .data
            .into_iter()
            .find_map(|image| image.url)
            .ok_or_else(|| ProviderError::new(ProviderErrorKind::EmptyResponse))
    }

    fn provider_name(&self) -> &str {
        "openai-image"
    }
}
