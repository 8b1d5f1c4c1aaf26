//! Mock drivers shared by the generation tests.

use async_trait::async_trait;
use std::sync::Mutex;
use vignette_error::{ProviderError, ProviderErrorKind};
use vignette_interface::{ImageDriver, TextDriver};

/// Scripted image driver that records every prompt it receives.
pub struct MockImageDriver {
    prompts: Mutex<Vec<String>>,
    fail_at_call: Option<u32>,
    failure_kind: ProviderErrorKind,
}

impl MockImageDriver {
    /// A driver that succeeds on every call.
    pub fn new() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            fail_at_call: None,
            failure_kind: ProviderErrorKind::EmptyResponse,
        }
    }

    /// Fail the `n`th call (1-indexed) with a transient HTTP error.
    pub fn failing_at(call: u32) -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            fail_at_call: Some(call),
            failure_kind: ProviderErrorKind::Http {
                status: 503,
                message: "service unavailable".to_string(),
            },
        }
    }

    /// Fail the `n`th call with a content-policy rejection.
    pub fn policy_failing_at(call: u32) -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            fail_at_call: Some(call),
            failure_kind: ProviderErrorKind::ContentPolicy(
                "prompt rejected by safety system".to_string(),
            ),
        }
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageDriver for MockImageDriver {
    async fn generate_image(&self, prompt: &str) -> Result<String, ProviderError> {
        let call = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.to_string());
            prompts.len() as u32
        };
        if self.fail_at_call == Some(call) {
            return Err(ProviderError::new(self.failure_kind.clone()));
        }
        Ok(format!("https://img.test/panel-{call}.png"))
    }

    fn provider_name(&self) -> &str {
        "mock-image"
    }
}

/// Text driver returning a fixed response.
pub struct MockTextDriver {
    response: Result<String, ProviderErrorKind>,
}

impl MockTextDriver {
    pub fn returning(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: Err(ProviderErrorKind::Http {
                status: 500,
                message: "caption model offline".to_string(),
            }),
        }
    }
}

#[async_trait]
impl TextDriver for MockTextDriver {
    async fn generate_text(&self, _prompt: &str) -> Result<String, ProviderError> {
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(kind) => Err(ProviderError::new(kind.clone())),
        }
    }

    fn provider_name(&self) -> &str {
        "mock-text"
    }
}
