//! Cohere provider
//!
//! Cohere's chat endpoint takes a single message, so the JSON-only instruction
//! is appended to the prompt as plain language. Prompts that ask for plain
//! text (they contain [`TEXT_ONLY_MARKER`]) are sent unchanged.

use crate::config::ProviderSettings;
use crate::http::{build_client, send_json};
use crate::{ProviderError, TextProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Cohere API base URL
pub const DEFAULT_ENDPOINT: &str = "https://api.cohere.com/v1";

/// Default Cohere model
pub const DEFAULT_MODEL: &str = "command-r-plus";

/// Suffix appended to prompts that expect a JSON array
pub const JSON_ONLY_SUFFIX: &str = " Respond with valid JSON array only. No markdown.";

/// Marks a prompt whose answer is plain text
pub const TEXT_ONLY_MARKER: &str = "No JSON.";

const PROVIDER_NAME: &str = "cohere";

/// Cohere chat provider
pub struct CohereProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    message: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    text: String,
}

impl CohereProvider {
    /// Create a Cohere provider from settings
    pub fn new(settings: &ProviderSettings, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(timeout)?,
            api_key: settings.api_key().map(str::to_string),
            model: settings
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            endpoint: settings
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout,
        })
    }

    fn request_body(&self, prompt: &str) -> ChatRequest {
        let message = if prompt.contains(TEXT_ONLY_MARKER) {
            prompt.to_string()
        } else {
            format!("{}{}", prompt, JSON_ONLY_SUFFIX)
        };
        ChatRequest {
            message,
            model: self.model.clone(),
        }
    }
}

#[async_trait]
impl TextProvider for CohereProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let key = self.api_key.as_deref().ok_or_else(|| ProviderError::Unavailable {
            provider: PROVIDER_NAME.to_string(),
        })?;
        let url = format!("{}/chat", self.endpoint);

        debug!(model = %self.model, prompt_len = prompt.len(), "Sending request to Cohere");

        let response: ChatResponse = send_json(
            PROVIDER_NAME,
            self.client
                .post(&url)
                .bearer_auth(key)
                .json(&self.request_body(prompt)),
            self.timeout,
        )
        .await?;

        if response.text.trim().is_empty() {
            return Err(ProviderError::InvalidResponse(
                "Cohere returned empty text".to_string(),
            ));
        }
        Ok(response.text)
    }
}
