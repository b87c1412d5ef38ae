//! Groq provider (OpenAI-compatible chat completions)
//!
//! Sends a system + user message pair; the system message pins the model to
//! minified JSON output.

use crate::config::ProviderSettings;
use crate::http::{build_client, send_json};
use crate::{ProviderError, TextProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Groq API base URL
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1";

/// Default Groq model
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// System instruction sent with every request
pub const SYSTEM_PROMPT: &str =
    "You are a JSON generator. Output strictly valid minified JSON. Do not output markdown.";

/// Sampling temperature; higher values make variations less repetitive
const TEMPERATURE: f32 = 0.7;

const PROVIDER_NAME: &str = "groq";

/// Groq chat-completions provider
pub struct GroqProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

impl GroqProvider {
    /// Create a Groq provider from settings
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

    /// Model used for generation
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Some(SYSTEM_PROMPT.to_string()),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Some(prompt.to_string()),
                },
            ],
            temperature: TEMPERATURE,
        }
    }

    fn response_text(response: ChatResponse) -> Result<String, ProviderError> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| ProviderError::InvalidResponse("Groq returned an empty completion".to_string()))
    }
}

#[async_trait]
impl TextProvider for GroqProvider {
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
        let url = format!("{}/chat/completions", self.endpoint);

        debug!(model = %self.model, prompt_len = prompt.len(), "Sending request to Groq");

        let response: ChatResponse = send_json(
            PROVIDER_NAME,
            self.client
                .post(&url)
                .bearer_auth(key)
                .json(&self.request_body(prompt)),
            self.timeout,
        )
        .await?;

        Self::response_text(response)
    }
}
