//! Google Gemini provider
//!
//! Sends the prompt as a single user turn and asks for a JSON response via
//! `generationConfig.responseMimeType`. Also exposes the model listing used to
//! check which models an API key can reach.
//!
//! # Examples
//!
//! ```no_run
//! use nexus_llm::{GeminiProvider, ProviderSettings};
//! use std::time::Duration;
//!
//! let provider = GeminiProvider::new(
//!     &ProviderSettings::with_key("my-key"),
//!     Duration::from_secs(60),
//! ).unwrap();
//! ```

use crate::config::ProviderSettings;
use crate::http::{build_client, send_json};
use crate::{ProviderError, TextProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Gemini API base URL
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const PROVIDER_NAME: &str = "gemini";

/// Google Gemini API provider
pub struct GeminiProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
    timeout: Duration,
}

/// A model reachable with the configured key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiModel {
    /// Model id, without the `models/` prefix
    pub name: String,
    /// Human-readable name, when provided
    pub display_name: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    name: String,
    #[serde(rename = "displayName")]
    display_name: Option<String>,
    #[serde(rename = "supportedGenerationMethods", default)]
    supported_generation_methods: Vec<String>,
}

impl GeminiProvider {
    /// Create a Gemini provider from settings
    ///
    /// A missing key is not an error here; calls fail with
    /// [`ProviderError::Unavailable`] instead.
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

    fn require_key(&self) -> Result<&str, ProviderError> {
        self.api_key.as_deref().ok_or_else(|| ProviderError::Unavailable {
            provider: PROVIDER_NAME.to_string(),
        })
    }

    fn request_body(prompt: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        }
    }

    fn response_text(response: GenerateResponse) -> Result<String, ProviderError> {
        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ProviderError::InvalidResponse(
                "Gemini returned no candidate text".to_string(),
            ));
        }
        Ok(text)
    }

    /// List models that support `generateContent`
    pub async fn list_models(&self) -> Result<Vec<GeminiModel>, ProviderError> {
        let key = self.require_key()?;
        let url = format!("{}/models", self.endpoint);

        let response: ListModelsResponse = send_json(
            PROVIDER_NAME,
            self.client.get(&url).query(&[("key", key)]),
            self.timeout,
        )
        .await?;

        Ok(response
            .models
            .into_iter()
            .filter(|m| {
                m.supported_generation_methods
                    .iter()
                    .any(|method| method == "generateContent")
            })
            .map(|m| GeminiModel {
                name: m
                    .name
                    .strip_prefix("models/")
                    .unwrap_or(&m.name)
                    .to_string(),
                display_name: m.display_name,
            })
            .collect())
    }
}

#[async_trait]
impl TextProvider for GeminiProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let key = self.require_key()?;
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);

        debug!(model = %self.model, prompt_len = prompt.len(), "Sending request to Gemini");

        let response: GenerateResponse = send_json(
            PROVIDER_NAME,
            self.client
                .post(&url)
                .query(&[("key", key)])
                .json(&Self::request_body(prompt)),
            self.timeout,
        )
        .await?;

        Self::response_text(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(settings: ProviderSettings) -> GeminiProvider {
        GeminiProvider::new(&settings, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_gemini_defaults() {
        let provider = provider(ProviderSettings::with_key("k"));
        assert_eq!(provider.model(), DEFAULT_MODEL);
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert!(provider.is_configured());
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GeminiProvider::request_body("Write posts")).unwrap();
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Write posts");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"[{\"id\":1,"},{"text":"\"title\":\"a\"}]"}]}}]}"#,
        )
        .unwrap();
        let text = GeminiProvider::response_text(response).unwrap();
        assert_eq!(text, r#"[{"id":1,"title":"a"}]"#);
    }

    #[test]
    fn test_response_without_candidates_is_invalid() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(
            GeminiProvider::response_text(response),
            Err(ProviderError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_key_is_unavailable() {
        let provider = provider(ProviderSettings::default());
        assert!(!provider.is_configured());

        let err = provider.generate("prompt").await.unwrap_err();
        assert!(err.is_unavailable());

        let err = provider.list_models().await.unwrap_err();
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_communication_error() {
        let provider = provider(ProviderSettings {
            api_key: Some("k".to_string()),
            endpoint: Some("http://127.0.0.1:1".to_string()),
            model: None,
        });
        let result = provider.generate("test").await;
        assert!(matches!(result, Err(ProviderError::Communication(_))));
    }

    #[tokio::test]
    #[ignore] // Requires GEMINI_API_KEY and network access
    async fn test_gemini_generate_integration() {
        let settings = ProviderSettings {
            api_key: std::env::var("GEMINI_API_KEY").ok(),
            ..ProviderSettings::default()
        };
        let provider = provider(settings);
        let result = provider.generate("Return the JSON array [1,2,3]").await;
        assert!(result.is_ok());
    }
}
