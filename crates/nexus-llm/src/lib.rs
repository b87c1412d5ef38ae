//! Nexus LLM Provider Layer
//!
//! Pluggable text-generation backends behind a single capability:
//! "generate text from a prompt, returning raw text".
//!
//! # Architecture
//!
//! Every backend implements [`TextProvider`]. Adapters are stateless per call,
//! validate their own credential before touching the network, and never retry
//! internally: one failed call is one failure, surfaced immediately to the
//! caller. None of them validate the JSON they return.
//!
//! # Providers
//!
//! - `GeminiProvider`: Google Gemini, single combined prompt, JSON response mode
//! - `GroqProvider`: Groq chat completions with a JSON-only system message
//! - `CohereProvider`: Cohere chat with a JSON-only suffix on the prompt
//! - `MockProvider`: Deterministic mock for testing
//!
//! # Examples
//!
//! ```
//! use nexus_llm::{MockProvider, TextProvider};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let provider = MockProvider::new("mock", "Hello from LLM!");
//! let result = provider.generate("test prompt").await.unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod cohere;
pub mod config;
pub mod gemini;
pub mod groq;
mod http;
pub mod registry;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

pub use cohere::CohereProvider;
pub use config::{ProviderSettings, ProvidersConfig};
pub use gemini::{GeminiModel, GeminiProvider};
pub use groq::GroqProvider;
pub use registry::{ProviderKind, ProviderRegistry, ProviderStatus};

/// Errors that can occur during a provider call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Required credential is absent; detected before any network call
    #[error("Provider {provider} unavailable: no API key configured")]
    Unavailable {
        /// Provider name
        provider: String,
    },

    /// Network or transport failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// Provider refused the call because of rate limiting
    #[error("Rate limit exceeded for {provider}")]
    RateLimited {
        /// Provider name
        provider: String,
    },

    /// Non-success HTTP status
    #[error("HTTP {status}: {body}")]
    Http {
        /// Status code
        status: u16,
        /// Response body, as returned
        body: String,
    },

    /// Provider answered, but the envelope carried no usable text
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Call did not complete in time
    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

impl ProviderError {
    /// True for failures known before any network activity
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ProviderError::Unavailable { .. })
    }
}

/// A text-generation backend
///
/// Implementations must be cheap to share (`Send + Sync`) and hold no
/// per-request state, so one instance can serve concurrent requests.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Stable provider name used in logs and responses (e.g. "gemini")
    fn name(&self) -> &str;

    /// Whether the provider's credential is present
    fn is_configured(&self) -> bool;

    /// Generate raw text for `prompt`
    ///
    /// # Errors
    ///
    /// - [`ProviderError::Unavailable`] when the credential is absent
    /// - any other variant when the call fails or times out
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

#[derive(Debug, Clone)]
enum MockBehavior {
    Respond(String),
    Fail,
    Unconfigured,
}

/// Mock provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Clones share their call count and call log.
///
/// # Examples
///
/// ```
/// use nexus_llm::{MockProvider, TextProvider};
///
/// let provider = MockProvider::failing("flaky");
/// assert_eq!(provider.name(), "flaky");
/// assert!(provider.is_configured());
///
/// let provider = MockProvider::unconfigured("keyless");
/// assert!(!provider.is_configured());
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    name: String,
    behavior: MockBehavior,
    responses: Arc<Mutex<HashMap<String, String>>>,
    delay: Option<Duration>,
    call_count: Arc<AtomicUsize>,
    call_log: Option<Arc<Mutex<Vec<String>>>>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

impl MockProvider {
    /// Create a mock that returns `response` for every prompt
    pub fn new(name: impl Into<String>, response: impl Into<String>) -> Self {
        Self::with_behavior(name, MockBehavior::Respond(response.into()))
    }

    /// Create a mock whose every call fails with a communication error
    pub fn failing(name: impl Into<String>) -> Self {
        Self::with_behavior(name, MockBehavior::Fail)
    }

    /// Create a mock that behaves like a provider without a credential
    pub fn unconfigured(name: impl Into<String>) -> Self {
        Self::with_behavior(name, MockBehavior::Unconfigured)
    }

    fn with_behavior(name: impl Into<String>, behavior: MockBehavior) -> Self {
        Self {
            name: name.into(),
            behavior,
            responses: Arc::new(Mutex::new(HashMap::new())),
            delay: None,
            call_count: Arc::new(AtomicUsize::new(0)),
            call_log: None,
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(prompt.into(), response.into());
        }
    }

    /// Sleep for `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Append this provider's name to `log` on every call
    pub fn with_call_log(mut self, log: Arc<Mutex<Vec<String>>>) -> Self {
        self.call_log = Some(log);
        self
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }

    /// Prompt received by the most recent call
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("mock", "Default mock response")
    }
}

#[async_trait]
impl TextProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_configured(&self) -> bool {
        !matches!(self.behavior, MockBehavior::Unconfigured)
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(log) = &self.call_log {
            if let Ok(mut log) = log.lock() {
                log.push(self.name.clone());
            }
        }
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }

        if let MockBehavior::Unconfigured = self.behavior {
            return Err(ProviderError::Unavailable {
                provider: self.name.clone(),
            });
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self
            .responses
            .lock()
            .ok()
            .and_then(|responses| responses.get(prompt).cloned());
        if let Some(response) = scripted {
            return Ok(response);
        }

        match &self.behavior {
            MockBehavior::Respond(response) => Ok(response.clone()),
            MockBehavior::Fail => Err(ProviderError::Communication("Mock error".to_string())),
            MockBehavior::Unconfigured => Err(ProviderError::Unavailable {
                provider: self.name.clone(),
            }),
        }
    }
}
