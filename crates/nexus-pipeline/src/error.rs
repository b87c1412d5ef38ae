//! Error types for the generation pipeline

use nexus_llm::ProviderError;
use thiserror::Error;

/// Failure to recover structured data from provider output
///
/// The orchestrator treats every variant exactly like a provider failure:
/// the attempt is discarded and the next provider is tried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// Nothing resembling JSON in the response
    #[error("No JSON found in response")]
    NoJson,

    /// JSON could not be parsed, even after sanitizing
    #[error("JSON parse error: {0}")]
    Parse(String),

    /// Parsed JSON does not match the expected output shape
    #[error("Unexpected shape: {0}")]
    Shape(String),
}

/// Why a single provider attempt was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttemptFailure {
    /// The provider call itself failed
    #[error("{0}")]
    Provider(#[from] ProviderError),

    /// The provider answered but its output was unusable
    #[error("{0}")]
    Extraction(#[from] ExtractError),
}

impl AttemptFailure {
    /// True when the provider was skipped for lack of a credential
    pub fn is_unavailable(&self) -> bool {
        matches!(self, AttemptFailure::Provider(e) if e.is_unavailable())
    }
}

/// Errors surfaced by the pipeline to its callers
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Invalid pipeline configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A provider adapter could not be constructed
    #[error("Provider setup error: {0}")]
    Provider(#[from] ProviderError),

    /// Image URL could not be built
    #[error("Image URL error: {0}")]
    ImageUrl(String),
}
