//! Nexus Generation Pipeline
//!
//! Turns a topic into social content by asking external text providers,
//! with ordered failover and a deterministic fallback.
//!
//! # Overview
//!
//! Each request renders one prompt and walks a failover chain of providers
//! in priority order. The first provider whose output can be recovered as
//! JSON of exactly the requested shape wins. If every provider fails, the
//! simulation produces placeholder content, so post and carousel generation
//! always return a complete result.
//!
//! # Architecture
//!
//! ```text
//! Request → PromptBuilder → FailoverOrchestrator ─┬→ Provider 1 → JsonExtractor → decode
//!                                                 ├→ Provider 2 → ...
//!                                                 └→ Simulation
//! ```
//!
//! # Key Features
//!
//! - **Per-task chains**: posts and carousels each have their own configured order
//! - **Tolerant extraction**: code fences, chatty preambles, and raw newlines
//!   inside strings are recovered
//! - **All-or-nothing output**: a provider's answer is accepted in full or discarded
//! - **Per-provider timeout**: a hung provider cannot stall the chain
//!
//! # Example Usage
//!
//! ```
//! use nexus_domain::{GenerationRequest, Length, Tone};
//! use nexus_llm::{MockProvider, TextProvider};
//! use nexus_pipeline::GenerationService;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let chain: Vec<Arc<dyn TextProvider>> = vec![Arc::new(MockProvider::failing("flaky"))];
//! let service = GenerationService::new(chain, Vec::new(), Duration::from_secs(30));
//!
//! let request = GenerationRequest::new("Remote Work", Tone::Professional, Length::Medium).unwrap();
//! let result = service.generate_post_variations(&request).await;
//!
//! assert!(result.is_simulated());
//! assert_eq!(result.data.len(), 3);
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod image;
mod orchestrator;
mod parser;
mod prompt;
mod service;
mod simulation;
mod types;


pub use config::{ChainConfig, PipelineConfig, DEFAULT_PROVIDER_TIMEOUT_SECS};
pub use error::{AttemptFailure, ExtractError, PipelineError};
pub use image::image_url;
pub use orchestrator::FailoverOrchestrator;
pub use parser::{decode_posts, decode_slides, extract_json, BracketSliceExtractor, JsonExtractor};
pub use prompt::PromptBuilder;
pub use service::{GenerationService, FALLBACK_TOPIC};
pub use simulation::Simulation;
pub use types::{FailedAttempt, Generated, ImagePrompt, Source, SIMULATION_SOURCE};
