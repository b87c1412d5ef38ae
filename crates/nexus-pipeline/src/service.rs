//! Public generation operations
//!
//! `GenerationService` wires prompts, the failover chain for each task, and
//! shape decoding into the operations callers use. Post and carousel
//! generation never fail: the worst case is simulated output.

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::image::{image_url, random_seed};
use crate::orchestrator::FailoverOrchestrator;
use crate::parser::{decode_posts, decode_slides, JsonExtractor};
use crate::prompt::PromptBuilder;
use crate::simulation::Simulation;
use crate::types::{Generated, ImagePrompt};
use nexus_domain::{CarouselRequest, CarouselSlide, GenerationRequest, ImageRequest, PostVariation};
use nexus_llm::{ProviderRegistry, ProviderStatus, TextProvider};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Topic returned when no provider can suggest one
pub const FALLBACK_TOPIC: &str = "The Future of AI Agents";

/// The generation pipeline's public surface
#[derive(Clone)]
pub struct GenerationService {
    orchestrator: FailoverOrchestrator,
    post_chain: Vec<Arc<dyn TextProvider>>,
    carousel_chain: Vec<Arc<dyn TextProvider>>,
    auxiliary: Option<Arc<dyn TextProvider>>,
    statuses: Vec<ProviderStatus>,
}

impl GenerationService {
    /// Create a service from explicit chains
    pub fn new(
        post_chain: Vec<Arc<dyn TextProvider>>,
        carousel_chain: Vec<Arc<dyn TextProvider>>,
        provider_timeout: Duration,
    ) -> Self {
        Self {
            orchestrator: FailoverOrchestrator::new(provider_timeout),
            post_chain,
            carousel_chain,
            auxiliary: None,
            statuses: Vec::new(),
        }
    }

    /// Build adapters from configuration and resolve every chain
    pub fn from_config(config: &PipelineConfig) -> Result<Self, PipelineError> {
        config.validate().map_err(PipelineError::Config)?;
        let registry = ProviderRegistry::from_config(&config.providers)?;
        Ok(Self::from_registry(&registry, config))
    }

    /// Resolve chains against an existing registry
    pub fn from_registry(registry: &ProviderRegistry, config: &PipelineConfig) -> Self {
        let service = Self::new(
            registry.chain(&config.chains.post),
            registry.chain(&config.chains.carousel),
            config.provider_timeout(),
        );
        let auxiliary = config.chains.auxiliary.and_then(|kind| registry.get(kind));

        info!(
            post_chain = ?config.chains.post,
            carousel_chain = ?config.chains.carousel,
            auxiliary = ?config.chains.auxiliary,
            "Generation service ready"
        );

        Self {
            auxiliary,
            statuses: registry.statuses(),
            ..service
        }
    }

    /// Set the provider used for image prompts and topic suggestions
    pub fn with_auxiliary(mut self, provider: Arc<dyn TextProvider>) -> Self {
        self.auxiliary = Some(provider);
        self
    }

    /// Replace the JSON extractor used on provider output
    pub fn with_extractor(mut self, extractor: Arc<dyn JsonExtractor>) -> Self {
        self.orchestrator = self.orchestrator.with_extractor(extractor);
        self
    }

    /// Provider names of the post chain, in order
    pub fn post_chain_names(&self) -> Vec<String> {
        chain_names(&self.post_chain)
    }

    /// Provider names of the carousel chain, in order
    pub fn carousel_chain_names(&self) -> Vec<String> {
        chain_names(&self.carousel_chain)
    }

    /// Configuration status of registered providers (empty for explicit chains)
    pub fn provider_statuses(&self) -> &[ProviderStatus] {
        &self.statuses
    }

    /// Generate exactly three post variations
    #[instrument(skip(self, request), fields(topic = %request.topic()))]
    pub async fn generate_post_variations(
        &self,
        request: &GenerationRequest,
    ) -> Generated<Vec<PostVariation>> {
        let prompt = PromptBuilder::post(request);
        self.orchestrator
            .run("post", &prompt, &self.post_chain, decode_posts, || {
                Simulation::posts(request.topic())
            })
            .await
    }

    /// Generate exactly `slide_count` carousel slides
    #[instrument(skip(self, request), fields(topic = %request.topic(), slides = request.slide_count()))]
    pub async fn generate_carousel_slides(
        &self,
        request: &CarouselRequest,
    ) -> Generated<Vec<CarouselSlide>> {
        let prompt = PromptBuilder::carousel(request);
        let expected = request.slide_count() as usize;
        self.orchestrator
            .run(
                "carousel",
                &prompt,
                &self.carousel_chain,
                |value| decode_slides(value, expected),
                || Simulation::slides(request.topic(), request.slide_count()),
            )
            .await
    }

    /// Build an image URL, refining the prompt with the auxiliary provider when possible
    ///
    /// Refinement is best effort: any failure falls back to the raw topic.
    pub async fn generate_image_prompt(
        &self,
        request: &ImageRequest,
    ) -> Result<ImagePrompt, PipelineError> {
        let refined = self
            .auxiliary_text(&PromptBuilder::image_description(request))
            .await;
        let prompt = refined.unwrap_or_else(|| request.topic().to_string());

        let image_url = image_url(&prompt, random_seed())?;
        debug!(%image_url, "Built image URL");
        Ok(ImagePrompt { image_url, prompt })
    }

    /// Suggest a trending topic, or [`FALLBACK_TOPIC`]
    pub async fn suggest_topic(&self) -> String {
        self.auxiliary_text(PromptBuilder::topic_suggestion())
            .await
            .map(|text| text.replace('"', "").trim().to_string())
            .filter(|topic| !topic.is_empty())
            .unwrap_or_else(|| FALLBACK_TOPIC.to_string())
    }

    async fn auxiliary_text(&self, prompt: &str) -> Option<String> {
        let provider = self.auxiliary.as_ref()?;
        match self.orchestrator.call(provider.as_ref(), prompt).await {
            Ok(text) => {
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
            Err(e) => {
                debug!(provider = provider.name(), error = %e, "Auxiliary call failed");
                None
            }
        }
    }
}

fn chain_names(chain: &[Arc<dyn TextProvider>]) -> Vec<String> {
    chain.iter().map(|p| p.name().to_string()).collect()
}
