//! HTTP request handlers for the generation service.
//!
//! Every response body carries a `success` flag. Generation endpoints also
//! report which provider produced the data, or `simulation`.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use nexus_domain::{
    CarouselRequest, CarouselSlide, DomainError, GenerationRequest, ImageRequest, Length,
    PostVariation, Tone, Trend, DEFAULT_SLIDE_COUNT,
};
use nexus_llm::ProviderStatus;
use nexus_pipeline::{GenerationService, Generated, PipelineError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Banner served at `/`
pub const BANNER: &str = "Nexus AI Multi-Model Engine";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Generation pipeline
    pub service: Arc<GenerationService>,
}

/// Post generation request
#[derive(Debug, Deserialize)]
pub struct GeneratePostBody {
    /// Topic to write about
    #[serde(default)]
    pub topic: String,
    /// Tone and length
    #[serde(default)]
    pub options: PostOptions,
}

/// Optional post settings; missing values use the defaults
#[derive(Debug, Default, Deserialize)]
pub struct PostOptions {
    /// Tone name (e.g. "Viral/Hook")
    pub tone: Option<String>,
    /// Length name (e.g. "Long")
    pub length: Option<String>,
}

/// Carousel generation request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCarouselBody {
    /// Topic of the carousel
    #[serde(default)]
    pub topic: String,
    /// Number of slides (3 to 10, default 5)
    pub slide_count: Option<u32>,
}

/// Image prompt request
#[derive(Debug, Deserialize)]
pub struct GenerateImageBody {
    /// Subject of the image
    #[serde(default)]
    pub topic: String,
    /// Visual style (default "Photorealistic")
    pub style: Option<String>,
}

/// Successful generation response
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationResponse<T> {
    /// Always true
    pub success: bool,
    /// Generated items
    pub data: T,
    /// Provider name, or "simulation"
    pub source: String,
}

impl<T> From<Generated<T>> for GenerationResponse<T> {
    fn from(generated: Generated<T>) -> Self {
        GenerationResponse {
            success: true,
            source: generated.source.to_string(),
            data: generated.data,
        }
    }
}

/// Image prompt response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    /// Always true
    pub success: bool,
    /// Renderable image URL
    pub image_url: String,
    /// Description the URL was built from
    pub prompt: String,
}

/// Topic suggestion response
#[derive(Debug, Serialize, Deserialize)]
pub struct TopicResponse {
    /// Always true
    pub success: bool,
    /// Suggested topic
    pub topic: String,
}

/// Trend listing response
#[derive(Debug, Serialize, Deserialize)]
pub struct TrendsResponse {
    /// Always true
    pub success: bool,
    /// Trending topics
    pub data: Vec<Trend>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall status; always "ok" since the simulation keeps generation available
    pub status: String,
    /// Which providers have credentials
    pub providers: Vec<ProviderStatus>,
    /// Post failover chain, in order
    pub post_chain: Vec<String>,
    /// Carousel failover chain, in order
    pub carousel_chain: Vec<String>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Caller sent invalid input
    InvalidRequest(DomainError),
    /// Request body was not the expected JSON
    MalformedBody(JsonRejection),
    /// Pipeline failed outside the failover path
    PipelineError(PipelineError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidRequest(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::MalformedBody(e) => (StatusCode::BAD_REQUEST, e.body_text()),
            AppError::PipelineError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        let body = Json(ErrorResponse {
            success: false,
            error: message,
        });
        (status, body).into_response()
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::InvalidRequest(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::MalformedBody(e)
    }
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        AppError::PipelineError(e)
    }
}

/// Static trend listing
pub fn trends() -> Vec<Trend> {
    vec![
        Trend::new(1, "AI Agents", "Tech", "High", "Agents are the new Apps."),
        Trend::new(2, "Sustainable Tech", "Green", "Med", "Green computing is rising."),
        Trend::new(3, "Deep Work", "Productivity", "High", "Focus is the new currency."),
    ]
}

/// GET / - Banner
async fn index() -> &'static str {
    BANNER
}

/// GET /health - Provider configuration and chains
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        providers: state.service.provider_statuses().to_vec(),
        post_chain: state.service.post_chain_names(),
        carousel_chain: state.service.carousel_chain_names(),
    })
}

/// POST /api/generate - Three post variations
async fn generate_posts(
    State(state): State<AppState>,
    body: Result<Json<GeneratePostBody>, JsonRejection>,
) -> Result<Json<GenerationResponse<Vec<PostVariation>>>, AppError> {
    let Json(body) = body?;
    let tone = match body.options.tone.as_deref() {
        Some(tone) => tone.parse::<Tone>()?,
        None => Tone::default(),
    };
    let length = match body.options.length.as_deref() {
        Some(length) => length.parse::<Length>()?,
        None => Length::default(),
    };
    let request = GenerationRequest::new(body.topic, tone, length)?;

    let generated = state.service.generate_post_variations(&request).await;
    info!(source = %generated.source, "Served post variations");

    Ok(Json(generated.into()))
}

/// POST /api/generate-carousel - Carousel slides
async fn generate_carousel(
    State(state): State<AppState>,
    body: Result<Json<GenerateCarouselBody>, JsonRejection>,
) -> Result<Json<GenerationResponse<Vec<CarouselSlide>>>, AppError> {
    let Json(body) = body?;
    let request = CarouselRequest::new(
        body.topic,
        body.slide_count.unwrap_or(DEFAULT_SLIDE_COUNT),
    )?;

    let generated = state.service.generate_carousel_slides(&request).await;
    info!(source = %generated.source, slides = generated.data.len(), "Served carousel");

    Ok(Json(generated.into()))
}

/// POST /api/generate-image - Image URL from a refined prompt
async fn generate_image(
    State(state): State<AppState>,
    body: Result<Json<GenerateImageBody>, JsonRejection>,
) -> Result<Json<ImageResponse>, AppError> {
    let Json(body) = body?;
    let request = ImageRequest::new(body.topic, body.style)?;
    let image = state.service.generate_image_prompt(&request).await?;

    Ok(Json(ImageResponse {
        success: true,
        image_url: image.image_url,
        prompt: image.prompt,
    }))
}

/// GET /api/suggest-topic - One trending topic
async fn suggest_topic(State(state): State<AppState>) -> Json<TopicResponse> {
    Json(TopicResponse {
        success: true,
        topic: state.service.suggest_topic().await,
    })
}

/// GET /api/trends - Static trend list
async fn list_trends() -> Json<TrendsResponse> {
    Json(TrendsResponse {
        success: true,
        data: trends(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/generate", post(generate_posts))
        .route("/api/generate-carousel", post(generate_carousel))
        .route("/api/generate-image", post(generate_image))
        .route("/api/suggest-topic", get(suggest_topic))
        .route("/api/trends", get(list_trends))
        .with_state(state)
}
