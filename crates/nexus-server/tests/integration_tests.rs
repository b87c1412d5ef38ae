//! Integration tests for the HTTP server

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use nexus_domain::{CarouselSlide, PostVariation};
use nexus_llm::{MockProvider, TextProvider};
use nexus_pipeline::{GenerationService, PipelineConfig};
use nexus_server::build_app;
use nexus_server::handlers::{
    ErrorResponse, GenerationResponse, HealthCheckResponse, ImageResponse, TopicResponse,
    TrendsResponse,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt; // for oneshot

/// App with no credentials: every request falls back to simulation
fn simulated_app() -> Router {
    build_app(GenerationService::from_config(&PipelineConfig::default()).unwrap())
}

/// App whose providers are scripted mocks
fn mocked_app(posts: &str, slides: &str, auxiliary: &str) -> Router {
    let service = GenerationService::new(
        vec![
            Arc::new(MockProvider::failing("gemini")) as Arc<dyn TextProvider>,
            Arc::new(MockProvider::new("groq", posts)) as Arc<dyn TextProvider>,
        ],
        vec![Arc::new(MockProvider::new("groq", slides)) as Arc<dyn TextProvider>],
        Duration::from_secs(5),
    )
    .with_auxiliary(Arc::new(MockProvider::new("groq", auxiliary)));
    build_app(service)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn read_json<T: DeserializeOwned>(response: axum::response::Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let response = simulated_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthCheckResponse = read_json(response).await;
    assert_eq!(health.status, "ok");
    assert_eq!(health.providers.len(), 3);
    assert!(health.providers.iter().all(|p| !p.configured));
    assert_eq!(health.post_chain, vec!["gemini", "groq", "cohere"]);
    assert_eq!(health.carousel_chain, vec!["groq", "gemini"]);
}

#[tokio::test]
async fn test_index_banner() {
    let response = simulated_app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"Nexus AI Multi-Model Engine");
}

#[tokio::test]
async fn test_generate_posts_simulated() {
    let request = post_json(
        "/api/generate",
        r#"{"topic": "Remote Work", "options": {"tone": "Professional", "length": "Medium"}}"#,
    );

    let response = simulated_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: GenerationResponse<Vec<PostVariation>> = read_json(response).await;
    assert!(body.success);
    assert_eq!(body.source, "simulation");
    assert_eq!(body.data.len(), 3);
    assert!(body.data.iter().all(|p| p.content.contains("Remote Work")));
}

#[tokio::test]
async fn test_generate_posts_without_options() {
    let request = post_json("/api/generate", r#"{"topic": "Deep Work"}"#);

    let response = simulated_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_generate_posts_from_provider() {
    let posts = r#"[{"id":1,"title":"A","content":"a"},{"id":2,"title":"B","content":"b"},{"id":3,"title":"C","content":"c"}]"#;
    let request = post_json(
        "/api/generate",
        r#"{"topic": "Rust", "options": {"tone": "Viral/Hook", "length": "Short"}}"#,
    );

    let response = mocked_app(posts, "[]", "").oneshot(request).await.unwrap();
    let body: GenerationResponse<Vec<PostVariation>> = read_json(response).await;

    assert_eq!(body.source, "groq");
    assert_eq!(body.data[1].title, "B");
}

#[tokio::test]
async fn test_generate_posts_empty_topic() {
    let request = post_json("/api/generate", r#"{"topic": "   "}"#);

    let response = simulated_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = read_json(response).await;
    assert!(!body.success);
    assert_eq!(body.error, "Topic must not be empty");
}

#[tokio::test]
async fn test_generate_carousel_default_count() {
    let request = post_json("/api/generate-carousel", r#"{"topic": "Deep Work"}"#);

    let response = simulated_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: GenerationResponse<Vec<CarouselSlide>> = read_json(response).await;
    assert_eq!(body.source, "simulation");
    assert_eq!(body.data.len(), 5);
    assert_eq!(body.data[0].id, 1);
    assert_eq!(body.data[4].id, 5);
}

#[tokio::test]
async fn test_generate_carousel_short_answer_rejected() {
    let four = r#"[{"title":"1","content":"a"},{"title":"2","content":"b"},{"title":"3","content":"c"},{"title":"4","content":"d"}]"#;
    let request = post_json(
        "/api/generate-carousel",
        r#"{"topic": "Deep Work", "slideCount": 5}"#,
    );

    let response = mocked_app("[]", four, "").oneshot(request).await.unwrap();
    let body: GenerationResponse<Vec<CarouselSlide>> = read_json(response).await;

    assert_eq!(body.source, "simulation");
    assert_eq!(body.data.len(), 5);
}

#[tokio::test]
async fn test_generate_carousel_out_of_range() {
    for count in [2, 11] {
        let request = post_json(
            "/api/generate-carousel",
            &format!(r#"{{"topic": "Deep Work", "slideCount": {}}}"#, count),
        );

        let response = simulated_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_generate_carousel_malformed_slide_count() {
    for slide_count in ["-1", "\"five\"", "4.5"] {
        let request = post_json(
            "/api/generate-carousel",
            &format!(r#"{{"topic": "Deep Work", "slideCount": {}}}"#, slide_count),
        );

        let response = simulated_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = read_json(response).await;
        assert!(!body.success);
        assert!(body.error.contains("slideCount"), "{}", body.error);
    }
}

#[tokio::test]
async fn test_generate_posts_non_string_tone() {
    let request = post_json(
        "/api/generate",
        r#"{"topic": "Remote Work", "options": {"tone": 7}}"#,
    );

    let response = simulated_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = read_json(response).await;
    assert!(!body.success);
}

#[tokio::test]
async fn test_generate_wrong_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header("content-type", "text/plain")
        .body(Body::from(r#"{"topic": "Remote Work"}"#))
        .unwrap();

    let response = simulated_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = read_json(response).await;
    assert!(!body.success);
    assert!(!body.error.is_empty());
}

#[tokio::test]
async fn test_generate_image_malformed_body() {
    let request = post_json("/api/generate-image", r#"{"topic": "AI", "style": "#);

    let response = simulated_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_image() {
    let request = post_json(
        "/api/generate-image",
        r#"{"topic": "AI Agents", "style": "Cyberpunk"}"#,
    );

    let response = mocked_app("[]", "[]", "Neon robots at a desk")
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ImageResponse = read_json(response).await;
    assert!(body.success);
    assert_eq!(body.prompt, "Neon robots at a desk");
    assert!(body
        .image_url
        .starts_with("https://image.pollinations.ai/prompt/Neon%20robots%20at%20a%20desk?seed="));
}

#[tokio::test]
async fn test_suggest_topic_fallback() {
    let response = simulated_app()
        .oneshot(get("/api/suggest-topic"))
        .await
        .unwrap();

    let body: TopicResponse = read_json(response).await;
    assert!(body.success);
    assert_eq!(body.topic, "The Future of AI Agents");
}

#[tokio::test]
async fn test_trends() {
    let response = simulated_app().oneshot(get("/api/trends")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: TrendsResponse = read_json(response).await;
    assert_eq!(body.data.len(), 3);
    assert_eq!(body.data[1].topic, "Sustainable Tech");
}

#[tokio::test]
async fn test_unknown_route() {
    let response = simulated_app().oneshot(get("/api/history")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
