//! Nexus Server
//!
//! HTTP surface for the generation pipeline: post variations, carousels,
//! image prompts, topic suggestions, and trends.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use handlers::{create_router, AppState};
use nexus_pipeline::{GenerationService, PipelineError};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Pipeline could not be built
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the application with middleware
pub fn build_app(service: GenerationService) -> axum::Router {
    let state = AppState {
        service: Arc::new(service),
    };

    create_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
///
/// Builds the provider registry and failover chains from configuration,
/// then serves until the process exits.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Nexus Server");
    info!("Bind address: {}", config.bind_addr());
    info!(
        "Provider timeout: {} seconds",
        config.pipeline.provider_timeout_secs
    );

    let service = GenerationService::from_config(&config.pipeline)?;
    for status in service.provider_statuses() {
        if status.configured {
            info!(provider = %status.name, "Provider configured");
        } else {
            info!(provider = %status.name, "Provider has no API key, it will be skipped");
        }
    }

    let app = build_app(service);

    // Bind and serve
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config() {
        let config = ServerConfig::default_test_config();
        assert!(config.pipeline.validate().is_ok());
        assert!(GenerationService::from_config(&config.pipeline).is_ok());
    }
}
