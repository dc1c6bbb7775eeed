//! Salary Estimator API
//!
//! A stateless scoring service wrapping a pre-trained salary regression.
//! The model artifact is loaded once at startup into an immutable handle;
//! every request runs the same synchronous pipeline against it.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::ArtifactEstimator;
use app::ScoringService;
use config::Config;
use domain::Estimator;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub scoring: Arc<ScoringService>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/predict", post(handlers::predict))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,salary_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Salary Estimator API...");

    let config = Config::from_env();

    // A load failure degrades the service instead of aborting it: /health
    // reports unavailable and /predict fails fast until a restart.
    let estimator: Option<Arc<dyn Estimator>> = match ArtifactEstimator::load(&config.model_path) {
        Ok(model) => {
            tracing::info!(path = %config.model_path, "Model loaded");
            Some(Arc::new(model))
        }
        Err(e) => {
            tracing::error!(path = %config.model_path, "Model loading failed: {}", e);
            None
        }
    };

    let state = AppState {
        scoring: Arc::new(ScoringService::new(estimator)),
    };
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
