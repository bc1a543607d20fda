//! Analysis proxy server for SkinAI.
//!
//! Exposes `POST /api/analyze`, which accepts a base64 image payload,
//! forwards it to the hosted classification model, and responds with the
//! interpreted skin type and recommendation bundle.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use gateway::InferenceClient;

pub mod analysis;
pub mod config;
pub mod error;
pub mod routes;

pub use analysis::{AnalysisReport, AnalysisService};
pub use config::Config;
pub use error::AppError;

use routes::{analyze_handler, health_handler};

/// Base64 photo payloads run well past axum's 2 MB default body limit.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Build the application router around an analysis service.
pub fn app(service: Arc<AnalysisService>) -> Router {
    // The upload widget is served from a different origin in development,
    // so cross-origin POSTs must be allowed.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .with_state(service)
}

/// Start the proxy server and serve until a shutdown signal arrives.
pub async fn start_server(config: Config) -> Result<()> {
    let client = InferenceClient::new(config.model_url.clone(), config.api_token.clone());
    info!("forwarding analysis requests to {}", client.endpoint());

    let service = Arc::new(AnalysisService::new(client));
    let app = app(service);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
