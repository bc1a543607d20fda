//! HTTP handlers for the analysis proxy.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::analysis::{AnalysisReport, AnalysisService};
use crate::error::AppError;

/// Body of `POST /api/analyze`: the image as a base64 data URL.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub image: String,
}

/// Run the analysis pipeline for an uploaded image.
pub async fn analyze_handler(
    State(service): State<Arc<AnalysisService>>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let report = service.analyze(&payload.image).await?;
    Ok(Json(report))
}

/// Liveness probe.
pub async fn health_handler() -> impl IntoResponse {
    StatusCode::OK
}
