//! # Analysis Orchestrator
//!
//! Coordinates the whole analysis pipeline for one request:
//! 1. Decode the inbound image payload (data URL → bytes)
//! 2. Submit the bytes to the inference gateway
//! 3. Interpret the scored labels into a category and bundle
//! 4. Assemble the report returned to the caller
//!
//! The orchestrator owns the gateway client and the catalog, so the
//! interpretation core stays free of transport concerns and the whole chain
//! is testable against a mock upstream.

use std::time::Instant;

use serde::Serialize;
use tracing::info;

use catalog::{Catalog, Recommendation, SkinType};
use gateway::{decode_image_payload, GatewayError, InferenceClient};
use interpreter::{interpret, ScoredLabel};

use crate::error::AppError;

/// Final analysis report returned to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Raw scored labels exactly as the model returned them.
    pub labels: Vec<ScoredLabel>,
    /// The winning label the category was derived from.
    pub top_label: ScoredLabel,
    pub skin_type: SkinType,
    pub recommendation: Recommendation,
}

/// Coordinates gateway and interpreter for analysis requests.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    client: InferenceClient,
    catalog: Catalog,
}

impl AnalysisService {
    /// Create a service around a connected inference client.
    pub fn new(client: InferenceClient) -> Self {
        Self {
            client,
            catalog: Catalog::new(),
        }
    }

    /// Run the full pipeline for one image payload.
    ///
    /// `payload` is the base64 data URL (or bare base64) the upload widget
    /// produced.
    pub async fn analyze(&self, payload: &str) -> Result<AnalysisReport, AppError> {
        let start_time = Instant::now();

        let image = decode_image_payload(payload)?;
        info!("decoded image payload ({} bytes)", image.len());

        let labels = self.client.submit_image(&image).await?;
        info!("received {} scored labels from model", labels.len());

        let interpretation = interpret(&labels, &self.catalog)?;
        info!(
            "interpreted top label '{}' as skin type '{}'",
            interpretation.top_label.label, interpretation.skin_type
        );

        let elapsed = start_time.elapsed();
        info!("analysis completed in {:.2?}", elapsed);

        Ok(AnalysisReport {
            labels,
            top_label: interpretation.top_label,
            skin_type: interpretation.skin_type,
            recommendation: interpretation.recommendation,
        })
    }
}

// A bad inbound payload is the caller's fault; every other gateway failure
// is an upstream failure.
impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::InvalidImage(reason) => AppError::MalformedPayload(reason),
            other => AppError::Upstream(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use httpmock::prelude::*;

    fn data_url(bytes: &[u8]) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(bytes))
    }

    fn service_for(server: &MockServer) -> AnalysisService {
        AnalysisService::new(InferenceClient::new(server.url("/model"), "test-token"))
    }

    #[tokio::test]
    async fn analyze_end_to_end_returns_interpreted_report() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/model")
                .header("authorization", "Bearer test-token");
            then.status(200).json_body(serde_json::json!([
                {"label": "Pimples", "score": 0.7},
                {"label": "Wrinkles", "score": 0.9}
            ]));
        });

        let service = service_for(&server);
        let report = service.analyze(&data_url(b"face-photo")).await.unwrap();

        mock.assert();
        assert_eq!(report.skin_type, SkinType::Dry, "Wrinkles wins on score");
        assert_eq!(report.top_label.label, "Wrinkles");
        assert_eq!(report.labels.len(), 2);
        assert_eq!(report.recommendation.skin_type, SkinType::Dry);
    }

    #[tokio::test]
    async fn analyze_forwards_decoded_image_bytes() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/model").body("face-photo");
            then.status(200)
                .json_body(serde_json::json!([{"label": "Healthy Skin", "score": 0.9}]));
        });

        let service = service_for(&server);
        let report = service.analyze(&data_url(b"face-photo")).await.unwrap();

        mock.assert();
        assert_eq!(report.skin_type, SkinType::Normal);
    }

    #[tokio::test]
    async fn analyze_rejects_malformed_payload_without_upstream_call() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/model");
            then.status(200).json_body(serde_json::json!([]));
        });

        let service = service_for(&server);
        let err = service.analyze("data:image/png;base64,???").await.unwrap_err();

        assert!(matches!(err, AppError::MalformedPayload(_)));
        mock.assert_hits(0);
    }

    #[tokio::test]
    async fn analyze_surfaces_empty_model_output() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/model");
            then.status(200).json_body(serde_json::json!([]));
        });

        let service = service_for(&server);
        let err = service.analyze(&data_url(b"face-photo")).await.unwrap_err();

        assert!(matches!(err, AppError::EmptyAnalysis));
    }

    #[tokio::test]
    async fn analyze_surfaces_upstream_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/model");
            then.status(500).body("boom");
        });

        let service = service_for(&server);
        let err = service.analyze(&data_url(b"face-photo")).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Upstream(GatewayError::UpstreamStatus { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn analyze_defaults_unknown_top_label_to_normal() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/model");
            then.status(200)
                .json_body(serde_json::json!([{"label": "Rosacea", "score": 0.99}]));
        });

        let service = service_for(&server);
        let report = service.analyze(&data_url(b"face-photo")).await.unwrap();

        assert_eq!(report.skin_type, SkinType::Normal);
    }
}
