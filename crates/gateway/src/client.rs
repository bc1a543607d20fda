//! The inference client: image bytes in, scored labels out.

use reqwest::Client;
use tracing::{debug, error, info};

use interpreter::ScoredLabel;

use crate::error::{GatewayError, Result};

/// Hosted face-problem classification model used by the application.
pub const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/pratikskarnik/face_problems_analyzer";

/// Client for the hosted classification service.
///
/// Wraps a [`reqwest::Client`] and the endpoint/credential pair. Cheap to
/// clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: Client,
    endpoint: String,
    api_token: String,
}

impl InferenceClient {
    /// Create a client for the given endpoint and bearer credential.
    pub fn new(endpoint: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            api_token: api_token.into(),
        }
    }

    /// Create a client for the default hosted model.
    pub fn with_default_endpoint(api_token: impl Into<String>) -> Self {
        Self::new(DEFAULT_MODEL_URL, api_token)
    }

    /// The endpoint this client submits images to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit raw image bytes for classification.
    ///
    /// The bytes are forwarded unmodified with an `Authorization: Bearer`
    /// header. Returns the model's scored labels in response order.
    ///
    /// # Errors
    /// * [`GatewayError::Transport`] if the service is unreachable
    /// * [`GatewayError::UpstreamStatus`] for a non-success response
    /// * [`GatewayError::Decode`] if the body is not a scored-label list
    pub async fn submit_image(&self, image: &[u8]) -> Result<Vec<ScoredLabel>> {
        debug!(
            "submitting {} byte image to {}",
            image.len(),
            self.endpoint
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .body(image.to_vec())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("inference service returned {}: {}", status, body);
            return Err(GatewayError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let labels: Vec<ScoredLabel> = serde_json::from_str(&body)?;
        info!("inference returned {} scored labels", labels.len());
        Ok(labels)
    }
}
