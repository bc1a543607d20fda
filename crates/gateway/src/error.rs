//! Error types for the inference gateway.

use thiserror::Error;

/// Errors that can occur when talking to the inference service or preparing
/// an image payload for it.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The service was unreachable or the request failed at transport level.
    #[error("failed to reach inference service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("inference service returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The inbound image payload was not valid base64 / data-URL content.
    #[error("invalid image payload: {0}")]
    InvalidImage(String),

    /// The service answered 2xx but the body was not a scored-label list.
    #[error("could not decode inference response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, GatewayError>;
