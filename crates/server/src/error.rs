//! HTTP-facing error type for the analysis proxy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use gateway::GatewayError;
use interpreter::InterpretError;

/// Request-level failures, mapped onto HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// The request body carried an unusable image payload.
    #[error("malformed image payload: {0}")]
    MalformedPayload(String),

    /// The model answered successfully but returned zero labels.
    #[error("classification returned no results")]
    EmptyAnalysis,

    /// The inference service was unreachable or answered with an error.
    #[error("upstream inference failure: {0}")]
    Upstream(GatewayError),
}

impl From<InterpretError> for AppError {
    fn from(err: InterpretError) -> Self {
        match err {
            InterpretError::EmptyResults => AppError::EmptyAnalysis,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            AppError::EmptyAnalysis => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };

        (status, self.to_string()).into_response()
    }
}
