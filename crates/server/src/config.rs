//! Environment-based server configuration.

use std::env;

use anyhow::{Context, Result};
use tracing::warn;

use gateway::DEFAULT_MODEL_URL;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the proxy listens on.
    pub port: u16,
    /// Endpoint of the hosted classification model.
    pub model_url: String,
    /// Bearer credential for the model endpoint.
    pub api_token: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `SKINAI_PORT` and `SKINAI_MODEL_URL` fall back to defaults;
    /// `HUGGING_FACE_API_KEY` is required.
    pub fn load() -> Result<Self> {
        let port = match env::var("SKINAI_PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("invalid SKINAI_PORT value: {value}"))?,
            Err(_) => {
                warn!("SKINAI_PORT not set, using default: 3000");
                3000
            }
        };

        let model_url = env::var("SKINAI_MODEL_URL").unwrap_or_else(|_| {
            warn!("SKINAI_MODEL_URL not set, using hosted default");
            DEFAULT_MODEL_URL.to_string()
        });

        let api_token = env::var("HUGGING_FACE_API_KEY")
            .context("HUGGING_FACE_API_KEY must be set to reach the inference service")?;

        Ok(Self {
            port,
            model_url,
            api_token,
        })
    }
}
