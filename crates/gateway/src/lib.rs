//! HTTP client for the hosted image-classification model.
//!
//! This crate is the only network boundary of the system. It forwards raw
//! image bytes to the inference endpoint with a bearer credential and decodes
//! the returned scored-label list, so the interpretation core never touches
//! transport concerns. It also carries the data-URL decoding helper the proxy
//! route uses on inbound payloads.

pub mod client;
pub mod error;
pub mod image;

pub use client::{InferenceClient, DEFAULT_MODEL_URL};
pub use error::GatewayError;
pub use image::decode_image_payload;
