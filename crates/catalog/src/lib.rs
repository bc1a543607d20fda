//! Skincare reference data for the SkinAI analysis pipeline.
//!
//! This crate defines the skin-type categories and the static recommendation
//! catalog keyed by them. The catalog is pure data: it is built once at
//! process start, never mutated, and every category has exactly one bundle,
//! so lookups are total and infallible.

pub mod bundles;
pub mod types;

pub use bundles::Catalog;
pub use types::{Concern, ParseSkinTypeError, ProductPicks, Recommendation, Routine, SkinType};
