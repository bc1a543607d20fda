//! Interpretation pipeline for classification results.
//!
//! This crate turns the raw scored labels returned by the hosted
//! classification model into a skin-type category and its recommendation
//! bundle. The pipeline is a deterministic function chain:
//!
//! 1. [`select_top_label`] picks the highest-scoring label
//!    (first-encountered wins on ties)
//! 2. [`map_label_to_skin_type`] maps the label to a category via a fixed
//!    dictionary, defaulting to `normal` for unknown labels
//! 3. The catalog lookup attaches the bundle for that category
//!
//! Everything here is synchronous, side-effect-free, and completes in time
//! linear in the (small) number of labels.

pub mod error;
pub mod interpret;
pub mod types;

pub use error::InterpretError;
pub use interpret::{interpret, map_label_to_skin_type, select_top_label, Interpretation, LABEL_MAP};
pub use types::ScoredLabel;
