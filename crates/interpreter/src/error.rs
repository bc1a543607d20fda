//! Error types for the interpretation pipeline.

use thiserror::Error;

/// Errors that can occur while interpreting classification results.
///
/// Note the deliberate asymmetry in the pipeline's contract: an empty result
/// list is an error, while an unknown label is not (it resolves to the
/// `normal` default category).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    /// The model returned zero scored labels, so no top label exists.
    #[error("classification returned no results")]
    EmptyResults,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, InterpretError>;
