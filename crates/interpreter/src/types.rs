//! Wire types shared with the inference gateway.

use serde::{Deserialize, Serialize};

/// One classification result from the hosted model: a textual label and a
/// confidence score in `[0, 1]`.
///
/// One list of these is produced per analysis request and discarded after
/// interpretation. The list order carries no meaning; scores are not required
/// to be sorted or to sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredLabel {
    pub label: String,
    pub score: f32,
}

impl ScoredLabel {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}
