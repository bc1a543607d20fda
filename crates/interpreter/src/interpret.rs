//! The deterministic interpretation chain: top label → category → bundle.

use serde::Serialize;
use tracing::debug;

use catalog::{Catalog, Recommendation, SkinType};

use crate::error::{InterpretError, Result};
use crate::types::ScoredLabel;

/// Fixed dictionary from model labels to skin-type categories.
///
/// Lookup is exact and case-sensitive. Labels not listed here resolve to
/// [`SkinType::Normal`]; see [`map_label_to_skin_type`].
pub const LABEL_MAP: [(&str, SkinType); 6] = [
    ("Acne", SkinType::Oily),
    ("Dark Spots", SkinType::Combination),
    ("Pimples", SkinType::Oily),
    ("Healthy Skin", SkinType::Normal),
    ("Blackheads", SkinType::Oily),
    ("Wrinkles", SkinType::Dry),
];

/// The outcome of interpreting one list of classification results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    pub skin_type: SkinType,
    /// The winning classification result the category was derived from.
    pub top_label: ScoredLabel,
    pub recommendation: Recommendation,
}

/// Select the highest-scoring label from a non-empty result list.
///
/// Left-to-right reduction keeping the running maximum: on ties the
/// first-encountered maximum wins. The source order is not guaranteed sorted,
/// so anything other than a stable tie-break would make the output
/// non-deterministic across runs with identical input.
///
/// # Errors
/// Returns [`InterpretError::EmptyResults`] for an empty list.
pub fn select_top_label(results: &[ScoredLabel]) -> Result<&ScoredLabel> {
    results
        .iter()
        .reduce(|best, current| if current.score > best.score { current } else { best })
        .ok_or(InterpretError::EmptyResults)
}

/// Map a model label to a skin-type category via [`LABEL_MAP`].
///
/// Unknown labels silently resolve to [`SkinType::Normal`]. This is a
/// contractual safe default, not an error: the model's label set can drift
/// without breaking callers.
pub fn map_label_to_skin_type(label: &str) -> SkinType {
    LABEL_MAP
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, skin_type)| *skin_type)
        .unwrap_or(SkinType::Normal)
}

/// Run the full interpretation chain over one list of results.
///
/// Composition of [`select_top_label`], [`map_label_to_skin_type`], and the
/// catalog lookup. Only the empty-input error can surface; the catalog is
/// total over all categories.
pub fn interpret(results: &[ScoredLabel], catalog: &Catalog) -> Result<Interpretation> {
    let top = select_top_label(results)?;
    let skin_type = map_label_to_skin_type(&top.label);
    debug!(
        "top label '{}' (score {:.3}) mapped to skin type '{}'",
        top.label, top.score, skin_type
    );
    Ok(Interpretation {
        skin_type,
        top_label: top.clone(),
        recommendation: catalog.get(skin_type).clone(),
    })
}
