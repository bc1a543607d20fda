//! Core domain types for skin analysis results and recommendations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Skin-type Category
// =============================================================================

/// The four coarse skin-type buckets a classification result resolves to.
///
/// Derived per request from the model's top label, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Oily,
    Dry,
    Combination,
    Normal,
}

impl SkinType {
    /// All categories, in catalog order. Useful for exhaustive iteration.
    pub const ALL: [SkinType; 4] = [
        SkinType::Oily,
        SkinType::Dry,
        SkinType::Combination,
        SkinType::Normal,
    ];

    /// Lowercase wire/display name for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Oily => "oily",
            SkinType::Dry => "dry",
            SkinType::Combination => "combination",
            SkinType::Normal => "normal",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a skin type from user input fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown skin type '{0}', expected one of: oily, dry, combination, normal")]
pub struct ParseSkinTypeError(pub String);

impl FromStr for SkinType {
    type Err = ParseSkinTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oily" => Ok(SkinType::Oily),
            "dry" => Ok(SkinType::Dry),
            "combination" => Ok(SkinType::Combination),
            "normal" => Ok(SkinType::Normal),
            other => Err(ParseSkinTypeError(other.to_string())),
        }
    }
}

// =============================================================================
// Recommendation Bundle
// =============================================================================

/// Concern tags attached to a recommendation bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Concern {
    Acne,
    Dryness,
    Oiliness,
    Sensitivity,
    Maintenance,
}

/// Ordered morning and evening routine steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    pub morning: Vec<String>,
    pub evening: Vec<String>,
}

/// One product suggestion per slot of a basic routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPicks {
    pub cleanser: String,
    pub treatment: String,
    pub moisturizer: String,
    pub sunscreen: String,
}

/// The full recommendation bundle for one skin-type category.
///
/// Immutable reference data: bundles are defined once in the [`Catalog`]
/// and looked up by category, never computed or mutated.
///
/// [`Catalog`]: crate::Catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub skin_type: SkinType,
    pub concerns: Vec<Concern>,
    pub routine: Routine,
    pub products: ProductPicks,
    pub tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skin_type_round_trips_through_from_str() {
        for skin_type in SkinType::ALL {
            let parsed: SkinType = skin_type.as_str().parse().unwrap();
            assert_eq!(parsed, skin_type);
        }
    }

    #[test]
    fn skin_type_rejects_unknown_input() {
        let err = "greasy".parse::<SkinType>().unwrap_err();
        assert_eq!(err, ParseSkinTypeError("greasy".to_string()));
    }

    #[test]
    fn skin_type_serializes_lowercase() {
        let json = serde_json::to_string(&SkinType::Combination).unwrap();
        assert_eq!(json, "\"combination\"");
    }
}
