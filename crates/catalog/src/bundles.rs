//! The static recommendation catalog.
//!
//! One bundle per skin-type category, held as plain struct fields so the
//! mapping is total by construction: there is no fallible lookup and no way
//! to leave a category without a bundle.

use crate::types::{Concern, ProductPicks, Recommendation, Routine, SkinType};

/// Total mapping from every [`SkinType`] to its recommendation bundle.
///
/// Built once at process start and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    oily: Recommendation,
    dry: Recommendation,
    combination: Recommendation,
    normal: Recommendation,
}

impl Catalog {
    /// Build the catalog with the fixed reference bundles.
    pub fn new() -> Self {
        Self {
            oily: oily_bundle(),
            dry: dry_bundle(),
            combination: combination_bundle(),
            normal: normal_bundle(),
        }
    }

    /// Look up the bundle for a category.
    ///
    /// Total over all four categories; returns the bundle unchanged.
    pub fn get(&self, skin_type: SkinType) -> &Recommendation {
        match skin_type {
            SkinType::Oily => &self.oily,
            SkinType::Dry => &self.dry,
            SkinType::Combination => &self.combination,
            SkinType::Normal => &self.normal,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Reference Bundles
// =============================================================================

fn steps(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn oily_bundle() -> Recommendation {
    Recommendation {
        skin_type: SkinType::Oily,
        concerns: vec![Concern::Acne, Concern::Oiliness],
        routine: Routine {
            morning: steps(&[
                "Gentle foaming cleanser",
                "Oil-free moisturizer",
                "Lightweight sunscreen",
            ]),
            evening: steps(&[
                "Double cleanse",
                "Salicylic acid treatment",
                "Oil-free night moisturizer",
            ]),
        },
        products: ProductPicks {
            cleanser: "Foaming cleanser with salicylic acid".to_string(),
            treatment: "Niacinamide serum".to_string(),
            moisturizer: "Oil-free gel moisturizer".to_string(),
            sunscreen: "Mattifying sunscreen SPF 50".to_string(),
        },
        tips: steps(&[
            "Use oil-free products",
            "Don't skip moisturizer",
            "Consider using clay masks weekly",
            "Avoid heavy, comedogenic products",
        ]),
    }
}

fn dry_bundle() -> Recommendation {
    Recommendation {
        skin_type: SkinType::Dry,
        concerns: vec![Concern::Dryness, Concern::Sensitivity],
        routine: Routine {
            morning: steps(&[
                "Gentle cream cleanser",
                "Hydrating serum",
                "Rich moisturizer",
                "Sunscreen",
            ]),
            evening: steps(&["Cream cleanser", "Hydrating treatment", "Rich night cream"]),
        },
        products: ProductPicks {
            cleanser: "Creamy, non-foaming cleanser".to_string(),
            treatment: "Hyaluronic acid serum".to_string(),
            moisturizer: "Rich cream with ceramides".to_string(),
            sunscreen: "Hydrating sunscreen SPF 50".to_string(),
        },
        tips: steps(&[
            "Avoid hot water when cleansing",
            "Layer hydrating products",
            "Use overnight masks",
            "Consider using facial oils",
        ]),
    }
}

fn combination_bundle() -> Recommendation {
    Recommendation {
        skin_type: SkinType::Combination,
        concerns: vec![Concern::Oiliness, Concern::Dryness],
        routine: Routine {
            morning: steps(&[
                "Gentle balanced cleanser",
                "Zone-specific treatments",
                "Lightweight moisturizer",
                "Sunscreen",
            ]),
            evening: steps(&[
                "Gentle cleanser",
                "Balanced treatment",
                "Zone-specific moisturizer",
            ]),
        },
        products: ProductPicks {
            cleanser: "Balanced pH cleanser".to_string(),
            treatment: "Dual-action serum".to_string(),
            moisturizer: "Lightweight lotion".to_string(),
            sunscreen: "Universal sunscreen SPF 50".to_string(),
        },
        tips: steps(&[
            "Use different products for different zones",
            "Focus on balancing skin",
            "Consider multi-masking",
            "Adjust routine seasonally",
        ]),
    }
}

fn normal_bundle() -> Recommendation {
    Recommendation {
        skin_type: SkinType::Normal,
        concerns: vec![Concern::Maintenance],
        routine: Routine {
            morning: steps(&[
                "Gentle cleanser",
                "Antioxidant serum",
                "Light moisturizer",
                "Sunscreen",
            ]),
            evening: steps(&["Gentle cleanser", "Treatment product", "Night moisturizer"]),
        },
        products: ProductPicks {
            cleanser: "Gentle pH-balanced cleanser".to_string(),
            treatment: "Vitamin C serum".to_string(),
            moisturizer: "Balanced moisturizer".to_string(),
            sunscreen: "Daily sunscreen SPF 50".to_string(),
        },
        tips: steps(&[
            "Maintain consistent routine",
            "Focus on prevention",
            "Regular exfoliation",
            "Stay hydrated",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_bundle_with_matching_skin_type() {
        let catalog = Catalog::new();
        for skin_type in SkinType::ALL {
            let bundle = catalog.get(skin_type);
            assert_eq!(
                bundle.skin_type, skin_type,
                "bundle for {skin_type} should carry its own category"
            );
        }
    }

    #[test]
    fn bundles_are_non_empty() {
        let catalog = Catalog::new();
        for skin_type in SkinType::ALL {
            let bundle = catalog.get(skin_type);
            assert!(!bundle.concerns.is_empty());
            assert!(!bundle.routine.morning.is_empty());
            assert!(!bundle.routine.evening.is_empty());
            assert!(!bundle.tips.is_empty());
        }
    }

    #[test]
    fn lookups_return_identical_data() {
        let catalog = Catalog::new();
        assert_eq!(catalog.get(SkinType::Dry), catalog.get(SkinType::Dry));
        assert_eq!(
            catalog.get(SkinType::Oily).products.treatment,
            "Niacinamide serum"
        );
    }
}
