//! Integration tests for the interpretation pipeline.
//!
//! These tests exercise the full chain (top-label selection, label mapping,
//! catalog lookup) over realistic model outputs.

use catalog::{Catalog, SkinType};
use interpreter::{interpret, InterpretError, ScoredLabel};

fn model_output(pairs: &[(&str, f32)]) -> Vec<ScoredLabel> {
    pairs
        .iter()
        .map(|(label, score)| ScoredLabel::new(*label, *score))
        .collect()
}

#[test]
fn full_pipeline_on_realistic_model_output() {
    let catalog = Catalog::new();

    // Unsorted scores, the way the hosted model actually returns them.
    let results = model_output(&[
        ("Dark Spots", 0.12),
        ("Acne", 0.51),
        ("Healthy Skin", 0.08),
        ("Blackheads", 0.22),
        ("Wrinkles", 0.07),
    ]);

    let outcome = interpret(&results, &catalog).unwrap();

    assert_eq!(outcome.skin_type, SkinType::Oily);
    assert_eq!(outcome.top_label.label, "Acne");
    assert_eq!(outcome.recommendation.skin_type, SkinType::Oily);
    assert!(!outcome.recommendation.routine.morning.is_empty());
}

#[test]
fn every_dictionary_label_resolves_to_its_bundle() {
    let catalog = Catalog::new();

    let cases = [
        ("Acne", SkinType::Oily),
        ("Dark Spots", SkinType::Combination),
        ("Pimples", SkinType::Oily),
        ("Healthy Skin", SkinType::Normal),
        ("Blackheads", SkinType::Oily),
        ("Wrinkles", SkinType::Dry),
    ];

    for (label, expected) in cases {
        let results = model_output(&[(label, 0.9), ("Healthy Skin", 0.1)]);
        let outcome = interpret(&results, &catalog).unwrap();
        assert_eq!(outcome.skin_type, expected, "label '{label}'");
        assert_eq!(outcome.recommendation.skin_type, expected);
    }
}

#[test]
fn empty_model_output_is_the_only_failure() {
    let catalog = Catalog::new();

    assert_eq!(
        interpret(&[], &catalog).unwrap_err(),
        InterpretError::EmptyResults
    );

    // A single unknown label still succeeds via the normal default.
    let results = model_output(&[("Completely New Label", 1.0)]);
    let outcome = interpret(&results, &catalog).unwrap();
    assert_eq!(outcome.skin_type, SkinType::Normal);
}

#[test]
fn repeated_interpretation_yields_identical_output() {
    let catalog = Catalog::new();
    let results = model_output(&[("Pimples", 0.7), ("Wrinkles", 0.9)]);

    let runs: Vec<_> = (0..3).map(|_| interpret(&results, &catalog).unwrap()).collect();

    assert!(runs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(runs[0].skin_type, SkinType::Dry);
}
