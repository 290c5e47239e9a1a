use super::common::{plain_metrics, report};
use crate::pipeline::evaluation::Dimension;
use crate::pipeline::feedback::strengths::build;
use crate::pipeline::feedback::{StrengthEntry, StrengthTier};

fn areas(strengths: &[StrengthEntry]) -> Vec<&str> {
    strengths.iter().map(|entry| entry.area.as_str()).collect()
}

#[test]
fn plain_metrics_add_no_derived_strengths() {
    assert!(build(&plain_metrics(), &report(&[])).is_empty());
}

#[test]
fn dimensions_at_cut_are_strengths() {
    let evaluation = report(&[
        (Dimension::Structure, 0.69),
        (Dimension::Clarity, 0.7),
        (Dimension::Depth, 0.85),
    ]);
    let strengths = build(&plain_metrics(), &evaluation);

    assert_eq!(areas(&strengths), vec!["Depth", "Clarity"]);
    assert_eq!(strengths[0].tier, StrengthTier::High);
    assert_eq!(strengths[1].tier, StrengthTier::Moderate);
    assert_eq!(strengths[1].description, "Clarity feedback");
}

#[test]
fn length_strength_starts_above_150_words() {
    let mut metrics = plain_metrics();
    metrics.word_count = 150;
    assert!(build(&metrics, &report(&[])).is_empty());

    metrics.word_count = 151;
    let strengths = build(&metrics, &report(&[]));
    assert_eq!(areas(&strengths), vec!["Length & Detail"]);
    assert!((strengths[0].score - 0.302).abs() < 1e-9);

    metrics.word_count = 900;
    let strengths = build(&metrics, &report(&[]));
    assert_eq!(strengths[0].score, 1.0);
    assert_eq!(strengths[0].tier, StrengthTier::High);
}

#[test]
fn readability_strength_starts_above_60() {
    let mut metrics = plain_metrics();
    metrics.readability_score = 60.0;
    assert!(build(&metrics, &report(&[])).is_empty());

    metrics.readability_score = 60.5;
    let strengths = build(&metrics, &report(&[]));
    assert_eq!(areas(&strengths), vec!["Readability"]);
    assert!((strengths[0].score - 0.605).abs() < 1e-9);
}

#[test]
fn vocabulary_strength_starts_above_point_six() {
    let mut metrics = plain_metrics();
    metrics.vocabulary.diversity = 0.6;
    assert!(build(&metrics, &report(&[])).is_empty());

    metrics.vocabulary.diversity = 0.61;
    let strengths = build(&metrics, &report(&[]));
    assert_eq!(areas(&strengths), vec!["Vocabulary"]);
    assert_eq!(strengths[0].tier, StrengthTier::Moderate);
}

#[test]
fn sorted_by_tier_then_descending_score() {
    let mut metrics = plain_metrics();
    metrics.word_count = 200;
    metrics.readability_score = 72.0;
    let evaluation = report(&[(Dimension::Structure, 0.9), (Dimension::Clarity, 0.95)]);

    let strengths = build(&metrics, &evaluation);
    assert_eq!(
        areas(&strengths),
        vec!["Clarity", "Structure", "Readability", "Length & Detail"]
    );
}
